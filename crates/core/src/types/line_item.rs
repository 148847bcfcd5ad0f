//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{FigurineId, Price};

/// One product entry in the cart.
///
/// The descriptive fields (`name`, `origin`, `image`) are denormalized from
/// the catalog at the time the item is added, so a cart snapshot renders
/// without a catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog identifier; unique within a cart.
    pub id: FigurineId,
    /// Display name of the figurine.
    pub name: String,
    /// Series or franchise the figurine belongs to.
    pub origin: String,
    /// Unit price at the time the item was added.
    pub price: Price,
    /// Product image URL.
    pub image: String,
    /// Number of units; stored items always have `quantity >= 1`.
    pub quantity: u32,
}

impl LineItem {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.amount() * Decimal::from(self.quantity)
    }
}

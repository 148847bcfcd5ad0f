//! Core types for Figurine Market.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod line_item;
pub mod notice;
pub mod price;

pub use id::FigurineId;
pub use line_item::LineItem;
pub use notice::{Notice, NoticeKind};
pub use price::{Price, PriceError};

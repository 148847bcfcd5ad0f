//! The cart state container and its mutation operations.
//!
//! One [`CartStore`] exists per client session. It is constructed over a
//! [`SnapshotStore`], hydrated once at startup, then mutated exclusively
//! through the operations below. Every state-changing operation mirrors the
//! full line-item sequence to the snapshot store before returning.

use rust_decimal::Decimal;
use serde::Serialize;

use figurine_market_core::{FigurineId, LineItem, Notice};

use crate::notify::Notifier;
use crate::storage::SnapshotStore;

/// Snapshot key under which the line-item sequence is stored.
pub const CART_DATA_KEY: &str = "cartData";

/// The full in-memory cart: ordered line items plus a cached total.
///
/// `total` is a cache of `sum(price * quantity)` as of the last
/// [`CartStore::recompute_total`] call. It is deliberately stale between a
/// mutation and the next recompute; callers that render the total recompute
/// first. The snapshot format carries items only, never the total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartState {
    items: Vec<LineItem>,
    total: Decimal,
}

impl CartState {
    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The cached total as of the last recompute.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find(&self, id: &FigurineId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }
}

/// The cart store: in-memory state, durable mirroring, notice emission.
///
/// Mutation is serialized through `&mut self`; a host that dispatches from
/// multiple threads puts the store behind a `Mutex`. Operations never panic
/// and never return errors - refused operations report through the notice
/// channel and leave the item sequence untouched.
pub struct CartStore<S: SnapshotStore> {
    state: CartState,
    storage: S,
    notifier: Option<Box<dyn Notifier + Send>>,
}

impl<S: SnapshotStore> CartStore<S> {
    /// Create an empty, not-yet-hydrated store over `storage`.
    pub fn new(storage: S) -> Self {
        Self {
            state: CartState::default(),
            storage,
            notifier: None,
        }
    }

    /// Attach a notice observer.
    #[must_use]
    pub fn with_notifier(mut self, notifier: impl Notifier + Send + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    /// Current cart state.
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// The underlying snapshot store.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the persisted line-item sequence, called once at startup.
    ///
    /// Missing or malformed snapshots hydrate to an empty cart; this never
    /// fails. The cached total is left at its current value (zero for a
    /// freshly constructed store) until the next recompute.
    pub fn hydrate(&mut self) -> &CartState {
        self.state.items = match self.storage.get(CART_DATA_KEY) {
            Ok(Some(value)) => serde_json::from_value(value).unwrap_or_else(|e| {
                tracing::warn!("discarding malformed cart snapshot: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("failed to read cart snapshot: {e}");
                Vec::new()
            }
        };
        &self.state
    }

    /// Add `item` to the cart.
    ///
    /// If an item with the same ID is already present its quantity is
    /// incremented by the supplied amount (the stored descriptive fields are
    /// kept); otherwise the item is appended at the end of the sequence. An
    /// item with quantity zero is refused, since stored quantities are always
    /// at least one.
    pub fn add_item(&mut self, item: LineItem) -> &CartState {
        if item.quantity == 0 {
            self.notify(Notice::error("Quantity must be at least 1"));
            return &self.state;
        }

        match self.state.find(&item.id) {
            Some(pos) => {
                if let Some(existing) = self.state.items.get_mut(pos) {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                self.persist();
                self.notify(Notice::success(format!(
                    "Updated! {} quantity added to cart",
                    item.name
                )));
            }
            None => {
                let name = item.name.clone();
                self.state.items.push(item);
                self.persist();
                self.notify(Notice::success(format!("Saved! {name} added to cart")));
            }
        }
        &self.state
    }

    /// Set the quantity of the item with `id` to exactly `quantity`.
    ///
    /// A quantity of zero removes the item instead of storing a non-positive
    /// value - including when the item sits at position 0. An unknown ID is
    /// reported through the notice channel and leaves the state unchanged.
    pub fn update_quantity(&mut self, id: &FigurineId, quantity: u32) -> &CartState {
        let Some(pos) = self.state.find(id) else {
            self.notify(Notice::error("Item doesn't exist in the cart"));
            return &self.state;
        };

        if quantity == 0 {
            self.state.items.remove(pos);
            self.persist();
            self.notify(Notice::success("Item removed from the cart"));
        } else {
            if let Some(item) = self.state.items.get_mut(pos) {
                item.quantity = quantity;
            }
            self.persist();
            self.notify(Notice::success("Quantity updated"));
        }
        &self.state
    }

    /// Remove the item with `id` from the cart.
    ///
    /// An unknown ID is reported through the notice channel and leaves the
    /// items unchanged. The snapshot is rewritten on both branches.
    pub fn remove_item(&mut self, id: &FigurineId) -> &CartState {
        match self.state.find(id) {
            Some(pos) => {
                self.state.items.remove(pos);
                self.notify(Notice::success("Item removed from the cart"));
            }
            None => {
                self.notify(Notice::error("Item not found in the cart"));
            }
        }
        self.persist();
        &self.state
    }

    /// Clear the cart to the empty sequence and persist it.
    ///
    /// The cached total is left untouched until the next recompute.
    pub fn reset_cart(&mut self) -> &CartState {
        self.state.items.clear();
        self.persist();
        &self.state
    }

    /// Recompute the cached total from the current items.
    ///
    /// Emits an informational notice carrying the computed value. The total
    /// is not persisted; the snapshot format carries items only.
    pub fn recompute_total(&mut self) -> &CartState {
        self.state.total = self.state.items.iter().map(LineItem::line_total).sum();
        self.notify(Notice::info(format!(
            "Current total: ${:.2}",
            self.state.total
        )));
        &self.state
    }

    /// Mirror the full line-item sequence to the snapshot store.
    ///
    /// Fire-and-forget: failures are logged, the in-memory state stays
    /// authoritative, and the mutation that triggered the write is not
    /// rolled back.
    fn persist(&mut self) {
        match serde_json::to_value(&self.state.items) {
            Ok(value) => {
                if let Err(e) = self.storage.set(CART_DATA_KEY, &value) {
                    tracing::warn!("failed to persist cart snapshot: {e}");
                } else {
                    tracing::debug!(items = self.state.items.len(), "cart snapshot persisted");
                }
            }
            Err(e) => tracing::warn!("failed to serialize cart snapshot: {e}"),
        }
    }

    fn notify(&self, notice: Notice) {
        if let Some(notifier) = &self.notifier {
            notifier.notify(&notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rust_decimal_macros::dec;
    use serde_json::{Value as JsonValue, json};

    use figurine_market_core::{NoticeKind, Price};

    use super::*;
    use crate::error::StorageError;
    use crate::storage::MemoryStore;

    /// Notifier that records every emitted notice.
    #[derive(Default, Clone)]
    struct Recorder(Arc<Mutex<Vec<Notice>>>);

    impl Notifier for Recorder {
        fn notify(&self, notice: &Notice) {
            self.0.lock().expect("recorder lock").push(notice.clone());
        }
    }

    impl Recorder {
        fn last(&self) -> Notice {
            self.0
                .lock()
                .expect("recorder lock")
                .last()
                .cloned()
                .expect("a notice")
        }

        fn count(&self) -> usize {
            self.0.lock().expect("recorder lock").len()
        }
    }

    /// Snapshot store that counts writes.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        writes: usize,
    }

    impl SnapshotStore for CountingStore {
        fn get(&self, key: &str) -> Result<Option<JsonValue>, StorageError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &JsonValue) -> Result<(), StorageError> {
            self.writes += 1;
            self.inner.set(key, value)
        }
    }

    /// Snapshot store whose writes always fail.
    struct FailingStore;

    impl SnapshotStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<JsonValue>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &JsonValue) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::other("disk full")))
        }
    }

    fn item(id: &str, price: Decimal, quantity: u32) -> LineItem {
        LineItem {
            id: FigurineId::new(id),
            name: format!("Figurine {id}"),
            origin: "Yokai Parade".to_string(),
            price: Price::new(price).expect("valid price"),
            image: format!("https://img.example.com/{id}.png"),
            quantity,
        }
    }

    fn store_with_recorder() -> (CartStore<MemoryStore>, Recorder) {
        let recorder = Recorder::default();
        let store = CartStore::new(MemoryStore::new()).with_notifier(recorder.clone());
        (store, recorder)
    }

    // =========================================================================
    // add_item
    // =========================================================================

    #[test]
    fn test_add_distinct_ids_appends_in_insertion_order() {
        let (mut store, _) = store_with_recorder();
        store.add_item(item("a", dec!(10), 1));
        store.add_item(item("b", dec!(5), 2));
        store.add_item(item("c", dec!(1), 3));

        let ids: Vec<&str> = store.state().items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_add_same_id_increments_quantity() {
        let (mut store, recorder) = store_with_recorder();
        store.add_item(item("x", dec!(10), 2));
        store.add_item(item("x", dec!(10), 3));

        assert_eq!(store.state().len(), 1);
        let only = store.state().items().first().expect("one item");
        assert_eq!(only.quantity, 5);
        assert_eq!(recorder.last().kind, NoticeKind::Success);
        assert!(recorder.last().text.contains("quantity added"));
    }

    #[test]
    fn test_add_zero_quantity_is_refused() {
        let recorder = Recorder::default();
        let mut store = CartStore::new(CountingStore::default()).with_notifier(recorder.clone());

        store.add_item(item("x", dec!(10), 0));

        assert!(store.state().is_empty());
        assert!(recorder.last().is_error());
        assert_eq!(store.storage().writes, 0);
    }

    #[test]
    fn test_add_persists_full_sequence() {
        let (mut store, _) = store_with_recorder();
        store.add_item(item("a", dec!(10), 2));

        let snapshot = store
            .storage()
            .get(CART_DATA_KEY)
            .expect("get")
            .expect("a snapshot");
        let items: Vec<LineItem> = serde_json::from_value(snapshot).expect("line items");
        assert_eq!(items, store.state().items());
    }

    // =========================================================================
    // update_quantity
    // =========================================================================

    #[test]
    fn test_update_quantity_replaces_not_increments() {
        let (mut store, recorder) = store_with_recorder();
        store.add_item(item("x", dec!(10), 2));
        store.update_quantity(&FigurineId::new("x"), 7);

        assert_eq!(store.state().items().first().expect("item").quantity, 7);
        assert_eq!(recorder.last().text, "Quantity updated");
    }

    #[test]
    fn test_update_quantity_zero_removes_item_at_index_zero() {
        let (mut store, recorder) = store_with_recorder();
        store.add_item(item("first", dec!(10), 1));
        store.add_item(item("second", dec!(5), 1));

        store.update_quantity(&FigurineId::new("first"), 0);

        assert_eq!(store.state().len(), 1);
        assert_eq!(
            store.state().items().first().expect("item").id.as_str(),
            "second"
        );
        assert_eq!(recorder.last().text, "Item removed from the cart");
    }

    #[test]
    fn test_update_quantity_absent_id_leaves_state_unchanged() {
        let recorder = Recorder::default();
        let mut store = CartStore::new(CountingStore::default()).with_notifier(recorder.clone());
        store.add_item(item("x", dec!(10), 2));
        let before = store.state().clone();
        let writes_before = store.storage().writes;

        store.update_quantity(&FigurineId::new("missing"), 5);

        assert_eq!(store.state(), &before);
        assert_eq!(store.storage().writes, writes_before);
        assert_eq!(recorder.last().text, "Item doesn't exist in the cart");
        assert!(recorder.last().is_error());
    }

    // =========================================================================
    // remove_item
    // =========================================================================

    #[test]
    fn test_remove_existing_item_shrinks_by_one() {
        let (mut store, recorder) = store_with_recorder();
        store.add_item(item("a", dec!(10), 1));
        store.add_item(item("b", dec!(5), 1));

        store.remove_item(&FigurineId::new("a"));

        assert_eq!(store.state().len(), 1);
        assert_eq!(recorder.last().kind, NoticeKind::Success);
    }

    #[test]
    fn test_remove_absent_item_still_persists() {
        let recorder = Recorder::default();
        let mut store = CartStore::new(CountingStore::default()).with_notifier(recorder.clone());
        store.add_item(item("a", dec!(10), 1));
        let writes_before = store.storage().writes;

        store.remove_item(&FigurineId::new("missing"));

        assert_eq!(store.state().len(), 1);
        assert_eq!(store.storage().writes, writes_before + 1);
        assert!(recorder.last().is_error());
    }

    // =========================================================================
    // reset_cart / recompute_total
    // =========================================================================

    #[test]
    fn test_reset_clears_items_but_not_total() {
        let (mut store, _) = store_with_recorder();
        store.add_item(item("a", dec!(10), 2));
        store.add_item(item("b", dec!(5), 3));
        store.recompute_total();
        assert_eq!(store.state().total(), dec!(35));

        store.reset_cart();

        assert!(store.state().is_empty());
        // Stale by design until the next recompute.
        assert_eq!(store.state().total(), dec!(35));

        store.recompute_total();
        assert_eq!(store.state().total(), dec!(0));
    }

    #[test]
    fn test_recompute_total_sums_price_times_quantity() {
        let (mut store, recorder) = store_with_recorder();
        store.add_item(item("a", dec!(10), 2));
        store.add_item(item("b", dec!(5), 3));

        store.recompute_total();

        assert_eq!(store.state().total(), dec!(35));
        let notice = recorder.last();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert!(notice.text.contains("35.00"), "notice was: {}", notice.text);
    }

    #[test]
    fn test_recompute_total_does_not_persist() {
        let mut store = CartStore::new(CountingStore::default());
        store.add_item(item("a", dec!(10), 2));
        let writes_before = store.storage().writes;

        store.recompute_total();

        assert_eq!(store.storage().writes, writes_before);
    }

    #[test]
    fn test_mutations_leave_total_stale() {
        let (mut store, _) = store_with_recorder();
        store.add_item(item("a", dec!(10), 2));
        assert_eq!(store.state().total(), dec!(0));
    }

    // =========================================================================
    // hydrate
    // =========================================================================

    #[test]
    fn test_hydrate_restores_persisted_sequence() {
        let items = vec![item("a", dec!(10), 2), item("b", dec!(5), 3)];
        let mut storage = MemoryStore::new();
        storage
            .set(CART_DATA_KEY, &serde_json::to_value(&items).expect("value"))
            .expect("set");

        let mut store = CartStore::new(storage);
        store.hydrate();

        assert_eq!(store.state().items(), items.as_slice());
    }

    #[test]
    fn test_hydrate_missing_snapshot_is_empty() {
        let mut store = CartStore::new(MemoryStore::new());
        store.hydrate();
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_hydrate_non_array_snapshot_is_empty() {
        let mut storage = MemoryStore::new();
        storage
            .set(CART_DATA_KEY, &json!({"cartItems": [], "total": 12}))
            .expect("set");

        let mut store = CartStore::new(storage);
        store.hydrate();

        assert!(store.state().is_empty());
    }

    #[test]
    fn test_hydrate_wrongly_shaped_array_is_empty() {
        let mut storage = MemoryStore::new();
        storage
            .set(CART_DATA_KEY, &json!([{"id": "a"}, 42]))
            .expect("set");

        let mut store = CartStore::new(storage);
        store.hydrate();

        assert!(store.state().is_empty());
    }

    // =========================================================================
    // persistence failure
    // =========================================================================

    #[test]
    fn test_failed_persist_does_not_roll_back_mutation() {
        let recorder = Recorder::default();
        let mut store = CartStore::new(FailingStore).with_notifier(recorder.clone());

        store.add_item(item("a", dec!(10), 2));

        assert_eq!(store.state().len(), 1);
        // The operation's own notice is still a success; persistence is
        // fire-and-forget.
        assert_eq!(recorder.last().kind, NoticeKind::Success);
        assert_eq!(recorder.count(), 1);
    }
}

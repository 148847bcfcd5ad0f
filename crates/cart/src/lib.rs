//! Figurine Market Cart - client-side shopping cart store.
//!
//! This crate owns the in-memory cart for one client session: an ordered
//! collection of line items mirrored to a durable key-value snapshot on every
//! mutation. The UI layer dispatches operations and renders the returned
//! state; it never touches the snapshot directly.
//!
//! # Architecture
//!
//! - [`CartStore`] - the state container and its mutation operations
//! - [`SnapshotStore`] - the durable key-value seam, with file-backed and
//!   in-memory implementations
//! - [`Notifier`] - optional observer hook for user-facing outcome notices
//!
//! The store is synchronous and single-writer: every operation takes
//! `&mut self` and runs to completion, so concurrent dispatch is serialized
//! by ownership. Persistence failures are logged and never propagated - the
//! in-memory state stays authoritative.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod notify;
pub mod storage;
pub mod store;

pub use error::StorageError;
pub use notify::{Notifier, TracingNotifier};
pub use storage::{FileStore, MemoryStore, SnapshotStore};
pub use store::{CART_DATA_KEY, CartState, CartStore};

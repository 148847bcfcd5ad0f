//! Integration tests for Figurine Market.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p figurine-market-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_sessions` - Cart lifecycle across simulated client sessions
//!   backed by the file snapshot store
//! - `cart_snapshots` - Snapshot durability, replacement, and corruption
//!   recovery on disk

use std::path::PathBuf;

use uuid::Uuid;

/// A throwaway data directory for one test's file-backed snapshot store.
///
/// The directory is removed on drop; a leaked directory from a crashed test
/// lands under the system temp dir and is harmless.
pub struct TempDataDir(PathBuf);

impl TempDataDir {
    #[must_use]
    pub fn new() -> Self {
        Self(std::env::temp_dir().join(format!("fm-cart-it-{}", Uuid::new_v4())))
    }

    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.0
    }
}

impl Default for TempDataDir {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TempDataDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

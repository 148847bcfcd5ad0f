//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `FM_CART_DATA_DIR` - Directory for the file-backed cart snapshot
//!   (default: `./cart-data`)
//! - `RUST_LOG` - Standard tracing env-filter

use std::path::PathBuf;

const DATA_DIR_VAR: &str = "FM_CART_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "./cart-data";

/// Directory for the file-backed snapshot store.
#[must_use]
pub fn data_dir() -> PathBuf {
    std::env::var(DATA_DIR_VAR).map_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from)
}

//! Figurine Market Core - Shared types library.
//!
//! This crate provides common types used across all Figurine Market components:
//! - `cart` - Client-side shopping cart state container
//! - `cli` - Command-line front end for driving a cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus line
//!   items and the notice (notification) types emitted by cart operations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

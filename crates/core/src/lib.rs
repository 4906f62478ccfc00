//! Vitrine Core - Shared types library.
//!
//! This crate provides the types shared by every Vitrine component:
//! - `storefront` - Cart store, catalog browsing, and checkout simulation
//! - `cli` - Command-line front end that drives the storefront screens
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no timers, no logging.
//! Catalog records defined here are immutable once loaded and are shared
//! by reference with the cart.
//!
//! # Modules
//!
//! - [`types`] - Product records, identifiers, prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

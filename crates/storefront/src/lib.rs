//! Vitrine Storefront library.
//!
//! The storefront is a client-side shopping demo: browse a static catalog,
//! pick a size and color, fill a cart, and check out against a simulated
//! order processor. Nothing is persisted; a new [`CartStore`] starts empty.
//!
//! # Modules
//!
//! - [`cart`] - Cart store, line items, intents, and the pure reducer
//! - [`catalog`] - Read-only product catalog with filtering and sorting
//! - [`selection`] - Size/color validation performed before adding to cart
//! - [`checkout`] - Order summary pricing and the simulated order processor
//! - [`views`] - Display-ready snapshots of carts and products
//! - [`config`] - Environment configuration
//! - [`error`] - Application error type

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod selection;
pub mod views;

pub use cart::{
    CartIntent, CartLine, CartState, CartStore, LineKey, SubscriptionId, max_quantity, reduce,
};
pub use catalog::{Catalog, CatalogError, CatalogQuery, SortOrder};
pub use checkout::{Checkout, CheckoutError, OrderConfirmation, OrderSummary, ShippingDetails};
pub use config::{ConfigError, PricingConfig, StorefrontConfig};
pub use error::{AppError, Result};
pub use selection::{SelectionError, add_selected, validate_selection};

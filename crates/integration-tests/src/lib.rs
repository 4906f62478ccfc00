//! Integration tests for Vitrine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vitrine-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_store` - Cart intents through the store, end to end
//! - `cart_properties` - Property tests for the cart invariants
//! - `checkout_flow` - Catalog to cart to placed order

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use rust_decimal::Decimal;
use vitrine_core::{Product, ProductId};
use vitrine_storefront::CartState;

/// A minimal in-stock product with sizes S/M/L and colors Red/White.
#[must_use]
pub fn product(id: &str, cents: i64) -> Arc<Product> {
    Arc::new(Product {
        id: ProductId::from(id),
        name: format!("Test product {id}"),
        description: "Fixture".to_string(),
        price: Decimal::new(cents, 2),
        original_price: None,
        images: Vec::new(),
        category: "Fixtures".to_string(),
        sizes: vec!["S".to_string(), "M".to_string(), "L".to_string()],
        colors: vec!["Red".to_string(), "White".to_string()],
        brand: "Test".to_string(),
        rating: 0.0,
        review_count: 0,
        in_stock: true,
        featured: false,
        tags: Vec::new(),
    })
}

/// Recompute the cart's derived fields from its lines.
#[must_use]
pub fn expected_totals(state: &CartState) -> (Decimal, u64) {
    state.lines().iter().fold((Decimal::ZERO, 0), |(total, count), line| {
        let quantity = Decimal::from(line.quantity());
        (
            total.saturating_add(line.product().price.saturating_mul(quantity)),
            count + u64::from(line.quantity()),
        )
    })
}

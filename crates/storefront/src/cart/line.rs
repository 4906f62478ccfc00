//! Cart line items and their identity key.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use vitrine_core::{Product, ProductId};

/// Composite identity of a cart line: product, size, and color.
///
/// Matching is exact. A missing size or color only matches a line that also
/// has none; it is not a wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub product_id: ProductId,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl LineKey {
    /// Build a key from borrowed parts.
    #[must_use]
    pub fn new(product_id: impl Into<ProductId>, size: Option<&str>, color: Option<&str>) -> Self {
        Self {
            product_id: product_id.into(),
            size: size.map(str::to_owned),
            color: color.map(str::to_owned),
        }
    }
}

/// One row in the cart.
///
/// The product is shared with the catalog, not copied.
#[derive(Debug, Clone)]
pub struct CartLine {
    product: Arc<Product>,
    quantity: u32,
    size: Option<String>,
    color: Option<String>,
}

impl CartLine {
    /// A fresh line with quantity 1.
    pub(crate) fn new(
        product: Arc<Product>,
        size: Option<String>,
        color: Option<String>,
    ) -> Self {
        Self {
            product,
            quantity: 1,
            size,
            color,
        }
    }

    #[must_use]
    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    /// Always at least 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    #[must_use]
    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// `quantity * unit price`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.saturating_mul(Decimal::from(self.quantity))
    }

    /// The line's composite identity.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product.id.clone(),
            size: self.size.clone(),
            color: self.color.clone(),
        }
    }

    /// Compare against a key without building one.
    #[must_use]
    pub fn matches(&self, key: &LineKey) -> bool {
        self.product.id == key.product_id && self.size == key.size && self.color == key.color
    }

    /// Store `quantity`, clamped to [`max_quantity`] for this product.
    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        debug_assert!(quantity >= 1);
        self.quantity = quantity.min(max_quantity(self.product.price));
    }
}

/// Largest quantity whose line total is still representable as a `Decimal`.
///
/// `u32::MAX` for any unit price with magnitude of one or less.
#[must_use]
pub fn max_quantity(price: Decimal) -> u32 {
    let price = price.abs();
    if price <= Decimal::ONE {
        return u32::MAX;
    }
    Decimal::MAX
        .checked_div(price)
        .and_then(|limit| limit.floor().to_u32())
        .unwrap_or(u32::MAX)
}

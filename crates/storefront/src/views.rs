//! Display-ready snapshots for the screens.
//!
//! Views hold formatted strings only, so any front end can render them
//! without knowing about decimals or currencies.

use rust_decimal::Decimal;
use serde::Serialize;
use vitrine_core::{CurrencyCode, Price, Product};

use crate::cart::{CartLine, CartState};
use crate::checkout::OrderSummary;

/// Cart item display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub product_id: String,
    pub title: String,
    /// "M / White", or `None` when neither size nor color was chosen.
    pub variant_title: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image: Option<String>,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty(currency: CurrencyCode) -> Self {
        Self {
            items: Vec::new(),
            subtotal: Price::zero(currency).display(),
            item_count: 0,
        }
    }

    #[must_use]
    pub fn new(cart: &CartState, currency: CurrencyCode) -> Self {
        Self {
            items: cart
                .lines()
                .iter()
                .map(|line| CartItemView::new(line, currency))
                .collect(),
            subtotal: format_price(cart.total(), currency),
            item_count: cart.item_count(),
        }
    }
}

impl CartItemView {
    #[must_use]
    pub fn new(line: &CartLine, currency: CurrencyCode) -> Self {
        let product = line.product();
        let variant_title = match (line.size(), line.color()) {
            (Some(size), Some(color)) => Some(format!("{size} / {color}")),
            (Some(only), None) | (None, Some(only)) => Some(only.to_owned()),
            (None, None) => None,
        };

        Self {
            product_id: product.id.to_string(),
            title: product.name.clone(),
            variant_title,
            size: line.size().map(str::to_owned),
            color: line.color().map(str::to_owned),
            quantity: line.quantity(),
            price: format_price(product.price, currency),
            line_price: format_price(line.line_total(), currency),
            image: product.primary_image().map(str::to_owned),
        }
    }
}

/// Product card / detail display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub price: String,
    /// Struck-through price when discounted.
    pub compare_at_price: Option<String>,
    /// e.g. "-25%"
    pub discount_badge: Option<String>,
    /// e.g. "4.6 (214 reviews)"
    pub rating: String,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub in_stock: bool,
    pub images: Vec<String>,
}

impl ProductView {
    #[must_use]
    pub fn new(product: &Product, currency: CurrencyCode) -> Self {
        let discount = product.discount_percent();
        let reviews = if product.review_count == 1 {
            "review"
        } else {
            "reviews"
        };

        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
            price: format_price(product.price, currency),
            compare_at_price: discount
                .and(product.original_price)
                .map(|original| format_price(original, currency)),
            discount_badge: discount.map(|percent| format!("-{percent}%")),
            rating: format!(
                "{:.1} ({} {reviews})",
                product.rating.clamp(0.0, 5.0),
                product.review_count
            ),
            sizes: product.sizes.clone(),
            colors: product.colors.clone(),
            in_stock: product.in_stock,
            images: product.images.clone(),
        }
    }
}

/// Checkout summary display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    pub item_count: u64,
    pub subtotal: String,
    /// "Free" when waived.
    pub shipping: String,
    pub tax: String,
    pub total: String,
}

impl From<&OrderSummary> for SummaryView {
    fn from(summary: &OrderSummary) -> Self {
        let currency = summary.currency;
        Self {
            item_count: summary.item_count,
            subtotal: format_price(summary.subtotal, currency),
            shipping: if summary.shipping.is_zero() {
                "Free".to_string()
            } else {
                format_price(summary.shipping, currency)
            },
            tax: format_price(summary.tax, currency),
            total: format_price(summary.total, currency),
        }
    }
}

fn format_price(amount: Decimal, currency: CurrencyCode) -> String {
    Price::new(amount, currency).display()
}

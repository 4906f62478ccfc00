//! Catalog filtering and sorting.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use vitrine_core::Product;

/// Ordering applied to search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Featured products first, otherwise catalog order.
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    /// Highest rating first.
    Rating,
    /// Alphabetical by name, ignoring case.
    Name,
}

impl SortOrder {
    pub(super) fn apply(self, products: &mut [Arc<Product>]) {
        // All sorts are stable so ties keep catalog order.
        match self {
            Self::Featured => products.sort_by_key(|p| !p.featured),
            Self::PriceLowToHigh => products.sort_by(|a, b| a.price.cmp(&b.price)),
            Self::PriceHighToLow => products.sort_by(|a, b| b.price.cmp(&a.price)),
            Self::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            Self::Name => products.sort_by_cached_key(|p| p.name.to_lowercase()),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "featured" => Ok(Self::Featured),
            "price-asc" | "price-low-high" => Ok(Self::PriceLowToHigh),
            "price-desc" | "price-high-low" => Ok(Self::PriceHighToLow),
            "rating" => Ok(Self::Rating),
            "name" => Ok(Self::Name),
            other => Err(format!(
                "unknown sort order '{other}' (expected featured, price-asc, price-desc, rating, name)"
            )),
        }
    }
}

/// Filters for browsing the catalog. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Category name, compared ignoring case.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,
    /// Product must offer this size.
    pub size: Option<String>,
    /// Product must offer this color.
    pub color: Option<String>,
    pub in_stock_only: bool,
    /// Free text matched against name, description, brand, and tags.
    pub text: Option<String>,
    pub sort: SortOrder,
}

impl CatalogQuery {
    /// Whether `product` passes every filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if !product.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| product.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| product.price > max) {
            return false;
        }
        if let Some(size) = &self.size {
            if !product.offers_size(size) {
                return false;
            }
        }
        if let Some(color) = &self.color {
            if !product.offers_color(color) {
                return false;
            }
        }
        if self.in_stock_only && !product.in_stock {
            return false;
        }
        match self.text.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => product.matches_text(&text.to_lowercase()),
            _ => true,
        }
    }
}

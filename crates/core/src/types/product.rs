//! Catalog product record.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::ProductId;

/// A product in the catalog.
///
/// Products are immutable for the lifetime of the process. The catalog owns
/// them and the cart holds shared references, never copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Current unit price.
    pub price: Decimal,
    /// Pre-discount price, shown struck through when present.
    #[serde(default)]
    pub original_price: Option<Decimal>,
    /// Image URLs, first one is the primary image.
    #[serde(default)]
    pub images: Vec<String>,
    pub category: String,
    /// Declared sizes in display order. Empty for one-size products.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Declared colors in display order. Empty for single-color products.
    #[serde(default)]
    pub colors: Vec<String>,
    pub brand: String,
    /// Average review score on a 0-5 scale.
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

const fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Whether the product asks the shopper to pick a size.
    #[must_use]
    pub fn has_sizes(&self) -> bool {
        !self.sizes.is_empty()
    }

    /// Whether the product asks the shopper to pick a color.
    #[must_use]
    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    #[must_use]
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    #[must_use]
    pub fn offers_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Primary image URL, if the product has any images.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Percentage off the original price, rounded to the nearest whole percent.
    ///
    /// Returns `None` when there is no original price or it does not exceed
    /// the current price.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= self.price || original.is_zero() {
            return None;
        }
        let percent = (original - self.price) / original * Decimal::ONE_HUNDRED;
        percent.round().to_u32()
    }

    /// Case-insensitive match against name, description, brand, and tags.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.brand.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

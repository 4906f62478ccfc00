//! Subcommand implementations.
//!
//! Each command renders either text or JSON to stdout. Logs go to stderr.

pub mod catalog;
pub mod product;
pub mod session;

use serde::Serialize;
use vitrine_storefront::views::{CartView, ProductView};
use vitrine_storefront::{AppError, Catalog, StorefrontConfig};

/// Everything a command needs.
pub struct Context {
    pub config: StorefrontConfig,
    pub catalog: Catalog,
    pub json: bool,
}

/// Write a line to stdout.
#[allow(clippy::print_stdout)]
pub fn out(line: &str) {
    println!("{line}");
}

/// Write a value as a single JSON line.
pub fn out_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let line = serde_json::to_string(value).map_err(|e| AppError::Internal(e.to_string()))?;
    out(&line);
    Ok(())
}

/// One-line product card used by listings.
pub fn product_line(view: &ProductView) -> String {
    let mut line = format!("[{}] {} - {} {}", view.id, view.name, view.brand, view.price);
    if let (Some(compare_at), Some(badge)) = (&view.compare_at_price, &view.discount_badge) {
        line.push_str(&format!(" (was {compare_at}, {badge})"));
    }
    if !view.in_stock {
        line.push_str(" [sold out]");
    }
    line
}

/// Multi-line cart rendering.
pub fn render_cart(view: &CartView) {
    if view.items.is_empty() {
        out("  Your cart is empty");
        return;
    }
    for item in &view.items {
        let variant = item
            .variant_title
            .as_deref()
            .map_or_else(String::new, |v| format!(" ({v})"));
        out(&format!(
            "  {} x {}{variant} @ {} = {}",
            item.quantity, item.title, item.price, item.line_price
        ));
    }
    out(&format!(
        "  {} item(s), subtotal {}",
        view.item_count, view.subtotal
    ));
}

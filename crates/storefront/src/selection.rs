//! Size and color selection checks run before adding to the cart.
//!
//! The cart accepts any size or color string. The product page is where a
//! shopper is told to pick a size first, so that check lives here and runs
//! before an Add intent is dispatched.

use std::sync::Arc;

use thiserror::Error;
use tracing::instrument;
use vitrine_core::Product;

use crate::cart::{CartState, CartStore};

/// Why a selection cannot be added to the cart yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("{0} is out of stock")]
    OutOfStock(String),

    #[error("Please select a size")]
    SizeRequired,

    #[error("Please select a color")]
    ColorRequired,

    #[error("Size {0} is not available")]
    UnknownSize(String),

    #[error("Color {0} is not available")]
    UnknownColor(String),
}

/// Check a size/color choice against what the product offers.
///
/// Products that declare sizes require one; products that declare none
/// accept only no size. Colors follow the same rule.
///
/// # Errors
///
/// Returns the first problem found, checking stock, then size, then color.
pub fn validate_selection(
    product: &Product,
    size: Option<&str>,
    color: Option<&str>,
) -> Result<(), SelectionError> {
    if !product.in_stock {
        return Err(SelectionError::OutOfStock(product.name.clone()));
    }

    match size {
        None if product.has_sizes() => return Err(SelectionError::SizeRequired),
        Some(size) if !product.offers_size(size) => {
            return Err(SelectionError::UnknownSize(size.to_owned()));
        }
        _ => {}
    }

    match color {
        None if product.has_colors() => Err(SelectionError::ColorRequired),
        Some(color) if !product.offers_color(color) => {
            Err(SelectionError::UnknownColor(color.to_owned()))
        }
        _ => Ok(()),
    }
}

/// Validate a selection, then add it to the cart.
///
/// # Errors
///
/// Returns a `SelectionError` without touching the cart if the selection is
/// not valid for the product.
#[instrument(skip(store, product), fields(product_id = %product.id))]
pub fn add_selected<'a>(
    store: &'a mut CartStore,
    product: &Arc<Product>,
    size: Option<&str>,
    color: Option<&str>,
) -> Result<&'a CartState, SelectionError> {
    validate_selection(product, size, color)?;
    Ok(store.add(Arc::clone(product), size, color))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(id: &str) -> Arc<Product> {
        Catalog::seeded().get(&id.into()).cloned().unwrap()
    }

    #[test]
    fn test_valid_selection() {
        assert_eq!(validate_selection(&product("1"), Some("M"), Some("White")), Ok(()));
    }

    #[test]
    fn test_size_required() {
        assert_eq!(
            validate_selection(&product("1"), None, Some("White")),
            Err(SelectionError::SizeRequired)
        );
    }

    #[test]
    fn test_color_required() {
        assert_eq!(
            validate_selection(&product("1"), Some("M"), None),
            Err(SelectionError::ColorRequired)
        );
    }

    #[test]
    fn test_unknown_options() {
        assert_eq!(
            validate_selection(&product("1"), Some("XXL"), Some("White")),
            Err(SelectionError::UnknownSize("XXL".to_string()))
        );
        assert_eq!(
            validate_selection(&product("1"), Some("M"), Some("Pink")),
            Err(SelectionError::UnknownColor("Pink".to_string()))
        );
    }

    #[test]
    fn test_product_without_options() {
        let beanie = product("8");
        assert_eq!(validate_selection(&beanie, None, None), Ok(()));
        assert_eq!(
            validate_selection(&beanie, Some("M"), None),
            Err(SelectionError::UnknownSize("M".to_string()))
        );
    }

    #[test]
    fn test_out_of_stock_checked_first() {
        let sweater = product("5");
        assert!(matches!(
            validate_selection(&sweater, None, None),
            Err(SelectionError::OutOfStock(_))
        ));
    }

    #[test]
    fn test_add_selected_leaves_cart_untouched_on_error() {
        let mut store = CartStore::new();
        let tee = product("1");

        assert!(add_selected(&mut store, &tee, None, Some("White")).is_err());
        assert!(store.state().is_empty());

        let state = add_selected(&mut store, &tee, Some("M"), Some("White")).unwrap();
        assert_eq!(state.item_count(), 1);
    }
}

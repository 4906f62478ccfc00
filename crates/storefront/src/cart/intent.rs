//! Cart intents and the pure transition function.

use std::sync::Arc;

use vitrine_core::Product;

use super::line::{CartLine, LineKey};
use super::state::CartState;

/// A mutation request accepted by the cart.
#[derive(Debug, Clone)]
pub enum CartIntent {
    /// Add one unit of a product with an optional size and color.
    ///
    /// The store does not check that the size or color is one the product
    /// offers; screens validate that before dispatching.
    Add {
        product: Arc<Product>,
        size: Option<String>,
        color: Option<String>,
    },
    /// Delete the line with exactly this key.
    Remove { key: LineKey },
    /// Set the line's absolute quantity. Zero or less removes the line.
    SetQuantity { key: LineKey, quantity: i64 },
    /// Reset to the empty cart.
    Clear,
}

impl CartIntent {
    /// Short name used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
            Self::SetQuantity { .. } => "set_quantity",
            Self::Clear => "clear",
        }
    }
}

/// Apply an intent to a cart, producing the next cart.
///
/// Total over its domain: intents that match no line leave the lines
/// unchanged. Derived fields are recomputed on every call.
#[must_use]
pub fn reduce(state: CartState, intent: CartIntent) -> CartState {
    match intent {
        CartIntent::Add {
            product,
            size,
            color,
        } => {
            let mut lines = state.into_lines();
            let key = LineKey {
                product_id: product.id.clone(),
                size,
                color,
            };
            if let Some(line) = lines.iter_mut().find(|line| line.matches(&key)) {
                let quantity = line.quantity().saturating_add(1);
                line.set_quantity(quantity);
            } else {
                lines.push(CartLine::new(product, key.size, key.color));
            }
            CartState::from_lines(lines)
        }
        CartIntent::Remove { key } => {
            let mut lines = state.into_lines();
            lines.retain(|line| !line.matches(&key));
            CartState::from_lines(lines)
        }
        CartIntent::SetQuantity { key, quantity } if quantity <= 0 => {
            reduce(state, CartIntent::Remove { key })
        }
        CartIntent::SetQuantity { key, quantity } => {
            let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            let mut lines = state.into_lines();
            if let Some(line) = lines.iter_mut().find(|line| line.matches(&key)) {
                line.set_quantity(quantity);
            }
            CartState::from_lines(lines)
        }
        CartIntent::Clear => CartState::default(),
    }
}

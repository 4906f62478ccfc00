//! Scripted shopping session.
//!
//! A script is a JSON document:
//!
//! ```json
//! {
//!   "steps": [
//!     { "op": "add", "product": "1", "size": "M", "color": "White" },
//!     { "op": "set_quantity", "product": "1", "size": "M", "color": "White", "quantity": 3 },
//!     { "op": "remove", "product": "1", "size": "M", "color": "White" },
//!     { "op": "clear" }
//!   ],
//!   "shipping": {
//!     "fullName": "Ada Shopper",
//!     "email": "ada@example.com",
//!     "address": "1 Market St",
//!     "city": "Springfield",
//!     "postalCode": "12345"
//!   }
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use vitrine_core::{CurrencyCode, ProductId};
use vitrine_storefront::error::add_breadcrumb;
use vitrine_storefront::views::{CartView, SummaryView};
use vitrine_storefront::{
    AppError, CartState, CartStore, Checkout, LineKey, OrderConfirmation, ShippingDetails,
    add_selected,
};

use super::{Context, out, out_json, render_cart};

#[derive(Debug, Deserialize)]
struct Script {
    steps: Vec<Step>,
    #[serde(default)]
    shipping: Option<ShippingDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Step {
    Add {
        product: ProductId,
        #[serde(default)]
        size: Option<String>,
        #[serde(default)]
        color: Option<String>,
    },
    Remove {
        product: ProductId,
        #[serde(default)]
        size: Option<String>,
        #[serde(default)]
        color: Option<String>,
    },
    SetQuantity {
        product: ProductId,
        quantity: i64,
        #[serde(default)]
        size: Option<String>,
        #[serde(default)]
        color: Option<String>,
    },
    Clear,
}

/// Flags for a session run.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Place the order after the last step.
    pub checkout: bool,
    /// Check size/color before adding, as the product page does.
    pub validate: bool,
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    Cart { cart: CartView },
    Rejected { step: usize, message: String },
    Order {
        confirmation: &'a OrderConfirmation,
        summary: SummaryView,
    },
}

/// Run a session script against a fresh cart.
pub async fn run(
    ctx: &Context,
    script_path: &Path,
    options: SessionOptions,
) -> Result<(), AppError> {
    let script = load_script(script_path)?;
    let currency = ctx.config.pricing.currency;
    let json = ctx.json;

    let mut store = CartStore::new();
    store.subscribe(move |state| print_cart(state, currency, json));

    for (index, step) in script.steps.into_iter().enumerate() {
        let number = index + 1;
        if let Err(rejection) = apply(ctx, &mut store, step, options.validate) {
            match rejection {
                AppError::Selection(err) => {
                    tracing::warn!(step = number, error = %err, "add to cart rejected");
                    if json {
                        out_json(&Event::Rejected {
                            step: number,
                            message: err.to_string(),
                        })?;
                    } else {
                        out(&format!("! step {number}: {err}"));
                    }
                }
                other => return Err(other),
            }
        }
    }

    if !options.checkout {
        return Ok(());
    }

    let details = script
        .shipping
        .ok_or_else(|| AppError::BadRequest("script has no shipping details".to_string()))?;
    let checkout = Checkout::from_config(&ctx.config);

    if !json {
        let summary = SummaryView::from(&checkout.summary(&store));
        out(&format!(
            "Checkout: subtotal {}, shipping {}, tax {}, total {}",
            summary.subtotal, summary.shipping, summary.tax, summary.total
        ));
        out("Processing order...");
    }

    let confirmation = checkout.place_order(&mut store, &details).await?;
    let order_number = confirmation.order_number.to_string();
    add_breadcrumb(
        "checkout",
        "Order placed",
        Some(&[("order_number", order_number.as_str())]),
    );

    if json {
        out_json(&Event::Order {
            confirmation: &confirmation,
            summary: SummaryView::from(&confirmation.summary),
        })?;
    } else {
        out(&format!(
            "Order {} placed for {} - thank you, {}!",
            confirmation.order_number,
            SummaryView::from(&confirmation.summary).total,
            confirmation.ship_to.full_name
        ));
    }
    Ok(())
}

fn load_script(path: &Path) -> Result<Script, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::BadRequest(format!("cannot read script {}: {e}", path.display()))
    })?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::BadRequest(format!("invalid script {}: {e}", path.display())))
}

fn apply(ctx: &Context, store: &mut CartStore, step: Step, validate: bool) -> Result<(), AppError> {
    match step {
        Step::Add {
            product,
            size,
            color,
        } => {
            let product = ctx
                .catalog
                .get(&product)
                .ok_or_else(|| AppError::NotFound(format!("product {product}")))?;
            if validate {
                add_selected(store, product, size.as_deref(), color.as_deref())?;
            } else {
                store.add(Arc::clone(product), size.as_deref(), color.as_deref());
            }
            add_breadcrumb(
                "cart",
                "Added to cart",
                Some(&[("product_id", product.id.as_str())]),
            );
        }
        Step::Remove {
            product,
            size,
            color,
        } => {
            store.remove(LineKey {
                product_id: product,
                size,
                color,
            });
        }
        Step::SetQuantity {
            product,
            quantity,
            size,
            color,
        } => {
            store.set_quantity(
                LineKey {
                    product_id: product,
                    size,
                    color,
                },
                quantity,
            );
        }
        Step::Clear => {
            store.clear();
        }
    }
    Ok(())
}

fn print_cart(state: &CartState, currency: CurrencyCode, json: bool) {
    let view = CartView::new(state, currency);
    if json {
        if let Err(e) = out_json(&Event::Cart { cart: view }) {
            tracing::error!(error = %e, "failed to render cart");
        }
    } else {
        out("Cart:");
        render_cart(&view);
    }
}

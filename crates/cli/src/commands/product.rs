//! Product detail command.

use serde::Serialize;
use vitrine_core::ProductId;
use vitrine_storefront::AppError;
use vitrine_storefront::views::ProductView;

use super::{Context, out, out_json, product_line};

const RELATED_LIMIT: usize = 4;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductDetail {
    product: ProductView,
    related: Vec<ProductView>,
}

/// Show a product with up to four related products.
pub fn show(ctx: &Context, id: &ProductId) -> Result<(), AppError> {
    let currency = ctx.config.pricing.currency;
    let product = ctx
        .catalog
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let detail = ProductDetail {
        product: ProductView::new(product, currency),
        related: ctx
            .catalog
            .related(id, RELATED_LIMIT)
            .iter()
            .map(|p| ProductView::new(p, currency))
            .collect(),
    };

    if ctx.json {
        return out_json(&detail);
    }

    let view = &detail.product;
    out(&product_line(view));
    out(&format!("  {} | {}", view.category, view.rating));
    out(&format!("  {}", view.description));
    if !view.sizes.is_empty() {
        out(&format!("  Sizes: {}", view.sizes.join(", ")));
    }
    if !view.colors.is_empty() {
        out(&format!("  Colors: {}", view.colors.join(", ")));
    }
    if !detail.related.is_empty() {
        out("You may also like:");
        for related in &detail.related {
            out(&format!("  {}", product_line(related)));
        }
    }
    Ok(())
}

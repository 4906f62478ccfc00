//! Catalog listing command.

use vitrine_storefront::views::ProductView;
use vitrine_storefront::{AppError, CatalogQuery};

use super::{Context, out, out_json, product_line};

/// List products matching `query`.
pub fn list(ctx: &Context, query: &CatalogQuery) -> Result<(), AppError> {
    let currency = ctx.config.pricing.currency;
    let views: Vec<ProductView> = ctx
        .catalog
        .search(query)
        .iter()
        .map(|product| ProductView::new(product, currency))
        .collect();

    tracing::debug!(results = views.len(), "catalog search");

    if ctx.json {
        return out_json(&views);
    }

    if views.is_empty() {
        out("No products match those filters");
        return Ok(());
    }
    out(&format!(
        "{} product(s) in {}",
        views.len(),
        ctx.catalog.categories().join(", ")
    ));
    for view in &views {
        out(&product_line(view));
    }
    Ok(())
}

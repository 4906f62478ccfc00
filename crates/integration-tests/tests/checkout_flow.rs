//! Integration tests for the browse, add, and check out flow.

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use vitrine_core::ProductId;
use vitrine_storefront::views::{CartView, SummaryView};
use vitrine_storefront::{
    AppError, Catalog, CatalogQuery, Checkout, CheckoutError, PricingConfig, SelectionError,
    ShippingDetails, SortOrder, StorefrontConfig, add_selected,
};

fn shipping() -> ShippingDetails {
    ShippingDetails {
        full_name: "Ada Shopper".to_string(),
        email: "ada@example.com".to_string(),
        address: "1 Market St".to_string(),
        city: "Springfield".to_string(),
        postal_code: "12345".to_string(),
    }
}

fn instant_checkout() -> Checkout {
    Checkout::new(PricingConfig::default(), Duration::ZERO)
}

#[tokio::test]
async fn test_browse_add_and_place_order() {
    let catalog = Catalog::seeded();
    let query = CatalogQuery {
        category: Some("T-Shirts".to_string()),
        sort: SortOrder::PriceLowToHigh,
        ..CatalogQuery::default()
    };
    let tee = catalog.search(&query).into_iter().next().unwrap();

    let mut store = vitrine_storefront::CartStore::new();
    add_selected(&mut store, &tee, Some("M"), Some("White")).unwrap();
    add_selected(&mut store, &tee, Some("M"), Some("White")).unwrap();

    let jeans = Arc::clone(catalog.get(&ProductId::from("3")).unwrap());
    add_selected(&mut store, &jeans, Some("32"), Some("Indigo")).unwrap();

    let view = CartView::new(store.state(), PricingConfig::default().currency);
    assert_eq!(view.items.len(), 2);
    assert_eq!(view.subtotal, "$178.98");

    let checkout = instant_checkout();
    let summary = SummaryView::from(&checkout.summary(&store));
    assert_eq!(summary.shipping, "Free");
    assert_eq!(summary.tax, "$14.32");
    assert_eq!(summary.total, "$193.30");

    let confirmation = checkout.place_order(&mut store, &shipping()).await.unwrap();
    assert!(store.state().is_empty());
    assert_eq!(confirmation.summary.total, Decimal::new(19330, 2));
    assert_eq!(confirmation.lines.len(), 2);

    let json = serde_json::to_value(&confirmation).unwrap();
    assert_eq!(json["shipTo"]["email"], "ada@example.com");
    assert!(json["orderNumber"].is_string());
}

#[tokio::test]
async fn test_validation_happens_before_dispatch() {
    let catalog = Catalog::seeded();
    let tee = Arc::clone(catalog.get(&ProductId::from("1")).unwrap());
    let mut store = vitrine_storefront::CartStore::new();

    let err = add_selected(&mut store, &tee, None, Some("White")).unwrap_err();
    assert_eq!(err, SelectionError::SizeRequired);
    assert!(store.state().is_empty());

    let err = instant_checkout()
        .place_order(&mut store, &shipping())
        .await
        .unwrap_err();
    assert_eq!(AppError::from(err).user_message(), "Your cart is empty");
}

#[tokio::test]
async fn test_checkout_form_errors_leave_cart_intact() {
    let catalog = Catalog::seeded();
    let beanie = Arc::clone(catalog.get(&ProductId::from("8")).unwrap());
    let mut store = vitrine_storefront::CartStore::new();
    add_selected(&mut store, &beanie, None, None).unwrap();

    let mut form = shipping();
    form.email = "not-an-email".to_string();
    let err = instant_checkout()
        .place_order(&mut store, &form)
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::InvalidEmail(_)));
    assert_eq!(store.state().item_count(), 1);
}

#[test]
fn test_config_drives_checkout_pricing() {
    let config = StorefrontConfig::from_lookup(|key| match key {
        "VITRINE_SHIPPING_RATE" => Some("5".to_string()),
        "VITRINE_TAX_RATE" => Some("0".to_string()),
        "VITRINE_CHECKOUT_DELAY_MS" => Some("0".to_string()),
        _ => None,
    })
    .unwrap();
    let checkout = Checkout::from_config(&config);

    let catalog = Catalog::seeded();
    let mut store = vitrine_storefront::CartStore::new();
    store.add(Arc::clone(catalog.get(&ProductId::from("8")).unwrap()), None, None);

    let summary = checkout.summary(&store);
    assert_eq!(summary.shipping, Decimal::new(5, 0));
    assert_eq!(summary.tax, Decimal::ZERO);
    assert_eq!(summary.total, Decimal::new(2900, 2));
}

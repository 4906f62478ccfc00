//! Order summary pricing and simulated order processing.
//!
//! There is no payment provider. Placing an order validates the shipping
//! form, waits a fixed delay standing in for processing, issues a
//! confirmation, and empties the cart. Once the delay starts the order always
//! succeeds.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;
use vitrine_core::{CurrencyCode, Email, EmailError, ProductId};

use crate::cart::{CartState, CartStore};
use crate::config::{PricingConfig, StorefrontConfig};

/// Errors that stop an order before processing starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Your cart is empty")]
    EmptyCart,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Shipping form as entered on the checkout screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

/// Shipping details after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub full_name: String,
    pub email: Email,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

impl ShippingDetails {
    /// Check required fields and the email address.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` for the first blank field, in form order, or
    /// `InvalidEmail` if the email does not parse.
    pub fn validate(&self) -> Result<ShippingAddress, CheckoutError> {
        let full_name = required("Full name", &self.full_name)?;
        let email_input = required("Email", &self.email)?;
        let address = required("Address", &self.address)?;
        let city = required("City", &self.city)?;
        let postal_code = required("Postal code", &self.postal_code)?;

        Ok(ShippingAddress {
            full_name,
            email: Email::parse(&email_input)?,
            address,
            city,
            postal_code,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, CheckoutError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CheckoutError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}

/// Money breakdown shown on the checkout screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub currency: CurrencyCode,
    pub item_count: u64,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl OrderSummary {
    /// Price a cart.
    ///
    /// Shipping is free for an empty cart or a subtotal at or above the
    /// threshold. Tax is charged on the subtotal only and rounded to cents.
    /// Amounts past `Decimal::MAX` saturate there.
    #[must_use]
    pub fn for_cart(cart: &CartState, pricing: &PricingConfig) -> Self {
        let subtotal = cart.total();
        let shipping = if cart.is_empty() || subtotal >= pricing.free_shipping_threshold {
            Decimal::ZERO
        } else {
            pricing.shipping_rate
        };
        let tax = subtotal
            .saturating_mul(pricing.tax_rate)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        Self {
            currency: pricing.currency,
            item_count: cart.item_count(),
            subtotal,
            shipping,
            tax,
            total: subtotal.saturating_add(shipping).saturating_add(tax),
        }
    }

    /// Amount still needed to qualify for free shipping, if any.
    #[must_use]
    pub fn free_shipping_remaining(&self, pricing: &PricingConfig) -> Option<Decimal> {
        (self.shipping > Decimal::ZERO).then(|| pricing.free_shipping_threshold - self.subtotal)
    }
}

/// One purchased line, copied out of the cart at order time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub size: Option<String>,
    pub color: Option<String>,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// Result of a placed order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_number: Uuid,
    pub placed_at: DateTime<Utc>,
    pub ship_to: ShippingAddress,
    pub lines: Vec<OrderLine>,
    pub summary: OrderSummary,
}

/// Simulated order processor.
#[derive(Debug, Clone, Copy)]
pub struct Checkout {
    pricing: PricingConfig,
    delay: Duration,
}

impl Checkout {
    #[must_use]
    pub const fn new(pricing: PricingConfig, delay: Duration) -> Self {
        Self { pricing, delay }
    }

    #[must_use]
    pub const fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(config.pricing, config.checkout_delay)
    }

    #[must_use]
    pub const fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Price the store's current cart.
    #[must_use]
    pub fn summary(&self, store: &CartStore) -> OrderSummary {
        OrderSummary::for_cart(store.state(), &self.pricing)
    }

    /// Place an order for everything in the cart.
    ///
    /// Validation happens before the delay. After the delay the cart is
    /// cleared through the store, so subscribers see the empty cart.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError` if the cart is empty or the shipping details
    /// are incomplete. The cart is left unchanged in that case.
    #[instrument(skip_all, fields(item_count = store.state().item_count()))]
    pub async fn place_order(
        &self,
        store: &mut CartStore,
        details: &ShippingDetails,
    ) -> Result<OrderConfirmation, CheckoutError> {
        if store.state().is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let ship_to = details.validate()?;

        let summary = self.summary(store);
        let lines = snapshot_lines(store.state());

        tokio::time::sleep(self.delay).await;

        let confirmation = OrderConfirmation {
            order_number: Uuid::new_v4(),
            placed_at: Utc::now(),
            ship_to,
            lines,
            summary,
        };
        store.clear();

        tracing::info!(
            order_number = %confirmation.order_number,
            total = %confirmation.summary.total,
            "Order placed"
        );
        Ok(confirmation)
    }
}

fn snapshot_lines(cart: &CartState) -> Vec<OrderLine> {
    cart.lines()
        .iter()
        .map(|line| OrderLine {
            product_id: line.product().id.clone(),
            name: line.product().name.clone(),
            size: line.size().map(str::to_owned),
            color: line.color().map(str::to_owned),
            quantity: line.quantity(),
            unit_price: line.product().price,
            line_total: line.line_total(),
        })
        .collect()
}

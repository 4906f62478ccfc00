//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `VITRINE_CURRENCY` - ISO currency for price display (default: USD)
//! - `VITRINE_CHECKOUT_DELAY_MS` - Simulated order processing time (default: 2000)
//! - `VITRINE_FREE_SHIPPING_THRESHOLD` - Subtotal at which shipping is waived (default: 100.00)
//! - `VITRINE_SHIPPING_RATE` - Flat shipping charge below the threshold (default: 9.99)
//! - `VITRINE_TAX_RATE` - Sales tax as a fraction of subtotal (default: 0.08)
//! - `VITRINE_CATALOG_PATH` - JSON product file replacing the built-in catalog
//! - `VITRINE_LOG_JSON` - Emit JSON log lines (default: false)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use thiserror::Error;
use vitrine_core::CurrencyCode;

const DEFAULT_CHECKOUT_DELAY_MS: u64 = 2000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Prices, shipping, and tax
    pub pricing: PricingConfig,
    /// How long simulated order processing takes
    pub checkout_delay: Duration,
    /// Optional catalog file; the built-in assortment is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Emit JSON log lines instead of human-readable ones
    pub log_json: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "development")
    pub sentry_environment: Option<String>,
}

/// Money settings used by price display and the checkout summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingConfig {
    pub currency: CurrencyCode,
    /// Orders with a subtotal at or above this ship free
    pub free_shipping_threshold: Decimal,
    /// Flat shipping charge below the threshold
    pub shipping_rate: Decimal,
    /// Tax as a fraction of the subtotal (0.08 = 8%)
    pub tax_rate: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::USD,
            free_shipping_threshold: Decimal::new(100, 0),
            shipping_rate: Decimal::new(999, 2),
            tax_rate: Decimal::new(8, 2),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            pricing: PricingConfig::default(),
            checkout_delay: Duration::from_millis(DEFAULT_CHECKOUT_DELAY_MS),
            catalog_path: None,
            log_json: false,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable or
    /// out-of-range value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`StorefrontConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);
        let defaults = Self::default();

        let currency = match env.optional("VITRINE_CURRENCY") {
            Some(code) => CurrencyCode::parse(&code).ok_or_else(|| {
                ConfigError::InvalidEnvVar(
                    "VITRINE_CURRENCY".to_string(),
                    format!("unsupported currency '{code}'"),
                )
            })?,
            None => defaults.pricing.currency,
        };

        let pricing = PricingConfig {
            currency,
            free_shipping_threshold: env.parse_or(
                "VITRINE_FREE_SHIPPING_THRESHOLD",
                defaults.pricing.free_shipping_threshold,
            )?,
            shipping_rate: env.parse_or("VITRINE_SHIPPING_RATE", defaults.pricing.shipping_rate)?,
            tax_rate: env.parse_or("VITRINE_TAX_RATE", defaults.pricing.tax_rate)?,
        };
        validate_pricing(&pricing)?;

        let delay_ms = env.parse_or("VITRINE_CHECKOUT_DELAY_MS", DEFAULT_CHECKOUT_DELAY_MS)?;

        Ok(Self {
            pricing,
            checkout_delay: Duration::from_millis(delay_ms),
            catalog_path: env.optional("VITRINE_CATALOG_PATH").map(PathBuf::from),
            log_json: env.parse_or("VITRINE_LOG_JSON", defaults.log_json)?,
            sentry_dsn: env.optional("SENTRY_DSN"),
            sentry_environment: env.optional("SENTRY_ENVIRONMENT"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

struct Env<F>(F);

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Get an optional variable, treating blank values as unset.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.trim().is_empty())
    }

    /// Parse a variable, falling back to `default` when unset.
    fn parse_or<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.optional(key).map_or(Ok(default), |raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
    }
}

/// Reject negative money amounts and tax rates outside 0..=1.
fn validate_pricing(pricing: &PricingConfig) -> Result<(), ConfigError> {
    let non_negative = [
        ("VITRINE_FREE_SHIPPING_THRESHOLD", pricing.free_shipping_threshold),
        ("VITRINE_SHIPPING_RATE", pricing.shipping_rate),
    ];
    for (key, value) in non_negative {
        if value.is_sign_negative() {
            return Err(ConfigError::InvalidEnvVar(
                key.to_string(),
                format!("must not be negative (got {value})"),
            ));
        }
    }

    if pricing.tax_rate.is_sign_negative() || pricing.tax_rate > Decimal::ONE {
        return Err(ConfigError::InvalidEnvVar(
            "VITRINE_TAX_RATE".to_string(),
            format!("must be between 0 and 1 (got {})", pricing.tax_rate),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.pricing, PricingConfig::default());
        assert_eq!(config.checkout_delay, Duration::from_millis(2000));
        assert!(config.catalog_path.is_none());
        assert!(!config.log_json);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("VITRINE_CURRENCY", "eur"),
            ("VITRINE_CHECKOUT_DELAY_MS", "0"),
            ("VITRINE_FREE_SHIPPING_THRESHOLD", "75"),
            ("VITRINE_SHIPPING_RATE", "4.50"),
            ("VITRINE_TAX_RATE", "0.2"),
            ("VITRINE_CATALOG_PATH", "catalog.json"),
            ("VITRINE_LOG_JSON", "true"),
        ])
        .unwrap();

        assert_eq!(config.pricing.currency, CurrencyCode::EUR);
        assert_eq!(config.checkout_delay, Duration::ZERO);
        assert_eq!(config.pricing.free_shipping_threshold, Decimal::new(75, 0));
        assert_eq!(config.pricing.shipping_rate, Decimal::new(450, 2));
        assert_eq!(config.pricing.tax_rate, Decimal::new(2, 1));
        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.json")));
        assert!(config.log_json);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = load(&[("VITRINE_TAX_RATE", "  "), ("SENTRY_DSN", "")]).unwrap();
        assert_eq!(config.pricing.tax_rate, Decimal::new(8, 2));
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[("VITRINE_CHECKOUT_DELAY_MS", "soon")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "VITRINE_CHECKOUT_DELAY_MS"));

        let err = load(&[("VITRINE_CURRENCY", "JPY")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "VITRINE_CURRENCY"));

        assert!(load(&[("VITRINE_TAX_RATE", "1.5")]).is_err());
        assert!(load(&[("VITRINE_SHIPPING_RATE", "-1")]).is_err());
    }
}

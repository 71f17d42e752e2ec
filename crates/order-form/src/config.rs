//! # Configuration
//!
//! [`OrderConfig`] fixes the tax rate and catalog prices for a session. Every field has a
//! default, so an empty document yields the standard 7% rate and default prices:
//!
//! ```toml
//! tax_rate = "0.07"
//!
//! [prices]
//! Pears = "1.59"
//! ```
//!
//! Decimal values are written as strings to keep them exact.

use crate::model::{Catalog, CatalogItem, Money};
use crate::order_ledger::{OrderLedger, DEFAULT_TAX_RATE};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

/// Environment variable naming an optional TOML config file for the demo binary.
pub const CONFIG_PATH_ENV: &str = "ORDER_FORM_CONFIG";

/// Errors raised while loading or validating an [`OrderConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown catalog item in prices: {0}")]
    UnknownItem(String),

    #[error("price for {item} must not be negative, got {price}")]
    NegativePrice { item: CatalogItem, price: Decimal },

    #[error("tax rate must be between 0 and 1, got {0}")]
    InvalidTaxRate(Decimal),
}

/// Session settings: the tax rate and per-item price overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrderConfig {
    pub tax_rate: Decimal,
    /// Keyed by item name (`Apples`, `Peaches`, …).
    pub prices: BTreeMap<String, Decimal>,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            prices: BTreeMap::new(),
        }
    }
}

impl OrderConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: OrderConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        info!(path = %path.display(), tax_rate = %config.tax_rate, overrides = config.prices.len(), "Config loaded");
        Ok(config)
    }

    /// Loads the file named by [`CONFIG_PATH_ENV`], or the defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tax_rate.is_sign_negative() || self.tax_rate > Decimal::ONE {
            return Err(ConfigError::InvalidTaxRate(self.tax_rate));
        }
        self.price_overrides().map(|_| ())
    }

    fn price_overrides(&self) -> Result<BTreeMap<CatalogItem, Money>, ConfigError> {
        self.prices
            .iter()
            .map(|(name, price)| {
                let item = CatalogItem::from_str(name)
                    .map_err(|_| ConfigError::UnknownItem(name.clone()))?;
                if price.is_sign_negative() {
                    return Err(ConfigError::NegativePrice {
                        item,
                        price: *price,
                    });
                }
                Ok((item, Money::new(*price)))
            })
            .collect()
    }

    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        Ok(Catalog::with_overrides(&self.price_overrides()?))
    }

    /// An empty ledger priced by this config.
    pub fn ledger(&self) -> Result<OrderLedger, ConfigError> {
        self.validate()?;
        Ok(OrderLedger::new(self.catalog()?, self.tax_rate))
    }
}

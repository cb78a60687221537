//! Environment-driven construction of a [`Product`].
//!
//! - `CATALOG_MAKER`: manufacturer name (default: empty)
//! - `CATALOG_PRICE`: price as a decimal number (default: 0)

use std::env::VarError;

use catalog_core::{DomainError, DomainResult};
use catalog_products::Product;

pub const MAKER_VAR: &str = "CATALOG_MAKER";
pub const PRICE_VAR: &str = "CATALOG_PRICE";

/// Values to apply on top of a freshly constructed product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoConfig {
    pub maker: Option<String>,
    pub price: Option<f64>,
}

impl DemoConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> DomainResult<Self> {
        Self::try_from_lookup(env_var)
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        Self::try_from_lookup(|key| Ok(lookup(key)))
    }

    /// Like [`DemoConfig::from_lookup`], for lookups that can reject a present value.
    pub fn try_from_lookup(
        lookup: impl Fn(&str) -> DomainResult<Option<String>>,
    ) -> DomainResult<Self> {
        let maker = lookup(MAKER_VAR)?;
        let price = lookup(PRICE_VAR)?
            .map(|raw| parse_price(&raw))
            .transpose()?;

        Ok(Self { maker, price })
    }

    /// Build a default product and apply the configured values.
    pub fn build_product(&self) -> Product {
        let mut product = Product::new();

        if let Some(maker) = &self.maker {
            product.set_maker(maker.as_str());
        }
        if let Some(price) = self.price {
            product.price = price;
        }

        tracing::debug!(?product, "applied configuration");
        product
    }
}

/// Unset variables are `None`; set but non-UTF-8 values are rejected.
fn env_var(key: &str) -> DomainResult<Option<String>> {
    match std::env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => {
            Err(DomainError::validation(format!("{key}: not valid UTF-8")))
        }
    }
}

fn parse_price(raw: &str) -> DomainResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| DomainError::validation(format!("{PRICE_VAR}={raw:?}: {e}")))
}

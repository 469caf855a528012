use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::ConfigError;

/// Runtime settings, read from `CHECKOUT_*` environment variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CheckoutConfig {
    /// Capacity of the order store's request channel.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
    #[serde(default = "default_premium_discount_percent")]
    pub premium_discount_percent: u32,
    /// Upper bound for each gateway, store and email call. Unset means wait forever.
    #[serde(default)]
    pub collaborator_timeout_ms: Option<u64>,
    /// Largest amount the simulated gateway approves, in whole currency units.
    #[serde(default = "default_approval_limit")]
    pub approval_limit: u64,
    /// Comma-separated card numbers the simulated gateway always declines.
    #[serde(default = "default_declined_cards")]
    pub declined_cards: String,
}

fn default_buffer_size() -> usize { 32 }
fn default_premium_discount_percent() -> u32 { 10 }
fn default_approval_limit() -> u64 { 10_000 }
fn default_declined_cards() -> String { "0000-0000".to_string() }

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
            premium_discount_percent: default_premium_discount_percent(),
            collaborator_timeout_ms: None,
            approval_limit: default_approval_limit(),
            declined_cards: default_declined_cards(),
        }
    }
}

impl CheckoutConfig {
    pub const ENV_PREFIX: &'static str = "CHECKOUT_";

    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a variable cannot be parsed or a value is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Same as [`CheckoutConfig::from_env`] but over an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Self = envy::prefixed(Self::ENV_PREFIX).from_iter(vars)?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::Invalid {
                field: "buffer_size",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.premium_discount_percent > 100 {
            return Err(ConfigError::Invalid {
                field: "premium_discount_percent",
                reason: format!("{} is above 100", self.premium_discount_percent),
            });
        }
        Ok(self)
    }

    pub fn premium_discount_percent(&self) -> Decimal {
        Decimal::from(self.premium_discount_percent)
    }

    pub fn approval_limit(&self) -> Decimal {
        Decimal::from(self.approval_limit)
    }

    pub fn collaborator_timeout(&self) -> Option<Duration> {
        self.collaborator_timeout_ms.map(Duration::from_millis)
    }

    pub fn declined_cards(&self) -> Vec<String> {
        self.declined_cards
            .split(',')
            .map(str::trim)
            .filter(|card| !card.is_empty())
            .map(str::to_string)
            .collect()
    }
}

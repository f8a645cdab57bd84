//! Demo configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. The defaults reproduce the canonical demonstration run.

use serde::Serialize;
use std::env;

/// Demo run configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoConfig {
    /// Login to authenticate with
    pub login: String,

    /// Password to authenticate with
    #[serde(skip_serializing)]
    pub password: String,

    /// Category listed after login
    pub category: String,

    /// Units of the first match to order
    pub quantity: i64,

    /// Also print the placed order as JSON
    pub receipt_json: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            login: "user1".to_string(),
            password: "password123".to_string(),
            category: "Electronics".to_string(),
            quantity: 1,
            receipt_json: false,
        }
    }
}

impl DemoConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = DemoConfig::default();

        let config = DemoConfig {
            login: lookup("SHOP_DEMO_LOGIN").unwrap_or(defaults.login),

            password: lookup("SHOP_DEMO_PASSWORD").unwrap_or(defaults.password),

            category: lookup("SHOP_DEMO_CATEGORY").unwrap_or(defaults.category),

            quantity: match lookup("SHOP_DEMO_QUANTITY") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("SHOP_DEMO_QUANTITY".to_string()))?,
                None => defaults.quantity,
            },

            receipt_json: match lookup("SHOP_RECEIPT_JSON") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("SHOP_RECEIPT_JSON".to_string()))?,
                None => defaults.receipt_json,
            },
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

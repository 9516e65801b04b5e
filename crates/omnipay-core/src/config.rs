//! # Factory Configuration
//!
//! Vendor namespace and gateway list for a [`GatewayFactory`], loaded from
//! `config/gateways.toml` or the environment.
//!
//! ```toml
//! vendor = "League"
//! gateways = ["Stripe", "PayPal_Express"]
//! ```
//!
//! [`GatewayFactory`]: crate::factory::GatewayFactory

use crate::error::{OmnipayError, OmnipayResult};
use crate::naming::DEFAULT_VENDOR;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Locations probed by [`FactoryConfig::discover`], relative to the working directory
pub const CONFIG_PATHS: [&str; 3] = [
    "config/gateways.toml",
    "../config/gateways.toml",
    "../../config/gateways.toml",
];

/// Gateway factory configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryConfig {
    /// Vendor namespace the naming convention is rooted at
    #[serde(default = "default_vendor")]
    pub vendor: String,

    /// Initial list of gateway identifiers
    #[serde(default)]
    pub gateways: Vec<String>,
}

fn default_vendor() -> String {
    DEFAULT_VENDOR.to_string()
}

impl FactoryConfig {
    /// Load from a TOML string
    pub fn from_toml(toml_str: &str) -> OmnipayResult<Self> {
        toml::from_str(toml_str).map_err(|e| OmnipayError::Configuration(e.to_string()))
    }

    /// Load from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> OmnipayResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            OmnipayError::Configuration(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Load the first config file found in [`CONFIG_PATHS`], falling back to
    /// the environment when none exists.
    pub fn discover() -> OmnipayResult<Self> {
        for path in CONFIG_PATHS {
            if Path::new(path).is_file() {
                tracing::info!("Loading gateway config from {}", path);
                return Self::from_file(path);
            }
        }

        tracing::debug!("No gateway config file found, using environment");
        Ok(Self::from_env())
    }

    /// Load from environment variables.
    ///
    /// - `OMNIPAY_VENDOR` (default `League`)
    /// - `OMNIPAY_GATEWAYS`: comma separated identifiers
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            vendor: env::var("OMNIPAY_VENDOR").unwrap_or_else(|_| default_vendor()),
            gateways: env::var("OMNIPAY_GATEWAYS")
                .map(|list| parse_gateway_list(&list))
                .unwrap_or_default(),
        }
    }
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            vendor: default_vendor(),
            gateways: Vec::new(),
        }
    }
}

/// Split a comma separated gateway list, dropping blank entries
pub fn parse_gateway_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_toml() {
        let config = FactoryConfig::from_toml(
            r#"
            vendor = "Acme"
            gateways = ["Stripe", "PayPal_Express"]
            "#,
        )
        .unwrap();

        assert_eq!(config.vendor, "Acme");
        assert_eq!(config.gateways, vec!["Stripe", "PayPal_Express"]);
    }

    #[test]
    fn test_from_toml_defaults() {
        let config = FactoryConfig::from_toml("").unwrap();
        assert_eq!(config, FactoryConfig::default());
        assert_eq!(config.vendor, "League");
    }

    #[test]
    fn test_from_toml_invalid() {
        let err = FactoryConfig::from_toml("gateways = \"Stripe\"").unwrap_err();
        assert!(matches!(err, OmnipayError::Configuration(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "gateways = [\"Dummy\"]").unwrap();

        let config = FactoryConfig::from_file(file.path()).unwrap();
        assert_eq!(config.gateways, vec!["Dummy"]);
    }

    #[test]
    fn test_from_file_missing() {
        let err = FactoryConfig::from_file("/nonexistent/gateways.toml").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error: Failed to read"));
    }

    #[test]
    fn test_parse_gateway_list() {
        assert_eq!(
            parse_gateway_list("Stripe, PayPal_Express,,  "),
            vec!["Stripe", "PayPal_Express"]
        );
        assert!(parse_gateway_list("").is_empty());
    }
}

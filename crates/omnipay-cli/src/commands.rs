//! Subcommand implementations. Each returns what `main` prints.

use omnipay_core::{FactoryConfig, GatewayCatalog, GatewayFactory, NameResolver};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

pub fn class_name(identifier: &str, vendor: &str) -> String {
    NameResolver::new(vendor).class_name(identifier)
}

pub fn short_name(class_name: &str, vendor: &str) -> String {
    NameResolver::new(vendor).short_name(class_name)
}

/// Parse `raw` as a JSON literal when it is one, otherwise as a string,
/// and run it through `to_float`.
pub fn to_float(raw: &str) -> anyhow::Result<f64> {
    let value = serde_json::from_str::<Value>(raw).unwrap_or_else(|_| {
        debug!(%raw, "not a JSON literal, treating as string");
        Value::String(raw.to_string())
    });
    Ok(omnipay_core::to_float(&value)?)
}

/// One `identifier<TAB>class name` line per configured gateway
pub fn gateways(config_path: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let config = match config_path {
        Some(path) => FactoryConfig::from_file(path)?,
        None => FactoryConfig::discover()?,
    };
    let factory = GatewayFactory::from_config(config, GatewayCatalog::new());

    Ok(factory
        .all()
        .iter()
        .map(|id| format!("{}\t{}", id, factory.resolver().class_name(id)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_to_float_accepts_json_and_plain_strings() {
        assert_eq!(to_float("1.99").unwrap(), 1.99);
        assert_eq!(to_float("\"1.99\"").unwrap(), 1.99);
        assert_eq!(to_float("000009.99900000000").unwrap(), 9.999);
        assert_eq!(to_float("-199").unwrap(), -199.0);
    }

    #[test]
    fn test_to_float_errors() {
        assert_eq!(
            to_float(".99").unwrap_err().to_string(),
            "String is not a valid decimal number"
        );
        assert_eq!(
            to_float("false").unwrap_err().to_string(),
            "Data type is not a valid decimal number"
        );
    }

    #[test]
    fn test_gateways_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "vendor = \"Acme\"\ngateways = [\"Stripe\", \"PayPal_Express\"]").unwrap();

        let lines = gateways(Some(file.path())).unwrap();
        assert_eq!(
            lines,
            vec![
                "Stripe\t\\Acme\\Omnipay\\Stripe\\Gateway",
                "PayPal_Express\t\\Acme\\Omnipay\\PayPal\\ExpressGateway",
            ]
        );
    }
}

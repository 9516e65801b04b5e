//! # Gateway Naming Convention
//!
//! Translation between short gateway identifiers and fully-qualified gateway
//! class names.
//!
//! ```text
//! Stripe            ─┐
//! PayPal\Express    ─┼─►  \League\Omnipay\Stripe\Gateway
//! PayPal_Express    ─┘    \League\Omnipay\PayPal\ExpressGateway
//! \Custom\Gateway   ───►  \Custom\Gateway   (used verbatim)
//! ```
//!
//! Class names are plain strings. They key the [`GatewayCatalog`] and never
//! refer to Rust types directly.
//!
//! [`GatewayCatalog`]: crate::catalog::GatewayCatalog

use serde::{Deserialize, Serialize};

/// Separator between class name segments, also used as the leading marker
/// of an already fully-qualified name.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Vendor namespace used when none is configured
pub const DEFAULT_VENDOR: &str = "League";

/// Type name every single-segment gateway resolves to
const GATEWAY_SUFFIX: &str = "Gateway";

/// Resolves identifiers under `<vendor>\Omnipay\`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameResolver {
    vendor: String,
}

impl NameResolver {
    /// Create a resolver rooted at `<vendor>\Omnipay\`
    pub fn new(vendor: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
        }
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    /// Namespace prefix without the leading marker, e.g. `League\Omnipay\`
    pub fn namespace_prefix(&self) -> String {
        format!("{}\\Omnipay\\", self.vendor)
    }

    /// Resolve a gateway identifier to its fully-qualified class name.
    ///
    /// Identifiers starting with `\` are returned unchanged. Otherwise
    /// underscores act as namespace separators, the last segment is the
    /// short name and any preceding segments form the sub-namespace.
    pub fn class_name(&self, identifier: &str) -> String {
        if identifier.starts_with(NAMESPACE_SEPARATOR) {
            return identifier.to_string();
        }

        let normalized = identifier.replace('_', "\\");
        let prefix = self.namespace_prefix();

        match normalized.rsplit_once(NAMESPACE_SEPARATOR) {
            None => format!("\\{prefix}{normalized}\\{GATEWAY_SUFFIX}"),
            Some((namespace, short)) => {
                format!("\\{prefix}{namespace}\\{short}{GATEWAY_SUFFIX}")
            }
        }
    }

    /// Derive the short identifier for a fully-qualified class name.
    ///
    /// Best effort: class names outside the convention come back unchanged,
    /// and the result is not guaranteed to resolve back to the same class.
    pub fn short_name(&self, class_name: &str) -> String {
        let unmarked = class_name
            .strip_prefix(NAMESPACE_SEPARATOR)
            .unwrap_or(class_name);

        let Some(rest) = unmarked.strip_prefix(self.namespace_prefix().as_str()) else {
            return class_name.to_string();
        };

        match rest.rsplit_once(NAMESPACE_SEPARATOR) {
            Some((middle, tail)) if !middle.is_empty() && !tail.is_empty() => {
                let middle = middle.replace(NAMESPACE_SEPARATOR, "_");
                if tail == GATEWAY_SUFFIX {
                    middle
                } else {
                    let tail = tail.strip_suffix(GATEWAY_SUFFIX).unwrap_or(tail);
                    format!("{middle}_{tail}")
                }
            }
            _ => class_name.to_string(),
        }
    }

    /// True if `class_name` lives under this resolver's namespace
    pub fn follows_convention(&self, class_name: &str) -> bool {
        self.short_name(class_name) != class_name
    }
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new(DEFAULT_VENDOR)
    }
}

/// Resolve `identifier` with the default `League` resolver.
pub fn get_gateway_class_name(identifier: &str) -> String {
    NameResolver::default().class_name(identifier)
}

/// Derive a short name with the default `League` resolver.
pub fn get_gateway_short_name(class_name: &str) -> String {
    NameResolver::default().short_name(class_name)
}

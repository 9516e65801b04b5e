//! # Gateway Catalog
//!
//! Table of constructible gateway types, keyed by fully-qualified class
//! name. This is what the factory consults instead of looking types up by
//! name at runtime: a class name "exists" when a constructor was defined
//! for it.

use crate::gateway::{BoxedGateway, GatewayConstructor};
use crate::http::{SharedHttpClient, SharedRequestContext};
use crate::naming::NAMESPACE_SEPARATOR;

/// Known gateway constructors, in definition order
#[derive(Clone, Default)]
pub struct GatewayCatalog {
    entries: Vec<(String, GatewayConstructor)>,
}

impl GatewayCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Define a constructor for `class_name`. A second definition of the
    /// same class replaces the first.
    pub fn define(&mut self, class_name: &str, constructor: GatewayConstructor) {
        let key = canonical(class_name);
        match self.entries.iter_mut().find(|(name, _)| name == key) {
            Some(entry) => entry.1 = constructor,
            None => self.entries.push((key.to_string(), constructor)),
        }
    }

    /// Define with builder pattern
    pub fn with(mut self, class_name: &str, constructor: GatewayConstructor) -> Self {
        self.define(class_name, constructor);
        self
    }

    /// Check whether a constructor exists for `class_name`
    pub fn contains(&self, class_name: &str) -> bool {
        self.constructor(class_name).is_some()
    }

    /// Build the gateway defined for `class_name`, if any
    pub fn construct(
        &self,
        class_name: &str,
        http_client: Option<SharedHttpClient>,
        http_request: Option<SharedRequestContext>,
    ) -> Option<BoxedGateway> {
        self.constructor(class_name)
            .map(|constructor| constructor(http_client, http_request))
    }

    /// Fully-qualified names of all defined classes, with the leading marker
    pub fn class_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(name, _)| format!("{NAMESPACE_SEPARATOR}{name}"))
            .collect()
    }

    /// Constructor defined for `class_name`, if any
    pub fn constructor(&self, class_name: &str) -> Option<GatewayConstructor> {
        let key = canonical(class_name);
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, constructor)| *constructor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for GatewayCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(name, _)| name))
            .finish()
    }
}

/// `\Foo\Bar` and `Foo\Bar` name the same class
fn canonical(class_name: &str) -> &str {
    class_name
        .strip_prefix(NAMESPACE_SEPARATOR)
        .unwrap_or(class_name)
}

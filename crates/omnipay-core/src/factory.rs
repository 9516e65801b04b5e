//! # Gateway Factory
//!
//! Keeps the list of available gateway identifiers and builds gateway
//! instances by name.
//!
//! ```rust,ignore
//! use omnipay_core::{GatewayCatalog, GatewayFactory};
//!
//! let catalog = GatewayCatalog::new()
//!     .with("\\League\\Omnipay\\PayPal\\ExpressGateway", paypal_express);
//! let mut factory = GatewayFactory::new(catalog);
//! factory.register("PayPal_Express");
//!
//! let gateway = factory.create("PayPal_Express", Some(client), None)?;
//! ```
//!
//! The factory is plain owned state. Share it behind a lock if it must be
//! mutated from more than one thread.

use crate::catalog::GatewayCatalog;
use crate::config::FactoryConfig;
use crate::error::{OmnipayError, OmnipayResult};
use crate::gateway::BoxedGateway;
use crate::http::{SharedHttpClient, SharedRequestContext};
use crate::naming::NameResolver;
use tracing::debug;

/// Registry of gateway identifiers plus the catalog used to build them
#[derive(Debug, Clone, Default)]
pub struct GatewayFactory {
    gateways: Vec<String>,
    catalog: GatewayCatalog,
    resolver: NameResolver,
}

impl GatewayFactory {
    /// Create a factory with the default `League` naming convention
    pub fn new(catalog: GatewayCatalog) -> Self {
        Self::with_resolver(catalog, NameResolver::default())
    }

    /// Create a factory with a custom naming convention
    pub fn with_resolver(catalog: GatewayCatalog, resolver: NameResolver) -> Self {
        Self {
            gateways: Vec::new(),
            catalog,
            resolver,
        }
    }

    /// Create a factory from configuration: vendor namespace and the
    /// initial gateway list.
    pub fn from_config(config: FactoryConfig, catalog: GatewayCatalog) -> Self {
        let mut factory = Self::with_resolver(catalog, NameResolver::new(config.vendor));
        factory.replace(config.gateways);
        factory
    }

    /// All available gateways, in registration order
    pub fn all(&self) -> &[String] {
        &self.gateways
    }

    /// Replace the list of available gateways
    pub fn replace(&mut self, gateways: Vec<String>) {
        self.gateways = gateways;
    }

    /// Register a new gateway. Registering a known identifier is a no-op.
    pub fn register(&mut self, gateway: impl Into<String>) {
        let gateway = gateway.into();
        if !self.gateways.contains(&gateway) {
            self.gateways.push(gateway);
        }
    }

    /// Register the short name of every catalog class that follows the
    /// naming convention and return the resulting list.
    pub fn find(&mut self) -> &[String] {
        let short_names: Vec<String> = self
            .catalog
            .class_names()
            .iter()
            .filter(|class| self.resolver.follows_convention(class))
            .map(|class| self.resolver.short_name(class))
            .collect();

        for name in short_names {
            self.register(name);
        }
        self.all()
    }

    /// Create a new gateway instance.
    ///
    /// The identifier is first resolved through the naming convention; if no
    /// such class is defined, the identifier itself is tried as a class name.
    pub fn create(
        &self,
        gateway: &str,
        http_client: Option<SharedHttpClient>,
        http_request: Option<SharedRequestContext>,
    ) -> OmnipayResult<BoxedGateway> {
        let class = self.resolver.class_name(gateway);

        let constructor = if let Some(constructor) = self.catalog.constructor(&class) {
            debug!(%gateway, %class, "resolved gateway by naming convention");
            constructor
        } else if let Some(constructor) = self.catalog.constructor(gateway) {
            debug!(%gateway, "resolved gateway as literal class name");
            constructor
        } else {
            debug!(%gateway, %class, "gateway not found");
            return Err(OmnipayError::GatewayNotFound { class });
        };

        Ok(constructor(http_client, http_request))
    }

    pub fn catalog(&self) -> &GatewayCatalog {
        &self.catalog
    }

    /// Mutable access, for defining gateway types after construction
    pub fn catalog_mut(&mut self) -> &mut GatewayCatalog {
        &mut self.catalog
    }

    pub fn resolver(&self) -> &NameResolver {
        &self.resolver
    }
}

//! # Gateway Trait
//!
//! The capability every gateway implementation shares, and the constructor
//! signature the factory uses to build one.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Gateway (trait object)                     │
//! │  ├── name() / class_name() / short_name()                   │
//! │  ├── default_parameters()                                   │
//! │  └── initialize(parameters)                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                            │ fn(client?, request?) -> Box<dyn Gateway>
//!                  ┌─────────┴─────────┐
//!                  │  GatewayCatalog   │
//!                  └───────────────────┘
//! ```

use crate::error::OmnipayResult;
use crate::http::{SharedHttpClient, SharedRequestContext};
use crate::naming::get_gateway_short_name;
use crate::parameters::{initialize_parameters, ParameterTarget, Parameters};

/// Core trait for gateway implementations.
///
/// Each provider integration implements this trait plus whatever
/// provider-specific operations it offers. Settings are applied through
/// [`ParameterTarget`], so `initialize` works for any implementor.
pub trait Gateway: ParameterTarget + Send + Sync {
    /// Human readable name (e.g. "PayPal Express")
    fn name(&self) -> &str;

    /// Fully-qualified class name this gateway is registered under
    fn class_name(&self) -> &str;

    /// Short identifier derived from the class name (e.g. "PayPal_Express")
    fn short_name(&self) -> String {
        get_gateway_short_name(self.class_name())
    }

    /// Parameters applied before the caller's own on `initialize`
    fn default_parameters(&self) -> Parameters {
        Parameters::new()
    }

    /// Apply the default parameters, then `parameters`, through the setters.
    fn initialize(&mut self, parameters: &Parameters) -> OmnipayResult<()> {
        let defaults = self.default_parameters();
        initialize_parameters(self, &defaults)?;
        initialize_parameters(self, parameters)
    }
}

/// Owned gateway instance handed to the caller
pub type BoxedGateway = Box<dyn Gateway>;

/// Builds a gateway from the optional HTTP collaborators.
pub type GatewayConstructor =
    fn(Option<SharedHttpClient>, Option<SharedRequestContext>) -> BoxedGateway;

//! # omnipay-core
//!
//! Gateway selection and construction for the omnipay payment abstraction.
//!
//! This crate provides:
//! - `NameResolver` for mapping identifiers like `PayPal_Express` to class
//!   names like `\League\Omnipay\PayPal\ExpressGateway` and back
//! - `GatewayFactory` for tracking available gateways and building them
//! - `GatewayCatalog`, the table of constructible gateway types
//! - `Gateway`, `HttpClient` and `HttpRequestContext` collaborator types
//! - Strict helpers: `camel_case`, `initialize_parameters`, `validate_luhn`,
//!   `to_float`
//! - `OmnipayError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use omnipay_core::{GatewayCatalog, GatewayFactory, Parameters};
//!
//! let catalog = GatewayCatalog::new().with("\\League\\Omnipay\\Stripe\\Gateway", stripe);
//! let mut factory = GatewayFactory::new(catalog);
//! factory.register("Stripe");
//!
//! let mut gateway = factory.create("Stripe", Some(http_client), None)?;
//! gateway.initialize(&parameters)?;
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod factory;
pub mod gateway;
pub mod helper;
pub mod http;
pub mod naming;
pub mod parameters;

// Re-exports for convenience
pub use catalog::GatewayCatalog;
pub use config::FactoryConfig;
pub use error::{OmnipayError, OmnipayResult};
pub use factory::GatewayFactory;
pub use gateway::{BoxedGateway, Gateway, GatewayConstructor};
pub use helper::{camel_case, parse_decimal, to_float, validate_luhn};
pub use http::{
    HttpClient, HttpRequest, HttpRequestContext, HttpResponse, SharedHttpClient,
    SharedRequestContext,
};
pub use naming::{get_gateway_class_name, get_gateway_short_name, NameResolver};
pub use parameters::{initialize_parameters, setter_name, ParameterTarget, Parameters};

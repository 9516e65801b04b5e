//! # Parameter Initialization
//!
//! Applies a key/value map to an object through its own setters.
//! A key `return_url` is routed to the setter `setReturnUrl`; keys with no
//! matching setter are skipped.

use crate::error::OmnipayResult;
use crate::helper::{camel_case, ucfirst};
use serde_json::{Map, Value};
use tracing::trace;

/// Key/value parameters, as they arrive from configuration or a request body
pub type Parameters = Map<String, Value>;

/// An object whose fields can be set by setter name.
///
/// Implementors match on the setter names they support and return `false`
/// for everything else.
pub trait ParameterTarget {
    /// Invoke `setter` with `value`. Returns `false` if there is no such setter.
    fn apply_setter(&mut self, setter: &str, value: &Value) -> bool;

    /// Like [`apply_setter`](Self::apply_setter), for setters that validate
    /// their input. The default never fails.
    fn try_apply_setter(&mut self, setter: &str, value: &Value) -> OmnipayResult<bool> {
        Ok(self.apply_setter(setter, value))
    }
}

/// Setter name for a parameter key: `set` + upper-cased camel case.
pub fn setter_name(key: &str) -> String {
    format!("set{}", ucfirst(&camel_case(key)))
}

/// Initialize `target` from `parameters`, one setter call per key.
///
/// Stops at the first setter that rejects its value.
pub fn initialize_parameters<T>(target: &mut T, parameters: &Parameters) -> OmnipayResult<()>
where
    T: ParameterTarget + ?Sized,
{
    for (key, value) in parameters {
        let setter = setter_name(key);
        if !target.try_apply_setter(&setter, value)? {
            trace!(%key, %setter, "no setter for parameter, skipping");
        }
    }
    Ok(())
}

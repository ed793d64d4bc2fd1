//! # Operation Registry
//!
//! Call targets (`cube`, `union`, …) are not known to this crate; they are
//! resolved at execution time against a caller-supplied registry. An
//! operation receives its positional arguments, its named-argument mapping,
//! and — for module calls — an invocable children binding.
//!
//! ## Example
//!
//! ```rust
//! use csg_eval::{Invocation, Registry, Value};
//!
//! let mut registry = Registry::new();
//! registry.register("cube", |invocation: Invocation<'_>| {
//!     let size = invocation.args.first().and_then(Value::as_f64);
//!     Ok(Value::Float(size.unwrap_or(1.0)))
//! });
//! assert!(registry.contains("cube"));
//! ```

use crate::error::EvalError;
use crate::executor::Children;
use crate::value::Value;
use csg_parser::Span;
use indexmap::IndexMap;
use std::collections::HashMap;

// =============================================================================
// INVOCATION
// =============================================================================

/// Everything an operation receives for one call.
///
/// The reserved `__children` named argument never appears in `named`; the
/// executor strips it into the `children` handle before dispatch.
pub struct Invocation<'a> {
    /// The call target as written in the program.
    pub name: &'a str,
    /// Source span of the call statement.
    pub span: Span,
    /// Positional argument values in source order.
    pub args: Vec<Value>,
    /// Named argument values, insertion order preserved.
    pub named: IndexMap<String, Value>,
    /// The attached scope, when the call is a module call.
    pub children: Option<Children<'a>>,
}

impl Invocation<'_> {
    /// Named argument value by key.
    pub fn named_value(&self, key: &str) -> Option<&Value> {
        self.named.get(key)
    }

    /// Build an operation-failure error for this call.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use csg_eval::{Invocation, Registry, Value};
    ///
    /// let mut registry = Registry::new();
    /// registry.register("cube", |invocation: Invocation<'_>| {
    ///     match invocation.args.first() {
    ///         Some(_) => Ok(Value::Undef),
    ///         None => Err(invocation.fail("missing size")),
    ///     }
    /// });
    /// ```
    pub fn fail(&self, message: impl Into<String>) -> EvalError {
        EvalError::OperationFailed {
            name: self.name.to_string(),
            message: message.into(),
        }
    }
}

// =============================================================================
// OPERATION
// =============================================================================

/// A callable operation behind a registry name.
///
/// Implemented for free by any matching closure, so simple registries can
/// be built without named types.
pub trait Operation {
    /// Handle one call.
    fn call(&self, invocation: Invocation<'_>) -> Result<Value, EvalError>;
}

impl<F> Operation for F
where
    F: Fn(Invocation<'_>) -> Result<Value, EvalError>,
{
    fn call(&self, invocation: Invocation<'_>) -> Result<Value, EvalError> {
        self(invocation)
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Name-to-operation mapping injected into the executor.
///
/// ## Example
///
/// ```rust
/// use csg_eval::{Invocation, Registry, Value};
///
/// let mut registry = Registry::new();
/// registry.register("sphere", |_invocation: Invocation<'_>| Ok(Value::Undef));
///
/// let results = csg_eval::execute_source("sphere(2);", &registry).unwrap();
/// assert_eq!(results, vec![Value::Undef]);
/// ```
#[derive(Default)]
pub struct Registry {
    /// Registered operations by call-target name.
    operations: HashMap<String, Box<dyn Operation>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an operation under a name.
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn register(&mut self, name: impl Into<String>, operation: impl Operation + 'static) {
        self.operations.insert(name.into(), Box::new(operation));
    }

    /// Look up an operation by name.
    pub fn get(&self, name: &str) -> Option<&dyn Operation> {
        self.operations.get(name).map(Box::as_ref)
    }

    /// Check whether a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }
}

// =============================================================================
// TESTS
// =============================================================================

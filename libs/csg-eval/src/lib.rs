//! # CSG Eval Crate
//!
//! Registry-driven execution of CSG programs. The executable program
//! representation built by `csg-ast` names its call targets but never
//! interprets them; this crate walks the statement sequence and dispatches
//! every call through an injected registry of named operations.
//!
//! ## Architecture
//!
//! ```text
//! Program ──→ Executor ──→ Registry (name → Operation)
//!                │
//!                └─ __children binding → Children handle → nested run
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use csg_eval::{execute_source, Invocation, Registry, Value};
//!
//! let mut registry = Registry::new();
//! registry.register("cube", |invocation: Invocation<'_>| {
//!     Ok(invocation.args[0].clone())
//! });
//! registry.register("union", |invocation: Invocation<'_>| {
//!     let nested = invocation.children.as_ref().unwrap().run()?;
//!     Ok(Value::Vector(nested))
//! });
//!
//! let results = execute_source("union() { cube(1); cube(2); }", &registry).unwrap();
//! assert_eq!(
//!     results,
//!     vec![Value::Vector(vec![Value::Integer(1), Value::Integer(2)])]
//! );
//! ```
//!
//! ## Design Principles
//!
//! - **Dispatch by Name**: call semantics live entirely in the registry;
//!   the executor only resolves and invokes
//! - **Order Preservation**: statements run in program order, so scope
//!   function definitions exist before the calls that reference them
//! - **Children as Capability**: an operation decides if and how often its
//!   attached scope runs

pub mod error;
pub mod executor;
pub mod registry;
pub mod value;

// Re-exports for convenience
pub use error::EvalError;
pub use executor::{Children, Executor};
pub use registry::{Invocation, Operation, Registry};
pub use value::Value;

use csg_ast::Program;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Execute a program against a registry.
///
/// ## Returns
///
/// The result value of every top-level call statement, in order.
pub fn execute(program: &Program, registry: &Registry) -> Result<Vec<Value>, EvalError> {
    Executor::new(registry).run(program)
}

/// Parse source, build its program, and execute it against a registry.
///
/// ## Example
///
/// ```rust
/// use csg_eval::{Invocation, Registry, Value};
///
/// let mut registry = Registry::new();
/// registry.register("cube", |_invocation: Invocation<'_>| Ok(Value::Undef));
///
/// let results = csg_eval::execute_source("cube(10);", &registry).unwrap();
/// assert_eq!(results, vec![Value::Undef]);
/// ```
pub fn execute_source(source: &str, registry: &Registry) -> Result<Vec<Value>, EvalError> {
    let program = csg_ast::program_from_source(source)?;
    execute(&program, registry)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_source_runs_pipeline_end_to_end() {
        let mut registry = Registry::new();
        registry.register("sphere", |invocation: Invocation<'_>| {
            Ok(invocation.args[0].clone())
        });

        let results = execute_source("sphere(2);", &registry).unwrap();
        assert_eq!(results, vec![Value::Integer(2)]);
    }

    #[test]
    fn test_execute_source_propagates_parse_errors() {
        let registry = Registry::new();
        let err = execute_source("cube(", &registry).unwrap_err();
        assert!(matches!(err, EvalError::Parse(_)));
    }

    #[test]
    fn test_special_variables_dispatch_under_rewritten_key() {
        let mut registry = Registry::new();
        registry.register("sphere", |invocation: Invocation<'_>| {
            assert!(invocation.named_value("DOLLAR_fn").is_some());
            assert!(invocation.named_value("$fn").is_none());
            Ok(Value::Undef)
        });

        execute_source("sphere(2, $fn = 10);", &registry).unwrap();
    }
}

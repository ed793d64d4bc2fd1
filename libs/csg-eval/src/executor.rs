//! # Program Executor
//!
//! Walks the executable program representation in order, dispatching call
//! statements through an injected [`Registry`]. Function definitions
//! synthesized for scopes land in a lexical scope stack (innermost-first
//! lookup); the reserved `__children` named argument is stripped into a
//! [`Children`] handle the operation can invoke to run the attached scope.
//!
//! The executor never interprets call semantics itself. It evaluates
//! argument expressions to values, resolves the call target, and hands
//! everything over; what `cube` or `union` mean is the registry's business.
//!
//! ## Example
//!
//! ```rust
//! use csg_eval::{Executor, Invocation, Registry, Value};
//!
//! let mut registry = Registry::new();
//! registry.register("sphere", |_invocation: Invocation<'_>| Ok(Value::Undef));
//! registry.register("union", |invocation: Invocation<'_>| {
//!     let children = invocation.children.as_ref().unwrap();
//!     children.run()?;
//!     Ok(Value::Undef)
//! });
//!
//! let program = csg_ast::program_from_source("union() { sphere(2); }").unwrap();
//! let results = Executor::new(&registry).run(&program).unwrap();
//! assert_eq!(results.len(), 1);
//! ```

use crate::error::EvalError;
use crate::registry::{Invocation, Registry};
use crate::value::Value;
use config::constants::CHILDREN_KEYWORD;
use csg_ast::{CallStmt, Expr, Literal, Program, Stmt};
use csg_parser::Spanned;
use indexmap::IndexMap;
use std::collections::HashMap;

// =============================================================================
// SCOPE STACK
// =============================================================================

/// Lexical scope stack holding scope-function definitions.
///
/// Levels are pushed when entering a statement sequence and popped on the
/// way out; lookup walks innermost to outermost. The stack borrows
/// statement bodies from the program, so snapshotting it for a children
/// binding is a cheap clone.
#[derive(Debug, Clone)]
struct ScopeStack<'a> {
    /// Scope levels, innermost last.
    levels: Vec<HashMap<&'a str, &'a [Stmt]>>,
}

impl<'a> ScopeStack<'a> {
    fn new() -> Self {
        Self { levels: Vec::new() }
    }

    fn push(&mut self) {
        self.levels.push(HashMap::new());
    }

    fn pop(&mut self) {
        self.levels.pop();
    }

    /// Define a function in the current level, shadowing outer ones.
    fn define(&mut self, name: &'a str, body: &'a [Stmt]) {
        if let Some(level) = self.levels.last_mut() {
            level.insert(name, body);
        }
    }

    /// Look up a function body, innermost level first.
    fn get(&self, name: &str) -> Option<&'a [Stmt]> {
        self.levels
            .iter()
            .rev()
            .find_map(|level| level.get(name).copied())
    }
}

// =============================================================================
// CHILDREN
// =============================================================================

/// An invocable handle on a module call's attached scope.
///
/// Holds the referenced scope function's body together with a snapshot of
/// the scope stack at binding time, so nested definitions resolve the same
/// way whenever the operation chooses to run it — zero or more times.
pub struct Children<'a> {
    /// Registry the nested statements dispatch through.
    registry: &'a Registry,
    /// Body of the referenced scope function.
    body: &'a [Stmt],
    /// Scope stack as of the binding.
    scopes: ScopeStack<'a>,
}

impl Children<'_> {
    /// Run the attached scope's statements in order.
    ///
    /// ## Returns
    ///
    /// The result value of every call statement in the scope, in order.
    pub fn run(&self) -> Result<Vec<Value>, EvalError> {
        Executor::new(self.registry).run_statements(self.body, &mut self.scopes.clone())
    }

    /// Number of statements in the attached scope.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check whether the attached scope is empty.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

// =============================================================================
// EXECUTOR
// =============================================================================

/// Registry-driven walker over a program's statement sequence.
pub struct Executor<'a> {
    /// Injected operation registry.
    registry: &'a Registry,
}

impl<'a> Executor<'a> {
    /// Create an executor over a registry.
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Execute a program.
    ///
    /// Statements run in program order; function definitions synthesized
    /// for scopes always precede the call that references them, so every
    /// `__children` binding resolves by the time its call dispatches.
    ///
    /// ## Returns
    ///
    /// The result value of every top-level call statement, in order.
    pub fn run(&self, program: &'a Program) -> Result<Vec<Value>, EvalError> {
        self.run_statements(&program.body, &mut ScopeStack::new())
    }

    /// Execute one statement sequence in a fresh scope level.
    fn run_statements(
        &self,
        body: &'a [Stmt],
        scopes: &mut ScopeStack<'a>,
    ) -> Result<Vec<Value>, EvalError> {
        scopes.push();
        let mut results = Vec::new();
        for stmt in body {
            match stmt {
                Stmt::FunctionDef(def) => scopes.define(&def.name, &def.body),
                Stmt::Call(call) => results.push(self.run_call(call, scopes)?),
            }
        }
        scopes.pop();
        Ok(results)
    }

    /// Dispatch one call statement through the registry.
    fn run_call(&self, call: &'a CallStmt, scopes: &ScopeStack<'a>) -> Result<Value, EvalError> {
        let args = call
            .args
            .iter()
            .map(|expr| self.eval_expr(expr))
            .collect::<Result<Vec<_>, _>>()?;

        // The reserved children key never reaches the operation as a value;
        // it becomes the invocable handle.
        let mut named = IndexMap::new();
        let mut children = None;
        for (key, value) in &call.named {
            if key == CHILDREN_KEYWORD {
                children = Some(self.resolve_children(value, scopes)?);
            } else {
                named.insert(key.clone(), self.eval_expr(value)?);
            }
        }

        let operation = self
            .registry
            .get(&call.name)
            .ok_or_else(|| EvalError::UnknownOperation {
                name: call.name.clone(),
                span: call.span,
            })?;

        operation.call(Invocation {
            name: &call.name,
            span: call.span,
            args,
            named,
            children,
        })
    }

    /// Resolve a `__children` binding into an invocable handle.
    fn resolve_children(
        &self,
        value: &'a Expr,
        scopes: &ScopeStack<'a>,
    ) -> Result<Children<'a>, EvalError> {
        let (name, span) = match value {
            Expr::Ref { name, span } => (name, *span),
            other => {
                return Err(EvalError::InvalidChildrenBinding { span: other.span() });
            }
        };
        let body = scopes.get(name).ok_or_else(|| EvalError::UnresolvedReference {
            name: name.clone(),
            span,
        })?;

        Ok(Children {
            registry: self.registry,
            body,
            scopes: scopes.clone(),
        })
    }

    /// Evaluate an argument expression to a value.
    fn eval_expr(&self, expr: &Expr) -> Result<Value, EvalError> {
        match expr {
            Expr::Literal { value, .. } => Ok(match value {
                Literal::Undef => Value::Undef,
                Literal::Bool(v) => Value::Boolean(*v),
                Literal::Int(v) => Value::Integer(*v),
                Literal::Float(v) => Value::Float(*v),
            }),
            Expr::List { items, .. } => Ok(Value::Vector(
                items
                    .iter()
                    .map(|item| self.eval_expr(item))
                    .collect::<Result<_, _>>()?,
            )),
            // Scope references are only legal behind the children binding;
            // the grammar has no variables for a bare name to mean.
            Expr::Ref { name, span } => Err(EvalError::UnresolvedReference {
                name: name.clone(),
                span: *span,
            }),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! # Executable Program Representation
//!
//! The structured, ordered statement form handed to an executor. A program
//! is a flat sequence of statements: function definitions synthesized from
//! scopes, and call expressions. Every node carries the source span of the
//! parse-tree node it was derived from, so diagnostics downstream can map
//! back to source.
//!
//! Nodes are created once by the builder and never mutated.
//!
//! ## Example
//!
//! ```rust
//! use csg_ast::program_from_source;
//! use csg_ast::program::Stmt;
//!
//! let program = program_from_source("union() { sphere(2); }").unwrap();
//! assert!(matches!(program.body[0], Stmt::FunctionDef(_)));
//! assert!(matches!(program.body[1], Stmt::Call(_)));
//! ```

use csg_parser::{Span, Spanned};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// PROGRAM
// =============================================================================

/// An executable program: the ordered top-level statement sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Top-level statements in program order.
    pub body: Vec<Stmt>,
    /// Span of the whole source.
    pub span: Span,
}

impl Spanned for Program {
    fn span(&self) -> Span {
        self.span
    }
}

// =============================================================================
// STATEMENTS
// =============================================================================

/// A program statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stmt {
    /// Function definition synthesized for a scope.
    FunctionDef(FunctionDef),
    /// Call expression statement.
    Call(CallStmt),
}

impl Stmt {
    /// The call statement, if this is one.
    pub fn as_call(&self) -> Option<&CallStmt> {
        match self {
            Stmt::Call(call) => Some(call),
            Stmt::FunctionDef(_) => None,
        }
    }

    /// The function definition, if this is one.
    pub fn as_function_def(&self) -> Option<&FunctionDef> {
        match self {
            Stmt::FunctionDef(def) => Some(def),
            Stmt::Call(_) => None,
        }
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        match self {
            Stmt::FunctionDef(def) => def.span,
            Stmt::Call(call) => call.span,
        }
    }
}

/// A function definition hoisted from a scope.
///
/// The parameter list is always empty; a scope takes nothing and is run
/// for its statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    /// Synthesized name, unique within the program.
    pub name: String,
    /// Statements of the scope, flattened in source order.
    pub body: Vec<Stmt>,
    /// Span of the originating scope.
    pub span: Span,
}

impl Spanned for FunctionDef {
    fn span(&self) -> Span {
        self.span
    }
}

/// A call expression statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallStmt {
    /// Call target, resolved by the executor against its registry.
    pub name: String,
    /// Positional argument values in source order.
    pub args: Vec<Expr>,
    /// Named arguments, insertion order preserved, keys unique
    /// (a duplicated key in source keeps the last value).
    pub named: IndexMap<String, Expr>,
    /// Span of the originating statement.
    pub span: Span,
}

impl Spanned for CallStmt {
    fn span(&self) -> Span {
        self.span
    }
}

// =============================================================================
// EXPRESSIONS
// =============================================================================

/// An argument value expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// Literal value.
    Literal {
        /// The value.
        value: Literal,
        /// Span of the originating terminal.
        span: Span,
    },
    /// Ordered sequence literal.
    List {
        /// Element expressions in source order.
        items: Vec<Expr>,
        /// Span of the originating array node.
        span: Span,
    },
    /// Reference to a name: an identifier used as a value, or the target
    /// of a `__children` binding.
    Ref {
        /// Referenced name (already rewritten for the executable namespace).
        name: String,
        /// Span of the originating terminal or scope.
        span: Span,
    },
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        match self {
            Expr::Literal { span, .. } | Expr::List { span, .. } | Expr::Ref { span, .. } => *span,
        }
    }
}

/// A literal terminal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    /// The undef sentinel.
    Undef,
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Undef => write!(f, "undef"),
            Literal::Bool(v) => write!(f, "{}", v),
            Literal::Int(v) => write!(f, "{}", v),
            // {:?} keeps the fractional marker: 2.0 stays "2.0", not "2"
            Literal::Float(v) => write!(f, "{:?}", v),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

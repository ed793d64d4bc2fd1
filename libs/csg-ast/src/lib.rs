//! # CSG AST Crate
//!
//! The two renderers over a parsed CSG scene: the executable-form builder
//! and the canonical writer. Both consume the same immutable parse tree
//! from `csg-parser`; neither sees the other's output.
//!
//! ## Architecture
//!
//! ```text
//!                         ┌→ builder → Program → csg-eval / emit (text)
//! Source → csg-parser ────┤
//!                         └→ writer  → canonical CSG text
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use csg_ast::{canonicalize, program_from_source};
//!
//! let program = program_from_source("union() { sphere(2); }").unwrap();
//! assert_eq!(program.body.len(), 2);
//!
//! let text = canonicalize("union(){sphere(2);}").unwrap();
//! assert_eq!(text, "union() {\n  sphere(2);\n}");
//! ```
//!
//! ## Design Principles
//!
//! - **Source Mapping**: every program node carries the span of the tree
//!   node it was derived from
//! - **No Evaluation**: pure syntax transformation, call targets stay
//!   opaque names
//! - **Independent Consumers**: the builder's identifier rewrite is never
//!   visible to the writer

pub mod builder;
pub mod emit;
pub mod program;
pub mod writer;

// Re-exports for convenience
pub use builder::{build, Builder};
pub use emit::emit;
pub use program::{CallStmt, Expr, FunctionDef, Literal, Program, Stmt};
pub use writer::CanonicalWriter;

use csg_parser::ParseError;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse source and build its executable program representation.
///
/// ## Example
///
/// ```rust
/// let program = csg_ast::program_from_source("cube(10);").unwrap();
/// assert_eq!(program.body.len(), 1);
/// ```
pub fn program_from_source(source: &str) -> Result<Program, ParseError> {
    Ok(build(&csg_parser::parse(source)?))
}

/// Parse source and render its canonical form with the default indent.
///
/// ## Example
///
/// ```rust
/// let text = csg_ast::canonicalize("cube( 10 );").unwrap();
/// assert_eq!(text, "cube(10);");
/// ```
pub fn canonicalize(source: &str) -> Result<String, ParseError> {
    Ok(CanonicalWriter::new().write(&csg_parser::parse(source)?))
}

// =============================================================================
// TESTS
// =============================================================================

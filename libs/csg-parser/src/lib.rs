//! # CSG Parser (Pure Rust)
//!
//! A pure Rust parser for the OpenSCAD CSG scene format.
//! No C dependencies, no generated code.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Parse Tree
//! ```
//!
//! ## Example
//!
//! ```rust
//! use csg_parser::parse;
//!
//! let tree = parse("cube(10);").unwrap();
//! assert_eq!(tree.root.children.len(), 1);
//! ```
//!
//! ## Pipeline Integration
//!
//! This crate is the first layer in the CSG pipeline:
//!
//! ```text
//! csg-parser → csg-ast → csg-eval
//! ```
//!
//! Both renderers in `csg-ast` consume the same immutable parse tree: the
//! executable-form builder through typed token values (with identifier
//! substitution), the canonical writer through original token text.

pub mod error;
pub mod lexer;
pub mod normalize;
pub mod parser;
pub mod span;
pub mod tree;

// Re-export public API
pub use error::{ParseError, ParseErrorKind};
pub use lexer::{Token, TokenKind, TokenValue};
pub use span::{Position, Span, Spanned};
pub use tree::{NodeKind, ParseTree, TreeItem, TreeNode};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse CSG scene source into a parse tree.
///
/// This is the main entry point for the parser.
///
/// ## Parameters
///
/// - `source`: CSG scene source text
///
/// ## Returns
///
/// The parse tree, or the first lex/parse error with its source position.
/// Errors are fatal; there is no recovery and no partial tree.
///
/// ## Example
///
/// ```rust
/// use csg_parser::{parse, NodeKind};
///
/// let tree = parse("union() { sphere(2); }").unwrap();
/// let module = tree.root.children[0].as_node().unwrap();
/// assert_eq!(module.kind, NodeKind::Module);
/// ```
pub fn parse(source: &str) -> Result<ParseTree, ParseError> {
    let tokens = lexer::Lexer::new(source).tokenize()?;
    parser::Parser::new(tokens).parse()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test parsing simple cube call.
    #[test]
    fn test_parse_cube() {
        let tree = parse("cube(10);").unwrap();
        assert_eq!(tree.root.kind, NodeKind::Start);
        assert_eq!(tree.root.children.len(), 1);
    }

    /// Test parsing cube with named argument.
    #[test]
    fn test_parse_cube_center() {
        assert!(parse("cube(10, center = true);").is_ok());
    }

    /// Test parsing union with block.
    #[test]
    fn test_parse_union() {
        let tree = parse("union() { sphere(2); cube(1); }").unwrap();
        let module = tree.root.children[0].as_node().unwrap();
        assert_eq!(module.kind, NodeKind::Module);
    }

    /// Test parse errors carry positions.
    #[test]
    fn test_parse_error_position() {
        let err = parse("cube(10)\n;;").unwrap_err();
        assert_eq!(err.span.start.line, 1);
    }

    /// Test the tree serializes (raw dump artifact).
    #[test]
    fn test_tree_is_serializable() {
        let tree = parse("cube(10);").unwrap();
        let json = serde_json::to_string(&tree).unwrap();
        assert!(json.contains("object"));
    }
}

//! # Parse Errors
//!
//! Error types for the CSG lexer and parser. Grammar and lex errors are
//! fatal: the pipeline aborts on the first one, reporting its source
//! position. There is no recovery and no partial output.
//!
//! ## Example
//!
//! ```rust
//! use csg_parser::parse;
//!
//! let err = parse("cube(10)").unwrap_err();
//! assert!(err.to_string().contains("unexpected end of file"));
//! ```

use crate::span::Span;
use thiserror::Error;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A parse error with location information.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at {span}")]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Source location of the error.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    ///
    /// ## Parameters
    ///
    /// - `kind`: Error kind
    /// - `span`: Source location
    pub const fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Create an unexpected token error.
    pub fn unexpected_token(found: &str, expected: &str, span: Span) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                found: found.to_string(),
                expected: expected.to_string(),
            },
            span,
        )
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: &str, span: Span) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof {
                expected: expected.to_string(),
            },
            span,
        )
    }
}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// Character the lexer cannot start a token with.
    #[error("unexpected character '{found}'")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
    },

    /// Numeric literal that does not fit its 64-bit type.
    #[error("invalid number '{text}'")]
    InvalidNumber {
        /// The invalid text.
        text: String,
    },

    /// Found a token the grammar does not allow here.
    #[error("unexpected token '{found}', expected {expected}")]
    UnexpectedToken {
        /// Token text that was found.
        found: String,
        /// Description of what was expected.
        expected: String,
    },

    /// Source ended mid-production.
    #[error("unexpected end of file, expected {expected}")]
    UnexpectedEof {
        /// Description of what was expected.
        expected: String,
    },
}

// =============================================================================
// TESTS
// =============================================================================

//! # Terminal Normalizer
//!
//! Coerces raw lexeme text into typed terminal values, and rewrites
//! identifiers for the executable namespace.
//!
//! The two consumers of the parse tree split here: the lexer calls
//! [`coerce`] once per terminal so every token carries its typed value,
//! while [`executable_identifier`] is applied only on the path feeding the
//! executable-form builder. The canonical writer reads original token text
//! and never sees the substitution, so `$fn` survives round-tripping even
//! though the executable representation says `DOLLAR_fn`.
//!
//! ## Example
//!
//! ```rust
//! use csg_parser::lexer::{TokenKind, TokenValue};
//! use csg_parser::normalize;
//!
//! assert_eq!(normalize::coerce(TokenKind::Int, "-42"), Some(TokenValue::Int(-42)));
//! assert_eq!(normalize::executable_identifier("$fn"), "DOLLAR_fn");
//! ```

use crate::lexer::{TokenKind, TokenValue};
use config::constants::SPECIAL_VARIABLE_SUBSTITUTE;

/// Coerce raw lexeme text into the typed value for its terminal kind.
///
/// ## Returns
///
/// The typed value, or None when a numeric lexeme does not fit its 64-bit
/// type (the only possible failure: the lexer already validated the shape).
pub fn coerce(kind: TokenKind, text: &str) -> Option<TokenValue> {
    let value = match kind {
        TokenKind::Int => TokenValue::Int(text.parse().ok()?),
        TokenKind::Float => TokenValue::Float(text.parse().ok()?),
        TokenKind::True => TokenValue::Bool(true),
        TokenKind::False => TokenValue::Bool(false),
        TokenKind::Undef => TokenValue::Undef,
        TokenKind::Identifier => TokenValue::Ident(text.to_string()),
        _ => TokenValue::None,
    };
    Some(value)
}

/// Rewrite an identifier so it is valid in the executable namespace.
///
/// Every `$` becomes [`SPECIAL_VARIABLE_SUBSTITUTE`]. The rewrite is lossy
/// and one-directional; nothing reverses it.
///
/// ## Example
///
/// ```rust
/// use csg_parser::normalize::executable_identifier;
///
/// assert_eq!(executable_identifier("cube"), "cube");
/// assert_eq!(executable_identifier("$fa"), "DOLLAR_fa");
/// ```
pub fn executable_identifier(name: &str) -> String {
    name.replace('$', SPECIAL_VARIABLE_SUBSTITUTE)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_int() {
        assert_eq!(coerce(TokenKind::Int, "10"), Some(TokenValue::Int(10)));
        assert_eq!(coerce(TokenKind::Int, "-7"), Some(TokenValue::Int(-7)));
    }

    #[test]
    fn test_coerce_int_overflow() {
        assert_eq!(coerce(TokenKind::Int, "99999999999999999999"), None);
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(
            coerce(TokenKind::Float, "3.14"),
            Some(TokenValue::Float(3.14))
        );
        assert_eq!(
            coerce(TokenKind::Float, "-0.5"),
            Some(TokenValue::Float(-0.5))
        );
        assert_eq!(coerce(TokenKind::Float, "1e3"), Some(TokenValue::Float(1000.0)));
    }

    #[test]
    fn test_coerce_keywords() {
        assert_eq!(coerce(TokenKind::True, "true"), Some(TokenValue::Bool(true)));
        assert_eq!(
            coerce(TokenKind::False, "false"),
            Some(TokenValue::Bool(false))
        );
        assert_eq!(coerce(TokenKind::Undef, "undef"), Some(TokenValue::Undef));
    }

    #[test]
    fn test_coerce_identifier_keeps_dollar() {
        assert_eq!(
            coerce(TokenKind::Identifier, "$fn"),
            Some(TokenValue::Ident("$fn".to_string()))
        );
    }

    #[test]
    fn test_coerce_punctuation() {
        assert_eq!(coerce(TokenKind::Semicolon, ";"), Some(TokenValue::None));
    }

    #[test]
    fn test_executable_identifier_plain() {
        assert_eq!(executable_identifier("translate"), "translate");
    }

    #[test]
    fn test_executable_identifier_rewrites_every_dollar() {
        assert_eq!(executable_identifier("$a$b"), "DOLLAR_aDOLLAR_b");
    }
}

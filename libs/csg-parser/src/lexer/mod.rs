//! # CSG Lexer
//!
//! Tokenizes CSG scene source into tokens, coercing each terminal to its
//! typed value through the normalizer as it goes.
//!
//! Lex errors are fatal: the first unexpected character or malformed
//! number aborts tokenization with its source position.
//!
//! ## Example
//!
//! ```rust
//! use csg_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("cube(10);").tokenize().unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Identifier);
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind, TokenValue};

use crate::error::{ParseError, ParseErrorKind};
use crate::normalize;
use crate::span::{Position, Span};

// =============================================================================
// LEXER
// =============================================================================

/// CSG lexer.
///
/// Converts source text into a stream of typed tokens.
///
/// ## Example
///
/// ```rust
/// use csg_parser::lexer::Lexer;
///
/// let tokens = Lexer::new("union() { }").tokenize().unwrap();
/// assert_eq!(tokens.len(), 6); // union ( ) { } EOF
/// ```
pub struct Lexer<'a> {
    /// Source text being lexed.
    source: &'a str,
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// Vector of tokens including a trailing EOF token, or the first lex
    /// error with its source position.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        while !self.cursor.is_eof() {
            self.skip_whitespace_and_comments();
            if self.cursor.is_eof() {
                break;
            }
            self.scan_token()?;
        }

        let eof_pos = self.cursor.position();
        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(eof_pos, eof_pos),
            "",
            TokenValue::None,
        ));

        Ok(self.tokens)
    }

    /// Skip whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.cursor.advance_while(|c| c.is_whitespace());

            // Line comments
            if self.cursor.peek() == Some('/') && self.cursor.peek_next() == Some('/') {
                self.cursor.advance_while(|c| c != '\n');
                continue;
            }

            // Block comments
            if self.cursor.peek() == Some('/') && self.cursor.peek_next() == Some('*') {
                self.cursor.advance(); // /
                self.cursor.advance(); // *
                while !self.cursor.is_eof() {
                    if self.cursor.peek() == Some('*') && self.cursor.peek_next() == Some('/') {
                        self.cursor.advance(); // *
                        self.cursor.advance(); // /
                        break;
                    }
                    self.cursor.advance();
                }
                continue;
            }

            break;
        }
    }

    /// Scan a single token.
    fn scan_token(&mut self) -> Result<(), ParseError> {
        let start = self.cursor.position();
        let c = match self.cursor.advance() {
            Some(c) => c,
            None => return Ok(()),
        };

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '=' => TokenKind::Eq,

            // Signed number: the grammar has no operators, so a minus can
            // only introduce a signed literal.
            '-' if self.cursor.peek().map_or(false, |c| c.is_ascii_digit()) => {
                return self.scan_number(start);
            }

            '0'..='9' => return self.scan_number(start),

            'a'..='z' | 'A'..='Z' | '_' | '$' => return self.scan_identifier(start),

            _ => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedCharacter { found: c },
                    Span::new(start, self.cursor.position()),
                ));
            }
        };

        self.push_token(kind, start);
        Ok(())
    }

    /// Scan a number literal (sign and first digit may be consumed).
    fn scan_number(&mut self, start: Position) -> Result<(), ParseError> {
        let mut has_dot = false;
        let mut has_exponent = false;

        while let Some(c) = self.cursor.peek() {
            match c {
                '0'..='9' => {
                    self.cursor.advance();
                }
                '.' if !has_dot && !has_exponent => {
                    has_dot = true;
                    self.cursor.advance();
                }
                'e' | 'E' if !has_exponent => {
                    has_exponent = true;
                    self.cursor.advance();
                    if matches!(self.cursor.peek(), Some('+') | Some('-')) {
                        self.cursor.advance();
                    }
                }
                _ => break,
            }
        }

        let kind = if has_dot || has_exponent {
            TokenKind::Float
        } else {
            TokenKind::Int
        };

        let end = self.cursor.position();
        let span = Span::new(start, end);
        let text = &self.source[start.byte..end.byte];
        let value = normalize::coerce(kind, text).ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::InvalidNumber {
                    text: text.to_string(),
                },
                span,
            )
        })?;

        self.tokens.push(Token::new(kind, span, text, value));
        Ok(())
    }

    /// Scan an identifier or keyword (first character consumed).
    fn scan_identifier(&mut self, start: Position) -> Result<(), ParseError> {
        self.cursor
            .advance_while(|c| c.is_ascii_alphanumeric() || c == '_');

        let end = self.cursor.position();
        let text = &self.source[start.byte..end.byte];

        let kind = match text {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "undef" => TokenKind::Undef,
            _ => TokenKind::Identifier,
        };

        self.push_token(kind, start);
        Ok(())
    }

    /// Push a token whose coercion cannot fail.
    fn push_token(&mut self, kind: TokenKind, start: Position) {
        let end = self.cursor.position();
        let text = &self.source[start.byte..end.byte];
        let value = normalize::coerce(kind, text)
            .unwrap_or_else(|| unreachable!("only numeric coercion can fail"));
        self.tokens
            .push(Token::new(kind, Span::new(start, end), text, value));
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(source: &str) -> Vec<Token> {
        Lexer::new(source).tokenize().unwrap()
    }

    #[test]
    fn test_tokenize_cube() {
        let tokens = tokenize("cube(10);");

        // cube, (, 10, ), ;, EOF = 6 tokens
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "cube");
        assert_eq!(tokens[1].kind, TokenKind::LParen);
        assert_eq!(tokens[2].kind, TokenKind::Int);
        assert_eq!(tokens[2].value, TokenValue::Int(10));
        assert_eq!(tokens[3].kind, TokenKind::RParen);
        assert_eq!(tokens[4].kind, TokenKind::Semicolon);
        assert_eq!(tokens[5].kind, TokenKind::Eof);
    }

    #[test]
    fn test_tokenize_with_comments() {
        let tokens = tokenize("// comment\n/* block */ cube(10);");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "cube");
        assert_eq!(tokens[0].span.start.line, 0);
    }

    #[test]
    fn test_tokenize_keywords() {
        let tokens = tokenize("true false undef");
        assert_eq!(tokens[0].value, TokenValue::Bool(true));
        assert_eq!(tokens[1].value, TokenValue::Bool(false));
        assert_eq!(tokens[2].value, TokenValue::Undef);
    }

    #[test]
    fn test_tokenize_special_variable() {
        let tokens = tokenize("$fn");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "$fn");
        assert_eq!(tokens[0].value, TokenValue::Ident("$fn".to_string()));
    }

    #[test]
    fn test_tokenize_float() {
        let tokens = tokenize("3.14");
        assert_eq!(tokens[0].kind, TokenKind::Float);
        assert_eq!(tokens[0].value, TokenValue::Float(3.14));
    }

    #[test]
    fn test_tokenize_signed_numbers() {
        let tokens = tokenize("-5 -2.5");
        assert_eq!(tokens[0].kind, TokenKind::Int);
        assert_eq!(tokens[0].value, TokenValue::Int(-5));
        assert_eq!(tokens[1].kind, TokenKind::Float);
        assert_eq!(tokens[1].value, TokenValue::Float(-2.5));
    }

    #[test]
    fn test_tokenize_exponent() {
        let tokens = tokenize("1e-3");
        assert_eq!(tokens[0].kind, TokenKind::Float);
        assert_eq!(tokens[0].value, TokenValue::Float(0.001));
    }

    #[test]
    fn test_tokenize_named_argument() {
        let tokens = tokenize("center=true");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].kind, TokenKind::Eq);
        assert_eq!(tokens[2].kind, TokenKind::True);
    }

    #[test]
    fn test_tokenize_rejects_unknown_character() {
        let err = Lexer::new("cube(10) @").tokenize().unwrap_err();
        assert!(matches!(
            err.kind,
            ParseErrorKind::UnexpectedCharacter { found: '@' }
        ));
        assert_eq!(err.span.start.column, 9);
    }

    #[test]
    fn test_tokenize_rejects_oversized_int() {
        let err = Lexer::new("cube(99999999999999999999);")
            .tokenize()
            .unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::InvalidNumber { .. }));
    }

    #[test]
    fn test_tokenize_spans() {
        let tokens = tokenize("cube(10);");
        assert_eq!(tokens[0].span.start.byte, 0);
        assert_eq!(tokens[0].span.end.byte, 4);
        assert_eq!(tokens[2].span.start.byte, 5);
        assert_eq!(tokens[2].span.end.byte, 7);
    }
}

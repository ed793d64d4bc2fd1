//! # CSG Parser
//!
//! Recursive descent parser for the CSG scene format. Produces the parse
//! tree consumed by both downstream renderers.
//!
//! The grammar is deterministic: a single token of lookahead decides every
//! production, so there is no backtracking and no ambiguity. Errors are
//! fatal; the parser stops at the first one and reports its position.
//!
//! ## Example
//!
//! ```rust
//! use csg_parser::lexer::Lexer;
//! use csg_parser::parser::Parser;
//!
//! let tokens = Lexer::new("cube(10);").tokenize().unwrap();
//! let tree = Parser::new(tokens).parse().unwrap();
//! assert_eq!(tree.root.children.len(), 1);
//! ```

mod statements;
mod values;

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind};
use crate::span::{Position, Span};
use crate::tree::{NodeKind, ParseTree, TreeItem, TreeNode};

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser for the CSG scene format.
pub struct Parser {
    /// Token stream, ending in EOF.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
}

impl Parser {
    /// Create a new parser.
    ///
    /// ## Parameters
    ///
    /// - `tokens`: Tokens from the lexer, including the trailing EOF
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parse the entire token stream into a parse tree.
    ///
    /// ## Returns
    ///
    /// The parse tree, or the first error with its source position.
    pub fn parse(&mut self) -> Result<ParseTree, ParseError> {
        let start = self.current_position();
        let mut children = Vec::new();

        while !self.is_at_end() {
            children.push(TreeItem::Node(self.parse_statement()?));
        }

        let root = TreeNode::with_children(NodeKind::Start, self.span_from(start), children);
        Ok(ParseTree::new(root))
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Get current token.
    fn peek(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or_else(|| {
            self.tokens
                .last()
                .expect("token stream should have at least EOF")
        })
    }

    /// Get current token kind.
    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Check if current token matches kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Check if next token (after current) is of given kind.
    fn peek_next_is(&self, kind: TokenKind) -> bool {
        self.tokens
            .get(self.current + 1)
            .map(|t| t.kind == kind)
            .unwrap_or(false)
    }

    /// Check if at end of file.
    fn is_at_end(&self) -> bool {
        self.peek_kind() == TokenKind::Eof
    }

    /// Get current position.
    fn current_position(&self) -> Position {
        self.peek().span.start
    }

    /// Advance to next token, returning the token that was consumed.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    /// Get previous token.
    fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    /// Consume token if it matches expected kind, error otherwise.
    fn expect(&mut self, kind: TokenKind) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else if self.is_at_end() {
            Err(ParseError::unexpected_eof(kind.display(), self.peek().span))
        } else {
            Err(ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    found: self.peek().text.clone(),
                    expected: kind.display().to_string(),
                },
                self.peek().span,
            ))
        }
    }

    /// Try to consume token if it matches.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    /// Create span from start to the end of the previous token.
    fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.previous().span.end)
    }

    /// Error for a token that cannot appear here.
    fn unexpected(&self, expected: &str) -> ParseError {
        if self.is_at_end() {
            ParseError::unexpected_eof(expected, self.peek().span)
        } else {
            ParseError::unexpected_token(&self.peek().text, expected, self.peek().span)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn parse(source: &str) -> Result<ParseTree, ParseError> {
        let tokens = Lexer::new(source).tokenize()?;
        Parser::new(tokens).parse()
    }

    #[test]
    fn test_parse_empty() {
        let tree = parse("").unwrap();
        assert_eq!(tree.root.kind, NodeKind::Start);
        assert!(tree.root.children.is_empty());
    }

    #[test]
    fn test_parse_simple_cube() {
        let tree = parse("cube(10);").unwrap();
        assert_eq!(tree.root.children.len(), 1);
        let stmt = tree.root.children[0].as_node().unwrap();
        assert_eq!(stmt.kind, NodeKind::Object);
    }

    #[test]
    fn test_parse_multiple_statements() {
        let tree = parse("cube(10); sphere(5);").unwrap();
        assert_eq!(tree.root.children.len(), 2);
    }

    #[test]
    fn test_parse_stops_at_first_error() {
        let err = parse("cube(; sphere(5);").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
        assert_eq!(err.span.start.byte, 5);
    }

    #[test]
    fn test_parse_reports_eof() {
        let err = parse("cube(10)").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedEof { .. }));
    }
}

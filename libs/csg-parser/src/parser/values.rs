//! # Value Parsing
//!
//! Parses argument values: literals, identifiers, and arrays.
//!
//! ## Grammar
//!
//! ```text
//! value = INT | FLOAT | "true" | "false" | "undef" | identifier | array
//! array = "[" (value ("," value)*)? "]"
//! ```

use super::Parser;
use crate::error::ParseError;
use crate::lexer::TokenKind;
use crate::tree::{NodeKind, TreeItem, TreeNode};

impl Parser {
    /// Parse a single value.
    pub(super) fn parse_value(&mut self) -> Result<TreeItem, ParseError> {
        match self.peek_kind() {
            kind if kind.is_literal() || kind == TokenKind::Identifier => {
                Ok(TreeItem::Token(self.advance().clone()))
            }
            TokenKind::LBracket => Ok(TreeItem::Node(self.parse_array()?)),
            _ => Err(self.unexpected("value")),
        }
    }

    /// Parse an array literal.
    fn parse_array(&mut self) -> Result<TreeNode, ParseError> {
        let start = self.current_position();
        self.expect(TokenKind::LBracket)?;

        let mut children = Vec::new();
        if !self.check(TokenKind::RBracket) {
            children.push(self.parse_value()?);
            while self.match_token(TokenKind::Comma) {
                // Allow trailing comma
                if self.check(TokenKind::RBracket) {
                    break;
                }
                children.push(self.parse_value()?);
            }
        }

        self.expect(TokenKind::RBracket)?;
        Ok(TreeNode::with_children(
            NodeKind::Array,
            self.span_from(start),
            children,
        ))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::lexer::{Lexer, TokenValue};
    use crate::parser::Parser;
    use crate::tree::{NodeKind, ParseTree, TreeNode};

    fn parse(source: &str) -> ParseTree {
        let tokens = Lexer::new(source).tokenize().unwrap();
        Parser::new(tokens).parse().unwrap()
    }

    fn first_value(tree: &ParseTree) -> &TreeNode {
        let call = tree.root.children[0].as_node().unwrap();
        let (_, args) = call.call_parts();
        args.children[0].as_node().unwrap()
    }

    #[test]
    fn test_parse_array_value() {
        let tree = parse("translate([1, 2, 3]);");
        let positional = first_value(&tree);
        let array = positional.positional_argument_value().as_node().unwrap();
        assert_eq!(array.kind, NodeKind::Array);
        assert_eq!(array.children.len(), 3);
    }

    #[test]
    fn test_parse_empty_array() {
        let tree = parse("polygon([]);");
        let positional = first_value(&tree);
        let array = positional.positional_argument_value().as_node().unwrap();
        assert!(array.children.is_empty());
    }

    #[test]
    fn test_parse_nested_array() {
        let tree = parse("polyhedron([[0, 0, 0], [1, 1, 1]]);");
        let positional = first_value(&tree);
        let array = positional.positional_argument_value().as_node().unwrap();
        assert_eq!(array.children.len(), 2);
        let inner = array.children[0].as_node().unwrap();
        assert_eq!(inner.kind, NodeKind::Array);
        assert_eq!(inner.children.len(), 3);
    }

    #[test]
    fn test_parse_mixed_values() {
        let tree = parse("thing(1, 2.5, true, undef, $fn);");
        let call = tree.root.children[0].as_node().unwrap();
        let (_, args) = call.call_parts();
        assert_eq!(args.children.len(), 5);

        let last = args.children[4].as_node().unwrap();
        let token = last.positional_argument_value().as_token().unwrap();
        assert_eq!(token.value, TokenValue::Ident("$fn".to_string()));
    }

    #[test]
    fn test_array_span() {
        let tree = parse("translate([1, 2]);");
        let positional = first_value(&tree);
        let array = positional.positional_argument_value().as_node().unwrap();
        assert_eq!(array.span.start.byte, 10);
        assert_eq!(array.span.end.byte, 16);
    }
}

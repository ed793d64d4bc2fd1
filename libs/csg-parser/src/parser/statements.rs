//! # Statement Parsing
//!
//! Parses CSG statements: objects, modules, scopes, and argument lists.
//!
//! ## Grammar
//!
//! ```text
//! statement = identifier "(" arguments ")" (";" | scope | statement)
//! scope     = "{" statement* "}"
//! arguments = (argument ("," argument)*)?
//! argument  = identifier "=" value | value
//! ```
//!
//! A statement terminated by `;` is an `Object`. A trailing scope makes a
//! `Module`; a trailing bare statement (the `translate(...) cube(...);`
//! form) is a `Module` whose scope holds that single statement.

use super::Parser;
use crate::error::ParseError;
use crate::lexer::TokenKind;
use crate::tree::{NodeKind, TreeItem, TreeNode};

impl Parser {
    /// Parse a statement.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// statement = identifier "(" arguments ")" (";" | scope | statement)
    /// ```
    pub(super) fn parse_statement(&mut self) -> Result<TreeNode, ParseError> {
        let start = self.current_position();

        if !self.check(TokenKind::Identifier) {
            return Err(self.unexpected("statement"));
        }
        let name = self.advance().clone();

        self.expect(TokenKind::LParen)?;
        let arguments = self.parse_arguments()?;
        self.expect(TokenKind::RParen)?;

        let mut children = vec![TreeItem::Token(name), TreeItem::Node(arguments)];

        // Object: leaf statement, done.
        if self.match_token(TokenKind::Semicolon) {
            return Ok(TreeNode::with_children(
                NodeKind::Object,
                self.span_from(start),
                children,
            ));
        }

        if self.is_at_end() {
            return Err(self.unexpected("';' or scope"));
        }

        // Module: braced scope, or a single trailing statement wrapped as one.
        let scope = if self.check(TokenKind::LBrace) {
            self.parse_scope()?
        } else {
            let stmt = self.parse_statement()?;
            let span = stmt.span;
            TreeNode::with_children(NodeKind::Scope, span, vec![TreeItem::Node(stmt)])
        };
        children.push(TreeItem::Node(scope));

        Ok(TreeNode::with_children(
            NodeKind::Module,
            self.span_from(start),
            children,
        ))
    }

    /// Parse a brace-delimited scope.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// scope = "{" statement* "}"
    /// ```
    fn parse_scope(&mut self) -> Result<TreeNode, ParseError> {
        let start = self.current_position();
        self.expect(TokenKind::LBrace)?;

        let mut children = Vec::new();
        while !self.check(TokenKind::RBrace) {
            if self.is_at_end() {
                return Err(self.unexpected("'}'"));
            }
            children.push(TreeItem::Node(self.parse_statement()?));
        }

        self.expect(TokenKind::RBrace)?;
        Ok(TreeNode::with_children(
            NodeKind::Scope,
            self.span_from(start),
            children,
        ))
    }

    /// Parse an arguments list (parentheses consumed by the caller).
    ///
    /// ## Grammar
    ///
    /// ```text
    /// arguments = (argument ("," argument)*)?
    /// ```
    fn parse_arguments(&mut self) -> Result<TreeNode, ParseError> {
        let start = self.current_position();
        let mut children = Vec::new();

        // Empty arguments
        if self.check(TokenKind::RParen) {
            return Ok(TreeNode::with_children(
                NodeKind::Arguments,
                self.span_from(start),
                children,
            ));
        }

        children.push(TreeItem::Node(self.parse_argument()?));

        while self.match_token(TokenKind::Comma) {
            // Allow trailing comma
            if self.check(TokenKind::RParen) {
                break;
            }
            children.push(TreeItem::Node(self.parse_argument()?));
        }

        Ok(TreeNode::with_children(
            NodeKind::Arguments,
            self.span_from(start),
            children,
        ))
    }

    /// Parse a single argument.
    ///
    /// Named when an identifier is followed by `=`, positional otherwise.
    /// The parser does not care about ordering between the two; that is the
    /// consumers' concern.
    fn parse_argument(&mut self) -> Result<TreeNode, ParseError> {
        let start = self.current_position();

        if self.check(TokenKind::Identifier) && self.peek_next_is(TokenKind::Eq) {
            let name = self.advance().clone();
            self.expect(TokenKind::Eq)?;
            let value = self.parse_value()?;

            return Ok(TreeNode::with_children(
                NodeKind::NamedArgument,
                self.span_from(start),
                vec![TreeItem::Token(name), value],
            ));
        }

        let value = self.parse_value()?;
        Ok(TreeNode::with_children(
            NodeKind::PositionalArgument,
            self.span_from(start),
            vec![value],
        ))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::tree::ParseTree;

    fn parse(source: &str) -> ParseTree {
        let tokens = Lexer::new(source).tokenize().unwrap();
        Parser::new(tokens).parse().unwrap()
    }

    fn first_statement(tree: &ParseTree) -> &TreeNode {
        tree.root.children[0].as_node().unwrap()
    }

    #[test]
    fn test_parse_object() {
        let tree = parse("cube(10);");
        let call = first_statement(&tree);
        assert_eq!(call.kind, NodeKind::Object);

        let (name, args) = call.call_parts();
        assert_eq!(name.ident(), "cube");
        assert_eq!(args.children.len(), 1);
    }

    #[test]
    fn test_parse_named_argument() {
        let tree = parse("cube(10, center=true);");
        let call = first_statement(&tree);
        let (_, args) = call.call_parts();
        assert_eq!(args.children.len(), 2);

        let named = args.children[1].as_node().unwrap();
        assert_eq!(named.kind, NodeKind::NamedArgument);
        let (name, _) = named.named_argument_parts();
        assert_eq!(name.ident(), "center");
    }

    #[test]
    fn test_parse_module_with_block() {
        let tree = parse("union() { cube(10); sphere(5); }");
        let module = first_statement(&tree);
        assert_eq!(module.kind, NodeKind::Module);
        assert_eq!(module.scope_child().children.len(), 2);
    }

    #[test]
    fn test_parse_module_with_empty_scope() {
        let tree = parse("union() { }");
        let module = first_statement(&tree);
        assert_eq!(module.kind, NodeKind::Module);
        assert!(module.scope_child().children.is_empty());
    }

    #[test]
    fn test_parse_module_with_trailing_statement() {
        let tree = parse("translate(v = [1,2,3]) cube(5);");
        let module = first_statement(&tree);
        assert_eq!(module.kind, NodeKind::Module);

        let scope = module.scope_child();
        assert_eq!(scope.children.len(), 1);
        let child = scope.children[0].as_node().unwrap();
        assert_eq!(child.kind, NodeKind::Object);
    }

    #[test]
    fn test_parse_nested_modules() {
        let tree = parse("union() { difference() { cube(2); } }");
        let outer = first_statement(&tree);
        let inner = outer.scope_child().children[0].as_node().unwrap();
        assert_eq!(inner.kind, NodeKind::Module);
    }

    #[test]
    fn test_parse_trailing_comma() {
        let tree = parse("cube(10, 20,);");
        let (_, args) = first_statement(&tree).call_parts();
        assert_eq!(args.children.len(), 2);
    }

    #[test]
    fn test_parse_unterminated_scope() {
        let tokens = Lexer::new("union() { cube(1);").tokenize().unwrap();
        let err = Parser::new(tokens).parse().unwrap_err();
        assert!(err.to_string().contains("end of file"));
    }

    #[test]
    fn test_statement_span_covers_semicolon() {
        let tree = parse("cube(10);");
        let call = first_statement(&tree);
        assert_eq!(call.span.start.byte, 0);
        assert_eq!(call.span.end.byte, 9);
    }
}

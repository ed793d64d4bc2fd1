//! # Parse Tree
//!
//! The grammar's output shape: a small fixed set of node kinds over
//! ordered children, where a child is either a sub-node or a terminal
//! token. Both downstream renderers (executable-form builder and canonical
//! writer) consume this tree; neither mutates it.
//!
//! ## Example
//!
//! ```rust
//! use csg_parser::{parse, NodeKind};
//!
//! let tree = parse("cube(10);").unwrap();
//! assert_eq!(tree.root.kind, NodeKind::Start);
//! assert_eq!(tree.root.children.len(), 1);
//! ```

use crate::lexer::{Token, TokenKind};
use crate::span::{Span, Spanned};
use serde::{Deserialize, Serialize};

// =============================================================================
// PARSE TREE
// =============================================================================

/// A parsed CSG scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseTree {
    /// Root node, always of kind [`NodeKind::Start`].
    pub root: TreeNode,
}

impl ParseTree {
    /// Create a new parse tree.
    pub fn new(root: TreeNode) -> Self {
        Self { root }
    }
}

// =============================================================================
// TREE NODE
// =============================================================================

/// A node in the parse tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Node type.
    pub kind: NodeKind,
    /// Source span, covering first through last child.
    pub span: Span,
    /// Ordered children: sub-nodes or tokens.
    pub children: Vec<TreeItem>,
}

impl TreeNode {
    /// Create a node with children.
    ///
    /// ## Parameters
    ///
    /// - `kind`: Node type
    /// - `span`: Source location
    /// - `children`: Child items in source order
    pub fn with_children(kind: NodeKind, span: Span, children: Vec<TreeItem>) -> Self {
        Self {
            kind,
            span,
            children,
        }
    }

    /// Find first child node with given kind.
    pub fn find_child(&self, kind: NodeKind) -> Option<&TreeNode> {
        self.children.iter().find_map(|item| match item {
            TreeItem::Node(node) if node.kind == kind => Some(node),
            _ => None,
        })
    }

    /// Name and arguments of an `Object` or `Module` node.
    ///
    /// Panics on any other shape: the grammar guarantees both kinds start
    /// with an identifier token followed by an `Arguments` node, so a
    /// violation is a programming error, not input to recover from.
    pub fn call_parts(&self) -> (&Token, &TreeNode) {
        let name = match self.children.first() {
            Some(TreeItem::Token(token)) if token.kind == TokenKind::Identifier => token,
            other => panic!(
                "{:?} node must start with an identifier token, found {:?}",
                self.kind, other
            ),
        };
        let arguments = match self.children.get(1) {
            Some(TreeItem::Node(node)) if node.kind == NodeKind::Arguments => node,
            other => panic!(
                "{:?} node must carry an Arguments node second, found {:?}",
                self.kind, other
            ),
        };
        (name, arguments)
    }

    /// Trailing scope of a `Module` node.
    ///
    /// Panics when absent; only the grammar builds `Module` nodes and it
    /// always attaches the scope third.
    pub fn scope_child(&self) -> &TreeNode {
        match self.children.get(2) {
            Some(TreeItem::Node(node)) if node.kind == NodeKind::Scope => node,
            other => panic!(
                "Module node must carry a Scope node third, found {:?}",
                other
            ),
        }
    }

    /// Name token and value of a `NamedArgument` node.
    ///
    /// Panics unless the node has exactly the two children the grammar
    /// produces.
    pub fn named_argument_parts(&self) -> (&Token, &TreeItem) {
        assert_eq!(
            self.children.len(),
            2,
            "NamedArgument node must have exactly 2 children, found {}",
            self.children.len()
        );
        let name = match &self.children[0] {
            TreeItem::Token(token) if token.kind == TokenKind::Identifier => token,
            other => panic!(
                "NamedArgument node must start with an identifier token, found {:?}",
                other
            ),
        };
        (name, &self.children[1])
    }

    /// Single payload of a `PositionalArgument` node.
    pub fn positional_argument_value(&self) -> &TreeItem {
        assert_eq!(
            self.children.len(),
            1,
            "PositionalArgument node must have exactly 1 child, found {}",
            self.children.len()
        );
        &self.children[0]
    }
}

impl Spanned for TreeNode {
    fn span(&self) -> Span {
        self.span
    }
}

// =============================================================================
// TREE ITEM
// =============================================================================

/// A child of a tree node: either a sub-node or a terminal token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeItem {
    /// Nested node.
    Node(TreeNode),
    /// Terminal token.
    Token(Token),
}

impl TreeItem {
    /// The nested node, if this item is one.
    pub fn as_node(&self) -> Option<&TreeNode> {
        match self {
            TreeItem::Node(node) => Some(node),
            TreeItem::Token(_) => None,
        }
    }

    /// The terminal token, if this item is one.
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            TreeItem::Node(_) => None,
            TreeItem::Token(token) => Some(token),
        }
    }
}

impl Spanned for TreeItem {
    fn span(&self) -> Span {
        match self {
            TreeItem::Node(node) => node.span,
            TreeItem::Token(token) => token.span,
        }
    }
}

// =============================================================================
// NODE KIND
// =============================================================================

/// Types of parse-tree nodes.
///
/// The grammar produces exactly these kinds; there is no expression layer
/// because the scene format has no operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Root node containing all top-level statements.
    Start,
    /// Named invocation with no attached scope, like `cube(10);`
    Object,
    /// Named invocation carrying a scope, like `union() { ... }`
    Module,
    /// Brace-delimited block of nested statements.
    Scope,
    /// Arguments list `(10, center = true)`
    Arguments,
    /// Array literal like `[1, 2, 3]`
    Array,
    /// Named argument `center = true`
    NamedArgument,
    /// Positional argument wrapper around a bare value.
    PositionalArgument,
}

impl NodeKind {
    /// Check if this kind is a statement (a direct child of Start or Scope).
    pub const fn is_statement(&self) -> bool {
        matches!(self, Self::Object | Self::Module)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenValue;

    fn ident(name: &str) -> TreeItem {
        TreeItem::Token(Token::new(
            TokenKind::Identifier,
            Span::zero(),
            name,
            TokenValue::Ident(name.to_string()),
        ))
    }

    fn arguments() -> TreeItem {
        TreeItem::Node(TreeNode::with_children(
            NodeKind::Arguments,
            Span::zero(),
            Vec::new(),
        ))
    }

    #[test]
    fn test_call_parts() {
        let node = TreeNode::with_children(
            NodeKind::Object,
            Span::zero(),
            vec![ident("cube"), arguments()],
        );
        let (name, args) = node.call_parts();
        assert_eq!(name.ident(), "cube");
        assert_eq!(args.kind, NodeKind::Arguments);
    }

    #[test]
    #[should_panic(expected = "must start with an identifier token")]
    fn test_call_parts_rejects_missing_name() {
        let node = TreeNode::with_children(NodeKind::Object, Span::zero(), vec![arguments()]);
        node.call_parts();
    }

    #[test]
    #[should_panic(expected = "exactly 2 children")]
    fn test_named_argument_shape_enforced() {
        let node =
            TreeNode::with_children(NodeKind::NamedArgument, Span::zero(), vec![ident("size")]);
        node.named_argument_parts();
    }

    #[test]
    fn test_find_child() {
        let node = TreeNode::with_children(
            NodeKind::Object,
            Span::zero(),
            vec![ident("cube"), arguments()],
        );
        assert!(node.find_child(NodeKind::Arguments).is_some());
        assert!(node.find_child(NodeKind::Scope).is_none());
    }

    #[test]
    fn test_node_kind_is_statement() {
        assert!(NodeKind::Object.is_statement());
        assert!(NodeKind::Module.is_statement());
        assert!(!NodeKind::Arguments.is_statement());
    }
}

//! # Canonical Writer
//!
//! Renders a parse tree back into CSG scene text, used for round-tripping
//! and normalization. The writer reads original token text, so identifiers
//! keep their `$` and nothing of the builder's namespace rewrite shows.
//!
//! Everything except scopes renders context-free, bottom-up. Scopes need
//! the ambient nesting depth for indentation, so the writer carries a
//! depth counter while descending statements.
//!
//! Writing is total over well-formed trees: no error paths, and a second
//! parse/write cycle of the output reproduces it byte for byte.
//!
//! ## Example
//!
//! ```rust
//! use csg_ast::writer::CanonicalWriter;
//!
//! let tree = csg_parser::parse("union(){sphere(2);}").unwrap();
//! let text = CanonicalWriter::new().write(&tree);
//! assert_eq!(text, "union() {\n  sphere(2);\n}");
//! ```

use config::constants::DEFAULT_INDENT_UNIT;
use csg_parser::{NodeKind, ParseTree, Token, TokenValue, TreeItem, TreeNode};

// =============================================================================
// CANONICAL WRITER
// =============================================================================

/// Depth-tracking canonical text writer.
///
/// ## Example
///
/// ```rust
/// use csg_ast::writer::CanonicalWriter;
///
/// let tree = csg_parser::parse("union() { cube(1); }").unwrap();
/// let text = CanonicalWriter::with_indent("\t").write(&tree);
/// assert_eq!(text, "union() {\n\tcube(1);\n}");
/// ```
pub struct CanonicalWriter {
    /// Indent unit, repeated once per nesting level.
    indent: String,
    /// Current nesting depth.
    level: usize,
}

impl CanonicalWriter {
    /// Create a writer with the default indent unit.
    pub fn new() -> Self {
        Self::with_indent(DEFAULT_INDENT_UNIT)
    }

    /// Create a writer with a custom indent unit.
    pub fn with_indent(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
            level: 0,
        }
    }

    /// Render a whole parse tree as canonical text.
    ///
    /// Top-level statements are joined by newlines.
    pub fn write(&mut self, tree: &ParseTree) -> String {
        assert_eq!(
            tree.root.kind,
            NodeKind::Start,
            "writer input must be a Start node, found {:?}",
            tree.root.kind
        );
        tree.root
            .children
            .iter()
            .map(|item| self.write_statement(statement_node(item)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render one statement: `name(args);` or `name(args) { ... }`.
    fn write_statement(&mut self, node: &TreeNode) -> String {
        let (name, arguments) = node.call_parts();
        match node.kind {
            NodeKind::Object => format!("{}({});", name.text, write_arguments(arguments)),
            NodeKind::Module => format!(
                "{}({}) {}",
                name.text,
                write_arguments(arguments),
                self.write_scope(node.scope_child())
            ),
            other => panic!("expected statement node, found {:?}", other),
        }
    }

    /// Render a scope, one indented line per child statement.
    fn write_scope(&mut self, node: &TreeNode) -> String {
        self.level += 1;
        let prepend = self.indent.repeat(self.level);

        let mut out = String::from("{\n");
        for item in &node.children {
            out.push_str(&prepend);
            out.push_str(&self.write_statement(statement_node(item)));
            out.push('\n');
        }

        self.level -= 1;
        out.push_str(&self.indent.repeat(self.level));
        out.push('}');
        out
    }
}

impl Default for CanonicalWriter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// CONTEXT-FREE FRAGMENTS
// =============================================================================

fn write_arguments(node: &TreeNode) -> String {
    node.children
        .iter()
        .map(|item| match item.as_node() {
            Some(argument) => write_argument(argument),
            None => panic!("Arguments children must be argument nodes"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_argument(node: &TreeNode) -> String {
    match node.kind {
        NodeKind::PositionalArgument => write_value(node.positional_argument_value()),
        NodeKind::NamedArgument => {
            let (name, value) = node.named_argument_parts();
            format!("{} = {}", name.text, write_value(value))
        }
        other => panic!("expected argument node, found {:?}", other),
    }
}

fn write_value(item: &TreeItem) -> String {
    match item {
        TreeItem::Token(token) => write_token(token),
        TreeItem::Node(node) if node.kind == NodeKind::Array => {
            let items = node
                .children
                .iter()
                .map(write_value)
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{}]", items)
        }
        TreeItem::Node(node) => panic!("expected value item, found {:?} node", node.kind),
    }
}

fn write_token(token: &Token) -> String {
    match &token.value {
        TokenValue::Int(v) => v.to_string(),
        // {:?} keeps the fractional marker so a float survives re-parsing
        // as a float
        TokenValue::Float(v) => format!("{:?}", v),
        TokenValue::Bool(v) => v.to_string(),
        TokenValue::Undef => "undef".to_string(),
        // Original text: `$fn` stays `$fn` here
        TokenValue::Ident(_) => token.text.clone(),
        TokenValue::None => panic!("punctuation token cannot be a value"),
    }
}

/// Statement node behind a tree item.
fn statement_node(item: &TreeItem) -> &TreeNode {
    match item {
        TreeItem::Node(node) if node.kind.is_statement() => node,
        other => panic!("expected statement item, found {:?}", other),
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! # Executable-Form Builder
//!
//! Transforms the parse tree into the executable program representation:
//! a deterministic, post-order tree-to-tree rewrite with one method per
//! node kind.
//!
//! The load-bearing transform is the scope rewrite. The target
//! representation has no anonymous multi-statement block, so a scope is
//! hoisted into a named zero-parameter function definition, and the module
//! that owns the scope receives a `__children` named argument referencing
//! that function by name. The definition is emitted before the call that
//! references it, always.
//!
//! Scope names come from a per-build counter (`__children_0`,
//! `__children_1`, …), so structurally identical scopes never collide.
//!
//! Identifiers entering this representation pass through
//! [`csg_parser::normalize::executable_identifier`]: call targets, named
//! argument keys, and identifier values all lose their `$`. The canonical
//! writer never sees this rewrite.
//!
//! Arguments appearing positionally after named ones, and duplicate named
//! keys, are accepted without validation; the duplicated key keeps its
//! first position and last value.
//!
//! ## Example
//!
//! ```rust
//! use csg_ast::build;
//!
//! let tree = csg_parser::parse("union() { sphere(2); cube(1); }").unwrap();
//! let program = build(&tree);
//!
//! let def = program.body[0].as_function_def().unwrap();
//! assert_eq!(def.name, "__children_0");
//! assert_eq!(def.body.len(), 2);
//! ```

use crate::program::{CallStmt, Expr, FunctionDef, Literal, Program, Stmt};
use config::constants::{CHILDREN_KEYWORD, SCOPE_FUNCTION_PREFIX};
use csg_parser::normalize;
use csg_parser::{NodeKind, ParseTree, Token, TokenValue, TreeItem, TreeNode};
use indexmap::IndexMap;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Build the executable program representation for a parse tree.
///
/// ## Example
///
/// ```rust
/// let tree = csg_parser::parse("cube(10);").unwrap();
/// let program = csg_ast::build(&tree);
/// assert_eq!(program.body.len(), 1);
/// ```
pub fn build(tree: &ParseTree) -> Program {
    Builder::new().build(tree)
}

// =============================================================================
// BUILDER
// =============================================================================

/// Post-order parse-tree-to-program transform.
///
/// One builder builds one program; the scope counter starts at zero per
/// build.
pub struct Builder {
    /// Next scope function id.
    next_scope: usize,
}

impl Builder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { next_scope: 0 }
    }

    /// Transform a whole parse tree (`Start` node) into a program.
    pub fn build(mut self, tree: &ParseTree) -> Program {
        let root = &tree.root;
        assert_eq!(
            root.kind,
            NodeKind::Start,
            "builder input must be a Start node, found {:?}",
            root.kind
        );

        // Start: flatten all top-level statement tuples in order.
        let mut body = Vec::new();
        for item in &root.children {
            body.extend(self.build_statement(statement_node(item)));
        }

        Program {
            body,
            span: root.span,
        }
    }

    /// Transform one statement node into its statement tuple.
    ///
    /// Objects yield one statement, modules two (scope definition first).
    /// Returning a sequence keeps flattening uniform at every level.
    fn build_statement(&mut self, node: &TreeNode) -> Vec<Stmt> {
        match node.kind {
            NodeKind::Object => vec![self.build_object(node)],
            NodeKind::Module => self.build_module(node),
            other => panic!("expected statement node, found {:?}", other),
        }
    }

    /// `Object` → one call expression statement.
    fn build_object(&mut self, node: &TreeNode) -> Stmt {
        let (name, arguments) = node.call_parts();
        let (args, named) = self.build_arguments(arguments);

        Stmt::Call(CallStmt {
            name: normalize::executable_identifier(name.ident()),
            args,
            named,
            span: node.span,
        })
    }

    /// `Module` → (scope function definition, call statement).
    ///
    /// The call's named arguments are the module's own named arguments with
    /// the `__children` binding appended last. Emitting the definition
    /// first guarantees it exists before the call that references it.
    fn build_module(&mut self, node: &TreeNode) -> Vec<Stmt> {
        let (name, arguments) = node.call_parts();
        let (args, mut named) = self.build_arguments(arguments);

        let (definition, children_binding) = self.build_scope(node.scope_child());
        let (key, reference) = children_binding;
        named.insert(key, reference);

        let call = Stmt::Call(CallStmt {
            name: normalize::executable_identifier(name.ident()),
            args,
            named,
            span: node.span,
        });

        vec![definition, call]
    }

    /// `Scope` → (function definition, `__children` binding).
    fn build_scope(&mut self, node: &TreeNode) -> (Stmt, (String, Expr)) {
        assert_eq!(
            node.kind,
            NodeKind::Scope,
            "module must carry a Scope node, found {:?}",
            node.kind
        );

        // Flatten the child statement tuples into one ordered sequence.
        let mut body = Vec::new();
        for item in &node.children {
            body.extend(self.build_statement(statement_node(item)));
        }

        let name = format!("{}{}", SCOPE_FUNCTION_PREFIX, self.next_scope);
        self.next_scope += 1;

        let definition = Stmt::FunctionDef(FunctionDef {
            name: name.clone(),
            body,
            span: node.span,
        });
        let reference = Expr::Ref {
            name,
            span: node.span,
        };

        (definition, (CHILDREN_KEYWORD.to_string(), reference))
    }

    /// `Arguments` → (positional sequence, named mapping).
    ///
    /// Children not tagged as named become the positional sequence in
    /// original order; named ones land in the mapping in original order.
    fn build_arguments(&mut self, node: &TreeNode) -> (Vec<Expr>, IndexMap<String, Expr>) {
        assert_eq!(
            node.kind,
            NodeKind::Arguments,
            "call must carry an Arguments node, found {:?}",
            node.kind
        );

        let mut positional = Vec::new();
        let mut named = IndexMap::new();

        for item in &node.children {
            let argument = match item.as_node() {
                Some(node) => node,
                None => panic!("Arguments children must be argument nodes"),
            };
            match argument.kind {
                NodeKind::PositionalArgument => {
                    // Thin unwrap: the wrapper is not a node in the output.
                    positional.push(self.build_value(argument.positional_argument_value()));
                }
                NodeKind::NamedArgument => {
                    let (name, value) = argument.named_argument_parts();
                    named.insert(
                        normalize::executable_identifier(name.ident()),
                        self.build_value(value),
                    );
                }
                other => panic!("expected argument node, found {:?}", other),
            }
        }

        (positional, named)
    }

    /// Transform a value item: terminal or array.
    fn build_value(&mut self, item: &TreeItem) -> Expr {
        match item {
            TreeItem::Token(token) => self.build_terminal(token),
            TreeItem::Node(node) if node.kind == NodeKind::Array => Expr::List {
                items: node
                    .children
                    .iter()
                    .map(|child| self.build_value(child))
                    .collect(),
                span: node.span,
            },
            TreeItem::Node(node) => panic!("expected value item, found {:?} node", node.kind),
        }
    }

    /// Transform a terminal token into an expression.
    fn build_terminal(&self, token: &Token) -> Expr {
        let span = token.span;
        match &token.value {
            TokenValue::Int(v) => Expr::Literal {
                value: Literal::Int(*v),
                span,
            },
            TokenValue::Float(v) => Expr::Literal {
                value: Literal::Float(*v),
                span,
            },
            TokenValue::Bool(v) => Expr::Literal {
                value: Literal::Bool(*v),
                span,
            },
            TokenValue::Undef => Expr::Literal {
                value: Literal::Undef,
                span,
            },
            TokenValue::Ident(name) => Expr::Ref {
                name: normalize::executable_identifier(name),
                span,
            },
            TokenValue::None => panic!("punctuation token cannot be a value"),
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
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

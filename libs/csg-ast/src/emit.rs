//! Renders the executable program representation as source text, for
//! inspection and for hand-off to tooling that wants text instead of the
//! structured form. Purely cosmetic formatting; the structured form is the
//! contract.

use crate::program::{CallStmt, Expr, Program, Stmt};

const INDENT: &str = "    ";

/// Render a program as executable-source text.
pub fn emit(program: &Program) -> String {
    program
        .body
        .iter()
        .map(|stmt| emit_stmt(stmt, 0))
        .collect::<Vec<_>>()
        .join("\n")
}

fn emit_stmt(stmt: &Stmt, depth: usize) -> String {
    let pad = INDENT.repeat(depth);
    match stmt {
        Stmt::FunctionDef(def) => {
            if def.body.is_empty() {
                return format!("{pad}fn {}() {{}}", def.name);
            }
            let body = def
                .body
                .iter()
                .map(|stmt| emit_stmt(stmt, depth + 1))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{pad}fn {}() {{\n{body}\n{pad}}}", def.name)
        }
        Stmt::Call(call) => format!("{pad}{}({});", call.name, emit_call_args(call)),
    }
}

fn emit_call_args(call: &CallStmt) -> String {
    call.args
        .iter()
        .map(emit_expr)
        .chain(
            call.named
                .iter()
                .map(|(key, value)| format!("{} = {}", key, emit_expr(value))),
        )
        .collect::<Vec<_>>()
        .join(", ")
}

fn emit_expr(expr: &Expr) -> String {
    match expr {
        Expr::Literal { value, .. } => value.to_string(),
        Expr::Ref { name, .. } => name.clone(),
        Expr::List { items, .. } => {
            let items = items.iter().map(emit_expr).collect::<Vec<_>>().join(", ");
            format!("[{}]", items)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

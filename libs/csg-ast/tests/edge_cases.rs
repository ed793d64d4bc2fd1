//! Edge cases: empty input, deep nesting, argument oddities, and the
//! undefined-by-design behaviors that are accepted silently.

use config::constants::CHILDREN_KEYWORD;
use csg_ast::{canonicalize, emit, program_from_source, Expr, Literal, Stmt};

#[test]
fn empty_source_builds_empty_program() {
    let program = program_from_source("").unwrap();
    assert!(program.body.is_empty());
    assert_eq!(canonicalize("").unwrap(), "");
}

#[test]
fn empty_scope_builds_empty_definition() {
    let program = program_from_source("union() { }").unwrap();
    let def = program.body[0].as_function_def().unwrap();
    assert!(def.body.is_empty());

    let call = program.body[1].as_call().unwrap();
    assert!(call.named.contains_key(CHILDREN_KEYWORD));
}

#[test]
fn deeply_nested_scopes_flatten_per_level() {
    let program = program_from_source("a() { b() { c() { leaf(1); } } }").unwrap();

    // Top level: a's definition and a's call.
    assert_eq!(program.body.len(), 2);
    let a_def = program.body[0].as_function_def().unwrap();

    // Each level holds exactly its child's definition and call.
    let b_def = a_def.body[0].as_function_def().unwrap();
    let b_call = a_def.body[1].as_call().unwrap();
    assert_eq!(b_call.name, "b");

    let c_def = b_def.body[0].as_function_def().unwrap();
    assert_eq!(b_def.body[1].as_call().unwrap().name, "c");
    assert_eq!(c_def.body[0].as_call().unwrap().name, "leaf");
}

#[test]
fn scope_names_are_unique_across_the_program() {
    let program =
        program_from_source("u() { cube(1); } u() { cube(1); } u() { cube(1); }").unwrap();

    let mut names: Vec<String> = program
        .body
        .iter()
        .filter_map(|stmt| stmt.as_function_def())
        .map(|def| def.name.clone())
        .collect();
    assert_eq!(names.len(), 3);
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 3, "scope names collided");
}

#[test]
fn definitions_precede_their_references() {
    fn check(body: &[Stmt]) {
        let mut defined: Vec<&str> = Vec::new();
        for stmt in body {
            match stmt {
                Stmt::FunctionDef(def) => {
                    check(&def.body);
                    defined.push(&def.name);
                }
                Stmt::Call(call) => {
                    for expr in call.named.values() {
                        if let Expr::Ref { name, .. } = expr {
                            if name.starts_with(CHILDREN_KEYWORD) {
                                assert!(
                                    defined.contains(&name.as_str()),
                                    "call references {} before its definition",
                                    name
                                );
                            }
                        }
                    }
                }
            }
        }
    }

    let program = program_from_source(
        "a() { b() { cube(1); } sphere(2); } c() { d(3); } cube(4);",
    )
    .unwrap();
    check(&program.body);
}

#[test]
fn positional_after_named_is_accepted() {
    let program = program_from_source("thing(1, k = 2, 3);").unwrap();
    let call = program.body[0].as_call().unwrap();

    assert_eq!(call.args.len(), 2);
    assert!(matches!(
        call.args[1],
        Expr::Literal {
            value: Literal::Int(3),
            ..
        }
    ));
    assert_eq!(call.named.len(), 1);

    // The writer does not reorder either.
    assert_eq!(canonicalize("thing(1, k = 2, 3);").unwrap(), "thing(1, k = 2, 3);");
}

#[test]
fn duplicate_named_keys_survive_writing_but_collapse_in_program() {
    let source = "cube(size = 1, size = 2);";
    assert_eq!(canonicalize(source).unwrap(), "cube(size = 1, size = 2);");

    let program = program_from_source(source).unwrap();
    let call = program.body[0].as_call().unwrap();
    assert_eq!(call.named.len(), 1);
}

#[test]
fn arrays_nest_and_mix_value_kinds() {
    let program = program_from_source("polyhedron(points = [[0, 0, 0], [1.5, true, undef]]);")
        .unwrap();
    let call = program.body[0].as_call().unwrap();

    let outer = match &call.named["points"] {
        Expr::List { items, .. } => items,
        other => panic!("expected list, got {:?}", other),
    };
    assert_eq!(outer.len(), 2);
    match &outer[1] {
        Expr::List { items, .. } => {
            assert!(matches!(
                items[0],
                Expr::Literal {
                    value: Literal::Float(_),
                    ..
                }
            ));
            assert!(matches!(
                items[2],
                Expr::Literal {
                    value: Literal::Undef,
                    ..
                }
            ));
        }
        other => panic!("expected nested list, got {:?}", other),
    }
}

#[test]
fn identifier_arguments_become_references() {
    let program = program_from_source("cube(size);").unwrap();
    let call = program.body[0].as_call().unwrap();
    assert!(matches!(&call.args[0], Expr::Ref { name, .. } if name == "size"));
}

#[test]
fn dollar_identifier_value_is_rewritten_in_program_only() {
    let source = "rotate($t);";
    let program = program_from_source(source).unwrap();
    let call = program.body[0].as_call().unwrap();
    assert!(matches!(&call.args[0], Expr::Ref { name, .. } if name == "DOLLAR_t"));

    assert_eq!(canonicalize(source).unwrap(), "rotate($t);");
}

#[test]
fn emitted_program_text_mentions_no_dollar() {
    let text = emit(&program_from_source("sphere($fn = 7) { cube($t); }").unwrap());
    assert!(!text.contains('$'), "emitted text leaked a $: {}", text);
    assert!(text.contains("DOLLAR_fn"));
    assert!(text.contains("DOLLAR_t"));
}

#[test]
fn comments_are_skipped() {
    let source = "// header\ncube(10); /* inline */ sphere(5);";
    assert_eq!(canonicalize(source).unwrap(), "cube(10);\nsphere(5);");
}

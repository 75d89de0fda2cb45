mod common;

use base_sema::analyze_collecting;
use base_sema::ast::{Declaration, TypeNode};
use base_sema::diagnostics::messages;

use common::*;

fn point_def() -> Declaration {
    Declaration::TupleDef(tuple_def(
        "Point",
        vec![
            var_decl("x", TypeNode::Integer, 1, 14),
            var_decl("y", TypeNode::Integer, 1, 25),
        ],
        1,
        1,
    ))
}

#[test]
fn tuple_variable_declaration_links_to_its_definition() {
    let prog = program(vec![
        point_def(),
        Declaration::Variable(var_decl("p", tuple_type("Point", 1, 40), 1, 45)),
    ]);

    let (diagnostics, scope) = analyze_collecting(&prog).unwrap();
    assert!(diagnostics.is_empty());
    let p = scope.lookup_local("p").unwrap().unwrap();
    assert_eq!(p.ty().to_string(), "Point");
}

#[test]
fn variable_declared_with_unknown_tuple_name_is_rejected() {
    let prog = program(vec![Declaration::Variable(var_decl(
        "p",
        tuple_type("Nowhere", 1, 10),
        1,
        1,
    ))]);

    let (diagnostics, scope) = analyze_collecting(&prog).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, messages::INVALID_TUPLE_TYPE);
    assert_eq!(diagnostics[0].column, 10);
    assert!(scope.lookup_local("p").unwrap().is_none());
}

#[test]
fn chained_field_access_resolves_left_to_right() {
    // tuple Line { tuple Point a. tuple Point b. } requires a second tuple;
    // keep it simple with one level: p:x is a direct Integer field.
    let prog = program(vec![
        point_def(),
        Declaration::Variable(var_decl("p", tuple_type("Point", 1, 40), 1, 45)),
        Declaration::Function(func_decl(
            "f",
            vec![],
            TypeNode::Void,
            vec![write_stmt(
                tuple_access("p", 2, 10, vec![("x", 2, 12)], 2, 10),
                2,
                8,
            )],
            2,
            1,
        )),
    ]);

    let (diagnostics, _scope) = analyze_collecting(&prog).unwrap();
    assert!(diagnostics.is_empty());
}

#[test]
fn access_through_a_non_tuple_field_is_rejected() {
    let prog = program(vec![
        point_def(),
        Declaration::Variable(var_decl("p", tuple_type("Point", 1, 40), 1, 45)),
        Declaration::Function(func_decl(
            "f",
            vec![],
            TypeNode::Void,
            vec![write_stmt(
                tuple_access("p", 2, 10, vec![("x", 2, 12), ("z", 2, 14)], 2, 10),
                2,
                8,
            )],
            2,
            1,
        )),
    ]);

    let (diagnostics, _scope) = analyze_collecting(&prog).unwrap();
    // `p:x` is `Integer`, so continuing the chain with `:z` is a
    // bad-tuple-access, not an invalid-field-name — the chain aborts there.
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, messages::BAD_TUPLE_ACCESS);
    assert_eq!(diagnostics[0].column, 12);
}

#[test]
fn access_of_unknown_field_is_rejected_and_chain_is_abandoned() {
    let prog = program(vec![
        point_def(),
        Declaration::Variable(var_decl("p", tuple_type("Point", 1, 40), 1, 45)),
        Declaration::Function(func_decl(
            "f",
            vec![],
            TypeNode::Void,
            vec![write_stmt(
                tuple_access("p", 2, 10, vec![("z", 2, 12), ("w", 2, 14)], 2, 10),
                2,
                8,
            )],
            2,
            1,
        )),
    ]);

    let (diagnostics, _scope) = analyze_collecting(&prog).unwrap();
    // Only the first bad step is reported; `:w` never gets a diagnostic of
    // its own since the chain is abandoned (spec's error-absorption rule).
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, messages::INVALID_TUPLE_FIELD);
    assert_eq!(diagnostics[0].column, 12);
}

#[test]
fn access_on_a_non_tuple_variable_base_is_rejected() {
    let prog = program(vec![
        Declaration::Variable(var_decl("n", TypeNode::Integer, 1, 1)),
        Declaration::Function(func_decl(
            "f",
            vec![],
            TypeNode::Void,
            vec![write_stmt(
                tuple_access("n", 2, 10, vec![("x", 2, 12)], 2, 10),
                2,
                8,
            )],
            2,
            1,
        )),
    ]);

    let (diagnostics, _scope) = analyze_collecting(&prog).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, messages::BAD_TUPLE_ACCESS);
    assert_eq!(diagnostics[0].column, 10);
}

#[test]
fn function_returning_a_tuple_type_type_checks_a_matching_return() {
    // tuple Point { integer x. integer y. }. tuple Point make { tuple Point p. } [ return p. ]
    let prog = program(vec![
        point_def(),
        Declaration::Function(func_decl(
            "make",
            vec![formal("p", tuple_type("Point", 2, 10), 2, 15)],
            tuple_type("Point", 2, 1),
            vec![return_stmt(Some(ident_expr("p", 2, 30)), 2, 25)],
            2,
            5,
        )),
    ]);

    let (diagnostics, _) = analyze_collecting(&prog).unwrap();
    assert!(diagnostics.is_empty());
}

#[test]
fn tuple_definition_duplicate_still_resolves_its_fields() {
    let prog = program(vec![
        point_def(),
        // Second `Point` definition: its own fields still get checked
        // (per spec's "Ordering rule"), even though the binding is
        // suppressed for being a duplicate.
        Declaration::TupleDef(tuple_def(
            "Point",
            vec![var_decl("x", TypeNode::Void, 3, 14)],
            3,
            1,
        )),
    ]);

    let (diagnostics, _scope) = analyze_collecting(&prog).unwrap();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].message, messages::MULTIPLY_DECLARED);
    assert_eq!(diagnostics[1].message, messages::VOID_DECLARATION);
}

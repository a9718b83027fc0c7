//! Tests for parsing operations, selections and fragments.

use crate::ParseOptions;
use crate::Source;
use crate::ast;
use crate::ast::AstNode;
use crate::tests::utils::as_field;
use crate::tests::utils::only_operation;
use crate::tests::utils::parse_ok;

// =============================================================================
// Operations
// =============================================================================

/// A bare selection set is an anonymous query.
#[test]
fn shorthand_query() {
    let document = parse_ok("{ hero { name } }");
    assert_eq!(document.definitions.len(), 1);

    let operation = only_operation(&document);
    assert_eq!(operation.operation, ast::OperationKind::Query);
    assert!(operation.name.is_none());
    assert!(operation.variable_definitions.is_empty());
    assert!(operation.directives.is_empty());

    assert_eq!(operation.selection_set.selections.len(), 1);
    let hero = as_field(&operation.selection_set.selections[0]);
    assert_eq!(hero.name, "hero");

    let nested = hero.selection_set.as_ref().unwrap();
    assert_eq!(nested.selections.len(), 1);
    let name = as_field(&nested.selections[0]);
    assert_eq!(name.name, "name");
    assert!(name.selection_set.is_none());
}

/// Named query with a non-null variable passed as an argument.
#[test]
fn named_query_with_variable() {
    let document = parse_ok("query Foo($id: ID!) { user(id: $id) { id } }");
    let operation = only_operation(&document);
    assert_eq!(operation.operation, ast::OperationKind::Query);
    assert_eq!(operation.name.as_ref().unwrap(), "Foo");

    assert_eq!(operation.variable_definitions.len(), 1);
    let variable = &operation.variable_definitions[0];
    assert_eq!(variable.variable.name, "id");
    let ast::TypeReference::NonNull(non_null) = &variable.type_ref else {
        panic!("expected a non-null type, got {:?}", variable.type_ref);
    };
    let ast::TypeReference::Named(named) = non_null.inner.as_ref() else {
        panic!("expected a named type, got {:?}", non_null.inner);
    };
    assert_eq!(named.name, "ID");
    assert!(variable.default_value.is_none());

    let user = as_field(&operation.selection_set.selections[0]);
    assert_eq!(user.name, "user");
    assert_eq!(user.arguments.len(), 1);
    assert_eq!(user.arguments[0].name, "id");
    let ast::Value::Variable(reference) = &user.arguments[0].value else {
        panic!("expected a variable, got {:?}", user.arguments[0].value);
    };
    assert_eq!(reference.name, "id");
}

#[test]
fn mutation() {
    let document = parse_ok(
        "mutation Like($story: ID!) @traced { like(story: $story) { likers { count } } }",
    );
    let operation = only_operation(&document);
    assert_eq!(operation.operation, ast::OperationKind::Mutation);
    assert_eq!(operation.operation.as_str(), "mutation");
    assert_eq!(operation.directives.len(), 1);
    assert_eq!(operation.directives[0].name, "traced");
}

/// Variable definitions take const defaults and const directives.
#[test]
fn variable_defaults_and_directives() {
    let document = parse_ok(
        "query Q($first: Int = 10 @deprecated, $tags: [String!]! = [\"a\", \"b\"]) { f }",
    );
    let operation = only_operation(&document);
    let [first, tags] = operation.variable_definitions.as_slice() else {
        panic!("expected two variables");
    };

    assert!(matches!(
        first.default_value,
        Some(ast::Value::Int(ast::IntValue { value: 10, .. })),
    ));
    assert_eq!(first.directives[0].name, "deprecated");

    assert_eq!(tags.type_ref.to_string(), "[String!]!");
    let Some(ast::Value::List(list)) = &tags.default_value else {
        panic!("expected a list default, got {:?}", tags.default_value);
    };
    assert_eq!(list.values.len(), 2);
}

#[test]
fn anonymous_query_with_keyword() {
    let document = parse_ok("query { a }");
    let operation = only_operation(&document);
    assert!(operation.name.is_none());
    assert_eq!(operation.selection_set.selections.len(), 1);
}

// =============================================================================
// Fields
// =============================================================================

#[test]
fn aliases_arguments_and_directives() {
    let document = parse_ok(
        "{ smallPic: profilePic(size: 64, crop: true) @include(if: $big) @skip(if: false) }",
    );
    let operation = only_operation(&document);
    let field = as_field(&operation.selection_set.selections[0]);

    assert_eq!(field.alias.as_ref().unwrap(), "smallPic");
    assert_eq!(field.name, "profilePic");
    assert_eq!(field.response_key(), "smallPic");
    assert_eq!(field.arguments.len(), 2);
    assert_eq!(field.directives.len(), 2);

    let include = &field.directives[0];
    assert_eq!(include.name, "include");
    assert!(matches!(
        include.argument("if").map(|argument| &argument.value),
        Some(ast::Value::Variable(_)),
    ));
    assert!(include.argument("unless").is_none());
}

#[test]
fn response_key_without_alias() {
    let document = parse_ok("{ name }");
    let field = as_field(&only_operation(&document).selection_set.selections[0]);
    assert_eq!(field.response_key(), "name");
}

/// Keywords are ordinary names inside a selection set.
#[test]
fn keywords_as_field_names() {
    let document = parse_ok("{ query mutation fragment on type extend subscription }");
    let names: Vec<_> = only_operation(&document)
        .selection_set
        .selections
        .iter()
        .map(|selection| as_field(selection).name.as_str().to_string())
        .collect();
    assert_eq!(
        names,
        ["query", "mutation", "fragment", "on", "type", "extend", "subscription"],
    );
}

/// Commas are insignificant.
#[test]
fn commas_are_ignored() {
    let document = parse_ok("{ a, b,, c(x: 1,, y: 2,) }");
    let selections = &only_operation(&document).selection_set.selections;
    assert_eq!(selections.len(), 3);
    assert_eq!(as_field(&selections[2]).arguments.len(), 2);
}

// =============================================================================
// Fragments
// =============================================================================

#[test]
fn fragment_spreads_and_inline_fragments() {
    let document = parse_ok(
        "{ node { ...UserFields @skip(if: false) ... on Page { title } ... @include(if: true) { id } } }",
    );
    let node = as_field(&only_operation(&document).selection_set.selections[0]);
    let selections = &node.selection_set.as_ref().unwrap().selections;
    assert_eq!(selections.len(), 3);

    let ast::Selection::FragmentSpread(spread) = &selections[0] else {
        panic!("expected a fragment spread, got {:?}", selections[0]);
    };
    assert_eq!(spread.name, "UserFields");
    assert_eq!(spread.directives[0].name, "skip");

    let ast::Selection::InlineFragment(typed) = &selections[1] else {
        panic!("expected an inline fragment, got {:?}", selections[1]);
    };
    assert_eq!(typed.type_condition.as_ref().unwrap().name, "Page");
    assert!(typed.directives.is_empty());

    let ast::Selection::InlineFragment(untyped) = &selections[2] else {
        panic!("expected an inline fragment, got {:?}", selections[2]);
    };
    assert!(untyped.type_condition.is_none());
    assert_eq!(untyped.directives[0].name, "include");
    assert_eq!(untyped.selection_set.selections.len(), 1);
}

#[test]
fn fragment_definition() {
    let document = parse_ok(
        "query Q { ...F } fragment F on User @cached { id friends { ...F } }",
    );
    assert_eq!(document.definitions.len(), 2);

    let fragment = document.fragment("F").unwrap();
    assert_eq!(fragment.name, "F");
    assert_eq!(fragment.type_condition.name, "User");
    assert_eq!(fragment.directives[0].name, "cached");
    assert_eq!(fragment.selection_set.selections.len(), 2);

    assert!(document.fragment("G").is_none());
    assert_eq!(document.fragments().count(), 1);
    assert_eq!(document.operations().count(), 1);
    assert!(document.definitions.iter().all(ast::Definition::is_executable));
}

// =============================================================================
// Locations
// =============================================================================

/// Node locations run from the first token to the last consumed one.
#[test]
fn node_locations() {
    let document = parse_ok("query Q { hero(episode: EMPIRE) { name } }");
    let operation = only_operation(&document);

    assert_eq!(document.source_text(), Some("query Q { hero(episode: EMPIRE) { name } }"));
    assert_eq!(operation.source_text(), document.source_text());
    assert_eq!(operation.name.as_ref().unwrap().source_text(), Some("Q"));
    assert_eq!(
        operation.selection_set.source_text(),
        Some("{ hero(episode: EMPIRE) { name } }"),
    );

    let hero = as_field(&operation.selection_set.selections[0]);
    assert_eq!(hero.source_text(), Some("hero(episode: EMPIRE) { name }"));
    assert_eq!(hero.arguments[0].source_text(), Some("episode: EMPIRE"));
    assert_eq!(hero.arguments[0].value.source_text(), Some("EMPIRE"));

    let location = hero.location().unwrap();
    assert_eq!((location.start, location.end), (10, 40));
}

/// Comments between tokens do not extend node locations.
#[test]
fn comments_are_outside_of_locations() {
    let document = parse_ok("{\n  a # trailing\n  b\n}");
    let selections = &only_operation(&document).selection_set.selections;
    assert_eq!(selections[0].source_text(), Some("a"));
    assert_eq!(selections[1].source_text(), Some("b"));
}

/// `no_location` drops every node location.
#[test]
fn no_location_option() {
    let source = Source::anonymous("query Q($v: Int) { a(x: [1]) { ...F } }");
    let options = ParseOptions::default().with_no_location(true);
    let document = crate::parse(&source, options).unwrap();

    assert!(document.location().is_none());
    let operation = only_operation(&document);
    assert!(operation.location().is_none());
    assert!(operation.name.as_ref().unwrap().location().is_none());
    assert!(operation.variable_definitions[0].location().is_none());
    assert!(operation.variable_definitions[0].type_ref.location().is_none());

    let field = as_field(&operation.selection_set.selections[0]);
    assert!(field.location().is_none());
    assert!(field.arguments[0].value.location().is_none());
    assert!(field.selection_set.as_ref().unwrap().selections[0].location().is_none());
}

/// Parsing with a `Parser` directly leaves the scanned token chain
/// available afterwards.
#[test]
fn parser_exposes_token_chain() {
    let source = Source::anonymous("{ a } # done");
    let mut parser = crate::Parser::new(&source, ParseOptions::default());
    let document = parser.parse_document().unwrap();
    assert_eq!(document.definitions.len(), 1);

    let kinds: Vec<_> = parser.lexer().tokens().iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            crate::token::TokenKind::StartOfFile,
            crate::token::TokenKind::LeftBrace,
            crate::token::TokenKind::Name,
            crate::token::TokenKind::RightBrace,
            crate::token::TokenKind::Comment,
            crate::token::TokenKind::EndOfFile,
        ],
    );
}

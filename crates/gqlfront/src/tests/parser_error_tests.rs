//! Tests for syntax errors raised by the parser and lexical errors it
//! propagates.

use crate::ByteSpan;
use crate::GraphQLErrorKind;
use crate::Location;
use crate::ParseOptions;
use crate::Source;
use crate::tests::utils::parse_err;

// =============================================================================
// Unexpected tokens
// =============================================================================

/// A document needs at least one definition.
#[test]
fn empty_document() {
    let err = parse_err("");
    assert_eq!(err.message(), "Unexpected <EOF>");
    assert_eq!(
        err.kind(),
        &GraphQLErrorKind::UnexpectedToken {
            expected: None,
            found: "<EOF>".to_string(),
        },
    );
    assert_eq!(parse_err("  # only a comment\n").message(), "Unexpected <EOF>");
}

#[test]
fn expected_name() {
    let err = parse_err("{ field(: }");
    assert_eq!(err.message(), "Expected Name, found \":\"");
    assert_eq!(
        err.kind(),
        &GraphQLErrorKind::UnexpectedToken {
            expected: Some("Name".to_string()),
            found: "\":\"".to_string(),
        },
    );
    assert_eq!(err.positions(), &[8]);
    assert_eq!(err.locations(), &[Location::new(1, 9)]);
    assert_eq!(
        err.to_string(),
        "Syntax Error: Expected Name, found \":\" (GraphQL request:1:9)",
    );
}

#[test]
fn unclosed_selection_set() {
    assert_eq!(parse_err("{ a").message(), "Expected Name, found <EOF>");
    assert_eq!(parse_err("query Foo").message(), "Expected \"{\", found <EOF>");
    assert_eq!(parse_err("{}").message(), "Expected Name, found \"}\"");
}

#[test]
fn unknown_top_level_name() {
    let err = parse_err("query { a } garbage");
    assert_eq!(err.message(), "Unexpected Name \"garbage\"");
    assert_eq!(err.locations(), &[Location::new(1, 13)]);
}

#[test]
fn expected_keyword() {
    let err = parse_err("fragment F User { a }");
    assert_eq!(err.message(), "Expected \"on\", found Name \"User\"");
    assert_eq!(
        err.kind(),
        &GraphQLErrorKind::UnexpectedToken {
            expected: Some("\"on\"".to_string()),
            found: "Name \"User\"".to_string(),
        },
    );
}

/// A description must be followed by a type-system keyword.
#[test]
fn description_before_operation() {
    assert_eq!(parse_err("\"doc\" query { a }").message(), "Unexpected Name \"query\"");
    assert_eq!(parse_err("\"doc\"").message(), "Unexpected <EOF>");
}

#[test]
fn inline_fragment_requires_selection_set() {
    assert_eq!(parse_err("{ ... on User }").message(), "Expected \"{\", found \"}\"");
}

// =============================================================================
// Rejected constructs
// =============================================================================

#[test]
fn extend_is_unsupported() {
    let err = parse_err("extend type Foo { a: Int }");
    assert_eq!(
        err.message(),
        "`extend` is not supported: type system extensions cannot be parsed.",
    );
    assert_eq!(
        err.kind(),
        &GraphQLErrorKind::UnsupportedKeyword {
            keyword: "extend".to_string(),
        },
    );
    assert!(err.kind().is_syntax());
    assert_eq!(err.positions(), &[0]);
}

#[test]
fn subscription_is_unsupported() {
    let err = parse_err("subscription OnLike { like }");
    assert_eq!(
        err.message(),
        "`subscription` is not supported: only `query` and `mutation` operations can be parsed.",
    );

    let err = parse_err("schema { query: Q subscription: S }");
    assert_eq!(
        err.kind(),
        &GraphQLErrorKind::UnsupportedKeyword {
            keyword: "subscription".to_string(),
        },
    );
    assert_eq!(err.positions(), &[18]);
}

/// `on` cannot name a fragment, in a definition or a spread.
#[test]
fn fragment_named_on() {
    let err = parse_err("fragment on on User { a }");
    assert_eq!(err.message(), "Unexpected Name \"on\"");
    assert_eq!(
        err.kind(),
        &GraphQLErrorKind::ReservedName {
            name: "on".to_string(),
        },
    );
    assert_eq!(err.positions(), &[9]);
}

#[test]
fn variable_in_const_default() {
    let err = parse_err("query Q($a: Int = $b) { f }");
    assert_eq!(err.message(), "Unexpected variable \"$b\" in constant value.");
    assert_eq!(
        err.kind(),
        &GraphQLErrorKind::VariableInConstContext {
            name: "b".to_string(),
        },
    );
    assert_eq!(err.positions(), &[18]);
}

#[test]
fn variable_in_type_system_directive() {
    let err = parse_err("type T { f(a: Int = 1): Int @cost(weight: [$w]) }");
    assert_eq!(err.message(), "Unexpected variable \"$w\" in constant value.");
}

/// A lone `$` in a constant value is reported as an unexpected token.
#[test]
fn dollar_without_name_in_const_value() {
    let err = parse_err("scalar S @d(a: $ 1)");
    assert_eq!(err.message(), "Unexpected \"$\"");
}

// =============================================================================
// Directive locations
// =============================================================================

/// Unknown locations are reported against the location's name node.
#[test]
fn unknown_directive_location() {
    let err = parse_err("directive @foo on FIELD_DEFINITION | UNKNOWN");
    assert_eq!(err.message(), "Unexpected Name \"UNKNOWN\"");
    assert_eq!(
        err.kind(),
        &GraphQLErrorKind::UnknownDirectiveLocation {
            name: "UNKNOWN".to_string(),
        },
    );
    assert!(err.kind().is_syntax());
    assert!(err.positions().is_empty());
    assert_eq!(err.node_spans(), &[ByteSpan::new(37, 44)]);
    assert_eq!(err.locations(), &[Location::new(1, 38)]);
    assert_eq!(
        err.to_string(),
        "Syntax Error: Unexpected Name \"UNKNOWN\" (GraphQL request:1:38)",
    );
}

/// Without node locations the error falls back to a raw position.
#[test]
fn unknown_directive_location_without_node_locations() {
    let source = Source::anonymous("directive @foo on SUBSCRIPTION");
    let options = ParseOptions::default().with_no_location(true);
    let err = crate::parse(&source, options).unwrap_err();
    assert_eq!(err.positions(), &[18]);
    assert!(err.node_spans().is_empty());
    assert_eq!(err.locations(), &[Location::new(1, 19)]);
}

// =============================================================================
// Nesting depth
// =============================================================================

#[test]
fn selection_set_depth_limit() {
    let source = Source::anonymous("{ a { b { c } } }");
    let options = ParseOptions::default().with_max_nesting_depth(3);
    assert!(crate::parse(&source, options).is_ok());

    let source = Source::anonymous("{ a { b { c { d } } } }");
    let err = crate::parse(&source, options).unwrap_err();
    assert_eq!(err.message(), "Document nesting exceeds the maximum depth of 3.");
    assert_eq!(err.kind(), &GraphQLErrorKind::NestingTooDeep { max_depth: 3 });
    assert!(err.kind().is_syntax());
    assert_eq!(err.positions(), &[12]);
}

#[test]
fn list_type_depth_limit() {
    let options = ParseOptions::default().with_max_nesting_depth(3);
    assert!(crate::parse_type(&Source::anonymous("[[[Int]]]"), options).is_ok());
    let err = crate::parse_type(&Source::anonymous("[[[[Int]]]]"), options).unwrap_err();
    assert_eq!(err.kind(), &GraphQLErrorKind::NestingTooDeep { max_depth: 3 });
}

/// Pathologically deep input fails cleanly under the default limit.
#[test]
fn deeply_nested_values_fail_cleanly() {
    let body = format!("{{ f(a: {}1{}) }}", "[".repeat(10_000), "]".repeat(10_000));
    let err = parse_err(&body);
    assert_eq!(
        err.kind(),
        &GraphQLErrorKind::NestingTooDeep {
            max_depth: ParseOptions::DEFAULT_MAX_NESTING_DEPTH,
        },
    );

    let body = format!("{}{}", "{ a ".repeat(10_000), "}".repeat(10_000));
    assert!(matches!(parse_err(&body).kind(), GraphQLErrorKind::NestingTooDeep { .. }));
}

// =============================================================================
// Lexical errors
// =============================================================================

/// Lexical errors abort the parse and keep their kind.
#[test]
fn lexical_errors_propagate() {
    let err = parse_err("{ a(b: \"x) }");
    assert_eq!(err.kind(), &GraphQLErrorKind::Lexical);
    assert_eq!(err.message(), "Unterminated string.");

    let err = parse_err("{ a(b: 123abc) }");
    assert!(err.kind().is_lexical());
    assert!(!err.kind().is_syntax());
}

//! Tests for value literals and type references, parsed on their own
//! through `parse_value`/`parse_type` and inside documents.

use crate::GraphQLErrorKind;
use crate::ParseOptions;
use crate::Source;
use crate::ast;

fn value(body: &str) -> ast::Value<'static> {
    let source: &'static Source = Box::leak(Box::new(Source::anonymous(body)));
    crate::parse_value(source, ParseOptions::default())
        .unwrap_or_else(|err| panic!("expected `{body}` to parse as a value, got: {err}"))
}

fn type_ref(body: &str) -> ast::TypeReference<'static> {
    let source: &'static Source = Box::leak(Box::new(Source::anonymous(body)));
    crate::parse_type(source, ParseOptions::default())
        .unwrap_or_else(|err| panic!("expected `{body}` to parse as a type, got: {err}"))
}

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn int_values() {
    for (body, expected) in [("0", 0), ("-17", -17), ("2147483647", i32::MAX), ("-2147483648", i32::MIN)] {
        let ast::Value::Int(int) = value(body) else {
            panic!("expected `{body}` to be an Int");
        };
        assert_eq!(int.value, expected);
    }
}

/// Integers outside of the 32-bit signed range are rejected and keep
/// the conversion error as their cause.
#[test]
fn int_overflow() {
    let source = Source::anonymous("2147483648");
    let err = crate::parse_value(&source, ParseOptions::default()).unwrap_err();
    assert_eq!(err.kind(), &GraphQLErrorKind::InvalidValue);
    assert_eq!(
        err.message(),
        "Int cannot represent non 32-bit signed integer value: 2147483648",
    );
    assert!(err.kind().is_syntax());
    let cause = err.cause().unwrap();
    assert!(cause.downcast_ref::<std::num::ParseIntError>().is_some());
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn float_values() {
    for (body, expected) in [("1.5", 1.5), ("-0.25", -0.25), ("6.02e23", 6.02e23), ("1E-2", 0.01)] {
        let ast::Value::Float(float) = value(body) else {
            panic!("expected `{body}` to be a Float");
        };
        assert_eq!(float.value, expected);
    }
}

#[test]
fn string_values() {
    let ast::Value::String(plain) = value("\"a\\nb\"") else {
        panic!("expected a String");
    };
    assert_eq!(plain.value, "a\nb");
    assert!(!plain.is_block);

    let ast::Value::String(block) = value("\"\"\"\n  multi\n  line\n\"\"\"") else {
        panic!("expected a block String");
    };
    assert_eq!(block.value, "multi\nline");
    assert!(block.is_block);
}

/// `true`, `false` and `null` are keywords; any other name is an enum
/// value.
#[test]
fn keyword_and_enum_values() {
    assert!(matches!(value("true"), ast::Value::Boolean(ast::BooleanValue { value: true, .. })));
    assert!(matches!(value("false"), ast::Value::Boolean(ast::BooleanValue { value: false, .. })));
    assert!(matches!(value("null"), ast::Value::Null(_)));

    let ast::Value::Enum(enum_value) = value("MOBILE_WEB") else {
        panic!("expected an enum value");
    };
    assert_eq!(enum_value.value, "MOBILE_WEB");

    let ast::Value::Enum(enum_value) = value("True") else {
        panic!("expected an enum value");
    };
    assert_eq!(enum_value.value, "True");
}

// =============================================================================
// Lists, objects and variables
// =============================================================================

#[test]
fn list_values() {
    let ast::Value::List(empty) = value("[]") else {
        panic!("expected a list");
    };
    assert!(empty.values.is_empty());

    let ast::Value::List(list) = value("[1, \"two\", [THREE], {four: 4}]") else {
        panic!("expected a list");
    };
    assert_eq!(list.values.len(), 4);
    assert!(matches!(list.values[2], ast::Value::List(_)));
    assert!(matches!(list.values[3], ast::Value::Object(_)));
}

#[test]
fn object_values() {
    let ast::Value::Object(empty) = value("{}") else {
        panic!("expected an object");
    };
    assert!(empty.members.is_empty());

    let ast::Value::Object(object) = value("{ lat: 12.5, lon: -3.0, tags: [\"a\"], near: { km: 5 } }") else {
        panic!("expected an object");
    };
    assert_eq!(object.members.len(), 4);
    assert_eq!(object.members[0].name, "lat");
    assert!(matches!(object.member("near"), Some(ast::Value::Object(_))));
    assert!(object.member("missing").is_none());
}

/// Variables are allowed in non-constant values at any depth.
#[test]
fn variables_and_constness() {
    let with_variable = value("{ ids: [1, $id] }");
    assert!(!with_variable.is_const());
    let ast::Value::Object(object) = &with_variable else {
        panic!("expected an object");
    };
    let Some(ast::Value::List(ids)) = object.member("ids") else {
        panic!("expected a list member");
    };
    let ast::Value::Variable(variable) = &ids.values[1] else {
        panic!("expected a variable");
    };
    assert_eq!(variable.name, "id");

    assert!(value("{ ids: [1, 2] }").is_const());
}

#[test]
fn trailing_input_is_rejected() {
    let source = Source::anonymous("1 2");
    let err = crate::parse_value(&source, ParseOptions::default()).unwrap_err();
    assert_eq!(err.message(), "Expected <EOF>, found Int \"2\"");
}

// =============================================================================
// Type references
// =============================================================================

#[test]
fn named_type() {
    let parsed = type_ref("String");
    assert!(parsed.is_nullable());
    assert_eq!(parsed.innermost_named_type().name, "String");
    assert_eq!(parsed.to_string(), "String");
}

/// One list node per bracket pair, and `!` wraps the type before it.
#[test]
fn nested_list_and_non_null_types() {
    let parsed = type_ref("[[Int]!]!");
    assert_eq!(parsed.to_string(), "[[Int]!]!");
    assert!(!parsed.is_nullable());
    assert_eq!(parsed.innermost_named_type().name, "Int");

    let ast::TypeReference::NonNull(outer) = &parsed else {
        panic!("expected a non-null type");
    };
    let ast::TypeReference::List(outer_list) = outer.inner.as_ref() else {
        panic!("expected a list type");
    };
    assert!(!outer_list.is_nullable());
    let ast::TypeReference::NonNull(inner) = outer_list.inner.as_ref() else {
        panic!("expected a non-null type");
    };
    let ast::TypeReference::List(inner_list) = inner.inner.as_ref() else {
        panic!("expected a list type");
    };
    assert!(inner_list.is_nullable());
    assert!(matches!(inner_list.inner.as_ref(), ast::TypeReference::Named(_)));
}

#[test]
fn type_reference_locations() {
    let parsed = type_ref("[ID!]!");
    let location = parsed.location().unwrap();
    assert_eq!((location.start, location.end), (0, 6));

    let ast::TypeReference::NonNull(outer) = &parsed else {
        panic!("expected a non-null type");
    };
    assert_eq!(outer.inner.location().unwrap().source_text(), "[ID!]");
}

#[test]
fn double_bang_is_rejected() {
    let source = Source::anonymous("Int!!");
    let err = crate::parse_type(&source, ParseOptions::default()).unwrap_err();
    assert_eq!(err.message(), "Expected <EOF>, found \"!\"");
}

/// The node enums expose `source_text` without `AstNode` in scope.
#[test]
fn enum_nodes_expose_source_text() {
    assert_eq!(value("[1, 2]").source_text(), Some("[1, 2]"));
    assert_eq!(value("{ a: $b }").source_text(), Some("{ a: $b }"));
    assert_eq!(type_ref("[Int!]!").source_text(), Some("[Int!]!"));

    let document = crate::tests::utils::parse_ok("query Q { a(x: [1]) }\nscalar S");
    let texts: Vec<_> = document
        .definitions
        .iter()
        .map(|definition| definition.source_text())
        .collect();
    assert_eq!(texts, vec![Some("query Q { a(x: [1]) }"), Some("scalar S")]);

    let operation = crate::tests::utils::only_operation(&document);
    assert_eq!(operation.selection_set.selections[0].source_text(), Some("a(x: [1])"));
}

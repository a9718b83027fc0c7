//! Shared helpers for the parser and lexer tests.

use crate::GraphQLError;
use crate::ParseOptions;
use crate::Source;
use crate::ast;
use crate::token::Token;
use crate::token::TokenKind;

/// Parses `body` as an anonymous source with default options.
///
/// The source is leaked so the returned document can borrow from it for
/// the rest of the test.
pub fn parse_ok(body: &str) -> ast::Document<'static> {
    let source: &'static Source = Box::leak(Box::new(Source::anonymous(body)));
    match crate::parse(source, ParseOptions::default()) {
        Ok(document) => document,
        Err(err) => panic!("expected `{body}` to parse, got:\n{}", err.format_detailed()),
    }
}

/// Parses `body` and returns the error it must fail with.
pub fn parse_err(body: &str) -> GraphQLError {
    let source = Source::anonymous(body);
    match crate::parse(&source, ParseOptions::default()) {
        Ok(document) => panic!("expected `{body}` to fail, parsed {document:#?}"),
        Err(err) => err,
    }
}

/// Scans `body` and returns its token kinds, `StartOfFile` and
/// `EndOfFile` included.
pub fn token_kinds(body: &str) -> Vec<TokenKind> {
    let source = Source::anonymous(body);
    crate::tokenize(&source)
        .unwrap_or_else(|err| panic!("expected `{body}` to lex, got: {err}"))
        .iter()
        .map(|token| token.kind)
        .collect()
}

/// Scans `body` and returns the single significant token between
/// `StartOfFile` and `EndOfFile`, with its value detached from the
/// source.
pub fn single_token(body: &str) -> Token<'static> {
    let source = Source::anonymous(body);
    let tokens = crate::tokenize(&source)
        .unwrap_or_else(|err| panic!("expected `{body}` to lex, got: {err}"));
    assert_eq!(tokens.len(), 3, "expected exactly one token in `{body}`: {tokens:?}");
    let token = &tokens[1];
    Token {
        kind: token.kind,
        start: token.start,
        end: token.end,
        line: token.line,
        column: token.column,
        value: token.value().map(|value| value.to_string().into()),
        index: token.index,
    }
}

/// Scans `body` and returns the error it must fail with.
pub fn lex_err(body: &str) -> GraphQLError {
    let source = Source::anonymous(body);
    match crate::tokenize(&source) {
        Ok(tokens) => panic!("expected `{body}` to fail lexing, got {tokens:?}"),
        Err(err) => err,
    }
}

/// The only operation of `document`.
pub fn only_operation<'a, 'src>(
    document: &'a ast::Document<'src>,
) -> &'a ast::OperationDefinition<'src> {
    let operations: Vec<_> = document.operations().collect();
    assert_eq!(operations.len(), 1, "expected a single operation");
    operations[0]
}

/// Unwraps a `Selection::Field`.
pub fn as_field<'a, 'src>(
    selection: &'a ast::Selection<'src>,
) -> &'a ast::FieldSelection<'src> {
    match selection {
        ast::Selection::Field(field) => field,
        other => panic!("expected a field selection, got {other:?}"),
    }
}

//! A GraphQL front end: a lexer, a recursive-descent parser producing a
//! located AST, and source-aware diagnostics.
//!
//! Executable definitions (`query`, `mutation`, fragments) and type-system
//! definitions can be mixed freely in one document. Type-system extensions
//! (`extend`) and `subscription` operations are rejected with a syntax
//! error.
//!
//! ```
//! use gqlfront::ParseOptions;
//! use gqlfront::Source;
//!
//! let source = Source::new("hero.graphql", "query Hero { hero { name } }");
//! let document = gqlfront::parse(&source, ParseOptions::default())?;
//! assert_eq!(document.operations().count(), 1);
//! # Ok::<(), gqlfront::GraphQLError>(())
//! ```

pub mod ast;
mod block_string;
mod byte_span;
mod graphql_error;
mod graphql_error_kind;
mod lexer;
mod location;
mod parse_options;
mod parser;
mod source;
mod source_location;
pub mod token;

pub use block_string::dedent_block_string_value;
pub use byte_span::ByteSpan;
pub use graphql_error::FormattedGraphQLError;
pub use graphql_error::GraphQLError;
pub use graphql_error::GraphQLErrorExtensions;
pub use graphql_error_kind::GraphQLErrorKind;
pub use lexer::Lexer;
pub use lexer::tokenize;
pub use location::Location;
pub use parse_options::ParseOptions;
pub use parser::Parser;
pub use parser::parse;
pub use parser::parse_type;
pub use parser::parse_value;
pub use source::Source;
pub use source::SourceRenderError;
pub use source_location::SourceLocation;

/// Result of every fallible lexing and parsing operation.
pub type ParseResult<T> = Result<T, GraphQLError>;

#[cfg(test)]
mod tests;

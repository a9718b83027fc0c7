use crate::ByteSpan;
use crate::GraphQLErrorKind;
use crate::Location;
use crate::Source;
use crate::ast::AstNode;
use indexmap::IndexMap;
use smallvec::SmallVec;
use smallvec::smallvec;
use std::backtrace::Backtrace;
use std::backtrace::BacktraceStatus;
use std::sync::Arc;
use std::sync::OnceLock;

/// Structured data attached to a [`GraphQLError`], serialized as the
/// `extensions` member of a GraphQL response error.
pub type GraphQLErrorExtensions = IndexMap<String, serde_json::Value>;

type ErrorCause = Arc<dyn std::error::Error + Send + Sync + 'static>;

const SYNTAX_ERROR_PREFIX: &str = "Syntax Error: ";

/// Number of stack lines appended to [`GraphQLError::format_detailed`].
const STACK_EXCERPT_LINES: usize = 12;

/// A diagnostic raised while lexing or parsing a [`Source`], or by a
/// consumer of the AST against nodes it was built from.
///
/// An error points at its source through raw byte positions (lexer
/// errors and most syntax errors) and/or the spans of implicated AST
/// nodes. Line/column [`locations`](GraphQLError::locations) are only
/// computed on first request.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLError {
    /// Human-readable description, without the `Syntax Error: ` prefix.
    message: String,

    kind: GraphQLErrorKind,

    /// The source every position and node span below refers to.
    document: Option<Arc<Source>>,

    positions: SmallVec<[usize; 1]>,

    node_spans: Vec<ByteSpan>,

    extensions: Option<GraphQLErrorExtensions>,

    #[source]
    cause: Option<ErrorCause>,

    /// Captured when `RUST_BACKTRACE`/`RUST_LIB_BACKTRACE` enables it.
    stack: Arc<Backtrace>,

    locations: OnceLock<Vec<Location>>,
}

impl GraphQLError {
    /// Creates an error with no location information.
    pub fn new(message: impl Into<String>, kind: GraphQLErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
            document: None,
            positions: SmallVec::new(),
            node_spans: Vec::new(),
            extensions: None,
            cause: None,
            stack: Arc::new(Backtrace::capture()),
            locations: OnceLock::new(),
        }
    }

    /// Creates an error pointing at a single byte offset of `source`.
    pub fn at_position(
        message: impl Into<String>,
        kind: GraphQLErrorKind,
        source: &Source,
        position: usize,
    ) -> Self {
        Self {
            document: Some(Arc::new(source.clone())),
            positions: smallvec![position],
            ..Self::new(message, kind)
        }
    }

    /// Creates a [`GraphQLErrorKind::Lexical`] error at `position`.
    pub fn lexical(
        message: impl Into<String>,
        source: &Source,
        position: usize,
    ) -> Self {
        Self::at_position(message, GraphQLErrorKind::Lexical, source, position)
    }

    /// Creates a [`GraphQLErrorKind::Custom`] error implicating `nodes`.
    ///
    /// Nodes parsed without locations are skipped. All located nodes are
    /// expected to come from the same [`Source`].
    pub fn from_nodes<'src>(
        message: impl Into<String>,
        nodes: &[&dyn AstNode<'src>],
    ) -> Self {
        let locations: Vec<_> = nodes
            .iter()
            .filter_map(|node| node.location())
            .collect();
        Self {
            document: locations
                .first()
                .map(|location| Arc::new(location.source.clone())),
            node_spans: locations.iter().map(|location| location.span()).collect(),
            ..Self::new(message, GraphQLErrorKind::Custom)
        }
    }

    pub fn with_kind(mut self, kind: GraphQLErrorKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_extensions(mut self, extensions: GraphQLErrorExtensions) -> Self {
        self.extensions = Some(extensions);
        self
    }

    /// Wraps a lower-level error, exposed through
    /// [`std::error::Error::source`].
    pub fn with_cause(
        mut self,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &GraphQLErrorKind {
        &self.kind
    }

    /// The [`Source`] this error's positions and node spans refer to.
    pub fn graphql_source(&self) -> Option<&Source> {
        self.document.as_deref()
    }

    /// Raw byte offsets into the source body.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Spans of the AST nodes this error was raised against.
    pub fn node_spans(&self) -> &[ByteSpan] {
        &self.node_spans
    }

    pub fn extensions(&self) -> Option<&GraphQLErrorExtensions> {
        self.extensions.as_ref()
    }

    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// 1-indexed line/column pairs for every position, then every node
    /// span start, in that order.
    ///
    /// Resolved on first call by scanning the source body; empty when the
    /// error carries no source.
    pub fn locations(&self) -> &[Location] {
        self.locations.get_or_init(|| {
            let Some(source) = self.document.as_deref() else {
                return Vec::new();
            };
            self.positions
                .iter()
                .copied()
                .chain(self.node_spans.iter().map(|span| span.start))
                .map(|offset| source.location_at(offset))
                .collect()
        })
    }

    /// The message as reported to users: lexical and syntax errors carry
    /// a `Syntax Error: ` prefix.
    pub fn display_message(&self) -> String {
        if self.kind.is_lexical() || self.kind.is_syntax() {
            format!("{SYNTAX_ERROR_PREFIX}{}", self.message)
        } else {
            self.message.clone()
        }
    }

    /// Formats this error on a single line, e.g.
    /// `Syntax Error: Unterminated string. (GraphQL request:1:5)`.
    pub fn format_oneline(&self) -> String {
        let message = self.display_message();
        match (self.graphql_source(), self.locations().first()) {
            (Some(source), Some(location)) => {
                format!("{message} ({}:{location})", source.name())
            },
            _ => message,
        }
    }

    /// Formats this error as a multi-line report:
    ///
    /// ```text
    /// Syntax Error: Expected Name, found "}".
    ///
    /// GraphQL request(1:10) ->
    /// 1 | { field(: }
    ///   |          ^
    /// ```
    ///
    /// One rendered excerpt follows per location, then a short stack
    /// excerpt if a backtrace was captured. A location that cannot be
    /// rendered is reported in place of its excerpt; the message is
    /// always kept.
    pub fn format_detailed(&self) -> String {
        let mut output = self.display_message();

        if let Some(source) = self.graphql_source() {
            for location in self.locations() {
                output.push_str("\n\n");
                match source.render(*location) {
                    Ok(excerpt) => output.push_str(&excerpt),
                    Err(err) => output.push_str(&format!(
                        "{}({location}) -> <context unavailable: {err}>",
                        source.name(),
                    )),
                }
            }
        }

        if self.stack.status() == BacktraceStatus::Captured {
            output.push_str("\n\nStack:\n");
            let stack = self.stack.to_string();
            let mut lines = stack.lines();
            for line in lines.by_ref().take(STACK_EXCERPT_LINES) {
                output.push_str("  ");
                output.push_str(line);
                output.push('\n');
            }
            let remaining = lines.count();
            if remaining > 0 {
                output.push_str(&format!("  ... {remaining} more line(s)\n"));
            }
        }

        output
    }

    /// Returns the serializable view of this error in the shape of a
    /// GraphQL response error.
    pub fn to_formatted(&self) -> FormattedGraphQLError {
        FormattedGraphQLError {
            message: self.display_message(),
            locations: self.locations().to_vec(),
            extensions: self.extensions.clone(),
        }
    }
}

/// A [`GraphQLError`] reduced to `{ message, locations, extensions }`.
///
/// See <https://spec.graphql.org/October2021/#sec-Errors.Error-result-format>.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FormattedGraphQLError {
    pub message: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<GraphQLErrorExtensions>,
}

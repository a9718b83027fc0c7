/// Categorizes a [`GraphQLError`](crate::GraphQLError) for programmatic
/// handling.
///
/// The `#[error(...)]` messages are short and programmatic. The
/// human-readable text lives in
/// [`GraphQLError::message`](crate::GraphQLError::message).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GraphQLErrorKind {
    /// A character sequence that cannot start or continue any token.
    ///
    /// # Example
    /// ```text
    /// { field(arg: "unterminated) }
    ///                            ^ Unterminated string.
    /// ```
    #[error("lexical error")]
    Lexical,

    /// The grammar required a different token or keyword here.
    #[error("unexpected token: {found}")]
    UnexpectedToken {
        /// Description of the expected token, when one specific token
        /// was required (e.g. `"}"`).
        expected: Option<String>,
        /// Description of the token that was found (e.g. `Name "foo"`).
        found: String,
    },

    /// A keyword this parser recognizes but deliberately does not
    /// support (`extend`, `subscription`).
    #[error("unsupported keyword `{keyword}`")]
    UnsupportedKeyword { keyword: String },

    /// A name that is not allowed in this position (a fragment named
    /// `on`).
    #[error("reserved name `{name}`")]
    ReservedName { name: String },

    /// A directive definition listed a location outside of the fixed
    /// set of directive locations.
    #[error("unknown directive location `{name}`")]
    UnknownDirectiveLocation { name: String },

    /// A `$variable` appeared where only constant values are allowed.
    #[error("variable `${name}` in constant value")]
    VariableInConstContext { name: String },

    /// A literal was well-formed but its value is not representable
    /// (an `Int` outside of the 32-bit signed range).
    #[error("invalid value")]
    InvalidValue,

    /// Selection sets, values or type references nested deeper than the
    /// configured [`ParseOptions::max_nesting_depth`].
    ///
    /// [`ParseOptions::max_nesting_depth`]: crate::ParseOptions::max_nesting_depth
    #[error("nesting deeper than {max_depth}")]
    NestingTooDeep { max_depth: usize },

    /// Raised outside of parsing, by consumers of the AST.
    #[error("error")]
    Custom,
}

impl GraphQLErrorKind {
    /// `true` for errors raised by the lexer.
    pub fn is_lexical(&self) -> bool {
        matches!(self, GraphQLErrorKind::Lexical)
    }

    /// `true` for errors raised by the parser's grammar checks.
    pub fn is_syntax(&self) -> bool {
        match self {
            GraphQLErrorKind::UnexpectedToken { .. }
            | GraphQLErrorKind::UnsupportedKeyword { .. }
            | GraphQLErrorKind::ReservedName { .. }
            | GraphQLErrorKind::UnknownDirectiveLocation { .. }
            | GraphQLErrorKind::VariableInConstContext { .. }
            | GraphQLErrorKind::InvalidValue
            | GraphQLErrorKind::NestingTooDeep { .. } => true,

            GraphQLErrorKind::Lexical
            | GraphQLErrorKind::Custom => false,
        }
    }
}

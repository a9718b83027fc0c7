/// Knobs for a single [`parse`](crate::parse) call.
///
/// Deserializes with every field optional, so hosts can embed it in
/// their own configuration files:
///
/// ```
/// let options: gqlfront::ParseOptions =
///     serde_json::from_str(r#"{ "no_location": true }"#).unwrap();
/// assert!(options.no_location);
/// assert_eq!(options.max_nesting_depth, 64);
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(default)]
pub struct ParseOptions {
    /// Omit [`SourceLocation`](crate::SourceLocation)s from every AST
    /// node. Errors still carry positions.
    pub no_location: bool,

    /// How deeply selection sets, list/object values and list type
    /// references may nest before parsing fails with
    /// [`GraphQLErrorKind::NestingTooDeep`](crate::GraphQLErrorKind::NestingTooDeep).
    pub max_nesting_depth: usize,
}

impl ParseOptions {
    /// Default for [`max_nesting_depth`](ParseOptions::max_nesting_depth).
    pub const DEFAULT_MAX_NESTING_DEPTH: usize = 64;

    pub fn with_no_location(mut self, no_location: bool) -> Self {
        self.no_location = no_location;
        self
    }

    pub fn with_max_nesting_depth(mut self, max_nesting_depth: usize) -> Self {
        self.max_nesting_depth = max_nesting_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            no_location: false,
            max_nesting_depth: Self::DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

/// The lexical class of a [`Token`](crate::token::Token).
///
/// Kinds are payload-free; decoded literal text lives in
/// [`Token::value`](crate::token::Token::value).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    // =========================================================================
    // Sentinels
    // =========================================================================
    /// First token of every chain. Covers no text.
    StartOfFile,
    /// Last token of every chain. Covers no text.
    EndOfFile,

    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `$`
    Dollar,
    /// `=`
    Equals,
    /// `{`
    LeftBrace,
    /// `[`
    LeftBracket,
    /// `(`
    LeftParen,
    /// `|`
    Pipe,
    /// `}`
    RightBrace,
    /// `]`
    RightBracket,
    /// `)`
    RightParen,
    /// `...`
    Spread,

    // =========================================================================
    // Tokens carrying a value
    // =========================================================================
    Name,
    Integer,
    Float,
    String,
    BlockString,
    /// `#` through the end of the line. Kept in the token chain but
    /// skipped by the parser.
    Comment,
}

impl TokenKind {
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns the source text of this kind if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            TokenKind::Ampersand => Some("&"),
            TokenKind::At => Some("@"),
            TokenKind::Bang => Some("!"),
            TokenKind::Colon => Some(":"),
            TokenKind::Dollar => Some("$"),
            TokenKind::Equals => Some("="),
            TokenKind::LeftBrace => Some("{"),
            TokenKind::LeftBracket => Some("["),
            TokenKind::LeftParen => Some("("),
            TokenKind::Pipe => Some("|"),
            TokenKind::RightBrace => Some("}"),
            TokenKind::RightBracket => Some("]"),
            TokenKind::RightParen => Some(")"),
            TokenKind::Spread => Some("..."),

            TokenKind::StartOfFile
            | TokenKind::EndOfFile
            | TokenKind::Name
            | TokenKind::Integer
            | TokenKind::Float
            | TokenKind::String
            | TokenKind::BlockString
            | TokenKind::Comment => None,
        }
    }

    /// Human-readable name used in diagnostics: punctuators are quoted
    /// (`"{"`), everything else is named (`Name`, `<EOF>`).
    pub fn description(&self) -> std::borrow::Cow<'static, str> {
        let named = match self {
            TokenKind::StartOfFile => "<SOF>",
            TokenKind::EndOfFile => "<EOF>",
            TokenKind::Name => "Name",
            TokenKind::Integer => "Int",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
            TokenKind::BlockString => "BlockString",
            TokenKind::Comment => "Comment",

            TokenKind::Ampersand
            | TokenKind::At
            | TokenKind::Bang
            | TokenKind::Colon
            | TokenKind::Dollar
            | TokenKind::Equals
            | TokenKind::LeftBrace
            | TokenKind::LeftBracket
            | TokenKind::LeftParen
            | TokenKind::Pipe
            | TokenKind::RightBrace
            | TokenKind::RightBracket
            | TokenKind::RightParen
            | TokenKind::Spread => {
                let punctuator = self.as_punctuator_str().unwrap_or_default();
                return format!("\"{punctuator}\"").into();
            },
        };
        named.into()
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

//! Tokens produced by the [`Lexer`](crate::Lexer).

mod token_kind;

pub use token_kind::TokenKind;

use crate::ByteSpan;
use std::borrow::Cow;

/// A lexed token.
///
/// Tokens live in the append-only chain owned by a
/// [`Lexer`](crate::Lexer); `index` is this token's position in that
/// chain, from which its neighbors are reached with
/// [`Lexer::prev`](crate::Lexer::prev) and
/// [`Lexer::next`](crate::Lexer::next).
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,

    /// Byte offset of the first byte of this token (inclusive).
    pub start: usize,

    /// Byte offset one past the last byte of this token (exclusive).
    pub end: usize,

    /// 1-indexed line on which this token starts.
    pub line: usize,

    /// 1-indexed column (in characters) at which this token starts.
    pub column: usize,

    /// Decoded literal for `Name`, `Integer`, `Float`, `String`,
    /// `BlockString` and `Comment` tokens; `None` for punctuators and
    /// sentinels.
    ///
    /// Borrowed from the source body unless decoding changed the text
    /// (escape sequences, block-string dedent).
    pub value: Option<Cow<'src, str>>,

    /// Position of this token in its lexer's chain.
    pub index: usize,
}

impl<'src> Token<'src> {
    pub fn span(&self) -> ByteSpan {
        ByteSpan::new(self.start, self.end)
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns `true` if this is a `Name` token spelled `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Name && self.value() == Some(keyword)
    }

    /// Diagnostic description: the kind, followed by the quoted value
    /// when there is one (`Name "foo"`, `"{"`, `<EOF>`).
    pub fn description(&self) -> String {
        match self.value() {
            Some(value) => format!("{} \"{value}\"", self.kind),
            None => self.kind.description().into_owned(),
        }
    }
}

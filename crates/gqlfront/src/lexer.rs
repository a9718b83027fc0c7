//! Tokenization of a [`Source`] body.
//!
//! The [`Lexer`] scans lazily and appends every token it produces
//! (comments included) to one chain, so callers can walk back through
//! earlier tokens with [`Lexer::prev`]. [`tokenize`] scans a whole body
//! up front.

use crate::GraphQLError;
use crate::ParseResult;
use crate::Source;
use crate::block_string::dedent_block_string_value;
use crate::token::Token;
use crate::token::TokenKind;
use std::borrow::Cow;

/// Lazily scans a [`Source`] into an append-only chain of [`Token`]s.
///
/// The chain always starts with a `StartOfFile` token and, once fully
/// scanned, ends with an `EndOfFile` token. `Comment` tokens stay in the
/// chain but are stepped over by [`advance`](Lexer::advance) and
/// [`lookahead`](Lexer::lookahead). Tokens are only scanned when one of
/// those two calls needs them, and each token is scanned at most once.
///
/// A `Lexer` is meant to drive a single parse on a single thread.
///
/// ```
/// use gqlfront::Lexer;
/// use gqlfront::Source;
/// use gqlfront::token::TokenKind;
///
/// let source = Source::anonymous("{ hero }");
/// let mut lexer = Lexer::new(&source);
/// assert_eq!(lexer.advance()?.kind, TokenKind::LeftBrace);
/// assert_eq!(lexer.lookahead()?.value(), Some("hero"));
/// # Ok::<(), gqlfront::GraphQLError>(())
/// ```
#[derive(Debug)]
pub struct Lexer<'src> {
    source: &'src Source,
    body: &'src str,

    /// Every token scanned so far, in source order.
    tokens: Vec<Token<'src>>,

    /// Index of the current token.
    current: usize,

    /// Index of the token that was current before the last `advance()`.
    last: usize,

    /// 1-indexed line at the end of the last scanned token.
    line: usize,

    /// Byte offset at which `line` begins.
    line_start: usize,

    /// Byte offset and 1-indexed column of the most recently computed
    /// column on `line`. Columns are counted forward from here, which
    /// keeps very long lines from being rescanned once per token.
    column_cursor: (usize, usize),
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src Source) -> Self {
        let start_of_file = Token {
            kind: TokenKind::StartOfFile,
            start: 0,
            end: 0,
            line: 1,
            column: 1,
            value: None,
            index: 0,
        };
        Self {
            source,
            body: source.body(),
            tokens: vec![start_of_file],
            current: 0,
            last: 0,
            line: 1,
            line_start: 0,
            column_cursor: (0, 1),
        }
    }

    pub fn source(&self) -> &'src Source {
        self.source
    }

    /// The current token. `StartOfFile` until the first `advance()`.
    pub fn token(&self) -> &Token<'src> {
        &self.tokens[self.current]
    }

    /// The token that was current before the most recent `advance()`,
    /// i.e. the last token the parser consumed.
    pub fn last_token(&self) -> &Token<'src> {
        &self.tokens[self.last]
    }

    /// Moves to the next non-comment token and returns it.
    ///
    /// Once `EndOfFile` is current, further calls stay on it.
    pub fn advance(&mut self) -> ParseResult<&Token<'src>> {
        let next = self.lookahead_index()?;
        self.last = self.current;
        self.current = next;
        Ok(&self.tokens[next])
    }

    /// Returns the next non-comment token without making it current.
    pub fn lookahead(&mut self) -> ParseResult<&Token<'src>> {
        let next = self.lookahead_index()?;
        Ok(&self.tokens[next])
    }

    /// Every token scanned so far, comments included.
    pub fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }

    /// The token before `token` in the chain, if any.
    pub fn prev(&self, token: &Token<'src>) -> Option<&Token<'src>> {
        token
            .index
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
    }

    /// The token after `token` in the chain, if it has been scanned.
    pub fn next(&self, token: &Token<'src>) -> Option<&Token<'src>> {
        self.tokens.get(token.index + 1)
    }

    /// Scans the remainder of the source and returns the complete chain.
    pub fn into_tokens(mut self) -> ParseResult<Vec<Token<'src>>> {
        while self.token().kind != TokenKind::EndOfFile {
            self.advance()?;
        }
        // Trailing comments are scanned on the way to `EndOfFile`, so the
        // chain is complete here.
        Ok(self.tokens)
    }

    fn lookahead_index(&mut self) -> ParseResult<usize> {
        let mut index = self.current;
        if self.tokens[index].kind == TokenKind::EndOfFile {
            return Ok(index);
        }
        loop {
            index += 1;
            if index == self.tokens.len() {
                let from = self.tokens[index - 1].end;
                let checkpoint = (self.line, self.line_start, self.column_cursor);
                match self.read_token(from, index) {
                    Ok(token) => self.tokens.push(token),
                    Err(err) => {
                        // Leave line bookkeeping where the chain ends.
                        (self.line, self.line_start, self.column_cursor) = checkpoint;
                        return Err(err);
                    },
                }
            }
            if self.tokens[index].kind != TokenKind::Comment {
                return Ok(index);
            }
        }
    }

    // =========================================================================
    // Position bookkeeping
    // =========================================================================

    fn char_at(&self, offset: usize) -> Option<char> {
        self.body.get(offset..)?.chars().next()
    }

    /// Records that a new line starts at `line_start`.
    fn begin_line(&mut self, line_start: usize) {
        self.line += 1;
        self.line_start = line_start;
        self.column_cursor = (line_start, 1);
    }

    /// 1-indexed column of `offset`, which must lie on the current line
    /// at or after the last offset this was called with.
    fn column_at(&mut self, offset: usize) -> usize {
        let (cursor_offset, cursor_column) = self.column_cursor;
        let column = cursor_column + self.body[cursor_offset..offset].chars().count();
        self.column_cursor = (offset, column);
        column
    }

    fn make_token(
        &self,
        kind: TokenKind,
        (start, end): (usize, usize),
        (line, column): (usize, usize),
        value: Option<Cow<'src, str>>,
        index: usize,
    ) -> Token<'src> {
        Token {
            kind,
            start,
            end,
            line,
            column,
            value,
            index,
        }
    }

    fn error(&self, message: impl Into<String>, offset: usize) -> GraphQLError {
        GraphQLError::lexical(message, self.source, offset)
    }

    // =========================================================================
    // Token dispatch
    // =========================================================================

    /// Scans the token that starts at or after `from`, skipping
    /// whitespace, commas, byte order marks and line terminators.
    fn read_token(&mut self, from: usize, index: usize) -> ParseResult<Token<'src>> {
        let body = self.body;
        let bytes = body.as_bytes();
        let mut pos = from;

        while let Some(ch) = self.char_at(pos) {
            // Line terminators and ignored characters
            match ch {
                '\u{FEFF}' | '\t' | ' ' | ',' => {
                    pos += ch.len_utf8();
                    continue;
                },
                '\n' => {
                    pos += 1;
                    self.begin_line(pos);
                    continue;
                },
                '\r' => {
                    pos += if bytes.get(pos + 1) == Some(&b'\n') { 2 } else { 1 };
                    self.begin_line(pos);
                    continue;
                },
                _ => {},
            }

            let position = (self.line, self.column_at(pos));
            let punctuator = match ch {
                '!' => Some(TokenKind::Bang),
                '$' => Some(TokenKind::Dollar),
                '&' => Some(TokenKind::Ampersand),
                '(' => Some(TokenKind::LeftParen),
                ')' => Some(TokenKind::RightParen),
                ':' => Some(TokenKind::Colon),
                '=' => Some(TokenKind::Equals),
                '@' => Some(TokenKind::At),
                '[' => Some(TokenKind::LeftBracket),
                ']' => Some(TokenKind::RightBracket),
                '{' => Some(TokenKind::LeftBrace),
                '|' => Some(TokenKind::Pipe),
                '}' => Some(TokenKind::RightBrace),
                _ => None,
            };
            if let Some(kind) = punctuator {
                return Ok(self.make_token(kind, (pos, pos + 1), position, None, index));
            }

            return match ch {
                '#' => Ok(self.read_comment(pos, position, index)),
                '.' if self.body[pos..].starts_with("...") => Ok(self.make_token(
                    TokenKind::Spread,
                    (pos, pos + 3),
                    position,
                    None,
                    index,
                )),
                '"' if self.body[pos..].starts_with("\"\"\"") => {
                    self.read_block_string(pos, position, index)
                },
                '"' => self.read_string(pos, position, index),
                '-' | '0'..='9' => self.read_number(pos, position, index),
                ch if is_name_start(ch) => Ok(self.read_name(pos, position, index)),
                ch => Err(self.unexpected_character(ch, pos)),
            };
        }

        let end = self.body.len();
        let position = (self.line, self.column_at(end));
        Ok(self.make_token(TokenKind::EndOfFile, (end, end), position, None, index))
    }

    fn unexpected_character(&self, ch: char, offset: usize) -> GraphQLError {
        if ch == '\'' {
            return self.error(
                "Unexpected single quote character ('), did you mean to use \
                 a double quote (\")?",
                offset,
            );
        }
        if is_disallowed_control(ch) {
            return self.error(format!("Invalid character: {}.", describe_char(ch)), offset);
        }
        self.error(format!("Unexpected character: {}.", describe_char(ch)), offset)
    }

    // =========================================================================
    // Comments and names
    // =========================================================================

    /// `#` through the end of the line; the value excludes the `#`.
    fn read_comment(
        &self,
        start: usize,
        position: (usize, usize),
        index: usize,
    ) -> Token<'src> {
        let text_start = start + 1;
        let end = memchr::memchr2(b'\n', b'\r', &self.body.as_bytes()[text_start..])
            .map_or(self.body.len(), |len| text_start + len);
        self.make_token(
            TokenKind::Comment,
            (start, end),
            position,
            Some(Cow::Borrowed(&self.body[text_start..end])),
            index,
        )
    }

    fn read_name(
        &self,
        start: usize,
        position: (usize, usize),
        index: usize,
    ) -> Token<'src> {
        let end = self.body[start..]
            .find(|ch: char| !is_name_continue(ch))
            .map_or(self.body.len(), |len| start + len);
        self.make_token(
            TokenKind::Name,
            (start, end),
            position,
            Some(Cow::Borrowed(&self.body[start..end])),
            index,
        )
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
    ///
    /// See <https://spec.graphql.org/October2021/#sec-Int-Value>.
    fn read_number(
        &self,
        start: usize,
        position: (usize, usize),
        index: usize,
    ) -> ParseResult<Token<'src>> {
        let bytes = self.body.as_bytes();
        let mut pos = start;
        let mut is_float = false;

        if bytes[pos] == b'-' {
            pos += 1;
        }

        if bytes.get(pos) == Some(&b'0') {
            pos += 1;
            if let Some(ch) = self.char_at(pos)
                && ch.is_ascii_digit()
            {
                return Err(self.error(
                    format!(
                        "Invalid number, unexpected digit after 0: {}.",
                        describe_char(ch),
                    ),
                    pos,
                ));
            }
        } else {
            pos = self.read_digits(pos)?;
        }

        if bytes.get(pos) == Some(&b'.') {
            is_float = true;
            pos = self.read_digits(pos + 1)?;
        }

        if matches!(bytes.get(pos), Some(b'e' | b'E')) {
            is_float = true;
            pos += 1;
            if matches!(bytes.get(pos), Some(b'+' | b'-')) {
                pos += 1;
            }
            pos = self.read_digits(pos)?;
        }

        // `1.2.3`, `123abc` and `0x1F` are single malformed numbers rather
        // than a number followed by another token.
        if let Some(ch) = self.char_at(pos)
            && (ch == '.' || is_name_start(ch))
        {
            return Err(self.error(
                format!("Invalid number, expected digit but got: {}.", describe_char(ch)),
                pos,
            ));
        }

        let kind = if is_float { TokenKind::Float } else { TokenKind::Integer };
        Ok(self.make_token(
            kind,
            (start, pos),
            position,
            Some(Cow::Borrowed(&self.body[start..pos])),
            index,
        ))
    }

    /// Consumes one or more ASCII digits starting at `pos` and returns the
    /// offset after the last one.
    fn read_digits(&self, pos: usize) -> ParseResult<usize> {
        match self.char_at(pos) {
            Some(ch) if ch.is_ascii_digit() => {
                let digits = self.body.as_bytes()[pos..]
                    .iter()
                    .take_while(|byte| byte.is_ascii_digit())
                    .count();
                Ok(pos + digits)
            },
            other => Err(self.error(
                format!(
                    "Invalid number, expected digit but got: {}.",
                    other.map_or_else(|| "<EOF>".to_string(), describe_char),
                ),
                pos,
            )),
        }
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// A single-line `"..."` string. The value is borrowed from the body
    /// unless it contains escape sequences.
    fn read_string(
        &self,
        start: usize,
        position: (usize, usize),
        index: usize,
    ) -> ParseResult<Token<'src>> {
        let mut pos = start + 1;
        let mut chunk_start = pos;
        let mut decoded: Option<String> = None;

        while let Some(ch) = self.char_at(pos) {
            match ch {
                '"' => {
                    let value = match decoded {
                        Some(mut value) => {
                            value.push_str(&self.body[chunk_start..pos]);
                            Cow::Owned(value)
                        },
                        None => Cow::Borrowed(&self.body[chunk_start..pos]),
                    };
                    return Ok(self.make_token(
                        TokenKind::String,
                        (start, pos + 1),
                        position,
                        Some(value),
                        index,
                    ));
                },
                '\n' | '\r' => break,
                '\\' => {
                    let value = decoded.get_or_insert_with(String::new);
                    value.push_str(&self.body[chunk_start..pos]);
                    let (unescaped, len) = self.read_escape_sequence(pos)?;
                    value.push(unescaped);
                    pos += len;
                    chunk_start = pos;
                },
                ch if is_disallowed_control(ch) => {
                    return Err(self.error(
                        format!("Invalid character within String: {}.", describe_char(ch)),
                        pos,
                    ));
                },
                ch => pos += ch.len_utf8(),
            }
        }

        Err(self.error("Unterminated string.", pos))
    }

    /// Decodes the escape sequence whose backslash is at `pos`, returning
    /// the character and the length of the sequence in bytes.
    fn read_escape_sequence(&self, pos: usize) -> ParseResult<(char, usize)> {
        let Some(escaped) = self.char_at(pos + 1) else {
            return Err(self.error("Unterminated string.", pos + 1));
        };
        let simple = match escaped {
            '"' => Some('"'),
            '\\' => Some('\\'),
            '/' => Some('/'),
            'b' => Some('\u{0008}'),
            'f' => Some('\u{000C}'),
            'n' => Some('\n'),
            'r' => Some('\r'),
            't' => Some('\t'),
            _ => None,
        };
        if let Some(unescaped) = simple {
            return Ok((unescaped, 2));
        }
        if escaped != 'u' {
            return Err(self.error(
                format!("Invalid character escape sequence: \"\\{escaped}\"."),
                pos,
            ));
        }

        let invalid_unicode = |len: usize| {
            let end = (pos + len).min(self.body.len());
            let sequence = self.body.get(pos..end).unwrap_or("\\u");
            self.error(format!("Invalid Unicode escape sequence: \"{sequence}\"."), pos)
        };

        let Some(code) = self.read_hex4(pos + 2) else {
            return Err(invalid_unicode(6));
        };
        if let Some(ch) = char::from_u32(code) {
            return Ok((ch, 6));
        }

        // A leading surrogate must be followed by an escaped trailing
        // surrogate; together they encode one supplementary-plane char.
        if (0xD800..=0xDBFF).contains(&code)
            && self.body[pos + 6..].starts_with("\\u")
            && let Some(trailing) = self.read_hex4(pos + 8)
            && (0xDC00..=0xDFFF).contains(&trailing)
        {
            let combined = 0x10000 + ((code - 0xD800) << 10) + (trailing - 0xDC00);
            if let Some(ch) = char::from_u32(combined) {
                return Ok((ch, 12));
            }
        }
        Err(invalid_unicode(6))
    }

    fn read_hex4(&self, pos: usize) -> Option<u32> {
        let digits = self.body.get(pos..pos + 4)?;
        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok()
    }

    /// A `"""..."""` block string. The raw text is unescaped (`\"""` only)
    /// and then dedented.
    fn read_block_string(
        &mut self,
        start: usize,
        position: (usize, usize),
        index: usize,
    ) -> ParseResult<Token<'src>> {
        let body = self.body;
        let bytes = body.as_bytes();
        let mut pos = start + 3;
        let mut chunk_start = pos;
        let mut raw = String::new();

        while let Some(ch) = self.char_at(pos) {
            let rest = &self.body[pos..];
            if rest.starts_with("\"\"\"") {
                raw.push_str(&self.body[chunk_start..pos]);
                return Ok(self.make_token(
                    TokenKind::BlockString,
                    (start, pos + 3),
                    position,
                    Some(Cow::Owned(dedent_block_string_value(&raw))),
                    index,
                ));
            }
            if rest.starts_with("\\\"\"\"") {
                raw.push_str(&self.body[chunk_start..pos]);
                raw.push_str("\"\"\"");
                pos += 4;
                chunk_start = pos;
                continue;
            }

            match ch {
                '\n' => {
                    pos += 1;
                    self.begin_line(pos);
                },
                '\r' => {
                    pos += if bytes.get(pos + 1) == Some(&b'\n') { 2 } else { 1 };
                    self.begin_line(pos);
                },
                ch if is_disallowed_control(ch) => {
                    return Err(self.error(
                        format!("Invalid character within String: {}.", describe_char(ch)),
                        pos,
                    ));
                },
                ch => pos += ch.len_utf8(),
            }
        }

        Err(self.error("Unterminated string.", pos))
    }
}

/// Scans every token of `source`, comments included, from
/// `StartOfFile` to `EndOfFile`.
pub fn tokenize(source: &Source) -> ParseResult<Vec<Token<'_>>> {
    Lexer::new(source).into_tokens()
}

// =============================================================================
// Helper functions
// =============================================================================

/// <https://spec.graphql.org/October2021/#NameStart>
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// <https://spec.graphql.org/October2021/#NameContinue>
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// C0 control characters other than tab, line feed and carriage return,
/// which are not source characters.
fn is_disallowed_control(ch: char) -> bool {
    (ch as u32) < 0x20 && !matches!(ch, '\t' | '\n' | '\r')
}

/// Printable ASCII is quoted (`"a"`, `'"'`); anything else is shown as
/// its code point (`U+00E9`).
fn describe_char(ch: char) -> String {
    match ch {
        '"' => "'\"'".to_string(),
        ' '..='~' => format!("\"{ch}\""),
        _ => format!("U+{:04X}", ch as u32),
    }
}

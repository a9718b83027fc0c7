/// A 1-indexed line/column pair within a [`Source`](crate::Source)'s
/// body.
///
/// Columns count Unicode scalar values from the start of the line, so
/// a multi-byte character advances the column by exactly one.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Resolves a byte offset into `body` by scanning for line
    /// terminators (`\n`, `\r\n`, or a lone `\r`) up to the offset.
    ///
    /// Offsets past the end of `body` are clamped to its length.
    pub fn from_offset(body: &str, offset: usize) -> Self {
        let offset = offset.min(body.len());
        let bytes = body.as_bytes();
        let mut line = 1;
        let mut line_start = 0;
        for terminator in memchr::memchr2_iter(b'\n', b'\r', &bytes[..offset]) {
            // The `\n` half of a `\r\n` pair was already counted.
            if terminator < line_start {
                continue;
            }
            line += 1;
            line_start = terminator_end(bytes, terminator);
        }

        let column = body
            .get(line_start.min(offset)..offset)
            .map_or(0, |prefix| prefix.chars().count());

        Self { line, column: column + 1 }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the offset one past the line terminator starting at
/// `terminator`, treating `\r\n` as a single terminator.
pub(crate) fn terminator_end(bytes: &[u8], terminator: usize) -> usize {
    if bytes[terminator] == b'\r' && bytes.get(terminator + 1) == Some(&b'\n') {
        terminator + 2
    } else {
        terminator + 1
    }
}

/// Splits `text` into lines on `\r\n`, `\n` and `\r`.
///
/// Unlike [`str::lines`], a trailing terminator yields a final empty
/// line and a lone `\r` is a terminator.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut line_start = 0;
    for terminator in memchr::memchr2_iter(b'\n', b'\r', bytes) {
        if terminator < line_start {
            continue;
        }
        lines.push(&text[line_start..terminator]);
        line_start = terminator_end(bytes, terminator);
    }
    lines.push(&text[line_start..]);
    lines
}

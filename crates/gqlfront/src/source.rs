use crate::Location;
use crate::location::split_lines;

const DEFAULT_SOURCE_NAME: &str = "GraphQL request";

/// Lines longer than this are rendered as fixed-width segments.
const LONG_LINE_THRESHOLD: usize = 120;
const LONG_LINE_SEGMENT_WIDTH: usize = 80;

/// An immutable, named GraphQL document.
///
/// `location_offset` places the body inside a larger file (for example
/// a query embedded in a host-language string literal); it only
/// affects how [`render`](Source::render) numbers lines and columns.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Source {
    name: String,
    body: String,
    location_offset: Location,
}

impl Source {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            location_offset: Location::default(),
        }
    }

    /// Creates a source named `"GraphQL request"`.
    pub fn anonymous(body: impl Into<String>) -> Self {
        Self::new(DEFAULT_SOURCE_NAME, body)
    }

    /// Sets the 1-indexed line/column at which this body begins in its
    /// enclosing file.
    pub fn with_location_offset(mut self, location_offset: Location) -> Self {
        self.location_offset = location_offset;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn location_offset(&self) -> Location {
        self.location_offset
    }

    /// Resolves a byte offset into this source's body.
    pub fn location_at(&self, offset: usize) -> Location {
        Location::from_offset(&self.body, offset)
    }

    /// Renders a caret-annotated excerpt of this source around
    /// `location`:
    ///
    /// ```text
    /// GraphQL request(2:9) ->
    /// 1 | {
    /// 2 |   hero(
    ///   |         ^
    /// 3 | }
    /// ```
    ///
    /// `location` is relative to the body; the header and gutter apply
    /// [`location_offset`](Source::location_offset). A line wider than
    /// 120 characters is cut into 80-character segments and only the
    /// segment holding the caret and the one after it are shown.
    pub fn render(&self, location: Location) -> Result<String, SourceRenderError> {
        let first_line_indent = self.location_offset.column.saturating_sub(1);
        let line_offset = self.location_offset.line.saturating_sub(1);
        let body = format!("{}{}", " ".repeat(first_line_indent), self.body);
        let lines = split_lines(&body);

        let out_of_range = SourceRenderError::LineOutOfRange {
            line: location.line,
            line_count: lines.len(),
        };
        let Some(line_index) = location.line.checked_sub(1) else {
            return Err(out_of_range);
        };
        let Some(location_line) = lines.get(line_index).copied() else {
            return Err(out_of_range);
        };

        let line_number = location.line + line_offset;
        let column_number = if location.line == 1 {
            location.column + first_line_indent
        } else {
            location.column
        };
        let caret_index = column_number.saturating_sub(1);

        let mut rendered = format!("{}({line_number}:{column_number}) ->\n", self.name);

        if location_line.chars().count() > LONG_LINE_THRESHOLD {
            let segments = segment_line(location_line);
            let segment_index = caret_index / LONG_LINE_SEGMENT_WIDTH;
            let caret = caret_line(caret_index % LONG_LINE_SEGMENT_WIDTH);
            rendered.push_str(&print_prefixed_lines(&[
                (line_number.to_string(), segments.get(segment_index).map(String::as_str)),
                (String::new(), Some(&caret)),
                (String::new(), segments.get(segment_index + 1).map(String::as_str)),
            ]));
            return Ok(rendered);
        }

        let previous_line = line_index
            .checked_sub(1)
            .and_then(|index| lines.get(index).copied());
        let caret = caret_line(caret_index);
        rendered.push_str(&print_prefixed_lines(&[
            (line_number.saturating_sub(1).to_string(), previous_line),
            (line_number.to_string(), Some(location_line)),
            (String::new(), Some(&caret)),
            ((line_number + 1).to_string(), lines.get(line_index + 1).copied()),
        ]));
        Ok(rendered)
    }
}

impl From<&str> for Source {
    fn from(body: &str) -> Self {
        Self::anonymous(body)
    }
}

impl From<String> for Source {
    fn from(body: String) -> Self {
        Self::anonymous(body)
    }
}

/// Failure to render source context for a diagnostic.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SourceRenderError {
    #[error("line {line} is outside of the source, which has {line_count} line(s)")]
    LineOutOfRange { line: usize, line_count: usize },
}

fn caret_line(caret_index: usize) -> String {
    format!("{}^", " ".repeat(caret_index))
}

fn segment_line(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    chars
        .chunks(LONG_LINE_SEGMENT_WIDTH)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Prints `prefix | content` rows with right-aligned prefixes, skipping
/// rows whose content is absent.
fn print_prefixed_lines(rows: &[(String, Option<&str>)]) -> String {
    let present: Vec<(&str, &str)> = rows
        .iter()
        .filter_map(|(prefix, content)| content.map(|c| (prefix.as_str(), c)))
        .collect();
    let prefix_width = present
        .iter()
        .map(|(prefix, _)| prefix.len())
        .max()
        .unwrap_or(0);

    present
        .iter()
        .map(|(prefix, content)| {
            if content.is_empty() {
                format!("{prefix:>prefix_width$} |")
            } else {
                format!("{prefix:>prefix_width$} | {content}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

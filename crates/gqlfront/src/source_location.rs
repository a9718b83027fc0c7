use crate::ByteSpan;
use crate::Location;
use crate::Source;

/// The byte range an AST node was parsed from, together with the
/// [`Source`] it refers to.
///
/// Line/column resolution is deferred to [`start_location`] and
/// [`end_location`] so that the line scan only happens when something
/// (usually a diagnostic) asks for it.
///
/// [`start_location`]: SourceLocation::start_location
/// [`end_location`]: SourceLocation::end_location
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceLocation<'src> {
    pub start: usize,
    pub end: usize,
    pub source: &'src Source,
}

impl<'src> SourceLocation<'src> {
    pub fn new(start: usize, end: usize, source: &'src Source) -> Self {
        debug_assert!(
            start <= end && end <= source.body().len(),
            "location {start}..{end} outside of a {}-byte body",
            source.body().len(),
        );
        Self { start, end, source }
    }

    pub fn span(&self) -> ByteSpan {
        ByteSpan::new(self.start, self.end)
    }

    pub fn start_location(&self) -> Location {
        self.source.location_at(self.start)
    }

    pub fn end_location(&self) -> Location {
        self.source.location_at(self.end)
    }

    /// The slice of the source body this location covers.
    pub fn source_text(&self) -> &'src str {
        &self.source.body()[self.start..self.end]
    }
}

/// Half-open interval `[start, end)` of byte offsets into a
/// [`Source`](crate::Source) body. Both offsets are 0-based.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ByteSpan {
    /// Offset of the first byte covered (inclusive).
    pub start: usize,
    /// Offset one past the last byte covered (exclusive).
    pub end: usize,
}

impl ByteSpan {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "inverted span {start}..{end}");
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

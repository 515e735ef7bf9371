use serde::Serialize;

/// A byte range `[start, end)` into the source rope.
///
/// Blocks keep the span of the lines they were built from, so slicing the
/// rope with a block span gives back the exact source including fence lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Smallest span covering both `self` and `other`.
    #[must_use]
    pub fn cover(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

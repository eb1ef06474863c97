/// A byte range `[start, end)` into a single text fragment.
///
/// Inline substitutions are recorded as spans over the fragment they were
/// found in, never as copied text, so every rewrite can be traced back to the
/// exact source bytes it replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns true if `other` lies entirely within this span.
    #[must_use]
    pub fn contains(self, other: Span) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Slices `text` with this span.
    pub fn slice(self, text: &str) -> &str {
        &text[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(2, 5).len(), 3);
        assert!(Span::new(4, 4).is_empty());
        assert!(Span::new(5, 4).is_empty());
    }

    #[test]
    fn contains_nested_span() {
        let outer = Span::new(0, 10);
        assert!(outer.contains(Span::new(0, 10)));
        assert!(outer.contains(Span::new(3, 4)));
        assert!(!outer.contains(Span::new(8, 11)));
    }

    #[test]
    fn slice_returns_source_text() {
        assert_eq!(Span::new(6, 11).slice("hello world"), "world");
    }
}

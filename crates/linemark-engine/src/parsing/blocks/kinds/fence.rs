/// Embedded (verbatim) block fence.
///
/// The marker is configurable per parser instance, so every check takes it
/// as an argument.
pub struct Fence;

impl Fence {
    pub const DEFAULT: &'static str = "===";

    /// Returns the block tag when `line` opens an embedded block.
    ///
    /// An opener is the marker followed by a space; the rest of the line,
    /// trimmed, is the tag (`=== js` opens a `js` block).
    pub fn open<'a>(marker: &str, line: &'a str) -> Option<&'a str> {
        let rest = line.strip_prefix(marker)?;
        let tag = rest.strip_prefix(' ')?;
        Some(tag.trim())
    }

    /// True when `line` is the bare marker, which closes an open block.
    ///
    /// Trailing whitespace (including a `\r`) is tolerated.
    pub fn closes(marker: &str, line: &str) -> bool {
        line.strip_prefix(marker)
            .is_some_and(|rest| rest.trim().is_empty())
    }
}

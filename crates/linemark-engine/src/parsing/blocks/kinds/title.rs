/// Headings, in ATX (`## Text`) and Setext (text + full-width underline) form.
pub struct Title;

impl Title {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 5;
    /// Setext underline for a level 1 heading.
    pub const DOUBLE: char = '=';
    /// Setext underline for a level 2 heading.
    pub const SINGLE: char = '-';

    /// Splits an ATX line into its marker and text.
    ///
    /// The marker is everything before the first space, so `#x y` yields a
    /// marker of `#x` that renderers treat as an unknown level. A line with
    /// no space is not a title.
    pub fn atx(line: &str) -> Option<(&str, &str)> {
        if !line.starts_with(Self::MARKER) {
            return None;
        }
        let index = line.find(' ')?;
        Some((&line[..index], &line[index + 1..]))
    }

    /// Returns the equivalent ATX marker when `next` underlines `line`.
    ///
    /// `line` must start with an uppercase letter, and `next` must consist
    /// only of `=` or `-` with exactly as many characters as `line`.
    pub fn setext(line: &str, next: Option<&str>) -> Option<&'static str> {
        let first = line.chars().next()?;
        if !first.is_uppercase() {
            return None;
        }
        let next = next?;
        let underline = next.chars().next()?;
        let marker = match underline {
            Self::DOUBLE => "#",
            Self::SINGLE => "##",
            _ => return None,
        };
        if !next.chars().all(|c| c == underline) {
            return None;
        }
        if next.chars().count() != line.chars().count() {
            return None;
        }
        Some(marker)
    }

    /// Heading level for a marker: `#` → 1 through `#####` → 5.
    pub fn level(marker: &str) -> Option<u8> {
        let n = marker.len();
        if n == 0 || n > Self::MAX_LEVEL || !marker.chars().all(|c| c == Self::MARKER) {
            return None;
        }
        u8::try_from(n).ok()
    }
}

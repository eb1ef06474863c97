/// List item lines: a marker character followed by a space.
pub struct ListMarker;

impl ListMarker {
    pub const MARKERS: [char; 3] = ['-', '+', 'x'];

    /// Splits a list line into its marker and trimmed item text.
    pub fn parse(line: &str) -> Option<(char, &str)> {
        let mut chars = line.chars();
        let marker = chars.next()?;
        if !Self::MARKERS.contains(&marker) {
            return None;
        }
        let rest = chars.as_str().strip_prefix(' ')?;
        Some((marker, rest.trim()))
    }
}

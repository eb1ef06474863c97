use crate::parsing::blocks::types::BreakKind;

/// Break lines: an empty line, or one of the rule markers.
pub struct Break;

impl Break {
    pub const RULES: [&'static str; 2] = ["***", "---"];

    pub fn kind(line: &str) -> Option<BreakKind> {
        if line.is_empty() {
            Some(BreakKind::LineFeed)
        } else if Self::RULES.contains(&line) {
            Some(BreakKind::Rule)
        } else {
            None
        }
    }
}

use crate::parsing::blocks::types::ParagraphTag;

/// Tagged paragraph lines: `> `, `| ` and `// `.
pub struct ParagraphLine;

impl ParagraphLine {
    pub const QUOTE: &'static str = "> ";
    pub const PIPE: &'static str = "| ";
    pub const COMMENT: &'static str = "// ";

    /// Splits a paragraph line into its tag and trimmed text.
    pub fn parse(line: &str) -> Option<(ParagraphTag, &str)> {
        let (tag, rest) = if let Some(rest) = line.strip_prefix(Self::QUOTE) {
            (ParagraphTag::Quote, rest)
        } else if let Some(rest) = line.strip_prefix(Self::PIPE) {
            (ParagraphTag::Pipe, rest)
        } else if let Some(rest) = line.strip_prefix(Self::COMMENT) {
            (ParagraphTag::Comment, rest)
        } else {
            return None;
        };
        Some((tag, rest.trim()))
    }
}

use super::{
    kinds::{Break, Fence, KeyValueLine, ListMarker, ParagraphLine, Title},
    types::{BreakKind, ParagraphTag},
};

/// What a single line is, with its parts borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Opens an embedded block; `tag` is the text after the fence.
    FenceOpen { tag: &'a str },
    /// Closes the open embedded block.
    FenceClose,
    /// A line inside an embedded block, kept verbatim.
    Verbatim,
    Break(BreakKind),
    ListItem { marker: char, text: &'a str },
    KeyValue { key: &'a str, value: &'a str },
    Paragraph { tag: ParagraphTag, text: &'a str },
    /// A heading. `underlined` means the next line is its Setext underline
    /// and must be skipped.
    Title {
        marker: &'a str,
        text: &'a str,
        underlined: bool,
    },
    /// Nothing matched.
    Plain,
}

/// Classifies lines in detector priority order.
pub struct MarkdownLineClassifier<'f> {
    fence: &'f str,
}

impl<'f> MarkdownLineClassifier<'f> {
    pub fn new(fence: &'f str) -> Self {
        Self { fence }
    }

    /// Classifies `line`.
    ///
    /// `next` is the following line, needed only for Setext titles.
    /// `in_embedded` is the one piece of parser state detection depends on:
    /// inside an embedded block only the closing fence is recognized.
    pub fn classify<'a>(
        &self,
        line: &'a str,
        next: Option<&str>,
        in_embedded: bool,
    ) -> LineClass<'a> {
        if in_embedded {
            return if Fence::closes(self.fence, line) {
                LineClass::FenceClose
            } else {
                LineClass::Verbatim
            };
        }
        if let Some(tag) = Fence::open(self.fence, line) {
            return LineClass::FenceOpen { tag };
        }
        if let Some(kind) = Break::kind(line) {
            return LineClass::Break(kind);
        }
        if let Some((marker, text)) = ListMarker::parse(line) {
            return LineClass::ListItem { marker, text };
        }
        if let Some((key, value)) = KeyValueLine::split(line) {
            return LineClass::KeyValue { key, value };
        }
        if let Some((tag, text)) = ParagraphLine::parse(line) {
            return LineClass::Paragraph { tag, text };
        }
        if let Some((marker, text)) = Title::atx(line) {
            return LineClass::Title {
                marker,
                text,
                underlined: false,
            };
        }
        if let Some(marker) = Title::setext(line, next) {
            return LineClass::Title {
                marker,
                text: line,
                underlined: true,
            };
        }
        LineClass::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn classify(line: &str) -> LineClass<'_> {
        MarkdownLineClassifier::new(Fence::DEFAULT).classify(line, None, false)
    }

    #[rstest]
    #[case("=== js", LineClass::FenceOpen { tag: "js" })]
    #[case("", LineClass::Break(BreakKind::LineFeed))]
    #[case("***", LineClass::Break(BreakKind::Rule))]
    #[case("---", LineClass::Break(BreakKind::Rule))]
    #[case("- a", LineClass::ListItem { marker: '-', text: "a" })]
    #[case("key    : value", LineClass::KeyValue { key: "key", value: "value" })]
    #[case("> q", LineClass::Paragraph { tag: ParagraphTag::Quote, text: "q" })]
    #[case("// c", LineClass::Paragraph { tag: ParagraphTag::Comment, text: "c" })]
    #[case("## T", LineClass::Title { marker: "##", text: "T", underlined: false })]
    #[case("key: value", LineClass::Plain)]
    #[case("just text", LineClass::Plain)]
    fn detectors(#[case] line: &str, #[case] expected: LineClass<'static>) {
        assert_eq!(classify(line), expected);
    }

    #[test]
    fn list_beats_key_value() {
        assert_eq!(
            classify("- key    : value"),
            LineClass::ListItem {
                marker: '-',
                text: "key    : value"
            }
        );
    }

    #[test]
    fn key_value_beats_paragraph() {
        assert_eq!(
            classify("> a   : b"),
            LineClass::KeyValue { key: "> a", value: "b" }
        );
    }

    #[test]
    fn setext_uses_next_line() {
        let c = MarkdownLineClassifier::new(Fence::DEFAULT);
        assert_eq!(
            c.classify("Title", Some("-----"), false),
            LineClass::Title {
                marker: "##",
                text: "Title",
                underlined: true
            }
        );
        assert_eq!(c.classify("Title", Some("----"), false), LineClass::Plain);
    }

    #[test]
    fn embedded_lines_are_verbatim() {
        let c = MarkdownLineClassifier::new(Fence::DEFAULT);
        assert_eq!(c.classify("# not a title", None, true), LineClass::Verbatim);
        assert_eq!(c.classify("", None, true), LineClass::Verbatim);
        assert_eq!(c.classify("===", None, true), LineClass::FenceClose);
    }

    #[test]
    fn custom_fence() {
        let c = MarkdownLineClassifier::new("```");
        assert_eq!(c.classify("``` rust", None, false), LineClass::FenceOpen { tag: "rust" });
        assert_eq!(c.classify("=== js", None, false), LineClass::Plain);
    }
}

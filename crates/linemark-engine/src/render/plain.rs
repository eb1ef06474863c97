use crate::parsing::{
    blocks::{BreakKind, KeyValue, ListItem, ParagraphTag},
    inline::{FormatKind, Image, KeywordKind},
};

use super::Renderer;

/// Renders documents as plain text, one block per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl Renderer for PlainTextRenderer {
    fn title(&self, _marker: &str, text: &str) -> Option<String> {
        Some(format!("{text}\n"))
    }

    fn paragraph(&self, _tag: ParagraphTag, lines: &[String]) -> Option<String> {
        Some(format!("{}\n", lines.join("\n")))
    }

    fn list(&self, items: &[ListItem]) -> Option<String> {
        Some(
            items
                .iter()
                .map(|item| format!("{} {}\n", item.marker, item.value))
                .collect(),
        )
    }

    fn key_value(&self, entries: &[KeyValue]) -> Option<String> {
        Some(
            entries
                .iter()
                .map(|e| format!("{}: {}\n", e.key, e.value))
                .collect(),
        )
    }

    fn embedded(&self, _command: &str, lines: &[String]) -> Option<String> {
        Some(lines.iter().map(|l| format!("{l}\n")).collect())
    }

    fn line_break(&self, kind: BreakKind) -> Option<String> {
        Some(match kind {
            BreakKind::LineFeed => "\n".to_string(),
            BreakKind::Rule => "----\n".to_string(),
        })
    }

    fn line(&self, text: &str) -> Option<String> {
        Some(format!("{text}\n"))
    }

    fn link(&self, text: &str, url: &str) -> Option<String> {
        if url == text || url.strip_prefix("http://") == Some(text) {
            Some(url.to_string())
        } else {
            Some(format!("{text} ({url})"))
        }
    }

    fn image(&self, image: &Image) -> Option<String> {
        Some(image.alt.clone())
    }

    fn format(&self, _kind: FormatKind, text: &str) -> Option<String> {
        Some(text.to_string())
    }

    fn keyword(&self, _kind: KeywordKind, text: &str) -> Option<String> {
        Some(text.to_string())
    }
}

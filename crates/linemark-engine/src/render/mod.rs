//! # Renderers
//!
//! The engine never produces markup itself: every recognized construct is
//! handed to a [`Renderer`], whose return value is appended to the output.
//!
//! - **`html`**: `HtmlRenderer`, the default
//! - **`plain`**: `PlainTextRenderer`, markup stripped to text

pub mod html;
pub mod plain;

pub use html::HtmlRenderer;
pub use plain::PlainTextRenderer;

use crate::parsing::{
    blocks::{BreakKind, KeyValue, ListItem, ParagraphTag},
    inline::{FormatKind, Image, KeywordKind},
};

/// One method per construct kind.
///
/// Every method is optional. Block methods that return `None` contribute
/// nothing to the output; inline methods that return `None` leave the
/// matched source text in place. Implementing a handful of methods
/// therefore replaces just those behaviors.
///
/// Renderers are called with finished inline text (except for
/// [`embedded`](Renderer::embedded), which receives raw lines) and must not
/// depend on call order beyond document order.
pub trait Renderer {
    /// A heading. `marker` is `#` through `#####` for levels 1 to 5, or
    /// whatever preceded the first space on a `#` line.
    fn title(&self, _marker: &str, _text: &str) -> Option<String> {
        None
    }

    fn paragraph(&self, _tag: ParagraphTag, _lines: &[String]) -> Option<String> {
        None
    }

    fn list(&self, _items: &[ListItem]) -> Option<String> {
        None
    }

    fn key_value(&self, _entries: &[KeyValue]) -> Option<String> {
        None
    }

    /// A fenced block. `command` is whatever followed the opening fence.
    fn embedded(&self, _command: &str, _lines: &[String]) -> Option<String> {
        None
    }

    fn line_break(&self, _kind: BreakKind) -> Option<String> {
        None
    }

    /// A line no block claimed.
    fn line(&self, _text: &str) -> Option<String> {
        None
    }

    /// `url` always carries a scheme.
    fn link(&self, _text: &str, _url: &str) -> Option<String> {
        None
    }

    fn image(&self, _image: &Image) -> Option<String> {
        None
    }

    fn format(&self, _kind: FormatKind, _text: &str) -> Option<String> {
        None
    }

    fn keyword(&self, _kind: KeywordKind, _text: &str) -> Option<String> {
        None
    }
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn title(&self, marker: &str, text: &str) -> Option<String> {
        (**self).title(marker, text)
    }

    fn paragraph(&self, tag: ParagraphTag, lines: &[String]) -> Option<String> {
        (**self).paragraph(tag, lines)
    }

    fn list(&self, items: &[ListItem]) -> Option<String> {
        (**self).list(items)
    }

    fn key_value(&self, entries: &[KeyValue]) -> Option<String> {
        (**self).key_value(entries)
    }

    fn embedded(&self, command: &str, lines: &[String]) -> Option<String> {
        (**self).embedded(command, lines)
    }

    fn line_break(&self, kind: BreakKind) -> Option<String> {
        (**self).line_break(kind)
    }

    fn line(&self, text: &str) -> Option<String> {
        (**self).line(text)
    }

    fn link(&self, text: &str, url: &str) -> Option<String> {
        (**self).link(text, url)
    }

    fn image(&self, image: &Image) -> Option<String> {
        (**self).image(image)
    }

    fn format(&self, kind: FormatKind, text: &str) -> Option<String> {
        (**self).format(kind, text)
    }

    fn keyword(&self, kind: KeywordKind, text: &str) -> Option<String> {
        (**self).keyword(kind, text)
    }
}

use crate::{parsing::inline::InlineRewriter, render::Renderer};

use super::{
    classify::LineClass,
    types::{BlockStatus, KeyValue, ListItem, OpenBlock},
};

/// The parser state machine: the open block, the Setext skip flag and the
/// output accumulated so far.
///
/// Every line is fed through [`push`](Self::push); [`finish`](Self::finish)
/// flushes whatever is still open and hands back the output.
#[derive(Debug, Clone)]
pub struct BlockBuilder {
    open: OpenBlock,
    skip: bool,
    output: String,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            open: OpenBlock::None,
            skip: false,
            output: String::new(),
        }
    }

    pub fn status(&self) -> BlockStatus {
        self.open.status()
    }

    /// Command qualifier of the open block (quote marker, embedded tag).
    pub fn command(&self) -> &str {
        self.open.command()
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Returns true, once, when the previous line consumed this one.
    pub fn take_skip(&mut self) -> bool {
        std::mem::replace(&mut self.skip, false)
    }

    pub fn push<R: Renderer + ?Sized>(
        &mut self,
        class: LineClass<'_>,
        line: &str,
        inline: &InlineRewriter<'_, R>,
    ) {
        log::trace!("{class:?}");
        let renderer = inline.renderer();

        match class {
            LineClass::Verbatim => {
                if let OpenBlock::Embedded { lines, .. } = &mut self.open {
                    lines.push(line.to_string());
                }
            }
            LineClass::FenceClose => self.flush(inline),
            LineClass::FenceOpen { tag } => {
                self.flush(inline);
                self.open = OpenBlock::Embedded {
                    command: tag.to_string(),
                    lines: vec![],
                };
            }
            LineClass::Break(kind) => {
                self.flush(inline);
                self.emit(renderer.line_break(kind));
            }
            LineClass::ListItem { marker, text } => {
                let item = ListItem {
                    marker,
                    value: inline.rewrite(text),
                };
                if let OpenBlock::List(items) = &mut self.open {
                    items.push(item);
                } else {
                    self.flush(inline);
                    self.open = OpenBlock::List(vec![item]);
                }
            }
            LineClass::KeyValue { key, value } => {
                let entry = KeyValue {
                    key: inline.rewrite(key),
                    value: inline.rewrite(value),
                };
                if let OpenBlock::KeyValue(entries) = &mut self.open {
                    entries.push(entry);
                } else {
                    self.flush(inline);
                    self.open = OpenBlock::KeyValue(vec![entry]);
                }
            }
            LineClass::Paragraph { tag, text } => {
                let text = inline.rewrite(text);
                match &mut self.open {
                    OpenBlock::Paragraph { tag: open, lines } if *open == tag => lines.push(text),
                    _ => {
                        self.flush(inline);
                        self.open = OpenBlock::Paragraph {
                            tag,
                            lines: vec![text],
                        };
                    }
                }
            }
            LineClass::Title {
                marker,
                text,
                underlined,
            } => {
                self.flush(inline);
                self.skip = underlined;
                self.emit(renderer.title(marker, &inline.rewrite(text)));
            }
            LineClass::Plain => {
                self.flush(inline);
                self.emit(renderer.line(&inline.rewrite(line)));
            }
        }
    }

    /// Hands the open block to its renderer callback and closes it.
    pub fn flush<R: Renderer + ?Sized>(&mut self, inline: &InlineRewriter<'_, R>) {
        let open = std::mem::replace(&mut self.open, OpenBlock::None);
        let renderer = inline.renderer();
        let fragment = match &open {
            OpenBlock::None => return,
            OpenBlock::Paragraph { tag, lines } => renderer.paragraph(*tag, lines),
            OpenBlock::Embedded { command, lines } => renderer.embedded(command, lines),
            OpenBlock::List(items) => renderer.list(items),
            OpenBlock::KeyValue(entries) => renderer.key_value(entries),
        };
        log::debug!("flushed {:?} block", open.status());
        self.emit(fragment);
    }

    /// Flushes the open block and returns the accumulated output.
    pub fn finish<R: Renderer + ?Sized>(mut self, inline: &InlineRewriter<'_, R>) -> String {
        // EOF flush, including an unterminated embedded block
        self.flush(inline);
        self.output
    }

    fn emit(&mut self, fragment: Option<String>) {
        if let Some(fragment) = fragment {
            self.output.push_str(&fragment);
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        parsing::blocks::{MarkdownLineClassifier, kinds::Fence},
        render::HtmlRenderer,
    };

    fn run(lines: &[&str]) -> (BlockBuilder, String) {
        let renderer = HtmlRenderer;
        let inline = InlineRewriter::new(&renderer);
        let classifier = MarkdownLineClassifier::new(Fence::DEFAULT);
        let mut builder = BlockBuilder::new();
        for (i, line) in lines.iter().enumerate() {
            if builder.take_skip() {
                continue;
            }
            let in_embedded = builder.status() == BlockStatus::Embedded;
            let class = classifier.classify(line, lines.get(i + 1).copied(), in_embedded);
            builder.push(class, line, &inline);
        }
        let state = builder.clone();
        (state, builder.finish(&inline))
    }

    #[test]
    fn list_stays_open_until_finish() {
        let (state, out) = run(&["- a", "- b"]);
        assert_eq!(state.status(), BlockStatus::List);
        assert_eq!(state.output(), "");
        assert_eq!(out, "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn embedded_command_is_recorded() {
        let (state, _) = run(&["=== js", "let a;"]);
        assert_eq!(state.status(), BlockStatus::Embedded);
        assert_eq!(state.command(), "js");
    }

    #[test]
    fn paragraph_command_is_its_marker() {
        let (state, _) = run(&["// note"]);
        assert_eq!(state.command(), "//");
    }

    #[test]
    fn break_closes_block() {
        let (state, out) = run(&["> a", ""]);
        assert_eq!(state.status(), BlockStatus::Empty);
        assert_eq!(state.command(), "");
        assert_eq!(out, r#"<p class="quote">a</p><br />"#);
    }

    #[test]
    fn fence_close_returns_to_empty() {
        let (state, out) = run(&["=== js", "x", "==="]);
        assert_eq!(state.status(), BlockStatus::Empty);
        assert_eq!(out, r#"<pre data-command="js">x</pre>"#);
    }

    #[test]
    fn title_closes_open_block() {
        let (state, out) = run(&["- a", "# T", "> q"]);
        assert_eq!(state.status(), BlockStatus::Paragraph);
        assert_eq!(
            out,
            r#"<ul><li>a</li></ul><h1>T</h1><p class="quote">q</p>"#
        );
    }

    #[test]
    fn setext_underline_is_skipped() {
        let (_, out) = run(&["Title", "=====", "after"]);
        assert_eq!(out, r#"<h1>Title</h1><p class="line">after</p>"#);
    }
}

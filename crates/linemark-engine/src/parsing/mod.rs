pub mod blocks;
pub mod inline;
pub mod span;

use serde::{Deserialize, Serialize};

use crate::render::{HtmlRenderer, Renderer};
use blocks::{BlockBuilder, BlockStatus, MarkdownLineClassifier, kinds::Fence};
use inline::InlineRewriter;

/// Per-instance parser settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Marker that opens and closes an embedded block.
    pub fence: String,
    /// Run the `[...]`/`{...}` keyword pass on every inline fragment.
    pub keywords: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fence: Fence::DEFAULT.to_string(),
            keywords: false,
        }
    }
}

/// Line-oriented markup parser driving a [`Renderer`].
///
/// Loading needs `&mut self`, so one instance handles one document at a
/// time.
#[derive(Debug, Clone, Default)]
pub struct Markdown<R: Renderer = HtmlRenderer> {
    renderer: R,
    options: Options,
    id: Option<String>,
}

impl Markdown {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Renderer> Markdown<R> {
    pub fn with_renderer(renderer: R) -> Self {
        Self::with_options(renderer, Options::default())
    }

    pub fn with_options(renderer: R, options: Options) -> Self {
        Self {
            renderer,
            options,
            id: None,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Overrides the embedded block fence for this instance.
    ///
    /// An empty fence is not rejected here: any line starting with a space
    /// then opens an embedded block, and any blank line closes it.
    pub fn set_fence(&mut self, fence: impl Into<String>) {
        self.options.fence = fence.into();
    }

    /// Identifier passed to the last [`load_with_id`](Self::load_with_id).
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Renders a whole document.
    pub fn load(&mut self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let inline = self.rewriter();
        let classifier = MarkdownLineClassifier::new(&self.options.fence);
        let mut builder = BlockBuilder::new();
        let lines: Vec<&str> = text.split('\n').collect();

        for (i, line) in lines.iter().enumerate() {
            if builder.take_skip() {
                log::trace!("line {i}: consumed by title underline");
                continue;
            }
            let in_embedded = builder.status() == BlockStatus::Embedded;
            let class = classifier.classify(line, lines.get(i + 1).copied(), in_embedded);
            builder.push(class, line, &inline);
        }

        let output = builder.finish(&inline);
        log::debug!("rendered {} lines into {} bytes", lines.len(), output.len());
        output
    }

    /// Same as [`load`](Self::load), remembering `id` for the caller. The
    /// identifier never affects the output.
    pub fn load_with_id(&mut self, text: &str, id: impl Into<String>) -> String {
        self.id = Some(id.into());
        self.load(text)
    }

    /// Rewrites the inline markup of one fragment.
    pub fn inline(&self, text: &str) -> String {
        self.rewriter().rewrite(text)
    }

    /// Runs only the keyword pass over `text`.
    pub fn keywords(&self, text: &str) -> String {
        self.rewriter().keywords(text)
    }

    fn rewriter(&self) -> InlineRewriter<'_, R> {
        InlineRewriter::new(&self.renderer).with_keywords(self.options.keywords)
    }
}

/// Renders `text` to HTML with default options.
pub fn render(text: &str) -> String {
    Markdown::new().load(text)
}

use crate::{parsing::span::Span, render::Renderer};

use super::{
    kinds::{FormatKind, Image, KeywordKind, Link},
    rewrite::{Hit, Rewrite},
};

/// Runs the inline passes for one fragment at a time, asking `renderer` for
/// every replacement.
///
/// A renderer that declines a construct (returns `None`) leaves its source
/// text in place; the region still counts as consumed for later passes.
pub struct InlineRewriter<'r, R: Renderer + ?Sized> {
    renderer: &'r R,
    keywords: bool,
}

impl<'r, R: Renderer + ?Sized> InlineRewriter<'r, R> {
    pub fn new(renderer: &'r R) -> Self {
        Self {
            renderer,
            keywords: false,
        }
    }

    /// Also run the keyword pass as the last pass of [`rewrite`](Self::rewrite).
    pub fn with_keywords(mut self, keywords: bool) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn renderer(&self) -> &'r R {
        self.renderer
    }

    /// Rewrites all inline markup in `text`.
    pub fn rewrite(&self, text: &str) -> String {
        let mut rw = Rewrite::new(text);
        self.angle_links(&mut rw);
        self.images(&mut rw);
        self.links(&mut rw);
        self.emphasis(&mut rw);
        self.autolinks(&mut rw);
        if self.keywords {
            self.keyword_pass(&mut rw);
        }
        rw.finish()
    }

    /// Rewrites only `[...]` and `{...}` spans in `text`.
    pub fn keywords(&self, text: &str) -> String {
        let mut rw = Rewrite::new(text);
        self.keyword_pass(&mut rw);
        rw.finish()
    }

    /// Applies emphasis directly, without a substitution table. Used for
    /// link labels, which are finished before the link itself.
    pub fn emphasize(&self, text: &str) -> String {
        FormatKind::regex()
            .replace_all(text, |caps: &regex::Captures<'_>| {
                let whole = caps[0].to_string();
                let Some((kind, group)) = FormatKind::of(caps) else {
                    return whole;
                };
                self.renderer
                    .format(kind, &caps[group])
                    .unwrap_or(whole)
            })
            .into_owned()
    }

    fn link(&self, text: &str, url: &str) -> Option<String> {
        self.renderer.link(text, &Link::with_scheme(url))
    }

    fn angle_links(&self, rw: &mut Rewrite<'_>) {
        rw.apply(Link::angle(), |hit| {
            let url = hit.group_text(1)?;
            let out = self.link(&url, &url).unwrap_or_else(|| hit.text());
            Some((hit.span(), out))
        });
    }

    fn images(&self, rw: &mut Rewrite<'_>) {
        rw.apply(Image::linked(), |hit| {
            let image = Image::new(
                hit.group_text(1)?,
                &hit.group_text(2)?,
                hit.group_text(3),
            );
            Some(self.image(hit, &image))
        });
        rw.apply(Image::plain(), |hit| {
            let image = Image::new(
                hit.group_text(1)?,
                &hit.group_text(2)?,
                hit.group_text(3),
            );
            Some(self.image(hit, &image))
        });
    }

    fn image(&self, hit: &Hit<'_>, image: &Image) -> (Span, String) {
        let out = self.renderer.image(image).unwrap_or_else(|| hit.text());
        (hit.span(), out)
    }

    fn links(&self, rw: &mut Rewrite<'_>) {
        rw.apply(Link::inline(), |hit| self.labelled_link(hit));
        rw.apply(Link::reference(), |hit| self.labelled_link(hit));
    }

    /// `[label](url)` and `[label]: url`. A `!` right before the bracket
    /// marks image syntax that the image pass did not accept.
    fn labelled_link(&self, hit: &Hit<'_>) -> Option<(Span, String)> {
        if hit.preceded_by('!') {
            return None;
        }
        let label = hit.group_text(1)?;
        let raw = hit.group_text(2)?;
        let (url, trailing) = Link::split_trailing(&raw);
        let out = match self.link(&self.emphasize(label.trim()), url) {
            Some(anchor) => format!("{anchor}{trailing}"),
            None => hit.text(),
        };
        Some((hit.span(), out))
    }

    fn emphasis(&self, rw: &mut Rewrite<'_>) {
        rw.apply(FormatKind::regex(), |hit| {
            let (kind, group) = FormatKind::of(hit.captures())?;
            let inner = hit.group_text(group)?;
            let out = self
                .renderer
                .format(kind, &inner)
                .unwrap_or_else(|| hit.text());
            Some((hit.span(), out))
        });
    }

    fn autolinks(&self, rw: &mut Rewrite<'_>) {
        rw.apply(Link::scheme(), |hit| {
            let url = hit.text();
            let out = self.link(&url, &url).unwrap_or(url);
            Some((hit.span(), out))
        });
        rw.apply(Link::www(), |hit| {
            let span = hit.group(1)?;
            let url = hit.group_text(1)?;
            let out = self.link(&url, &url).unwrap_or(url);
            Some((span, out))
        });
    }

    fn keyword_pass(&self, rw: &mut Rewrite<'_>) {
        rw.apply(KeywordKind::regex(), |hit| {
            let (kind, inner) = match hit.group_text(1) {
                Some(inner) => (KeywordKind::Bracket, inner),
                None => (KeywordKind::Brace, hit.group_text(2)?),
            };
            let out = self
                .renderer
                .keyword(kind, &inner)
                .unwrap_or_else(|| hit.text());
            Some((hit.span(), out))
        });
    }
}

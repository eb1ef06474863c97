use regex::{Captures, Regex};

use crate::parsing::span::Span;

/// Stands in for an already-substituted region in the text a pass matches
/// against.
///
/// Positions are mapped back through [`Masked`] marks rather than by
/// searching for this character, so a document that itself contains it is
/// still rewritten correctly.
pub const PLACEHOLDER: char = '\u{FFFC}';

/// A region of the source fragment and the text that replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub span: Span,
    pub replacement: String,
}

#[derive(Debug, Clone)]
enum Piece {
    Source(Span),
    Replaced(Substitution),
}

#[derive(Debug, Clone, Copy)]
struct Mark {
    masked: Span,
    source: Span,
    replaced: bool,
}

/// The view of a fragment a single pass matches against: untouched source
/// text, with every substituted region collapsed to one [`PLACEHOLDER`].
#[derive(Debug)]
pub struct Masked {
    text: String,
    marks: Vec<Mark>,
    source_len: usize,
}

impl Masked {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Maps a byte offset in the masked text to the source fragment.
    fn to_source(&self, pos: usize) -> usize {
        for m in &self.marks {
            if pos >= m.masked.start && pos < m.masked.end {
                return if m.replaced {
                    m.source.start
                } else {
                    m.source.start + (pos - m.masked.start)
                };
            }
        }
        self.source_len
    }

    fn to_source_span(&self, start: usize, end: usize) -> Span {
        Span::new(self.to_source(start), self.to_source(end))
    }
}

/// Substitution table for the inline processing of one fragment.
///
/// The fragment is an ordered, gap-free sequence of untouched source spans
/// and [`Substitution`]s. Passes only ever see the masked view, so text
/// produced by one pass can never be matched by a later one, and
/// [`Rewrite::finish`] applies everything in a single left-to-right walk.
#[derive(Debug, Clone)]
pub struct Rewrite<'a> {
    source: &'a str,
    pieces: Vec<Piece>,
}

impl<'a> Rewrite<'a> {
    pub fn new(source: &'a str) -> Self {
        let pieces = if source.is_empty() {
            vec![]
        } else {
            vec![Piece::Source(Span::new(0, source.len()))]
        };
        Self { source, pieces }
    }

    /// Builds the text the next pass matches against.
    pub fn masked(&self) -> Masked {
        let mut text = String::with_capacity(self.source.len());
        let mut marks = Vec::with_capacity(self.pieces.len());
        for piece in &self.pieces {
            let start = text.len();
            let (source, replaced) = match piece {
                Piece::Source(sp) => {
                    text.push_str(sp.slice(self.source));
                    (*sp, false)
                }
                Piece::Replaced(sub) => {
                    text.push(PLACEHOLDER);
                    (sub.span, true)
                }
            };
            marks.push(Mark {
                masked: Span::new(start, text.len()),
                source,
                replaced,
            });
        }
        Masked {
            text,
            marks,
            source_len: self.source.len(),
        }
    }

    /// Returns the current text of `span`: source bytes, with any
    /// substitution inside it already applied.
    pub fn resolve(&self, span: Span) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Source(sp) => {
                    let start = sp.start.max(span.start);
                    let end = sp.end.min(span.end);
                    if start < end {
                        out.push_str(&self.source[start..end]);
                    }
                }
                Piece::Replaced(sub) => {
                    if span.contains(sub.span) {
                        out.push_str(&sub.replacement);
                    }
                }
            }
        }
        out
    }

    /// Replaces `span` with `replacement`.
    ///
    /// Substitutions inside `span` are absorbed: their output must already
    /// be part of `replacement`. `span` may not partially overlap an
    /// existing substitution, which holds for every span derived from a
    /// match against the masked text.
    pub fn substitute(&mut self, span: Span, replacement: String) {
        let mut out = Vec::with_capacity(self.pieces.len() + 2);
        let mut new = Some(Piece::Replaced(Substitution { span, replacement }));

        for piece in self.pieces.drain(..) {
            let sp = match &piece {
                Piece::Source(sp) => *sp,
                Piece::Replaced(sub) => sub.span,
            };
            if sp.end <= span.start {
                out.push(piece);
            } else if sp.start >= span.end {
                if let Some(n) = new.take() {
                    out.push(n);
                }
                out.push(piece);
            } else if let Piece::Source(sp) = piece {
                if sp.start < span.start {
                    out.push(Piece::Source(Span::new(sp.start, span.start)));
                }
                if let Some(n) = new.take() {
                    out.push(n);
                }
                if span.end < sp.end {
                    out.push(Piece::Source(Span::new(span.end, sp.end)));
                }
            }
        }
        if let Some(n) = new.take() {
            out.push(n);
        }
        self.pieces = out;
    }

    /// Runs one pass of `re` over the masked text.
    ///
    /// `replace` sees every match and returns the span to substitute and its
    /// replacement, or `None` to leave the match alone. Matches within a
    /// pass never overlap, so all edits are collected first and applied
    /// afterwards.
    pub fn apply<F>(&mut self, re: &Regex, mut replace: F)
    where
        F: FnMut(&Hit<'_>) -> Option<(Span, String)>,
    {
        let masked = self.masked();
        let this = &*self;
        let edits: Vec<(Span, String)> = re
            .captures_iter(masked.text())
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let hit = Hit {
                    rewrite: this,
                    masked: &masked,
                    span: masked.to_source_span(whole.start(), whole.end()),
                    masked_start: whole.start(),
                    caps,
                };
                replace(&hit)
            })
            .collect();

        for (span, replacement) in edits {
            self.substitute(span, replacement);
        }
    }

    /// The substitutions recorded so far, in source order.
    pub fn substitutions(&self) -> impl Iterator<Item = &Substitution> {
        self.pieces.iter().filter_map(|p| match p {
            Piece::Replaced(sub) => Some(sub),
            Piece::Source(_) => None,
        })
    }

    /// Applies every substitution and returns the final text.
    pub fn finish(self) -> String {
        let mut out = String::with_capacity(self.source.len());
        for piece in &self.pieces {
            match piece {
                Piece::Source(sp) => out.push_str(sp.slice(self.source)),
                Piece::Replaced(sub) => out.push_str(&sub.replacement),
            }
        }
        out
    }
}

/// One regex match during a pass, with positions mapped to the source.
pub struct Hit<'a> {
    rewrite: &'a Rewrite<'a>,
    masked: &'a Masked,
    span: Span,
    masked_start: usize,
    caps: Captures<'a>,
}

impl Hit<'_> {
    /// Source span of the whole match.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Source span of capture group `i`, if it participated.
    pub fn group(&self, i: usize) -> Option<Span> {
        let m = self.caps.get(i)?;
        Some(self.masked.to_source_span(m.start(), m.end()))
    }

    /// Raw captures against the masked text.
    pub fn captures(&self) -> &Captures<'_> {
        &self.caps
    }

    /// Current text of the whole match.
    pub fn text(&self) -> String {
        self.rewrite.resolve(self.span)
    }

    /// Current text of capture group `i`.
    pub fn group_text(&self, i: usize) -> Option<String> {
        self.group(i).map(|sp| self.rewrite.resolve(sp))
    }

    /// True when the character right before the match is `c`.
    pub fn preceded_by(&self, c: char) -> bool {
        self.masked.text()[..self.masked_start].chars().next_back() == Some(c)
    }
}

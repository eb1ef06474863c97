//! Line-oriented lightweight markup engine.
//!
//! A document is classified line by line into blocks (titles, tagged
//! paragraphs, lists, key-value tables, embedded verbatim regions), the
//! text of every block goes through the inline rewriter, and a
//! [`Renderer`] turns the result into output fragments.

pub mod parsing;
pub mod render;

pub use parsing::{Markdown, Options, render};
pub use render::{HtmlRenderer, PlainTextRenderer, Renderer};

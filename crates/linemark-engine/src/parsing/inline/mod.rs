//! # Inline Rewriting
//!
//! Turns one fragment of text (a line, a list item, a key or value) into
//! its final output by running ordered substitution passes.
//!
//! ## Architecture
//!
//! Each pass matches against a masked view of the fragment in which every
//! region rewritten by an earlier pass is a single opaque placeholder. A
//! match becomes a [`Substitution`](rewrite::Substitution) over source byte
//! spans; substitutions are applied once, after the last pass. A URL already
//! wrapped by the link pass is therefore never re-matched by the autolink
//! pass, and no placeholder text can reach the output.
//!
//! ## Pass Order
//!
//! 1. `<url>` links
//! 2. images, then `[text](url)` / `[text]: url` links
//! 3. emphasis (`*`, `**`, `_`, `__`, `___`)
//! 4. bare `http(s)://`, `ftp://`, `file://` and `www.` links
//! 5. `[keyword]` / `{keyword}`, only when enabled
//!
//! ## Modules
//!
//! - **`rewrite`**: `Rewrite` substitution table and the masked view
//! - **`kinds`**: patterns and value types per construct
//! - **`rewriter`**: `InlineRewriter`, the passes themselves

pub mod kinds;
pub mod rewrite;
pub mod rewriter;

pub use kinds::{FormatKind, Image, KeywordKind, Link};
pub use rewrite::{Rewrite, Substitution};
pub use rewriter::InlineRewriter;

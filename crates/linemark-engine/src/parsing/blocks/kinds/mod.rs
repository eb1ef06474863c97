//! # Block Kinds
//!
//! One type per line-level construct. Each owns its delimiters; the
//! classifier calls these and never hardcodes `===`, `- ` or `#`.

pub mod fence;
pub mod key_value;
pub mod list;
pub mod paragraph;
pub mod rule;
pub mod title;

pub use fence::Fence;
pub use key_value::KeyValueLine;
pub use list::ListMarker;
pub use paragraph::ParagraphLine;
pub use rule::Break;
pub use title::Title;

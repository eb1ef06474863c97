//! # Inline Kinds
//!
//! Patterns and value types for each inline construct. Every pattern that
//! captures a URL or path excludes [`PLACEHOLDER`](super::rewrite::PLACEHOLDER),
//! so a substituted region can end up inside emphasis but never inside a URL.

pub mod format;
pub mod image;
pub mod keyword;
pub mod link;

pub use format::FormatKind;
pub use image::Image;
pub use keyword::KeywordKind;
pub use link::Link;

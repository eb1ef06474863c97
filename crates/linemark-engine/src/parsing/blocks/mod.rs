//! # Block Parsing
//!
//! Line-at-a-time block parsing with a single open block.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    by running the detectors in fixed priority order. The first detector
//!    that matches claims the line.
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` holds the open
//!    block, buffers its items, and flushes it to the renderer when a line
//!    of another kind arrives.
//!
//! ## Modules
//!
//! - **`types`**: `OpenBlock`, `BlockStatus`, `ListItem`, `KeyValue`, `BreakKind`, `ParagraphTag`
//! - **`kinds`**: construct types with owned delimiters (Fence, Break, ListMarker, ...)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine and output accumulator
//!
//! ## Key Invariants
//!
//! - At most one block is open; buffered items exist only inside it
//! - Embedded blocks are raw zones: no detection or inline rewriting inside
//! - Titles, breaks and plain lines are emitted immediately, never buffered

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{BlockStatus, BreakKind, KeyValue, ListItem, OpenBlock, ParagraphTag};

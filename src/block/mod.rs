//! Block-level handling.
//!
//! The line dispatcher consumes one line at a time:
//! - Blank lines
//! - Blockquote markers
//! - List items
//! - Headlines, horizontal rules and fenced code blocks
//!
//! Everything else on the line is handed to the inline handlers as it is
//! scanned.

mod leaf;
mod line;
mod list;

pub use list::{ItemPlacement, ListContext, ListStack};

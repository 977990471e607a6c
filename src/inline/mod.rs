//! Inline handlers.
//!
//! Each handler is invoked by the line dispatcher with the cursor on its
//! marker byte. Handlers open a paragraph (through `Parser::begin_text`)
//! right before writing markup; only a complete code span closes it. Content
//! between matched markers is copied verbatim and never re-scanned.
//!
//! A construct that cannot be completed on the current line falls back to
//! literal text: the emit mark stays on the marker and the cursor moves
//! just past it, so the rest of the line is still scanned.

mod code_span;
mod emphasis;
mod links;
mod strikethrough;

pub use emphasis::EmphasisLevel;

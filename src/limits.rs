//! Syntax constants and caps.
//!
//! Run lengths that select a construct are exact; levels are clamped.

/// Headline levels beyond this are clamped to it.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Emphasis levels beyond this (`****a****`) are clamped to bold-italic.
pub const MAX_EMPHASIS_LEVEL: usize = 3;

/// Indentation width of a tab.
pub const TAB_WIDTH: usize = 4;

/// Backtick run that opens and closes a fenced code block.
pub const CODE_FENCE_RUN: usize = 3;

/// Tilde run that opens and closes strikethrough.
pub const STRIKETHROUGH_RUN: usize = 2;

/// Dash run that forms a horizontal rule.
pub const RULE_RUN: usize = 3;

/// Maximum digits in ordered list marker (prevents runaway lookahead)
pub const MAX_LIST_MARKER_DIGITS: usize = 9;

//! Recoverable warnings.
//!
//! Conversion never fails. When a construct cannot be completed the
//! converter falls back to literal text and records what happened here.

use thiserror::Error;

/// A local degradation, with the byte offset of the offending marker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("unmatched `*` run at byte {offset}, printed literally")]
    UnmatchedEmphasis { offset: usize },

    #[error("unterminated `~~` at byte {offset}, printed literally")]
    UnterminatedStrikethrough { offset: usize },

    #[error("unterminated code span at byte {offset}, printed literally")]
    UnterminatedCodeSpan { offset: usize },

    #[error("code block at byte {offset} has no closing fence, closed at end of input")]
    UnterminatedCodeBlock { offset: usize },

    #[error("malformed link at byte {offset}, printed literally")]
    MalformedLink { offset: usize },

    #[error("malformed image at byte {offset}, printed literally")]
    MalformedImage { offset: usize },

    #[error("`#` run at byte {offset} is not followed by a space, not a headline")]
    HeadlineWithoutSpace { offset: usize },
}

impl Diagnostic {
    /// Byte offset of the marker that triggered the diagnostic.
    pub fn offset(&self) -> usize {
        match *self {
            Diagnostic::UnmatchedEmphasis { offset }
            | Diagnostic::UnterminatedStrikethrough { offset }
            | Diagnostic::UnterminatedCodeSpan { offset }
            | Diagnostic::UnterminatedCodeBlock { offset }
            | Diagnostic::MalformedLink { offset }
            | Diagnostic::MalformedImage { offset }
            | Diagnostic::HeadlineWithoutSpace { offset } => offset,
        }
    }
}

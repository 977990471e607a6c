//! Emphasis (`*a*`, `**a**`, `***a***`).
//!
//! The left run is matched against the next `*` run on the same line.
//! Unbalanced leftovers are printed as literal asterisks outside the span.

use crate::diagnostic::Diagnostic;
use crate::limits::MAX_EMPHASIS_LEVEL;
use crate::parser::Parser;
use crate::render::HtmlWriter;
use crate::tags::TagVocabulary;

/// How strongly a matched span is emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisLevel {
    Italic,
    Bold,
    /// Bold nested inside italic.
    BoldItalic,
}

impl EmphasisLevel {
    /// Level for the number of matched asterisks, clamped to [`MAX_EMPHASIS_LEVEL`].
    pub fn from_matched(count: usize) -> Option<Self> {
        match count.min(MAX_EMPHASIS_LEVEL) {
            0 => None,
            1 => Some(Self::Italic),
            2 => Some(Self::Bold),
            _ => Some(Self::BoldItalic),
        }
    }

    fn open(self, out: &mut HtmlWriter, tags: &TagVocabulary) {
        match self {
            Self::Italic => out.open(&tags.italic),
            Self::Bold => out.open(&tags.bold),
            Self::BoldItalic => {
                out.open(&tags.italic);
                out.open(&tags.bold);
            }
        }
    }

    fn close(self, out: &mut HtmlWriter, tags: &TagVocabulary) {
        match self {
            Self::Italic => out.close(&tags.italic),
            Self::Bold => out.close(&tags.bold),
            Self::BoldItalic => {
                out.close(&tags.bold);
                out.close(&tags.italic);
            }
        }
    }
}

impl Parser<'_> {
    /// Assumes the cursor is on the first `*` of a run.
    pub(crate) fn parse_asterisks(&mut self) {
        self.flush_as_paragraph(false);

        let start = self.cursor.offset();
        let left = self.cursor.count_run(b'*');
        let content_start = self.cursor.offset();

        let Some(content_end) = self.cursor.find_in_line(b'*') else {
            self.diagnose(Diagnostic::UnmatchedEmphasis { offset: start });
            return;
        };

        self.cursor.set_offset(content_end);
        let right = self.cursor.count_run(b'*');
        let Some(level) = EmphasisLevel::from_matched(left.min(right)) else {
            return;
        };

        self.begin_text();
        if left > right {
            self.out.write_repeated(b'*', left - right);
        }
        level.open(&mut self.out, self.tags);
        self.out.write_bytes(&self.input[content_start..content_end]);
        level.close(&mut self.out, self.tags);
        if right > left {
            self.out.write_repeated(b'*', right - left);
        }

        self.emit_mark = self.cursor.offset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{convert_with_diagnostics, to_html, Options};

    #[test]
    fn test_level_from_matched() {
        assert_eq!(EmphasisLevel::from_matched(0), None);
        assert_eq!(EmphasisLevel::from_matched(1), Some(EmphasisLevel::Italic));
        assert_eq!(EmphasisLevel::from_matched(2), Some(EmphasisLevel::Bold));
        assert_eq!(EmphasisLevel::from_matched(3), Some(EmphasisLevel::BoldItalic));
        assert_eq!(EmphasisLevel::from_matched(7), Some(EmphasisLevel::BoldItalic));
    }

    #[test]
    fn test_italic() {
        assert_eq!(to_html("an *em* word"), "<p>an <em>em</em> word</p>");
    }

    #[test]
    fn test_bold() {
        assert_eq!(to_html("**bold**"), "<p><strong>bold</strong></p>");
    }

    #[test]
    fn test_bold_italic() {
        assert_eq!(
            to_html("***both***"),
            "<p><em><strong>both</strong></em></p>"
        );
    }

    #[test]
    fn test_all_three_levels() {
        assert_eq!(
            to_html("*a* **b** ***c***"),
            "<p><em>a</em> <strong>b</strong> <em><strong>c</strong></em></p>"
        );
    }

    #[test]
    fn test_left_leftover_printed_before() {
        assert_eq!(to_html("**bold*"), "<p>*<em>bold</em></p>");
    }

    #[test]
    fn test_right_leftover_printed_after() {
        assert_eq!(to_html("x *a***"), "<p>x <em>a</em>**</p>");
    }

    #[test]
    fn test_level_clamped_to_three() {
        assert_eq!(
            to_html("****x****"),
            "<p><em><strong>x</strong></em></p>"
        );
    }

    #[test]
    fn test_inner_text_not_rescanned() {
        assert_eq!(
            to_html("*a `b` [c](d)*"),
            "<p><em>a `b` [c](d)</em></p>"
        );
    }

    #[test]
    fn test_unmatched_is_literal_and_rest_scanned() {
        let conversion = convert_with_diagnostics("a * b **c**", &Options::default());
        assert_eq!(conversion.html, "<p>a <em> b </em>*c**</p>");
        assert_eq!(
            conversion.diagnostics,
            vec![Diagnostic::UnmatchedEmphasis { offset: 9 }]
        );

        let conversion = convert_with_diagnostics("a *b", &Options::default());
        assert_eq!(conversion.html, "<p>a *b</p>");
        assert_eq!(
            conversion.diagnostics,
            vec![Diagnostic::UnmatchedEmphasis { offset: 2 }]
        );
    }

    #[test]
    fn test_does_not_cross_lines() {
        assert_eq!(to_html("*a\nb*"), "<p>*a\nb*</p>");
    }
}

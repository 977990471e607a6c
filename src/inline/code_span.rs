//! Code spans and the backtick dispatch.
//!
//! A run of exactly three backticks anywhere on a line starts a fenced code
//! block; any other run opens a code span that ends at the next backtick
//! run on the same line. Both close the open paragraph first, so a code
//! span sits between paragraphs rather than inside one.

use crate::diagnostic::Diagnostic;
use crate::limits::CODE_FENCE_RUN;
use crate::parser::Parser;

impl Parser<'_> {
    /// Assumes the cursor is on the first `` ` `` of a run.
    pub(crate) fn parse_backticks(&mut self) {
        let start = self.cursor.offset();
        let run = self.cursor.count_run(b'`');

        if run == CODE_FENCE_RUN {
            self.cursor.set_offset(start);
            self.flush_as_paragraph(true);
            self.cursor.advance(run);
            self.parse_code_block(start);
            return;
        }

        let content_start = self.cursor.offset();
        let Some(content_end) = self.cursor.find_in_line(b'`') else {
            // Literal: the paragraph stays open.
            self.diagnose(Diagnostic::UnterminatedCodeSpan { offset: start });
            return;
        };

        self.cursor.set_offset(start);
        self.flush_as_paragraph(true);
        self.cursor.set_offset(content_end);
        self.cursor.count_run(b'`');

        self.out
            .wrap(&self.tags.code, &self.input[content_start..content_end]);
        self.emit_mark = self.cursor.offset();
    }
}

#[cfg(test)]
mod tests {
    use crate::{convert_with_diagnostics, to_html, Diagnostic, Options};

    #[test]
    fn test_code_span() {
        assert_eq!(
            to_html("run `cargo test` now"),
            "<p>run </p><code>cargo test</code><p> now</p>"
        );
    }

    #[test]
    fn test_code_span_closes_paragraph() {
        assert_eq!(
            to_html("a `b` c\nd"),
            "<p>a </p><code>b</code><p> c\nd</p>"
        );
    }

    #[test]
    fn test_code_span_on_continuation_line() {
        assert_eq!(to_html("a\n`b`"), "<p>a</p><code>b</code>");
    }

    #[test]
    fn test_code_span_alone_has_no_paragraph() {
        assert_eq!(
            to_html("`*x* <b> [l](u)`"),
            "<code>*x* <b> [l](u)</code>"
        );
    }

    #[test]
    fn test_code_span_in_list_item() {
        assert_eq!(
            to_html("- see `x` here"),
            "<ul><li>see <code>x</code> here</li></ul>"
        );
    }

    #[test]
    fn test_double_backtick_span() {
        assert_eq!(to_html("``a``"), "<code>a</code>");
    }

    #[test]
    fn test_empty_code_span() {
        assert_eq!(to_html("x ``"), "<p>x ``</p>");
    }

    #[test]
    fn test_unterminated_code_span_is_literal() {
        let conversion = convert_with_diagnostics("a `b", &Options::default());
        assert_eq!(conversion.html, "<p>a `b</p>");
        assert_eq!(
            conversion.diagnostics,
            vec![Diagnostic::UnterminatedCodeSpan { offset: 2 }]
        );
    }

    #[test]
    fn test_fence_mid_line_starts_code_block() {
        assert_eq!(
            to_html("text ```\nx\n```"),
            "<p>text </p><pre><code>x\n</code></pre>"
        );
    }
}

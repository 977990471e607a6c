//! Line dispatcher.

use crate::parser::Parser;

impl Parser<'_> {
    /// Consume one line. Assumes the cursor is on the first byte after a `\n`.
    pub(crate) fn parse_line(&mut self) {
        if self.cursor.at(b'\n') {
            self.close_paragraph();
            self.cursor.bump();
            self.emit_mark = self.cursor.offset();
            return;
        }

        self.line_indentation = self.cursor.measure_indentation();

        let depth = self.cursor.count_run(b'>');
        if depth == 0 && self.cursor.at_line_end() {
            // Whitespace only: blank.
            self.close_paragraph();
            self.cursor.bump();
            self.emit_mark = self.cursor.offset();
            return;
        }

        self.set_blockquote_depth(depth);
        if depth > 0 {
            self.line_indentation = self.cursor.measure_indentation();
            if self.cursor.at_line_end() {
                // A bare `>` separates paragraphs inside the quote.
                self.close_paragraph();
            }
        }

        if !self.lists.is_empty() && !self.at_list_marker() {
            self.close_all_lists();
        }

        self.emit_mark = self.cursor.offset();
        self.scan_line();
        self.finish_line();
    }

    /// Dispatch on each byte of the line until the terminator.
    fn scan_line(&mut self) {
        let mut at_line_start = true;

        while let Some(b) = self.cursor.peek() {
            match b {
                b'\n' => break,
                b'\\' => self.parse_escape(),
                b'#' if at_line_start => self.parse_headline(),
                b'+' | b'*' if at_line_start && self.at_list_marker() => {
                    self.parse_list_item(false, 1)
                }
                b'*' => self.parse_asterisks(),
                b'`' => self.parse_backticks(),
                b'~' => self.parse_tildes(),
                b'-' if at_line_start => self.parse_dashes(),
                b'0'..=b'9' if at_line_start && self.at_list_marker() => {
                    self.parse_ordered_item()
                }
                b'[' => self.parse_named_link(),
                b'!' => self.parse_image(),
                b'<' if self.autolinks => self.parse_simple_link(),
                _ => self.cursor.bump(),
            }
            at_line_start = false;
        }
    }

    /// Flush the rest of the line and step over its terminator.
    fn finish_line(&mut self) {
        self.flush_as_paragraph(false);
        if self.cursor.eat(b'\n') && self.paragraph_open {
            self.pending_break = true;
        }
        self.emit_mark = self.cursor.offset();
    }

    /// `\x`: drop the backslash, copy the next character without interpreting it.
    fn parse_escape(&mut self) {
        self.flush_as_paragraph(false);
        self.cursor.bump();
        self.emit_mark = self.cursor.offset();
        if !self.cursor.at_line_end() {
            self.cursor.skip_char();
        }
    }

    /// Open or close blockquotes until the depth matches.
    ///
    /// A depth change is a structural break: the open paragraph and lists
    /// are closed first so the output stays well nested.
    pub(crate) fn set_blockquote_depth(&mut self, depth: usize) {
        if depth == self.blockquote_depth {
            return;
        }

        self.close_paragraph();
        self.close_all_lists();
        log::trace!(
            "blockquote depth {} -> {depth} at byte {}",
            self.blockquote_depth,
            self.cursor.offset()
        );

        while self.blockquote_depth < depth {
            self.out.open(&self.tags.blockquote);
            self.blockquote_depth += 1;
        }
        while self.blockquote_depth > depth {
            self.out.close(&self.tags.blockquote);
            self.blockquote_depth -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::to_html;

    #[test]
    fn test_blank_line_splits_paragraphs() {
        assert_eq!(to_html("a\n\nb"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_whitespace_only_line_is_blank() {
        assert_eq!(to_html("a\n   \nb"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_consecutive_lines_share_paragraph() {
        assert_eq!(to_html("one\ntwo\n"), "<p>one\ntwo</p>");
    }

    #[test]
    fn test_escape_drops_backslash() {
        assert_eq!(to_html("\\*not em\\*"), "<p>*not em*</p>");
    }

    #[test]
    fn test_escape_at_line_start_blocks_headline() {
        assert_eq!(to_html("\\# not a headline"), "<p># not a headline</p>");
    }

    #[test]
    fn test_escape_multibyte() {
        assert_eq!(to_html("\\é*"), "<p>é*</p>");
    }

    #[test]
    fn test_trailing_backslash_vanishes() {
        assert_eq!(to_html("a\\"), "<p>a</p>");
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(
            to_html("> quoted"),
            "<blockquote>\n<p>quoted</p></blockquote>\n"
        );
    }

    #[test]
    fn test_blockquote_continues_paragraph() {
        assert_eq!(
            to_html("> a\n> b"),
            "<blockquote>\n<p>a\nb</p></blockquote>\n"
        );
    }

    #[test]
    fn test_nested_blockquote() {
        assert_eq!(
            to_html("> a\n>> b\nc"),
            "<blockquote>\n<p>a</p><blockquote>\n<p>b</p></blockquote>\n</blockquote>\n<p>c</p>"
        );
    }

    #[test]
    fn test_bare_marker_separates_paragraphs() {
        assert_eq!(
            to_html("> a\n>\n> b"),
            "<blockquote>\n<p>a</p><p>b</p></blockquote>\n"
        );
    }

    #[test]
    fn test_list_inside_blockquote() {
        assert_eq!(
            to_html("> - a\n> - b"),
            "<blockquote>\n<ul><li>a</li><li>b</li></ul></blockquote>\n"
        );
    }

    #[test]
    fn test_raw_html_passes_through() {
        assert_eq!(to_html("<b>hi</b>"), "<p><b>hi</b></p>");
    }
}

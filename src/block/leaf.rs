//! Headlines, horizontal rules and fenced code blocks.

use memchr::memchr;

use crate::diagnostic::Diagnostic;
use crate::limits::{CODE_FENCE_RUN, MAX_HEADING_LEVEL, RULE_RUN};
use crate::parser::Parser;

impl Parser<'_> {
    /// `# Title`. Assumes the cursor is on the first `#` at line start.
    ///
    /// The open paragraph is closed even when no space follows and the run
    /// turns out to be plain text.
    pub(crate) fn parse_headline(&mut self) {
        self.flush_as_paragraph(true);

        let start = self.cursor.offset();
        let mut scan = self.cursor;
        let run = scan.count_run(b'#');

        if !scan.at(b' ') {
            // Not a headline: the run stays in the pending text.
            self.diagnose(Diagnostic::HeadlineWithoutSpace { offset: start });
            self.cursor = scan;
            return;
        }

        let level = run.min(MAX_HEADING_LEVEL);
        scan.bump();
        let text_start = scan.offset();
        scan.skip_to_line_end();
        self.cursor = scan;

        let tags = self.tags.headline(level);
        self.out.open(tags);
        self.out.write_bytes(&self.input[text_start..self.cursor.offset()]);
        self.out.close(tags);
        self.emit_mark = self.cursor.offset();
    }

    /// `-` at line start: exactly three dashes are a rule, any other run is
    /// the marker of a list item.
    pub(crate) fn parse_dashes(&mut self) {
        let start = self.cursor.offset();
        let run = self.cursor.count_run(b'-');
        self.cursor.set_offset(start);

        if run == RULE_RUN {
            self.flush_as_paragraph(true);
            self.cursor.advance(run);
            self.parse_horizontal_rule();
        } else {
            self.parse_list_item(false, run);
        }
    }

    /// `---`. Assumes the cursor is just past the dash run.
    fn parse_horizontal_rule(&mut self) {
        self.out.write_str(&self.tags.horizontal_rule);
        self.emit_mark = self.cursor.offset();
    }

    /// ```` ```lang ````. Assumes the cursor is just past the opening fence.
    ///
    /// The language token is read and discarded. Content starts on the next
    /// line when the rest of the opening line is blank, and runs verbatim up
    /// to the next run of exactly three backticks. Without one the block is
    /// closed at end of input.
    pub(crate) fn parse_code_block(&mut self, fence_start: usize) {
        self.cursor.skip_whitespace();
        let language_start = self.cursor.offset();
        while !self.cursor.at_whitespace_or_line_end() && !self.cursor.at(b'`') {
            self.cursor.bump();
        }
        let language = self.cursor.range_from(language_start);
        log::trace!(
            "code block at byte {fence_start}, language {:?}",
            String::from_utf8_lossy(language.slice(self.input))
        );

        self.cursor.skip_whitespace();
        self.cursor.eat(b'\n');
        let content_start = self.cursor.offset();

        let (content_end, after_fence) = match self.find_closing_fence() {
            Some(fence) => (fence, fence + CODE_FENCE_RUN),
            None => {
                self.diagnose(Diagnostic::UnterminatedCodeBlock {
                    offset: fence_start,
                });
                (self.input.len(), self.input.len())
            }
        };

        self.out.open(&self.tags.code_block);
        self.out.write_bytes(&self.input[content_start..content_end]);
        self.out.close(&self.tags.code_block);

        self.cursor.set_offset(after_fence);
        self.emit_mark = self.cursor.offset();
    }

    /// Offset of the next run of exactly [`CODE_FENCE_RUN`] backticks.
    fn find_closing_fence(&self) -> Option<usize> {
        let mut scan = self.cursor;
        loop {
            let found = memchr(b'`', scan.remaining_slice())?;
            scan.advance(found);
            let fence = scan.offset();
            if scan.count_run(b'`') == CODE_FENCE_RUN {
                return Some(fence);
            }
        }
    }
}

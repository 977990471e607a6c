//! Strikethrough (`~~text~~`).
//!
//! Only runs of exactly two tildes open or close. Other runs are literal.

use crate::diagnostic::Diagnostic;
use crate::limits::STRIKETHROUGH_RUN;
use crate::parser::Parser;

impl Parser<'_> {
    /// Assumes the cursor is on the first `~` of a run.
    pub(crate) fn parse_tildes(&mut self) {
        let start = self.cursor.offset();
        if self.cursor.count_run(b'~') != STRIKETHROUGH_RUN {
            return;
        }
        let content_start = self.cursor.offset();

        let mut scan = self.cursor;
        let content_end = loop {
            let Some(found) = scan.find_in_line(b'~') else {
                self.diagnose(Diagnostic::UnterminatedStrikethrough { offset: start });
                return;
            };
            scan.set_offset(found);
            if scan.count_run(b'~') == STRIKETHROUGH_RUN {
                break found;
            }
        };

        self.cursor.set_offset(start);
        self.flush_as_paragraph(false);
        self.cursor = scan;

        self.begin_text();
        self.out.wrap(
            &self.tags.strikethrough,
            &self.input[content_start..content_end],
        );
        self.emit_mark = self.cursor.offset();
    }
}

//! Converter state and the single-pass driver.
//!
//! Every handler is an `impl Parser` method (see `block` and `inline`) and
//! works on the same record: the cursor, the emit mark, the paragraph flag,
//! the blockquote depth and the list stack. Handlers must leave the cursor
//! on the next byte to scan and the emit mark at or before the cursor.

use crate::block::ListStack;
use crate::cursor::Cursor;
use crate::diagnostic::Diagnostic;
use crate::render::HtmlWriter;
use crate::tags::TagVocabulary;

/// Shared state of one conversion.
pub(crate) struct Parser<'a> {
    pub(crate) input: &'a [u8],
    pub(crate) cursor: Cursor<'a>,
    /// Start of raw text that has not been written yet.
    pub(crate) emit_mark: usize,
    pub(crate) out: HtmlWriter,
    pub(crate) tags: &'a TagVocabulary,
    /// Recognize `<url>` autolinks.
    pub(crate) autolinks: bool,
    pub(crate) paragraph_open: bool,
    /// A line ended inside the open paragraph; its `\n` is written lazily.
    pub(crate) pending_break: bool,
    pub(crate) blockquote_depth: usize,
    /// Indentation of the current line, after any `>` markers.
    pub(crate) line_indentation: usize,
    pub(crate) lists: ListStack,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(
        input: &'a [u8],
        tags: &'a TagVocabulary,
        autolinks: bool,
        out: HtmlWriter,
    ) -> Self {
        Self {
            input,
            cursor: Cursor::new(input),
            emit_mark: 0,
            out,
            tags,
            autolinks,
            paragraph_open: false,
            pending_break: false,
            blockquote_depth: 0,
            line_indentation: 0,
            lists: ListStack::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Convert the whole input, closing whatever is still open at the end.
    pub(crate) fn run(mut self) -> (HtmlWriter, Vec<Diagnostic>) {
        log::trace!("converting {} bytes", self.input.len());

        while !self.cursor.is_eof() {
            self.parse_line();
        }

        self.close_paragraph();
        self.close_all_lists();
        self.set_blockquote_depth(0);

        (self.out, self.diagnostics)
    }

    /// Raw text between the emit mark and the cursor.
    #[inline]
    fn pending(&self) -> &'a [u8] {
        let end = self.cursor.offset();
        debug_assert!(self.emit_mark <= end);
        &self.input[self.emit_mark.min(end)..end]
    }

    /// Copy pending raw text verbatim and move the emit mark to the cursor.
    pub(crate) fn flush_raw(&mut self) {
        let pending = self.pending();
        self.out.write_bytes(pending);
        self.emit_mark = self.cursor.offset();
    }

    /// Flush pending text inside a paragraph, opening one if needed.
    ///
    /// With nothing to flush only the `close` request is honoured, so an
    /// empty line fragment never produces an empty paragraph.
    pub(crate) fn flush_as_paragraph(&mut self, close: bool) {
        let pending = self.pending();
        if !pending.is_empty() && pending != b"\n" {
            self.begin_text();
            self.flush_raw();
        }

        if close {
            self.close_paragraph();
        }
    }

    /// Prepare the output for inline content.
    ///
    /// Opens a paragraph when none is open and no list item holds the text;
    /// inside an open paragraph writes the deferred line break.
    pub(crate) fn begin_text(&mut self) {
        if self.paragraph_open {
            if std::mem::take(&mut self.pending_break) {
                self.out.newline();
            }
        } else if self.lists.is_empty() {
            self.out.open(&self.tags.paragraph);
            self.paragraph_open = true;
        }
    }

    /// Close the open paragraph, if any. A deferred line break is dropped.
    pub(crate) fn close_paragraph(&mut self) {
        self.pending_break = false;
        if self.paragraph_open {
            self.out.close(&self.tags.paragraph);
            self.paragraph_open = false;
        }
    }

    /// Close every open list, innermost first.
    pub(crate) fn close_all_lists(&mut self) {
        let closed = self.lists.close_all(&mut self.out, self.tags);
        if closed > 0 {
            log::trace!("closed {closed} list(s) at byte {}", self.cursor.offset());
        }
    }

    /// Record a local degradation.
    pub(crate) fn diagnose(&mut self, diagnostic: Diagnostic) {
        log::debug!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }
}

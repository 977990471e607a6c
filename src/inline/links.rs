//! Link and image handling.
//!
//! Handles:
//! - Named links: `[title](url)`
//! - Images: `![alt](file)`
//! - Autolinks: `<https://example.com>` and `<user@example.com>` (opt-in)
//!
//! Titles, urls and alt texts are copied verbatim; nothing is escaped or
//! URL-encoded.

use crate::cursor::Cursor;
use crate::diagnostic::Diagnostic;
use crate::parser::Parser;
use crate::Range;

/// The pieces of `[text](url)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LinkParts {
    text: Range,
    url: Range,
    /// Offset just past the closing `)`.
    end: usize,
}

/// Outcome of scanning from a `[`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkScan {
    Complete(LinkParts),
    /// No `](` on this line; ordinary bracketed text.
    NotALink,
    /// `](` without a closing `)` on this line.
    Unterminated,
}

/// Scan `text](url)` starting just past the `[`, without crossing the line end.
fn scan_link(input: &[u8], text_start: usize) -> LinkScan {
    let mut scan = Cursor::new_at(input, text_start);

    let Some(text_end) = scan.find_in_line(b']') else {
        return LinkScan::NotALink;
    };
    scan.set_offset(text_end + 1);
    if !scan.eat(b'(') {
        return LinkScan::NotALink;
    }

    let url_start = scan.offset();
    let Some(url_end) = scan.find_in_line(b')') else {
        return LinkScan::Unterminated;
    };

    LinkScan::Complete(LinkParts {
        text: Range::new(text_start, text_end),
        url: Range::new(url_start, url_end),
        end: url_end + 1,
    })
}

impl Parser<'_> {
    /// `[title](url)`. Assumes the cursor is on the `[`.
    pub(crate) fn parse_named_link(&mut self) {
        let start = self.cursor.offset();

        let parts = match scan_link(self.input, start + 1) {
            LinkScan::Complete(parts) => parts,
            LinkScan::NotALink => {
                self.cursor.bump();
                return;
            }
            LinkScan::Unterminated => {
                self.diagnose(Diagnostic::MalformedLink { offset: start });
                self.cursor.bump();
                return;
            }
        };

        self.flush_as_paragraph(false);
        self.begin_text();
        self.out.open(&self.tags.link_wrapper);
        self.out
            .anchor(parts.url.slice(self.input), parts.text.slice(self.input));
        self.out.close(&self.tags.link_wrapper);

        self.cursor.set_offset(parts.end);
        self.emit_mark = self.cursor.offset();
    }

    /// `![alt](file)`. Assumes the cursor is on the `!`.
    ///
    /// Whitespace may separate `!` from `[`. A `!` not followed by `[` is
    /// literal.
    pub(crate) fn parse_image(&mut self) {
        let start = self.cursor.offset();
        let mut scan = self.cursor;
        scan.bump();
        scan.skip_whitespace();
        if !scan.at(b'[') {
            self.cursor.bump();
            return;
        }
        let bracket = scan.offset();

        let parts = match scan_link(self.input, bracket + 1) {
            LinkScan::Complete(parts) => parts,
            LinkScan::NotALink | LinkScan::Unterminated => {
                self.diagnose(Diagnostic::MalformedImage { offset: start });
                self.cursor.set_offset(bracket + 1);
                return;
            }
        };

        self.flush_as_paragraph(false);
        self.begin_text();
        self.out.open(&self.tags.image_wrapper);
        self.out
            .image(parts.url.slice(self.input), parts.text.slice(self.input));
        self.out.close(&self.tags.image_wrapper);

        self.cursor.set_offset(parts.end);
        self.emit_mark = self.cursor.offset();
    }

    /// `<url>` or `<user@host>`. Assumes the cursor is on the `<`.
    ///
    /// Anything else in angle brackets (raw HTML) is left alone.
    pub(crate) fn parse_simple_link(&mut self) {
        let start = self.cursor.offset();
        let mut scan = self.cursor;
        scan.bump();

        let Some(close) = scan.find_in_line(b'>') else {
            self.cursor.bump();
            return;
        };
        let target = &self.input[start + 1..close];
        let has_scheme = target.contains(&b':');
        let is_email = !has_scheme && target.contains(&b'@');
        if target.is_empty()
            || target.iter().any(|b| b.is_ascii_whitespace())
            || !(has_scheme || is_email)
        {
            self.cursor.bump();
            return;
        }

        self.flush_as_paragraph(false);
        self.begin_text();
        self.out.open(&self.tags.link_wrapper);
        if is_email {
            self.out.write_str("<a href=\"mailto:");
            self.out.write_bytes(target);
            self.out.write_str("\">");
            self.out.write_bytes(target);
            self.out.write_str("</a>");
        } else {
            self.out.anchor(target, target);
        }
        self.out.close(&self.tags.link_wrapper);

        self.cursor.set_offset(close + 1);
        self.emit_mark = self.cursor.offset();
    }
}

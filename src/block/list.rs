//! List stack management.
//!
//! Each open list remembers the indentation of its items and how much
//! deeper that is than its parent, so several levels can be closed at once
//! when an item outdents.

use smallvec::SmallVec;

use crate::parser::Parser;
use crate::render::HtmlWriter;
use crate::tags::TagVocabulary;

/// One open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListContext {
    pub ordered: bool,
    /// Indentation of this list's items.
    pub items_indentation: usize,
    /// `items_indentation` minus the parent's, or the raw value for the outermost list.
    pub indentation_difference: usize,
}

/// Where a new item landed relative to the open lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPlacement {
    /// A new (possibly nested) list was opened.
    Nested,
    /// `closed` inner lists were closed, then a sibling item was opened.
    Outdented { closed: usize },
    /// A sibling item in the innermost list.
    Sibling,
}

/// Open lists, innermost last.
///
/// Item indentation strictly increases from the outermost to the innermost
/// entry.
#[derive(Debug, Default)]
pub struct ListStack {
    stack: SmallVec<[ListContext; 8]>,
}

impl ListStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Open an item at `indentation`, pushing or popping lists as needed.
    pub fn enter_item(
        &mut self,
        ordered: bool,
        indentation: usize,
        out: &mut HtmlWriter,
        tags: &TagVocabulary,
    ) -> ItemPlacement {
        let top = match self.stack.last().copied() {
            Some(top) if top.items_indentation >= indentation => top,
            parent => {
                let indentation_difference =
                    indentation - parent.map_or(0, |p| p.items_indentation);
                self.stack.push(ListContext {
                    ordered,
                    items_indentation: indentation,
                    indentation_difference,
                });
                out.open(tags.list(ordered));
                out.open(tags.list_item(ordered));
                return ItemPlacement::Nested;
            }
        };

        if top.items_indentation == indentation {
            out.close(tags.list_item(top.ordered));
            out.open(tags.list_item(top.ordered));
            return ItemPlacement::Sibling;
        }

        let mut current = top.items_indentation;
        let mut closed = 0;
        while self.stack.len() > 1 && current > indentation {
            let Some(list) = self.stack.pop() else { break };
            current = current.saturating_sub(list.indentation_difference);
            out.close(tags.list_item(list.ordered));
            out.close(tags.list(list.ordered));
            closed += 1;
        }

        if let Some(list) = self.stack.last() {
            out.close(tags.list_item(list.ordered));
            out.open(tags.list_item(list.ordered));
        }

        ItemPlacement::Outdented { closed }
    }

    /// Close every open list, innermost first. Returns how many were closed.
    pub fn close_all(&mut self, out: &mut HtmlWriter, tags: &TagVocabulary) -> usize {
        let closed = self.stack.len();
        while let Some(list) = self.stack.pop() {
            out.close(tags.list_item(list.ordered));
            out.close(tags.list(list.ordered));
        }
        closed
    }
}

impl Parser<'_> {
    /// True if the cursor is on something that starts a list item.
    ///
    /// `-`, `+` and `N.` always do. A `*` only does when whitespace or the
    /// line end follows, so `*a*` and `**b**` at line start stay emphasis.
    pub(crate) fn at_list_marker(&self) -> bool {
        match self.cursor.peek() {
            Some(b'-' | b'+') => true,
            Some(b'*') => {
                matches!(self.cursor.peek_ahead(1), None | Some(b' ' | b'\t' | b'\n'))
            }
            Some(b'0'..=b'9') => self.cursor.is_ordered_marker(),
            _ => false,
        }
    }

    /// List item. Assumes the cursor is on a marker `marker_len` bytes long.
    pub(crate) fn parse_list_item(&mut self, ordered: bool, marker_len: usize) {
        self.flush_as_paragraph(true);

        let placement =
            self.lists
                .enter_item(ordered, self.line_indentation, &mut self.out, self.tags);
        log::trace!(
            "list item at byte {} indent {}: {placement:?}",
            self.cursor.offset(),
            self.line_indentation
        );

        self.cursor.advance(marker_len);
        self.cursor.skip_whitespace();
        self.emit_mark = self.cursor.offset();
    }

    /// `N.` at line start. Assumes [`Cursor::is_ordered_marker`] holds.
    ///
    /// [`Cursor::is_ordered_marker`]: crate::cursor::Cursor::is_ordered_marker
    pub(crate) fn parse_ordered_item(&mut self) {
        let marker_len = self.cursor.ordered_marker_len().unwrap_or(1);
        self.parse_list_item(true, marker_len);
    }
}

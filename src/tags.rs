//! The tag vocabulary: which markup each construct turns into.
//!
//! The converter only ever reads these strings. Callers override any
//! subset with struct-update syntax, or (with the `serde` feature) from a
//! partial JSON document where every missing field keeps its default.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An opening and a closing markup string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct TagPair {
    pub open: String,
    pub close: String,
}

impl TagPair {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// A pair that writes nothing.
    pub fn empty() -> Self {
        Self::new("", "")
    }
}

/// Markup strings for every construct the converter emits.
///
/// # Example
/// ```
/// use sweepmark::{convert, TagPair, TagVocabulary};
///
/// let tags = TagVocabulary {
///     bold: TagPair::new("<b>", "</b>"),
///     ..TagVocabulary::default()
/// };
/// assert_eq!(convert("**x**", &tags), "<p><b>x</b></p>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TagVocabulary {
    /// `#` through `######`.
    pub headlines: [TagPair; 6],
    pub paragraph: TagPair,
    pub italic: TagPair,
    pub bold: TagPair,
    pub blockquote: TagPair,
    /// Reserved; no construct emits it yet.
    pub highlight: TagPair,
    pub strikethrough: TagPair,
    pub ordered_list: TagPair,
    pub ordered_list_item: TagPair,
    pub unordered_list: TagPair,
    pub unordered_list_item: TagPair,
    pub code: TagPair,
    pub code_block: TagPair,
    /// Wraps every emitted `<a>` element.
    pub link_wrapper: TagPair,
    /// Wraps every emitted `<img>` element.
    pub image_wrapper: TagPair,
    pub horizontal_rule: String,
}

impl TagVocabulary {
    /// Tags for a headline level, clamped to `1..=6`.
    pub fn headline(&self, level: usize) -> &TagPair {
        &self.headlines[level.clamp(1, self.headlines.len()) - 1]
    }

    /// List tags for an ordered or unordered list.
    pub fn list(&self, ordered: bool) -> &TagPair {
        if ordered {
            &self.ordered_list
        } else {
            &self.unordered_list
        }
    }

    /// Item tags for an ordered or unordered list.
    pub fn list_item(&self, ordered: bool) -> &TagPair {
        if ordered {
            &self.ordered_list_item
        } else {
            &self.unordered_list_item
        }
    }
}

impl Default for TagVocabulary {
    fn default() -> Self {
        Self {
            headlines: [
                TagPair::new("<h1>", "</h1>\n"),
                TagPair::new("<h2>", "</h2>\n"),
                TagPair::new("<h3>", "</h3>\n"),
                TagPair::new("<h4>", "</h4>\n"),
                TagPair::new("<h5>", "</h5>\n"),
                TagPair::new("<h6>", "</h6>\n"),
            ],
            paragraph: TagPair::new("<p>", "</p>"),
            italic: TagPair::new("<em>", "</em>"),
            bold: TagPair::new("<strong>", "</strong>"),
            blockquote: TagPair::new("<blockquote>\n", "</blockquote>\n"),
            highlight: TagPair::new("<mark>", "</mark>"),
            strikethrough: TagPair::new("<del>", "</del>"),
            ordered_list: TagPair::new("<ol>", "</ol>"),
            ordered_list_item: TagPair::new("<li>", "</li>"),
            unordered_list: TagPair::new("<ul>", "</ul>"),
            unordered_list_item: TagPair::new("<li>", "</li>"),
            code: TagPair::new("<code>", "</code>"),
            code_block: TagPair::new("<pre><code>", "</code></pre>"),
            link_wrapper: TagPair::empty(),
            image_wrapper: TagPair::empty(),
            horizontal_rule: "<hr>".to_string(),
        }
    }
}

impl Default for TagPair {
    fn default() -> Self {
        Self::empty()
    }
}

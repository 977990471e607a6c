//! sweepmark: single-pass Markdown to HTML converter
//!
//! The input is scanned once, front to back, and HTML is written as
//! constructs are recognized. No tree or event list is built.
//!
//! # Design Principles
//! - No AST: one cursor, one emit mark, one output buffer
//! - No regex: pure byte-level scanning
//! - No backtracking across lines: inline constructs end on their line
//! - Malformed markdown degrades to literal text, never to an error
//!
//! Every output tag comes from a [`TagVocabulary`], so the same input can
//! render to plain HTML or to any other tag set.
//!
//! # Example
//! ```
//! let html = sweepmark::to_html("# Hello\n\nWorld");
//! assert_eq!(html, "<h1>Hello</h1>\n<p>World</p>");
//! ```

pub mod cursor;
pub mod diagnostic;
pub mod limits;
pub mod range;
pub mod render;
pub mod tags;

mod block;
mod inline;
mod parser;

pub use block::{ItemPlacement, ListContext, ListStack};
pub use diagnostic::Diagnostic;
pub use inline::EmphasisLevel;
pub use range::Range;
pub use render::HtmlWriter;
pub use tags::{TagPair, TagVocabulary};

use parser::Parser;

/// Conversion options.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Output tags for every construct.
    pub tags: TagVocabulary,
    /// Turn `<https://…>` and `<user@host>` into links.
    pub autolinks: bool,
}

/// Result of a conversion together with the local fallbacks it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Converted HTML.
    pub html: String,
    /// Constructs that were printed literally, in input order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert Markdown to HTML with the default tags.
///
/// # Example
/// ```
/// assert_eq!(sweepmark::to_html("**bold**"), "<p><strong>bold</strong></p>");
/// ```
pub fn to_html(input: &str) -> String {
    convert(input, &TagVocabulary::default())
}

/// Convert Markdown to HTML using the given tags.
pub fn convert(input: &str, tags: &TagVocabulary) -> String {
    let writer = HtmlWriter::with_capacity_for(input.len());
    let (writer, _) = Parser::new(input.as_bytes(), tags, false, writer).run();
    writer.into_string()
}

/// Convert Markdown to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let writer = HtmlWriter::with_capacity_for(input.len());
    let (writer, _) =
        Parser::new(input.as_bytes(), &options.tags, options.autolinks, writer).run();
    writer.into_string()
}

/// Convert Markdown to HTML, writing into a provided buffer.
///
/// The buffer is cleared first; its allocation is reused.
pub fn to_html_into(input: &str, out: &mut Vec<u8>) {
    let tags = TagVocabulary::default();
    let mut buffer = std::mem::take(out);
    buffer.clear();
    buffer.reserve(input.len() + input.len() / 4);

    let writer = HtmlWriter::from_vec(buffer);
    let (writer, _) = Parser::new(input.as_bytes(), &tags, false, writer).run();
    *out = writer.into_vec();
}

/// Convert Markdown to HTML and report every construct that fell back to
/// literal text.
///
/// # Example
/// ```
/// use sweepmark::{convert_with_diagnostics, Diagnostic, Options};
///
/// let conversion = convert_with_diagnostics("a `b", &Options::default());
/// assert_eq!(conversion.html, "<p>a `b</p>");
/// assert_eq!(
///     conversion.diagnostics,
///     vec![Diagnostic::UnterminatedCodeSpan { offset: 2 }]
/// );
/// ```
pub fn convert_with_diagnostics(input: &str, options: &Options) -> Conversion {
    let writer = HtmlWriter::with_capacity_for(input.len());
    let (writer, diagnostics) =
        Parser::new(input.as_bytes(), &options.tags, options.autolinks, writer).run();
    Conversion {
        html: writer.into_string(),
        diagnostics,
    }
}

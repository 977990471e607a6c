//! HTML output writer.
//!
//! Append-only: the converter never reads back what it wrote. Source text
//! is copied verbatim, so nothing here escapes.

use crate::tags::TagPair;

/// HTML output writer with a pre-allocated buffer.
///
/// # Example
/// ```
/// use sweepmark::{HtmlWriter, TagPair};
///
/// let mut writer = HtmlWriter::with_capacity_for(16);
/// let em = TagPair::new("<em>", "</em>");
/// writer.open(&em);
/// writer.write_bytes(b"Hello");
/// writer.close(&em);
///
/// assert_eq!(writer.into_string(), "<em>Hello</em>");
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Typical HTML is ~1.25x input size.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        let capacity = input_len + input_len / 4;
        Self {
            out: Vec::with_capacity(capacity),
        }
    }

    /// Wrap an existing buffer, appending after its current contents.
    #[inline]
    pub fn from_vec(out: Vec<u8>) -> Self {
        Self { out }
    }

    /// Write raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write the same byte `count` times.
    #[inline]
    pub fn write_repeated(&mut self, b: u8, count: usize) {
        self.out.resize(self.out.len() + count, b);
    }

    /// Write the opening half of a tag pair.
    #[inline]
    pub fn open(&mut self, pair: &TagPair) {
        self.write_str(&pair.open);
    }

    /// Write the closing half of a tag pair.
    #[inline]
    pub fn close(&mut self, pair: &TagPair) {
        self.write_str(&pair.close);
    }

    /// Write `open`, the content, then `close`.
    #[inline]
    pub fn wrap(&mut self, pair: &TagPair, content: &[u8]) {
        self.open(pair);
        self.write_bytes(content);
        self.close(pair);
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push(b'\n');
    }

    /// Write an anchor: `<a href="url">text</a>`, both copied verbatim.
    #[inline]
    pub fn anchor(&mut self, url: &[u8], text: &[u8]) {
        self.write_str("<a href=\"");
        self.write_bytes(url);
        self.write_str("\">");
        self.write_bytes(text);
        self.write_str("</a>");
    }

    /// Write an image: `<img src="file" alt="alt">`, both copied verbatim.
    #[inline]
    pub fn image(&mut self, src: &[u8], alt: &[u8]) {
        self.write_str("<img src=\"");
        self.write_bytes(src);
        self.write_str("\" alt=\"");
        self.write_bytes(alt);
        self.write_str("\">");
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Get output as byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.out
    }

    /// Take ownership of output buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.out
    }

    /// Take ownership as String.
    ///
    /// Every copied slice starts and ends next to an ASCII marker or at a
    /// line boundary, so valid UTF-8 input yields valid UTF-8 output. The
    /// lossy path only runs for inputs that were never valid `str`s.
    pub fn into_string(self) -> String {
        match String::from_utf8(self.out) {
            Ok(s) => s,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_new() {
        let writer = HtmlWriter::new();
        assert!(writer.is_empty());
    }

    #[test]
    fn test_writer_capacity() {
        let writer = HtmlWriter::with_capacity_for(1000);
        assert!(writer.out.capacity() >= 1250);
    }

    #[test]
    fn test_writer_wrap() {
        let mut writer = HtmlWriter::new();
        writer.wrap(&TagPair::new("<del>", "</del>"), b"gone");
        assert_eq!(writer.as_bytes(), b"<del>gone</del>");
    }

    #[test]
    fn test_writer_repeated() {
        let mut writer = HtmlWriter::new();
        writer.write_repeated(b'*', 3);
        writer.write_repeated(b'*', 0);
        assert_eq!(writer.as_bytes(), b"***");
    }

    #[test]
    fn test_writer_anchor_is_verbatim() {
        let mut writer = HtmlWriter::new();
        writer.anchor(b"http://x?a=1&b=2", b"<b>home</b>");
        assert_eq!(
            writer.into_string(),
            "<a href=\"http://x?a=1&b=2\"><b>home</b></a>"
        );
    }

    #[test]
    fn test_writer_image() {
        let mut writer = HtmlWriter::new();
        writer.image(b"img.png", b"alt");
        assert_eq!(writer.into_string(), "<img src=\"img.png\" alt=\"alt\">");
    }

    #[test]
    fn test_writer_from_vec_appends() {
        let mut writer = HtmlWriter::from_vec(b"<p>".to_vec());
        writer.write_str("x");
        assert_eq!(writer.into_vec(), b"<p>x");
    }

    #[test]
    fn test_writer_clear_reuse() {
        let mut writer = HtmlWriter::new();
        writer.write_str("first");
        let cap1 = writer.out.capacity();

        writer.clear();
        assert!(writer.is_empty());
        assert_eq!(writer.out.capacity(), cap1);

        writer.write_str("second");
        assert_eq!(writer.as_bytes(), b"second");
    }

    #[test]
    fn test_into_string_lossy_on_invalid_utf8() {
        let mut writer = HtmlWriter::new();
        writer.write_bytes(&[b'a', 0xff]);
        assert_eq!(writer.into_string(), "a\u{fffd}");
    }
}

//! Byte ranges into the input buffer.
//!
//! Handlers that must look ahead before writing anything (links, images)
//! remember the pieces they found as ranges and copy them out afterwards.

/// Half-open byte range into the input.
///
/// # Example
/// ```
/// use sweepmark::Range;
///
/// let input = b"Hello, World!";
/// let range = Range::new(0, 5);
/// assert_eq!(range.slice(input), b"Hello");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Get the slice this range refers to.
    #[inline]
    pub fn slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_slice() {
        let input = b"[home](http://x)";
        assert_eq!(Range::new(1, 5).slice(input), b"home");
        assert_eq!(Range::new(7, 15).slice(input), b"http://x");
    }

    #[test]
    fn test_range_zero_width() {
        assert_eq!(Range::new(3, 3).slice(b"abcdef"), b"");
    }
}

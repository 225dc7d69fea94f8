//! Character spans over a text buffer

use std::fmt;
use std::ops::Range;

/// Half-open `[start, end)` range of `char` offsets into a text buffer.
///
/// Offsets count Unicode scalar values, not bytes, so a span computed by the
/// backend over `"café 2024"` lines up with the same text in Rust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// First char offset (inclusive)
    pub start: usize,
    /// Last char offset (exclusive)
    pub end: usize,
}

/// Errors produced when building or checking a span
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// `start >= end`
    Empty {
        /// Requested start
        start: usize,
        /// Requested end
        end: usize,
    },
    /// The span reaches past the end of the buffer
    OutOfBounds {
        /// The offending span
        span: Span,
        /// Buffer length in chars
        len: usize,
    },
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanError::Empty { start, end } => {
                write!(f, "span [{}, {}) is empty or reversed", start, end)
            }
            SpanError::OutOfBounds { span, len } => {
                write!(f, "span {} exceeds buffer length {}", span, len)
            }
        }
    }
}

impl std::error::Error for SpanError {}

impl Span {
    /// Create a new span, rejecting empty or reversed ranges
    ///
    /// # Examples
    ///
    /// ```
    /// use factlens_domain::Span;
    ///
    /// assert!(Span::new(3, 7).is_ok());
    /// assert!(Span::new(7, 7).is_err());
    /// ```
    pub fn new(start: usize, end: usize) -> Result<Self, SpanError> {
        if start >= end {
            return Err(SpanError::Empty { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a span from a byte range produced by a regex match
    ///
    /// `range` must lie on char boundaries of `text`.
    pub fn from_byte_range(text: &str, range: Range<usize>) -> Result<Self, SpanError> {
        let start = text[..range.start].chars().count();
        let end = start + text[range].chars().count();
        Self::new(start, end)
    }

    /// Number of chars covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false for a validly constructed span
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether the two spans share at least one char
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Check that the span fits inside a buffer of `len` chars
    pub fn check_bounds(&self, len: usize) -> Result<(), SpanError> {
        if self.end > len {
            return Err(SpanError::OutOfBounds { span: *self, len });
        }
        Ok(())
    }

    /// Translate to a byte range of `text`, or `None` when out of bounds
    pub fn byte_range(&self, text: &str) -> Option<Range<usize>> {
        if self.is_empty() {
            return None;
        }
        let mut boundaries = text
            .char_indices()
            .map(|(byte, _)| byte)
            .chain(std::iter::once(text.len()));
        let start = boundaries.nth(self.start)?;
        let end = boundaries.nth(self.end - self.start - 1)?;
        Some(start..end)
    }

    /// The substring of `text` covered by this span
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.byte_range(text).map(|range| &text[range])
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

//! Highlight rendering
//!
//! Turns a `(text, claims)` pair into an ordered list of segments: runs of
//! plain text and claim-tagged runs. The result borrows from its inputs and
//! is recomputed on every render, so it can never drift from the claim list.
//!
//! Spans are sorted and checked before anything is emitted. Overlapping or
//! out-of-range spans are handled according to an [`OverlapPolicy`]; nested
//! output is never produced.

use crate::claim::{Claim, ClaimId, ClaimStatus};
use crate::span::Span;
use std::fmt;

/// What to do when a claim cannot be rendered as a disjoint span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Fail on the first overlapping or out-of-range span
    #[default]
    Reject,
    /// Keep the earlier-starting span and skip the offending one
    KeepFirst,
}

/// A run of the rendered buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any claim
    Plain(&'a str),
    /// Text covered by a claim
    Claim {
        /// Claim identifier, for hover/click binding
        id: &'a ClaimId,
        /// Drives the styling
        status: ClaimStatus,
        /// The covered text, taken from the buffer
        text: &'a str,
    },
}

impl<'a> Segment<'a> {
    /// The buffer text this segment covers
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Plain(text) => text,
            Segment::Claim { text, .. } => text,
        }
    }
}

/// Why a claim list could not be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightError {
    /// Two claim spans share characters
    Overlap {
        /// The earlier-starting claim
        first: ClaimId,
        /// The claim that runs into it
        second: ClaimId,
    },
    /// A claim span reaches past the end of the buffer
    OutOfBounds {
        /// Offending claim
        id: ClaimId,
        /// Its span
        span: Span,
        /// Buffer length in chars
        len: usize,
    },
}

impl fmt::Display for HighlightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HighlightError::Overlap { first, second } => {
                write!(f, "claim {} overlaps claim {}", second, first)
            }
            HighlightError::OutOfBounds { id, span, len } => {
                write!(f, "claim {} span {} exceeds text length {}", id, span, len)
            }
        }
    }
}

impl std::error::Error for HighlightError {}

/// A rendered buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight<'a> {
    segments: Vec<Segment<'a>>,
    skipped: Vec<&'a ClaimId>,
}

impl<'a> Highlight<'a> {
    /// Segments in buffer order
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Claims left out under [`OverlapPolicy::KeepFirst`]
    pub fn skipped(&self) -> &[&'a ClaimId] {
        &self.skipped
    }

    /// Number of claim segments
    pub fn claim_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Claim { .. }))
            .count()
    }

    /// Concatenate every segment back into text
    ///
    /// Equal to the input buffer whenever rendering succeeded.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    /// Render as HTML-like markup
    ///
    /// Each claim becomes
    /// `<mark class="claim claim-{status}" data-claim-id="{id}">…</mark>`.
    /// All text and attribute values are escaped.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Plain(text) => push_escaped(&mut out, text),
                Segment::Claim { id, status, text } => {
                    out.push_str("<mark class=\"claim claim-");
                    out.push_str(status.as_str());
                    out.push_str("\" data-claim-id=\"");
                    push_escaped(&mut out, id.as_str());
                    out.push_str("\">");
                    push_escaped(&mut out, text);
                    out.push_str("</mark>");
                }
            }
        }
        out
    }
}

/// Render `claims` over `text`
///
/// # Examples
///
/// ```
/// use factlens_domain::{Claim, ClaimCategory, ClaimId, OverlapPolicy, Span};
/// use factlens_domain::highlight::render;
///
/// let text = "Launched in 2024.";
/// let claims = vec![Claim::new(
///     ClaimId::parse("c1").unwrap(),
///     "2024",
///     Span::new(12, 16).unwrap(),
///     ClaimCategory::Date,
/// )];
///
/// let highlight = render(text, &claims, OverlapPolicy::Reject).unwrap();
/// assert_eq!(highlight.segments().len(), 3);
/// assert_eq!(highlight.plain_text(), text);
/// ```
pub fn render<'a>(
    text: &'a str,
    claims: &'a [Claim],
    policy: OverlapPolicy,
) -> Result<Highlight<'a>, HighlightError> {
    // Byte offset of every char boundary, including the end of the buffer
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_len = boundaries.len() - 1;

    let mut ordered: Vec<&Claim> = claims.iter().collect();
    ordered.sort_by_key(|c| (c.span.start, c.span.end));

    let mut segments = Vec::with_capacity(ordered.len() * 2 + 1);
    let mut skipped = Vec::new();
    let mut cursor_char = 0;
    let mut cursor_byte = 0;
    let mut previous: Option<&ClaimId> = None;

    for claim in ordered {
        let span = claim.span;

        if span.is_empty() || span.end > char_len {
            match policy {
                OverlapPolicy::Reject => {
                    return Err(HighlightError::OutOfBounds {
                        id: claim.id.clone(),
                        span,
                        len: char_len,
                    })
                }
                OverlapPolicy::KeepFirst => {
                    skipped.push(&claim.id);
                    continue;
                }
            }
        }

        if span.start < cursor_char {
            match (policy, previous) {
                (OverlapPolicy::Reject, Some(first)) => {
                    return Err(HighlightError::Overlap {
                        first: first.clone(),
                        second: claim.id.clone(),
                    })
                }
                _ => {
                    skipped.push(&claim.id);
                    continue;
                }
            }
        }

        let start_byte = boundaries[span.start];
        let end_byte = boundaries[span.end];
        if start_byte > cursor_byte {
            segments.push(Segment::Plain(&text[cursor_byte..start_byte]));
        }
        segments.push(Segment::Claim {
            id: &claim.id,
            status: claim.status,
            text: &text[start_byte..end_byte],
        });

        cursor_char = span.end;
        cursor_byte = end_byte;
        previous = Some(&claim.id);
    }

    if cursor_byte < text.len() {
        segments.push(Segment::Plain(&text[cursor_byte..]));
    }

    Ok(Highlight { segments, skipped })
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::ClaimCategory;

    fn claim(id: &str, start: usize, end: usize) -> Claim {
        Claim::new(
            ClaimId::parse(id).unwrap(),
            "",
            Span::new(start, end).unwrap(),
            ClaimCategory::Fact,
        )
    }

    #[test]
    fn test_no_claims_is_single_plain_segment() {
        let h = render("nothing to see", &[], OverlapPolicy::Reject).unwrap();
        assert_eq!(h.segments(), &[Segment::Plain("nothing to see")]);
        assert_eq!(h.claim_count(), 0);
    }

    #[test]
    fn test_empty_text() {
        let h = render("", &[], OverlapPolicy::Reject).unwrap();
        assert!(h.segments().is_empty());
        assert_eq!(h.plain_text(), "");
    }

    #[test]
    fn test_single_claim_preserves_surroundings() {
        let text = "Apple announced the iPhone 16 in September 2024";
        let claims = vec![claim("d1", 33, 47)];
        let h = render(text, &claims, OverlapPolicy::Reject).unwrap();

        assert_eq!(h.segments().len(), 2);
        assert_eq!(h.segments()[0], Segment::Plain("Apple announced the iPhone 16 in "));
        match h.segments()[1] {
            Segment::Claim { id, text, .. } => {
                assert_eq!(id.as_str(), "d1");
                assert_eq!(text, "September 2024");
            }
            other => panic!("expected claim segment, got {:?}", other),
        }
        assert_eq!(h.plain_text(), text);
    }

    #[test]
    fn test_unsorted_input_renders_in_buffer_order() {
        let text = "0123456789";
        let claims = vec![claim("late", 7, 9), claim("early", 1, 3)];
        let h = render(text, &claims, OverlapPolicy::Reject).unwrap();

        let ids: Vec<&str> = h
            .segments()
            .iter()
            .filter_map(|s| match s {
                Segment::Claim { id, .. } => Some(id.as_str()),
                Segment::Plain(_) => None,
            })
            .collect();
        assert_eq!(ids, vec!["early", "late"]);
        assert_eq!(h.plain_text(), text);
    }

    #[test]
    fn test_adjacent_claims() {
        let text = "abcdef";
        let claims = vec![claim("x", 0, 3), claim("y", 3, 6)];
        let h = render(text, &claims, OverlapPolicy::Reject).unwrap();
        assert_eq!(h.claim_count(), 2);
        assert_eq!(h.segments().len(), 2);
    }

    #[test]
    fn test_overlap_rejected() {
        let text = "September 2024";
        let claims = vec![claim("month", 0, 14), claim("year", 10, 14)];
        let err = render(text, &claims, OverlapPolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            HighlightError::Overlap {
                first: ClaimId::parse("month").unwrap(),
                second: ClaimId::parse("year").unwrap(),
            }
        );
    }

    #[test]
    fn test_overlap_keep_first() {
        let text = "September 2024";
        let claims = vec![claim("year", 10, 14), claim("month", 0, 14)];
        let h = render(text, &claims, OverlapPolicy::KeepFirst).unwrap();

        assert_eq!(h.claim_count(), 1);
        assert_eq!(h.skipped().len(), 1);
        assert_eq!(h.skipped()[0].as_str(), "year");
        assert_eq!(h.plain_text(), text);
    }

    #[test]
    fn test_out_of_bounds() {
        let text = "short";
        let claims = vec![claim("far", 2, 40)];
        assert!(matches!(
            render(text, &claims, OverlapPolicy::Reject),
            Err(HighlightError::OutOfBounds { len: 5, .. })
        ));

        let h = render(text, &claims, OverlapPolicy::KeepFirst).unwrap();
        assert_eq!(h.claim_count(), 0);
        assert_eq!(h.plain_text(), text);
    }

    #[test]
    fn test_multibyte_offsets() {
        let text = "Zürich — 1.2 million résidents";
        // "1.2 million" starts after "Zürich — " (9 chars)
        let claims = vec![claim("n", 9, 20)];
        let h = render(text, &claims, OverlapPolicy::Reject).unwrap();
        assert_eq!(h.segments()[1].text(), "1.2 million");
        assert_eq!(h.plain_text(), text);
    }

    #[test]
    fn test_markup_escapes_and_tags() {
        let text = "<b>$799</b>";
        let mut c = claim("p&1", 3, 7);
        c.status = ClaimStatus::False;
        let claims = vec![c];
        let markup = render(text, &claims, OverlapPolicy::Reject)
            .unwrap()
            .to_markup();
        assert_eq!(
            markup,
            "&lt;b&gt;<mark class=\"claim claim-false\" data-claim-id=\"p&amp;1\">$799</mark>&lt;/b&gt;"
        );
    }
}

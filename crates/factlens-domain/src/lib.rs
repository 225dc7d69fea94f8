//! FactLens Domain Layer
//!
//! This crate holds the claim model and the logic that operates on it without
//! touching the network or the terminal. Everything else in the workspace
//! depends on it; it depends on nothing but `uuid`.
//!
//! ## Key Concepts
//!
//! - **Claim**: an assertion found in a text buffer, tied to a character span
//! - **Span**: a half-open `[start, end)` range of `char` offsets
//! - **Confidence**: an integer percentage in `0..=100`
//! - **Highlight**: the (plain text, tagged span) segments of a buffer
//! - **Document**: a text buffer plus its claim list and transient UI state
//!
//! ## Architecture
//!
//! - Pure logic only; no I/O
//! - Claim extraction and verification sit behind the traits in [`traits`]
//! - The HTTP wrapper and the terminal front end live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod claim_list;
pub mod confidence;
pub mod document;
pub mod highlight;
pub mod span;
pub mod traits;

// Re-exports for convenience
pub use claim::{Claim, ClaimCategory, ClaimId, ClaimStatus, Verdict};
pub use claim_list::ClaimList;
pub use confidence::Confidence;
pub use document::{Document, ExtractionTicket, StaleTicket};
pub use highlight::{Highlight, HighlightError, OverlapPolicy, Segment};
pub use span::{Span, SpanError};

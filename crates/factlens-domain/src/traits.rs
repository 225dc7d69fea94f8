//! Trait definitions for pluggable behaviour
//!
//! These traits mark the seams between the claim model and whatever produces
//! or checks claims. Implementations live in other crates.

use crate::claim::{Claim, ClaimCategory, Verdict};

/// Trait for checking a single claim
///
/// The placeholder implementation (`factlens-extractor::RandomVerifier`)
/// draws random verdicts; a real verifier can replace it without touching
/// the highlighter or the reconciliation logic.
pub trait ClaimVerifier {
    /// Error type for verification
    type Error;

    /// Judge the claim text
    fn verify(&self, text: &str, category: ClaimCategory) -> Result<Verdict, Self::Error>;
}

/// Trait for extracting claims from text
///
/// Implemented by the extraction layer (factlens-extractor)
pub trait ClaimExtractor {
    /// Error type for extraction operations
    type Error;

    /// Produce a fresh claim list for `text`
    fn extract(&self, text: &str) -> Result<Vec<Claim>, Self::Error>;
}

impl<V: ClaimVerifier + ?Sized> ClaimVerifier for &V {
    type Error = V::Error;

    fn verify(&self, text: &str, category: ClaimCategory) -> Result<Verdict, Self::Error> {
        (**self).verify(text, category)
    }
}

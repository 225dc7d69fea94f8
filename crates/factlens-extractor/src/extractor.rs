//! Core PatternExtractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::patterns::{resolve_overlaps, PatternSet};
use factlens_domain::traits::{ClaimExtractor, ClaimVerifier};
use factlens_domain::{Claim, ClaimId, Span};
use std::fmt::Display;
use tracing::{debug, info};

/// Converts a text buffer into a fresh list of date and number claims
pub struct PatternExtractor<V> {
    verifier: V,
    patterns: PatternSet,
    config: ExtractorConfig,
}

impl<V> PatternExtractor<V>
where
    V: ClaimVerifier,
    V::Error: Display,
{
    /// Create a new PatternExtractor
    pub fn new(verifier: V, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self {
            verifier,
            patterns: PatternSet::new()?,
            config,
        })
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract claims from text
    ///
    /// Spans never overlap and the result is sorted by position.
    pub fn extract(&self, text: &str) -> Result<Vec<Claim>, ExtractorError> {
        let length = text.chars().count();
        if length > self.config.max_text_length {
            return Err(ExtractorError::TextTooLong(length, self.config.max_text_length));
        }

        let candidates = self.patterns.scan(text, &self.config);
        debug!("Scanned {} candidate matches", candidates.len());

        let accepted = resolve_overlaps(candidates);

        let mut claims = Vec::with_capacity(accepted.len());
        for candidate in accepted {
            let matched = &text[candidate.bytes.clone()];
            let span = Span::from_byte_range(text, candidate.bytes)
                .map_err(|e| ExtractorError::Verification(e.to_string()))?;
            let verdict = self
                .verifier
                .verify(matched, candidate.category)
                .map_err(|e| ExtractorError::Verification(e.to_string()))?;

            claims.push(
                Claim::new(ClaimId::generate(), matched, span, candidate.category)
                    .with_verdict(verdict),
            );
        }

        info!(
            "Extraction complete: {} claims from {} chars",
            claims.len(),
            length
        );

        Ok(claims)
    }
}

impl<V> ClaimExtractor for PatternExtractor<V>
where
    V: ClaimVerifier,
    V::Error: Display,
{
    type Error = ExtractorError;

    fn extract(&self, text: &str) -> Result<Vec<Claim>, Self::Error> {
        PatternExtractor::extract(self, text)
    }
}

//! FactLens Extractor
//!
//! Placeholder claim extraction: a handful of regular-expression scans for
//! dates and numbers, with each match judged by a pluggable
//! [`ClaimVerifier`](factlens_domain::traits::ClaimVerifier).
//!
//! # Overview
//!
//! This is not a fact-checking algorithm. The scans find tokens that *look*
//! checkable, and the default [`RandomVerifier`] hands out random verdicts so
//! the highlighting and reconciliation flow has something to show. Swap the
//! verifier for a real one without touching anything downstream.
//!
//! # Architecture
//!
//! ```text
//! Text → PatternSet → candidates → overlap resolution → ClaimVerifier → Claims
//! ```
//!
//! # Example Usage
//!
//! ```
//! use factlens_domain::ClaimCategory;
//! use factlens_extractor::{ExtractorConfig, PatternExtractor, RandomVerifier};
//!
//! let extractor = PatternExtractor::new(RandomVerifier::seeded(7), ExtractorConfig::default())
//!     .expect("default config is valid");
//!
//! let claims = extractor
//!     .extract("Apple announced the iPhone 16 in September 2024")
//!     .unwrap();
//!
//! assert_eq!(claims.len(), 1);
//! assert_eq!(claims[0].category, ClaimCategory::Date);
//! assert_eq!(claims[0].text, "September 2024");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod patterns;
mod verifier;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::PatternExtractor;
pub use verifier::{FixedVerifier, RandomVerifier};

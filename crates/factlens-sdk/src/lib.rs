//! FactLens Rust SDK
//!
//! Async client for the FactLens fact-check and rewrite backend.
//!
//! # Example
//!
//! ```no_run
//! use factlens_sdk::{ApiClient, ClientConfig};
//!
//! # async fn run() -> Result<(), factlens_sdk::SdkError> {
//! let client = ApiClient::new(ClientConfig::from_env())?;
//!
//! let extraction = client
//!     .extract_claims("Apple announced the iPhone 16 in September 2024")
//!     .await?;
//!
//! for claim in &extraction.claims {
//!     println!("{} [{}] {}", claim.text, claim.status, claim.confidence);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod config;
mod conversions;
mod error;
pub mod types;

pub use client::{ApiClient, Extraction, YoutubeTarget};
pub use config::{ClientConfig, API_URL_ENV, DEFAULT_BASE_URL};
pub use error::{FailureCause, Operation, SdkError};
pub use types::{
    Comment, EngagementPrediction, ExtractionMetadata, Platform, PlatformInfo, RewriteRequest,
    RewriteResponse, Tone,
};

//! FactLens client implementation.

use crate::config::ClientConfig;
use crate::conversions::{claims_from_records, verdict_from_response};
use crate::error::{FailureCause, Operation, SdkError};
use crate::types::{
    Comment, CommentsResponse, ExtractionMetadata, ExtractionRequest, ExtractionResponse,
    Platform, PlatformMap, RewriteRequest, RewriteResponse, Tone, VerificationRequest,
    VerificationResponse,
};
use factlens_domain::{Claim, ClaimCategory, ClaimId, Verdict};
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Claims returned by a remote extraction
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Claims, already converted and validated
    pub claims: Vec<Claim>,
    /// Seconds the backend spent
    pub processing_time: f64,
    /// Count reported by the backend
    pub total_claims: usize,
    /// Extraction bookkeeping
    pub metadata: ExtractionMetadata,
}

/// How a YouTube comment lookup is routed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YoutubeTarget {
    /// No input: trending videos
    Trending,
    /// An 11-character video id
    Video(String),
    /// Free-text search
    Search(String),
}

impl YoutubeTarget {
    /// Route raw user input
    pub fn classify(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            YoutubeTarget::Trending
        } else if input.len() == 11
            && input
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            YoutubeTarget::Video(input.to_string())
        } else {
            YoutubeTarget::Search(input.to_string())
        }
    }
}

/// FactLens SDK client
///
/// Every method issues exactly one request and waits for the full response.
/// Failures are returned as [`SdkError::OperationFailed`]; nothing is retried.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Create a client for the configured backend
    pub fn new(config: ClientConfig) -> Result<Self, SdkError> {
        let base = config.validate()?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| SdkError::InvalidConfig(format!("HTTP client: {}", e)))?;
        Ok(Self { http, base })
    }

    /// Backend base URL
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Extract claims from text
    pub async fn extract_claims(&self, text: &str) -> Result<Extraction, SdkError> {
        let op = Operation::ExtractClaims;
        info!("Extracting claims from {} chars", text.chars().count());

        let url = self.endpoint(&["extract-claims"])?;
        let response: ExtractionResponse = self
            .send(op, self.http.post(url).json(&ExtractionRequest { text }))
            .await?;

        let total_claims = response.total_claims.unwrap_or(response.claims.len());
        let claims = claims_from_records(response.claims).map_err(|e| SdkError::failed(op, e))?;

        info!(
            "Extracted {} claims in {:.2}s",
            claims.len(),
            response.processing_time
        );

        Ok(Extraction {
            claims,
            processing_time: response.processing_time,
            total_claims,
            metadata: response.metadata.unwrap_or_default(),
        })
    }

    /// Ask the backend to re-verify a single claim
    pub async fn verify_claim(
        &self,
        id: &ClaimId,
        text: &str,
        category: ClaimCategory,
    ) -> Result<Verdict, SdkError> {
        let op = Operation::VerifyClaim;
        info!("Verifying claim {}", id);

        let url = self.endpoint(&["verify-claim", id.as_str()])?;
        let body = VerificationRequest {
            claim_text: text,
            claim_type: category.as_str(),
        };
        let response: VerificationResponse = self.send(op, self.http.post(url).json(&body)).await?;

        let verdict = verdict_from_response(id, response).map_err(|e| SdkError::failed(op, e))?;
        debug!("Claim {} is {} ({})", id, verdict.status, verdict.confidence);
        Ok(verdict)
    }

    /// Sources the backend checks against
    pub async fn sources(&self) -> Result<serde_json::Value, SdkError> {
        let url = self.endpoint(&["sources"])?;
        self.send(Operation::FetchSources, self.http.get(url)).await
    }

    /// Backend health report
    pub async fn health(&self) -> Result<serde_json::Value, SdkError> {
        let url = self.endpoint(&["health"])?;
        self.send(Operation::HealthCheck, self.http.get(url)).await
    }

    /// Available rewrite tones
    ///
    /// Callers wanting the offline list on failure use [`Tone::fallback`].
    pub async fn tones(&self) -> Result<Vec<Tone>, SdkError> {
        let url = self.endpoint(&["tones"])?;
        self.send(Operation::FetchTones, self.http.get(url)).await
    }

    /// Available rewrite platforms, ordered by id
    pub async fn platforms(&self) -> Result<Vec<Platform>, SdkError> {
        let url = self.endpoint(&["platforms"])?;
        let map: PlatformMap = self.send(Operation::FetchPlatforms, self.http.get(url)).await?;
        Ok(map.into_values().collect())
    }

    /// Rewrite a comment in a given tone
    pub async fn rewrite(&self, request: &RewriteRequest) -> Result<RewriteResponse, SdkError> {
        info!(
            "Rewriting {} chars as {} for {}",
            request.comment.chars().count(),
            request.tone,
            request.platform
        );
        let url = self.endpoint(&["rewrite"])?;
        self.send(Operation::Rewrite, self.http.post(url).json(request))
            .await
    }

    /// Reddit comments matching a search query
    pub async fn reddit_comments(&self, query: &str, limit: u32) -> Result<Vec<Comment>, SdkError> {
        let op = Operation::RedditComments;
        let url = self.endpoint(&["api", "comments", "reddit"])?;
        let limit = limit.to_string();
        let request = self
            .http
            .get(url)
            .query(&[("query", query), ("limit", limit.as_str())]);
        self.comments(op, request).await
    }

    /// YouTube comments for a video id, a search, or trending videos
    ///
    /// See [`YoutubeTarget::classify`] for how `input` is routed.
    pub async fn youtube_comments(&self, input: &str, limit: u32) -> Result<Vec<Comment>, SdkError> {
        let op = Operation::YoutubeComments;
        let limit = limit.to_string();
        let target = YoutubeTarget::classify(input);
        debug!("YouTube lookup routed as {:?}", target);

        let request = match &target {
            YoutubeTarget::Trending => self
                .http
                .get(self.endpoint(&["api", "comments", "youtube", "trending"])?)
                .query(&[("limit", limit.as_str())]),
            YoutubeTarget::Video(video_id) => self
                .http
                .get(self.endpoint(&["api", "comments", "youtube"])?)
                .query(&[("video_id", video_id.as_str()), ("limit", limit.as_str())]),
            YoutubeTarget::Search(query) => self
                .http
                .get(self.endpoint(&["api", "comments", "youtube"])?)
                .query(&[("query", query.as_str()), ("limit", limit.as_str())]),
        };
        self.comments(op, request).await
    }

    async fn comments(
        &self,
        op: Operation,
        request: RequestBuilder,
    ) -> Result<Vec<Comment>, SdkError> {
        let response: CommentsResponse = self.send(op, request).await?;

        if let Some(message) = response.error {
            return Err(SdkError::failed(op, FailureCause::Api(message)));
        }
        match response.comments {
            Some(comments) if !comments.is_empty() => {
                info!("Fetched {} comments", comments.len());
                Ok(comments)
            }
            _ => Err(SdkError::failed(op, FailureCause::Empty)),
        }
    }

    /// Base URL with `segments` appended, each one percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SdkError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| SdkError::InvalidConfig(format!("{} cannot be a base URL", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send once, require 2xx, decode JSON
    async fn send<T: DeserializeOwned>(
        &self,
        op: Operation,
        request: RequestBuilder,
    ) -> Result<T, SdkError> {
        let response = request.send().await.map_err(|e| SdkError::failed(op, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SdkError::failed(
                op,
                FailureCause::Status {
                    status: status.as_u16(),
                    body,
                },
            ));
        }

        let bytes = response.bytes().await.map_err(|e| SdkError::failed(op, e))?;
        debug!("{} returned {} bytes", op, bytes.len());
        serde_json::from_slice(&bytes).map_err(|e| SdkError::failed(op, e))
    }
}

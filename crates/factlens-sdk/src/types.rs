//! Wire types exchanged with the backend
//!
//! Field names match the JSON payloads. Claim payloads are converted into
//! domain types before they leave the crate; the rest are handed out as is.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Claim as the backend sends it
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ClaimRecord {
    pub id: String,
    pub text: String,
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type")]
    pub category: String,
    pub status: String,
    pub confidence: f64,
    #[serde(default)]
    pub sources: Option<Vec<String>>,
    #[serde(default)]
    pub evidence: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExtractionRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtractionResponse {
    pub claims: Vec<ClaimRecord>,
    #[serde(default)]
    pub processing_time: f64,
    #[serde(default)]
    pub total_claims: Option<usize>,
    #[serde(default)]
    pub metadata: Option<ExtractionMetadata>,
}

/// Bookkeeping returned alongside an extraction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Length of the submitted text
    #[serde(default)]
    pub text_length: usize,
    /// Which extractor the backend used
    #[serde(default)]
    pub extraction_method: String,
    /// Number of sources consulted
    #[serde(default)]
    pub verification_sources: usize,
}

#[derive(Debug, Serialize)]
pub(crate) struct VerificationRequest<'a> {
    pub claim_text: &'a str,
    pub claim_type: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VerificationResponse {
    #[allow(dead_code)]
    #[serde(default)]
    pub claim_id: String,
    pub status: String,
    pub confidence: f64,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub evidence: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A rewrite tone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tone {
    /// Name passed back in [`RewriteRequest::tone`]
    pub name: String,
    /// One-line description
    #[serde(default)]
    pub description: String,
    /// Sample input
    #[serde(default)]
    pub example_input: String,
    /// Sample output
    #[serde(default)]
    pub example_output: String,
    /// Display emoji
    #[serde(default)]
    pub emoji: String,
}

impl Tone {
    fn named(name: &str, description: &str, emoji: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            example_input: String::new(),
            example_output: String::new(),
            emoji: emoji.to_string(),
        }
    }

    /// Tones offered when the backend cannot be asked
    pub fn fallback() -> Vec<Tone> {
        vec![
            Tone::named("Casual", "Friendly and relaxed", "😊"),
            Tone::named("Professional", "Business-appropriate", "💼"),
            Tone::named("Supportive", "Encouraging", "🤗"),
            Tone::named("Sarcastic", "Witty and ironic", "😏"),
            Tone::named("Respectful", "Polite", "🙏"),
            Tone::named("Empathetic", "Understanding", "💙"),
            Tone::named("Funny", "Humorous", "😂"),
            Tone::named("Motivational", "Inspiring", "🚀"),
        ]
    }
}

/// A target platform for rewrites
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Identifier passed back in [`RewriteRequest::platform`]
    pub id: String,
    /// Display name
    pub name: String,
    /// Hard character limit
    pub char_limit: usize,
    /// Human hint such as "71-100 characters"
    #[serde(default)]
    pub optimal_length: String,
    /// Maximum hashtags worth using
    #[serde(default)]
    pub hashtag_limit: usize,
    /// Tones that perform well here
    #[serde(default)]
    pub best_tones: Vec<String>,
    /// Whether emoji are welcome
    #[serde(default)]
    pub emoji_friendly: bool,
}

pub(crate) type PlatformMap = BTreeMap<String, Platform>;

/// Body of `POST /rewrite`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRequest {
    /// Text to rewrite
    pub comment: String,
    /// Tone name
    pub tone: String,
    /// Optional surrounding context
    pub context: Option<String>,
    /// Optional persona to write as
    pub persona: Option<String>,
    /// Platform id
    pub platform: String,
}

impl RewriteRequest {
    /// Rewrite `comment` in `tone` for the general platform
    pub fn new(comment: impl Into<String>, tone: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
            tone: tone.into(),
            context: None,
            persona: None,
            platform: "general".to_string(),
        }
    }
}

/// Result of a rewrite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteResponse {
    /// Input as submitted
    pub original: String,
    /// Rewritten text
    pub rewritten: String,
    /// Tone applied
    pub tone: String,
    /// Persona applied, if any
    #[serde(default)]
    pub persona: Option<String>,
    /// Notes on what changed
    #[serde(default)]
    pub explanation: Vec<String>,
    /// Seconds spent on the backend
    #[serde(default)]
    pub processing_time: f64,
    /// Model that produced the rewrite
    #[serde(default)]
    pub model_used: String,
    /// Length check against the platform
    #[serde(default)]
    pub platform_info: Option<PlatformInfo>,
    /// Hashtags worth adding
    #[serde(default)]
    pub suggested_hashtags: Option<Vec<String>>,
    /// Engagement guess
    #[serde(default)]
    pub engagement_prediction: Option<EngagementPrediction>,
}

/// Platform length check attached to a rewrite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
    /// Platform display name
    pub name: String,
    /// Hard character limit
    pub char_limit: usize,
    /// Length of the rewritten text
    pub current_length: usize,
    /// Whether the rewrite fits
    pub within_limit: bool,
    /// Human hint such as "71-100 characters"
    #[serde(default)]
    pub optimal_length: String,
}

/// Engagement guess attached to a rewrite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementPrediction {
    /// Score out of 100
    pub virality_score: f64,
    /// Expected likes
    pub predicted_likes: u64,
    /// Expected shares
    pub predicted_shares: u64,
    /// Expected replies
    pub predicted_comments: u64,
    /// Suggested posting time
    #[serde(default)]
    pub optimal_post_time: String,
    /// "low", "medium", "high" and so on
    #[serde(default)]
    pub engagement_level: String,
}

/// A comment fetched from Reddit or YouTube
///
/// The two sources name their fields differently; [`Comment::text`] and
/// [`Comment::author`] smooth that over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment text (YouTube)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Comment text (Reddit)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Author (Reddit)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Author (YouTube)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_display_name: Option<String>,
    /// Title of the parent post (Reddit)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_title: Option<String>,
    /// Title of the parent video (YouTube)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_title: Option<String>,
    /// Upvote score (Reddit)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    /// Like count (YouTube)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like_count: Option<i64>,
}

impl Comment {
    /// Comment text from whichever field the source filled in
    pub fn text(&self) -> &str {
        self.text
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(self.body.as_deref())
            .unwrap_or("")
    }

    /// Author name, or "Anonymous"
    pub fn author(&self) -> &str {
        self.author
            .as_deref()
            .filter(|a| !a.is_empty())
            .or(self.author_display_name.as_deref())
            .filter(|a| !a.is_empty())
            .unwrap_or("Anonymous")
    }

    /// Title of the post or video the comment belongs to
    pub fn origin(&self) -> Option<&str> {
        self.post_title.as_deref().or(self.video_title.as_deref())
    }

    /// Score or like count
    pub fn popularity(&self) -> Option<i64> {
        self.score.or(self.like_count)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentsResponse {
    #[serde(default)]
    pub comments: Option<Vec<Comment>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_tones() {
        let tones = Tone::fallback();
        assert_eq!(tones.len(), 8);
        assert_eq!(tones[0].name, "Casual");
        assert_eq!(tones[7].emoji, "🚀");
    }

    #[test]
    fn test_comment_field_fallbacks() {
        let reddit: Comment = serde_json::from_value(serde_json::json!({
            "body": "Great post",
            "author": "u1",
            "score": 12,
            "post_title": "Rust 2.0?"
        }))
        .unwrap();
        assert_eq!(reddit.text(), "Great post");
        assert_eq!(reddit.author(), "u1");
        assert_eq!(reddit.origin(), Some("Rust 2.0?"));
        assert_eq!(reddit.popularity(), Some(12));

        let youtube: Comment = serde_json::from_value(serde_json::json!({
            "text": "Nice video",
            "author_display_name": "Viewer",
            "like_count": 3
        }))
        .unwrap();
        assert_eq!(youtube.text(), "Nice video");
        assert_eq!(youtube.author(), "Viewer");
        assert_eq!(youtube.popularity(), Some(3));

        assert_eq!(Comment::default().author(), "Anonymous");
        assert_eq!(Comment::default().text(), "");
    }

    #[test]
    fn test_rewrite_request_defaults() {
        let req = RewriteRequest::new("hello", "Casual");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["platform"], "general");
        assert!(json["persona"].is_null());
    }

    #[test]
    fn test_rewrite_response_minimal() {
        let resp: RewriteResponse = serde_json::from_value(serde_json::json!({
            "original": "hi",
            "rewritten": "Hello there!",
            "tone": "Professional"
        }))
        .unwrap();
        assert!(resp.platform_info.is_none());
        assert!(resp.explanation.is_empty());
    }
}

//! Claim module - an assertion found in a text buffer

use crate::confidence::Confidence;
use crate::span::Span;
use std::fmt;

/// Unique identifier for a claim
///
/// Claims produced locally get a UUIDv7 string. Claims returned by the
/// backend keep whatever identifier the server assigned.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClaimId(String);

impl ClaimId {
    /// Generate a fresh UUIDv7-based identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use factlens_domain::ClaimId;
    ///
    /// let a = ClaimId::generate();
    /// let b = ClaimId::generate();
    /// assert_ne!(a, b);
    /// ```
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// Wrap an identifier received from elsewhere
    ///
    /// Identifiers are opaque, but must not be blank.
    pub fn parse(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("claim id must not be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for tables
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What kind of assertion a claim makes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimCategory {
    /// A calendar date or year
    Date,
    /// A quantity, price or percentage
    Number,
    /// A named organisation, product or person
    Entity,
    /// A free-form factual statement
    Fact,
}

impl ClaimCategory {
    /// Wire name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimCategory::Date => "date",
            ClaimCategory::Number => "number",
            ClaimCategory::Entity => "entity",
            ClaimCategory::Fact => "fact",
        }
    }

    /// Parse a wire name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "date" => Some(ClaimCategory::Date),
            "number" => Some(ClaimCategory::Number),
            "entity" => Some(ClaimCategory::Entity),
            "fact" => Some(ClaimCategory::Fact),
            _ => None,
        }
    }
}

impl std::str::FromStr for ClaimCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid claim category: {}", s))
    }
}

impl fmt::Display for ClaimCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verification state of a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimStatus {
    /// Supported by the consulted sources
    Verified,
    /// Not enough evidence either way
    Unverified,
    /// Contradicted by the consulted sources
    False,
    /// Not yet checked
    Pending,
}

impl ClaimStatus {
    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Verified => "verified",
            ClaimStatus::Unverified => "unverified",
            ClaimStatus::False => "false",
            ClaimStatus::Pending => "pending",
        }
    }

    /// Parse a wire name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "verified" => Some(ClaimStatus::Verified),
            "unverified" => Some(ClaimStatus::Unverified),
            "false" => Some(ClaimStatus::False),
            "pending" => Some(ClaimStatus::Pending),
            _ => None,
        }
    }
}

impl std::str::FromStr for ClaimStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid claim status: {}", s))
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of checking a single claim
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// Resulting status
    pub status: ClaimStatus,
    /// How sure the verifier is
    pub confidence: Confidence,
    /// Human-readable justification, if any
    pub evidence: Option<String>,
    /// Citations consulted
    pub sources: Vec<String>,
}

impl Verdict {
    /// A verdict with no evidence or sources
    pub fn new(status: ClaimStatus, confidence: Confidence) -> Self {
        Self {
            status,
            confidence,
            evidence: None,
            sources: Vec::new(),
        }
    }
}

/// A claim - an assertion tied to a span of a text buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,

    /// The matched text
    pub text: String,

    /// Where the text sits in the buffer
    pub span: Span,

    /// Kind of assertion
    pub category: ClaimCategory,

    /// Verification state
    pub status: ClaimStatus,

    /// Confidence in `status`
    pub confidence: Confidence,

    /// Citations, possibly empty
    pub sources: Vec<String>,

    /// Supporting or refuting evidence
    pub evidence: Option<String>,
}

impl Claim {
    /// Create a pending claim with zero confidence
    pub fn new(id: ClaimId, text: impl Into<String>, span: Span, category: ClaimCategory) -> Self {
        Self {
            id,
            text: text.into(),
            span,
            category,
            status: ClaimStatus::Pending,
            confidence: Confidence::default(),
            sources: Vec::new(),
            evidence: None,
        }
    }

    /// Overwrite the verification fields from a verdict
    pub fn apply_verdict(&mut self, verdict: Verdict) {
        self.status = verdict.status;
        self.confidence = verdict.confidence;
        self.evidence = verdict.evidence;
        self.sources = verdict.sources;
    }

    /// Builder form of [`Claim::apply_verdict`]
    pub fn with_verdict(mut self, verdict: Verdict) -> Self {
        self.apply_verdict(verdict);
        self
    }
}

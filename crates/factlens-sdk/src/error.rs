//! Error types for the FactLens SDK.

use std::fmt;
use thiserror::Error;

/// Remote operations exposed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `POST /extract-claims`
    ExtractClaims,
    /// `POST /verify-claim/{id}`
    VerifyClaim,
    /// `GET /sources`
    FetchSources,
    /// `GET /health`
    HealthCheck,
    /// `GET /tones`
    FetchTones,
    /// `GET /platforms`
    FetchPlatforms,
    /// `POST /rewrite`
    Rewrite,
    /// `GET /api/comments/reddit`
    RedditComments,
    /// `GET /api/comments/youtube`
    YoutubeComments,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Operation::ExtractClaims => "extract claims from text",
            Operation::VerifyClaim => "verify claim",
            Operation::FetchSources => "fetch available sources",
            Operation::HealthCheck => "check API health",
            Operation::FetchTones => "fetch tones",
            Operation::FetchPlatforms => "fetch platforms",
            Operation::Rewrite => "rewrite comment",
            Operation::RedditComments => "fetch Reddit comments",
            Operation::YoutubeComments => "fetch YouTube comments",
        };
        f.write_str(text)
    }
}

/// What went wrong underneath a failed operation
#[derive(Debug, Error)]
pub enum FailureCause {
    /// Connection refused, DNS failure, body read error
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("HTTP {status}: {body}")]
    Status {
        /// Response status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Response body did not match the expected shape
    #[error("malformed response: {0}")]
    Decode(String),

    /// Backend answered 2xx with an `{error}` payload
    #[error("backend reported: {0}")]
    Api(String),

    /// Backend answered with nothing to show
    #[error("no results")]
    Empty,
}

impl From<serde_json::Error> for FailureCause {
    fn from(e: serde_json::Error) -> Self {
        FailureCause::Decode(e.to_string())
    }
}

/// SDK operation errors
#[derive(Debug, Error)]
pub enum SdkError {
    /// A remote call failed; prior state should be kept
    #[error("Failed to {operation}: {cause}")]
    OperationFailed {
        /// The operation attempted
        operation: Operation,
        /// Underlying failure
        #[source]
        cause: FailureCause,
    },

    /// Client configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SdkError {
    /// Wrap `cause` and log the failure
    pub(crate) fn failed(operation: Operation, cause: impl Into<FailureCause>) -> Self {
        let cause = cause.into();
        tracing::error!(%operation, error = %cause, "Backend request failed");
        SdkError::OperationFailed { operation, cause }
    }

    /// The failed operation, if this is an operation failure
    pub fn operation(&self) -> Option<Operation> {
        match self {
            SdkError::OperationFailed { operation, .. } => Some(*operation),
            SdkError::InvalidConfig(_) => None,
        }
    }

    /// The underlying cause, if this is an operation failure
    pub fn cause(&self) -> Option<&FailureCause> {
        match self {
            SdkError::OperationFailed { cause, .. } => Some(cause),
            SdkError::InvalidConfig(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_failed_message() {
        let err = SdkError::OperationFailed {
            operation: Operation::ExtractClaims,
            cause: FailureCause::Status {
                status: 500,
                body: "boom".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Failed to extract claims from text: HTTP 500: boom"
        );
        assert_eq!(err.operation(), Some(Operation::ExtractClaims));
    }

    #[test]
    fn test_legacy_operation_wording() {
        assert_eq!(Operation::VerifyClaim.to_string(), "verify claim");
        assert_eq!(Operation::FetchSources.to_string(), "fetch available sources");
        assert_eq!(Operation::HealthCheck.to_string(), "check API health");
    }

    #[test]
    fn test_invalid_config_has_no_cause() {
        let err = SdkError::InvalidConfig("bad".to_string());
        assert!(err.cause().is_none());
        assert!(err.operation().is_none());
    }
}

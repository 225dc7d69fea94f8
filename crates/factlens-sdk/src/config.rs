//! Client configuration.

use crate::error::SdkError;
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Backend used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the base URL
pub const API_URL_ENV: &str = "FACTLENS_API_URL";

/// Where the backend lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL, e.g. `http://localhost:8000`
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Config pointing at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read `FACTLENS_API_URL`, falling back to the default
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Parse the base URL, rejecting anything that is not http(s)
    pub fn validate(&self) -> Result<Url, SdkError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| SdkError::InvalidConfig(format!("{}: {}", self.base_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(SdkError::InvalidConfig(format!(
                "unsupported scheme '{}' in {}",
                url.scheme(),
                self.base_url
            )));
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_localhost() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_garbage() {
        assert!(matches!(
            ClientConfig::new("not a url").validate(),
            Err(SdkError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_other_schemes() {
        assert!(matches!(
            ClientConfig::new("ftp://example.com").validate(),
            Err(SdkError::InvalidConfig(_))
        ));
    }
}

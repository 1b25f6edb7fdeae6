//! Structured error types for fetchtour-core.
//!
//! The binaries wrap these in `anyhow` for context; the widgets collapse
//! them into a single user-facing message and log the detail.

use std::path::PathBuf;
use thiserror::Error;

/// Failure talking to the posts service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request never produced a status (DNS, connect, timeout, TLS)
    #[error("Transport error for {method} {url}: {source}")]
    Transport {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("{method} {url} returned HTTP {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    /// Response body could not be parsed
    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Base URL is unusable
    #[error("Invalid base URL '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Result type alias for client operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn transport(method: &'static str, url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            method,
            url: url.into(),
            source,
        }
    }

    pub fn status(method: &'static str, url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            method,
            url: url.into(),
            status,
        }
    }

    pub fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }

    pub fn invalid_base_url(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBaseUrl {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// HTTP status carried by the error, if the server answered at all
    pub fn http_status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure loading or saving `config.toml`
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?} (invalid TOML): {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write config file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ApiError::status("PUT", "http://localhost/posts/1", 500);
        assert_eq!(err.to_string(), "PUT http://localhost/posts/1 returned HTTP 500");
        assert_eq!(err.http_status(), Some(500));
    }

    #[test]
    fn test_decode_error_has_no_status() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ApiError::decode("created post", source);
        assert!(err.to_string().starts_with("Failed to decode created post"));
        assert_eq!(err.http_status(), None);
    }

    #[test]
    fn test_invalid_base_url_display() {
        let err = ApiError::invalid_base_url("ftp://x", "scheme must be http or https");
        assert!(err.to_string().contains("ftp://x"));
    }
}

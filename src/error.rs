//! Error types for swissvote-rs.
//!
//! [`FetchError`] is the closed failure taxonomy of the two voting
//! operations. Each variant is constructed at the one place its failure
//! class can occur; callers see it folded into an
//! [`OperationResult`](crate::core::OperationResult) envelope.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A voting operation failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Client configuration was invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A CLI command failed.
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Failure classes of the catalog fetch and summary resolution.
///
/// `Transport` is the only retryable class: a malformed or unexpected
/// payload will not improve on a second attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection error, timeout, or non-2xx HTTP status.
    #[error("Error making API request: {0}")]
    Transport(String),

    /// The response body was not valid JSON.
    #[error("Error parsing JSON response: {0}")]
    Decode(String),

    /// Well-formed JSON missing the expected envelope or structure.
    #[error("{0}")]
    Schema(String),

    /// No catalog resource matched the search term.
    #[error("No voting data found for proposal: {proposal}")]
    NotFound {
        /// The proposal name as given by the caller.
        proposal: String,
    },

    /// The proposal name could not be turned into a search term.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Anything else, e.g. a required result field missing from the payload.
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl FetchError {
    /// Returns the machine-readable failure class.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Schema(_) => ErrorKind::Schema,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// Returns `true` if repeating the call may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Transport(format!("request timed out: {err}"))
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Failure class carried in the operation envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Network or HTTP-status failure.
    Transport,
    /// Malformed JSON.
    Decode,
    /// JSON without the expected fields or envelope flags.
    Schema,
    /// Search term matched nothing.
    NotFound,
    /// Unusable proposal name.
    InvalidInput,
    /// Catch-all.
    Unexpected,
}

impl ErrorKind {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Decode => "decode",
            Self::Schema => "schema",
            Self::NotFound => "not_found",
            Self::InvalidInput => "invalid_input",
            Self::Unexpected => "unexpected",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invalid [`ClientConfig`](crate::client::ClientConfig) values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required string setting was empty.
    #[error("{field} must not be empty")]
    Empty {
        /// Name of the setting.
        field: &'static str,
    },

    /// The request timeout was zero.
    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// CLI command errors.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Command execution failed.
    #[error("{0}")]
    ExecutionFailed(String),
}

/// Tool dispatch errors.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool execution failed before the operation could run.
    #[error("tool '{name}' failed: {message}")]
    Execution {
        /// Tool name.
        name: String,
        /// Failure detail.
        message: String,
    },
}

/// Result type alias for swissvote-rs.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages() {
        let err = FetchError::Transport("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Error making API request: connection refused"
        );

        let err = FetchError::Decode("expected value at line 1".to_string());
        assert!(err.to_string().starts_with("Error parsing JSON response: "));

        let err = FetchError::NotFound {
            proposal: "Some Initiative".to_string(),
        };
        assert!(err.to_string().contains("Some Initiative"));

        let err = FetchError::Schema("API request was not successful".to_string());
        assert_eq!(err.to_string(), "API request was not successful");
    }

    #[test]
    fn test_fetch_error_kind() {
        assert_eq!(
            FetchError::Transport(String::new()).kind(),
            ErrorKind::Transport
        );
        assert_eq!(FetchError::Decode(String::new()).kind(), ErrorKind::Decode);
        assert_eq!(FetchError::Schema(String::new()).kind(), ErrorKind::Schema);
        assert_eq!(
            FetchError::NotFound {
                proposal: String::new()
            }
            .kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            FetchError::InvalidInput(String::new()).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            FetchError::Unexpected(String::new()).kind(),
            ErrorKind::Unexpected
        );
    }

    #[test]
    fn test_only_transport_is_retryable() {
        assert!(FetchError::Transport("timeout".to_string()).is_retryable());
        assert!(!FetchError::Decode("bad".to_string()).is_retryable());
        assert!(!FetchError::Schema("bad".to_string()).is_retryable());
    }

    #[test]
    fn test_error_kind_serialization() {
        let json = serde_json::to_string(&ErrorKind::NotFound).unwrap_or_default();
        assert_eq!(json, "\"not_found\"");
        assert_eq!(ErrorKind::InvalidInput.to_string(), "invalid_input");
    }

    #[test]
    fn test_top_level_from() {
        let err: Error = FetchError::Decode("x".to_string()).into();
        assert!(matches!(err, Error::Fetch(FetchError::Decode(_))));

        let err: Error = ConfigError::ZeroTimeout.into();
        assert!(err.to_string().contains("timeout"));
    }
}

//! Uniform result envelope returned by every public voting operation.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, FetchError};

/// `{success, error, error_kind, payload}` envelope.
///
/// On success only `payload` is set; on failure only `error` and
/// `error_kind` are. Operations always return an envelope and never let a
/// failure escape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResult<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable failure description.
    pub error: Option<String>,
    /// Machine-readable failure class.
    pub error_kind: Option<ErrorKind>,
    /// Result of a successful operation.
    pub payload: Option<T>,
}

impl<T> OperationResult<T> {
    /// Wraps a successful payload.
    pub const fn ok(payload: T) -> Self {
        Self {
            success: true,
            error: None,
            error_kind: None,
            payload: Some(payload),
        }
    }

    /// Wraps a failure.
    pub fn err(error: &FetchError) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            error_kind: Some(error.kind()),
            payload: None,
        }
    }
}

impl<T> From<Result<T, FetchError>> for OperationResult<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(payload) => Self::ok(payload),
            Err(e) => Self::err(&e),
        }
    }
}

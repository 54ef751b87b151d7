use std::fmt;

use serde_json::Value;
use taskify_core::error::ValidationError;

/// Error raised by any API call.
///
/// Callers branch on [`ApiError::kind`] to tell a rejected request
/// ([`ErrorKind::Http`]) from a response this client cannot understand
/// ([`ErrorKind::Validation`]).
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status code.
    #[error("API error ({status}): {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// `message` from the error body, or a generic fallback.
        message: String,
        /// The error body when it was valid JSON.
        details: Option<Value>,
    },

    /// The backend answered 2xx with a body that does not match the
    /// expected shape.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for API call results.
pub type ApiResult<T> = Result<T, ApiError>;

/// Discriminant of [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Transport,
    Http,
    Validation,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Transport => "TRANSPORT",
            ErrorKind::Http => "HTTP",
            ErrorKind::Validation => "VALIDATION",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ApiError {
    /// Build an [`ApiError::Http`] from a non-2xx status and its raw body.
    ///
    /// The message is taken from a `{ "message": string }` body when
    /// present; otherwise it falls back to a generic message. The status is
    /// kept regardless of the body's shape.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let details: Option<Value> = serde_json::from_slice(body).ok();
        let message = details
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        ApiError::Http {
            status,
            message,
            details,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Transport(_) => ErrorKind::Transport,
            ApiError::Http { .. } => ErrorKind::Http,
            ApiError::Validation(_) => ErrorKind::Validation,
        }
    }

    /// HTTP status for [`ApiError::Http`]; `None` for the other kinds.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable message suitable for showing to a user.
    pub fn message(&self) -> String {
        match self {
            ApiError::Transport(err) => err.to_string(),
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Validation(err) => err.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

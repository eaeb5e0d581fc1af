use std::time::Duration;

use thiserror::Error;

/// Coarse classification of an [`Error`].
///
/// Callers that only need to branch on the failure family (re-authenticate,
/// report a missing resource, surface a validation message) match on this
/// instead of the full variant set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Invalid credentials or an expired/invalid bearer token.
    AuthenticationFailed,
    /// The referenced token does not exist in scope.
    NotFound,
    /// The server rejected the request payload.
    ValidationError,
    /// Connection failure or a malformed response.
    TransportError,
    /// The request did not complete within the configured timeout.
    Timeout,
    /// Any other non-2xx status.
    UnexpectedServerError,
    /// Rejected locally before any request was issued.
    InvalidRequest,
}

/// Top-level error type for the `sitewhere-api` crate.
///
/// Every failure carries the HTTP status and, where one was returned,
/// the raw body so callers can diagnose what the platform said.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Credentials were rejected, missing, or the bearer token expired.
    #[error("Authentication failed: {message}")]
    Authentication {
        status: Option<u16>,
        message: String,
    },

    // ── Remote API ──────────────────────────────────────────────────
    /// HTTP 404 for the requested token.
    #[error("Not found: {message}")]
    NotFound { message: String, body: String },

    /// HTTP 400/409 -- the message is the server's, verbatim.
    #[error("Validation failed (HTTP {status}): {message}")]
    Validation { status: u16, message: String },

    /// Any other non-success status.
    #[error("Unexpected server response (HTTP {status}): {message}")]
    Server {
        status: u16,
        message: String,
        body: String,
    },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request timed out.
    #[error("Request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// The request was rejected before it was sent.
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },
}

impl Error {
    /// Map this error onto its [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Authentication { .. } => ErrorKind::AuthenticationFailed,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Validation { .. } => ErrorKind::ValidationError,
            Self::Server { .. } => ErrorKind::UnexpectedServerError,
            Self::Transport(e) if e.is_timeout() => ErrorKind::Timeout,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Transport(_)
            | Self::InvalidUrl(_)
            | Self::Tls(_)
            | Self::Deserialization { .. } => ErrorKind::TransportError,
            Self::InvalidRequest { .. } => ErrorKind::InvalidRequest,
        }
    }

    /// Returns `true` if this error indicates the token expired or was
    /// revoked and fetching a new one might resolve it.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Authentication { status: Some(401), .. })
    }

    /// Returns `true` if this is a transient error worth retrying.
    ///
    /// The client never retries on its own; this is a hint for callers
    /// that implement their own policy.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout { .. } => true,
            Self::Server { status, .. } => matches!(status, 502..=504),
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The HTTP status that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. } => *status,
            Self::NotFound { .. } => Some(404),
            Self::Validation { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

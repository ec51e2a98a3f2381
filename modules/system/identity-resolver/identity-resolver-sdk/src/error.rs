//! Error types for identity collaborators.

use thiserror::Error;

/// Errors from [`crate::IdentityProviderClient`].
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// The provider could not resolve the current session.
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),

    /// The token result could not be fetched or refreshed.
    #[error("token error: {0}")]
    Token(String),
}

/// Errors from [`crate::AdminVerifierClient`].
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No credential was presented.
    #[error("no auth token provided")]
    MissingCredential,

    /// The credential is malformed, expired, or unknown.
    #[error("invalid auth token: {0}")]
    InvalidCredential(String),

    /// The credential is valid but lacks the required privilege.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// The verification service is not configured or not reachable.
    #[error("verification unavailable: {0}")]
    Unavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

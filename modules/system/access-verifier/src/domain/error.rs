use identity_resolver_sdk::AuthError;
use thiserror::Error;

/// Verification failed and the fallback is `deny`.
#[derive(Debug, Clone, Error)]
pub enum VerifyError {
    #[error("no auth token provided")]
    MissingCredential,

    #[error("invalid auth token: {0}")]
    InvalidCredential(String),

    #[error("admin access required: {0}")]
    Forbidden(String),

    #[error("verification unavailable: {0}")]
    Unavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<AuthError> for VerifyError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MissingCredential => Self::MissingCredential,
            AuthError::InvalidCredential(msg) => Self::InvalidCredential(msg),
            AuthError::Forbidden(msg) => Self::Forbidden(msg),
            AuthError::Unavailable(msg) => Self::Unavailable(msg),
            AuthError::Internal(msg) => Self::Internal(msg),
        }
    }
}

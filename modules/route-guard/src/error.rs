//! Guard error types.

use identity_resolver_sdk::IdentityError;
use portal_security::ClaimDecodeError;
use thiserror::Error;

/// Failures while evaluating a guard.
///
/// Never surfaced to the user: each guard turns them into a decision
/// according to its [`crate::ErrorPolicy`] and logs them.
#[derive(Debug, Error)]
pub enum GuardError {
    /// The current session could not be resolved.
    #[error("identity fetch failed: {0}")]
    IdentityFetch(#[source] IdentityError),

    /// The token result could not be fetched or refreshed.
    #[error("token result unavailable: {0}")]
    TokenResult(#[source] IdentityError),

    /// The token result was fetched but its claims could not be decoded.
    #[error(transparent)]
    ClaimDecode(#[from] ClaimDecodeError),
}

/// Invalid guard registration.
#[derive(Debug, Error)]
pub enum GuardConfigError {
    #[error("failed to insert route pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: matchit::InsertError,
    },
}

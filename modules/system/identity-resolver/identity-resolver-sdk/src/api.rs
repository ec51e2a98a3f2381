//! Collaborator traits.
//!
//! The portal never constructs or mutates identities itself; it asks these
//! collaborators and makes decisions from what they return.

use async_trait::async_trait;
use portal_security::{Identity, RawClaims};

use crate::error::{AuthError, IdentityError};
use crate::models::VerifiedAdmin;

/// Session-side identity provider.
///
/// Consumed by the route guards before a navigation completes.
#[async_trait]
pub trait IdentityProviderClient: Send + Sync {
    /// Resolve the identity of the current session.
    ///
    /// Returns `Ok(None)` when nobody is signed in.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the provider cannot be reached
    async fn current_identity(&self) -> Result<Option<Identity>, IdentityError>;

    /// Fetch the claim map from the identity's token result.
    ///
    /// # Arguments
    ///
    /// * `identity` - Identity previously returned by [`Self::current_identity`]
    /// * `force_refresh` - Refresh the token first so the claims are current
    ///
    /// # Errors
    ///
    /// - `Token` if the token result cannot be obtained or refreshed
    /// - `Unavailable` if the provider cannot be reached
    async fn token_claims(
        &self,
        identity: &Identity,
        force_refresh: bool,
    ) -> Result<RawClaims, IdentityError>;
}

/// Server-side credential verification.
///
/// Consumed by the access verifier endpoint.
#[async_trait]
pub trait AdminVerifierClient: Send + Sync {
    /// Validate a bearer credential and check it carries platform admin privilege.
    ///
    /// # Arguments
    ///
    /// * `bearer_token` - The raw token (without the "Bearer " prefix)
    ///
    /// # Errors
    ///
    /// - `MissingCredential` if the token is empty
    /// - `InvalidCredential` if the token is malformed, expired, or unknown
    /// - `Forbidden` if the token is valid but lacks admin privilege
    /// - `Unavailable` / `Internal` if verification could not be performed
    async fn verify_admin_access(&self, bearer_token: &str) -> Result<VerifiedAdmin, AuthError>;
}

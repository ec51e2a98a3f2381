//! Identity Resolver SDK
//!
//! Contracts for the identity collaborators the portal consumes:
//!
//! - [`IdentityProviderClient`] - current session identity and its token claims
//! - [`AdminVerifierClient`] - server-side verification of a bearer credential
//! - [`VerifiedAdmin`] - decoded, admin-checked credential
//! - [`IdentityError`] / [`AuthError`] - error types
//!
//! ## Usage
//!
//! ```ignore
//! use identity_resolver_sdk::IdentityProviderClient;
//!
//! let Some(identity) = provider.current_identity().await? else {
//!     return Ok(None);
//! };
//! let raw = provider.token_claims(&identity, true).await?;
//! ```

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::{AdminVerifierClient, IdentityProviderClient};
pub use error::{AuthError, IdentityError};
pub use models::VerifiedAdmin;

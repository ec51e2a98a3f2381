#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Identity Resolver Plugin
//!
//! Static token-to-identity mapping for development and testing. Implements
//! both identity collaborators: the session-side [`IdentityProviderClient`]
//! and the server-side [`AdminVerifierClient`].
//!
//! ## Modes
//!
//! - **`static_tokens`** (default): Maps specific tokens to specific identities.
//!   Unknown tokens are rejected.
//!
//! - **`accept_all`**: Accepts any non-empty token and returns the configured
//!   default identity.
//!
//! ## Configuration
//!
//! ```yaml
//! identity:
//!   mode: static_tokens
//!   session_token: "token-admin"
//!   tokens:
//!     - token: "token-admin"
//!       identity:
//!         uid: "u1"
//!         claims: { role: "admin", tenantId: "ilytat-hq" }
//! ```
//!
//! [`IdentityProviderClient`]: identity_resolver_sdk::IdentityProviderClient
//! [`AdminVerifierClient`]: identity_resolver_sdk::AdminVerifierClient

pub mod config;
pub mod domain;
pub mod module;

pub use module::StaticIdentityPlugin;

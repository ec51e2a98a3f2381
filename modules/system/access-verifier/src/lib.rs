#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Server access verifier.
//!
//! One endpoint, `GET /api/admin/verify-access`, that admin pages call on load
//! to get an authoritative access decision independent of the client-side
//! route guard. Credential validation is delegated to an
//! [`AdminVerifierClient`](identity_resolver_sdk::AdminVerifierClient).

pub mod api;
pub mod config;
pub mod domain;
pub mod middleware;
pub mod module;

pub use config::{AccessVerifierConfig, VerificationFallback};
pub use domain::error::VerifyError;
pub use domain::model::AccessDecision;
pub use domain::service::AccessVerifier;
pub use module::AccessVerifierModule;

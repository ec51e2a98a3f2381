//! Domain models for identity collaborators.

use portal_security::Claims;

/// A credential that passed platform admin verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedAdmin {
    /// Subject identifier from the decoded token.
    pub uid: String,
    /// Access-control claims carried by the token.
    pub claims: Claims,
    /// Caller holds `super` inside the platform tenant.
    pub is_super: bool,
}

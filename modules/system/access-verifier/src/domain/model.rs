use chrono::{DateTime, Utc};

/// Role label reported for granted decisions.
pub const ADMIN_ROLE: &str = "admin";
/// Role label reported for denied decisions.
pub const NO_ROLE: &str = "none";

/// The verifier's judgment. Computed per request and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDecision {
    pub access: bool,
    pub verified_at: DateTime<Utc>,
    pub role: String,
    pub uid: Option<String>,
}

impl AccessDecision {
    /// Verified admin credential.
    #[must_use]
    pub fn granted(verified_at: DateTime<Utc>, uid: String) -> Self {
        Self {
            access: true,
            verified_at,
            role: ADMIN_ROLE.to_owned(),
            uid: Some(uid),
        }
    }

    /// Grant issued by the development fallback; no subject is known.
    #[must_use]
    pub fn development_grant(verified_at: DateTime<Utc>) -> Self {
        Self {
            access: true,
            verified_at,
            role: ADMIN_ROLE.to_owned(),
            uid: None,
        }
    }

    #[must_use]
    pub fn denied(verified_at: DateTime<Utc>) -> Self {
        Self {
            access: false,
            verified_at,
            role: NO_ROLE.to_owned(),
            uid: None,
        }
    }
}

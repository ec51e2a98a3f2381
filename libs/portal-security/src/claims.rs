//! Typed custom claims.
//!
//! Token results carry an untyped claim map. [`Claims::decode`] turns the
//! keys the portal cares about into a closed structure and rejects values of
//! the wrong shape instead of letting them fall through as "no privilege".

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::PLATFORM_TENANT_ID;

/// Claim map as issued by the identity provider.
pub type RawClaims = serde_json::Map<String, serde_json::Value>;

/// Roles a portal user can hold.
///
/// Only `admin` and `super` carry privilege here. Any other role string the
/// issuer uses (`viewer`, `staff`, `editor`, ...) decodes to [`Role::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Super,
    Member,
    User,
    Other(String),
}

impl Role {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Super => "super",
            Self::Member => "member",
            Self::User => "user",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        match name.as_str() {
            "admin" => Self::Admin,
            "super" => Self::Super,
            "member" => Self::Member,
            "user" => Self::User,
            _ => Self::Other(name),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claim extraction failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClaimDecodeError {
    /// A known claim has the wrong JSON type.
    #[error("malformed claims: {0}")]
    Malformed(String),
}

/// Custom claims relevant to access control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Primary role.
    #[serde(default)]
    pub role: Option<Role>,
    /// Additional roles (some issuers emit a list instead of a single role).
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Convenience admin flag.
    #[serde(default)]
    pub admin: bool,
    /// Tenant the subject belongs to.
    #[serde(default)]
    pub tenant_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireClaims {
    #[serde(default)]
    role: Option<Role>,
    #[serde(default)]
    roles: Option<Vec<Role>>,
    #[serde(default)]
    admin: Option<bool>,
    #[serde(default)]
    tenant_id: Option<String>,
}

impl Claims {
    /// Decode the access-control claims from a raw claim map.
    ///
    /// Keys other than `role`, `roles`, `admin` and `tenantId` are ignored.
    ///
    /// # Errors
    /// Returns [`ClaimDecodeError::Malformed`] when one of those keys holds a
    /// value of the wrong JSON type. Unrecognised role names are kept as
    /// [`Role::Other`].
    pub fn decode(raw: &RawClaims) -> Result<Self, ClaimDecodeError> {
        let wire: WireClaims = serde_json::from_value(serde_json::Value::Object(raw.clone()))
            .map_err(|e| ClaimDecodeError::Malformed(e.to_string()))?;

        Ok(Self {
            role: wire.role,
            roles: wire.roles.unwrap_or_default(),
            admin: wire.admin.unwrap_or(false),
            tenant_id: wire.tenant_id,
        })
    }

    /// True if `role` is `role` or `roles` contains it.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.role.as_ref() == Some(&role) || self.roles.contains(&role)
    }

    /// True if the subject belongs to the platform tenant.
    #[must_use]
    pub fn is_platform_tenant(&self) -> bool {
        self.tenant_id.as_deref() == Some(PLATFORM_TENANT_ID)
    }
}

//! Configuration for the static identity plugin.

use portal_security::RawClaims;
use portal_security::constants::PLATFORM_TENANT_ID;
use serde::{Deserialize, Serialize};

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticIdentityPluginConfig {
    /// Token resolution mode.
    pub mode: IdentityMode,

    /// Identity returned in `accept_all` mode.
    pub default_identity: IdentityConfig,

    /// Static token-to-identity mappings for `static_tokens` mode.
    pub tokens: Vec<TokenMapping>,

    /// Token the current session is signed in with. `None` means signed out.
    pub session_token: Option<String>,
}

impl Default for StaticIdentityPluginConfig {
    fn default() -> Self {
        Self {
            mode: IdentityMode::StaticTokens,
            default_identity: IdentityConfig::default(),
            tokens: Vec::new(),
            session_token: None,
        }
    }
}

/// Token resolution mode.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IdentityMode {
    /// Accept any non-empty token and return the default identity.
    AcceptAll,
    /// Map specific tokens to specific identities.
    #[default]
    StaticTokens,
}

/// Identity and token claims for a subject.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentityConfig {
    /// Subject ID.
    pub uid: String,

    /// Optional e-mail address.
    pub email: Option<String>,

    /// Raw custom claims carried by the subject's token.
    pub claims: RawClaims,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        let mut claims = RawClaims::new();
        claims.insert("role".to_owned(), "admin".into());
        claims.insert("tenantId".to_owned(), PLATFORM_TENANT_ID.into());

        Self {
            uid: "local-admin".to_owned(),
            email: None,
            claims,
        }
    }
}

/// Maps a static token to a specific identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TokenMapping {
    /// The bearer token value to match.
    pub token: String,
    /// The identity to return when this token is presented.
    pub identity: IdentityConfig,
}

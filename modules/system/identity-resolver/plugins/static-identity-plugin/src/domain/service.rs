//! Service implementation for the static identity plugin.

use std::collections::HashMap;

use identity_resolver_sdk::{AuthError, VerifiedAdmin};
use portal_security::{Claims, platform_admin_grant};
use secrecy::{ExposeSecret, SecretString};

use crate::config::{IdentityConfig, IdentityMode, StaticIdentityPluginConfig};

/// Static identity service.
///
/// Resolves tokens to identities based on configuration mode:
/// - `accept_all`: Any non-empty token maps to the default identity
/// - `static_tokens`: Specific tokens map to specific identities
pub struct Service {
    mode: IdentityMode,
    default_identity: IdentityConfig,
    token_map: HashMap<String, IdentityConfig>,
    session_token: Option<SecretString>,
}

impl Service {
    /// Create a service from plugin configuration.
    #[must_use]
    pub fn from_config(cfg: &StaticIdentityPluginConfig) -> Self {
        let token_map: HashMap<String, IdentityConfig> = cfg
            .tokens
            .iter()
            .map(|m| (m.token.clone(), m.identity.clone()))
            .collect();

        Self {
            mode: cfg.mode,
            default_identity: cfg.default_identity.clone(),
            token_map,
            session_token: cfg.session_token.clone().map(SecretString::from),
        }
    }

    /// Resolve a bearer token to its identity.
    ///
    /// Returns `None` if the token is empty or not recognized (in
    /// `static_tokens` mode).
    #[must_use]
    pub fn resolve(&self, bearer_token: &str) -> Option<&IdentityConfig> {
        if bearer_token.is_empty() {
            return None;
        }

        match self.mode {
            IdentityMode::AcceptAll => Some(&self.default_identity),
            IdentityMode::StaticTokens => self.token_map.get(bearer_token),
        }
    }

    /// Identity the current session is signed in as, if any.
    #[must_use]
    pub fn session_identity(&self) -> Option<&IdentityConfig> {
        self.session_token
            .as_ref()
            .and_then(|token| self.resolve(token.expose_secret()))
    }

    /// Verify a bearer token and require platform admin privilege.
    ///
    /// # Errors
    /// - `MissingCredential` for an empty token
    /// - `InvalidCredential` for an unknown token or undecodable claims
    /// - `Forbidden` when the claims do not grant platform admin access
    pub fn verify_admin(&self, bearer_token: &str) -> Result<VerifiedAdmin, AuthError> {
        if bearer_token.is_empty() {
            return Err(AuthError::MissingCredential);
        }

        let identity = self
            .resolve(bearer_token)
            .ok_or_else(|| AuthError::InvalidCredential("unknown token".to_owned()))?;

        let claims = Claims::decode(&identity.claims)
            .map_err(|e| AuthError::InvalidCredential(e.to_string()))?;

        let grant = platform_admin_grant(&claims)
            .ok_or_else(|| AuthError::Forbidden("admin access required".to_owned()))?;

        Ok(VerifiedAdmin {
            uid: identity.uid.clone(),
            claims,
            is_super: grant.is_super,
        })
    }
}

//! Collaborator trait implementations for the static identity plugin.

use async_trait::async_trait;
use identity_resolver_sdk::{
    AdminVerifierClient, AuthError, IdentityError, IdentityProviderClient, VerifiedAdmin,
};
use portal_security::{Identity, RawClaims};

use super::service::Service;

#[async_trait]
impl IdentityProviderClient for Service {
    async fn current_identity(&self) -> Result<Option<Identity>, IdentityError> {
        Ok(self.session_identity().map(|cfg| {
            let identity = Identity::new(cfg.uid.clone());
            match &cfg.email {
                Some(email) => identity.with_email(email.clone()),
                None => identity,
            }
        }))
    }

    async fn token_claims(
        &self,
        identity: &Identity,
        _force_refresh: bool,
    ) -> Result<RawClaims, IdentityError> {
        self.session_identity()
            .filter(|cfg| cfg.uid == identity.uid())
            .map(|cfg| cfg.claims.clone())
            .ok_or_else(|| {
                IdentityError::Token(format!("no token result for '{}'", identity.uid()))
            })
    }
}

#[async_trait]
impl AdminVerifierClient for Service {
    async fn verify_admin_access(&self, bearer_token: &str) -> Result<VerifiedAdmin, AuthError> {
        self.verify_admin(bearer_token)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::config::{IdentityConfig, IdentityMode, StaticIdentityPluginConfig};

    fn signed_in(session: Option<&str>) -> Service {
        Service::from_config(&StaticIdentityPluginConfig {
            mode: IdentityMode::AcceptAll,
            default_identity: IdentityConfig {
                email: Some("admin@example.com".to_owned()),
                ..IdentityConfig::default()
            },
            session_token: session.map(str::to_owned),
            ..StaticIdentityPluginConfig::default()
        })
    }

    #[tokio::test]
    async fn provider_returns_session_identity() {
        let service = signed_in(Some("session"));
        let provider: &dyn IdentityProviderClient = &service;

        let identity = provider.current_identity().await.unwrap().unwrap();
        assert_eq!(identity.uid(), "local-admin");
        assert_eq!(identity.email(), Some("admin@example.com"));

        let claims = provider.token_claims(&identity, true).await.unwrap();
        assert_eq!(claims.get("role"), Some(&"admin".into()));
    }

    #[tokio::test]
    async fn provider_without_session_has_no_identity() {
        let service = signed_in(None);
        let provider: &dyn IdentityProviderClient = &service;

        assert!(provider.current_identity().await.unwrap().is_none());
        let stranger = Identity::new("someone-else");
        match provider.token_claims(&stranger, false).await {
            Err(IdentityError::Token(_)) => {}
            other => panic!("Expected Token error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn verifier_trait_delegates_to_service() {
        let service = signed_in(None);
        let verifier: &dyn AdminVerifierClient = &service;

        let verified = verifier.verify_admin_access("whatever").await.unwrap();
        assert_eq!(verified.uid, "local-admin");

        match verifier.verify_admin_access("").await {
            Err(AuthError::MissingCredential) => {}
            other => panic!("Expected MissingCredential, got: {other:?}"),
        }
    }
}

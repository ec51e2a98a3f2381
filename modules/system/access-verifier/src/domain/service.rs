//! Access decision service.

use std::sync::Arc;

use chrono::Utc;
use identity_resolver_sdk::{AdminVerifierClient, AuthError};

use crate::config::VerificationFallback;
use crate::domain::error::VerifyError;
use crate::domain::model::AccessDecision;

/// Produces access decisions for admin pages.
///
/// Stateless apart from the collaborator and the fallback chosen at startup;
/// every call is independent and repeated calls with the same credential give
/// the same `access`/`role` (timestamps differ).
pub struct AccessVerifier {
    client: Arc<dyn AdminVerifierClient>,
    fallback: VerificationFallback,
}

impl AccessVerifier {
    #[must_use]
    pub fn new(client: Arc<dyn AdminVerifierClient>, fallback: VerificationFallback) -> Self {
        Self { client, fallback }
    }

    #[must_use]
    pub fn fallback(&self) -> VerificationFallback {
        self.fallback
    }

    /// Verify the presented bearer credential.
    ///
    /// # Errors
    /// With the `deny` fallback, returns the [`VerifyError`] matching the
    /// collaborator failure. With `development_grant`, never fails.
    pub async fn verify(&self, bearer_token: Option<&str>) -> Result<AccessDecision, VerifyError> {
        let result = match bearer_token {
            Some(token) if !token.is_empty() => self.client.verify_admin_access(token).await,
            _ => Err(AuthError::MissingCredential),
        };
        let now = Utc::now();

        match result {
            Ok(admin) => {
                tracing::info!(
                    uid = %admin.uid,
                    is_super = admin.is_super,
                    "Admin access verified"
                );
                Ok(AccessDecision::granted(now, admin.uid))
            }
            Err(err) => match self.fallback {
                VerificationFallback::DevelopmentGrant => {
                    tracing::warn!(
                        error = %err,
                        "Admin verification failed; granting access under development fallback"
                    );
                    Ok(AccessDecision::development_grant(now))
                }
                VerificationFallback::Deny => {
                    log_auth_error(&err);
                    Err(err.into())
                }
            },
        }
    }
}

/// Log verification failures at appropriate levels.
///
/// Cognitive complexity is inflated by tracing macro expansion.
#[allow(clippy::cognitive_complexity)]
fn log_auth_error(err: &AuthError) {
    match err {
        AuthError::MissingCredential => tracing::debug!("Admin verification rejected: no token"),
        AuthError::InvalidCredential(msg) => {
            tracing::debug!("Admin verification rejected: {msg}");
        }
        AuthError::Forbidden(msg) => tracing::debug!("Admin verification forbidden: {msg}"),
        AuthError::Unavailable(msg) => tracing::error!("Admin verification unavailable: {msg}"),
        AuthError::Internal(msg) => tracing::error!("Admin verification internal error: {msg}"),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use identity_resolver_sdk::VerifiedAdmin;
    use portal_security::Claims;

    struct FixedVerifier(Result<VerifiedAdmin, AuthError>);

    #[async_trait]
    impl AdminVerifierClient for FixedVerifier {
        async fn verify_admin_access(&self, _token: &str) -> Result<VerifiedAdmin, AuthError> {
            self.0.clone()
        }
    }

    fn verifier(result: Result<VerifiedAdmin, AuthError>, fallback: VerificationFallback) -> AccessVerifier {
        AccessVerifier::new(Arc::new(FixedVerifier(result)), fallback)
    }

    fn admin(uid: &str) -> VerifiedAdmin {
        VerifiedAdmin {
            uid: uid.to_owned(),
            claims: Claims::default(),
            is_super: false,
        }
    }

    #[tokio::test]
    async fn verified_credential_is_granted_with_uid() {
        let svc = verifier(Ok(admin("u1")), VerificationFallback::Deny);
        let decision = svc.verify(Some("token")).await.unwrap();

        assert!(decision.access);
        assert_eq!(decision.role, "admin");
        assert_eq!(decision.uid.as_deref(), Some("u1"));
    }

    #[tokio::test]
    async fn missing_token_never_reaches_collaborator() {
        let svc = verifier(Ok(admin("u1")), VerificationFallback::Deny);

        assert!(matches!(svc.verify(None).await, Err(VerifyError::MissingCredential)));
        assert!(matches!(svc.verify(Some("")).await, Err(VerifyError::MissingCredential)));
    }

    #[tokio::test]
    async fn deny_fallback_maps_errors() {
        let cases = [
            (AuthError::InvalidCredential("expired".to_owned()), "invalid"),
            (AuthError::Forbidden("member".to_owned()), "forbidden"),
            (AuthError::Unavailable("no credentials".to_owned()), "unavailable"),
            (AuthError::Internal("boom".to_owned()), "internal"),
        ];

        for (err, label) in cases {
            let svc = verifier(Err(err), VerificationFallback::Deny);
            let result = svc.verify(Some("token")).await;
            let matched = match (&result, label) {
                (Err(VerifyError::InvalidCredential(_)), "invalid")
                | (Err(VerifyError::Forbidden(_)), "forbidden")
                | (Err(VerifyError::Unavailable(_)), "unavailable")
                | (Err(VerifyError::Internal(_)), "internal") => true,
                _ => false,
            };
            assert!(matched, "{label}: {result:?}");
        }
    }

    #[tokio::test]
    async fn development_fallback_grants_without_uid() {
        let svc = verifier(
            Err(AuthError::Unavailable("no credentials".to_owned())),
            VerificationFallback::DevelopmentGrant,
        );
        let decision = svc.verify(None).await.unwrap();

        assert!(decision.access);
        assert_eq!(decision.role, "admin");
        assert!(decision.uid.is_none());
    }
}

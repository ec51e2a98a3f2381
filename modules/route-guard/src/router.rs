use std::sync::Arc;

use identity_resolver_sdk::IdentityProviderClient;
use tracing::debug;

use crate::decision::GuardDecision;
use crate::error::GuardConfigError;
use crate::guards::{AdminGuard, AuthGuard, GuestGuard};
use crate::navigation::{Navigation, is_admin_path};
use crate::policy::RouteClass;

/// Pre-navigation hook: classifies the target path and runs the matching guard.
///
/// Paths use matchit syntax (`/projects/{id}`, `/admin/{*rest}`). A trailing
/// slash is ignored when the exact path is not registered. Unmatched paths
/// inside the admin section are [`RouteClass::Admin`]; any other unmatched
/// path is [`RouteClass::Public`].
#[derive(Clone)]
pub struct RouteGuard {
    routes: matchit::Router<RouteClass>,
    guest: GuestGuard,
    auth: AuthGuard,
    admin: AdminGuard,
}

impl RouteGuard {
    #[must_use]
    pub fn new(provider: Arc<dyn IdentityProviderClient>) -> Self {
        Self {
            routes: matchit::Router::new(),
            guest: GuestGuard::new(provider.clone()),
            auth: AuthGuard::new(provider.clone()),
            admin: AdminGuard::new(provider),
        }
    }

    /// Guard with the standard portal layout: `/login` for guests and the
    /// admin section for admins.
    ///
    /// # Errors
    /// Never fails for the built-in patterns; the `Result` mirrors [`Self::route`].
    pub fn with_defaults(
        provider: Arc<dyn IdentityProviderClient>,
    ) -> Result<Self, GuardConfigError> {
        Self::new(provider)
            .route(crate::LOGIN_PATH, RouteClass::Guest)?
            .route(crate::ADMIN_PREFIX, RouteClass::Admin)?
            .route("/admin/{*rest}", RouteClass::Admin)
    }

    /// Attach a guard class to a path pattern.
    ///
    /// # Errors
    /// Returns [`GuardConfigError::InvalidPattern`] if the pattern is malformed
    /// or conflicts with an already registered one.
    pub fn route(mut self, pattern: &str, class: RouteClass) -> Result<Self, GuardConfigError> {
        self.routes
            .insert(pattern, class)
            .map_err(|source| GuardConfigError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })?;
        Ok(self)
    }

    /// Class of the page at `path`.
    #[must_use]
    pub fn classify(&self, path: &str) -> RouteClass {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => Some(rest),
            _ => None,
        };

        let registered = self
            .routes
            .at(path)
            .ok()
            .or_else(|| trimmed.and_then(|p| self.routes.at(p).ok()))
            .map(|matched| *matched.value);

        match registered {
            Some(class) => class,
            None if is_admin_path(path) => RouteClass::Admin,
            None => RouteClass::Public,
        }
    }

    /// Evaluate the guard for a pending navigation.
    pub async fn evaluate(&self, nav: &Navigation) -> GuardDecision {
        let class = self.classify(nav.path());
        let decision = match class {
            RouteClass::Public => GuardDecision::Allow,
            RouteClass::Guest => self.guest.evaluate(nav).await,
            RouteClass::Authenticated => self.auth.evaluate(nav).await,
            RouteClass::Admin => self.admin.evaluate(nav).await,
        };

        debug!(
            path = nav.path(),
            class = ?class,
            decision = ?decision,
            "Route guard evaluated"
        );
        decision
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::test_support::MockProvider;
    use serde_json::json;

    fn guard(provider: MockProvider) -> RouteGuard {
        RouteGuard::with_defaults(Arc::new(provider))
            .unwrap()
            .route("/projects", RouteClass::Authenticated)
            .unwrap()
            .route("/projects/{id}", RouteClass::Authenticated)
            .unwrap()
    }

    #[test]
    fn classify_registered_patterns() {
        let guard = guard(MockProvider::signed_out());
        assert_eq!(guard.classify("/login"), RouteClass::Guest);
        assert_eq!(guard.classify("/admin"), RouteClass::Admin);
        assert_eq!(guard.classify("/admin/"), RouteClass::Admin);
        assert_eq!(guard.classify("/admin/users/7"), RouteClass::Admin);
        assert_eq!(guard.classify("/admin/users/"), RouteClass::Admin);
        assert_eq!(guard.classify("/login/"), RouteClass::Guest);
        assert_eq!(guard.classify("/projects/42"), RouteClass::Authenticated);
        assert_eq!(guard.classify("/projects/42/"), RouteClass::Authenticated);
        assert_eq!(guard.classify("/about"), RouteClass::Public);
        assert_eq!(guard.classify("/administrator"), RouteClass::Public);
        assert_eq!(guard.classify("/"), RouteClass::Public);
    }

    #[test]
    fn admin_section_is_admin_without_registration() {
        let guard = RouteGuard::new(Arc::new(MockProvider::signed_out()));
        assert_eq!(guard.classify("/admin"), RouteClass::Admin);
        assert_eq!(guard.classify("/admin/"), RouteClass::Admin);
        assert_eq!(guard.classify("/admin/billing"), RouteClass::Admin);
    }

    #[tokio::test]
    async fn signed_out_caller_is_sent_to_login_from_admin_section() {
        let guard = guard(MockProvider::signed_out());

        for path in ["/admin", "/admin/", "/admin/users/"] {
            assert_eq!(
                guard.evaluate(&Navigation::client(path)).await,
                GuardDecision::redirect("/login"),
                "{path}"
            );
        }
    }

    #[test]
    fn conflicting_pattern_is_rejected() {
        let result = guard(MockProvider::signed_out()).route("/projects/{slug}", RouteClass::Public);
        assert!(matches!(
            result,
            Err(GuardConfigError::InvalidPattern { pattern, .. }) if pattern == "/projects/{slug}"
        ));
    }

    #[tokio::test]
    async fn public_pages_never_consult_provider() {
        let provider = Arc::new(MockProvider::unavailable());
        let guard = RouteGuard::with_defaults(provider.clone()).unwrap();

        assert!(guard.evaluate(&Navigation::client("/about")).await.is_allow());
        assert_eq!(provider.identity_lookups(), 0);
    }

    #[tokio::test]
    async fn dispatches_by_class() {
        let guard = guard(MockProvider::signed_in(json!({ "role": "member" })));

        assert_eq!(
            guard.evaluate(&Navigation::client("/login")).await,
            GuardDecision::replace("/")
        );
        assert!(guard.evaluate(&Navigation::client("/projects/1")).await.is_allow());
        assert_eq!(
            guard.evaluate(&Navigation::client("/admin")).await,
            GuardDecision::redirect("/")
        );
    }
}

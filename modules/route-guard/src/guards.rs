//! Guard implementations.

use std::sync::Arc;

use identity_resolver_sdk::IdentityProviderClient;
use portal_security::{AdminRule, Claims, Identity, admin_rule};
use tracing::{debug, error, info, warn};

use crate::decision::GuardDecision;
use crate::error::GuardError;
use crate::navigation::{Navigation, RenderSide};
use crate::policy::{ErrorPolicy, RouteClass};
use crate::{LOGIN_PATH, REDIRECT_PARAM, ROOT_PATH};

/// Decision for a guard that could not complete.
fn on_error(class: RouteClass, fallback: &str) -> GuardDecision {
    match class.error_policy() {
        ErrorPolicy::FailOpen => GuardDecision::Allow,
        ErrorPolicy::FailClosed => GuardDecision::redirect(fallback),
    }
}

/// Post-login destination. Only same-origin absolute paths are honoured.
fn return_target(nav: &Navigation) -> &str {
    nav.query_param(REDIRECT_PARAM)
        .filter(|target| target.starts_with('/') && !target.starts_with("//"))
        .unwrap_or(ROOT_PATH)
}

/// Fetch fresh claims for `identity` and run the navigation admin rule.
async fn fetch_admin_rule(
    provider: &dyn IdentityProviderClient,
    identity: &Identity,
) -> Result<Option<AdminRule>, GuardError> {
    let raw = provider
        .token_claims(identity, true)
        .await
        .map_err(GuardError::TokenResult)?;
    let claims = Claims::decode(&raw)?;
    Ok(admin_rule(&claims))
}

/// Guard for pages meant for signed-out users, such as login.
///
/// Only evaluated on the client: during server rendering the session is not
/// visible and every caller would look signed out.
#[derive(Clone)]
pub struct GuestGuard {
    provider: Arc<dyn IdentityProviderClient>,
}

impl GuestGuard {
    #[must_use]
    pub fn new(provider: Arc<dyn IdentityProviderClient>) -> Self {
        Self { provider }
    }

    pub async fn evaluate(&self, nav: &Navigation) -> GuardDecision {
        if nav.side() == RenderSide::Server {
            return GuardDecision::Allow;
        }

        match self.provider.current_identity().await {
            Ok(Some(identity)) => {
                let target = return_target(nav);
                info!(
                    uid = identity.uid(),
                    redirect_to = target,
                    "User is already authenticated, leaving guest route"
                );
                GuardDecision::replace(target)
            }
            Ok(None) => GuardDecision::Allow,
            Err(e) => {
                let err = GuardError::IdentityFetch(e);
                warn!(error = %err, "Error checking auth status on guest route");
                on_error(RouteClass::Guest, ROOT_PATH)
            }
        }
    }
}

/// Guard for pages that need a signed-in user.
///
/// Paths under the admin section additionally require the admin rule.
/// Deferred to the client like [`GuestGuard`].
#[derive(Clone)]
pub struct AuthGuard {
    provider: Arc<dyn IdentityProviderClient>,
}

impl AuthGuard {
    #[must_use]
    pub fn new(provider: Arc<dyn IdentityProviderClient>) -> Self {
        Self { provider }
    }

    pub async fn evaluate(&self, nav: &Navigation) -> GuardDecision {
        if nav.side() == RenderSide::Server {
            return GuardDecision::Allow;
        }

        let identity = match self.provider.current_identity().await {
            Ok(Some(identity)) => identity,
            Ok(None) => return GuardDecision::redirect(LOGIN_PATH),
            Err(e) => {
                let err = GuardError::IdentityFetch(e);
                warn!(error = %err, path = nav.path(), "Error checking auth status");
                return on_error(RouteClass::Authenticated, LOGIN_PATH);
            }
        };

        if !nav.is_admin_path() {
            return GuardDecision::Allow;
        }

        match fetch_admin_rule(self.provider.as_ref(), &identity).await {
            Ok(Some(_)) => GuardDecision::Allow,
            Ok(None) => GuardDecision::redirect(ROOT_PATH),
            Err(e) => {
                error!(error = %e, uid = identity.uid(), "Error checking admin status");
                on_error(RouteClass::Admin, ROOT_PATH)
            }
        }
    }
}

/// Guard for admin-only pages.
///
/// Signed-out callers go to the login page; signed-in callers without admin
/// privilege go to the application root, so "not logged in" and "wrong
/// privilege" stay distinguishable.
#[derive(Clone)]
pub struct AdminGuard {
    provider: Arc<dyn IdentityProviderClient>,
}

impl AdminGuard {
    #[must_use]
    pub fn new(provider: Arc<dyn IdentityProviderClient>) -> Self {
        Self { provider }
    }

    pub async fn evaluate(&self, nav: &Navigation) -> GuardDecision {
        let identity = match self.provider.current_identity().await {
            Ok(Some(identity)) => identity,
            Ok(None) => return GuardDecision::redirect(LOGIN_PATH),
            Err(e) => {
                let err = GuardError::IdentityFetch(e);
                error!(error = %err, path = nav.path(), "Error resolving current user");
                return on_error(RouteClass::Admin, ROOT_PATH);
            }
        };

        match fetch_admin_rule(self.provider.as_ref(), &identity).await {
            Ok(Some(rule)) => {
                debug!(uid = identity.uid(), rule = ?rule, "Admin access granted");
                GuardDecision::Allow
            }
            Ok(None) => {
                debug!(uid = identity.uid(), path = nav.path(), "Admin access denied");
                GuardDecision::redirect(ROOT_PATH)
            }
            Err(e) => {
                error!(error = %e, uid = identity.uid(), "Error checking admin status");
                on_error(RouteClass::Admin, ROOT_PATH)
            }
        }
    }
}

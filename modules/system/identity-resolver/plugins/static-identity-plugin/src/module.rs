//! Static identity plugin module.

use std::sync::Arc;

use identity_resolver_sdk::{AdminVerifierClient, IdentityProviderClient};
use tracing::{info, warn};

use crate::config::{IdentityMode, StaticIdentityPluginConfig};
use crate::domain::Service;

/// Static identity plugin.
///
/// Exposes the same service through both collaborator traits so the route
/// guards and the access verifier can be wired from one configuration.
pub struct StaticIdentityPlugin {
    service: Arc<Service>,
}

impl StaticIdentityPlugin {
    /// Build the plugin from configuration.
    #[must_use]
    pub fn init(cfg: &StaticIdentityPluginConfig) -> Self {
        info!("Initializing static_identity_plugin");

        if cfg.mode == IdentityMode::AcceptAll {
            warn!(
                "Static identity plugin is running in `accept_all` mode: \
                 every non-empty bearer token resolves to the default identity. \
                 Do NOT use this mode in production."
            );
        }

        info!(
            mode = ?cfg.mode,
            token_count = cfg.tokens.len(),
            session = cfg.session_token.is_some(),
            "Loaded plugin configuration"
        );

        Self {
            service: Arc::new(Service::from_config(cfg)),
        }
    }

    /// Session-side identity provider.
    #[must_use]
    pub fn identity_provider(&self) -> Arc<dyn IdentityProviderClient> {
        self.service.clone()
    }

    /// Server-side admin credential verifier.
    #[must_use]
    pub fn admin_verifier(&self) -> Arc<dyn AdminVerifierClient> {
        self.service.clone()
    }
}

//! In-memory identity provider for guard tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use identity_resolver_sdk::{IdentityError, IdentityProviderClient};
use portal_security::{Identity, RawClaims};

pub struct MockProvider {
    identity: Result<Option<Identity>, IdentityError>,
    claims: Result<RawClaims, IdentityError>,
    identity_lookups: AtomicUsize,
    forced_refreshes: AtomicUsize,
}

impl MockProvider {
    fn with(
        identity: Result<Option<Identity>, IdentityError>,
        claims: Result<RawClaims, IdentityError>,
    ) -> Self {
        Self {
            identity,
            claims,
            identity_lookups: AtomicUsize::new(0),
            forced_refreshes: AtomicUsize::new(0),
        }
    }

    pub fn signed_in(claims: serde_json::Value) -> Self {
        let serde_json::Value::Object(claims) = claims else {
            panic!("claims must be an object");
        };
        Self::with(Ok(Some(Identity::new("u1"))), Ok(claims))
    }

    pub fn signed_out() -> Self {
        Self::with(Ok(None), Ok(RawClaims::new()))
    }

    pub fn unavailable() -> Self {
        Self::with(
            Err(IdentityError::Unavailable("network down".to_owned())),
            Ok(RawClaims::new()),
        )
    }

    #[must_use]
    pub fn failing_token(mut self) -> Self {
        self.claims = Err(IdentityError::Token("token expired".to_owned()));
        self
    }

    pub fn identity_lookups(&self) -> usize {
        self.identity_lookups.load(Ordering::SeqCst)
    }

    pub fn forced_refreshes(&self) -> usize {
        self.forced_refreshes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProviderClient for MockProvider {
    async fn current_identity(&self) -> Result<Option<Identity>, IdentityError> {
        self.identity_lookups.fetch_add(1, Ordering::SeqCst);
        self.identity.clone()
    }

    async fn token_claims(
        &self,
        _identity: &Identity,
        force_refresh: bool,
    ) -> Result<RawClaims, IdentityError> {
        if force_refresh {
            self.forced_refreshes.fetch_add(1, Ordering::SeqCst);
        }
        self.claims.clone()
    }
}

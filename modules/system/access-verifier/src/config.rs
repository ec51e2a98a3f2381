use serde::{Deserialize, Serialize};

fn default_bind_addr() -> String {
    "127.0.0.1:8087".to_owned()
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// What the verifier answers when credential verification fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationFallback {
    /// Deny with 401/403/5xx.
    #[default]
    Deny,
    /// Grant anyway, without a subject id. Only for local development without
    /// verification credentials.
    DevelopmentGrant,
}

/// Access verifier configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AccessVerifierConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Behaviour when verification fails. Fixed at startup.
    #[serde(default)]
    pub fallback: VerificationFallback,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for AccessVerifierConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            fallback: VerificationFallback::default(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

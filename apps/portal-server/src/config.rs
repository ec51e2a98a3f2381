//! Layered configuration.
//!
//! Sources, later ones win:
//! 1. built-in defaults
//! 2. YAML file passed with `--config`
//! 3. environment variables prefixed with `PORTAL__`, nested with `__`
//!    (e.g. `PORTAL__ACCESS_VERIFIER__BIND_ADDR=0.0.0.0:8087`)

use std::path::Path;

use access_verifier::{AccessVerifierConfig, VerificationFallback};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use static_identity_plugin::config::StaticIdentityPluginConfig;
use thiserror::Error;

pub const ENV_PREFIX: &str = "PORTAL__";

const REDACTED: &str = "***";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error(
        "access_verifier.fallback = development_grant requires environment = development \
         (current: {0})"
    )]
    DevelopmentGrantOutsideDevelopment(Environment),
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Production,
    Development,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Production => "production",
            Self::Development => "development",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `info,access_verifier=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::default(),
        }
    }
}

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub environment: Environment,
    pub logging: LoggingConfig,
    pub access_verifier: AccessVerifierConfig,
    pub identity: StaticIdentityPluginConfig,
}

impl AppConfig {
    /// Reject combinations that must never reach a running server.
    ///
    /// # Errors
    /// Returns [`ConfigError::DevelopmentGrantOutsideDevelopment`] when the
    /// granting fallback is configured outside a development environment.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.access_verifier.fallback == VerificationFallback::DevelopmentGrant
            && self.environment != Environment::Development
        {
            return Err(ConfigError::DevelopmentGrantOutsideDevelopment(
                self.environment,
            ));
        }
        Ok(())
    }

    /// Copy with bearer tokens masked, for display.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        for mapping in &mut config.identity.tokens {
            REDACTED.clone_into(&mut mapping.token);
        }
        if let Some(token) = config.identity.session_token.as_mut() {
            REDACTED.clone_into(token);
        }
        config
    }
}

/// Provider stack without environment overrides.
fn base_figment(path: Option<&Path>) -> Result<Figment, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
    if let Some(path) = path {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        figment = figment.merge(Yaml::file(path));
    }
    Ok(figment)
}

fn extract(figment: &Figment) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = figment.extract().map_err(Box::new)?;
    config.validate()?;
    Ok(config)
}

/// Load and validate the configuration.
///
/// # Errors
/// Returns an error if the file is missing, a source fails to parse, or
/// validation fails.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let figment = base_figment(path)?.merge(Env::prefixed(ENV_PREFIX).split("__"));
    extract(&figment)
}

/// Load from a file only, ignoring the process environment.
///
/// # Errors
/// Same as [`load_config`].
pub fn load_config_file(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    extract(&base_figment(path)?)
}

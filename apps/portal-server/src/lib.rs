#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Portal server wiring: configuration, logging and startup checks.

pub mod config;
pub mod logging;

pub use config::{AppConfig, ConfigError, Environment, load_config};

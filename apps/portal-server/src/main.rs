use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use mimalloc::MiMalloc;
use portal_server::config::load_config;
use portal_server::logging::init_logging;
use static_identity_plugin::StaticIdentityPlugin;
use tokio_util::sync::CancellationToken;

use access_verifier::{AccessVerifierModule, VerificationFallback};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(name = "portal-server")]
#[command(about = "Portal admin access verifier", long_about = None)]
struct Cli {
    /// YAML config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as JSON, tokens masked, and exit
    #[arg(long)]
    print_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config.redacted())?);
        return Ok(());
    }

    init_logging(&config.logging, cli.verbose)?;
    tracing::info!(environment = %config.environment, "Starting portal-server");

    if config.access_verifier.fallback == VerificationFallback::DevelopmentGrant {
        tracing::warn!(
            "Access verifier fallback is development_grant: failed verifications are granted"
        );
    }

    let plugin = StaticIdentityPlugin::init(&config.identity);
    let module = AccessVerifierModule::new(config.access_verifier, plugin.admin_verifier());

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
        }
        shutdown.cancel();
    });

    module.serve(cancel).await
}

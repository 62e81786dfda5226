//! CLI command definitions and dispatch.

pub mod config;
pub mod link;

use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use crate::output::OutputFormat;
use setuplink_core::config::AppConfig;
use setuplink_core::error::AppError;
use setuplink_service::SetupLinkService;
use setuplink_store::StoreManager;

/// Setup links — time-bounded URLs for identity provider configuration
#[derive(Debug, Parser)]
#[command(name = "setuplink", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Issue a setup link (reuses a live one unless --regenerate)
    Create(link::CreateArgs),
    /// Resolve a setup link by token
    Get(link::GetArgs),
    /// List setup links for a service
    List(link::ListArgs),
    /// Remove a setup link by setup ID
    Remove(link::RemoveArgs),
    /// Show the effective configuration
    Config,
}

impl Cli {
    /// Execute the CLI command. Returns `false` when the service answered
    /// with an error envelope.
    pub async fn execute(&self) -> Result<bool, AppError> {
        let config = load_config(&self.config)?;
        init_logging(&config);

        match &self.command {
            Commands::Create(args) => link::create(args, &config, self.format).await,
            Commands::Get(args) => link::get(args, &config, self.format).await,
            Commands::List(args) => link::list(args, &config, self.format).await,
            Commands::Remove(args) => link::remove(args, &config, self.format).await,
            Commands::Config => config::execute(&config, self.format),
        }
    }
}

/// Helper: load configuration from file and environment
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: build the setup link service on the configured store
pub async fn build_service(config: &AppConfig) -> Result<SetupLinkService, AppError> {
    let store = StoreManager::new(&config.store).await?;
    Ok(SetupLinkService::new(store.store(), config.setup_link.clone()))
}

/// Helper: warn when a lookup or delete runs on a store that starts empty
/// every run
pub fn warn_if_ephemeral(config: &AppConfig) {
    if !config.store.is_persistent() {
        warn!(
            provider = %config.store.provider,
            "Store does not persist between runs; links from earlier invocations are not visible"
        );
    }
}

/// Initialize tracing. Logs go to stderr so stdout stays machine-readable.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

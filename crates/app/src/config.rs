//! App configuration
//!
//! Settings come from command-line flags, falling back to environment
//! variables and a `.env` file.

use clap::Parser;

use crate::config::{commands::Command, logging::LoggingConfig, store::StoreConfig};

pub mod commands;
pub mod logging;
pub mod store;

pub use logging::LogFormat;

/// Vault storefront CLI configuration
#[derive(Debug, Parser)]
#[command(name = "vault-app", about = "Vault storefront CLI", long_about = None)]
pub struct AppConfig {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Catalog, hand-off and sign-in settings.
    #[command(flatten)]
    pub store: StoreConfig,

    #[command(subcommand)]
    pub command: Command,
}

impl AppConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

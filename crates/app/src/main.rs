//! Vault Storefront CLI

use std::process;

use vault_app::{config::AppConfig, observability};

mod cli;

#[tokio::main]
pub async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(error) => error.exit(),
    };

    if let Err(error) = observability::init_subscriber(&config.logging) {
        eprintln!("{error}");
        process::exit(1);
    }

    if let Err(error) = cli::run(config).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

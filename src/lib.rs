pub mod commands;
pub mod modules;
pub mod shared;

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::sync::Arc;

use commands::{dispatch, Cli};
use modules::catalog::{CatalogConfig, PokeApiAdapter, SearchSession};
use shared::utils::init_logger;

/// Bootstrap and run one CLI invocation. Returns whether the command succeeded.
pub async fn run() -> anyhow::Result<bool> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let cli = Cli::parse();

    let env_config = CatalogConfig::from_env();
    let config = match &cli.base_url {
        Some(base_url) => CatalogConfig::new(base_url).with_user_agent(env_config.user_agent),
        None => env_config,
    };
    log::debug!("Using catalog at {}", config.base_url);

    let adapter = Arc::new(PokeApiAdapter::new(&config));
    let session = SearchSession::new(adapter);

    let output = dispatch(&cli, &session).await;

    if output.success {
        writeln!(std::io::stdout(), "{}", output.text).context("Failed to write to stdout")?;
    } else {
        writeln!(std::io::stderr(), "{}", output.text).context("Failed to write to stderr")?;
    }
    Ok(output.success)
}

use clap::{Parser, Subcommand};

use crate::modules::catalog::{
    commands::{list_creatures, show_creature, CommandOutput},
    ListingParams, SearchSession,
};

/// Single source of truth for the command-line surface
#[derive(Parser, Debug)]
#[command(name = "pokecard", version, about = "Look up creatures in the PokeAPI catalog")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Catalog base URL (overrides POKECARD_BASE_URL)"
    )]
    pub base_url: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the summary card for a creature id or name
    Show { query: String },
    /// List one page of the catalog
    List {
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },
}

pub async fn dispatch(cli: &Cli, session: &SearchSession) -> CommandOutput {
    match &cli.command {
        Commands::Show { query } => show_creature(session, query, cli.json).await,
        Commands::List { offset, limit } => {
            let params = ListingParams::from_options(*offset, *limit);
            list_creatures(session, params, cli.json).await
        }
    }
}

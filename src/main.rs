//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fbb_rank::{
    cli::{Commands, FbbRank},
    commands::{categories::handle_categories, rank::handle_rank},
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = FbbRank::parse();

    match app.command {
        Commands::Rank { opts, json } => handle_rank(opts, json)?,
        Commands::Categories { json } => handle_categories(json)?,
    }

    Ok(())
}

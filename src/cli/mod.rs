//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{SortDirection, SortKey, WeightSpec};

/// Ranking configuration shared between output modes.
#[derive(Debug, Args)]
pub struct RankOpts {
    /// Path to the predictions dataset (JSON).
    #[clap(long, short, default_value = "predictions.json")]
    pub data: PathBuf,

    /// Punt a category (repeatable): `--punt TOV --punt FT_impact`.
    #[clap(long)]
    pub punt: Vec<String>,

    /// Use only these categories (repeatable); overrides the standard nine.
    #[clap(long)]
    pub only: Vec<String>,

    /// Weight a category (repeatable): `--weight PTS=2.0`.
    #[clap(long, short = 'w')]
    pub weight: Vec<WeightSpec>,

    /// Filter by player name (case-insensitive substring match).
    #[clap(long, short = 'n')]
    pub name: Option<String>,

    /// Show at most this many players.
    #[clap(long, short)]
    pub limit: Option<usize>,

    /// Sort column: `total`, `rank`, `name`, `team`, `position`, a stat
    /// abbreviation (`pts`, `reb`, ...), or `z:<category>`.
    #[clap(long, short, default_value = "total")]
    pub sort: SortKey,

    /// Sort direction; defaults per column (best-first for stats, A-to-Z
    /// for names).
    #[clap(long)]
    pub direction: Option<SortDirection>,

    /// Average the active z-scores instead of summing them.
    #[clap(long)]
    pub normalized: bool,

    /// Trust the dataset's precomputed `z_*` fields instead of
    /// standardizing from raw stats.
    #[clap(long)]
    pub precomputed: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "fbb-rank", about = "Fantasy basketball composite ranking CLI")]
pub struct FbbRank {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rank players by composite z-score value.
    ///
    /// Reads season-long player records from the dataset, standardizes each
    /// active category across the batch, and prints the weighted composite
    /// ranking.
    Rank {
        #[clap(flatten)]
        opts: RankOpts,

        /// Output results as JSON instead of a text table.
        #[clap(long)]
        json: bool,
    },

    /// List the standard scoring categories.
    Categories {
        /// Output as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

//! Fantasy Basketball Composite Ranking Library
//!
//! A Rust library and CLI for turning season-long player statistics into a
//! sorted, weighted fantasy value table: per-category z-score
//! standardization, volume-weighted FG%/FT% impact scores, configurable
//! category punting and weighting, and deterministic filtered/sorted output.
//!
//! ## Features
//!
//! - **Category Standardization**: population z-scores per category, with
//!   turnover inversion so positive always means good
//! - **Percentage Impact**: FG%/FT% scored by efficiency edge times attempt
//!   volume, not raw percentage
//! - **Punting & Weights**: drop categories from the composite entirely or
//!   scale their contribution
//! - **Deterministic Ordering**: stable sorts with a documented
//!   name-ascending tie-break
//! - **Precomputed Mode**: consume upstream-supplied `z_*` fields directly
//!
//! ## Quick Start
//!
//! ```rust
//! use fbb_rank::{engine, model::CategoryDefinition, RankingQuery};
//!
//! # fn example(batch: Vec<fbb_rank::model::PlayerSeasonRecord>) -> fbb_rank::Result<()> {
//! let definitions = CategoryDefinition::standard_nine();
//! let mut query = RankingQuery::standard(&definitions);
//! query.active_categories.retain(|key| key != "TOV"); // punt turnovers
//!
//! let ranked = engine::rank_players(&batch, &definitions, &query)?;
//! for row in ranked.iter().take(10) {
//!     println!("{:>3}. {} {:.2}", row.rank, row.player.name(), row.player.total_score);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod engine;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use engine::{RankingQuery, ScoringMode, SortDirection, SortKey};
pub use error::{RankError, Result};
pub use model::{CategoryDefinition, PlayerSeasonRecord, RankedPlayer, ScoredPlayerRecord};

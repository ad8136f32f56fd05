//! The ranking engine: standardize raw stats, compute percentage-impact
//! values, combine into a weighted composite score, then filter, sort, and
//! project the result.
//!
//! The whole pipeline is a pure function of its inputs. Intermediate
//! aggregates live for one call and nothing is shared between calls, so
//! concurrent sessions can rank independently.

pub mod impact;
pub mod score;
pub mod select;
pub mod standardize;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{
    error::Result,
    model::{CategoryDefinition, PlayerSeasonRecord, RankedPlayer},
};

pub use select::{SortDirection, SortKey};

/// How active category z-scores combine into the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringMode {
    /// Unnormalized sum of weighted z-scores (the default).
    Sum,
    /// Sum divided by the active-category count, so totals stay comparable
    /// across different punt configurations.
    Average,
}

/// The caller's configuration for one ranking pass. Constructed fresh per
/// call; the engine keeps no state between passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingQuery {
    /// Category keys contributing to the total. Punted categories are
    /// simply not listed. May be empty, in which case every total is 0.
    pub active_categories: Vec<String>,
    /// Per-category multipliers; categories not listed default to 1.0.
    pub category_weights: BTreeMap<String, f64>,
    /// Case-insensitive substring filter on player name.
    pub search_term: Option<String>,
    /// Truncate the result after sorting; `None` is unbounded.
    pub limit: Option<usize>,
    pub sort_key: SortKey,
    /// `None` picks the key's default direction.
    pub sort_direction: Option<SortDirection>,
    pub mode: ScoringMode,
}

impl RankingQuery {
    /// All supplied categories active, unit weights, no filter, best total
    /// score first.
    pub fn standard(definitions: &[CategoryDefinition]) -> Self {
        Self {
            active_categories: definitions.iter().map(|d| d.key.clone()).collect(),
            category_weights: BTreeMap::new(),
            search_term: None,
            limit: None,
            sort_key: SortKey::TotalScore,
            sort_direction: None,
            mode: ScoringMode::Sum,
        }
    }

    /// Effective weight for a category key (1.0 unless overridden).
    pub fn weight_for(&self, key: &str) -> f64 {
        self.category_weights.get(key).copied().unwrap_or(1.0)
    }

    /// Effective sort direction, falling back to the key's default.
    pub fn direction(&self) -> SortDirection {
        self.sort_direction
            .unwrap_or_else(|| self.sort_key.default_direction())
    }
}

/// Run one full ranking pass: validate, score, filter, sort, truncate.
///
/// Fails whole on invalid input; no partial results. The caller's records
/// are never mutated.
pub fn rank_players(
    batch: &[PlayerSeasonRecord],
    definitions: &[CategoryDefinition],
    query: &RankingQuery,
) -> Result<Vec<RankedPlayer>> {
    let scored = score::score_batch(batch, definitions, query)?;
    Ok(select_and_project(scored, query))
}

/// Ranking pass over upstream-precomputed z-scores (the dataset already
/// carries `z_*` fields); skips standardization.
pub fn rank_precomputed(
    batch: &[PlayerSeasonRecord],
    definitions: &[CategoryDefinition],
    query: &RankingQuery,
) -> Result<Vec<RankedPlayer>> {
    let scored = score::scored_from_precomputed(batch, definitions, query)?;
    Ok(select_and_project(scored, query))
}

fn select_and_project(
    scored: Vec<crate::model::ScoredPlayerRecord>,
    query: &RankingQuery,
) -> Vec<RankedPlayer> {
    let mut filtered = select::filter_players(scored, query.search_term.as_deref());
    select::sort_players(&mut filtered, &query.sort_key, query.direction());
    select::project(filtered, query.limit)
}

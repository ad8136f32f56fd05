//! Filtering, sorting, and final result projection.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::{
    error::{RankError, Result},
    model::{RankedPlayer, ScoredPlayerRecord, StatField},
};


/// What to order the result table by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SortKey {
    /// Composite total score.
    TotalScore,
    /// Positional rank; equivalent to total score with the sense flipped so
    /// that ascending rank puts the best player first.
    Rank,
    PlayerName,
    Team,
    Position,
    /// A raw stat column.
    Raw(StatField),
    /// A category's z-score column, by category key.
    ZScore(String),
}

impl SortKey {
    /// Direction used when the caller picks a key without a direction:
    /// best-first for score and stat columns, A-to-Z for identity columns.
    pub fn default_direction(&self) -> SortDirection {
        match self {
            SortKey::PlayerName | SortKey::Team | SortKey::Position | SortKey::Rank => {
                SortDirection::Asc
            }
            _ => SortDirection::Desc,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::TotalScore => write!(f, "total"),
            SortKey::Rank => write!(f, "rank"),
            SortKey::PlayerName => write!(f, "name"),
            SortKey::Team => write!(f, "team"),
            SortKey::Position => write!(f, "position"),
            SortKey::Raw(field) => write!(f, "{}", field),
            SortKey::ZScore(key) => write!(f, "z:{}", key),
        }
    }
}

impl FromStr for SortKey {
    type Err = RankError;

    /// Accepts `total`, `rank`, `name`, `team`, `position`, a stat
    /// abbreviation (`pts`, `reb`, ...), or `z:<category key>`.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "total" | "total_score" | "score" => Ok(SortKey::TotalScore),
            "rank" => Ok(SortKey::Rank),
            "name" | "player" => Ok(SortKey::PlayerName),
            "team" => Ok(SortKey::Team),
            "position" | "pos" => Ok(SortKey::Position),
            _ => {
                if let Some(key) = s.strip_prefix("z:").or_else(|| s.strip_prefix("Z:")) {
                    if key.is_empty() {
                        return Err(RankError::InvalidSortKey { key: s.to_string() });
                    }
                    return Ok(SortKey::ZScore(key.to_string()));
                }
                s.parse::<StatField>()
                    .map(SortKey::Raw)
                    .map_err(|_| RankError::InvalidSortKey { key: s.to_string() })
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(RankError::InvalidSortKey { key: s.to_string() }),
        }
    }
}

/// Retain players whose name contains the search term, case-insensitively.
/// An empty or absent term keeps everyone; a missing name matches as the
/// empty string.
pub fn filter_players(players: Vec<ScoredPlayerRecord>, search_term: Option<&str>) -> Vec<ScoredPlayerRecord> {
    let term = match search_term {
        Some(t) if !t.is_empty() => t.to_lowercase(),
        _ => return players,
    };
    players
        .into_iter()
        .filter(|p| p.name().to_lowercase().contains(&term))
        .collect()
}

/// Deterministic case-insensitive string ordering: lowercase comparison
/// first, raw bytes to break case-only ties.
fn cmp_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

fn cmp_by_key(a: &ScoredPlayerRecord, b: &ScoredPlayerRecord, key: &SortKey) -> Ordering {
    match key {
        SortKey::TotalScore => a.total_score.total_cmp(&b.total_score),
        // Ascending rank means descending total score.
        SortKey::Rank => b.total_score.total_cmp(&a.total_score),
        SortKey::PlayerName => cmp_names(a.name(), b.name()),
        SortKey::Team => cmp_names(
            a.record.team.as_deref().unwrap_or(""),
            b.record.team.as_deref().unwrap_or(""),
        ),
        SortKey::Position => cmp_names(
            a.record.position.as_deref().unwrap_or(""),
            b.record.position.as_deref().unwrap_or(""),
        ),
        SortKey::Raw(field) => field.value(&a.record).total_cmp(&field.value(&b.record)),
        // A z-score column a player lacks sorts as -inf: last in desc,
        // first in asc.
        SortKey::ZScore(cat) => a
            .z_score(cat)
            .unwrap_or(f64::NEG_INFINITY)
            .total_cmp(&b.z_score(cat).unwrap_or(f64::NEG_INFINITY)),
    }
}

/// Stable sort with a deterministic name-ascending tie-break.
///
/// The tie-break applies after the direction flip, so exactly-equal values
/// always list alphabetically regardless of direction.
pub fn sort_players(
    players: &mut [ScoredPlayerRecord],
    key: &SortKey,
    direction: SortDirection,
) {
    players.sort_by(|a, b| {
        let base = match direction {
            SortDirection::Asc => cmp_by_key(a, b, key),
            SortDirection::Desc => cmp_by_key(b, a, key),
        };
        base.then_with(|| cmp_names(a.name(), b.name()))
    });
}

/// Truncate to `limit` and annotate each row with its 1-based display rank
/// in the final sequence. Idempotent for a given limit.
pub fn project(players: Vec<ScoredPlayerRecord>, limit: Option<usize>) -> Vec<RankedPlayer> {
    players
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(i, player)| RankedPlayer {
            rank: i + 1,
            player,
        })
        .collect()
}

//! Data model: input player records, the dataset envelope, and the scored
//! records the engine hands to a presentation layer.

pub mod category;


pub use category::{CategoryDefinition, CategoryKind, StatField};

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Lenient stat deserializer: upstream datasets occasionally carry `"N/A"`,
/// null, or stringified numbers in stat cells. Non-numeric values become 0
/// (they stay in the league-mean denominator); numeric strings are coerced.
fn de_stat_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(raw
        .as_f64()
        .or_else(|| raw.as_str().and_then(|s| s.trim().parse().ok()))
        .filter(|v: &f64| v.is_finite())
        .unwrap_or(0.0))
}

fn de_stat_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(raw
        .as_u64()
        .map(|n| n as u32)
        .or_else(|| raw.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u32))
        .or_else(|| raw.as_str().and_then(|s| s.trim().parse().ok()))
        .unwrap_or(0))
}

/// One player's aggregate statistics for a season or date range.
///
/// Field names mirror the upstream `predictions.json` keys. Missing numeric
/// fields deserialize as 0 rather than being excluded, so league means keep
/// the full batch in their denominator. Unrecognized fields (profile links,
/// upstream-precomputed z-scores, ...) are carried in `extra` untouched.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerSeasonRecord {
    #[serde(rename = "playerId", default)]
    pub player_id: u64,
    #[serde(rename = "playerName", default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(rename = "GP", default, deserialize_with = "de_stat_u32")]
    pub games_played: u32,
    #[serde(rename = "numMinutes", default, deserialize_with = "de_stat_f64")]
    pub minutes_per_game: f64,
    #[serde(default, deserialize_with = "de_stat_f64")]
    pub points: f64,
    #[serde(rename = "reboundsTotal", default, deserialize_with = "de_stat_f64")]
    pub rebounds: f64,
    #[serde(default, deserialize_with = "de_stat_f64")]
    pub assists: f64,
    #[serde(default, deserialize_with = "de_stat_f64")]
    pub steals: f64,
    #[serde(default, deserialize_with = "de_stat_f64")]
    pub blocks: f64,
    #[serde(rename = "threePointersMade", default, deserialize_with = "de_stat_f64")]
    pub three_pointers_made: f64,
    #[serde(default, deserialize_with = "de_stat_f64")]
    pub turnovers: f64,
    #[serde(rename = "fieldGoalsMade", default, deserialize_with = "de_stat_f64")]
    pub field_goals_made: f64,
    #[serde(rename = "fieldGoalsAttempted", default, deserialize_with = "de_stat_f64")]
    pub field_goals_attempted: f64,
    #[serde(rename = "freeThrowsMade", default, deserialize_with = "de_stat_f64")]
    pub free_throws_made: f64,
    #[serde(rename = "freeThrowsAttempted", default, deserialize_with = "de_stat_f64")]
    pub free_throws_attempted: f64,
    /// Passthrough for fields the engine does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl PlayerSeasonRecord {
    /// Player name for filtering and sorting; a missing name is the empty
    /// string, never an error.
    pub fn name(&self) -> &str {
        self.player_name.as_deref().unwrap_or("")
    }

    /// Look up an upstream-precomputed numeric field from the passthrough
    /// map (e.g. `z_points`).
    pub fn extra_f64(&self, key: &str) -> Option<f64> {
        self.extra.get(key).and_then(|v| v.as_f64())
    }
}

/// Top-level envelope of the predictions dataset file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PredictionsFile {
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: Option<String>,
    #[serde(rename = "seasonLongProjections", default)]
    pub season_long_projections: Vec<PlayerSeasonRecord>,
}

/// Per-category league aggregate for one ranking pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryStats {
    pub mean: f64,
    pub std_dev: f64,
}

/// A [`PlayerSeasonRecord`] decorated with derived scores.
///
/// Every z-score is already sign-corrected: positive always means good for
/// the player's fantasy value, including for inverted categories.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredPlayerRecord {
    #[serde(flatten)]
    pub record: PlayerSeasonRecord,
    /// Signed z-score per active category key.
    pub z_scores: BTreeMap<String, f64>,
    /// Sum (or average, in normalized mode) of active weighted z-scores.
    pub total_score: f64,
}

impl ScoredPlayerRecord {
    pub fn name(&self) -> &str {
        self.record.name()
    }

    pub fn z_score(&self, key: &str) -> Option<f64> {
        self.z_scores.get(key).copied()
    }
}

/// Final consumer-facing row: a scored record plus its 1-based display rank
/// within the filtered, sorted, truncated result.
#[derive(Debug, Clone, Serialize)]
pub struct RankedPlayer {
    pub rank: usize,
    #[serde(flatten)]
    pub player: ScoredPlayerRecord,
}

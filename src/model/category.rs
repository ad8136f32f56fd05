//! Scoring category definitions and raw-stat field accessors.

use crate::error::{RankError, Result};
use crate::model::PlayerSeasonRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A raw numeric field of a [`PlayerSeasonRecord`].
///
/// Resolving a category to one of these variants up front replaces the
/// upstream per-cell string lookups with a single match, and makes the set
/// of readable fields a closed, typo-proof enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatField {
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    ThreePointersMade,
    Turnovers,
    FieldGoalsMade,
    FieldGoalsAttempted,
    FreeThrowsMade,
    FreeThrowsAttempted,
    GamesPlayed,
    MinutesPerGame,
}

impl StatField {
    /// Read this field's value from a record.
    pub fn value(&self, rec: &PlayerSeasonRecord) -> f64 {
        match self {
            StatField::Points => rec.points,
            StatField::Rebounds => rec.rebounds,
            StatField::Assists => rec.assists,
            StatField::Steals => rec.steals,
            StatField::Blocks => rec.blocks,
            StatField::ThreePointersMade => rec.three_pointers_made,
            StatField::Turnovers => rec.turnovers,
            StatField::FieldGoalsMade => rec.field_goals_made,
            StatField::FieldGoalsAttempted => rec.field_goals_attempted,
            StatField::FreeThrowsMade => rec.free_throws_made,
            StatField::FreeThrowsAttempted => rec.free_throws_attempted,
            StatField::GamesPlayed => rec.games_played as f64,
            StatField::MinutesPerGame => rec.minutes_per_game,
        }
    }

    /// The upstream JSON name of this field (used for `z_<field>` lookups
    /// when the dataset carries precomputed z-scores).
    pub fn json_name(&self) -> &'static str {
        match self {
            StatField::Points => "points",
            StatField::Rebounds => "reboundsTotal",
            StatField::Assists => "assists",
            StatField::Steals => "steals",
            StatField::Blocks => "blocks",
            StatField::ThreePointersMade => "threePointersMade",
            StatField::Turnovers => "turnovers",
            StatField::FieldGoalsMade => "fieldGoalsMade",
            StatField::FieldGoalsAttempted => "fieldGoalsAttempted",
            StatField::FreeThrowsMade => "freeThrowsMade",
            StatField::FreeThrowsAttempted => "freeThrowsAttempted",
            StatField::GamesPlayed => "GP",
            StatField::MinutesPerGame => "numMinutes",
        }
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatField::Points => "PTS",
            StatField::Rebounds => "REB",
            StatField::Assists => "AST",
            StatField::Steals => "STL",
            StatField::Blocks => "BLK",
            StatField::ThreePointersMade => "3PM",
            StatField::Turnovers => "TOV",
            StatField::FieldGoalsMade => "FGM",
            StatField::FieldGoalsAttempted => "FGA",
            StatField::FreeThrowsMade => "FTM",
            StatField::FreeThrowsAttempted => "FTA",
            StatField::GamesPlayed => "GP",
            StatField::MinutesPerGame => "MIN",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for StatField {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "PTS" => Ok(StatField::Points),
            "REB" => Ok(StatField::Rebounds),
            "AST" => Ok(StatField::Assists),
            "STL" => Ok(StatField::Steals),
            "BLK" => Ok(StatField::Blocks),
            "3PM" => Ok(StatField::ThreePointersMade),
            "TOV" | "TO" => Ok(StatField::Turnovers),
            "FGM" => Ok(StatField::FieldGoalsMade),
            "FGA" => Ok(StatField::FieldGoalsAttempted),
            "FTM" => Ok(StatField::FreeThrowsMade),
            "FTA" => Ok(StatField::FreeThrowsAttempted),
            "GP" => Ok(StatField::GamesPlayed),
            "MIN" => Ok(StatField::MinutesPerGame),
            _ => Err(RankError::InvalidSortKey { key: s.to_string() }),
        }
    }
}

/// How a category derives its per-player raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryKind {
    /// A plain counting stat, standardized directly. `invert` flips the
    /// z-score sign for stats where fewer is better (turnovers).
    Counting { field: StatField, invert: bool },
    /// A volume-weighted shooting efficiency stat (FG%/FT% impact).
    PercentageImpact {
        made: StatField,
        attempted: StatField,
    },
}

/// One scoring category: a stable key plus the rule for reading its raw
/// value out of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub key: String,
    pub kind: CategoryKind,
}

impl CategoryDefinition {
    pub fn counting(key: &str, field: StatField) -> Self {
        Self {
            key: key.to_string(),
            kind: CategoryKind::Counting {
                field,
                invert: false,
            },
        }
    }

    pub fn inverted(key: &str, field: StatField) -> Self {
        Self {
            key: key.to_string(),
            kind: CategoryKind::Counting {
                field,
                invert: true,
            },
        }
    }

    pub fn percentage_impact(key: &str, made: StatField, attempted: StatField) -> Self {
        Self {
            key: key.to_string(),
            kind: CategoryKind::PercentageImpact { made, attempted },
        }
    }

    /// True when fewer is better for this category.
    pub fn is_inverted(&self) -> bool {
        matches!(
            self.kind,
            CategoryKind::Counting { invert: true, .. }
        )
    }

    /// The field name used when looking up an upstream-precomputed z-score
    /// (`z_points`, `z_FG_impact`, ...).
    pub fn precomputed_z_field(&self) -> String {
        match self.kind {
            CategoryKind::Counting { field, .. } => format!("z_{}", field.json_name()),
            CategoryKind::PercentageImpact { .. } => format!("z_{}", self.key),
        }
    }

    /// The standard nine-category configuration: PTS, REB, AST, STL, BLK,
    /// 3PM, TOV (inverted), FG% impact, FT% impact.
    pub fn standard_nine() -> Vec<CategoryDefinition> {
        vec![
            Self::counting("PTS", StatField::Points),
            Self::counting("REB", StatField::Rebounds),
            Self::counting("AST", StatField::Assists),
            Self::counting("STL", StatField::Steals),
            Self::counting("BLK", StatField::Blocks),
            Self::counting("3PM", StatField::ThreePointersMade),
            Self::inverted("TOV", StatField::Turnovers),
            Self::percentage_impact(
                "FG_impact",
                StatField::FieldGoalsMade,
                StatField::FieldGoalsAttempted,
            ),
            Self::percentage_impact(
                "FT_impact",
                StatField::FreeThrowsMade,
                StatField::FreeThrowsAttempted,
            ),
        ]
    }
}

impl fmt::Display for CategoryDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

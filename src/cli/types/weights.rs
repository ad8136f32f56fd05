//! `KEY=WEIGHT` pairs for the `--weight` flag.

use crate::error::{RankError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One category weight override, parsed from `KEY=WEIGHT` (e.g. `PTS=2.0`).
///
/// Parsing accepts any finite number; range validation (weights must be
/// finite and non-negative for active categories) happens in the engine so
/// that the error surfaces the same way for CLI and library callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSpec {
    pub key: String,
    pub weight: f64,
}

impl fmt::Display for WeightSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.weight)
    }
}

impl FromStr for WeightSpec {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self> {
        let (key, value) = s.split_once('=').ok_or_else(|| RankError::InvalidWeightSpec {
            spec: s.to_string(),
        })?;
        if key.is_empty() {
            return Err(RankError::InvalidWeightSpec {
                spec: s.to_string(),
            });
        }
        let weight: f64 = value.trim().parse()?;
        if !weight.is_finite() {
            return Err(RankError::InvalidWeightSpec {
                spec: s.to_string(),
            });
        }
        Ok(Self {
            key: key.trim().to_string(),
            weight,
        })
    }
}

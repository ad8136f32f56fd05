//! Category standardization: league mean, population standard deviation,
//! and signed z-scores.

use crate::error::{RankError, Result};
use crate::model::CategoryStats;


/// Compute the league mean and population standard deviation (divide by N,
/// not N-1) for one category's raw values.
///
/// An empty batch has no defined mean and is rejected rather than allowed
/// to propagate NaN into player scores.
pub fn category_stats(values: &[f64]) -> Result<CategoryStats> {
    if values.is_empty() {
        return Err(RankError::EmptyBatch);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Ok(CategoryStats {
        mean,
        std_dev: variance.sqrt(),
    })
}

/// Z-score of one value against batch stats.
///
/// A zero standard deviation (all players identical, or batch of one)
/// yields 0 for every player, never NaN or Infinity.
pub fn z_score(value: f64, stats: &CategoryStats) -> f64 {
    if stats.std_dev > 0.0 {
        (value - stats.mean) / stats.std_dev
    } else {
        0.0
    }
}

/// Standardize a full column of raw values, flipping the sign when `invert`
/// is set so that a positive result always means good for the player.
pub fn standardize(values: &[f64], invert: bool) -> Result<Vec<f64>> {
    let stats = category_stats(values)?;
    let sign = if invert { -1.0 } else { 1.0 };
    Ok(values
        .iter()
        .map(|&v| {
            let z = sign * z_score(v, &stats);
            // Normalize -0.0 so total_cmp-based sorts treat all zero
            // z-scores identically.
            if z == 0.0 {
                0.0
            } else {
                z
            }
        })
        .collect())
}

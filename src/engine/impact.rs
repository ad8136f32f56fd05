//! Volume-weighted shooting impact for percentage categories (FG%, FT%).
//!
//! Raw percentage is a bad ranking signal: 100% on one attempt is not more
//! valuable than 55% on fifteen. The impact value weights a player's
//! efficiency edge over the league by their attempt volume.

use crate::model::{PlayerSeasonRecord, StatField};


/// League-wide shooting percentage: total makes over total attempts,
/// defined as 0 when the league attempted nothing.
pub fn league_percentage(batch: &[PlayerSeasonRecord], made: StatField, attempted: StatField) -> f64 {
    let made_total: f64 = batch.iter().map(|p| made.value(p)).sum();
    let attempted_total: f64 = batch.iter().map(|p| attempted.value(p)).sum();
    if attempted_total > 0.0 {
        made_total / attempted_total
    } else {
        0.0
    }
}

/// Per-player impact values for one percentage category:
/// `(player_pct - league_pct) * attempts`.
///
/// A player with zero attempts has pct 0 by definition and contributes an
/// impact of exactly 0; it still participates in standardization.
pub fn impact_values(
    batch: &[PlayerSeasonRecord],
    made: StatField,
    attempted: StatField,
) -> Vec<f64> {
    let league_pct = league_percentage(batch, made, attempted);
    batch
        .iter()
        .map(|p| {
            let attempts = attempted.value(p);
            if attempts > 0.0 {
                let pct = made.value(p) / attempts;
                (pct - league_pct) * attempts
            } else {
                0.0
            }
        })
        .collect()
}

//! Composite scoring: validates a ranking query, standardizes every active
//! category, and sums the weighted, sign-corrected z-scores per player.

use rayon::prelude::*;
use std::collections::BTreeMap;

use crate::{
    engine::{
        impact::impact_values,
        standardize::standardize,
        RankingQuery, ScoringMode,
    },
    error::{RankError, Result},
    model::{CategoryDefinition, CategoryKind, PlayerSeasonRecord, ScoredPlayerRecord},
};


/// Resolve the query's active category keys against the supplied
/// definitions, also checking weights.
///
/// Weight entries for punted categories are ignored entirely; a negative
/// or non-finite weight on an active category is rejected. Inversion is
/// expressed via a category's invert flag, not via negative weights, and a
/// NaN weight would otherwise poison every total score.
pub fn resolve_active<'a>(
    definitions: &'a [CategoryDefinition],
    query: &RankingQuery,
) -> Result<Vec<&'a CategoryDefinition>> {
    let mut active = Vec::with_capacity(query.active_categories.len());
    for key in &query.active_categories {
        let def = definitions
            .iter()
            .find(|d| &d.key == key)
            .ok_or_else(|| RankError::UnknownCategory { key: key.clone() })?;
        let weight = query.weight_for(key);
        // NaN compares false against everything, so a plain `< 0.0` check
        // would wave it through.
        if !weight.is_finite() || weight < 0.0 {
            return Err(RankError::InvalidWeight {
                key: key.clone(),
                weight,
            });
        }
        active.push(def);
    }
    Ok(active)
}

/// Score a batch from raw stats: standardize each active category (counting
/// stats directly, percentage categories via their impact values) and
/// combine into a total per player.
///
/// Pure with respect to the input: the caller's records are cloned into new
/// decorated records, never mutated. The per-category passes are
/// independent and run in parallel; the composite sum joins them.
pub fn score_batch(
    batch: &[PlayerSeasonRecord],
    definitions: &[CategoryDefinition],
    query: &RankingQuery,
) -> Result<Vec<ScoredPlayerRecord>> {
    if batch.is_empty() {
        return Err(RankError::EmptyBatch);
    }
    let active = resolve_active(definitions, query)?;

    let columns: Vec<(String, Vec<f64>)> = active
        .par_iter()
        .map(|def| -> Result<(String, Vec<f64>)> {
            let z_column = match def.kind {
                CategoryKind::Counting { field, invert } => {
                    let raw: Vec<f64> = batch.iter().map(|p| field.value(p)).collect();
                    standardize(&raw, invert)?
                }
                CategoryKind::PercentageImpact { made, attempted } => {
                    standardize(&impact_values(batch, made, attempted), false)?
                }
            };
            Ok((def.key.clone(), z_column))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(combine(batch, query, &columns))
}

/// Alternate entry point: the upstream dataset already carries final
/// z-scores (`z_points`, `z_FG_impact`, ...) in each record's passthrough
/// fields. Consumes them directly, skipping standardization; missing fields
/// contribute 0, matching the upstream `player[z_col] || 0` fallback.
pub fn scored_from_precomputed(
    batch: &[PlayerSeasonRecord],
    definitions: &[CategoryDefinition],
    query: &RankingQuery,
) -> Result<Vec<ScoredPlayerRecord>> {
    if batch.is_empty() {
        return Err(RankError::EmptyBatch);
    }
    let active = resolve_active(definitions, query)?;

    let columns: Vec<(String, Vec<f64>)> = active
        .iter()
        .map(|def| {
            let field = def.precomputed_z_field();
            let z_column = batch
                .iter()
                .map(|p| {
                    p.extra_f64(&field)
                        .or_else(|| p.extra_f64(&format!("z_{}", def.key)))
                        .unwrap_or(0.0)
                })
                .collect();
            (def.key.clone(), z_column)
        })
        .collect();

    Ok(combine(batch, query, &columns))
}

fn combine(
    batch: &[PlayerSeasonRecord],
    query: &RankingQuery,
    columns: &[(String, Vec<f64>)],
) -> Vec<ScoredPlayerRecord> {
    batch
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let mut z_scores = BTreeMap::new();
            let mut total = 0.0;
            for (key, column) in columns {
                let z = column[i];
                z_scores.insert(key.clone(), z);
                total += query.weight_for(key) * z;
            }
            if query.mode == ScoringMode::Average && !columns.is_empty() {
                total /= columns.len() as f64;
            }
            ScoredPlayerRecord {
                record: record.clone(),
                z_scores,
                total_score: total,
            }
        })
        .collect()
}

//! Rank command implementation

use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;

use crate::{
    cli::RankOpts,
    engine::{self, RankingQuery, ScoringMode, SortKey},
    model::{CategoryDefinition, PredictionsFile, RankedPlayer},
    Result,
};

/// Read and parse the predictions dataset from disk.
pub fn load_predictions(path: &Path) -> Result<PredictionsFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    let file: PredictionsFile = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse dataset {}", path.display()))?;
    Ok(file)
}

/// Build a ranking query from CLI options against the supplied category
/// definitions. `--only` replaces the active set; `--punt` removes from it
/// (matched case-insensitively, unknown punts are a no-op, mirroring a
/// checkbox that does not exist).
pub fn build_query(opts: &RankOpts, definitions: &[CategoryDefinition]) -> RankingQuery {
    let base: Vec<String> = if opts.only.is_empty() {
        definitions.iter().map(|d| d.key.clone()).collect()
    } else {
        opts.only.clone()
    };
    let punts: Vec<String> = opts.punt.iter().map(|p| p.to_lowercase()).collect();
    let active_categories: Vec<String> = base
        .into_iter()
        .filter(|key| !punts.contains(&key.to_lowercase()))
        .collect();

    let category_weights: BTreeMap<String, f64> = opts
        .weight
        .iter()
        .map(|w| (w.key.clone(), w.weight))
        .collect();

    RankingQuery {
        active_categories,
        category_weights,
        search_term: opts.name.clone(),
        limit: opts.limit,
        sort_key: opts.sort.clone(),
        sort_direction: opts.direction,
        mode: if opts.normalized {
            ScoringMode::Average
        } else {
            ScoringMode::Sum
        },
    }
}

/// Handle the rank command: load the dataset, run one ranking pass, print.
pub fn handle_rank(opts: RankOpts, as_json: bool) -> Result<()> {
    let definitions = CategoryDefinition::standard_nine();
    let query = build_query(&opts, &definitions);
    let file = load_predictions(&opts.data)?;

    let ranked = if opts.precomputed {
        engine::rank_precomputed(&file.season_long_projections, &definitions, &query)?
    } else {
        engine::rank_players(&file.season_long_projections, &definitions, &query)?
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if let Some(updated) = &file.last_updated {
        println!("Dataset last updated: {}", updated);
    }
    println!(
        "Ranking {} players by {} ({})",
        ranked.len(),
        query.sort_key,
        query.direction(),
    );
    print_table(&ranked, &query);
    Ok(())
}

fn print_table(ranked: &[RankedPlayer], query: &RankingQuery) {
    print!("{:>4}  {:<26} {:>8}", "RANK", "PLAYER", "TOTAL");
    for key in &query.active_categories {
        print!(" {:>10}", format!("z{}", key_label(key)));
    }
    println!();

    for row in ranked {
        print!(
            "{:>4}  {:<26} {:>8.2}",
            row.rank,
            row.player.name(),
            row.player.total_score
        );
        for key in &query.active_categories {
            match row.player.z_score(key) {
                Some(z) => print!(" {:>10.2}", z),
                None => print!(" {:>10}", "-"),
            }
        }
        println!();
    }

    if query.sort_key == SortKey::TotalScore && query.active_categories.is_empty() {
        println!("(no active categories: every total is 0)");
    }
}

fn key_label(key: &str) -> &str {
    // Compact the long impact keys for column headers.
    key.strip_suffix("_impact").unwrap_or(key)
}

//! Integration tests for the full ranking pipeline

use fbb_rank::{
    engine::{self, RankingQuery, ScoringMode},
    model::{CategoryDefinition, PlayerSeasonRecord, StatField},
    RankError, SortDirection, SortKey,
};

fn player(name: &str, points: f64, rebounds: f64) -> PlayerSeasonRecord {
    PlayerSeasonRecord {
        player_name: Some(name.to_string()),
        points,
        rebounds,
        ..Default::default()
    }
}

/// The three-player scenario from the reference data: mean PTS 20 with
/// population std ~8.165, mean REB 10 with std ~4.082.
fn abc_batch() -> Vec<PlayerSeasonRecord> {
    vec![
        player("A", 30.0, 5.0),
        player("B", 20.0, 10.0),
        player("C", 10.0, 15.0),
    ]
}

fn pts_reb_defs() -> Vec<CategoryDefinition> {
    vec![
        CategoryDefinition::counting("PTS", StatField::Points),
        CategoryDefinition::counting("REB", StatField::Rebounds),
    ]
}

#[test]
fn test_balanced_categories_cancel_and_tie_break_alphabetically() {
    let defs = pts_reb_defs();
    let query = RankingQuery::standard(&defs);
    let ranked = engine::rank_players(&abc_batch(), &defs, &query).unwrap();

    // Every total cancels to ~0, so the name tie-break decides the order.
    for row in &ranked {
        assert!(row.player.total_score.abs() < 1e-9);
    }
    let names: Vec<&str> = ranked.iter().map(|r| r.player.name()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[2].rank, 3);

    let a = &ranked[0].player;
    assert!((a.z_scores["PTS"] - 1.2247).abs() < 1e-3);
    assert!((a.z_scores["REB"] + 1.2247).abs() < 1e-3);
}

#[test]
fn test_punting_rebounds_reorders_descending() {
    let defs = pts_reb_defs();
    let mut query = RankingQuery::standard(&defs);
    query.active_categories.retain(|k| k != "REB");
    let ranked = engine::rank_players(&abc_batch(), &defs, &query).unwrap();

    let names: Vec<&str> = ranked.iter().map(|r| r.player.name()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert!((ranked[0].player.total_score - 1.2247).abs() < 1e-3);
    assert!(ranked[1].player.total_score.abs() < 1e-9);
    assert!((ranked[2].player.total_score + 1.2247).abs() < 1e-3);
}

#[test]
fn test_search_filter_applies_after_scoring() {
    let defs = pts_reb_defs();
    let mut query = RankingQuery::standard(&defs);
    query.active_categories.retain(|k| k != "REB");
    query.search_term = Some("c".to_string());
    let ranked = engine::rank_players(&abc_batch(), &defs, &query).unwrap();

    // The filter narrows the output, but C's z-score is still computed
    // against the full three-player batch.
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].player.name(), "C");
    assert_eq!(ranked[0].rank, 1);
    assert!((ranked[0].player.total_score + 1.2247).abs() < 1e-3);
}

#[test]
fn test_search_filter_no_match_is_empty_not_error() {
    let defs = pts_reb_defs();
    let mut query = RankingQuery::standard(&defs);
    query.search_term = Some("zzz".to_string());
    let ranked = engine::rank_players(&abc_batch(), &defs, &query).unwrap();
    assert!(ranked.is_empty());
}

#[test]
fn test_limit_truncates_after_sort() {
    let defs = pts_reb_defs();
    let mut query = RankingQuery::standard(&defs);
    query.active_categories.retain(|k| k != "REB");
    query.limit = Some(2);
    let ranked = engine::rank_players(&abc_batch(), &defs, &query).unwrap();
    let names: Vec<&str> = ranked.iter().map(|r| r.player.name()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn test_repeat_runs_are_identical() {
    let defs = CategoryDefinition::standard_nine();
    let batch: Vec<PlayerSeasonRecord> = (0..40)
        .map(|i| PlayerSeasonRecord {
            player_name: Some(format!("Player {:02}", i)),
            points: (i % 7) as f64 * 3.0,
            rebounds: (i % 5) as f64 * 2.0,
            assists: (i % 3) as f64,
            turnovers: (i % 4) as f64,
            field_goals_made: (i % 6) as f64,
            field_goals_attempted: (i % 6) as f64 + 4.0,
            free_throws_made: (i % 2) as f64,
            free_throws_attempted: (i % 2) as f64 + 1.0,
            ..Default::default()
        })
        .collect();
    let query = RankingQuery::standard(&defs);

    let first = engine::rank_players(&batch, &defs, &query).unwrap();
    let second = engine::rank_players(&batch, &defs, &query).unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.rank, b.rank);
        assert_eq!(a.player.name(), b.player.name());
        assert_eq!(a.player.total_score, b.player.total_score);
    }
}

#[test]
fn test_turnover_inversion_through_pipeline() {
    let defs = vec![CategoryDefinition::inverted("TOV", StatField::Turnovers)];
    let batch = vec![
        PlayerSeasonRecord {
            player_name: Some("Careful".to_string()),
            turnovers: 1.0,
            ..Default::default()
        },
        PlayerSeasonRecord {
            player_name: Some("Sloppy".to_string()),
            turnovers: 5.0,
            ..Default::default()
        },
    ];
    let query = RankingQuery::standard(&defs);
    let ranked = engine::rank_players(&batch, &defs, &query).unwrap();

    assert_eq!(ranked[0].player.name(), "Careful");
    assert!(ranked[0].player.total_score > 0.0);
    assert!(ranked[1].player.total_score < 0.0);
}

#[test]
fn test_impact_category_through_pipeline() {
    let defs = vec![CategoryDefinition::percentage_impact(
        "FG_impact",
        StatField::FieldGoalsMade,
        StatField::FieldGoalsAttempted,
    )];
    // Identical 60% shooters at different volume, against a 50% league.
    let mk = |name: &str, made: f64, att: f64| PlayerSeasonRecord {
        player_name: Some(name.to_string()),
        field_goals_made: made,
        field_goals_attempted: att,
        ..Default::default()
    };
    let batch = vec![
        mk("LowVolume", 3.0, 5.0),
        mk("HighVolume", 12.0, 20.0),
        mk("Anchor", 10.0, 25.0),
        mk("Bench", 0.0, 0.0),
    ];
    let query = RankingQuery::standard(&defs);
    let ranked = engine::rank_players(&batch, &defs, &query).unwrap();

    assert_eq!(ranked[0].player.name(), "HighVolume");
    let by_name = |n: &str| {
        ranked
            .iter()
            .find(|r| r.player.name() == n)
            .unwrap()
            .player
            .total_score
    };
    assert!(by_name("HighVolume") > by_name("LowVolume"));
    assert!(by_name("Bench").is_finite());
}

#[test]
fn test_nan_weight_fails_instead_of_poisoning_totals() {
    let defs = pts_reb_defs();
    let mut query = RankingQuery::standard(&defs);
    query.category_weights.insert("PTS".to_string(), f64::NAN);
    let result = engine::rank_players(&abc_batch(), &defs, &query);
    assert!(matches!(
        result,
        Err(RankError::InvalidWeight { ref key, .. }) if key == "PTS"
    ));
}

#[test]
fn test_empty_batch_fails_whole() {
    let defs = pts_reb_defs();
    let query = RankingQuery::standard(&defs);
    let result = engine::rank_players(&[], &defs, &query);
    assert!(matches!(result, Err(RankError::EmptyBatch)));
}

#[test]
fn test_normalized_mode_preserves_order() {
    let defs = pts_reb_defs();
    let mut query = RankingQuery::standard(&defs);
    query.active_categories.retain(|k| k != "REB");
    query.mode = ScoringMode::Average;
    let ranked = engine::rank_players(&abc_batch(), &defs, &query).unwrap();

    // One active category: average equals the sum.
    assert!((ranked[0].player.total_score - 1.2247).abs() < 1e-3);
}

#[test]
fn test_sort_by_raw_stat_ascending() {
    let defs = pts_reb_defs();
    let mut query = RankingQuery::standard(&defs);
    query.sort_key = SortKey::Raw(StatField::Points);
    query.sort_direction = Some(SortDirection::Asc);
    let ranked = engine::rank_players(&abc_batch(), &defs, &query).unwrap();
    let names: Vec<&str> = ranked.iter().map(|r| r.player.name()).collect();
    assert_eq!(names, vec!["C", "B", "A"]);
}

#[test]
fn test_precomputed_pipeline_matches_upstream_semantics() {
    let defs = vec![
        CategoryDefinition::counting("PTS", StatField::Points),
        CategoryDefinition::inverted("TOV", StatField::Turnovers),
    ];
    // Upstream datasets ship z_turnovers already negated for bad turnover
    // numbers; the precomputed path must consume the sign as-is.
    let mk = |name: &str, z_pts: f64, z_tov: f64| {
        let mut p = PlayerSeasonRecord {
            player_name: Some(name.to_string()),
            ..Default::default()
        };
        p.extra
            .insert("z_points".to_string(), serde_json::json!(z_pts));
        p.extra
            .insert("z_turnovers".to_string(), serde_json::json!(z_tov));
        p
    };
    let batch = vec![mk("Star", 2.0, -0.5), mk("RolePlayer", -1.0, 0.5)];
    let query = RankingQuery::standard(&defs);
    let ranked = engine::rank_precomputed(&batch, &defs, &query).unwrap();

    assert_eq!(ranked[0].player.name(), "Star");
    assert!((ranked[0].player.total_score - 1.5).abs() < 1e-12);
    assert!((ranked[1].player.total_score + 0.5).abs() < 1e-12);
}

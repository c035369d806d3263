//! Sample Data Tests
//!
//! Runs the catalogue against the documents the site ships with.

use std::sync::Arc;

use crochet_core::{
    index_rounds, search_patterns, Catalogue, MemoryStorage, ProgressKey, ProgressTracker,
    StepCursor, YarnInventory, POPULAR_PATTERNS,
};
use pretty_assertions::assert_eq;

const PATTERNS: &str = include_str!("../../../data/patterns.json");
const YARN: &str = include_str!("../../../data/yarn.json");

fn catalogue() -> Catalogue {
    Catalogue::from_json(PATTERNS).expect("sample patterns should parse")
}

fn keys(patterns: &[Arc<crochet_core::PatternRecord>]) -> Vec<&str> {
    patterns.iter().map(|p| p.key.as_str()).collect()
}

#[test]
fn test_cat_bag_first_step_rounds() {
    let catalogue = catalogue();
    let pattern = catalogue.pattern("cat-bag").unwrap();
    let cursor = StepCursor::new(pattern, 0).unwrap();
    let indexed = index_rounds(&cursor);

    let per_substep: Vec<Vec<usize>> = indexed
        .substeps
        .iter()
        .map(|s| s.rounds.iter().map(|r| r.index).collect())
        .collect();
    assert_eq!(per_substep, vec![vec![0, 1], vec![2, 3, 4]]);
    assert_eq!(indexed.total_rounds, 5);
    assert_eq!(cursor.heading(), "1: Create the cat graphic");
}

#[test]
fn test_every_step_has_contiguous_rounds() {
    let catalogue = catalogue();
    for pattern in catalogue.store().iter() {
        for index in 0..pattern.steps.len() {
            let cursor = StepCursor::new(pattern, index).unwrap();
            let indexed = index_rounds(&cursor);
            let all: Vec<usize> = indexed.rounds().map(|r| r.index).collect();
            assert_eq!(all, (0..indexed.total_rounds).collect::<Vec<_>>(), "{} step {}", pattern.key, index);
            assert_eq!(indexed.total_rounds, pattern.steps[index].round_count());
        }
    }
}

#[test]
fn test_step_navigation_bounds() {
    let catalogue = catalogue();
    let pattern = catalogue.pattern("cat-bag").unwrap();

    let first = StepCursor::new(pattern, 0).unwrap();
    assert_eq!(first.previous(), 0);
    assert_eq!(first.next(), 1);

    let last = StepCursor::new(pattern, 1).unwrap();
    assert_eq!(last.next(), 1);
    assert!(StepCursor::new(pattern, 2).is_err());
}

#[test]
fn test_search_rose() {
    let catalogue = catalogue();
    assert_eq!(keys(&search_patterns(catalogue.store(), "rose")), vec!["rose-bunch"]);
    assert!(search_patterns(catalogue.store(), "zzz").is_empty());
}

#[test]
fn test_tote_bag_bucket() {
    let catalogue = catalogue();
    let totes = catalogue.categories().get("Tote Bag").unwrap();
    assert_eq!(keys(totes), vec!["cat-bag", "goose-bag"]);

    let first_bucket = catalogue.categories().names().next();
    assert_eq!(first_bucket, Some(POPULAR_PATTERNS));
}

#[test]
fn test_crochet_session_survives_reload() {
    let catalogue = catalogue();
    let pattern = catalogue.pattern("cat-bag").unwrap();
    let indexed = index_rounds(&StepCursor::new(pattern, 0).unwrap());
    let storage = MemoryStorage::new();
    let key = ProgressKey::new(&pattern.key, 0);

    let mut tracker = ProgressTracker::open(&storage, key.clone(), indexed.total_rounds).unwrap();
    for _ in 0..3 {
        tracker.advance(&storage).unwrap();
    }
    tracker.retreat(&storage).unwrap();

    let reloaded = ProgressTracker::open(&storage, key, indexed.total_rounds).unwrap();
    assert_eq!(reloaded.highlight_count(), 2);
    assert_eq!(reloaded.completed_rounds().collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn test_yarn_inventory() {
    let mut inventory = YarnInventory::from_json(YARN).unwrap();
    assert_eq!(inventory.len(), 5);
    assert_eq!(inventory.get("finch-blue").unwrap().colour_name, "Jeans Blue");

    assert!(inventory.remove("ninja-ornge"));
    let rows: Vec<String> = inventory.rows().into_iter().map(|r| r.key).collect();
    assert_eq!(rows, vec!["ninja-green", "woolen-tundra", "finch-white", "finch-blue"]);
}

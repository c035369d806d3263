//! Search Matcher

use std::sync::Arc;

use crate::catalogue::PatternStore;
use crate::model::PatternRecord;

/// Case-insensitive substring match on name, overview or the first category.
/// Results keep store order and hold each pattern once.
pub fn search_patterns(store: &PatternStore, query: &str) -> Vec<Arc<PatternRecord>> {
    let needle = query.to_lowercase();
    let mut results: Vec<Arc<PatternRecord>> = Vec::new();

    for pattern in store.iter() {
        if matches(pattern, &needle) && !results.iter().any(|seen| Arc::ptr_eq(seen, pattern)) {
            results.push(Arc::clone(pattern));
        }
    }

    log::debug!("Search {:?} matched {} patterns", query, results.len());
    results
}

fn matches(pattern: &PatternRecord, needle: &str) -> bool {
    pattern.name.to_lowercase().contains(needle)
        || pattern.overview.to_lowercase().contains(needle)
        || pattern
            .primary_category()
            .is_some_and(|category| category.to_lowercase().contains(needle))
}

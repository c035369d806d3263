//! Pattern Store and Category Index
//!
//! The store is loaded once from the pattern document; the category index is
//! derived from it in a single pass. Both hand out shared `Arc` records, so a
//! pattern listed under several categories is the same record everywhere.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{CatalogueError, CatalogueResult};
use crate::model::PatternRecord;

/// Bucket that exists even when no pattern declares it
pub const POPULAR_PATTERNS: &str = "Popular Patterns";

/// Pattern key -> record, in document order
#[derive(Debug, Clone, Default)]
pub struct PatternStore {
    patterns: IndexMap<String, Arc<PatternRecord>>,
}

impl PatternStore {
    /// Build from decoded records, stamping each record with its key
    pub fn from_records(records: IndexMap<String, PatternRecord>) -> Self {
        let patterns = records
            .into_iter()
            .map(|(key, mut record)| {
                record.key = key.clone();
                (key, Arc::new(record))
            })
            .collect();
        Self { patterns }
    }

    /// Parse the pattern document
    pub fn from_json(json: &str) -> CatalogueResult<Self> {
        let records: IndexMap<String, PatternRecord> = serde_json::from_str(json)?;
        let store = Self::from_records(records);
        log::info!("Loaded {} patterns", store.len());
        Ok(store)
    }

    pub fn get(&self, key: &str) -> Option<&Arc<PatternRecord>> {
        self.patterns.get(key)
    }

    /// Like `get`, but a missing key is an error
    pub fn require(&self, key: &str) -> CatalogueResult<&Arc<PatternRecord>> {
        self.get(key)
            .ok_or_else(|| CatalogueError::PatternNotFound(key.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<PatternRecord>> {
        self.patterns.values()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Category name -> patterns declaring it
#[derive(Debug, Clone)]
pub struct CategoryIndex {
    buckets: IndexMap<String, Vec<Arc<PatternRecord>>>,
}

impl CategoryIndex {
    /// Single pass over the store; buckets appear in first-seen order after
    /// the always-present popular bucket
    pub fn build(store: &PatternStore) -> Self {
        let mut buckets: IndexMap<String, Vec<Arc<PatternRecord>>> = IndexMap::new();
        buckets.insert(POPULAR_PATTERNS.to_string(), Vec::new());

        for pattern in store.iter() {
            for category in &pattern.categories {
                buckets
                    .entry(category.clone())
                    .or_default()
                    .push(Arc::clone(pattern));
            }
        }

        log::debug!("Indexed {} categories", buckets.len());
        Self { buckets }
    }

    pub fn get(&self, category: &str) -> Option<&[Arc<PatternRecord>]> {
        self.buckets.get(category).map(Vec::as_slice)
    }

    /// (category, patterns) pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Arc<PatternRecord>])> {
        self.buckets
            .iter()
            .map(|(name, patterns)| (name.as_str(), patterns.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl Default for CategoryIndex {
    fn default() -> Self {
        Self::build(&PatternStore::default())
    }
}

/// Store plus its derived index, built once at startup and passed to views
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    store: PatternStore,
    categories: CategoryIndex,
}

impl Catalogue {
    pub fn new(store: PatternStore) -> Self {
        let categories = CategoryIndex::build(&store);
        Self { store, categories }
    }

    pub fn from_json(json: &str) -> CatalogueResult<Self> {
        PatternStore::from_json(json).map(Self::new)
    }

    pub fn store(&self) -> &PatternStore {
        &self.store
    }

    pub fn categories(&self) -> &CategoryIndex {
        &self.categories
    }

    pub fn pattern(&self, key: &str) -> CatalogueResult<&Arc<PatternRecord>> {
        self.store.require(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_json() -> &'static str {
        r#"{
            "a": {"name": "A", "category": ["Tote Bag", "Cat"], "hero-image": {"src": "a.png"}},
            "b": {"name": "B", "category": ["Flowers"], "hero-image": {"src": "b.png"}},
            "c": {"name": "C", "category": ["Tote Bag"], "hero-image": {"src": "c.png"}},
            "d": {"name": "D", "hero-image": {"src": "d.png"}}
        }"#
    }

    #[test]
    fn test_store_keeps_document_order_and_keys() {
        let store = PatternStore::from_json(store_json()).unwrap();
        let keys: Vec<&str> = store.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c", "d"]);
        assert_eq!(store.get("b").unwrap().name, "B");
    }

    #[test]
    fn test_require_missing_pattern() {
        let store = PatternStore::from_json(store_json()).unwrap();
        assert_eq!(
            store.require("zzz").unwrap_err(),
            CatalogueError::PatternNotFound("zzz".to_string())
        );
    }

    #[test]
    fn test_invalid_document_is_parse_error() {
        let err = PatternStore::from_json("{\"a\": 3}").unwrap_err();
        assert!(matches!(err, CatalogueError::Parse(_)));
    }

    #[test]
    fn test_index_buckets_in_first_seen_order() {
        let store = PatternStore::from_json(store_json()).unwrap();
        let index = CategoryIndex::build(&store);

        let names: Vec<&str> = index.names().collect();
        assert_eq!(names, vec![POPULAR_PATTERNS, "Tote Bag", "Cat", "Flowers"]);

        let totes: Vec<&str> = index.get("Tote Bag").unwrap().iter().map(|p| p.key.as_str()).collect();
        assert_eq!(totes, vec!["a", "c"]);
    }

    #[test]
    fn test_popular_bucket_exists_when_empty() {
        let index = CategoryIndex::build(&PatternStore::default());
        assert_eq!(index.len(), 1);
        assert!(index.get(POPULAR_PATTERNS).unwrap().is_empty());
    }

    #[test]
    fn test_index_shares_records_with_store() {
        let store = PatternStore::from_json(store_json()).unwrap();
        let index = CategoryIndex::build(&store);

        let in_store = store.get("a").unwrap();
        let in_totes = &index.get("Tote Bag").unwrap()[0];
        let in_cats = &index.get("Cat").unwrap()[0];
        assert!(Arc::ptr_eq(in_store, in_totes));
        assert!(Arc::ptr_eq(in_totes, in_cats));
    }

    #[test]
    fn test_pattern_without_categories_is_not_indexed() {
        let catalogue = Catalogue::from_json(store_json()).unwrap();
        let listed = catalogue
            .categories()
            .iter()
            .flat_map(|(_, patterns)| patterns.iter())
            .any(|p| p.key == "d");
        assert!(!listed);
        assert!(catalogue.pattern("d").is_ok());
    }

    #[test]
    fn test_category_repeated_on_one_pattern_lists_it_twice() {
        let store = PatternStore::from_json(
            r#"{"a": {"name": "A", "category": ["Tote Bag", "Tote Bag"], "hero-image": {"src": "a.png"}}}"#,
        )
        .unwrap();
        let index = CategoryIndex::build(&store);

        let totes = index.get("Tote Bag").unwrap();
        assert_eq!(totes.len(), 2);
        assert!(Arc::ptr_eq(&totes[0], &totes[1]));
    }
}

//! Progress Tracker
//!
//! Per (pattern, step) "rounds completed" counter for crochet mode, kept in
//! durable key/value storage so progress survives reloads.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::CatalogueResult;

/// Durable string key/value storage (browser `localStorage` in the app)
pub trait ProgressStorage {
    fn read(&self, key: &str) -> CatalogueResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> CatalogueResult<()>;
}

/// In-memory storage, used by tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl ProgressStorage for MemoryStorage {
    fn read(&self, key: &str) -> CatalogueResult<Option<String>> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> CatalogueResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage key for one step of one pattern: "{pattern}-{step}"
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProgressKey {
    pub pattern: String,
    pub step: usize,
}

impl ProgressKey {
    pub fn new(pattern: impl Into<String>, step: usize) -> Self {
        Self { pattern: pattern.into(), step }
    }
}

impl std::fmt::Display for ProgressKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.pattern, self.step)
    }
}

/// Highlight state machine for the rounds of one step.
///
/// `highlight_count` stays within `[0, rounds_max_index]`. Advancing marks
/// the round at the counter and moves it forward, but never past the last
/// round index; retreating moves the counter back first and then clears the
/// round it lands on. Only the counter is persisted: on reload every round
/// below it is marked again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressTracker {
    key: ProgressKey,
    highlight_count: usize,
    completed: Vec<bool>,
}

impl ProgressTracker {
    /// Read the stored counter, or create it at 0 on the first visit
    pub fn open(
        storage: &(impl ProgressStorage + ?Sized),
        key: ProgressKey,
        rounds_total: usize,
    ) -> CatalogueResult<Self> {
        let storage_key = key.to_string();
        let stored = match storage.read(&storage_key)? {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(count) => Some(count),
                Err(_) => {
                    log::warn!("Ignoring unreadable progress {:?} for {}", raw, storage_key);
                    None
                }
            },
            None => None,
        };

        let mut tracker = Self {
            key,
            highlight_count: 0,
            completed: vec![false; rounds_total],
        };

        match stored {
            Some(count) if count <= rounds_total => tracker.highlight_count = count,
            Some(count) => {
                log::warn!("Clamping progress {} for {} to {} rounds", count, storage_key, rounds_total);
                tracker.highlight_count = rounds_total;
                tracker.persist(storage)?;
            }
            None => tracker.persist(storage)?,
        }

        tracker.rehydrate();
        Ok(tracker)
    }

    pub fn key(&self) -> &ProgressKey {
        &self.key
    }

    pub fn highlight_count(&self) -> usize {
        self.highlight_count
    }

    /// Total rounds in the step
    pub fn rounds_max_index(&self) -> usize {
        self.completed.len()
    }

    pub fn is_complete(&self, round: usize) -> bool {
        self.completed.get(round).copied().unwrap_or(false)
    }

    /// Marked rounds, ascending
    pub fn completed_rounds(&self) -> impl Iterator<Item = usize> + '_ {
        self.completed
            .iter()
            .enumerate()
            .filter_map(|(index, done)| done.then_some(index))
    }

    /// Mark the round at the counter, then step the counter forward.
    /// Returns the round that was marked.
    pub fn advance(&mut self, storage: &(impl ProgressStorage + ?Sized)) -> CatalogueResult<Option<usize>> {
        let marked = self.set_mark(self.highlight_count, true);

        if self.highlight_count + 1 < self.rounds_max_index() {
            self.highlight_count += 1;
        }

        self.persist(storage)?;
        Ok(marked)
    }

    /// Step the counter back (not below 0), then clear the round it lands on.
    /// Returns the round that was cleared.
    pub fn retreat(&mut self, storage: &(impl ProgressStorage + ?Sized)) -> CatalogueResult<Option<usize>> {
        if self.highlight_count >= 1 {
            self.highlight_count -= 1;
        }

        let cleared = self.set_mark(self.highlight_count, false);

        self.persist(storage)?;
        Ok(cleared)
    }

    /// Mark every round strictly below the counter, in ascending order
    fn rehydrate(&mut self) {
        let upto = self.highlight_count.min(self.completed.len());
        for done in &mut self.completed[..upto] {
            *done = true;
        }
    }

    fn set_mark(&mut self, round: usize, done: bool) -> Option<usize> {
        // 0 <= round holds for usize; the upper bound is the round count
        if round < self.completed.len() {
            self.completed[round] = done;
            Some(round)
        } else {
            None
        }
    }

    fn persist(&self, storage: &(impl ProgressStorage + ?Sized)) -> CatalogueResult<()> {
        storage.write(&self.key.to_string(), &self.highlight_count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogueError;

    fn open(storage: &MemoryStorage, total: usize) -> ProgressTracker {
        ProgressTracker::open(storage, ProgressKey::new("cat-bag", 0), total).unwrap()
    }

    #[test]
    fn test_key_format() {
        assert_eq!(ProgressKey::new("cat-bag", 3).to_string(), "cat-bag-3");
    }

    #[test]
    fn test_first_visit_persists_zero() {
        let storage = MemoryStorage::new();
        let tracker = open(&storage, 5);
        assert_eq!(tracker.highlight_count(), 0);
        assert_eq!(storage.get("cat-bag-0").as_deref(), Some("0"));
        assert_eq!(tracker.completed_rounds().count(), 0);
    }

    #[test]
    fn test_rehydrates_rounds_below_counter() {
        let storage = MemoryStorage::new();
        storage.write("cat-bag-0", "3").unwrap();
        let tracker = open(&storage, 5);
        assert_eq!(tracker.highlight_count(), 3);
        assert_eq!(tracker.completed_rounds().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(!tracker.is_complete(3));
    }

    #[test]
    fn test_advance_marks_and_persists() {
        let storage = MemoryStorage::new();
        let mut tracker = open(&storage, 5);

        assert_eq!(tracker.advance(&storage).unwrap(), Some(0));
        assert_eq!(tracker.advance(&storage).unwrap(), Some(1));
        assert_eq!(tracker.highlight_count(), 2);
        assert_eq!(storage.get("cat-bag-0").as_deref(), Some("2"));

        let reloaded = open(&storage, 5);
        assert_eq!(reloaded.completed_rounds().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_advance_then_retreat_restores_counter() {
        let storage = MemoryStorage::new();
        storage.write("cat-bag-0", "2").unwrap();
        let mut tracker = open(&storage, 5);

        tracker.advance(&storage).unwrap();
        assert_eq!(tracker.highlight_count(), 3);
        assert_eq!(tracker.retreat(&storage).unwrap(), Some(2));
        assert_eq!(tracker.highlight_count(), 2);
        assert!(!tracker.is_complete(2));
        assert!(tracker.is_complete(1));
    }

    #[test]
    fn test_advance_stops_at_last_round_index() {
        let storage = MemoryStorage::new();
        storage.write("cat-bag-0", "4").unwrap();
        let mut tracker = open(&storage, 5);

        assert_eq!(tracker.advance(&storage).unwrap(), Some(4));
        assert_eq!(tracker.highlight_count(), 4);
        assert!(tracker.is_complete(4));

        assert_eq!(tracker.advance(&storage).unwrap(), Some(4));
        assert_eq!(tracker.highlight_count(), 4);
        assert_eq!(storage.get("cat-bag-0").as_deref(), Some("4"));
    }

    #[test]
    fn test_retreat_at_zero_keeps_counter() {
        let storage = MemoryStorage::new();
        let mut tracker = open(&storage, 3);

        assert_eq!(tracker.retreat(&storage).unwrap(), Some(0));
        assert_eq!(tracker.highlight_count(), 0);
        assert_eq!(storage.get("cat-bag-0").as_deref(), Some("0"));
    }

    #[test]
    fn test_single_round_step() {
        let storage = MemoryStorage::new();
        let mut tracker = open(&storage, 1);

        assert_eq!(tracker.advance(&storage).unwrap(), Some(0));
        assert_eq!(tracker.highlight_count(), 0);
        assert!(tracker.is_complete(0));

        assert_eq!(tracker.retreat(&storage).unwrap(), Some(0));
        assert!(!tracker.is_complete(0));
    }

    #[test]
    fn test_step_without_rounds_never_marks() {
        let storage = MemoryStorage::new();
        let mut tracker = open(&storage, 0);

        assert_eq!(tracker.advance(&storage).unwrap(), None);
        assert_eq!(tracker.retreat(&storage).unwrap(), None);
        assert_eq!(tracker.highlight_count(), 0);
    }

    #[test]
    fn test_unreadable_value_resets_to_zero() {
        let storage = MemoryStorage::new();
        storage.write("cat-bag-0", "lots").unwrap();
        let tracker = open(&storage, 5);
        assert_eq!(tracker.highlight_count(), 0);
        assert_eq!(storage.get("cat-bag-0").as_deref(), Some("0"));
    }

    #[test]
    fn test_oversized_value_is_clamped() {
        let storage = MemoryStorage::new();
        storage.write("cat-bag-0", "9").unwrap();
        let tracker = open(&storage, 5);
        assert_eq!(tracker.highlight_count(), 5);
        assert_eq!(tracker.completed_rounds().count(), 5);
        assert_eq!(storage.get("cat-bag-0").as_deref(), Some("5"));
    }

    #[test]
    fn test_steps_are_tracked_separately() {
        let storage = MemoryStorage::new();
        let mut first = ProgressTracker::open(&storage, ProgressKey::new("cat-bag", 0), 5).unwrap();
        first.advance(&storage).unwrap();

        let second = ProgressTracker::open(&storage, ProgressKey::new("cat-bag", 1), 1).unwrap();
        assert_eq!(second.highlight_count(), 0);
        assert_eq!(storage.get("cat-bag-0").as_deref(), Some("1"));
        assert_eq!(storage.get("cat-bag-1").as_deref(), Some("0"));
    }

    struct FailingStorage;

    impl ProgressStorage for FailingStorage {
        fn read(&self, _key: &str) -> CatalogueResult<Option<String>> {
            Ok(None)
        }

        fn write(&self, key: &str, _value: &str) -> CatalogueResult<()> {
            Err(CatalogueError::Storage(format!("quota exceeded for {}", key)))
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let err = ProgressTracker::open(&FailingStorage, ProgressKey::new("x", 0), 2).unwrap_err();
        assert!(matches!(err, CatalogueError::Storage(_)));
    }
}

//! Step Navigator
//!
//! Validated position inside a pattern's steps, with the previous/next
//! targets used by the crochet-mode arrows.

use crate::error::{CatalogueError, CatalogueResult};
use crate::model::{PatternRecord, Step};

/// A step index known to exist in its pattern
#[derive(Debug, Clone, Copy)]
pub struct StepCursor<'a> {
    pattern: &'a PatternRecord,
    index: usize,
}

impl<'a> StepCursor<'a> {
    /// Reject indices with no matching step instead of rendering a broken view
    pub fn new(pattern: &'a PatternRecord, index: usize) -> CatalogueResult<Self> {
        if index < pattern.steps.len() {
            Ok(Self { pattern, index })
        } else {
            log::warn!("Step {} requested for {} ({} steps)", index, pattern.key, pattern.steps.len());
            Err(CatalogueError::InvalidStep {
                pattern: pattern.key.clone(),
                step: index,
            })
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based position shown to the user
    pub fn ordinal(&self) -> usize {
        self.index + 1
    }

    pub fn step(&self) -> &'a Step {
        &self.pattern.steps[self.index]
    }

    pub fn pattern(&self) -> &'a PatternRecord {
        self.pattern
    }

    pub fn title(&self) -> &'a str {
        &self.step().title
    }

    /// "{ordinal}: {title}"
    pub fn heading(&self) -> String {
        format!("{}: {}", self.ordinal(), self.title())
    }

    pub fn last_index(&self) -> usize {
        self.pattern.steps.len() - 1
    }

    /// Never below the first step
    pub fn previous(&self) -> usize {
        self.index.saturating_sub(1)
    }

    /// Never past the final step; on the final step this is the same index
    pub fn next(&self) -> usize {
        (self.index + 1).min(self.last_index())
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index == self.last_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Image, Substep};

    fn pattern_with_steps(count: usize) -> PatternRecord {
        PatternRecord {
            key: "cat-bag".to_string(),
            name: "Cat Pattern Tote Bag".to_string(),
            blurb: String::new(),
            overview: String::new(),
            categories: vec![],
            hero_image: Image { src: "a.png".into(), alt: String::new() },
            images: vec![],
            details: Default::default(),
            yarn: vec![],
            steps: (0..count)
                .map(|i| Step {
                    title: format!("Step {}", i),
                    substeps: vec![Substep { title: String::new(), instructions: vec![], images: vec![] }],
                })
                .collect(),
        }
    }

    #[test]
    fn test_previous_from_first_stays_first() {
        let pattern = pattern_with_steps(3);
        let cursor = StepCursor::new(&pattern, 0).unwrap();
        assert_eq!(cursor.previous(), 0);
        assert!(cursor.is_first());
    }

    #[test]
    fn test_next_from_last_stays_last() {
        let pattern = pattern_with_steps(3);
        let cursor = StepCursor::new(&pattern, 2).unwrap();
        assert_eq!(cursor.next(), 2);
        assert!(cursor.is_last());
    }

    #[test]
    fn test_middle_step_targets() {
        let pattern = pattern_with_steps(3);
        let cursor = StepCursor::new(&pattern, 1).unwrap();
        assert_eq!(cursor.previous(), 0);
        assert_eq!(cursor.next(), 2);
        assert_eq!(cursor.ordinal(), 2);
        assert_eq!(cursor.heading(), "2: Step 1");
    }

    #[test]
    fn test_single_step_pattern() {
        let pattern = pattern_with_steps(1);
        let cursor = StepCursor::new(&pattern, 0).unwrap();
        assert_eq!(cursor.previous(), 0);
        assert_eq!(cursor.next(), 0);
    }

    #[test]
    fn test_out_of_range_step_is_rejected() {
        let pattern = pattern_with_steps(2);
        let err = StepCursor::new(&pattern, 2).unwrap_err();
        assert_eq!(
            err,
            CatalogueError::InvalidStep { pattern: "cat-bag".to_string(), step: 2 }
        );
    }

    #[test]
    fn test_pattern_without_steps_is_rejected() {
        let pattern = pattern_with_steps(0);
        assert!(StepCursor::new(&pattern, 0).is_err());
    }
}

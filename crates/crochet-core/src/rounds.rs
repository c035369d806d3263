//! Round Indexer
//!
//! Numbers every instruction line of a step, left to right and top to
//! bottom across substeps. Numbering restarts at 0 for each step.

use crate::model::{Image, Step};
use crate::navigator::StepCursor;

/// One instruction line with its step-scoped index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedRound<'a> {
    pub index: usize,
    pub text: &'a str,
}

impl IndexedRound<'_> {
    /// Stable element id used for highlighting
    pub fn dom_id(&self) -> String {
        format!("round-{}", self.index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedSubstep<'a> {
    /// Zero-based position within the step
    pub position: usize,
    /// "{step}.{substep}", both 1-based
    pub label: String,
    pub title: &'a str,
    pub rounds: Vec<IndexedRound<'a>>,
    pub images: &'a [Image],
}

impl IndexedSubstep<'_> {
    pub fn dom_id(&self) -> String {
        format!("substep-{}", self.position)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedStep<'a> {
    pub substeps: Vec<IndexedSubstep<'a>>,
    /// Also the tracker's `roundsMaxIndex`
    pub total_rounds: usize,
}

impl<'a> IndexedStep<'a> {
    pub fn rounds(&self) -> impl Iterator<Item = &IndexedRound<'a>> {
        self.substeps.iter().flat_map(|s| s.rounds.iter())
    }
}

/// Index the rounds of the step under `cursor`
pub fn index_rounds<'a>(cursor: &StepCursor<'a>) -> IndexedStep<'a> {
    index_step(cursor.step(), cursor.ordinal())
}

fn index_step(step: &Step, step_ordinal: usize) -> IndexedStep<'_> {
    let (substeps, total_rounds) = step.substeps.iter().enumerate().fold(
        (Vec::with_capacity(step.substeps.len()), 0usize),
        |(mut substeps, next), (position, substep)| {
            let rounds: Vec<IndexedRound> = substep
                .instructions
                .iter()
                .enumerate()
                .map(|(offset, text)| IndexedRound { index: next + offset, text: text.as_str() })
                .collect();
            let next = next + rounds.len();

            substeps.push(IndexedSubstep {
                position,
                label: format!("{}.{}", step_ordinal, position + 1),
                title: &substep.title,
                rounds,
                images: &substep.images,
            });
            (substeps, next)
        },
    );

    IndexedStep { substeps, total_rounds }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Substep;

    fn substep(lines: &[&str]) -> Substep {
        Substep {
            title: format!("{} lines", lines.len()),
            instructions: lines.iter().map(|s| s.to_string()).collect(),
            images: vec![],
        }
    }

    #[test]
    fn test_indices_continue_across_substeps() {
        let step = Step {
            title: "Create the cat graphic".into(),
            substeps: vec![substep(&["a", "b"]), substep(&["c", "d", "e"])],
        };
        let indexed = index_step(&step, 1);

        let first: Vec<usize> = indexed.substeps[0].rounds.iter().map(|r| r.index).collect();
        let second: Vec<usize> = indexed.substeps[1].rounds.iter().map(|r| r.index).collect();
        assert_eq!(first, vec![0, 1]);
        assert_eq!(second, vec![2, 3, 4]);
        assert_eq!(indexed.total_rounds, 5);
        assert_eq!(indexed.substeps[1].rounds[0].text, "c");
        assert_eq!(indexed.substeps[1].rounds[0].dom_id(), "round-2");
    }

    #[test]
    fn test_indices_are_contiguous() {
        let step = Step {
            title: String::new(),
            substeps: vec![substep(&["a"]), substep(&[]), substep(&["b", "c"]), substep(&["d"])],
        };
        let indexed = index_step(&step, 3);
        let all: Vec<usize> = indexed.rounds().map(|r| r.index).collect();
        assert_eq!(all, (0..step.round_count()).collect::<Vec<_>>());
        assert_eq!(indexed.total_rounds, step.round_count());
    }

    #[test]
    fn test_substep_labels() {
        let step = Step {
            title: String::new(),
            substeps: vec![substep(&["a"]), substep(&["b"])],
        };
        let indexed = index_step(&step, 2);
        assert_eq!(indexed.substeps[0].label, "2.1");
        assert_eq!(indexed.substeps[1].label, "2.2");
        assert_eq!(indexed.substeps[1].dom_id(), "substep-1");
    }

    #[test]
    fn test_empty_step() {
        let step = Step { title: String::new(), substeps: vec![] };
        let indexed = index_step(&step, 1);
        assert!(indexed.substeps.is_empty());
        assert_eq!(indexed.total_rounds, 0);
    }
}

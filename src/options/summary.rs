//! Badge counts for an organized option set

use std::collections::BTreeMap;

use serde::Serialize;

use crate::continuity::{classify_continuity, ReversalCategory};
use crate::models::{Beat, GridPosition, LetterType, Sequence};
use crate::parse::letter::classify;

/// Counts over the filtered candidate set.
///
/// `by_type` sums to `total`; so do `by_end_position` plus
/// `without_end_position`, and `by_reversal` plus `reversal_inapplicable`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OptionSummary {
    /// Size of the filtered set
    pub total: usize,
    /// Size of the candidate set before filtering
    pub candidate_total: usize,
    pub by_type: BTreeMap<LetterType, usize>,
    pub by_end_position: BTreeMap<GridPosition, usize>,
    pub without_end_position: usize,
    pub by_reversal: BTreeMap<ReversalCategory, usize>,
    pub reversal_inapplicable: usize,
}

impl OptionSummary {
    pub fn count_for_type(&self, letter_type: LetterType) -> usize {
        self.by_type.get(&letter_type).copied().unwrap_or(0)
    }

    pub fn count_for_position(&self, position: GridPosition) -> usize {
        self.by_end_position.get(&position).copied().unwrap_or(0)
    }

    pub fn count_for_reversal(&self, category: ReversalCategory) -> usize {
        self.by_reversal.get(&category).copied().unwrap_or(0)
    }
}

/// Step 5: count the filtered set
pub fn summarize(filtered: &[Beat], sequence: &Sequence, candidate_total: usize) -> OptionSummary {
    let mut summary = OptionSummary {
        total: filtered.len(),
        candidate_total,
        ..OptionSummary::default()
    };

    for beat in filtered {
        *summary.by_type.entry(classify(&beat.letter)).or_insert(0) += 1;

        match beat.resolved_end_position() {
            Some(position) => *summary.by_end_position.entry(position).or_insert(0) += 1,
            None => summary.without_end_position += 1,
        }

        match classify_continuity(sequence, beat) {
            Some(category) => *summary.by_reversal.entry(category).or_insert(0) += 1,
            None => summary.reversal_inapplicable += 1,
        }
    }

    summary
}

//! Option organizer
//!
//! Turns an unordered candidate set into grouped, ordered sections for a
//! picker. The steps run in a fixed order (filter, group, order groups,
//! order within groups, summarize), each exposed on its own so it can be
//! exercised in isolation.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::continuity::{classify_continuity, ReversalCategory, ReversalFilter};
use crate::errors::EngineError;
use crate::models::{Beat, GridPosition, LetterType, Sequence};
use crate::options::summary::{summarize, OptionSummary};
use crate::parse::letter::{classify, compare_letters};

/// How the picker sections its options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    Type,
    #[serde(alias = "endPosition")]
    EndPosition,
    Reversals,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Type => "type",
            SortMode::EndPosition => "end_position",
            SortMode::Reversals => "reversals",
        }
    }
}

impl Default for SortMode {
    fn default() -> Self {
        SortMode::Type
    }
}

impl FromStr for SortMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "type" => Ok(SortMode::Type),
            "end_position" | "endPosition" => Ok(SortMode::EndPosition),
            "reversals" => Ok(SortMode::Reversals),
            _ => Err(EngineError::invalid("sort mode", s)),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Section a candidate lands in.
///
/// The derived `Ord` is the section order: within one sort mode only one of
/// the first three variants occurs, ordered by its own precedence, and
/// `Unknown` always comes last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    LetterType(LetterType),
    Position(GridPosition),
    Reversal(ReversalCategory),
    Unknown,
}

impl GroupKey {
    pub fn label(&self) -> String {
        match self {
            GroupKey::LetterType(ty) => ty.display_name().to_string(),
            GroupKey::Position(position) => position.label().to_string(),
            GroupKey::Reversal(category) => category.label().to_string(),
            GroupKey::Unknown => "Unknown".to_string(),
        }
    }

    /// Letter-type sections of dash, dual-dash and static letters render as
    /// one horizontal cluster
    pub fn is_groupable(&self) -> bool {
        match self {
            GroupKey::LetterType(ty) => ty.is_groupable(),
            GroupKey::Position(_) | GroupKey::Reversal(_) | GroupKey::Unknown => false,
        }
    }
}

/// One non-empty section of the picker
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptionGroup {
    pub key: GroupKey,
    pub label: String,
    pub groupable: bool,
    pub beats: Vec<Beat>,
}

/// Everything a picker needs to render its sections and badges
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OrganizedOptions {
    pub sort_mode: SortMode,
    pub filter: ReversalFilter,
    pub groups: Vec<OptionGroup>,
    pub summary: OptionSummary,
}

impl OrganizedOptions {
    pub fn empty(sort_mode: SortMode, filter: ReversalFilter) -> Self {
        Self {
            sort_mode,
            filter,
            groups: Vec::new(),
            summary: OptionSummary::default(),
        }
    }

    pub fn group(&self, key: GroupKey) -> Option<&OptionGroup> {
        self.groups.iter().find(|g| g.key == key)
    }

    /// All beats in display order
    pub fn flatten(&self) -> Vec<&Beat> {
        self.groups.iter().flat_map(|g| g.beats.iter()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Step 1: keep the candidates whose continuity equals `filter`.
///
/// With no filter every candidate is kept. Candidates the detector cannot
/// classify never match a filter.
pub fn filter_by_reversal(candidates: &[Beat], sequence: &Sequence, filter: ReversalFilter) -> Vec<Beat> {
    match filter {
        None => candidates.to_vec(),
        Some(wanted) => candidates
            .iter()
            .filter(|beat| classify_continuity(sequence, beat) == Some(wanted))
            .cloned()
            .collect(),
    }
}

/// Step 2: the section a candidate belongs to under `sort_mode`
pub fn group_key(beat: &Beat, sequence: &Sequence, sort_mode: SortMode) -> GroupKey {
    match sort_mode {
        SortMode::Type => GroupKey::LetterType(classify(&beat.letter)),
        SortMode::EndPosition => beat
            .resolved_end_position()
            .map(GroupKey::Position)
            .unwrap_or(GroupKey::Unknown),
        SortMode::Reversals => classify_continuity(sequence, beat)
            .map(GroupKey::Reversal)
            .unwrap_or(GroupKey::Unknown),
    }
}

/// Step 4 comparator for beats inside one section
fn compare_within_group(a: &Beat, b: &Beat, sort_mode: SortMode) -> Ordering {
    match sort_mode {
        SortMode::Type | SortMode::Reversals => compare_letters(&a.letter, &b.letter),
        SortMode::EndPosition => {
            let label_a = a.resolved_end_position().map(|p| p.label()).unwrap_or("");
            let label_b = b.resolved_end_position().map(|p| p.label()).unwrap_or("");
            label_a
                .cmp(label_b)
                .then_with(|| compare_letters(&a.letter, &b.letter))
        }
    }
}

/// Steps 2-4: section the beats, order sections, order inside sections.
///
/// Every beat lands in exactly one section and empty sections are never
/// emitted. Sorting is stable, so ties keep input order.
pub fn group_candidates(beats: Vec<Beat>, sequence: &Sequence, sort_mode: SortMode) -> Vec<OptionGroup> {
    let mut buckets: BTreeMap<GroupKey, Vec<Beat>> = BTreeMap::new();
    for beat in beats {
        let key = group_key(&beat, sequence, sort_mode);
        buckets.entry(key).or_default().push(beat);
    }

    buckets
        .into_iter()
        .map(|(key, mut beats)| {
            beats.sort_by(|a, b| compare_within_group(a, b, sort_mode));
            OptionGroup {
                key,
                label: key.label(),
                groupable: key.is_groupable(),
                beats,
            }
        })
        .collect()
}

/// Organize `candidates` for display after `sequence`
pub fn organize(
    candidates: &[Beat],
    sequence: &Sequence,
    sort_mode: SortMode,
    filter: ReversalFilter,
) -> OrganizedOptions {
    let filtered = filter_by_reversal(candidates, sequence, filter);
    let summary = summarize(&filtered, sequence, candidates.len());
    let groups = group_candidates(filtered, sequence, sort_mode);

    log::debug!(
        "organized {} of {} candidates into {} groups by {}",
        summary.total,
        candidates.len(),
        groups.len(),
        sort_mode
    );

    OrganizedOptions {
        sort_mode,
        filter,
        groups,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GridMode;

    fn letters(group: &OptionGroup) -> Vec<&str> {
        group.beats.iter().map(|b| b.letter.as_str()).collect()
    }

    #[test]
    fn test_group_key_order() {
        assert!(GroupKey::LetterType(LetterType::Type6) < GroupKey::Unknown);
        assert!(GroupKey::Position(GridPosition::Alpha8) < GroupKey::Position(GridPosition::Beta1));
        assert!(GroupKey::Position(GridPosition::Beta8) < GroupKey::Position(GridPosition::Gamma1));
        assert!(GroupKey::Reversal(ReversalCategory::TwoReversals) < GroupKey::Unknown);
    }

    #[test]
    fn test_type_mode_orders_letters_alphabetically() {
        let candidates: Vec<Beat> = ["X", "B", "Φ", "W", "A", "Ψ"]
            .iter()
            .map(|l| Beat::letter_only(*l, None))
            .collect();
        let result = organize(&candidates, &Sequence::new(GridMode::Diamond), SortMode::Type, None);

        let keys: Vec<_> = result.groups.iter().map(|g| g.key).collect();
        assert_eq!(
            keys,
            vec![
                GroupKey::LetterType(LetterType::Type1),
                GroupKey::LetterType(LetterType::Type2),
                GroupKey::LetterType(LetterType::Type4),
            ]
        );
        assert_eq!(letters(&result.groups[0]), vec!["A", "B"]);
        assert_eq!(letters(&result.groups[1]), vec!["W", "X"]);
        assert_eq!(letters(&result.groups[2]), vec!["Φ", "Ψ"]);
        assert!(result.groups[2].groupable);
        assert!(!result.groups[0].groupable);
    }

    #[test]
    fn test_end_position_mode_uses_unknown_bucket() {
        let candidates = vec![
            Beat::letter_only("C", Some(GridPosition::Gamma3)),
            Beat::letter_only("A", None),
            Beat::letter_only("B", Some(GridPosition::Alpha5)),
            Beat::letter_only("D", Some(GridPosition::Beta1)),
        ];
        let result = organize(&candidates, &Sequence::new(GridMode::Diamond), SortMode::EndPosition, None);

        let labels: Vec<_> = result.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["alpha5", "beta1", "gamma3", "Unknown"]);
        assert_eq!(result.summary.without_end_position, 1);
    }

    #[test]
    fn test_sort_mode_parsing() {
        assert_eq!("endPosition".parse::<SortMode>(), Ok(SortMode::EndPosition));
        assert!("random".parse::<SortMode>().is_err());
        assert_eq!(serde_json::to_string(&SortMode::EndPosition).unwrap(), "\"end_position\"");
    }

    #[test]
    fn test_sort_mode_serde_accepts_parsed_forms() {
        for form in ["type", "end_position", "endPosition", "reversals"] {
            let parsed: SortMode = form.parse().unwrap();
            let deserialized: SortMode = serde_json::from_str(&format!("\"{}\"", form)).unwrap();
            assert_eq!(parsed, deserialized, "{}", form);
        }
    }
}

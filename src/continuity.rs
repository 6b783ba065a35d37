//! Continuity detector
//!
//! Compares a candidate next beat against the last beat of a sequence, prop
//! by prop, on the derived rotation sense. Two different motion kinds can
//! share a sense, so the kind itself is never compared.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::models::{Beat, Prop, Sequence};

/// Outcome of a continuity check
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReversalCategory {
    /// Both props keep their rotation sense
    Continuous,
    /// Exactly one prop reverses
    OneReversal,
    /// Both props reverse
    TwoReversals,
}

/// `None` means "no filter", the front end's `"all"` chip
pub type ReversalFilter = Option<ReversalCategory>;

impl ReversalCategory {
    pub const ALL: [ReversalCategory; 3] = [
        ReversalCategory::Continuous,
        ReversalCategory::OneReversal,
        ReversalCategory::TwoReversals,
    ];

    /// Combine the two per-prop results. Order of props does not matter.
    pub fn from_prop_continuity(blue_continuous: bool, red_continuous: bool) -> Self {
        match (blue_continuous, red_continuous) {
            (true, true) => ReversalCategory::Continuous,
            (true, false) | (false, true) => ReversalCategory::OneReversal,
            (false, false) => ReversalCategory::TwoReversals,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReversalCategory::Continuous => "continuous",
            ReversalCategory::OneReversal => "oneReversal",
            ReversalCategory::TwoReversals => "twoReversals",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReversalCategory::Continuous => "Continuous",
            ReversalCategory::OneReversal => "One Reversal",
            ReversalCategory::TwoReversals => "Two Reversals",
        }
    }

    /// Parse a filter chip value. `"all"` and the empty string mean no filter.
    pub fn parse_filter(value: &str) -> Result<ReversalFilter, EngineError> {
        match value.trim() {
            "" | "all" => Ok(None),
            other => other.parse().map(Some),
        }
    }
}

impl FromStr for ReversalCategory {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReversalCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::invalid("reversal category", s))
    }
}

impl fmt::Display for ReversalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-prop continuity `[blue, red]` between two consecutive beats.
///
/// `None` when either beat lacks a motion for either prop.
pub fn prop_continuity(last: &Beat, candidate: &Beat) -> Option<[bool; 2]> {
    let mut result = [false; 2];
    for (slot, prop) in Prop::BOTH.iter().enumerate() {
        let previous = last.motion(*prop)?;
        let next = candidate.motion(*prop)?;
        result[slot] = previous.rotation() == next.rotation();
    }
    Some(result)
}

/// Classify `candidate` as a continuation of `sequence`.
///
/// Returns `None` when the check does not apply: the sequence is empty or
/// motion data is missing on either side. Callers treat that as "show
/// unfiltered", never as continuous.
pub fn classify_continuity(sequence: &Sequence, candidate: &Beat) -> Option<ReversalCategory> {
    let last = sequence.last_beat()?;
    match prop_continuity(last, candidate) {
        Some([blue, red]) => Some(ReversalCategory::from_prop_continuity(blue, red)),
        None => {
            log::debug!(
                "continuity not applicable for '{}' after '{}': incomplete motion data",
                candidate.letter,
                last.letter
            );
            None
        }
    }
}

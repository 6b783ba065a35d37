//! Shared types for the WASM API
//!
//! This module contains result types returned across multiple API modules.

use crate::attributes::DerivedAttributes;
use crate::continuity::ReversalCategory;

/// Sentinel the front end uses for "no reversal filter"
pub const ALL_FILTER: &str = "all";

/// Result of a continuity check as the front end consumes it
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ContinuityResult {
    /// `continuous`, `oneReversal`, `twoReversals`, or `all` when not applicable
    pub category: String,
    /// Per-prop continuity `[blue, red]`, absent when not applicable
    pub props: Option<[bool; 2]>,
}

impl ContinuityResult {
    pub fn new(category: Option<ReversalCategory>, props: Option<[bool; 2]>) -> Self {
        Self {
            category: category
                .map(|c| c.as_str().to_string())
                .unwrap_or_else(|| ALL_FILTER.to_string()),
            props,
        }
    }
}

/// Derived motion fields in the front end's string form
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MotionAttributes {
    pub rotation: String,
    pub end_orientation: String,
}

impl From<DerivedAttributes> for MotionAttributes {
    fn from(attrs: DerivedAttributes) -> Self {
        Self {
            rotation: attrs.rotation.as_str().to_string(),
            end_orientation: attrs.end_orientation.as_str().to_string(),
        }
    }
}

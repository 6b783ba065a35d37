//! Catalogue of legal next beats
//!
//! How legal next beats are produced for a board position is the front
//! end's business. The engine only consumes the lookup through
//! [`MotionCatalogue`]; [`StaticCatalogue`] is an in-memory implementation
//! fed from a list of beats, e.g. a shipped JSON data file.

use std::collections::BTreeMap;

use crate::continuity::ReversalFilter;
use crate::errors::{EngineError, EngineResult};
use crate::models::{Beat, GridMode, GridPosition, Sequence};
use crate::options::organizer::{organize, OrganizedOptions, SortMode};

/// Source of the unfiltered legal next beats for a board position
pub trait MotionCatalogue {
    fn next_candidates(&self, position: GridPosition, grid_mode: GridMode) -> Vec<Beat>;
}

/// Beats indexed by grid mode and start position
#[derive(Clone, Debug, Default)]
pub struct StaticCatalogue {
    entries: BTreeMap<(GridMode, GridPosition), Vec<Beat>>,
}

impl StaticCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a beat under its start position. Beats without motions for
    /// both props have no start position and are rejected.
    pub fn insert(&mut self, beat: Beat) -> EngineResult<()> {
        let position = beat.start_position().ok_or_else(|| {
            EngineError::Catalogue(format!("beat '{}' has no start position", beat.letter))
        })?;
        self.entries
            .entry((beat.grid_mode, position))
            .or_default()
            .push(beat);
        Ok(())
    }

    pub fn from_beats(beats: impl IntoIterator<Item = Beat>) -> EngineResult<Self> {
        let mut catalogue = Self::new();
        for beat in beats {
            catalogue.insert(beat)?;
        }
        Ok(catalogue)
    }

    /// Load from a JSON array of beats
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let beats: Vec<Beat> = serde_json::from_str(json)?;
        let catalogue = Self::from_beats(beats)?;
        log::info!("loaded motion catalogue with {} beats", catalogue.len());
        Ok(catalogue)
    }

    /// Total number of beats across all positions
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MotionCatalogue for StaticCatalogue {
    fn next_candidates(&self, position: GridPosition, grid_mode: GridMode) -> Vec<Beat> {
        self.entries
            .get(&(grid_mode, position))
            .cloned()
            .unwrap_or_default()
    }
}

/// Look up the candidates following `sequence` and organize them.
///
/// An empty sequence, or a last beat whose end position cannot be
/// resolved, has nothing to follow and yields no options.
pub fn options_for_sequence<C: MotionCatalogue + ?Sized>(
    catalogue: &C,
    sequence: &Sequence,
    sort_mode: SortMode,
    filter: ReversalFilter,
) -> OrganizedOptions {
    let position = match sequence.last_beat().and_then(Beat::resolved_end_position) {
        Some(position) => position,
        None => {
            log::debug!("no end position to continue from, returning no options");
            return OrganizedOptions::empty(sort_mode, filter);
        }
    };

    let candidates = catalogue.next_candidates(position, sequence.grid_mode);
    organize(&candidates, sequence, sort_mode, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, Motion, MotionKind, Orientation, Prop};

    fn beat(letter: &str, blue: (Location, Location), red: (Location, Location)) -> Beat {
        Beat::new(
            letter,
            Motion::new(Prop::Blue, MotionKind::Pro, blue.0, blue.1, Orientation::In),
            Motion::new(Prop::Red, MotionKind::Pro, red.0, red.1, Orientation::In),
        )
    }

    #[test]
    fn test_lookup_by_start_position() {
        let catalogue = StaticCatalogue::from_beats(vec![
            beat("A", (Location::S, Location::W), (Location::N, Location::E)),
            beat("B", (Location::N, Location::E), (Location::S, Location::W)),
        ])
        .unwrap();

        assert_eq!(catalogue.len(), 2);
        let from_alpha1 = catalogue.next_candidates(GridPosition::Alpha1, GridMode::Diamond);
        assert_eq!(from_alpha1.len(), 1);
        assert_eq!(from_alpha1[0].letter, "A");
        assert!(catalogue.next_candidates(GridPosition::Alpha1, GridMode::Box).is_empty());
    }

    #[test]
    fn test_insert_rejects_beat_without_motions() {
        let mut catalogue = StaticCatalogue::new();
        assert!(catalogue.insert(Beat::letter_only("A", None)).is_err());
    }

    #[test]
    fn test_from_json_rejects_bad_enum() {
        let err = StaticCatalogue::from_json(r#"[{"letter":"A","blue_motion":{"prop":"blue","kind":"twirl","start":"n","end":"e","start_orientation":"in"}}]"#)
            .unwrap_err();
        assert!(matches!(err, EngineError::Catalogue(_)));
    }

    #[test]
    fn test_empty_sequence_has_no_options() {
        let catalogue = StaticCatalogue::new();
        let result = options_for_sequence(&catalogue, &Sequence::new(GridMode::Diamond), SortMode::Type, None);
        assert!(result.is_empty());
        assert_eq!(result.summary.total, 0);
    }
}

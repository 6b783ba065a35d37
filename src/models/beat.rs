//! Beats and sequences

use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};
use crate::models::elements::{GridMode, GridPosition, Prop};
use crate::models::letter::LetterType;
use crate::models::motion::Motion;
use crate::parse::letter::classify;

/// One atomic unit of notation: both props' simultaneous motion and the
/// resulting board position.
///
/// Motions are optional because beats arrive from the front end and may be
/// incomplete; consumers degrade instead of failing when one is missing.
/// A missing `grid_mode` is inferred from the motions or end position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BeatRecord")]
pub struct Beat {
    pub letter: String,
    pub blue_motion: Option<Motion>,
    pub red_motion: Option<Motion>,
    pub end_position: Option<GridPosition>,
    pub grid_mode: GridMode,
}

/// Wire form of a beat, with every field but the letter optional
#[derive(Deserialize)]
struct BeatRecord {
    letter: String,
    #[serde(default)]
    blue_motion: Option<Motion>,
    #[serde(default)]
    red_motion: Option<Motion>,
    #[serde(default)]
    end_position: Option<GridPosition>,
    #[serde(default)]
    grid_mode: Option<GridMode>,
}

impl From<BeatRecord> for Beat {
    fn from(record: BeatRecord) -> Self {
        let mut beat = Self {
            letter: record.letter,
            blue_motion: record.blue_motion,
            red_motion: record.red_motion,
            end_position: record.end_position,
            grid_mode: GridMode::default(),
        };
        beat.grid_mode = record
            .grid_mode
            .or_else(|| beat.inferred_grid_mode())
            .unwrap_or_default();
        beat
    }
}

impl Beat {
    pub fn new(letter: impl Into<String>, blue_motion: Motion, red_motion: Motion) -> Self {
        let grid_mode = blue_motion.start.grid_mode();
        let mut beat = Self {
            letter: letter.into(),
            blue_motion: Some(blue_motion),
            red_motion: Some(red_motion),
            end_position: None,
            grid_mode,
        };
        beat.end_position = beat.derived_end_position();
        beat
    }

    /// A beat carrying only a letter and an optional end position
    pub fn letter_only(letter: impl Into<String>, end_position: Option<GridPosition>) -> Self {
        Self {
            letter: letter.into(),
            blue_motion: None,
            red_motion: None,
            end_position,
            grid_mode: end_position.map(|p| p.grid_mode()).unwrap_or_default(),
        }
    }

    /// Grid the beat's own data places it on: the first motion's start
    /// location, else the end position. `None` for a bare letter.
    pub fn inferred_grid_mode(&self) -> Option<GridMode> {
        self.blue_motion
            .as_ref()
            .or(self.red_motion.as_ref())
            .map(|m| m.start.grid_mode())
            .or_else(|| self.end_position.map(|p| p.grid_mode()))
    }

    pub fn motion(&self, prop: Prop) -> Option<&Motion> {
        match prop {
            Prop::Blue => self.blue_motion.as_ref(),
            Prop::Red => self.red_motion.as_ref(),
        }
    }

    pub fn has_complete_motions(&self) -> bool {
        self.blue_motion.is_some() && self.red_motion.is_some()
    }

    /// Letter type, recomputed from the letter on every call
    pub fn letter_type(&self) -> LetterType {
        classify(&self.letter)
    }

    /// Board position implied by both motions' end locations
    pub fn derived_end_position(&self) -> Option<GridPosition> {
        let blue = self.blue_motion.as_ref()?;
        let red = self.red_motion.as_ref()?;
        GridPosition::from_locations(blue.end, red.end)
    }

    /// Board position implied by both motions' start locations
    pub fn start_position(&self) -> Option<GridPosition> {
        let blue = self.blue_motion.as_ref()?;
        let red = self.red_motion.as_ref()?;
        GridPosition::from_locations(blue.start, red.start)
    }

    /// Stored end position, falling back to the one implied by the motions
    pub fn resolved_end_position(&self) -> Option<GridPosition> {
        self.end_position.or_else(|| self.derived_end_position())
    }
}

/// Ordered beats sharing one grid mode.
///
/// A sequence read without `grid_mode` takes it from its first beat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SequenceRecord")]
pub struct Sequence {
    pub grid_mode: GridMode,
    pub beats: Vec<Beat>,
}

#[derive(Deserialize)]
struct SequenceRecord {
    #[serde(default)]
    grid_mode: Option<GridMode>,
    #[serde(default)]
    beats: Vec<Beat>,
}

impl From<SequenceRecord> for Sequence {
    fn from(record: SequenceRecord) -> Self {
        let grid_mode = record
            .grid_mode
            .or_else(|| record.beats.first().map(|b| b.grid_mode))
            .unwrap_or_default();
        Self {
            grid_mode,
            beats: record.beats,
        }
    }
}

impl Sequence {
    pub fn new(grid_mode: GridMode) -> Self {
        Self {
            grid_mode,
            beats: Vec::new(),
        }
    }

    /// Build a sequence from beats, checking they share `grid_mode`
    pub fn from_beats(grid_mode: GridMode, beats: Vec<Beat>) -> EngineResult<Self> {
        let mut sequence = Self::new(grid_mode);
        for beat in beats {
            sequence.push(beat)?;
        }
        Ok(sequence)
    }

    /// Append a beat. Positional continuity is the catalogue's job and is
    /// not checked here.
    pub fn push(&mut self, beat: Beat) -> EngineResult<()> {
        if beat.grid_mode != self.grid_mode {
            return Err(EngineError::GridModeMismatch {
                expected: self.grid_mode,
                found: beat.grid_mode,
            });
        }
        self.beats.push(beat);
        Ok(())
    }

    pub fn last_beat(&self) -> Option<&Beat> {
        self.beats.last()
    }

    pub fn len(&self) -> usize {
        self.beats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }
}

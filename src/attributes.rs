//! Attribute calculator
//!
//! Derives a motion's rotation sense and end orientation from its kind,
//! start and end locations, and start orientation. Both functions are total
//! over the vocabulary; editing surfaces call them again whenever one of the
//! inputs changes.

use serde::{Deserialize, Serialize};

use crate::models::elements::{Location, MotionKind, Orientation, RotationSense};

/// Both derived fields of a motion
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedAttributes {
    pub rotation: RotationSense,
    pub end_orientation: Orientation,
}

/// Rotation sense of a motion.
///
/// Only pro and anti shifts carry a sense. A quarter step clockwise is
/// `Clockwise`, a quarter step counter-clockwise is `CounterClockwise`;
/// standing still, a half turn, or a mixed-grid separation has no sense.
pub fn derive_rotation(kind: MotionKind, start: Location, end: Location) -> RotationSense {
    if !kind.is_rotation_bearing() {
        return RotationSense::None;
    }

    match start.quarter_steps_to(end) {
        Some(1) => RotationSense::Clockwise,
        Some(-1) => RotationSense::CounterClockwise,
        Some(_) | None => RotationSense::None,
    }
}

/// End orientation of a motion.
///
/// The start orientation is folded through the derived rotation sense by
/// the kind's relative quarter turns per step times the number of quarter
/// steps travelled.
pub fn derive_end_orientation(
    kind: MotionKind,
    start: Location,
    end: Location,
    start_orientation: Orientation,
) -> Orientation {
    let rotation = derive_rotation(kind, start, end);
    let steps = start
        .quarter_steps_to(end)
        .map(|s| s.unsigned_abs())
        .unwrap_or(0);
    let quarters = kind.relative_quarters_per_step() * steps;
    start_orientation.turned(rotation, quarters)
}

/// Recompute both derived fields together
pub fn derive_attributes(
    kind: MotionKind,
    start: Location,
    end: Location,
    start_orientation: Orientation,
) -> DerivedAttributes {
    DerivedAttributes {
        rotation: derive_rotation(kind, start, end),
        end_orientation: derive_end_orientation(kind, start, end, start_orientation),
    }
}

//! A single prop's motion between two beats

use serde::{Deserialize, Serialize};

use crate::attributes::{derive_end_orientation, derive_rotation};
use crate::models::elements::{Location, MotionKind, Orientation, Prop, RotationSense};

/// One prop's movement from `start` to `end`.
///
/// Only the inputs are stored. Rotation and end orientation are recomputed
/// from them on every access, so they can never go stale when an editing
/// surface changes the kind or a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Motion {
    pub prop: Prop,
    pub kind: MotionKind,
    pub start: Location,
    pub end: Location,
    pub start_orientation: Orientation,
}

impl Motion {
    pub fn new(
        prop: Prop,
        kind: MotionKind,
        start: Location,
        end: Location,
        start_orientation: Orientation,
    ) -> Self {
        Self {
            prop,
            kind,
            start,
            end,
            start_orientation,
        }
    }

    /// A static motion holding `location`
    pub fn stationary(prop: Prop, location: Location, orientation: Orientation) -> Self {
        Self::new(prop, MotionKind::Static, location, location, orientation)
    }

    /// Direction of travel around the grid
    pub fn rotation(&self) -> RotationSense {
        derive_rotation(self.kind, self.start, self.end)
    }

    pub fn end_orientation(&self) -> Orientation {
        derive_end_orientation(self.kind, self.start, self.end, self.start_orientation)
    }

    pub fn with_kind(mut self, kind: MotionKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_start_orientation(mut self, orientation: Orientation) -> Self {
        self.start_orientation = orientation;
        self
    }
}

// Derived fields are written out for the front end but never read back
impl Serialize for Motion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Motion", 7)?;
        state.serialize_field("prop", &self.prop)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end)?;
        state.serialize_field("start_orientation", &self.start_orientation)?;
        state.serialize_field("end_orientation", &self.end_orientation())?;
        state.serialize_field("rotation", &self.rotation())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_fields_follow_inputs() {
        let motion = Motion::new(Prop::Blue, MotionKind::Pro, Location::N, Location::E, Orientation::In);
        assert_eq!(motion.rotation(), RotationSense::Clockwise);

        let edited = motion.with_kind(MotionKind::Static);
        assert_eq!(edited.rotation(), RotationSense::None);
        assert_eq!(motion.rotation(), RotationSense::Clockwise);
    }

    #[test]
    fn test_serialize_includes_derived_fields() {
        let motion = Motion::new(Prop::Red, MotionKind::Anti, Location::S, Location::E, Orientation::In);
        let json = serde_json::to_value(motion).unwrap();
        assert_eq!(json["rotation"], "ccw");
        assert_eq!(json["end_orientation"], "out");
        assert_eq!(json["prop"], "red");
    }

    #[test]
    fn test_deserialize_ignores_supplied_derived_fields() {
        let json = r#"{
            "prop": "primary",
            "kind": "pro",
            "start": "w",
            "end": "n",
            "start_orientation": "out",
            "end_orientation": "in",
            "rotation": "ccw"
        }"#;
        let motion: Motion = serde_json::from_str(json).unwrap();
        assert_eq!(motion.prop, Prop::Blue);
        assert_eq!(motion.rotation(), RotationSense::Clockwise);
        assert_eq!(motion.end_orientation(), Orientation::Out);
    }

    #[test]
    fn test_deserialize_rejects_unknown_location() {
        let json = r#"{"prop":"blue","kind":"pro","start":"up","end":"n","start_orientation":"in"}"#;
        assert!(serde_json::from_str::<Motion>(json).is_err());
    }
}

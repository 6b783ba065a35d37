//! Closed vocabulary of the kinetic alphabet
//!
//! Every other part of the engine operates over these enumerations. They
//! are plain `Copy` values; nothing here owns or references anything else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::errors::EngineError;

/// One of the eight compass points a prop can occupy on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl Location {
    /// All locations, clockwise from north
    pub const ALL: [Location; 8] = [
        Location::N,
        Location::Ne,
        Location::E,
        Location::Se,
        Location::S,
        Location::Sw,
        Location::W,
        Location::Nw,
    ];

    /// Eighth-turn index clockwise from north (N = 0, NE = 1, ... NW = 7)
    pub fn compass_index(&self) -> u8 {
        match self {
            Location::N => 0,
            Location::Ne => 1,
            Location::E => 2,
            Location::Se => 3,
            Location::S => 4,
            Location::Sw => 5,
            Location::W => 6,
            Location::Nw => 7,
        }
    }

    /// Inverse of [`Location::compass_index`], wrapping modulo 8
    pub fn from_compass_index(index: u8) -> Location {
        Location::ALL[(index % 8) as usize]
    }

    /// The grid layout this location belongs to
    pub fn grid_mode(&self) -> GridMode {
        match self {
            Location::N | Location::E | Location::S | Location::W => GridMode::Diamond,
            Location::Ne | Location::Se | Location::Sw | Location::Nw => GridMode::Box,
        }
    }

    /// The location diametrically across the grid
    pub fn opposite(&self) -> Location {
        Location::from_compass_index(self.compass_index() + 4)
    }

    /// Signed distance to `end` in quarter turns of the grid.
    ///
    /// Clockwise travel is positive. A half turn has no direction and is
    /// reported as `2`. Returns `None` when the two points are an odd number
    /// of eighths apart, i.e. one on the diamond and one on the box.
    pub fn quarter_steps_to(&self, end: Location) -> Option<i8> {
        let eighths = (end.compass_index() + 8 - self.compass_index()) % 8;
        match eighths {
            0 => Some(0),
            2 => Some(1),
            4 => Some(2),
            6 => Some(-1),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::N => "n",
            Location::Ne => "ne",
            Location::E => "e",
            Location::Se => "se",
            Location::S => "s",
            Location::Sw => "sw",
            Location::W => "w",
            Location::Nw => "nw",
        }
    }
}

impl FromStr for Location {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .iter()
            .copied()
            .find(|loc| loc.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::invalid("location", s))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Facing of a prop relative to the centre of the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    In,
    Out,
    Clock,
    Counter,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::In,
        Orientation::Out,
        Orientation::Clock,
        Orientation::Counter,
    ];

    /// Position on the clockwise quarter-turn cycle In → Clock → Out → Counter
    fn cycle_index(&self) -> i8 {
        match self {
            Orientation::In => 0,
            Orientation::Clock => 1,
            Orientation::Out => 2,
            Orientation::Counter => 3,
        }
    }

    fn from_cycle_index(index: i8) -> Orientation {
        match index.rem_euclid(4) {
            0 => Orientation::In,
            1 => Orientation::Clock,
            2 => Orientation::Out,
            _ => Orientation::Counter,
        }
    }

    /// Fold this orientation through `sense` by `quarters` quarter turns.
    /// `RotationSense::None` leaves the orientation unchanged.
    pub fn turned(&self, sense: RotationSense, quarters: u8) -> Orientation {
        let quarters = (quarters % 4) as i8;
        let delta = match sense {
            RotationSense::Clockwise => quarters,
            RotationSense::CounterClockwise => -quarters,
            RotationSense::None => 0,
        };
        Orientation::from_cycle_index(self.cycle_index() + delta)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::In => "in",
            Orientation::Out => "out",
            Orientation::Clock => "clock",
            Orientation::Counter => "counter",
        }
    }
}

impl FromStr for Orientation {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Orientation::ALL
            .iter()
            .copied()
            .find(|o| o.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::invalid("orientation", s))
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction a prop travels around the grid. Always derived, never set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RotationSense {
    #[serde(rename = "cw")]
    Clockwise,
    #[serde(rename = "ccw")]
    CounterClockwise,
    #[serde(rename = "no_rot")]
    None,
}

impl RotationSense {
    pub fn as_str(&self) -> &'static str {
        match self {
            RotationSense::Clockwise => "cw",
            RotationSense::CounterClockwise => "ccw",
            RotationSense::None => "no_rot",
        }
    }

    pub fn reversed(&self) -> RotationSense {
        match self {
            RotationSense::Clockwise => RotationSense::CounterClockwise,
            RotationSense::CounterClockwise => RotationSense::Clockwise,
            RotationSense::None => RotationSense::None,
        }
    }
}

impl FromStr for RotationSense {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cw" | "clockwise" => Ok(RotationSense::Clockwise),
            "ccw" | "counter_clockwise" | "counterclockwise" => Ok(RotationSense::CounterClockwise),
            "no_rot" | "none" => Ok(RotationSense::None),
            _ => Err(EngineError::invalid("rotation sense", s)),
        }
    }
}

impl fmt::Display for RotationSense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a single prop's movement between two beats
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionKind {
    /// Shift with the prop spinning along the handpath
    Pro,
    /// Shift with the prop spinning against the handpath
    Anti,
    /// Shift without prop spin
    Float,
    /// Straight move through the centre to the opposite point
    Dash,
    /// Prop stays at its location
    Static,
}

impl MotionKind {
    pub const ALL: [MotionKind; 5] = [
        MotionKind::Pro,
        MotionKind::Anti,
        MotionKind::Float,
        MotionKind::Dash,
        MotionKind::Static,
    ];

    /// Whether this kind carries a rotation sense
    pub fn is_rotation_bearing(&self) -> bool {
        matches!(self, MotionKind::Pro | MotionKind::Anti)
    }

    /// Quarter turns the orientation moves, relative to the centre, per
    /// quarter step of travel
    pub fn relative_quarters_per_step(&self) -> u8 {
        match self {
            MotionKind::Anti => 2,
            MotionKind::Pro | MotionKind::Float | MotionKind::Dash | MotionKind::Static => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MotionKind::Pro => "pro",
            MotionKind::Anti => "anti",
            MotionKind::Float => "float",
            MotionKind::Dash => "dash",
            MotionKind::Static => "static",
        }
    }
}

impl FromStr for MotionKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MotionKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::invalid("motion kind", s))
    }
}

impl fmt::Display for MotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two independently tracked props. Blue is the primary prop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prop {
    #[serde(alias = "primary")]
    Blue,
    #[serde(alias = "secondary")]
    Red,
}

impl Prop {
    pub const BOTH: [Prop; 2] = [Prop::Blue, Prop::Red];

    pub fn as_str(&self) -> &'static str {
        match self {
            Prop::Blue => "blue",
            Prop::Red => "red",
        }
    }
}

impl FromStr for Prop {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blue" | "primary" => Ok(Prop::Blue),
            "red" | "secondary" => Ok(Prop::Red),
            _ => Err(EngineError::invalid("prop", s)),
        }
    }
}

/// Board layout variant
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde_repr::Serialize_repr)]
pub enum GridMode {
    /// Cardinal points N, E, S, W
    Diamond = 0,
    /// Diagonal points NE, SE, SW, NW
    Box = 1,
}

impl GridMode {
    /// Convert the numeric form used by the front end
    pub fn from_u8(value: u8) -> Result<GridMode, EngineError> {
        match value {
            0 => Ok(GridMode::Diamond),
            1 => Ok(GridMode::Box),
            _ => Err(EngineError::invalid("grid mode", value)),
        }
    }

    /// Locations valid on this layout, clockwise
    pub fn locations(&self) -> [Location; 4] {
        match self {
            GridMode::Diamond => [Location::N, Location::E, Location::S, Location::W],
            GridMode::Box => [Location::Ne, Location::Se, Location::Sw, Location::Nw],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GridMode::Diamond => "diamond",
            GridMode::Box => "box",
        }
    }
}

impl Default for GridMode {
    fn default() -> Self {
        GridMode::Diamond
    }
}

impl FromStr for GridMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "diamond" => Ok(GridMode::Diamond),
            "box" => Ok(GridMode::Box),
            _ => Err(EngineError::invalid("grid mode", s)),
        }
    }
}

// Written as 0/1, read from either 0/1 or "diamond"/"box"
impl<'de> Deserialize<'de> for GridMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct GridModeVisitor;

        impl<'de> serde::de::Visitor<'de> for GridModeVisitor {
            type Value = GridMode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("0, 1, \"diamond\" or \"box\"")
            }

            fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<GridMode, E> {
                u8::try_from(value)
                    .map_err(|_| E::custom(EngineError::invalid("grid mode", value)))
                    .and_then(|v| GridMode::from_u8(v).map_err(E::custom))
            }

            fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<GridMode, E> {
                u64::try_from(value)
                    .map_err(|_| E::custom(EngineError::invalid("grid mode", value)))
                    .and_then(|v| self.visit_u64(v))
            }

            fn visit_f64<E: serde::de::Error>(self, value: f64) -> Result<GridMode, E> {
                if value.fract() == 0.0 && value >= 0.0 {
                    self.visit_u64(value as u64)
                } else {
                    Err(E::custom(EngineError::invalid("grid mode", value)))
                }
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<GridMode, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(GridModeVisitor)
    }
}

/// Coarse family of a board position
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionClass {
    /// Props on opposite points
    Alpha,
    /// Props on the same point
    Beta,
    /// Props a quarter turn apart
    Gamma,
}

impl PositionClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionClass::Alpha => "alpha",
            PositionClass::Beta => "beta",
            PositionClass::Gamma => "gamma",
        }
    }
}

/// Named board position formed by both props' locations.
///
/// Declaration order is the display order: alpha before beta before gamma,
/// each ascending by index. The derived `Ord` relies on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridPosition {
    Alpha1,
    Alpha2,
    Alpha3,
    Alpha4,
    Alpha5,
    Alpha6,
    Alpha7,
    Alpha8,
    Beta1,
    Beta2,
    Beta3,
    Beta4,
    Beta5,
    Beta6,
    Beta7,
    Beta8,
    Gamma1,
    Gamma2,
    Gamma3,
    Gamma4,
    Gamma5,
    Gamma6,
    Gamma7,
    Gamma8,
    Gamma9,
    Gamma10,
    Gamma11,
    Gamma12,
    Gamma13,
    Gamma14,
    Gamma15,
    Gamma16,
}

const POSITION_LABELS: [&str; 32] = [
    "alpha1", "alpha2", "alpha3", "alpha4", "alpha5", "alpha6", "alpha7", "alpha8",
    "beta1", "beta2", "beta3", "beta4", "beta5", "beta6", "beta7", "beta8",
    "gamma1", "gamma2", "gamma3", "gamma4", "gamma5", "gamma6", "gamma7", "gamma8",
    "gamma9", "gamma10", "gamma11", "gamma12", "gamma13", "gamma14", "gamma15", "gamma16",
];

impl GridPosition {
    pub const ALL: [GridPosition; 32] = [
        GridPosition::Alpha1,
        GridPosition::Alpha2,
        GridPosition::Alpha3,
        GridPosition::Alpha4,
        GridPosition::Alpha5,
        GridPosition::Alpha6,
        GridPosition::Alpha7,
        GridPosition::Alpha8,
        GridPosition::Beta1,
        GridPosition::Beta2,
        GridPosition::Beta3,
        GridPosition::Beta4,
        GridPosition::Beta5,
        GridPosition::Beta6,
        GridPosition::Beta7,
        GridPosition::Beta8,
        GridPosition::Gamma1,
        GridPosition::Gamma2,
        GridPosition::Gamma3,
        GridPosition::Gamma4,
        GridPosition::Gamma5,
        GridPosition::Gamma6,
        GridPosition::Gamma7,
        GridPosition::Gamma8,
        GridPosition::Gamma9,
        GridPosition::Gamma10,
        GridPosition::Gamma11,
        GridPosition::Gamma12,
        GridPosition::Gamma13,
        GridPosition::Gamma14,
        GridPosition::Gamma15,
        GridPosition::Gamma16,
    ];

    fn ordinal(&self) -> usize {
        *self as usize
    }

    /// Board position formed by the blue and red props' locations.
    ///
    /// Opposite points give alpha, a shared point gives beta, a quarter
    /// turn apart gives gamma. Points an odd number of eighths apart sit on
    /// different grids and have no position.
    ///
    /// Alpha and beta are indexed by the blue location, clockwise from south
    /// and north respectively. Gamma 1-8 have red a quarter turn clockwise
    /// of blue, indexed from blue at west; gamma 9-16 have red a quarter turn
    /// counter-clockwise, indexed from blue at east.
    pub fn from_locations(blue: Location, red: Location) -> Option<GridPosition> {
        let blue_index = blue.compass_index() as usize;
        let ordinal = match blue.quarter_steps_to(red)? {
            2 => (blue_index + 4) % 8,
            0 => 8 + blue_index,
            1 => 16 + (blue_index + 2) % 8,
            _ => 24 + (blue_index + 6) % 8,
        };
        Some(GridPosition::ALL[ordinal])
    }

    /// Inverse of [`GridPosition::from_locations`]: `(blue, red)`
    pub fn locations(&self) -> (Location, Location) {
        let ordinal = self.ordinal();
        let offset = (ordinal % 8) as u8;
        match ordinal / 8 {
            0 => {
                let blue = Location::from_compass_index(offset + 4);
                (blue, blue.opposite())
            }
            1 => {
                let blue = Location::from_compass_index(offset);
                (blue, blue)
            }
            2 => {
                let blue = Location::from_compass_index(offset + 6);
                (blue, Location::from_compass_index(blue.compass_index() + 2))
            }
            _ => {
                let blue = Location::from_compass_index(offset + 2);
                (blue, Location::from_compass_index(blue.compass_index() + 6))
            }
        }
    }

    pub fn class(&self) -> PositionClass {
        match self.ordinal() {
            0..=7 => PositionClass::Alpha,
            8..=15 => PositionClass::Beta,
            _ => PositionClass::Gamma,
        }
    }

    /// 1-based index within the position class
    pub fn index(&self) -> u8 {
        let ordinal = self.ordinal();
        match self.class() {
            PositionClass::Alpha => ordinal as u8 + 1,
            PositionClass::Beta => ordinal as u8 - 7,
            PositionClass::Gamma => ordinal as u8 - 15,
        }
    }

    /// Lowercase label such as `"alpha1"` or `"gamma12"`
    pub fn label(&self) -> &'static str {
        POSITION_LABELS[self.ordinal()]
    }

    /// The grid this position lies on
    pub fn grid_mode(&self) -> GridMode {
        self.locations().0.grid_mode()
    }
}

impl FromStr for GridPosition {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        POSITION_LABELS
            .iter()
            .position(|label| *label == needle)
            .map(|ordinal| GridPosition::ALL[ordinal])
            .ok_or_else(|| EngineError::invalid("grid position", s))
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

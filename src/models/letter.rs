//! Letter types of the kinetic alphabet
//!
//! Every letter names a two-prop motion combination and belongs to one of
//! six notation types. The type is always recomputed from the letter string
//! (see [`crate::parse::letter::classify`]) and never stored on a beat.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// The six notation types, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LetterType {
    Type1,
    Type2,
    Type3,
    Type4,
    Type5,
    Type6,
}

/// Display metadata for a letter type
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LetterTypeInfo {
    pub letter_type: LetterType,
    pub display_name: &'static str,
    pub description: &'static str,
}

impl LetterType {
    pub const ALL: [LetterType; 6] = [
        LetterType::Type1,
        LetterType::Type2,
        LetterType::Type3,
        LetterType::Type4,
        LetterType::Type5,
        LetterType::Type6,
    ];

    /// Type assigned to letters no rule recognizes
    pub const DEFAULT: LetterType = LetterType::Type1;

    pub fn number(&self) -> u8 {
        match self {
            LetterType::Type1 => 1,
            LetterType::Type2 => 2,
            LetterType::Type3 => 3,
            LetterType::Type4 => 4,
            LetterType::Type5 => 5,
            LetterType::Type6 => 6,
        }
    }

    pub fn from_number(number: u8) -> Result<LetterType, EngineError> {
        match number {
            1 => Ok(LetterType::Type1),
            2 => Ok(LetterType::Type2),
            3 => Ok(LetterType::Type3),
            4 => Ok(LetterType::Type4),
            5 => Ok(LetterType::Type5),
            6 => Ok(LetterType::Type6),
            _ => Err(EngineError::invalid("letter type", number)),
        }
    }

    /// Short name of the motion family
    pub fn name(&self) -> &'static str {
        match self {
            LetterType::Type1 => "Dual-Shift",
            LetterType::Type2 => "Shift",
            LetterType::Type3 => "Cross-Shift",
            LetterType::Type4 => "Dash",
            LetterType::Type5 => "Dual-Dash",
            LetterType::Type6 => "Static",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LetterType::Type1 => "Type 1",
            LetterType::Type2 => "Type 2",
            LetterType::Type3 => "Type 3",
            LetterType::Type4 => "Type 4",
            LetterType::Type5 => "Type 5",
            LetterType::Type6 => "Type 6",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LetterType::Type1 => "Dual-Shift: both props shift around the grid",
            LetterType::Type2 => "Shift: one prop shifts while the other holds",
            LetterType::Type3 => "Cross-Shift: one prop shifts while the other dashes",
            LetterType::Type4 => "Dash: one prop dashes while the other holds",
            LetterType::Type5 => "Dual-Dash: both props dash through the centre",
            LetterType::Type6 => "Static: both props hold their locations",
        }
    }

    /// Dash, dual-dash and static letters are shown as one horizontal cluster
    pub fn is_groupable(&self) -> bool {
        matches!(self, LetterType::Type4 | LetterType::Type5 | LetterType::Type6)
    }

    pub fn info(&self) -> LetterTypeInfo {
        LetterTypeInfo {
            letter_type: *self,
            display_name: self.display_name(),
            description: self.description(),
        }
    }
}

impl FromStr for LetterType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LetterType::ALL
            .iter()
            .copied()
            .find(|ty| format!("{:?}", ty).eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::invalid("letter type", s))
    }
}

impl fmt::Display for LetterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Display metadata lookup
pub fn describe(letter_type: LetterType) -> LetterTypeInfo {
    letter_type.info()
}

pub fn is_groupable(letter_type: LetterType) -> bool {
    letter_type.is_groupable()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groupable_types() {
        let groupable: Vec<_> = LetterType::ALL.iter().filter(|t| is_groupable(**t)).collect();
        assert_eq!(groupable, vec![&LetterType::Type4, &LetterType::Type5, &LetterType::Type6]);
    }

    #[test]
    fn test_describe() {
        let info = describe(LetterType::Type3);
        assert_eq!(info.display_name, "Type 3");
        assert!(info.description.starts_with("Cross-Shift"));
    }

    #[test]
    fn test_from_number_and_str() {
        assert_eq!(LetterType::from_number(5), Ok(LetterType::Type5));
        assert!(LetterType::from_number(0).is_err());
        assert_eq!("type2".parse::<LetterType>(), Ok(LetterType::Type2));
        assert!("Type7".parse::<LetterType>().is_err());
    }
}

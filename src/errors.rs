//! Error types for the notation engine
//!
//! Classification and derivation are total over the closed vocabulary and
//! never fail. Errors only arise at the boundary, when a caller hands in a
//! value that is not part of the vocabulary or a catalogue that cannot be
//! read.

use thiserror::Error;

use crate::models::GridMode;

/// Top-level engine error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A value outside a closed enumeration reached the boundary
    #[error("invalid {kind} value: '{value}'")]
    InvalidEnumeration { kind: &'static str, value: String },

    /// A beat was appended to a sequence laid out on another grid
    #[error("grid mode mismatch: sequence is {expected:?}, beat is {found:?}")]
    GridModeMismatch { expected: GridMode, found: GridMode },

    /// Catalogue data could not be parsed
    #[error("catalogue error: {0}")]
    Catalogue(String),
}

impl EngineError {
    pub(crate) fn invalid(kind: &'static str, value: impl ToString) -> Self {
        EngineError::InvalidEnumeration {
            kind,
            value: value.to_string(),
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Catalogue(err.to_string())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

//! Models module for the kinetic notation engine
//!
//! This module contains the closed vocabulary and the value types
//! (motions, beats, sequences, letter types) the engine operates on.

pub mod elements;
pub mod motion;
pub mod beat;
pub mod letter;

// Re-export commonly used types
pub use elements::*;
pub use motion::Motion;
pub use beat::{Beat, Sequence};
pub use letter::{describe, is_groupable, LetterType, LetterTypeInfo};

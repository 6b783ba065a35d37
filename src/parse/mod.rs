//! Recognition of notation strings
//!
//! This module turns raw letter strings into the closed letter families
//! the rest of the engine matches on.

pub mod letter;

pub use letter::{alphabet_index, classify, compare_letters, letter_family, letters_of_type, LetterFamily};

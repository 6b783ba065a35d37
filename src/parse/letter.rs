//! Letter recognition
//!
//! A letter string is recognized once into a closed [`LetterFamily`] by an
//! ordered list of recognizer rules, then mapped to its [`LetterType`] with
//! an exhaustive match. Dash-suffixed rules come first: `W-` shares its base
//! glyph with `W` but is a different type.

use std::cmp::Ordering;
use std::collections::HashMap;

use lazy_static::lazy_static;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::letter::LetterType;

/// Structural family of a letter, recognized from its glyphs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LetterFamily {
    DualShift,
    Shift,
    CrossShift,
    Dash,
    DualDash,
    Static,
    Unrecognized,
}

lazy_static! {
    // Evaluated top to bottom, first match wins. Suffixed forms before bare ones.
    static ref LETTER_RULES: Vec<(Regex, LetterFamily)> = vec![
        (Regex::new(r"^[WXYZΣΔθΩ]-$").unwrap(), LetterFamily::CrossShift),
        (Regex::new(r"^[ΦΨΛ]-$").unwrap(), LetterFamily::DualDash),
        (Regex::new(r"^[A-V]$").unwrap(), LetterFamily::DualShift),
        (Regex::new(r"^[WXYZΣΔθΩ]$").unwrap(), LetterFamily::Shift),
        (Regex::new(r"^[ΦΨΛ]$").unwrap(), LetterFamily::Dash),
        (Regex::new(r"^[αβΓ]$").unwrap(), LetterFamily::Static),
    ];
}

const TYPE1_LETTERS: [&str; 22] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V",
];
const TYPE2_LETTERS: [&str; 8] = ["W", "X", "Y", "Z", "Σ", "Δ", "θ", "Ω"];
const TYPE3_LETTERS: [&str; 8] = ["W-", "X-", "Y-", "Z-", "Σ-", "Δ-", "θ-", "Ω-"];
const TYPE4_LETTERS: [&str; 3] = ["Φ", "Ψ", "Λ"];
const TYPE5_LETTERS: [&str; 3] = ["Φ-", "Ψ-", "Λ-"];
const TYPE6_LETTERS: [&str; 3] = ["α", "β", "Γ"];

/// Canonical position of every letter in the kinetic alphabet
static ALPHABET_INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    LetterType::ALL
        .iter()
        .flat_map(|ty| letters_of_type(*ty).iter().copied())
        .enumerate()
        .map(|(index, letter)| (letter, index))
        .collect()
});

/// Recognize the family of a letter string
pub fn letter_family(letter: &str) -> LetterFamily {
    let letter = letter.trim();
    if letter.is_empty() {
        return LetterFamily::Unrecognized;
    }

    LETTER_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(letter))
        .map(|(_, family)| *family)
        .unwrap_or(LetterFamily::Unrecognized)
}

/// Classify a letter into one of the six notation types.
///
/// Never fails: empty or unrecognized input falls back to
/// [`LetterType::DEFAULT`].
pub fn classify(letter: &str) -> LetterType {
    match letter_family(letter) {
        LetterFamily::DualShift => LetterType::Type1,
        LetterFamily::Shift => LetterType::Type2,
        LetterFamily::CrossShift => LetterType::Type3,
        LetterFamily::Dash => LetterType::Type4,
        LetterFamily::DualDash => LetterType::Type5,
        LetterFamily::Static => LetterType::Type6,
        LetterFamily::Unrecognized => {
            log::debug!("letter '{}' not recognized, using {:?}", letter, LetterType::DEFAULT);
            LetterType::DEFAULT
        }
    }
}

/// Canonical letters of a type, in alphabet order
pub fn letters_of_type(letter_type: LetterType) -> &'static [&'static str] {
    match letter_type {
        LetterType::Type1 => &TYPE1_LETTERS,
        LetterType::Type2 => &TYPE2_LETTERS,
        LetterType::Type3 => &TYPE3_LETTERS,
        LetterType::Type4 => &TYPE4_LETTERS,
        LetterType::Type5 => &TYPE5_LETTERS,
        LetterType::Type6 => &TYPE6_LETTERS,
    }
}

/// Position of a letter in the kinetic alphabet, if it is part of it
pub fn alphabet_index(letter: &str) -> Option<usize> {
    ALPHABET_INDEX.get(letter.trim()).copied()
}

/// Alphabetic order of the kinetic alphabet.
///
/// Known letters come first in canonical order; anything else follows,
/// compared as plain strings.
pub fn compare_letters(a: &str, b: &str) -> Ordering {
    match (alphabet_index(a), alphabet_index(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

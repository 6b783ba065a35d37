// Letter type classification through the public API

use kinetic_notation_wasm::models::{describe, is_groupable, LetterType};
use kinetic_notation_wasm::parse::letter::{classify, letters_of_type};

#[test]
fn test_plain_latin_letter_is_type1() {
    assert_eq!(classify("A"), LetterType::Type1);
    assert_eq!(classify("V"), LetterType::Type1);
}

#[test]
fn test_dash_suffixed_shift_is_type3_not_type2() {
    assert_eq!(classify("W"), LetterType::Type2);
    assert_eq!(classify("W-"), LetterType::Type3);
    assert_eq!(classify("Ω-"), LetterType::Type3);
}

#[test]
fn test_empty_letter_falls_back_to_type1() {
    assert_eq!(classify(""), LetterType::Type1);
}

#[test]
fn test_unrecognized_batch_never_aborts() {
    let letters = ["A", "", "??", "W-", "Λ-", "β", "not a letter"];
    let types: Vec<LetterType> = letters.iter().map(|l| classify(l)).collect();
    assert_eq!(
        types,
        vec![
            LetterType::Type1,
            LetterType::Type1,
            LetterType::Type1,
            LetterType::Type3,
            LetterType::Type5,
            LetterType::Type6,
            LetterType::Type1,
        ]
    );
}

#[test]
fn test_classification_is_idempotent() {
    for ty in LetterType::ALL {
        for letter in letters_of_type(ty) {
            assert_eq!(classify(letter), classify(letter));
        }
    }
}

#[test]
fn test_type_metadata() {
    for ty in LetterType::ALL {
        let info = describe(ty);
        assert_eq!(info.letter_type, ty);
        assert!(!info.description.is_empty());
        assert_eq!(is_groupable(ty), ty.number() >= 4);
    }
}

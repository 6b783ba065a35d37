//! Browser tests for the exported JavaScript API
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use kinetic_notation_wasm::api::types::{ContinuityResult, MotionAttributes};
use kinetic_notation_wasm::api::*;
use kinetic_notation_wasm::models::{Beat, GridMode, Location, Motion, MotionKind, Orientation, Prop, Sequence};
use kinetic_notation_wasm::{PickerConfig, SortMode};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap()
}

fn pro(letter: &str, blue: (Location, Location), red: (Location, Location)) -> Beat {
    Beat::new(
        letter,
        Motion::new(Prop::Blue, MotionKind::Pro, blue.0, blue.1, Orientation::In),
        Motion::new(Prop::Red, MotionKind::Pro, red.0, red.1, Orientation::In),
    )
}

fn opener() -> Sequence {
    Sequence::from_beats(
        GridMode::Diamond,
        vec![pro("A", (Location::N, Location::E), (Location::S, Location::W))],
    )
    .unwrap()
}

#[wasm_bindgen_test]
fn test_derive_rotation() {
    assert_eq!(derive_rotation_js("pro", "n", "e").unwrap(), "cw");
    assert_eq!(derive_rotation_js("static", "n", "n").unwrap(), "no_rot");
    assert!(derive_rotation_js("spin", "n", "e").is_err());
}

#[wasm_bindgen_test]
fn test_derive_attributes() {
    let value = derive_attributes_js("anti", "n", "e", "in").unwrap();
    let attrs: MotionAttributes = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(attrs.rotation, "cw");
    assert_eq!(attrs.end_orientation, "out");
    assert_eq!(derive_end_orientation_js("anti", "n", "e", "in").unwrap(), "out");
}

#[wasm_bindgen_test]
fn test_classify_letter() {
    assert_eq!(classify_letter("A"), 1);
    assert_eq!(classify_letter("W-"), 3);
    assert_eq!(classify_letter(""), 1);
    assert!(is_groupable(4).unwrap());
    assert!(!is_groupable(2).unwrap());
    assert!(is_groupable(9).is_err());
    assert!(describe_letter_type(6).is_ok());

    let legend = letters_of_type_js(6).unwrap();
    assert_eq!(legend.length(), 3);
    assert_eq!(legend.get(0).as_string().unwrap(), "α");
}

#[wasm_bindgen_test]
fn test_classify_continuity_on_empty_sequence() {
    let candidate = pro("B", (Location::E, Location::S), (Location::W, Location::S));
    let value = classify_continuity_js(to_js(&Sequence::new(GridMode::Diamond)), to_js(&candidate)).unwrap();
    let result: ContinuityResult = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(result.category, "all");
    assert_eq!(result.props, None);
}

#[wasm_bindgen_test]
fn test_classify_continuity_one_reversal() {
    let candidate = pro("B", (Location::E, Location::S), (Location::W, Location::S));
    let value = classify_continuity_js(to_js(&opener()), to_js(&candidate)).unwrap();
    let result: ContinuityResult = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(result.category, "oneReversal");
    assert_eq!(result.props, Some([true, false]));
}

#[wasm_bindgen_test]
fn test_organize_options_rejects_unknown_sort_mode() {
    let candidates: Vec<Beat> = vec![Beat::letter_only("A", None)];
    let sequence = Sequence::new(GridMode::Diamond);
    assert!(organize_options(to_js(&candidates), to_js(&sequence), "color", None).is_err());
    assert!(organize_options(to_js(&candidates), to_js(&sequence), "type", Some("all".to_string())).is_ok());
}

#[wasm_bindgen_test]
fn test_option_picker_keeps_configuration() {
    let mut picker = OptionPicker::new();
    picker.set_sort_mode("reversals").unwrap();
    picker.set_reversal_filter(Some("twoReversals".to_string())).unwrap();
    assert_eq!(picker.config().sort_mode, SortMode::Reversals);

    let restored = OptionPicker::from_config(picker.get_config().unwrap()).unwrap();
    assert_eq!(restored.config(), picker.config());

    picker.set_reversal_filter(None).unwrap();
    assert_eq!(picker.config(), PickerConfig { sort_mode: SortMode::Reversals, reversal_filter: None });

    let saved = serde_json::json!({ "sort_mode": "endPosition", "reversal_filter": "all" });
    let from_front_end = OptionPicker::from_config(to_js(&saved)).unwrap();
    assert_eq!(from_front_end.config(), PickerConfig { sort_mode: SortMode::EndPosition, reversal_filter: None });

    let candidates: Vec<Beat> = vec![Beat::letter_only("A", None)];
    assert!(picker.organize(to_js(&candidates), to_js(&opener())).is_ok());
}

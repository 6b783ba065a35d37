//! Letter classification for option and letter badges

use wasm_bindgen::prelude::*;

use crate::api::helpers::{engine_error, serialize};
use crate::models::{describe, LetterType};
use crate::parse::letter::{classify, letters_of_type};

/// Letter type number (1-6) of a letter. Unrecognized letters are type 1.
#[wasm_bindgen(js_name = classifyLetter)]
pub fn classify_letter(letter: &str) -> u8 {
    classify(letter).number()
}

/// `{ letter_type, display_name, description }` for a type number
#[wasm_bindgen(js_name = describeLetterType)]
pub fn describe_letter_type(type_number: u8) -> Result<JsValue, JsValue> {
    let letter_type = LetterType::from_number(type_number).map_err(engine_error)?;
    serialize(&describe(letter_type), "Letter type serialization error")
}

#[wasm_bindgen(js_name = isGroupable)]
pub fn is_groupable(type_number: u8) -> Result<bool, JsValue> {
    let letter_type = LetterType::from_number(type_number).map_err(engine_error)?;
    Ok(letter_type.is_groupable())
}

/// Letters of a type in canonical alphabet order, for badge legends
#[wasm_bindgen(js_name = lettersOfType)]
pub fn letters_of_type_js(type_number: u8) -> Result<js_sys::Array, JsValue> {
    let letter_type = LetterType::from_number(type_number).map_err(engine_error)?;

    let result = js_sys::Array::new();
    for letter in letters_of_type(letter_type) {
        result.push(&JsValue::from_str(letter));
    }
    Ok(result)
}

//! Attribute derivation for motion editing surfaces
//!
//! Called whenever a user edits a motion's kind, locations or start
//! orientation, to recompute the dependent fields.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{parse_enum, serialize};
use crate::api::types::MotionAttributes;
use crate::attributes::{derive_attributes, derive_end_orientation, derive_rotation};
use crate::models::{Location, MotionKind, Orientation};

/// Rotation sense (`cw`, `ccw`, `no_rot`) of a motion
#[wasm_bindgen(js_name = deriveRotation)]
pub fn derive_rotation_js(kind: &str, start: &str, end: &str) -> Result<String, JsValue> {
    let kind: MotionKind = parse_enum(kind)?;
    let start: Location = parse_enum(start)?;
    let end: Location = parse_enum(end)?;

    Ok(derive_rotation(kind, start, end).as_str().to_string())
}

/// End orientation (`in`, `out`, `clock`, `counter`) of a motion
#[wasm_bindgen(js_name = deriveEndOrientation)]
pub fn derive_end_orientation_js(
    kind: &str,
    start: &str,
    end: &str,
    start_orientation: &str,
) -> Result<String, JsValue> {
    let kind: MotionKind = parse_enum(kind)?;
    let start: Location = parse_enum(start)?;
    let end: Location = parse_enum(end)?;
    let start_orientation: Orientation = parse_enum(start_orientation)?;

    Ok(derive_end_orientation(kind, start, end, start_orientation).as_str().to_string())
}

/// Both derived fields as `{ rotation, end_orientation }`
#[wasm_bindgen(js_name = deriveAttributes)]
pub fn derive_attributes_js(
    kind: &str,
    start: &str,
    end: &str,
    start_orientation: &str,
) -> Result<JsValue, JsValue> {
    let kind: MotionKind = parse_enum(kind)?;
    let start: Location = parse_enum(start)?;
    let end: Location = parse_enum(end)?;
    let start_orientation: Orientation = parse_enum(start_orientation)?;

    let attrs = MotionAttributes::from(derive_attributes(kind, start, end, start_orientation));
    serialize(&attrs, "Attribute serialization error")
}

//! Kinetic notation engine WASM API
//!
//! This module provides the JavaScript-facing API of the engine. Values
//! cross the boundary through `serde_wasm_bindgen`; anything outside the
//! closed vocabulary is rejected at this layer.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, enum parsing, error handling, and logging
//! - `types`: Result types shared by the API modules
//! - `attributes`: Rotation and end-orientation derivation for motion editors
//! - `letters`: Letter classification and type metadata
//! - `options`: Continuity checks, option organization and the `OptionPicker` class

pub mod helpers;
pub mod types;
pub mod attributes;
pub mod letters;
pub mod options;

pub use attributes::{derive_attributes_js, derive_end_orientation_js, derive_rotation_js};
pub use letters::{classify_letter, describe_letter_type, is_groupable, letters_of_type_js};
pub use options::{classify_continuity_js, organize_options, OptionPicker};

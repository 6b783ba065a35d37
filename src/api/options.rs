//! Next-beat picker operations
//!
//! This module provides the WASM API for continuity checks and option
//! organization, plus the `OptionPicker` class that keeps a picker's sort
//! mode and reversal filter between calls.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, engine_error, parse_enum, serialize};
use crate::api::types::ContinuityResult;
use crate::continuity::{classify_continuity, prop_continuity, ReversalCategory, ReversalFilter};
use crate::models::{Beat, Sequence};
use crate::options::{organize, PickerConfig, SortMode};
use crate::{wasm_info, wasm_log};

fn parse_filter(filter: Option<String>) -> Result<ReversalFilter, JsValue> {
    match filter {
        Some(value) => ReversalCategory::parse_filter(&value).map_err(engine_error),
        None => Ok(None),
    }
}

/// Continuity of `candidate` after `sequence`
///
/// # Returns
/// `{ category, props }`; `category` is `"all"` when the check does not
/// apply (empty sequence or missing motion data).
#[wasm_bindgen(js_name = classifyContinuity)]
pub fn classify_continuity_js(sequence_js: JsValue, candidate_js: JsValue) -> Result<JsValue, JsValue> {
    let sequence: Sequence = deserialize(sequence_js, "Sequence deserialization error")?;
    let candidate: Beat = deserialize(candidate_js, "Candidate deserialization error")?;

    let category = classify_continuity(&sequence, &candidate);
    let props = sequence
        .last_beat()
        .and_then(|last| prop_continuity(last, &candidate));

    serialize(&ContinuityResult::new(category, props), "Continuity serialization error")
}

/// Organize a raw candidate set for display
///
/// # Parameters
/// - `candidates_js`: array of Beat objects
/// - `sequence_js`: the current sequence
/// - `sort_mode`: `type`, `end_position` or `reversals`
/// - `reversal_filter`: `continuous`, `oneReversal`, `twoReversals`, or
///   `all`/undefined for no filter
#[wasm_bindgen(js_name = organizeOptions)]
pub fn organize_options(
    candidates_js: JsValue,
    sequence_js: JsValue,
    sort_mode: &str,
    reversal_filter: Option<String>,
) -> Result<JsValue, JsValue> {
    let candidates: Vec<Beat> = deserialize(candidates_js, "Candidates deserialization error")?;
    let sequence: Sequence = deserialize(sequence_js, "Sequence deserialization error")?;
    let sort_mode: SortMode = parse_enum(sort_mode)?;
    let filter = parse_filter(reversal_filter)?;

    wasm_log!(
        "organizeOptions: {} candidates, sequence length {}, sort={}, filter={:?}",
        candidates.len(),
        sequence.len(),
        sort_mode,
        filter
    );

    let organized = organize(&candidates, &sequence, sort_mode, filter);
    serialize(&organized, "Options serialization error")
}

/// Option picker holding its sort mode and reversal filter
#[wasm_bindgen]
pub struct OptionPicker {
    config: PickerConfig,
}

#[wasm_bindgen]
impl OptionPicker {
    /// Create a picker with the default configuration (type mode, no filter)
    #[wasm_bindgen(constructor)]
    pub fn new() -> OptionPicker {
        OptionPicker {
            config: PickerConfig::default(),
        }
    }

    /// Restore a picker from a persisted configuration object
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config_js: JsValue) -> Result<OptionPicker, JsValue> {
        let config: PickerConfig = deserialize(config_js, "Picker config deserialization error")?;
        Ok(OptionPicker { config })
    }

    #[wasm_bindgen(js_name = setSortMode)]
    pub fn set_sort_mode(&mut self, sort_mode: &str) -> Result<(), JsValue> {
        self.config.sort_mode = parse_enum(sort_mode)?;
        wasm_info!("Picker sort mode set to {}", self.config.sort_mode);
        Ok(())
    }

    #[wasm_bindgen(js_name = setReversalFilter)]
    pub fn set_reversal_filter(&mut self, reversal_filter: Option<String>) -> Result<(), JsValue> {
        self.config.reversal_filter = parse_filter(reversal_filter)?;
        Ok(())
    }

    /// Get picker configuration
    #[wasm_bindgen(js_name = getConfig)]
    pub fn get_config(&self) -> Result<JsValue, JsValue> {
        serialize(&self.config, "Picker config serialization error")
    }

    /// Organize candidates with this picker's configuration
    pub fn organize(&self, candidates_js: JsValue, sequence_js: JsValue) -> Result<JsValue, JsValue> {
        let candidates: Vec<Beat> = deserialize(candidates_js, "Candidates deserialization error")?;
        let sequence: Sequence = deserialize(sequence_js, "Sequence deserialization error")?;

        let organized = organize(
            &candidates,
            &sequence,
            self.config.sort_mode,
            self.config.reversal_filter,
        );
        serialize(&organized, "Options serialization error")
    }
}

impl OptionPicker {
    pub fn config(&self) -> PickerConfig {
        self.config
    }
}

impl Default for OptionPicker {
    fn default() -> Self {
        Self::new()
    }
}

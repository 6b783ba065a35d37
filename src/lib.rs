//! Kinetic Alphabet Notation Engine WASM Module
//!
//! Classification, derivation and option-organization rules behind a
//! kinetic alphabet sequence composer. Everything here is pure and
//! synchronous; the front end supplies sequences and candidate beats and
//! renders what comes back.

pub mod errors;
pub mod models;
pub mod parse;
pub mod attributes;
pub mod continuity;
pub mod options;
pub mod api;

// Re-export commonly used types
pub use errors::{EngineError, EngineResult};
pub use models::*;
pub use attributes::{derive_attributes, derive_end_orientation, derive_rotation, DerivedAttributes};
pub use parse::letter::{classify, compare_letters};
pub use continuity::{classify_continuity, prop_continuity, ReversalCategory, ReversalFilter};
pub use options::{
    options_for_sequence, organize, GroupKey, MotionCatalogue, OptionGroup, OptionSummary,
    OrganizedOptions, PickerConfig, SortMode, SortPreferences, StaticCatalogue,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            wasm_warn!("logger not initialized: {}", e);
        }
    }

    log::info!("Kinetic notation engine WASM module initialized");
}

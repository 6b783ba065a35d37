//! Option organization for next-beat pickers
//!
//! - `organizer`: filter, group, order and label a candidate set
//! - `summary`: badge counts over the filtered set
//! - `catalogue`: the consumed lookup of legal next beats
//! - `picker`: picker configuration and remembered sort modes

pub mod organizer;
pub mod summary;
pub mod catalogue;
pub mod picker;

pub use organizer::{
    filter_by_reversal, group_candidates, group_key, organize, GroupKey, OptionGroup,
    OrganizedOptions, SortMode,
};
pub use summary::{summarize, OptionSummary};
pub use catalogue::{options_for_sequence, MotionCatalogue, StaticCatalogue};
pub use picker::{PickerConfig, SortPreferences};

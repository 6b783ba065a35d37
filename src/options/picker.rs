//! Picker configuration and remembered sort preferences
//!
//! The front end persists these wherever it likes; the engine only defines
//! their shape and defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::continuity::{ReversalCategory, ReversalFilter};
use crate::errors::EngineResult;
use crate::options::organizer::SortMode;

/// Active sort mode and reversal filter of one picker
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PickerConfig {
    #[serde(default)]
    pub sort_mode: SortMode,
    #[serde(default, deserialize_with = "deserialize_filter")]
    pub reversal_filter: ReversalFilter,
}

// Same forms as the filter chips: a category name, "all", "" or null
fn deserialize_filter<'de, D>(deserializer: D) -> Result<ReversalFilter, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) => ReversalCategory::parse_filter(&value).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Last-used sort mode per mode-key (e.g. one per picker surface)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct SortPreferences {
    #[serde(default)]
    modes: BTreeMap<String, SortMode>,
}

impl SortPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remembered sort mode for `key`, or the default
    pub fn get(&self, key: &str) -> SortMode {
        self.modes.get(key).copied().unwrap_or_default()
    }

    pub fn set(&mut self, key: impl Into<String>, sort_mode: SortMode) {
        self.modes.insert(key.into(), sort_mode);
    }

    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PickerConfig::default();
        assert_eq!(config.sort_mode, SortMode::Type);
        assert_eq!(config.reversal_filter, None);
    }

    #[test]
    fn test_preferences_persist_through_json() {
        let mut prefs = SortPreferences::new();
        prefs.set("option_picker", SortMode::Reversals);
        let json = prefs.to_json().unwrap();

        let restored = SortPreferences::from_json(&json).unwrap();
        assert_eq!(restored.get("option_picker"), SortMode::Reversals);
        assert_eq!(restored.get("start_picker"), SortMode::Type);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: PickerConfig = serde_json::from_str(r#"{"reversal_filter":"oneReversal"}"#).unwrap();
        assert_eq!(config.sort_mode, SortMode::Type);
        assert_eq!(config.reversal_filter, Some(ReversalCategory::OneReversal));
    }

    #[test]
    fn test_config_accepts_front_end_forms() {
        let config: PickerConfig =
            serde_json::from_str(r#"{"sort_mode":"endPosition","reversal_filter":"all"}"#).unwrap();
        assert_eq!(config.sort_mode, SortMode::EndPosition);
        assert_eq!(config.reversal_filter, None);

        let config: PickerConfig = serde_json::from_str(r#"{"reversal_filter":null}"#).unwrap();
        assert_eq!(config.reversal_filter, None);

        assert!(serde_json::from_str::<PickerConfig>(r#"{"reversal_filter":"sometimes"}"#).is_err());
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = PickerConfig {
            sort_mode: SortMode::Reversals,
            reversal_filter: Some(ReversalCategory::TwoReversals),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<PickerConfig>(&json).unwrap(), config);
    }
}

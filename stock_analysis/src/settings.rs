//! Optional TOML settings for an analysis run.
//!
//! Every field has a default, so a settings file only needs to name the
//! values it overrides:
//!
//! ```toml
//! short_window = 10
//! long_window = 30
//! bollinger_multiplier = 2.5
//! start_date = "2023-06-01"
//! ```

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use shared_utils::config::{ConfigError, load_toml};

use crate::{
    analysis::AnalysisParams,
    indicators::{bollinger, moving_average},
};

/// The default start of the analyzed range when neither the CLI nor the
/// settings file names one.
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisSettings {
    pub short_window: usize,
    pub long_window: usize,
    pub bollinger_window: usize,
    pub bollinger_multiplier: f64,
    pub start_date: NaiveDate,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            short_window: moving_average::DEFAULT_SHORT_WINDOW,
            long_window: moving_average::DEFAULT_LONG_WINDOW,
            bollinger_window: bollinger::DEFAULT_WINDOW,
            bollinger_multiplier: bollinger::DEFAULT_MULTIPLIER,
            start_date: default_start_date(),
        }
    }
}

impl AnalysisSettings {
    /// Loads settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        load_toml(path)
    }

    /// The window parameters for [`crate::analysis::analyze`].
    pub fn params(&self) -> AnalysisParams {
        AnalysisParams {
            short_window: self.short_window,
            long_window: self.long_window,
            bollinger_window: self.bollinger_window,
            bollinger_multiplier: self.bollinger_multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_defaults() {
        let settings = AnalysisSettings::default();
        assert_eq!(settings.short_window, 20);
        assert_eq!(settings.long_window, 50);
        assert_eq!(settings.bollinger_window, 20);
        assert_eq!(settings.bollinger_multiplier, 2.0);
        assert_eq!(settings.start_date.to_string(), "2022-01-01");
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.toml");
        std::fs::write(&path, "short_window = 5\nstart_date = \"2023-06-01\"\n").unwrap();

        let settings = AnalysisSettings::load(&path).unwrap();
        assert_eq!(settings.short_window, 5);
        assert_eq!(settings.long_window, 50);
        assert_eq!(settings.start_date.to_string(), "2023-06-01");
    }

    #[test]
    fn unknown_field_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.toml");
        std::fs::write(&path, "shortwindow = 5\n").unwrap();

        assert!(AnalysisSettings::load(&path).is_err());
    }
}

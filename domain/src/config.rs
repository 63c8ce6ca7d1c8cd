//! Layout constants and display defaults for the date-range picker.

use serde::{Deserialize, Serialize};

use crate::error::PickerError;

/// Tunable values for one picker instance.
///
/// Every field has a default, so partial YAML or JSON documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Gap kept between the panel and the window edge when no dialog encloses the trigger
    pub viewport_padding: f64,
    /// Gap between the trigger and the panel, taken off both vertical candidates
    pub panel_margin: f64,
    /// Space below the trigger under which opening upwards is considered
    pub preferred_space: f64,
    /// Space under which the panel flips to the roomier side
    pub minimum_space: f64,
    /// Horizontal room the panel width leaves free in the window
    pub horizontal_padding: f64,
    /// How many years before the viewing year the year window starts
    pub year_window_lead: i32,
    /// Trigger text shown for the all-time range
    pub placeholder: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            viewport_padding: 48.0,
            panel_margin: 12.0,
            preferred_space: 360.0,
            minimum_space: 280.0,
            horizontal_padding: 48.0,
            year_window_lead: 5,
            placeholder: "All time".to_string(),
        }
    }
}

impl PickerConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self, PickerError> {
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(source: &str) -> Result<Self, PickerError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PickerError> {
        let distances = [
            ("viewport_padding", self.viewport_padding),
            ("panel_margin", self.panel_margin),
            ("preferred_space", self.preferred_space),
            ("minimum_space", self.minimum_space),
            ("horizontal_padding", self.horizontal_padding),
        ];
        for (name, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(PickerError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.minimum_space > self.preferred_space {
            return Err(PickerError::InvalidConfig(format!(
                "minimum_space ({}) exceeds preferred_space ({})",
                self.minimum_space, self.preferred_space
            )));
        }

        if !(0..12).contains(&self.year_window_lead) {
            return Err(PickerError::InvalidConfig(format!(
                "year_window_lead must be between 0 and 11, got {}",
                self.year_window_lead
            )));
        }

        Ok(())
    }
}

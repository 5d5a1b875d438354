//! Configuration values for datalogger processing.
//!
//! Provides the configuration structure wiring special-field conversion,
//! the default display field list and the unit-suffix lookup. A `Config` is
//! constructed once and passed explicitly to the loader; there is no
//! ambient global registry.

use crate::constants::{DEFAULT_CALIBRATION_FACTOR, DEFAULT_FIELDS, UNIT_SUFFIXES};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Processing configuration for a datalogger directory load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Multiplier converting anemometer pulses-per-second into m/s
    pub calibration_factor: f64,

    /// Raw field names the caller plots first, in order
    pub default_fields: Vec<String>,

    /// Unit suffix per display name, used only for label decoration
    pub units: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calibration_factor: DEFAULT_CALIBRATION_FACTOR,
            default_fields: DEFAULT_FIELDS.iter().map(|s| s.to_string()).collect(),
            units: UNIT_SUFFIXES
                .iter()
                .map(|(name, suffix)| (name.to_string(), suffix.to_string()))
                .collect(),
        }
    }
}

impl Config {
    /// Unit suffix for a display name, if one is configured.
    ///
    /// Used by callers to decorate axis labels; never consulted by the
    /// conversion pipeline itself.
    pub fn unit_suffix(&self, display_name: &str) -> Option<&str> {
        self.units.get(display_name).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_wiring() {
        let config = Config::default();
        assert_eq!(config.calibration_factor, 0.7);
        assert!(
            config
                .default_fields
                .iter()
                .any(|f| f == "Wind Pulses")
        );
    }

    #[test]
    fn test_unit_suffix_lookup() {
        let config = Config::default();
        assert_eq!(config.unit_suffix("Humidity"), Some("%"));
        assert_eq!(config.unit_suffix("Wind Speed"), Some("m/s"));
        assert_eq!(config.unit_suffix("Nonexistent"), None);
    }
}

//! Application config file
//!
//! Optional JSON file read by the binaries. Every field has a default, so an
//! empty object `{}` is a valid config:
//!
//! ```json
//! {
//!   "rule": "rate-proportional",
//!   "max_months": 12000,
//!   "investment_slider": { "min": 2000, "max": 50000, "step": 100, "default": 40000 },
//!   "rate_slider": { "min": 1.0, "max": 6.0, "step": 0.1, "default": 5.0 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::inputs::{ProjectionInput, SliderRange};
use crate::projection::{DoublingRule, ProjectionConfig, DEFAULT_MAX_MONTHS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub rule: DoublingRule,

    #[serde(default = "default_max_months")]
    pub max_months: u32,

    #[serde(default = "SliderRange::initial_investment")]
    pub investment_slider: SliderRange,

    #[serde(default = "SliderRange::monthly_rate")]
    pub rate_slider: SliderRange,
}

/// Sweeps project every slider position, so finer ranges are refused
pub const MAX_SLIDER_POSITIONS: usize = 100_000;

fn default_max_months() -> u32 {
    DEFAULT_MAX_MONTHS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rule: DoublingRule::default(),
            max_months: default_max_months(),
            investment_slider: SliderRange::initial_investment(),
            rate_slider: SliderRange::monthly_rate(),
        }
    }
}

impl AppConfig {
    /// Load and validate a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse and validate config JSON
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Both sliders must be well-formed, stay strictly positive and have a
    /// bounded number of positions
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_months == 0 {
            return Err(ConfigError::InvalidMaxMonths(self.max_months));
        }
        for (name, range) in [
            ("investment_slider", &self.investment_slider),
            ("rate_slider", &self.rate_slider),
        ] {
            range
                .check()
                .map_err(|reason| ConfigError::InvalidRange { name, reason })?;
            if range.min <= 0.0 {
                return Err(ConfigError::InvalidRange {
                    name,
                    reason: format!("min {} must be positive", range.min),
                });
            }
            let steps = (range.max - range.min) / range.step;
            if steps >= MAX_SLIDER_POSITIONS as f64 {
                return Err(ConfigError::InvalidRange {
                    name,
                    reason: format!(
                        "step {} gives more than {} positions",
                        range.step, MAX_SLIDER_POSITIONS
                    ),
                });
            }
        }
        Ok(())
    }

    pub fn projection_config(&self) -> ProjectionConfig {
        ProjectionConfig {
            rule: self.rule,
            max_months: self.max_months,
        }
    }

    /// Input at both slider defaults
    pub fn default_input(&self) -> ProjectionInput {
        ProjectionInput::new(self.investment_slider.default, self.rate_slider.default)
    }
}

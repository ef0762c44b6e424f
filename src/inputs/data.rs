//! Projection inputs and the slider ranges the page offers for them

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// Default initial investment shown when the page loads
pub const DEFAULT_INITIAL_INVESTMENT: f64 = 40_000.0;

/// Default monthly return rate (percent) shown when the page loads
pub const DEFAULT_MONTHLY_RATE_PERCENT: f64 = 5.0;

/// The two values a projection is computed from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Amount invested at month 0
    pub initial_investment: f64,

    /// Return per month as a percentage (5.0 = 5%)
    pub monthly_rate_percent: f64,
}

impl ProjectionInput {
    pub fn new(initial_investment: f64, monthly_rate_percent: f64) -> Self {
        Self {
            initial_investment,
            monthly_rate_percent,
        }
    }

    /// Reject zero, negative and non-finite values.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if !self.initial_investment.is_finite() || self.initial_investment <= 0.0 {
            return Err(ProjectionError::invalid(
                "initial_investment",
                self.initial_investment,
            ));
        }
        if !self.monthly_rate_percent.is_finite() || self.monthly_rate_percent <= 0.0 {
            return Err(ProjectionError::invalid(
                "monthly_rate_percent",
                self.monthly_rate_percent,
            ));
        }
        Ok(())
    }

    /// Constant amount added each month (initial investment times the monthly rate)
    pub fn monthly_return(&self) -> f64 {
        self.initial_investment * (self.monthly_rate_percent / 100.0)
    }
}

impl Default for ProjectionInput {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_INVESTMENT, DEFAULT_MONTHLY_RATE_PERCENT)
    }
}

/// Bounds and step of a slider control
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl SliderRange {
    /// Initial investment slider: $2,000 to $50,000 in $100 steps
    pub fn initial_investment() -> Self {
        Self {
            min: 2_000.0,
            max: 50_000.0,
            step: 100.0,
            default: DEFAULT_INITIAL_INVESTMENT,
        }
    }

    /// Monthly rate slider: 1.0% to 6.0% in 0.1% steps
    pub fn monthly_rate() -> Self {
        Self {
            min: 1.0,
            max: 6.0,
            step: 0.1,
            default: DEFAULT_MONTHLY_RATE_PERCENT,
        }
    }

    /// Check that min < max, step > 0 and the default sits inside the range
    pub fn check(&self) -> Result<(), String> {
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            return Err("bounds must be finite".to_string());
        }
        if self.min >= self.max {
            return Err(format!("min {} must be below max {}", self.min, self.max));
        }
        if self.step <= 0.0 {
            return Err(format!("step {} must be positive", self.step));
        }
        if self.default < self.min || self.default > self.max {
            return Err(format!(
                "default {} outside [{}, {}]",
                self.default, self.min, self.max
            ));
        }
        Ok(())
    }

    /// Clamp a value into the range and snap it to the nearest step.
    ///
    /// Steps are counted from `min`, and the result is rounded to 6 decimals
    /// so 0.1 steps land on 5.1 rather than 5.1000000000000005.
    pub fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        let snapped = (self.min + steps * self.step).min(self.max);
        (snapped * 1e6).round() / 1e6
    }

    /// Number of positions on the slider (both ends included)
    pub fn positions(&self) -> usize {
        ((self.max - self.min) / self.step).round() as usize + 1
    }

    /// Every snapped value the slider can take, ascending
    pub fn values(&self) -> Vec<f64> {
        (0..self.positions())
            .map(|i| self.snap(self.min + i as f64 * self.step))
            .collect()
    }
}

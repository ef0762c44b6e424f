//! Core projection engine for monthly investment growth

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::milestones::{
    annual_rate_percent, calibrated_doubling_month, calibrated_months,
    rate_proportional_doubling_month, risk_free_month,
};
use super::series::{ProjectionPoint, ProjectionResult};
use super::state::GrowthState;
use crate::error::ProjectionError;
use crate::inputs::ProjectionInput;

/// Longest series the engine will generate (1000 years)
pub const DEFAULT_MAX_MONTHS: u32 = 12_000;

/// How the doubling month is derived and how the series is built around it.
///
/// The page ships two incompatible approximations. They are kept apart and
/// a projector applies exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoublingRule {
    /// Two anchors (2% -> 100 months, 5% -> 40 months) joined by straight lines.
    /// Series starts at the initial investment and is not capped.
    #[default]
    Calibrated,
    /// round(200 / rate) months. Series is accumulated return from zero,
    /// clamped to twice the investment, stopping once it gets there.
    RateProportional,
}

impl DoublingRule {
    /// Month count this rule assigns to a monthly rate
    pub fn doubling_month(&self, monthly_rate_percent: f64) -> u32 {
        match self {
            DoublingRule::Calibrated => calibrated_doubling_month(monthly_rate_percent),
            DoublingRule::RateProportional => rate_proportional_doubling_month(monthly_rate_percent),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DoublingRule::Calibrated => "calibrated",
            DoublingRule::RateProportional => "rate-proportional",
        }
    }
}

/// Configuration for a projector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Doubling rule applied to every projection
    pub rule: DoublingRule,

    /// Inputs whose doubling month exceeds this are rejected
    pub max_months: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            rule: DoublingRule::default(),
            max_months: DEFAULT_MAX_MONTHS,
        }
    }
}

impl ProjectionConfig {
    pub fn with_rule(rule: DoublingRule) -> Self {
        Self {
            rule,
            ..Default::default()
        }
    }
}

/// Turns a `ProjectionInput` into a `ProjectionResult`.
///
/// Stateless between calls: the same input always gives the same result.
#[derive(Debug, Clone, Default)]
pub struct GrowthProjector {
    config: ProjectionConfig,
}

impl GrowthProjector {
    /// Create a new projector with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn with_rule(rule: DoublingRule) -> Self {
        Self::new(ProjectionConfig::with_rule(rule))
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    pub fn rule(&self) -> DoublingRule {
        self.config.rule
    }

    /// Run the projection for one input
    pub fn project(&self, input: &ProjectionInput) -> Result<ProjectionResult, ProjectionError> {
        input.validate()?;

        let rate = input.monthly_rate_percent;
        let rule = self.config.rule;
        let doubling_month = rule.doubling_month(rate);
        if doubling_month > self.config.max_months {
            return Err(ProjectionError::beyond_horizon(rate));
        }
        if rule == DoublingRule::Calibrated {
            let months = calibrated_months(rate);
            if months < 0.5 {
                warn!(
                    "calibrated rule extrapolates to {} months at {}%/month; using 1",
                    months, rate
                );
            }
        }

        let doubling_value = input.initial_investment * 2.0;
        if !doubling_value.is_finite() {
            return Err(ProjectionError::too_large(
                "initial_investment",
                input.initial_investment,
            ));
        }
        let monthly_return = input.monthly_return();
        let opening_value = match rule {
            DoublingRule::Calibrated => input.initial_investment,
            DoublingRule::RateProportional => 0.0,
        };
        // Largest value the series can reach before any cap applies
        let final_value = opening_value + monthly_return * doubling_month as f64;
        if !monthly_return.is_finite() || !final_value.is_finite() {
            return Err(ProjectionError::too_large("monthly_rate_percent", rate));
        }

        let (series, risk_free) = match rule {
            DoublingRule::Calibrated => {
                let state = GrowthState::new(opening_value, monthly_return, None);
                (Self::generate(state, doubling_month), None)
            }
            DoublingRule::RateProportional => {
                let state = GrowthState::new(opening_value, monthly_return, Some(doubling_value));
                (Self::generate(state, doubling_month), Some(risk_free_month(rate)))
            }
        };

        debug!(
            "projected {} at {}%/month ({}): {} points, doubles at month {}",
            input.initial_investment,
            rate,
            rule.as_str(),
            series.len(),
            doubling_month
        );

        Ok(ProjectionResult {
            input: *input,
            rule,
            series,
            doubling_month,
            doubling_value,
            annual_rate_percent: annual_rate_percent(rate),
            monthly_return,
            risk_free_month: risk_free,
        })
    }

    /// Step the state month by month up to `months`, stopping early once a cap is hit
    fn generate(mut state: GrowthState, months: u32) -> Vec<ProjectionPoint> {
        let mut series = Vec::with_capacity(months as usize);

        for _month in 1..=months {
            state.advance_month();
            series.push(ProjectionPoint {
                month: state.month,
                value: state.stored_value(),
            });

            if state.at_cap() {
                break;
            }
        }

        series
    }
}

/// Project with the default (calibrated) rule
pub fn project(input: &ProjectionInput) -> Result<ProjectionResult, ProjectionError> {
    GrowthProjector::default().project(input)
}

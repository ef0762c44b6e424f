//! Scenario runner for batch projections
//!
//! Holds one configured projector and runs it over many inputs, either a
//! supplied list or every grid point of the two sliders.

use rayon::prelude::*;

use crate::error::ProjectionError;
use crate::inputs::{ProjectionInput, SliderRange};
use crate::projection::{DoublingRule, GrowthProjector, ProjectionConfig, ProjectionResult};

/// Pre-configured scenario runner
///
/// # Example
/// ```
/// use growth_projector::{DoublingRule, ProjectionInput, ScenarioRunner};
///
/// let runner = ScenarioRunner::with_rule(DoublingRule::RateProportional);
/// let results = runner.run_batch(&[
///     ProjectionInput::new(40_000.0, 5.0),
///     ProjectionInput::new(10_000.0, 3.0),
/// ]);
/// assert_eq!(results[0].as_ref().unwrap().doubling_month, 40);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    projector: GrowthProjector,
}

impl ScenarioRunner {
    /// Create runner with the default config
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(rule: DoublingRule) -> Self {
        Self::with_config(ProjectionConfig::with_rule(rule))
    }

    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            projector: GrowthProjector::new(config),
        }
    }

    /// Run a single projection
    pub fn run(&self, input: &ProjectionInput) -> Result<ProjectionResult, ProjectionError> {
        self.projector.project(input)
    }

    /// Run projections for many inputs in parallel; results keep input order
    pub fn run_batch(&self, inputs: &[ProjectionInput]) -> Vec<Result<ProjectionResult, ProjectionError>> {
        inputs
            .par_iter()
            .map(|input| self.projector.project(input))
            .collect()
    }

    /// Project every combination of slider positions, investment-major
    pub fn run_sweep(
        &self,
        investment: &SliderRange,
        rate: &SliderRange,
    ) -> Vec<Result<ProjectionResult, ProjectionError>> {
        self.run_batch(&sweep_grid(investment, rate))
    }

    pub fn projector(&self) -> &GrowthProjector {
        &self.projector
    }
}

/// Every (investment, rate) pair the two sliders can produce
pub fn sweep_grid(investment: &SliderRange, rate: &SliderRange) -> Vec<ProjectionInput> {
    let rates = rate.values();
    investment
        .values()
        .into_iter()
        .flat_map(|amount| rates.iter().map(move |&r| ProjectionInput::new(amount, r)))
        .collect()
}

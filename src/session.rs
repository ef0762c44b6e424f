//! Interactive calculator state: inputs from the sliders and the result derived from them
//!
//! Every input change replaces the result with a fresh projection. Hosts that
//! compute off the input thread take a ticket with [`Calculator::begin`] and
//! hand the result back with [`Calculator::commit`]; only the newest ticket
//! is accepted.

use log::debug;

use crate::error::ProjectionError;
use crate::inputs::{ProjectionInput, SliderRange};
use crate::projection::{GrowthProjector, ProjectionResult};

/// Identifies one recompute request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Slider-driven calculator
#[derive(Debug, Clone)]
pub struct Calculator {
    projector: GrowthProjector,
    investment_range: SliderRange,
    rate_range: SliderRange,
    input: ProjectionInput,
    result: ProjectionResult,
    issued: u64,
}

impl Calculator {
    /// Start at the slider defaults with the page's ranges
    pub fn new(projector: GrowthProjector) -> Result<Self, ProjectionError> {
        Self::with_ranges(
            projector,
            SliderRange::initial_investment(),
            SliderRange::monthly_rate(),
        )
    }

    /// Start at the defaults of the given ranges
    pub fn with_ranges(
        projector: GrowthProjector,
        investment_range: SliderRange,
        rate_range: SliderRange,
    ) -> Result<Self, ProjectionError> {
        let input = ProjectionInput::new(investment_range.default, rate_range.default);
        let result = projector.project(&input)?;
        Ok(Self {
            projector,
            investment_range,
            rate_range,
            input,
            result,
            issued: 0,
        })
    }

    pub fn input(&self) -> &ProjectionInput {
        &self.input
    }

    pub fn result(&self) -> &ProjectionResult {
        &self.result
    }

    /// Move the investment slider; the value is clamped and snapped to its step
    pub fn set_initial_investment(&mut self, value: f64) -> Result<&ProjectionResult, ProjectionError> {
        let mut input = self.input;
        input.initial_investment = self.investment_range.snap(value);
        self.apply(input)
    }

    /// Move the rate slider; the value is clamped and snapped to its step
    pub fn set_monthly_rate(&mut self, value: f64) -> Result<&ProjectionResult, ProjectionError> {
        let mut input = self.input;
        input.monthly_rate_percent = self.rate_range.snap(value);
        self.apply(input)
    }

    /// Recompute synchronously. On error the previous input and result stay in place.
    fn apply(&mut self, input: ProjectionInput) -> Result<&ProjectionResult, ProjectionError> {
        let result = self.projector.project(&input)?;
        self.issued += 1;
        self.input = input;
        self.result = result;
        Ok(&self.result)
    }

    /// Register a recompute request, superseding earlier tickets
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Accept a result computed for `ticket` if no newer request was issued.
    ///
    /// Returns whether the result was applied.
    pub fn commit(&mut self, ticket: Ticket, result: ProjectionResult) -> bool {
        if ticket.0 != self.issued {
            debug!(
                "dropping stale result for ticket {} (latest is {})",
                ticket.0, self.issued
            );
            return false;
        }
        self.input = result.input;
        self.result = result;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::DoublingRule;

    fn calculator() -> Calculator {
        Calculator::new(GrowthProjector::default()).unwrap()
    }

    #[test]
    fn test_starts_at_defaults() {
        let calc = calculator();
        assert_eq!(*calc.input(), ProjectionInput::new(40_000.0, 5.0));
        assert_eq!(calc.result().doubling_month, 40);
    }

    #[test]
    fn test_input_change_recomputes() {
        let mut calc = calculator();
        let result = calc.set_monthly_rate(2.0).unwrap();
        assert_eq!(result.doubling_month, 100);

        let result = calc.set_initial_investment(10_000.0).unwrap();
        assert_eq!(result.doubling_value, 20_000.0);
        assert_eq!(result.input.monthly_rate_percent, 2.0);
    }

    #[test]
    fn test_setters_clamp_to_slider() {
        let mut calc = calculator();
        calc.set_monthly_rate(0.0).unwrap();
        assert_eq!(calc.input().monthly_rate_percent, 1.0);

        calc.set_initial_investment(1_000_000.0).unwrap();
        assert_eq!(calc.input().initial_investment, 50_000.0);

        calc.set_initial_investment(12_345.0).unwrap();
        assert_eq!(calc.input().initial_investment, 12_300.0);
    }

    #[test]
    fn test_latest_ticket_wins() {
        let mut calc = Calculator::new(GrowthProjector::with_rule(DoublingRule::RateProportional)).unwrap();
        let projector = GrowthProjector::with_rule(DoublingRule::RateProportional);

        let first = calc.begin();
        let second = calc.begin();

        let slow = projector.project(&ProjectionInput::new(20_000.0, 2.0)).unwrap();
        let fast = projector.project(&ProjectionInput::new(30_000.0, 4.0)).unwrap();

        assert!(calc.commit(second, fast));
        assert!(!calc.commit(first, slow));
        assert_eq!(calc.input().initial_investment, 30_000.0);
        assert_eq!(calc.result().doubling_month, 50);
    }

    #[test]
    fn test_sync_change_supersedes_pending_ticket() {
        let mut calc = calculator();
        let pending = calc.begin();
        calc.set_monthly_rate(3.0).unwrap();

        let late = GrowthProjector::default()
            .project(&ProjectionInput::new(2_000.0, 6.0))
            .unwrap();
        assert!(!calc.commit(pending, late));
        assert_eq!(calc.input().monthly_rate_percent, 3.0);
    }

    #[test]
    fn test_invalid_range_default_fails_construction() {
        let zero_rate = SliderRange { min: 0.0, max: 6.0, step: 0.1, default: 0.0 };
        let err = Calculator::with_ranges(
            GrowthProjector::default(),
            SliderRange::initial_investment(),
            zero_rate,
        )
        .unwrap_err();
        assert_eq!(err, ProjectionError::invalid("monthly_rate_percent", 0.0));
    }
}

//! Projection output: the monthly series and its milestones

use serde::{Deserialize, Serialize};

use super::engine::DoublingRule;
use super::milestones::{growth_percent, return_percent};
use crate::inputs::ProjectionInput;

/// One month of the projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Month number, starting at 1
    pub month: u32,

    /// Value at the end of the month, rounded to cents
    pub value: f64,
}

/// Point in the shape the chart renderer expects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: u32,
    pub y: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Inputs the result was computed from
    pub input: ProjectionInput,

    /// Rule that produced `doubling_month`
    pub rule: DoublingRule,

    /// Monthly values, month ascending from 1
    pub series: Vec<ProjectionPoint>,

    /// Month at which the investment is deemed doubled
    pub doubling_month: u32,

    /// Always exactly twice the initial investment
    pub doubling_value: f64,

    /// Monthly rate times 12
    pub annual_rate_percent: f64,

    /// Constant amount added each month
    pub monthly_return: f64,

    /// Month at which accumulated return equals the initial investment.
    /// Only the rate-proportional rule defines it.
    pub risk_free_month: Option<u32>,
}

impl ProjectionResult {
    /// Growth a series value represents, capped at 200%.
    ///
    /// Calibrated values include the principal, so growth is measured over it.
    /// Rate-proportional values are return only and are taken as a share of
    /// the investment.
    pub fn growth_percent(&self, value: f64) -> f64 {
        match self.rule {
            DoublingRule::Calibrated => growth_percent(value, self.input.initial_investment),
            DoublingRule::RateProportional => return_percent(value, self.input.initial_investment),
        }
    }

    /// Point for a given month, if the series reaches it
    pub fn point_at(&self, month: u32) -> Option<&ProjectionPoint> {
        let idx = (month as usize).checked_sub(1)?;
        self.series.get(idx)
    }

    /// Point at the doubling month, if the series reaches it
    pub fn doubling_point(&self) -> Option<&ProjectionPoint> {
        self.point_at(self.doubling_month)
    }

    /// Value of the last point
    pub fn final_value(&self) -> f64 {
        self.series.last().map(|p| p.value).unwrap_or(0.0)
    }

    /// Series as `{x, y}` pairs for the area chart
    pub fn chart_points(&self) -> Vec<ChartPoint> {
        self.series
            .iter()
            .map(|p| ChartPoint { x: p.month, y: p.value })
            .collect()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary {
            initial_investment: self.input.initial_investment,
            monthly_rate_percent: self.input.monthly_rate_percent,
            total_months: self.series.len() as u32,
            doubling_month: self.doubling_month,
            doubling_value: self.doubling_value,
            annual_rate_percent: self.annual_rate_percent,
            monthly_return: self.monthly_return,
            risk_free_month: self.risk_free_month,
            final_value: self.final_value(),
            final_growth_percent: self.growth_percent(self.final_value()),
        }
    }
}

/// Scalar fields for the stat cards and sweep output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub initial_investment: f64,
    pub monthly_rate_percent: f64,
    pub total_months: u32,
    pub doubling_month: u32,
    pub doubling_value: f64,
    pub annual_rate_percent: f64,
    pub monthly_return: f64,
    pub risk_free_month: Option<u32>,
    pub final_value: f64,
    pub final_growth_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_result() -> ProjectionResult {
        ProjectionResult {
            input: ProjectionInput::new(1_000.0, 10.0),
            rule: DoublingRule::RateProportional,
            series: (1..=3)
                .map(|m| ProjectionPoint { month: m, value: 100.0 * m as f64 })
                .collect(),
            doubling_month: 20,
            doubling_value: 2_000.0,
            annual_rate_percent: 120.0,
            monthly_return: 100.0,
            risk_free_month: Some(10),
        }
    }

    #[test]
    fn test_point_lookup() {
        let result = sample_result();
        assert_eq!(result.point_at(0), None);
        assert_eq!(result.point_at(2).map(|p| p.value), Some(200.0));
        assert_eq!(result.point_at(4), None);
        assert_eq!(result.doubling_point(), None);
    }

    #[test]
    fn test_chart_points() {
        let points = sample_result().chart_points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[2], ChartPoint { x: 3, y: 300.0 });
    }

    #[test]
    fn test_summary() {
        let summary = sample_result().summary();
        assert_eq!(summary.total_months, 3);
        assert_eq!(summary.final_value, 300.0);
        assert_eq!(summary.risk_free_month, Some(10));
        assert_relative_eq!(summary.final_growth_percent, 30.0);
    }

    #[test]
    fn test_growth_percent_follows_rule() {
        let mut result = sample_result();
        assert_relative_eq!(result.growth_percent(100.0), 10.0);
        assert_relative_eq!(result.growth_percent(2_000.0), 200.0);

        result.rule = DoublingRule::Calibrated;
        assert_relative_eq!(result.growth_percent(1_100.0), 10.0);
        assert_relative_eq!(result.growth_percent(3_000.0), 200.0);
        assert_relative_eq!(result.growth_percent(2_000.0), 100.0);
    }

    #[test]
    fn test_chart_point_json_shape() {
        let json = serde_json::to_string(&ChartPoint { x: 1, y: 42_000.0 }).unwrap();
        assert_eq!(json, r#"{"x":1,"y":42000.0}"#);
    }
}

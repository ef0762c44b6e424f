//! Display helpers for the rendering layer: axis ticks, currency, stat cards
//!
//! Nothing here feeds back into the projection. Percentages are rounded
//! only at this layer; series values arrive already rounded to cents.

use serde::Serialize;

use crate::projection::{ProjectionPoint, ProjectionResult};

/// Whole dollars with thousands separators, e.g. `$40,000`
pub fn format_currency(value: f64) -> String {
    let dollars = value.abs().round() as u64;
    let digits = dollars.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0.0 && dollars > 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Vertical axis label: thousands shown as `$Nk` (floored), smaller values as-is
pub fn format_y_axis_tick(value: f64) -> String {
    if value == 0.0 {
        "$0".to_string()
    } else if value >= 1000.0 {
        format!("${}k", (value / 1000.0).floor() as i64)
    } else {
        format!("${}", value)
    }
}

/// Horizontal axis label: whole years as `Ny`, anything else as `Nm`
pub fn format_x_axis_tick(month: u32) -> String {
    if month == 0 {
        "0m".to_string()
    } else if month % 12 == 0 {
        format!("{}y", month / 12)
    } else {
        format!("{}m", month)
    }
}

/// Yearly tick positions covering the doubling month plus one spare year
pub fn year_ticks(doubling_month: u32) -> Vec<u32> {
    let max_years = doubling_month.div_ceil(12) + 1;
    (0..=max_years).map(|year| year * 12).collect()
}

/// Annual rate with one decimal, e.g. `60.0%`
pub fn format_annual_rate(annual_rate_percent: f64) -> String {
    format!("{:.1}%", annual_rate_percent)
}

/// Growth percent with no decimals, e.g. `200%`
pub fn format_growth_percent(growth_percent: f64) -> String {
    format!("{:.0}%", growth_percent)
}

/// A summary card below the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub highlight: bool,
}

/// The four summary cards, in page order
pub fn stat_cards(result: &ProjectionResult) -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Initial Investment",
            value: format_currency(result.input.initial_investment),
            highlight: false,
        },
        StatCard {
            title: "Annual ROI",
            value: format_annual_rate(result.annual_rate_percent),
            highlight: false,
        },
        StatCard {
            title: "Growth Multiplier",
            value: format!("{:.1}x", result.doubling_value / result.input.initial_investment),
            highlight: false,
        },
        StatCard {
            title: "Time to Double",
            value: format!("{} months", result.doubling_month),
            highlight: true,
        },
    ]
}

/// Banner under the chart describing the constant monthly increment
pub fn monthly_return_banner(result: &ProjectionResult) -> String {
    format!(
        "Investment increases {}% per month ({} in monthly ROI)",
        result.input.monthly_rate_percent,
        format_currency(result.monthly_return)
    )
}

/// Banner shown while the doubling marker is highlighted
pub fn doubling_banner(result: &ProjectionResult) -> String {
    format!(
        "Your investment doubles to {} in just {} months",
        format_currency(result.doubling_value),
        result.doubling_month
    )
}

/// Hover tooltip content for one chart point
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub month: String,
    pub value: String,
    pub growth: String,
    /// Set on the doubling month's point
    pub doubled: bool,
}

pub fn tooltip(result: &ProjectionResult, point: &ProjectionPoint) -> Tooltip {
    Tooltip {
        month: format!("Month {}", point.month),
        value: format_currency(point.value),
        growth: format!("Growth: {}", format_growth_percent(result.growth_percent(point.value))),
        doubled: point.month == result.doubling_month,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::ProjectionInput;
    use crate::projection::{project, DoublingRule, GrowthProjector};

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(40_000.0), "$40,000");
        assert_eq!(format_currency(2_000.0), "$2,000");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1_234_567.5), "$1,234,568");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-1_500.0), "-$1,500");
    }

    #[test]
    fn test_y_axis_ticks() {
        assert_eq!(format_y_axis_tick(0.0), "$0");
        assert_eq!(format_y_axis_tick(500.0), "$500");
        assert_eq!(format_y_axis_tick(1_000.0), "$1k");
        assert_eq!(format_y_axis_tick(42_999.99), "$42k");
        assert_eq!(format_y_axis_tick(80_000.0), "$80k");
    }

    #[test]
    fn test_x_axis_ticks() {
        assert_eq!(format_x_axis_tick(0), "0m");
        assert_eq!(format_x_axis_tick(12), "1y");
        assert_eq!(format_x_axis_tick(36), "3y");
        assert_eq!(format_x_axis_tick(7), "7m");
        assert_eq!(format_x_axis_tick(40), "40m");
    }

    #[test]
    fn test_year_ticks() {
        assert_eq!(year_ticks(40), vec![0, 12, 24, 36, 48, 60]);
        assert_eq!(year_ticks(36), vec![0, 12, 24, 36, 48]);
        assert_eq!(year_ticks(1), vec![0, 12, 24]);
    }

    #[test]
    fn test_stat_cards_for_default_page() {
        let result = project(&ProjectionInput::default()).unwrap();
        let cards = stat_cards(&result);

        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["$40,000", "60.0%", "2.0x", "40 months"]);
        assert!(cards[3].highlight);
    }

    #[test]
    fn test_banners() {
        let result = project(&ProjectionInput::new(40_000.0, 5.0)).unwrap();
        assert_eq!(
            monthly_return_banner(&result),
            "Investment increases 5% per month ($2,000 in monthly ROI)"
        );
        assert_eq!(
            doubling_banner(&result),
            "Your investment doubles to $80,000 in just 40 months"
        );

        let result = project(&ProjectionInput::new(10_000.0, 3.5)).unwrap();
        assert_eq!(
            monthly_return_banner(&result),
            "Investment increases 3.5% per month ($350 in monthly ROI)"
        );
    }

    #[test]
    fn test_tooltip_marks_doubling_point() {
        let result = GrowthProjector::with_rule(DoublingRule::RateProportional)
            .project(&ProjectionInput::new(40_000.0, 5.0))
            .unwrap();

        let last = result.series[39];
        let tip = tooltip(&result, &last);
        assert_eq!(tip.month, "Month 40");
        assert_eq!(tip.value, "$80,000");
        assert_eq!(tip.growth, "Growth: 200%");
        assert!(tip.doubled);

        let first = tooltip(&result, &result.series[0]);
        assert_eq!(first.value, "$2,000");
        assert_eq!(first.growth, "Growth: 5%");
        assert!(!first.doubled);

        assert_eq!(tooltip(&result, &result.series[19]).growth, "Growth: 100%");
    }

    #[test]
    fn test_tooltip_growth_includes_principal_when_calibrated() {
        let result = project(&ProjectionInput::new(40_000.0, 5.0)).unwrap();
        assert_eq!(tooltip(&result, &result.series[0]).growth, "Growth: 5%");
        assert_eq!(tooltip(&result, &result.series[39]).growth, "Growth: 200%");
    }
}

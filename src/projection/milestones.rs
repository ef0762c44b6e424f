//! Doubling month rules and the derived milestones shown on the stat cards
//!
//! All rates here are monthly percentages (5.0 = 5% per month).

/// Anchor rate (percent/month) that doubles in 100 months under the calibrated rule
pub const LOW_ANCHOR_RATE: f64 = 2.0;
pub const LOW_ANCHOR_MONTHS: f64 = 100.0;

/// Anchor rate (percent/month) that doubles in 40 months under the calibrated rule
pub const HIGH_ANCHOR_RATE: f64 = 5.0;
pub const HIGH_ANCHOR_MONTHS: f64 = 40.0;

/// Rates this close to an anchor return the anchor's month count unchanged
pub const ANCHOR_TOLERANCE: f64 = 0.1;

/// Growth percent is capped here for display (a doubled investment is +200% of return)
pub const MAX_GROWTH_PERCENT: f64 = 200.0;

/// Values at or above this carry no cents in an f64, so they are stored as-is
const CENT_PRECISION_LIMIT: f64 = 1e15;

/// Months to double under the calibrated two-anchor rule.
///
/// Linear between (2%, 100) and (5%, 40), extrapolated with 50 months per
/// point below 2% and 20 months per point above 5%. Floored at 1 month:
/// the upper extrapolation drops below half a month just under 7%/month.
pub fn calibrated_doubling_month(rate: f64) -> u32 {
    whole_months(calibrated_months(rate))
}

/// Unrounded month count of the calibrated rule; may be zero or negative
/// for steep rates
pub fn calibrated_months(rate: f64) -> f64 {
    if (rate - LOW_ANCHOR_RATE).abs() < ANCHOR_TOLERANCE {
        return LOW_ANCHOR_MONTHS;
    }
    if (rate - HIGH_ANCHOR_RATE).abs() < ANCHOR_TOLERANCE {
        return HIGH_ANCHOR_MONTHS;
    }

    let span_rate = HIGH_ANCHOR_RATE - LOW_ANCHOR_RATE;
    let span_months = LOW_ANCHOR_MONTHS - HIGH_ANCHOR_MONTHS;

    if rate < LOW_ANCHOR_RATE {
        LOW_ANCHOR_MONTHS + (LOW_ANCHOR_RATE - rate) * (LOW_ANCHOR_MONTHS / LOW_ANCHOR_RATE)
    } else if rate > HIGH_ANCHOR_RATE {
        HIGH_ANCHOR_MONTHS - (rate - HIGH_ANCHOR_RATE) * (span_months / span_rate)
    } else {
        LOW_ANCHOR_MONTHS - ((rate - LOW_ANCHOR_RATE) / span_rate) * span_months
    }
}

/// Months to accumulate 200% of the investment at a constant increment: round(200 / rate)
pub fn rate_proportional_doubling_month(rate: f64) -> u32 {
    whole_months(200.0 / rate)
}

/// Months to accumulate 100% of the investment (return of capital): round(100 / rate)
pub fn risk_free_month(rate: f64) -> u32 {
    whole_months(100.0 / rate)
}

/// Simple annualised rate: monthly rate times 12, no compounding
pub fn annual_rate_percent(monthly_rate_percent: f64) -> f64 {
    monthly_rate_percent * 12.0
}

/// Growth over the initial investment as a percentage, capped at 200
pub fn growth_percent(value: f64, initial_investment: f64) -> f64 {
    (((value - initial_investment) / initial_investment) * 100.0).min(MAX_GROWTH_PERCENT)
}

/// Accumulated return as a percentage of the initial investment, capped at 200.
///
/// For series that hold return only, without the principal.
pub fn return_percent(accumulated_return: f64, initial_investment: f64) -> f64 {
    ((accumulated_return / initial_investment) * 100.0).min(MAX_GROWTH_PERCENT)
}

/// Round a currency amount to cents
pub fn round_currency(value: f64) -> f64 {
    if value.abs() >= CENT_PRECISION_LIMIT {
        return value;
    }
    (value * 100.0).round() / 100.0
}

/// Round half away from zero and floor at one month.
///
/// Values beyond `u32::MAX` saturate; callers check them against the horizon.
fn whole_months(months: f64) -> u32 {
    let rounded = months.round();
    if rounded < 1.0 {
        1
    } else {
        rounded as u32
    }
}

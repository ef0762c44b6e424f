//! Running state while a series is being generated

use super::milestones::round_currency;

/// Accumulated value at a point in the projection
#[derive(Debug, Clone)]
pub struct GrowthState {
    /// Current month (0 before the first step, then 1-indexed)
    pub month: u32,

    /// Unrounded running value
    pub value: f64,

    /// Constant amount added every month
    pub monthly_increment: f64,

    /// Stored values never exceed this (rate-proportional rule only)
    pub cap: Option<f64>,
}

impl GrowthState {
    /// Start accumulating from `opening_value`
    pub fn new(opening_value: f64, monthly_increment: f64, cap: Option<f64>) -> Self {
        Self {
            month: 0,
            value: opening_value,
            monthly_increment,
            cap,
        }
    }

    /// Advance one month by adding the constant increment
    pub fn advance_month(&mut self) {
        self.month += 1;
        self.value += self.monthly_increment;
    }

    /// Value as stored in the series: rounded to cents, then clamped to the cap
    pub fn stored_value(&self) -> f64 {
        let rounded = round_currency(self.value);
        match self.cap {
            Some(cap) => rounded.min(cap),
            None => rounded,
        }
    }

    /// Whether the stored value has reached the cap
    pub fn at_cap(&self) -> bool {
        self.cap.is_some_and(|cap| self.stored_value() >= cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_adds_increment() {
        let mut state = GrowthState::new(40_000.0, 2_000.0, None);
        state.advance_month();
        state.advance_month();

        assert_eq!(state.month, 2);
        assert_eq!(state.stored_value(), 44_000.0);
        assert!(!state.at_cap());
    }

    #[test]
    fn test_cap_clamps_stored_value() {
        let mut state = GrowthState::new(0.0, 300.0, Some(20_000.0));
        for _ in 0..66 {
            state.advance_month();
        }
        assert_eq!(state.stored_value(), 19_800.0);
        assert!(!state.at_cap());

        state.advance_month();
        assert_eq!(state.stored_value(), 20_000.0);
        assert!(state.at_cap());
    }
}

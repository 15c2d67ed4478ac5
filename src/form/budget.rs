//! Project budget slider.

/// Lowest selectable budget in euros.
pub const BUDGET_MIN: u32 = 4_000;
/// Highest selectable budget; shown with a trailing `+`.
pub const BUDGET_MAX: u32 = 100_000;
pub const BUDGET_STEP: u32 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSlider {
    value: u32,
    touched: bool,
}

impl Default for BudgetSlider {
    fn default() -> Self {
        Self {
            value: BUDGET_MIN,
            touched: false,
        }
    }
}

impl BudgetSlider {
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Whether the user has interacted with the slider at least once.
    pub fn touched(&self) -> bool {
        self.touched
    }

    /// Set the value, clamped to the bounds and snapped to the nearest step.
    /// Marks the slider as touched only if the value actually moved.
    pub fn set(&mut self, value: u32) {
        let clamped = value.clamp(BUDGET_MIN, BUDGET_MAX);
        let offset = clamped - BUDGET_MIN;
        let steps = (offset + BUDGET_STEP / 2) / BUDGET_STEP;
        let snapped = (BUDGET_MIN + steps * BUDGET_STEP).min(BUDGET_MAX);
        if snapped != self.value {
            self.value = snapped;
            self.touched = true;
        }
    }

    pub fn step_by(&mut self, steps: i64) {
        let target = i64::from(self.value) + steps * i64::from(BUDGET_STEP);
        let target = target.clamp(i64::from(BUDGET_MIN), i64::from(BUDGET_MAX));
        self.set(u32::try_from(target).unwrap_or(BUDGET_MIN));
    }

    pub fn to_min(&mut self) {
        self.set(BUDGET_MIN);
    }

    pub fn to_max(&mut self) {
        self.set(BUDGET_MAX);
    }

    pub fn percentage(&self) -> f64 {
        fill_percentage(self.value)
    }

    /// Text shown next to the slider once touched, e.g. `12500 €` or `100000+ €`.
    pub fn display_value(&self) -> Option<String> {
        self.touched.then(|| format_budget(self.value))
    }
}

/// Filled share of the slider track, in percent.
pub fn fill_percentage(value: u32) -> f64 {
    let span = f64::from(BUDGET_MAX - BUDGET_MIN);
    ((f64::from(value) - f64::from(BUDGET_MIN)) / span * 100.0).clamp(0.0, 100.0)
}

pub fn format_budget(value: u32) -> String {
    let plus = if value == BUDGET_MAX { "+" } else { "" };
    format!("{}{} €", value, plus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let slider = BudgetSlider::default();
        assert_eq!(slider.value(), 4000);
        assert!(!slider.touched());
        assert_eq!(slider.display_value(), None);
        assert_eq!(slider.percentage(), 0.0);
    }

    #[test]
    fn test_percentage_matches_formula() {
        for value in (BUDGET_MIN..=BUDGET_MAX).step_by(BUDGET_STEP as usize) {
            let expected = (f64::from(value) - 4000.0) / (100000.0 - 4000.0) * 100.0;
            assert!((fill_percentage(value) - expected).abs() < 1e-9, "value {}", value);
        }
        assert_eq!(fill_percentage(52_000), 50.0);
        assert_eq!(fill_percentage(0), 0.0);
        assert_eq!(fill_percentage(250_000), 100.0);
    }

    #[test]
    fn test_max_shows_plus() {
        let mut slider = BudgetSlider::default();
        slider.to_max();
        assert_eq!(slider.value(), 100_000);
        assert_eq!(slider.display_value().as_deref(), Some("100000+ €"));
        assert!(slider.display_value().unwrap().trim_end_matches(" €").ends_with('+'));

        slider.step_by(-1);
        assert_eq!(slider.display_value().as_deref(), Some("99500 €"));
    }

    #[test]
    fn test_stepping_clamps_and_touches() {
        let mut slider = BudgetSlider::default();
        slider.step_by(-3);
        assert_eq!(slider.value(), BUDGET_MIN);
        assert!(!slider.touched());

        slider.step_by(10);
        assert_eq!(slider.value(), 9_000);
        assert!(slider.touched());

        slider.step_by(1_000);
        assert_eq!(slider.value(), BUDGET_MAX);
    }

    #[test]
    fn test_bound_presses_leave_slider_untouched() {
        let mut slider = BudgetSlider::default();
        slider.step_by(-1);
        slider.step_by(-10);
        slider.to_min();
        slider.set(BUDGET_MIN + BUDGET_STEP / 4);
        assert!(!slider.touched());
        assert_eq!(slider.display_value(), None);

        slider.to_max();
        assert!(slider.touched());
        slider.step_by(1);
        assert_eq!(slider.value(), BUDGET_MAX);
    }

    #[test]
    fn test_set_snaps_to_step() {
        let mut slider = BudgetSlider::default();
        slider.set(4_260);
        assert_eq!(slider.value(), 4_500);
        slider.set(4_240);
        assert_eq!(slider.value(), 4_000);
        slider.set(1_000_000);
        assert_eq!(slider.value(), BUDGET_MAX);
    }
}

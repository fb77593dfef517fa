//! Closed-form summary metrics and their reconciliation with the monthly series

use super::series::SeriesEntry;
use serde::{Deserialize, Serialize};

/// Below this magnitude a monthly rate is treated as zero in the annuity formula
pub const ZERO_RATE_EPSILON: f64 = 1e-12;

/// Default relative tolerance when reconciling closed form and series
pub const DEFAULT_RECONCILE_TOLERANCE: f64 = 1e-6;

/// Aggregate metrics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    /// Annual rate after fees, as a decimal
    pub net_annual_rate: f64,

    /// Equivalent monthly rate, as a decimal (-1 for total loss)
    pub monthly_rate: f64,

    pub total_months: u32,

    /// Nominal value at the end of the horizon
    pub future_value: f64,

    /// Future value in today's money
    pub future_value_real: f64,

    /// Initial capital plus all monthly contributions
    pub total_contributed: f64,

    /// Future value minus total contributed
    pub total_growth: f64,
}

/// Inputs of the summary aggregation beyond the series itself
#[derive(Debug, Clone, Copy)]
pub struct SummaryInputs {
    pub initial_capital: f64,
    pub monthly_contribution: f64,
    pub net_annual_rate: f64,
    pub monthly_rate: f64,
    pub total_months: u32,
    pub annual_inflation: f64,
    pub years: u32,
}

/// Future value of the initial capital plus an ordinary annuity of contributions
pub fn closed_form_future_value(
    initial_capital: f64,
    monthly_contribution: f64,
    monthly_rate: f64,
    total_months: u32,
) -> f64 {
    let n = total_months as f64;
    if monthly_rate.abs() < ZERO_RATE_EPSILON {
        return initial_capital + monthly_contribution * n;
    }

    let growth = (1.0 + monthly_rate).powf(n);
    initial_capital * growth + monthly_contribution * ((growth - 1.0) / monthly_rate)
}

/// Cumulative inflation over the horizon
pub fn inflation_factor(annual_inflation: f64, years: u32) -> f64 {
    (1.0 + annual_inflation / 100.0).powf(years as f64)
}

/// Build the summary from the closed form, falling back to the series tail
/// when the closed form overflows.
pub fn summarize(inputs: &SummaryInputs, series: &[SeriesEntry]) -> ProjectionSummary {
    let mut future_value = closed_form_future_value(
        inputs.initial_capital,
        inputs.monthly_contribution,
        inputs.monthly_rate,
        inputs.total_months,
    );

    if !future_value.is_finite() {
        let fallback = series
            .last()
            .map(|e| e.total_value)
            .unwrap_or(inputs.initial_capital);
        log::warn!(
            "closed-form future value is not finite ({future_value}), using series value {fallback}"
        );
        future_value = fallback;
    }

    let total_contributed =
        inputs.initial_capital + inputs.monthly_contribution * inputs.total_months as f64;

    let factor = inflation_factor(inputs.annual_inflation, inputs.years);
    let future_value_real = if factor != 0.0 {
        future_value / factor
    } else {
        future_value
    };

    ProjectionSummary {
        net_annual_rate: inputs.net_annual_rate,
        monthly_rate: inputs.monthly_rate,
        total_months: inputs.total_months,
        future_value,
        future_value_real,
        total_contributed,
        total_growth: future_value - total_contributed,
    }
}

/// Comparison of the closed-form value with the iterated series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reconciliation {
    pub closed_form: f64,
    pub iterative: f64,
    pub abs_diff: f64,
    pub rel_diff: f64,
    pub within_tolerance: bool,
}

/// Compare the summary's future value against the last series entry.
///
/// An empty series is compared against the closed-form value itself. Relative
/// difference is measured against the larger magnitude, floored at 1.
pub fn reconcile(summary: &ProjectionSummary, series: &[SeriesEntry], tolerance: f64) -> Reconciliation {
    let closed_form = summary.future_value;
    let iterative = series.last().map(|e| e.total_value).unwrap_or(closed_form);
    let abs_diff = (closed_form - iterative).abs();
    let scale = closed_form.abs().max(iterative.abs()).max(1.0);
    let rel_diff = abs_diff / scale;

    Reconciliation {
        closed_form,
        iterative,
        abs_diff,
        rel_diff,
        within_tolerance: rel_diff <= tolerance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn inputs(monthly_rate: f64, total_months: u32) -> SummaryInputs {
        SummaryInputs {
            initial_capital: 1000.0,
            monthly_contribution: 100.0,
            net_annual_rate: 0.0,
            monthly_rate,
            total_months,
            annual_inflation: 0.0,
            years: total_months / 12,
        }
    }

    #[test]
    fn test_zero_rate_is_simple_sum() {
        assert_eq!(closed_form_future_value(1000.0, 100.0, 0.0, 24), 3400.0);
        // Below the epsilon the rate is ignored
        assert_eq!(closed_form_future_value(1000.0, 100.0, 1e-13, 24), 3400.0);
    }

    #[test]
    fn test_annuity_formula() {
        // One year at 1%/month: 1000*1.01^12 + 100*(1.01^12-1)/0.01
        let fv = closed_form_future_value(1000.0, 100.0, 0.01, 12);
        let growth = 1.01_f64.powi(12);
        assert_relative_eq!(fv, 1000.0 * growth + 100.0 * (growth - 1.0) / 0.01, max_relative = 1e-12);
        assert_relative_eq!(fv, 2395.08, epsilon = 0.01);
    }

    #[test]
    fn test_total_loss_formula() {
        assert_eq!(closed_form_future_value(1000.0, 100.0, -1.0, 12), 100.0);
        assert_eq!(closed_form_future_value(1000.0, 100.0, -1.0, 0), 1000.0);
    }

    #[test]
    fn test_non_finite_falls_back_to_series_tail() {
        let series = [SeriesEntry {
            month: 1,
            total_contributed: 1100.0,
            interest_accumulated: 1.0,
            total_value: 1101.0,
        }];
        let summary = summarize(&inputs(f64::INFINITY, 1), &series);
        assert_eq!(summary.future_value, 1101.0);
        assert_eq!(summary.total_growth, 1.0);
    }

    #[test]
    fn test_non_finite_with_empty_series_uses_initial_capital() {
        let summary = summarize(&inputs(f64::NAN, 0), &[]);
        assert_eq!(summary.future_value, 1000.0);
    }

    #[test]
    fn test_total_contributed_independent_of_rate() {
        let a = summarize(&inputs(0.0, 24), &[]);
        let b = summarize(&inputs(0.02, 24), &[]);
        assert_eq!(a.total_contributed, 3400.0);
        assert_eq!(b.total_contributed, 3400.0);
        assert!(b.total_growth > 0.0);
    }

    #[test]
    fn test_real_value_deflated() {
        let mut i = inputs(0.0, 24);
        i.annual_inflation = 2.0;
        let summary = summarize(&i, &[]);
        assert_relative_eq!(summary.future_value_real, 3400.0 / 1.0404, max_relative = 1e-12);
        assert!(summary.future_value_real < summary.future_value);
    }

    #[test]
    fn test_zero_inflation_factor_leaves_value_unchanged() {
        let mut i = inputs(0.0, 24);
        i.annual_inflation = -100.0;
        let summary = summarize(&i, &[]);
        assert_eq!(inflation_factor(-100.0, 2), 0.0);
        assert_eq!(summary.future_value_real, summary.future_value);
    }

    #[test]
    fn test_reconcile_flags_disagreement() {
        let summary = summarize(&inputs(0.0, 1), &[]);
        let series = [SeriesEntry {
            month: 1,
            total_contributed: 1100.0,
            interest_accumulated: 10.0,
            total_value: 1110.0,
        }];
        let check = reconcile(&summary, &series, DEFAULT_RECONCILE_TOLERANCE);
        assert_eq!(check.closed_form, 1100.0);
        assert_eq!(check.iterative, 1110.0);
        assert!(!check.within_tolerance);
    }

    #[test]
    fn test_reconcile_empty_series_agrees() {
        let summary = summarize(&inputs(0.01, 0), &[]);
        let check = reconcile(&summary, &[], DEFAULT_RECONCILE_TOLERANCE);
        assert!(check.within_tolerance);
        assert_eq!(check.abs_diff, 0.0);
    }
}

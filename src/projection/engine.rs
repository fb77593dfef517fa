//! Core projection engine: rates -> monthly series -> summary

use super::rates::{monthly_rate, net_annual_return};
use super::series::{Projection, SeriesEntry};
use super::state::ProjectorState;
use super::summary::{
    reconcile, summarize, Reconciliation, SummaryInputs, DEFAULT_RECONCILE_TOLERANCE,
    ZERO_RATE_EPSILON,
};
use crate::params::ProjectionParams;

/// Configuration for a projection run
#[derive(Debug, Clone, Copy)]
pub struct ProjectionConfig {
    /// Relative tolerance for the closed-form vs. series cross-check
    pub reconcile_tolerance: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            reconcile_tolerance: DEFAULT_RECONCILE_TOLERANCE,
        }
    }
}

/// Projection engine. Holds only configuration, never results, so one engine
/// can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the full projection for one parameter set
    pub fn project(&self, params: &ProjectionParams) -> Projection {
        let net_annual_rate = net_annual_return(params.gross_annual_return, params.annual_fee);
        let rate = monthly_rate(net_annual_rate);
        let total_months = params.total_months();

        log::debug!(
            "projecting {total_months} months: net annual {net_annual_rate:.6}, monthly {rate:.8}"
        );

        let series = project_series(
            params.initial_capital,
            params.monthly_contribution,
            rate,
            total_months,
        );

        let summary = summarize(
            &SummaryInputs {
                initial_capital: params.initial_capital,
                monthly_contribution: params.monthly_contribution,
                net_annual_rate,
                monthly_rate: rate,
                total_months,
                annual_inflation: params.annual_inflation,
                years: params.years,
            },
            &series,
        );

        let projection = Projection { series, summary };
        self.check(&projection);
        projection
    }

    /// Cross-check closed form against the series tail
    pub fn reconcile(&self, projection: &Projection) -> Reconciliation {
        reconcile(&projection.summary, &projection.series, self.config.reconcile_tolerance)
    }

    fn check(&self, projection: &Projection) {
        // Near-zero rates use the simple-sum branch; series drift there is expected
        if projection.summary.monthly_rate.abs() < ZERO_RATE_EPSILON {
            return;
        }
        let check = self.reconcile(projection);
        if !check.within_tolerance && check.closed_form.is_finite() && check.iterative.is_finite() {
            log::warn!(
                "closed form {:.6} and series {:.6} differ by {:.3e} (relative)",
                check.closed_form,
                check.iterative,
                check.rel_diff
            );
        }
    }
}

/// Month-by-month balances under the end-of-month contribution convention.
///
/// Returns `total_months` entries ordered from month 1; zero months gives an empty series.
pub fn project_series(
    initial_capital: f64,
    monthly_contribution: f64,
    monthly_rate: f64,
    total_months: u32,
) -> Vec<SeriesEntry> {
    let mut state = ProjectorState::opening(initial_capital);
    let mut series = Vec::with_capacity(total_months as usize);

    for _month in 1..=total_months {
        state.advance_month(monthly_rate, monthly_contribution);
        series.push(state.entry());
    }

    series
}

/// Project with the default configuration
pub fn project(params: &ProjectionParams) -> Projection {
    ProjectionEngine::default().project(params)
}

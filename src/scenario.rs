//! Scenario runner for batches of projections
//!
//! The engine is stateless, so batches fan out across threads with no
//! coordination beyond collecting the results in input order.

use crate::params::ProjectionParams;
use crate::projection::{Projection, ProjectionConfig, ProjectionEngine};
use rayon::prelude::*;

/// Runs many parameter sets through one engine configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let results = runner.fee_sweep(&params, &[0.1, 0.5, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the default engine configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Run a single projection
    pub fn run(&self, params: &ProjectionParams) -> Projection {
        self.engine.project(params)
    }

    /// Run projections for many parameter sets in parallel, preserving order
    pub fn run_batch(&self, sets: &[ProjectionParams]) -> Vec<Projection> {
        log::debug!("running batch of {} projections", sets.len());
        sets.par_iter().map(|params| self.engine.project(params)).collect()
    }

    /// Re-run one parameter set across several fee levels
    pub fn fee_sweep(&self, base: &ProjectionParams, fees: &[f64]) -> Vec<(f64, Projection)> {
        fees.par_iter()
            .map(|&fee| (fee, self.engine.project(&base.with_fee(fee))))
            .collect()
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ProjectionParams {
        ProjectionParams::new(10_000.0, 200.0, 7.0, 0.2, 2.0, 30)
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let runner = ScenarioRunner::new();
        let sets: Vec<_> = (1..=10)
            .map(|years| ProjectionParams { years, ..base() })
            .collect();

        let results = runner.run_batch(&sets);
        assert_eq!(results.len(), 10);
        for (params, result) in sets.iter().zip(&results) {
            assert_eq!(result.summary.total_months, params.years * 12);
            assert_eq!(result.summary, runner.run(params).summary);
        }
    }

    #[test]
    fn test_fee_sweep_monotonic() {
        let runner = ScenarioRunner::new();
        let results = runner.fee_sweep(&base(), &[0.0, 0.5, 1.0, 2.0]);
        assert_eq!(results.len(), 4);
        assert_eq!(results[2].0, 1.0);
        for pair in results.windows(2) {
            assert!(pair[0].1.summary.future_value > pair[1].1.summary.future_value);
        }
    }

    #[test]
    fn test_empty_batch() {
        assert!(ScenarioRunner::new().run_batch(&[]).is_empty());
    }
}

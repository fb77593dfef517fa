//! Projection input structures: raw form values and validated parameters

use serde::{Deserialize, Serialize};

/// Highest projection horizon accepted by validation, in years
pub const MAX_YEARS: u32 = 50;

/// Lowest projection horizon accepted by validation, in years
pub const MIN_YEARS: u32 = 1;

/// Unvalidated input values as entered by a user or read from saved state.
///
/// Rates are percentages (5.0 = 5%). `years` is kept as a float so that
/// fractional or out-of-range entries can be reported instead of silently truncated.
/// Missing keys deserialize to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawParams {
    pub initial_capital: f64,
    pub monthly_contribution: f64,
    pub gross_annual_return: f64,
    pub annual_fee: f64,
    pub annual_inflation: f64,
    pub years: f64,
}

impl Default for RawParams {
    fn default() -> Self {
        Self {
            initial_capital: 10_000.0,
            monthly_contribution: 200.0,
            gross_annual_return: 7.0,
            annual_fee: 0.2,
            annual_inflation: 2.0,
            years: 20.0,
        }
    }
}

/// Validated projection inputs consumed by the engine.
///
/// The engine does not re-check ranges; construct through [`crate::params::validate`]
/// when values come from outside the program.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParams {
    /// Starting balance, also the first amount counted as contributed
    pub initial_capital: f64,

    /// Amount added at the end of every month
    pub monthly_contribution: f64,

    /// Gross annual return in percent (may be negative)
    pub gross_annual_return: f64,

    /// Annual fee (TER) in percent
    pub annual_fee: f64,

    /// Annual inflation in percent, used only for the real value
    pub annual_inflation: f64,

    /// Projection horizon in whole years
    pub years: u32,
}

impl ProjectionParams {
    pub fn new(
        initial_capital: f64,
        monthly_contribution: f64,
        gross_annual_return: f64,
        annual_fee: f64,
        annual_inflation: f64,
        years: u32,
    ) -> Self {
        Self {
            initial_capital,
            monthly_contribution,
            gross_annual_return,
            annual_fee,
            annual_inflation,
            years,
        }
    }

    /// Number of monthly periods covered by the projection
    pub fn total_months(&self) -> u32 {
        (self.years as f64 * 12.0).round() as u32
    }

    /// Convert back to raw values (for saving)
    pub fn raw(&self) -> RawParams {
        RawParams {
            initial_capital: self.initial_capital,
            monthly_contribution: self.monthly_contribution,
            gross_annual_return: self.gross_annual_return,
            annual_fee: self.annual_fee,
            annual_inflation: self.annual_inflation,
            years: self.years as f64,
        }
    }

    /// Same parameters with a different fee
    pub fn with_fee(&self, annual_fee: f64) -> Self {
        Self { annual_fee, ..*self }
    }
}

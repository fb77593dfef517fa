//! Portfolio Projection - Monthly compounding engine for investment portfolios
//!
//! This library provides:
//! - Rate conversion from gross annual return and TER to a net monthly rate
//! - Month-by-month projection of contributions and growth
//! - Closed-form summary metrics (nominal, inflation-adjusted) cross-checked against the series
//! - Parameter validation, saved state, CSV export, paginated tables and chart data
//! - Parallel scenario runs over many parameter sets

pub mod error;
pub mod params;
pub mod projection;
pub mod report;
pub mod scenario;
pub mod state;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use params::{validate, ProjectionParams, RawParams, ValidationErrors};
pub use projection::{project, Projection, ProjectionSummary, SeriesEntry};
pub use scenario::ScenarioRunner;
pub use state::{SavedState, StateStore, Theme};

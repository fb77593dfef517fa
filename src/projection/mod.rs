//! Projection engine: rate conversion, monthly series, and summary metrics

mod state;
mod engine;
mod series;
pub mod rates;
pub mod summary;

pub use state::ProjectorState;
pub use engine::{project, project_series, ProjectionConfig, ProjectionEngine};
pub use series::{Projection, SeriesEntry};
pub use rates::{monthly_rate, net_annual_return};
pub use summary::{reconcile, ProjectionSummary, Reconciliation};

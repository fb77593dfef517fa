//! Projection inputs: raw values, validation, and batch loading

mod data;
mod validate;
pub mod loader;

pub use data::{ProjectionParams, RawParams, MAX_YEARS, MIN_YEARS};
pub use validate::{validate, FieldError, ValidationErrors};
pub use loader::{load_param_sets, load_param_sets_from_reader};

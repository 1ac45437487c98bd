//! Weight Logs Shared Library
//!
//! This crate contains the wire models, unit handling and form state used by
//! the weight log client and any UI host that renders it.

pub mod errors;
pub mod form;
pub mod models;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use form::{FormField, FormState};
pub use models::{NewWeightLog, WeightLogEntry};
pub use types::*;
pub use units::WeightUnit;

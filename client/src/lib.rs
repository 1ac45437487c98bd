//! Weight Logs Client Library
//!
//! A headless weight log form: it keeps the list of entries and the form a UI
//! would render, and talks to the weight log service over HTTP.
//!
//! ## Layout
//!
//! - `api`: the service contract and its reqwest implementation
//! - `component`: form and list state, fetch and submit operations
//! - `config`: layered configuration
//! - `error`: the client error type

pub mod api;
pub mod component;
pub mod config;
pub mod error;

pub use api::{HttpWeightLogApi, WeightLogApi};
pub use component::WeightLogsComponent;
pub use error::{ClientError, ClientResult};

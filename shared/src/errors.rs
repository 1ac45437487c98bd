//! Error types shared by the weight log form and its hosts

use thiserror::Error;

/// Errors raised while turning form input into a request body
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("{label}: '{value}' is not a number")]
    InvalidNumber { label: &'static str, value: String },

    #[error("{label}: must be a finite number")]
    NotFinite { label: &'static str },

    #[error("{label}: a value is required")]
    Missing { label: &'static str },
}

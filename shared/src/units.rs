//! Weight unit handling
//!
//! The service stores the unit as free text next to each entry. The client
//! never rewrites it: whatever the user typed is sent, and whatever the
//! service returns is shown.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit used when the user has not picked one
pub const DEFAULT_WEIGHT_UNIT: &str = "KG";

/// Unit attached to a weight log entry, kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightUnit(String);

impl WeightUnit {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn kg() -> Self {
        Self::new(DEFAULT_WEIGHT_UNIT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WeightUnit {
    fn default() -> Self {
        Self::kg()
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for WeightUnit {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for WeightUnit {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<WeightUnit> for String {
    fn from(unit: WeightUnit) -> Self {
        unit.0
    }
}

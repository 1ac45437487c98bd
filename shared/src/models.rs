//! Wire models for the weight log service

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::units::WeightUnit;

/// A weight log entry as returned by the service
///
/// The client only ever holds a read-only copy for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightLogEntry {
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub weight: f64,
    #[serde(default)]
    pub target_weight: Option<f64>,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub unit: WeightUnit,
}

impl WeightLogEntry {
    /// Distance still to go to the target, in the entry's own unit
    pub fn remaining_to_target(&self) -> Option<f64> {
        self.target_weight.map(|target| self.weight - target)
    }
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWeightLog {
    pub weight: f64,
    pub target_weight: Option<f64>,
    pub timestamp: String,
    pub unit: WeightUnit,
}

impl NewWeightLog {
    /// Build a create body stamped with the given instant
    pub fn new(
        weight: f64,
        target_weight: Option<f64>,
        unit: WeightUnit,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            weight,
            target_weight,
            timestamp: iso_timestamp(recorded_at),
            unit,
        }
    }
}

/// Format an instant the way browsers do for `Date#toISOString`
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The service sends ids as strings in lists and as numbers elsewhere
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    }))
}

//! API request and response types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `{ "data": ... }` wrapper used by every service response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Optional filters for listing weight logs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightLogQuery {
    /// Restrict the list to a single calendar day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl WeightLogQuery {
    pub fn on(date: NaiveDate) -> Self {
        Self { date: Some(date) }
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none()
    }
}

/// Identity used to address and authenticate requests
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub token: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            token: token.into(),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

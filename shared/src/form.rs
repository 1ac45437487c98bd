//! Weight log form state
//!
//! The form is a single immutable value. Every edit produces a new
//! `FormState`; nothing is mutated in place, so a host can compare snapshots
//! and the reset-after-submit rule is a single method.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::errors::FormError;
use crate::models::NewWeightLog;
use crate::types::Session;
use crate::units::WeightUnit;
use crate::validation::{parse_optional_number, parse_required_number};

/// Editable fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Weight,
    TargetWeight,
    Unit,
    UserId,
    Token,
}

/// Snapshot of the five form fields
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub weight: String,
    pub target_weight: String,
    pub unit: WeightUnit,
    pub user_id: String,
    pub token: String,
}

impl FormState {
    /// Empty form addressed to the given session
    pub fn for_session(session: Session) -> Self {
        Self {
            user_id: session.user_id,
            token: session.token,
            ..Self::default()
        }
    }

    /// Return a copy with one field replaced
    pub fn with(self, field: FormField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            FormField::Weight => Self { weight: value, ..self },
            FormField::TargetWeight => Self {
                target_weight: value,
                ..self
            },
            FormField::Unit => Self {
                unit: WeightUnit::from(value),
                ..self
            },
            FormField::UserId => Self {
                user_id: value,
                ..self
            },
            FormField::Token => Self { token: value, ..self },
        }
    }

    pub fn with_weight(self, value: impl Into<String>) -> Self {
        self.with(FormField::Weight, value)
    }

    pub fn with_target_weight(self, value: impl Into<String>) -> Self {
        self.with(FormField::TargetWeight, value)
    }

    pub fn with_unit(self, unit: WeightUnit) -> Self {
        Self { unit, ..self }
    }

    /// Clear the entry fields after a successful submission
    ///
    /// The session fields are left alone.
    pub fn cleared_entry(&self) -> Self {
        Self {
            weight: String::new(),
            target_weight: String::new(),
            unit: WeightUnit::default(),
            user_id: self.user_id.clone(),
            token: self.token.clone(),
        }
    }

    pub fn session(&self) -> Session {
        Session::new(self.user_id.clone(), self.token.clone())
    }

    /// Build the create body, stamping it with `now`
    pub fn to_new_log(&self, now: DateTime<Utc>) -> Result<NewWeightLog, FormError> {
        let weight = parse_required_number(FormField::Weight, &self.weight)?;
        let target_weight = parse_optional_number(FormField::TargetWeight, &self.target_weight)?;
        Ok(NewWeightLog::new(weight, target_weight, self.unit.clone(), now))
    }
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("weight", &self.weight)
            .field("target_weight", &self.target_weight)
            .field("unit", &self.unit)
            .field("user_id", &self.user_id)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

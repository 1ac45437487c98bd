//! Input validation for the weight log form
//!
//! Numeric fields arrive as free text. They are parsed at submission time,
//! never while the user is typing.

use crate::errors::FormError;
use crate::form::FormField;

/// Map a form field to the label shown next to it
pub fn field_display_label(field: FormField) -> &'static str {
    match field {
        FormField::Weight => "Weight",
        FormField::TargetWeight => "Target Weight",
        FormField::Unit => "Unit",
        FormField::UserId => "User ID",
        FormField::Token => "Token",
    }
}

/// Parse a required numeric field
pub fn parse_required_number(field: FormField, raw: &str) -> Result<f64, FormError> {
    parse_optional_number(field, raw)?.ok_or(FormError::Missing {
        label: field_display_label(field),
    })
}

/// Parse an optional numeric field; blank input means "not given"
pub fn parse_optional_number(field: FormField, raw: &str) -> Result<Option<f64>, FormError> {
    let label = field_display_label(field);
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: f64 = trimmed.parse().map_err(|_| FormError::InvalidNumber {
        label,
        value: raw.to_string(),
    })?;

    if value.is_nan() || value.is_infinite() {
        return Err(FormError::NotFinite { label });
    }
    Ok(Some(value))
}

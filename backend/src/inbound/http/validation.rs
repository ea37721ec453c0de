//! Shared validation helpers for inbound HTTP adapters.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::json;

use crate::domain::{Error, PhotoFilename};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidTimestamp,
    InvalidInteger,
    InvalidFilename,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidTimestamp => "invalid_timestamp",
            ErrorCode::InvalidInteger => "invalid_integer",
            ErrorCode::InvalidFilename => "invalid_filename",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) const fn as_str(self) -> &'static str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_timestamp_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be an RFC 3339 timestamp"))
        .with_value(ErrorCode::InvalidTimestamp, value)
}

pub(crate) fn invalid_integer_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be an integer"))
        .with_value(ErrorCode::InvalidInteger, value)
}

pub(crate) fn invalid_filename_error(field: FieldName, value: &str, reason: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} has an unusable filename: {reason}"))
        .with_value(ErrorCode::InvalidFilename, value)
}

/// Parse an RFC 3339 timestamp, reading one without an offset as UTC.
pub(crate) fn parse_timestamp(value: &str, field: FieldName) -> Result<DateTime<Utc>, Error> {
    let trimmed = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| invalid_timestamp_error(field, value))
}

pub(crate) fn parse_integer(value: &str, field: FieldName) -> Result<i64, Error> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| invalid_integer_error(field, value))
}

pub(crate) fn parse_filename(value: &str, field: FieldName) -> Result<PhotoFilename, Error> {
    PhotoFilename::new(value).map_err(|err| invalid_filename_error(field, value, &err.to_string()))
}

//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper yields an `invalid_request` error whose `details` name the
//! offending field and a stable machine-readable code.

use serde_json::json;

use crate::domain::{Error, UserValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    EmptyValue,
    TooLong,
    InvalidEmail,
    InvalidBody,
    InvalidPath,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::EmptyValue => "empty_value",
            Self::TooLong => "too_long",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidBody => "invalid_body",
            Self::InvalidPath => "invalid_path",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

const NAME: FieldName = FieldName::new("name");
const EMAIL: FieldName = FieldName::new("email");

pub(crate) fn field_error(field: FieldName, code: ValidationCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

/// Map a user value rejection to a field-scoped client error.
pub(crate) fn map_user_validation_error(err: UserValidationError) -> Error {
    let message = err.to_string();
    match err {
        UserValidationError::EmptyName => field_error(NAME, ValidationCode::EmptyValue, message),
        UserValidationError::NameTooLong { .. } => {
            field_error(NAME, ValidationCode::TooLong, message)
        }
        UserValidationError::EmptyEmail => field_error(EMAIL, ValidationCode::EmptyValue, message),
        UserValidationError::EmailTooLong { .. } => {
            field_error(EMAIL, ValidationCode::TooLong, message)
        }
        UserValidationError::InvalidEmail => {
            field_error(EMAIL, ValidationCode::InvalidEmail, message)
        }
    }
}

/// Error for a request body that could not be decoded into the expected shape.
pub(crate) fn invalid_body_error(reason: &str) -> Error {
    Error::invalid_request("request body is invalid").with_details(json!({
        "code": ValidationCode::InvalidBody.as_str(),
        "reason": reason,
    }))
}

/// Error for a path segment that could not be parsed.
pub(crate) fn invalid_path_error(reason: &str) -> Error {
    Error::invalid_request("request path is invalid").with_details(json!({
        "code": ValidationCode::InvalidPath.as_str(),
        "reason": reason,
    }))
}

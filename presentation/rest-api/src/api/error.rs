use std::collections::BTreeMap;

use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    /// Human readable explanation, suitable for a notification
    #[oai(skip_serializing_if_is_none)]
    pub detail: Option<String>,
}

/// Rejected form submission, keyed by form field.
#[derive(Object, Debug)]
pub struct ValidationErrorResponse {
    pub name: String,
    pub message: String,
    pub fields: BTreeMap<String, String>,
}

impl From<ErrorResponse> for ValidationErrorResponse {
    fn from(error: ErrorResponse) -> Self {
        Self {
            name: error.name,
            message: error.message,
            fields: BTreeMap::new(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::CollaboratorError;
use business::domain::item::errors::ItemError;
use business::domain::item::validation::FieldErrors;

use crate::api::error::{ErrorResponse, IntoErrorResponse, ValidationErrorResponse};

impl IntoErrorResponse for ItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ItemError::Validation(_) | ItemError::MissingOwner => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            ItemError::NotFound | ItemError::Collaborator(CollaboratorError::NotFound) => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            ItemError::Encoding(_) => (StatusCode::UNPROCESSABLE_ENTITY, "EncodingError"),
            ItemError::Collaborator(
                CollaboratorError::Unavailable(_) | CollaboratorError::Rejected(_),
            ) => (StatusCode::BAD_GATEWAY, "CollaboratorError"),
            ItemError::Collaborator(CollaboratorError::InvalidData(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
                detail: Some(self.user_message()),
            }),
        )
    }
}

pub fn validation_error_response(errors: &FieldErrors) -> Json<ValidationErrorResponse> {
    Json(ValidationErrorResponse {
        name: "ValidationError".to_string(),
        message: "item.validation_failed".to_string(),
        fields: errors
            .iter()
            .map(|(field, message)| (field.as_str().to_string(), message.to_string()))
            .collect(),
    })
}

use crate::domain::errors::CollaboratorError;

use super::validation::FieldErrors;

/// The image source could not be turned into (or back from) a data URL.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("image.unreadable")]
    Unreadable(#[source] std::io::Error),
    #[error("image.unsupported_format")]
    UnsupportedFormat(String),
    #[error("image.empty")]
    Empty,
    #[error("image.malformed")]
    Malformed,
    #[error("image.foreign_url")]
    ForeignUrl,
}

impl EncodingError {
    pub fn user_message(&self) -> String {
        match self {
            EncodingError::Unreadable(source) => format!("The image could not be read: {source}"),
            EncodingError::UnsupportedFormat(format) => {
                format!("Unsupported image format '{format}', use .webp, .jpg, .jpeg or .png")
            }
            EncodingError::Empty => "The image file is empty".to_string(),
            EncodingError::Malformed => "The image data is corrupted".to_string(),
            EncodingError::ForeignUrl => {
                "The image must be uploaded, links to other sites are not accepted".to_string()
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.validation_failed")]
    Validation(FieldErrors),
    #[error("item.not_found")]
    NotFound,
    #[error("item.missing_owner")]
    MissingOwner,
    #[error("item.encoding_failed")]
    Encoding(#[from] EncodingError),
    #[error("item.collaborator_failed")]
    Collaborator(#[from] CollaboratorError),
}

impl ItemError {
    /// Single notification text for a failed operation.
    pub fn user_message(&self) -> String {
        match self {
            ItemError::Validation(errors) => format!(
                "Please review the highlighted fields: {}",
                errors.field_names().join(", ")
            ),
            ItemError::NotFound => "Item not found".to_string(),
            ItemError::MissingOwner => "You must be signed in to manage items".to_string(),
            ItemError::Encoding(error) => error.user_message(),
            ItemError::Collaborator(error) => error.user_message(),
        }
    }
}

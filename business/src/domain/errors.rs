/// Failures reported by an external collaborator (persistence store or
/// binary-object storage).
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CollaboratorError {
    #[error("collaborator.not_found")]
    NotFound,
    #[error("collaborator.unavailable")]
    Unavailable(String),
    #[error("collaborator.rejected")]
    Rejected(String),
    #[error("collaborator.invalid_data")]
    InvalidData(String),
}

impl CollaboratorError {
    pub fn not_found() -> Self {
        CollaboratorError::NotFound
    }
    pub fn unavailable(reason: impl Into<String>) -> Self {
        CollaboratorError::Unavailable(reason.into())
    }
    pub fn rejected(reason: impl Into<String>) -> Self {
        CollaboratorError::Rejected(reason.into())
    }
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        CollaboratorError::InvalidData(reason.into())
    }

    /// Message shown to the user when the collaborator turns an operation down.
    pub fn user_message(&self) -> String {
        match self {
            CollaboratorError::NotFound => "The requested item no longer exists".to_string(),
            CollaboratorError::Unavailable(reason)
            | CollaboratorError::Rejected(reason)
            | CollaboratorError::InvalidData(reason) => reason.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_code_style_display() {
        assert_eq!(
            CollaboratorError::rejected("quota exceeded").to_string(),
            "collaborator.rejected"
        );
        assert_eq!(CollaboratorError::not_found().to_string(), "collaborator.not_found");
    }

    #[test]
    fn should_surface_collaborator_reason_as_user_message() {
        let error = CollaboratorError::unavailable("connection reset by peer");

        assert_eq!(error.user_message(), "connection reset by peer");
    }
}

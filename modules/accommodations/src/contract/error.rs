use thiserror::Error;

use crate::domain::error::DomainError;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccommodationsError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: i32 },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error")]
    Internal,
}

impl AccommodationsError {
    pub fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound { resource, id }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}

impl From<DomainError> for AccommodationsError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::AccommodationNotFound { id } => Self::not_found("Accommodation", id),
            DomainError::UserNotFound { id } => Self::not_found("User", id),
            DomainError::CategoryNotFound { id } => Self::not_found("Category", id),
            e @ (DomainError::DuplicatedAccommodation { .. }
            | DomainError::DuplicatedUser { .. }) => Self::conflict(e.to_string()),
            e @ DomainError::AuthenticationFail { .. } => Self::permission_denied(e.to_string()),
            DomainError::IllegalArgument { message } => Self::validation(message),
            DomainError::Database { .. } => Self::internal(),
        }
    }
}

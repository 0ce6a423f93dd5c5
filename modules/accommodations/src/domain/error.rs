use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Accommodation not found: {id}")]
    AccommodationNotFound { id: i32 },

    #[error("User not found: {id}")]
    UserNotFound { id: i32 },

    #[error("Category not found: {id}")]
    CategoryNotFound { id: i32 },

    #[error("Accommodation named '{name}' already exists")]
    DuplicatedAccommodation { name: String },

    #[error("User with email '{email}' already exists")]
    DuplicatedUser { email: String },

    #[error("User {caller} has no permission to act for user {owner}")]
    AuthenticationFail { caller: i32, owner: i32 },

    #[error("Illegal argument: {message}")]
    IllegalArgument { message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn accommodation_not_found(id: i32) -> Self {
        Self::AccommodationNotFound { id }
    }

    pub fn user_not_found(id: i32) -> Self {
        Self::UserNotFound { id }
    }

    pub fn category_not_found(id: i32) -> Self {
        Self::CategoryNotFound { id }
    }

    pub fn duplicated_accommodation(name: impl Into<String>) -> Self {
        Self::DuplicatedAccommodation { name: name.into() }
    }

    pub fn duplicated_user(email: impl Into<String>) -> Self {
        Self::DuplicatedUser {
            email: email.into(),
        }
    }

    pub fn authentication_fail(caller: i32, owner: i32) -> Self {
        Self::AuthenticationFail { caller, owner }
    }

    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument {
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::contract::model::{NewUser, User};
use crate::domain::error::DomainError;
use crate::domain::repo::{RepoError, UsersRepository};

/// Registration and lookup of the users that own accommodations.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UsersRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UsersRepository>) -> Self {
        Self { repo }
    }

    #[instrument(name = "accommodations.users.register_user", skip(self, new), fields(email = %new.email))]
    pub async fn register_user(&self, new: NewUser) -> Result<User, DomainError> {
        info!("Registering user");

        if self
            .repo
            .find_by_email(&new.email)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .is_some()
        {
            return Err(DomainError::duplicated_user(new.email));
        }

        let email = new.email.clone();
        let user = self.repo.insert(new, Utc::now()).await.map_err(|e| match e {
            RepoError::UniqueViolation(_) => DomainError::duplicated_user(email),
            RepoError::Other(e) => DomainError::database(e.to_string()),
        })?;

        info!(user_id = user.id, "Successfully registered user");
        Ok(user)
    }

    #[instrument(name = "accommodations.users.get_user", skip(self), fields(user_id = id))]
    pub async fn get_user(&self, id: i32) -> Result<User, DomainError> {
        debug!("Getting user by id");
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::user_not_found(id))
    }
}

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::contract::model::{Category, NewCategory};
use crate::domain::error::DomainError;
use crate::domain::repo::{CategoriesRepository, RepoError};

/// Lookup categories referenced by accommodations.
#[derive(Clone)]
pub struct CategoryService {
    repo: Arc<dyn CategoriesRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoriesRepository>) -> Self {
        Self { repo }
    }

    #[instrument(name = "accommodations.categories.create_category", skip(self, new), fields(name = %new.name))]
    pub async fn create_category(&self, new: NewCategory) -> Result<Category, DomainError> {
        info!("Creating category");

        let taken = format!("category '{}' already exists", new.name);

        if self
            .repo
            .find_by_name(&new.name)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .is_some()
        {
            return Err(DomainError::illegal_argument(taken));
        }

        self.repo.insert(new).await.map_err(|e| match e {
            RepoError::UniqueViolation(_) => DomainError::illegal_argument(taken),
            RepoError::Other(e) => DomainError::database(e.to_string()),
        })
    }

    /// Create every named category that does not exist yet.
    #[instrument(name = "accommodations.categories.ensure_categories", skip_all)]
    pub async fn ensure_categories(&self, names: &[String]) -> Result<Vec<Category>, DomainError> {
        let mut created = Vec::new();
        for name in names {
            let existing = self
                .repo
                .find_by_name(name)
                .await
                .map_err(|e| DomainError::database(e.to_string()))?;
            if existing.is_none() {
                created.push(self.create_category(NewCategory { name: name.clone() }).await?);
            }
        }
        debug!("Seeded {} categories", created.len());
        Ok(created)
    }

    #[instrument(name = "accommodations.categories.list_categories", skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, DomainError> {
        self.repo
            .find_all()
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    #[instrument(name = "accommodations.categories.get_category", skip(self), fields(category_id = id))]
    pub async fn get_category(&self, id: i32) -> Result<Category, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::category_not_found(id))
    }
}

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use crate::contract::model::{Accommodation, AccommodationPatch, AuthUser, NewAccommodation};
use crate::domain::error::DomainError;
use crate::domain::permission::verify_permission;
use crate::domain::repo::{
    AccommodationDraft, AccommodationsRepository, CategoriesRepository, RepoError,
    UsersRepository,
};

/// Domain service with the business rules for accommodation listings.
/// Depends only on repository ports, not on infra types.
#[derive(Clone)]
pub struct AccommodationService {
    accommodations: Arc<dyn AccommodationsRepository>,
    users: Arc<dyn UsersRepository>,
    categories: Arc<dyn CategoriesRepository>,
}

fn db_error(e: impl std::fmt::Display) -> DomainError {
    DomainError::database(e.to_string())
}

/// A unique-index violation on write means another listing holds the name.
fn write_error(e: RepoError, name: &str) -> DomainError {
    match e {
        RepoError::UniqueViolation(detail) => {
            warn!(%detail, "Name uniqueness enforced by the store");
            DomainError::duplicated_accommodation(name)
        }
        RepoError::Other(e) => db_error(e),
    }
}

impl AccommodationService {
    pub fn new(
        accommodations: Arc<dyn AccommodationsRepository>,
        users: Arc<dyn UsersRepository>,
        categories: Arc<dyn CategoriesRepository>,
    ) -> Self {
        Self {
            accommodations,
            users,
            categories,
        }
    }

    #[instrument(
        name = "accommodations.service.create_accommodation",
        skip(self, new),
        fields(caller_id = caller.id, name = %new.name)
    )]
    pub async fn create_accommodation(
        &self,
        new: NewAccommodation,
        caller: &AuthUser,
    ) -> Result<Accommodation, DomainError> {
        info!("Creating accommodation");

        let owner = self
            .users
            .find_by_id(caller.id)
            .await
            .map_err(db_error)?
            .ok_or_else(|| DomainError::user_not_found(caller.id))?;
        verify_permission(caller, owner.id)?;

        if self
            .categories
            .find_by_id(new.category_id)
            .await
            .map_err(db_error)?
            .is_none()
        {
            return Err(DomainError::illegal_argument(format!(
                "category {} does not exist",
                new.category_id
            )));
        }

        self.ensure_name_available(&new.name, None).await?;

        let name = new.name.clone();
        let draft = AccommodationDraft::new(owner.id, new, Utc::now());
        let stored = self
            .accommodations
            .insert(draft)
            .await
            .map_err(|e| write_error(e, &name))?;

        info!(
            accommodation_id = stored.id,
            kind = stored.accommodation_type.as_str(),
            "Successfully created accommodation"
        );
        Ok(stored)
    }

    #[instrument(
        name = "accommodations.service.update_accommodation",
        skip(self, patch),
        fields(accommodation_id = id, caller_id = caller.id)
    )]
    pub async fn update_accommodation(
        &self,
        id: i32,
        patch: AccommodationPatch,
        caller: &AuthUser,
    ) -> Result<Accommodation, DomainError> {
        info!("Updating accommodation");

        let mut current = self.load(id).await?;
        verify_permission(caller, current.owner_id)?;

        if let Some(ref new_name) = patch.name {
            if new_name != &current.name {
                self.ensure_name_available(new_name, Some(id)).await?;
            }
        }

        if let Some(name) = patch.name {
            current.name = name;
        }
        if let Some(phone_number) = patch.phone_number {
            current.phone_number = phone_number;
        }
        if let Some(city) = patch.city {
            current.city = city;
        }
        if let Some(accommodation_type) = patch.accommodation_type {
            current.accommodation_type = accommodation_type;
        }
        if let Some(information) = patch.information {
            current.information = information;
        }
        current.updated_at = Utc::now();

        let name = current.name.clone();
        let updated = self
            .accommodations
            .update(current)
            .await
            .map_err(|e| write_error(e, &name))?
            // Removed by someone else between the load and the update
            .ok_or_else(|| DomainError::accommodation_not_found(id))?;

        info!("Successfully updated accommodation");
        Ok(updated)
    }

    #[instrument(
        name = "accommodations.service.delete_accommodation",
        skip(self),
        fields(accommodation_id = id, caller_id = caller.id)
    )]
    pub async fn delete_accommodation(&self, id: i32, caller: &AuthUser) -> Result<i32, DomainError> {
        info!("Deleting accommodation");

        let current = self.load(id).await?;
        verify_permission(caller, current.owner_id)?;

        let deleted = self.accommodations.delete(id).await.map_err(db_error)?;
        if !deleted {
            // Removed by someone else between the load and the delete
            return Err(DomainError::accommodation_not_found(id));
        }

        info!("Successfully deleted accommodation");
        Ok(id)
    }

    #[instrument(
        name = "accommodations.service.get_accommodation",
        skip(self),
        fields(accommodation_id = id)
    )]
    pub async fn get_accommodation(&self, id: i32) -> Result<Accommodation, DomainError> {
        debug!("Getting accommodation by id");
        self.load(id).await
    }

    #[instrument(name = "accommodations.service.list_accommodations", skip(self))]
    pub async fn list_accommodations(&self) -> Result<Vec<Accommodation>, DomainError> {
        let all = self.accommodations.find_all().await.map_err(db_error)?;
        debug!("Listed {} accommodations", all.len());
        Ok(all)
    }

    #[instrument(
        name = "accommodations.service.list_accommodations_by_category",
        skip(self)
    )]
    pub async fn list_accommodations_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<Accommodation>, DomainError> {
        let found = self
            .accommodations
            .find_by_category_id(category_id)
            .await
            .map_err(db_error)?;
        debug!("Listed {} accommodations in category", found.len());
        Ok(found)
    }

    // --- helpers ---

    async fn load(&self, id: i32) -> Result<Accommodation, DomainError> {
        self.accommodations
            .find_by_id(id)
            .await
            .map_err(db_error)?
            .ok_or_else(|| DomainError::accommodation_not_found(id))
    }

    /// Early exit for taken names; the unique index stays authoritative.
    async fn ensure_name_available(
        &self,
        name: &str,
        except_id: Option<i32>,
    ) -> Result<(), DomainError> {
        match self
            .accommodations
            .find_by_name(name)
            .await
            .map_err(db_error)?
        {
            Some(existing) if Some(existing.id) != except_id => {
                Err(DomainError::duplicated_accommodation(name))
            }
            _ => Ok(()),
        }
    }
}

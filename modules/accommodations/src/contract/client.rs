use async_trait::async_trait;

use crate::contract::{
    error::AccommodationsError,
    model::{
        Accommodation, AccommodationPatch, AuthUser, Category, NewAccommodation, NewCategory,
        NewUser, User,
    },
};

/// Public API trait for the accommodations module that other modules can use
#[async_trait]
pub trait AccommodationsApi: Send + Sync {
    /// Register an accommodation owned by the caller
    async fn create_accommodation(
        &self,
        new: NewAccommodation,
        caller: AuthUser,
    ) -> Result<Accommodation, AccommodationsError>;

    /// Update an accommodation; only its owner may do this
    async fn update_accommodation(
        &self,
        id: i32,
        patch: AccommodationPatch,
        caller: AuthUser,
    ) -> Result<Accommodation, AccommodationsError>;

    /// Delete an accommodation; returns the deleted id
    async fn delete_accommodation(
        &self,
        id: i32,
        caller: AuthUser,
    ) -> Result<i32, AccommodationsError>;

    async fn get_accommodation(&self, id: i32) -> Result<Accommodation, AccommodationsError>;

    async fn list_accommodations(&self) -> Result<Vec<Accommodation>, AccommodationsError>;

    async fn list_accommodations_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<Accommodation>, AccommodationsError>;

    async fn register_user(&self, new: NewUser) -> Result<User, AccommodationsError>;

    async fn get_user(&self, id: i32) -> Result<User, AccommodationsError>;

    async fn create_category(&self, new: NewCategory) -> Result<Category, AccommodationsError>;

    async fn list_categories(&self) -> Result<Vec<Category>, AccommodationsError>;

    async fn get_category(&self, id: i32) -> Result<Category, AccommodationsError>;
}

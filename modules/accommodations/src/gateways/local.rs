use async_trait::async_trait;
use std::sync::Arc;

use crate::contract::{
    client::AccommodationsApi,
    error::AccommodationsError,
    model::{
        Accommodation, AccommodationPatch, AuthUser, Category, NewAccommodation, NewCategory,
        NewUser, User,
    },
};
use crate::domain::category_service::CategoryService;
use crate::domain::service::AccommodationService;
use crate::domain::user_service::UserService;

/// Local implementation of `AccommodationsApi` that delegates to the domain services
pub struct AccommodationsLocalClient {
    accommodations: Arc<AccommodationService>,
    users: Arc<UserService>,
    categories: Arc<CategoryService>,
}

impl AccommodationsLocalClient {
    pub fn new(
        accommodations: Arc<AccommodationService>,
        users: Arc<UserService>,
        categories: Arc<CategoryService>,
    ) -> Self {
        Self {
            accommodations,
            users,
            categories,
        }
    }
}

#[async_trait]
impl AccommodationsApi for AccommodationsLocalClient {
    async fn create_accommodation(
        &self,
        new: NewAccommodation,
        caller: AuthUser,
    ) -> Result<Accommodation, AccommodationsError> {
        self.accommodations
            .create_accommodation(new, &caller)
            .await
            .map_err(Into::into)
    }

    async fn update_accommodation(
        &self,
        id: i32,
        patch: AccommodationPatch,
        caller: AuthUser,
    ) -> Result<Accommodation, AccommodationsError> {
        self.accommodations
            .update_accommodation(id, patch, &caller)
            .await
            .map_err(Into::into)
    }

    async fn delete_accommodation(
        &self,
        id: i32,
        caller: AuthUser,
    ) -> Result<i32, AccommodationsError> {
        self.accommodations
            .delete_accommodation(id, &caller)
            .await
            .map_err(Into::into)
    }

    async fn get_accommodation(&self, id: i32) -> Result<Accommodation, AccommodationsError> {
        self.accommodations
            .get_accommodation(id)
            .await
            .map_err(Into::into)
    }

    async fn list_accommodations(&self) -> Result<Vec<Accommodation>, AccommodationsError> {
        self.accommodations
            .list_accommodations()
            .await
            .map_err(Into::into)
    }

    async fn list_accommodations_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<Accommodation>, AccommodationsError> {
        self.accommodations
            .list_accommodations_by_category(category_id)
            .await
            .map_err(Into::into)
    }

    async fn register_user(&self, new: NewUser) -> Result<User, AccommodationsError> {
        self.users.register_user(new).await.map_err(Into::into)
    }

    async fn get_user(&self, id: i32) -> Result<User, AccommodationsError> {
        self.users.get_user(id).await.map_err(Into::into)
    }

    async fn create_category(&self, new: NewCategory) -> Result<Category, AccommodationsError> {
        self.categories
            .create_category(new)
            .await
            .map_err(Into::into)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, AccommodationsError> {
        self.categories.list_categories().await.map_err(Into::into)
    }

    async fn get_category(&self, id: i32) -> Result<Category, AccommodationsError> {
        self.categories.get_category(id).await.map_err(Into::into)
    }
}

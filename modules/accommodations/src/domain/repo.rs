use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::contract::model::{
    Accommodation, AccommodationType, Category, NewAccommodation, NewCategory, NewUser, User,
};

/// Failure of a write through a repository port.
///
/// Unique-index violations are reported separately so the service can treat
/// the store as the authority on name/email uniqueness.
#[derive(Error, Debug)]
pub enum RepoError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;

/// An accommodation that has not been stored yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccommodationDraft {
    pub owner_id: i32,
    pub name: String,
    pub phone_number: String,
    pub city: String,
    pub accommodation_type: AccommodationType,
    pub category_id: i32,
    pub information: String,
    pub created_at: DateTime<Utc>,
}

impl AccommodationDraft {
    pub fn new(owner_id: i32, new: NewAccommodation, at: DateTime<Utc>) -> Self {
        Self {
            owner_id,
            name: new.name,
            phone_number: new.phone_number,
            city: new.city,
            accommodation_type: new.accommodation_type,
            category_id: new.category_id,
            information: new.information,
            created_at: at,
        }
    }
}

/// Port for the domain layer: persistence operations on accommodations.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait AccommodationsRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Accommodation>>;
    /// All accommodations, ascending by id.
    async fn find_all(&self) -> anyhow::Result<Vec<Accommodation>>;
    /// Accommodations of one category, ascending by id.
    async fn find_by_category_id(&self, category_id: i32) -> anyhow::Result<Vec<Accommodation>>;
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Accommodation>>;
    /// Insert a draft; returns the stored accommodation with its id.
    async fn insert(&self, draft: AccommodationDraft) -> RepoResult<Accommodation>;
    /// Replace the stored row with primary key `a.id`.
    /// Returns `None` if no such row exists anymore.
    async fn update(&self, a: Accommodation) -> RepoResult<Option<Accommodation>>;
    /// Delete by id. Returns true if a row was deleted.
    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<User>>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    async fn insert(&self, new: NewUser, at: DateTime<Utc>) -> RepoResult<User>;
}

#[async_trait]
pub trait CategoriesRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Category>>;
    /// All categories, ascending by id.
    async fn find_all(&self) -> anyhow::Result<Vec<Category>>;
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Category>>;
    async fn insert(&self, new: NewCategory) -> RepoResult<Category>;
}

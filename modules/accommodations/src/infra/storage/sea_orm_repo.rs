//! SeaORM-backed repository implementations for the domain ports.
//!
//! Each repository is generic over `C: ConnectionTrait`, so it can be built
//! with a `DatabaseConnection` **or** a transactional connection.

use anyhow::Context;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, SqlErr,
};

use crate::contract::model::{Accommodation, Category, NewCategory, NewUser, User};
use crate::domain::repo::{
    AccommodationDraft, AccommodationsRepository, CategoriesRepository, RepoError, RepoResult,
    UsersRepository,
};
use crate::infra::storage::entity::{accommodation, category, user};

/// Classify a write failure: unique-index violations are surfaced as such.
fn write_error(e: DbErr, op: &'static str) -> RepoError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => RepoError::UniqueViolation(detail),
        _ => RepoError::Other(anyhow::Error::new(e).context(op)),
    }
}

/// SeaORM accommodations repository.
/// Holds a connection object; its lifetime/ownership is up to the caller.
pub struct SeaOrmAccommodationsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmAccommodationsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> AccommodationsRepository for SeaOrmAccommodationsRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Accommodation>> {
        let found = accommodation::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Accommodation>> {
        let rows = accommodation::Entity::find()
            .order_by_asc(accommodation::Column::Id)
            .all(&self.conn)
            .await
            .context("find_all failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_category_id(&self, category_id: i32) -> anyhow::Result<Vec<Accommodation>> {
        let rows = accommodation::Entity::find()
            .filter(accommodation::Column::CategoryId.eq(category_id))
            .order_by_asc(accommodation::Column::Id)
            .all(&self.conn)
            .await
            .context("find_by_category_id failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Accommodation>> {
        let found = accommodation::Entity::find()
            .filter(accommodation::Column::Name.eq(name))
            .one(&self.conn)
            .await
            .context("find_by_name failed")?;
        Ok(found.map(Into::into))
    }

    async fn insert(&self, draft: AccommodationDraft) -> RepoResult<Accommodation> {
        let m = accommodation::ActiveModel {
            id: NotSet,
            name: Set(draft.name),
            owner_id: Set(draft.owner_id),
            phone_number: Set(draft.phone_number),
            city: Set(draft.city),
            accommodation_type: Set(draft.accommodation_type.into()),
            category_id: Set(draft.category_id),
            information: Set(draft.information),
            created_at: Set(draft.created_at),
            updated_at: Set(draft.created_at),
        };
        let stored = m
            .insert(&self.conn)
            .await
            .map_err(|e| write_error(e, "insert failed"))?;
        Ok(stored.into())
    }

    async fn update(&self, a: Accommodation) -> RepoResult<Option<Accommodation>> {
        let m = accommodation::ActiveModel {
            id: Set(a.id),
            name: Set(a.name),
            owner_id: Set(a.owner_id),
            phone_number: Set(a.phone_number),
            city: Set(a.city),
            accommodation_type: Set(a.accommodation_type.into()),
            category_id: Set(a.category_id),
            information: Set(a.information),
            created_at: Set(a.created_at),
            updated_at: Set(a.updated_at),
        };
        match m.update(&self.conn).await {
            Ok(stored) => Ok(Some(stored.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(write_error(e, "update failed")),
        }
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let res = accommodation::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete failed")?;
        Ok(res.rows_affected > 0)
    }
}

pub struct SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> UsersRepository for SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<User>> {
        let found = user::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let found = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.conn)
            .await
            .context("find_by_email failed")?;
        Ok(found.map(Into::into))
    }

    async fn insert(&self, new: NewUser, at: DateTime<Utc>) -> RepoResult<User> {
        let m = user::ActiveModel {
            id: NotSet,
            email: Set(new.email),
            name: Set(new.name),
            created_at: Set(at),
        };
        let stored = m
            .insert(&self.conn)
            .await
            .map_err(|e| write_error(e, "insert failed"))?;
        Ok(stored.into())
    }
}

pub struct SeaOrmCategoriesRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmCategoriesRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> CategoriesRepository for SeaOrmCategoriesRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Category>> {
        let found = category::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Category>> {
        let rows = category::Entity::find()
            .order_by_asc(category::Column::Id)
            .all(&self.conn)
            .await
            .context("find_all failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Category>> {
        let found = category::Entity::find()
            .filter(category::Column::Name.eq(name))
            .one(&self.conn)
            .await
            .context("find_by_name failed")?;
        Ok(found.map(Into::into))
    }

    async fn insert(&self, new: NewCategory) -> RepoResult<Category> {
        let m = category::ActiveModel {
            id: NotSet,
            name: Set(new.name),
        };
        let stored = m
            .insert(&self.conn)
            .await
            .map_err(|e| write_error(e, "insert failed"))?;
        Ok(stored.into())
    }
}

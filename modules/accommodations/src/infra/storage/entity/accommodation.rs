use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// Stored form of `AccommodationType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum AccommodationKind {
    #[sea_orm(string_value = "HOTEL")]
    Hotel,
    #[sea_orm(string_value = "MOTEL")]
    Motel,
    #[sea_orm(string_value = "PENSION")]
    Pension,
    #[sea_orm(string_value = "GUESTHOUSE")]
    GuestHouse,
    #[sea_orm(string_value = "RESORT")]
    Resort,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accommodations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub owner_id: i32,
    pub phone_number: String,
    pub city: String,
    pub accommodation_type: AccommodationKind,
    pub category_id: i32,
    #[sea_orm(column_type = "Text")]
    pub information: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

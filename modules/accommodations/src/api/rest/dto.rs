use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::contract::model::{
    Accommodation, AccommodationPatch, AccommodationType, Category, NewAccommodation, NewCategory,
    NewUser, User,
};

/// Digits and dashes only, 9 to 13 characters (e.g. `010-1234-5678`).
static PHONE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9-]{9,13}$").expect("phone number pattern compiles"));

/// REST DTO for the lodging type, serialized in upper case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccommodationTypeDto {
    Hotel,
    Motel,
    Pension,
    GuestHouse,
    Resort,
}

/// REST DTO for accommodation representation with serde/utoipa
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccommodationDto {
    pub id: i32,
    pub name: String,
    pub owner_id: i32,
    pub phone_number: String,
    pub city: String,
    pub accommodation_type: AccommodationTypeDto,
    pub category_id: i32,
    pub information: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// REST DTO for registering an accommodation; the owner is the caller
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateAccommodationReq {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: String,
    #[validate(regex(
        path = *PHONE_NUMBER,
        message = "must be 9-13 characters of digits and dashes"
    ))]
    pub phone_number: String,
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub city: String,
    pub accommodation_type: AccommodationTypeDto,
    pub category_id: i32,
    #[serde(default)]
    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub information: String,
}

/// REST DTO for updating an accommodation (partial)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, Default)]
pub struct UpdateAccommodationReq {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: Option<String>,
    #[validate(regex(
        path = *PHONE_NUMBER,
        message = "must be 9-13 characters of digits and dashes"
    ))]
    pub phone_number: Option<String>,
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub city: Option<String>,
    pub accommodation_type: Option<AccommodationTypeDto>,
    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub information: Option<String>,
}

/// REST DTO for accommodation list response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccommodationListDto {
    pub accommodations: Vec<AccommodationDto>,
    pub total: usize,
}

/// REST DTO returned by a successful delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedDto {
    pub id: i32,
}

/// REST DTO for query parameters
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListAccommodationsQuery {
    /// Only accommodations of this category
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateUserReq {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateCategoryReq {
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub name: String,
}

// Conversion implementations between REST DTOs and contract models

impl From<AccommodationType> for AccommodationTypeDto {
    fn from(t: AccommodationType) -> Self {
        match t {
            AccommodationType::Hotel => Self::Hotel,
            AccommodationType::Motel => Self::Motel,
            AccommodationType::Pension => Self::Pension,
            AccommodationType::GuestHouse => Self::GuestHouse,
            AccommodationType::Resort => Self::Resort,
        }
    }
}

impl From<AccommodationTypeDto> for AccommodationType {
    fn from(t: AccommodationTypeDto) -> Self {
        match t {
            AccommodationTypeDto::Hotel => Self::Hotel,
            AccommodationTypeDto::Motel => Self::Motel,
            AccommodationTypeDto::Pension => Self::Pension,
            AccommodationTypeDto::GuestHouse => Self::GuestHouse,
            AccommodationTypeDto::Resort => Self::Resort,
        }
    }
}

impl From<Accommodation> for AccommodationDto {
    fn from(a: Accommodation) -> Self {
        Self {
            id: a.id,
            name: a.name,
            owner_id: a.owner_id,
            phone_number: a.phone_number,
            city: a.city,
            accommodation_type: a.accommodation_type.into(),
            category_id: a.category_id,
            information: a.information,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

impl From<Vec<Accommodation>> for AccommodationListDto {
    fn from(all: Vec<Accommodation>) -> Self {
        let accommodations: Vec<AccommodationDto> =
            all.into_iter().map(AccommodationDto::from).collect();
        Self {
            total: accommodations.len(),
            accommodations,
        }
    }
}

impl From<CreateAccommodationReq> for NewAccommodation {
    fn from(req: CreateAccommodationReq) -> Self {
        Self {
            name: req.name,
            phone_number: req.phone_number,
            city: req.city,
            accommodation_type: req.accommodation_type.into(),
            category_id: req.category_id,
            information: req.information,
        }
    }
}

impl From<UpdateAccommodationReq> for AccommodationPatch {
    fn from(req: UpdateAccommodationReq) -> Self {
        Self {
            name: req.name,
            phone_number: req.phone_number,
            city: req.city,
            accommodation_type: req.accommodation_type.map(Into::into),
            information: req.information,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

impl From<CreateUserReq> for NewUser {
    fn from(req: CreateUserReq) -> Self {
        Self {
            email: req.email,
            name: req.name,
        }
    }
}

impl From<Category> for CategoryDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

impl From<CreateCategoryReq> for NewCategory {
    fn from(req: CreateCategoryReq) -> Self {
        Self { name: req.name }
    }
}

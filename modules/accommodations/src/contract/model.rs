use chrono::{DateTime, Utc};

/// Lodging category of an accommodation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccommodationType {
    Hotel,
    Motel,
    Pension,
    GuestHouse,
    Resort,
}

impl AccommodationType {
    pub const ALL: [AccommodationType; 5] = [
        Self::Hotel,
        Self::Motel,
        Self::Pension,
        Self::GuestHouse,
        Self::Resort,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hotel => "HOTEL",
            Self::Motel => "MOTEL",
            Self::Pension => "PENSION",
            Self::GuestHouse => "GUESTHOUSE",
            Self::Resort => "RESORT",
        }
    }
}

/// Pure accommodation model for inter-module communication (no serde/schemars)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accommodation {
    pub id: i32,
    pub name: String,
    pub owner_id: i32,
    pub phone_number: String,
    pub city: String,
    pub accommodation_type: AccommodationType,
    pub category_id: i32,
    pub information: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for registering a new accommodation. The owner is the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccommodation {
    pub name: String,
    pub phone_number: String,
    pub city: String,
    pub accommodation_type: AccommodationType,
    pub category_id: i32,
    pub information: String,
}

/// Partial update data for an accommodation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccommodationPatch {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub accommodation_type: Option<AccommodationType>,
    pub information: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
}

/// Identity of the authenticated caller of the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub id: i32,
}

impl AuthUser {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

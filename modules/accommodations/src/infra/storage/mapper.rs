use crate::contract::model::{Accommodation, AccommodationType, Category, User};
use crate::infra::storage::entity::{accommodation, category, user};
use crate::infra::storage::entity::accommodation::AccommodationKind;

impl From<AccommodationKind> for AccommodationType {
    fn from(kind: AccommodationKind) -> Self {
        match kind {
            AccommodationKind::Hotel => Self::Hotel,
            AccommodationKind::Motel => Self::Motel,
            AccommodationKind::Pension => Self::Pension,
            AccommodationKind::GuestHouse => Self::GuestHouse,
            AccommodationKind::Resort => Self::Resort,
        }
    }
}

impl From<AccommodationType> for AccommodationKind {
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

impl From<accommodation::Model> for Accommodation {
    fn from(m: accommodation::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            owner_id: m.owner_id,
            phone_number: m.phone_number,
            city: m.city,
            accommodation_type: m.accommodation_type.into(),
            category_id: m.category_id,
            information: m.information,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<user::Model> for User {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            name: m.name,
            created_at: m.created_at,
        }
    }
}

impl From<category::Model> for Category {
    fn from(m: category::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
        }
    }
}

#![allow(dead_code)]

use std::sync::Arc;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use accommodations::contract::model::{
    AccommodationType, AuthUser, Category, NewAccommodation, NewCategory, NewUser, User,
};
use accommodations::domain::category_service::CategoryService;
use accommodations::domain::service::AccommodationService;
use accommodations::domain::user_service::UserService;
use accommodations::infra::storage::{
    migrations::Migrator, SeaOrmAccommodationsRepository, SeaOrmCategoriesRepository,
    SeaOrmUsersRepository,
};

/// Fresh in-memory SQLite database with migrations applied.
///
/// A single pooled connection keeps every query on the same in-memory store.
pub async fn create_test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to test database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

pub struct Services {
    pub accommodations: Arc<AccommodationService>,
    pub users: Arc<UserService>,
    pub categories: Arc<CategoryService>,
}

pub fn services_on(db: &DatabaseConnection) -> Services {
    let users_repo = Arc::new(SeaOrmUsersRepository::new(db.clone()));
    let categories_repo = Arc::new(SeaOrmCategoriesRepository::new(db.clone()));
    let accommodations_repo = Arc::new(SeaOrmAccommodationsRepository::new(db.clone()));
    Services {
        accommodations: Arc::new(AccommodationService::new(
            accommodations_repo,
            users_repo.clone(),
            categories_repo.clone(),
        )),
        users: Arc::new(UserService::new(users_repo)),
        categories: Arc::new(CategoryService::new(categories_repo)),
    }
}

pub async fn create_test_services() -> Services {
    let db = create_test_db().await;
    services_on(&db)
}

pub async fn register(svc: &Services, email: &str) -> (User, AuthUser) {
    let user = svc
        .users
        .register_user(NewUser {
            email: email.to_string(),
            name: "Test Owner".to_string(),
        })
        .await
        .expect("register user");
    let caller = AuthUser::new(user.id);
    (user, caller)
}

pub async fn category(svc: &Services, name: &str) -> Category {
    svc.categories
        .create_category(NewCategory {
            name: name.to_string(),
        })
        .await
        .expect("create category")
}

pub fn new_accommodation(name: &str, category_id: i32) -> NewAccommodation {
    NewAccommodation {
        name: name.to_string(),
        phone_number: "010-1234-5678".to_string(),
        city: "Busan".to_string(),
        accommodation_type: AccommodationType::Hotel,
        category_id,
        information: "Ocean view rooms".to_string(),
    }
}

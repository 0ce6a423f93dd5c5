use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};

use crate::api::rest::routes::{self, RestServices};
use crate::config::AccommodationsConfig;
use crate::contract::client::AccommodationsApi;
use crate::domain::category_service::CategoryService;
use crate::domain::service::AccommodationService;
use crate::domain::user_service::UserService;
use crate::gateways::local::AccommodationsLocalClient;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{
    SeaOrmAccommodationsRepository, SeaOrmCategoriesRepository, SeaOrmUsersRepository,
};

/// Accommodations module: repositories, services, local client and REST routes
/// wired over one database connection.
#[derive(Clone)]
pub struct AccommodationsModule {
    db: DatabaseConnection,
    config: AccommodationsConfig,
    accommodations: Arc<AccommodationService>,
    users: Arc<UserService>,
    categories: Arc<CategoryService>,
}

impl AccommodationsModule {
    pub fn new(db: DatabaseConnection, config: AccommodationsConfig) -> Self {
        info!("Initializing accommodations module");
        debug!("Loaded accommodations config: {:?}", config);

        // Wire repositories (infra) to domain services (ports).
        // DatabaseConnection is a cheap cloneable handle.
        let accommodation_repo = Arc::new(SeaOrmAccommodationsRepository::new(db.clone()));
        let user_repo = Arc::new(SeaOrmUsersRepository::new(db.clone()));
        let category_repo = Arc::new(SeaOrmCategoriesRepository::new(db.clone()));

        let accommodations = Arc::new(AccommodationService::new(
            accommodation_repo,
            user_repo.clone(),
            category_repo.clone(),
        ));
        let users = Arc::new(UserService::new(user_repo));
        let categories = Arc::new(CategoryService::new(category_repo));

        Self {
            db,
            config,
            accommodations,
            users,
            categories,
        }
    }

    /// Run the storage migrations.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        info!("Running accommodations database migrations");
        Migrator::up(&self.db, None).await?;
        info!("Accommodations database migrations completed successfully");
        Ok(())
    }

    /// Create the configured seed categories that are missing.
    pub async fn init(&self) -> anyhow::Result<()> {
        let created = self
            .categories
            .ensure_categories(&self.config.seed_categories)
            .await?;
        info!("Accommodations module ready, {} categories seeded", created.len());
        Ok(())
    }

    /// In-process client for other modules.
    pub fn client(&self) -> Arc<dyn AccommodationsApi> {
        Arc::new(AccommodationsLocalClient::new(
            self.accommodations.clone(),
            self.users.clone(),
            self.categories.clone(),
        ))
    }

    pub fn router(&self) -> axum::Router {
        info!("Registering accommodations REST routes");
        routes::register_routes(
            axum::Router::new(),
            RestServices {
                accommodations: self.accommodations.clone(),
                users: self.users.clone(),
                categories: self.categories.clone(),
            },
        )
    }
}

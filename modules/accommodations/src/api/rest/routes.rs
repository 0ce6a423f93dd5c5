use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::api::rest::handlers;
use crate::domain::category_service::CategoryService;
use crate::domain::service::AccommodationService;
use crate::domain::user_service::UserService;

/// Services the REST handlers receive through `Extension`.
#[derive(Clone)]
pub struct RestServices {
    pub accommodations: Arc<AccommodationService>,
    pub users: Arc<UserService>,
    pub categories: Arc<CategoryService>,
}

pub fn register_routes(router: Router, services: RestServices) -> Router {
    router
        // GET /accommodations - List all (or by ?category_id=)
        // POST /accommodations - Register an accommodation
        .route(
            "/accommodations",
            get(handlers::list_accommodations).post(handlers::create_accommodation),
        )
        // GET/PUT/DELETE /accommodations/{id}
        .route(
            "/accommodations/{id}",
            get(handlers::get_accommodation)
                .put(handlers::update_accommodation)
                .delete(handlers::delete_accommodation),
        )
        .route(
            "/categories/{id}/accommodations",
            get(handlers::list_accommodations_by_category),
        )
        .route("/users", post(handlers::register_user))
        .route("/users/{id}", get(handlers::get_user))
        .route(
            "/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route("/categories/{id}", get(handlers::get_category))
        .layer(Extension(services.accommodations))
        .layer(Extension(services.users))
        .layer(Extension(services.categories))
}

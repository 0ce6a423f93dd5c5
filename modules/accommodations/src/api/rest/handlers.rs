use std::sync::Arc;

use axum::{
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use tracing::{error, info};

use crate::api::rest::dto::{
    AccommodationDto, AccommodationListDto, CategoryDto, CreateAccommodationReq,
    CreateCategoryReq, CreateUserReq, DeletedDto, ListAccommodationsQuery,
    UpdateAccommodationReq, UserDto,
};
use crate::api::rest::error::map_domain_error;
use crate::api::rest::extract::{Caller, ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::api::rest::problem::{Problem, ProblemResponse};
use crate::domain::category_service::CategoryService;
use crate::domain::service::AccommodationService;
use crate::domain::user_service::UserService;

/// List accommodations, optionally narrowed to one category
#[utoipa::path(
    get,
    path = "/accommodations",
    tag = "accommodations",
    operation_id = "accommodations.list_accommodations",
    params(ListAccommodationsQuery),
    responses(
        (status = 200, description = "List of accommodations", body = AccommodationListDto),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn list_accommodations(
    Extension(svc): Extension<Arc<AccommodationService>>,
    ValidatedQuery(query): ValidatedQuery<ListAccommodationsQuery>,
    uri: Uri,
) -> Result<Json<AccommodationListDto>, ProblemResponse> {
    info!("Listing accommodations with query: {:?}", query);

    let result = match query.category_id {
        Some(category_id) => svc.list_accommodations_by_category(category_id).await,
        None => svc.list_accommodations().await,
    };

    match result {
        Ok(all) => Ok(Json(AccommodationListDto::from(all))),
        Err(e) => {
            error!("Failed to list accommodations: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// List the accommodations of one category
#[utoipa::path(
    get,
    path = "/categories/{id}/accommodations",
    tag = "accommodations",
    operation_id = "accommodations.list_accommodations_by_category",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Accommodations of the category", body = AccommodationListDto),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn list_accommodations_by_category(
    Extension(svc): Extension<Arc<AccommodationService>>,
    ValidatedPath(category_id): ValidatedPath<i32>,
    uri: Uri,
) -> Result<Json<AccommodationListDto>, ProblemResponse> {
    info!("Listing accommodations of category {}", category_id);

    match svc.list_accommodations_by_category(category_id).await {
        Ok(found) => Ok(Json(AccommodationListDto::from(found))),
        Err(e) => {
            error!("Failed to list accommodations of category {}: {}", category_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Get a specific accommodation by ID
#[utoipa::path(
    get,
    path = "/accommodations/{id}",
    tag = "accommodations",
    operation_id = "accommodations.get_accommodation",
    params(("id" = i32, Path, description = "Accommodation id")),
    responses(
        (status = 200, description = "Accommodation found", body = AccommodationDto),
        (status = 404, description = "Not Found", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn get_accommodation(
    Extension(svc): Extension<Arc<AccommodationService>>,
    ValidatedPath(id): ValidatedPath<i32>,
    uri: Uri,
) -> Result<Json<AccommodationDto>, ProblemResponse> {
    info!("Getting accommodation with id: {}", id);

    match svc.get_accommodation(id).await {
        Ok(found) => Ok(Json(AccommodationDto::from(found))),
        Err(e) => {
            error!("Failed to get accommodation {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Register an accommodation owned by the caller
#[utoipa::path(
    post,
    path = "/accommodations",
    tag = "accommodations",
    operation_id = "accommodations.create_accommodation",
    params(("x-user-id" = i32, Header, description = "Caller user id")),
    request_body = CreateAccommodationReq,
    responses(
        (status = 201, description = "Created accommodation", body = AccommodationDto),
        (status = 400, description = "Bad Request", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Not Found", body = Problem, content_type = "application/problem+json"),
        (status = 409, description = "Conflict", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn create_accommodation(
    uri: Uri,
    Extension(svc): Extension<Arc<AccommodationService>>,
    Caller(caller): Caller,
    ValidatedJson(req_body): ValidatedJson<CreateAccommodationReq>,
) -> Result<(StatusCode, Json<AccommodationDto>), ProblemResponse> {
    info!("Creating accommodation for user {}: {:?}", caller.id, req_body);

    match svc.create_accommodation(req_body.into(), &caller).await {
        Ok(created) => Ok((StatusCode::CREATED, Json(AccommodationDto::from(created)))),
        Err(e) => {
            error!("Failed to create accommodation: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Update an existing accommodation
#[utoipa::path(
    put,
    path = "/accommodations/{id}",
    tag = "accommodations",
    operation_id = "accommodations.update_accommodation",
    params(
        ("id" = i32, Path, description = "Accommodation id"),
        ("x-user-id" = i32, Header, description = "Caller user id")
    ),
    request_body = UpdateAccommodationReq,
    responses(
        (status = 200, description = "Updated accommodation", body = AccommodationDto),
        (status = 400, description = "Bad Request", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Not Found", body = Problem, content_type = "application/problem+json"),
        (status = 409, description = "Conflict", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn update_accommodation(
    uri: Uri,
    Extension(svc): Extension<Arc<AccommodationService>>,
    ValidatedPath(id): ValidatedPath<i32>,
    Caller(caller): Caller,
    ValidatedJson(req_body): ValidatedJson<UpdateAccommodationReq>,
) -> Result<Json<AccommodationDto>, ProblemResponse> {
    info!("Updating accommodation {} with: {:?}", id, req_body);

    match svc.update_accommodation(id, req_body.into(), &caller).await {
        Ok(updated) => Ok(Json(AccommodationDto::from(updated))),
        Err(e) => {
            error!("Failed to update accommodation {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Delete an accommodation by ID
#[utoipa::path(
    delete,
    path = "/accommodations/{id}",
    tag = "accommodations",
    operation_id = "accommodations.delete_accommodation",
    params(
        ("id" = i32, Path, description = "Accommodation id"),
        ("x-user-id" = i32, Header, description = "Caller user id")
    ),
    responses(
        (status = 200, description = "Accommodation deleted", body = DeletedDto),
        (status = 400, description = "Bad Request", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Not Found", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn delete_accommodation(
    Extension(svc): Extension<Arc<AccommodationService>>,
    ValidatedPath(id): ValidatedPath<i32>,
    Caller(caller): Caller,
    uri: Uri,
) -> Result<Json<DeletedDto>, ProblemResponse> {
    info!("Deleting accommodation: {}", id);

    match svc.delete_accommodation(id, &caller).await {
        Ok(id) => Ok(Json(DeletedDto { id })),
        Err(e) => {
            error!("Failed to delete accommodation {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Register a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    operation_id = "accommodations.register_user",
    request_body = CreateUserReq,
    responses(
        (status = 201, description = "Registered user", body = UserDto),
        (status = 400, description = "Bad Request", body = Problem, content_type = "application/problem+json"),
        (status = 409, description = "Conflict", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn register_user(
    uri: Uri,
    Extension(svc): Extension<Arc<UserService>>,
    ValidatedJson(req_body): ValidatedJson<CreateUserReq>,
) -> Result<(StatusCode, Json<UserDto>), ProblemResponse> {
    info!("Registering user: {:?}", req_body);

    match svc.register_user(req_body.into()).await {
        Ok(user) => Ok((StatusCode::CREATED, Json(UserDto::from(user)))),
        Err(e) => {
            error!("Failed to register user: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    operation_id = "accommodations.get_user",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "Not Found", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn get_user(
    Extension(svc): Extension<Arc<UserService>>,
    ValidatedPath(id): ValidatedPath<i32>,
    uri: Uri,
) -> Result<Json<UserDto>, ProblemResponse> {
    info!("Getting user with id: {}", id);

    match svc.get_user(id).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            error!("Failed to get user {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Create a category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    operation_id = "accommodations.create_category",
    request_body = CreateCategoryReq,
    responses(
        (status = 201, description = "Created category", body = CategoryDto),
        (status = 400, description = "Bad Request", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn create_category(
    uri: Uri,
    Extension(svc): Extension<Arc<CategoryService>>,
    ValidatedJson(req_body): ValidatedJson<CreateCategoryReq>,
) -> Result<(StatusCode, Json<CategoryDto>), ProblemResponse> {
    info!("Creating category: {:?}", req_body);

    match svc.create_category(req_body.into()).await {
        Ok(category) => Ok((StatusCode::CREATED, Json(CategoryDto::from(category)))),
        Err(e) => {
            error!("Failed to create category: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    operation_id = "accommodations.list_categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn list_categories(
    Extension(svc): Extension<Arc<CategoryService>>,
    uri: Uri,
) -> Result<Json<Vec<CategoryDto>>, ProblemResponse> {
    info!("Listing categories");

    match svc.list_categories().await {
        Ok(all) => Ok(Json(all.into_iter().map(CategoryDto::from).collect())),
        Err(e) => {
            error!("Failed to list categories: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    operation_id = "accommodations.get_category",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category found", body = CategoryDto),
        (status = 404, description = "Not Found", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn get_category(
    Extension(svc): Extension<Arc<CategoryService>>,
    ValidatedPath(id): ValidatedPath<i32>,
    uri: Uri,
) -> Result<Json<CategoryDto>, ProblemResponse> {
    info!("Getting category with id: {}", id);

    match svc.get_category(id).await {
        Ok(category) => Ok(Json(CategoryDto::from(category))),
        Err(e) => {
            error!("Failed to get category {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

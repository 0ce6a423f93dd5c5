use utoipa::OpenApi;

use crate::api::rest::{dto, handlers, problem};

/// OpenAPI document of the accommodations REST surface.
#[derive(OpenApi)]
#[openapi(
    info(title = "Jagoga accommodations API"),
    paths(
        handlers::list_accommodations,
        handlers::create_accommodation,
        handlers::get_accommodation,
        handlers::update_accommodation,
        handlers::delete_accommodation,
        handlers::list_accommodations_by_category,
        handlers::register_user,
        handlers::get_user,
        handlers::create_category,
        handlers::list_categories,
        handlers::get_category,
    ),
    components(schemas(
        dto::AccommodationDto,
        dto::AccommodationTypeDto,
        dto::AccommodationListDto,
        dto::CreateAccommodationReq,
        dto::UpdateAccommodationReq,
        dto::DeletedDto,
        dto::UserDto,
        dto::CreateUserReq,
        dto::CategoryDto,
        dto::CreateCategoryReq,
        problem::Problem,
        problem::FieldViolation,
    )),
    tags(
        (name = "accommodations", description = "Lodging listings"),
        (name = "users", description = "Listing owners"),
        (name = "categories", description = "Listing categories"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route_and_problem_schema() {
        let v = serde_json::to_value(ApiDoc::openapi()).unwrap();
        for path in [
            "/accommodations",
            "/accommodations/{id}",
            "/categories/{id}/accommodations",
            "/users",
            "/users/{id}",
            "/categories",
            "/categories/{id}",
        ] {
            assert!(v["paths"].get(path).is_some(), "missing path {path}");
        }
        let item = &v["paths"]["/accommodations/{id}"];
        assert!(item.get("get").is_some());
        assert!(item.get("put").is_some());
        assert!(item.get("delete").is_some());
        assert!(v.pointer("/components/schemas/Problem").is_some());
        assert!(v.pointer("/components/schemas/AccommodationDto").is_some());
    }
}

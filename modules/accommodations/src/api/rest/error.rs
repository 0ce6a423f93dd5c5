use axum::http::StatusCode;
use validator::ValidationErrors;

use crate::api::rest::problem::{FieldViolation, Problem, ProblemResponse};
use crate::domain::error::DomainError;

/// Helper to create a ProblemResponse with less boilerplate
pub fn from_parts(
    status: StatusCode,
    code: &str,
    title: &str,
    detail: impl Into<String>,
    instance: &str,
) -> ProblemResponse {
    let problem = Problem::new(status, title, detail)
        .with_type(format!("https://errors.jagoga.dev/{}", code))
        .with_code(code)
        .with_instance(instance);

    // Add request ID from current tracing span if available
    let problem = if let Some(id) = tracing::Span::current().id() {
        problem.with_trace_id(id.into_u64().to_string())
    } else {
        problem
    };

    ProblemResponse(problem)
}

/// Failures raised at the REST boundary before or after the domain is called.
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    /// Field-level violations of a request body.
    Validation(ValidationErrors),
    /// Request that cannot be interpreted, e.g. malformed JSON.
    IllegalArgument(String),
    /// Missing or unusable caller identity.
    Authentication(String),
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self::Domain(e)
    }
}

impl ApiError {
    pub fn into_problem(self, instance: &str) -> ProblemResponse {
        match self {
            ApiError::Domain(e) => map_domain_error(&e, instance),
            ApiError::Validation(errors) => {
                let violations = field_violations(&errors);
                let detail = format!("{} field(s) failed validation", violations.len());
                let ProblemResponse(problem) = from_parts(
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_FAILED",
                    "Validation error",
                    detail,
                    instance,
                );
                ProblemResponse(problem.with_errors(violations))
            }
            ApiError::IllegalArgument(message) => from_parts(
                StatusCode::BAD_REQUEST,
                "ILLEGAL_ARGUMENT",
                "Illegal argument",
                message,
                instance,
            ),
            ApiError::Authentication(message) => from_parts(
                StatusCode::BAD_REQUEST,
                "USERS_AUTHENTICATION_FAIL",
                "Authentication failed",
                message,
                instance,
            ),
        }
    }
}

/// Flatten validator output into one entry per violation, ordered by field.
pub fn field_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut out: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| FieldViolation {
                field: field.clone(),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string()),
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

/// Map domain error to RFC9457 ProblemResponse
pub fn map_domain_error(e: &DomainError, instance: &str) -> ProblemResponse {
    match e {
        DomainError::DuplicatedUser { email } => from_parts(
            StatusCode::CONFLICT,
            "USERS_DUPLICATED",
            "Duplicated user",
            format!("User with email '{}' already exists", email),
            instance,
        ),
        DomainError::DuplicatedAccommodation { name } => from_parts(
            StatusCode::CONFLICT,
            "ACCOMMODATIONS_DUPLICATED",
            "Duplicated accommodation",
            format!("Accommodation named '{}' already exists", name),
            instance,
        ),
        DomainError::UserNotFound { id } => from_parts(
            StatusCode::NOT_FOUND,
            "USERS_NOT_FOUND",
            "User not found",
            format!("User with id {} was not found", id),
            instance,
        ),
        DomainError::AccommodationNotFound { id } => from_parts(
            StatusCode::NOT_FOUND,
            "ACCOMMODATIONS_NOT_FOUND",
            "Accommodation not found",
            format!("Accommodation with id {} was not found", id),
            instance,
        ),
        DomainError::CategoryNotFound { id } => from_parts(
            StatusCode::NOT_FOUND,
            "CATEGORIES_NOT_FOUND",
            "Category not found",
            format!("Category with id {} was not found", id),
            instance,
        ),
        DomainError::AuthenticationFail { .. } => {
            tracing::warn!(error = %e, "Permission check failed");
            from_parts(
                StatusCode::BAD_REQUEST,
                "USERS_AUTHENTICATION_FAIL",
                "Authentication failed",
                "Caller is not the owner of this resource",
                instance,
            )
        }
        DomainError::IllegalArgument { message } => from_parts(
            StatusCode::BAD_REQUEST,
            "ILLEGAL_ARGUMENT",
            "Illegal argument",
            message.clone(),
            instance,
        ),
        DomainError::Database { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = ?e, "Database error occurred");
            from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_DB",
                "Internal error",
                "An internal database error occurred",
                instance,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    fn status_and_code(p: &ProblemResponse) -> (u16, &str) {
        (p.0.status, p.0.code.as_str())
    }

    #[test]
    fn every_domain_error_has_one_canonical_status() {
        let cases = [
            (DomainError::duplicated_user("a@b.c"), 409, "USERS_DUPLICATED"),
            (
                DomainError::duplicated_accommodation("Seaside Inn"),
                409,
                "ACCOMMODATIONS_DUPLICATED",
            ),
            (DomainError::user_not_found(1), 404, "USERS_NOT_FOUND"),
            (
                DomainError::accommodation_not_found(99),
                404,
                "ACCOMMODATIONS_NOT_FOUND",
            ),
            (DomainError::category_not_found(3), 404, "CATEGORIES_NOT_FOUND"),
            (
                DomainError::authentication_fail(2, 1),
                400,
                "USERS_AUTHENTICATION_FAIL",
            ),
            (DomainError::illegal_argument("bad"), 400, "ILLEGAL_ARGUMENT"),
            (DomainError::database("boom"), 500, "INTERNAL_DB"),
        ];
        for (err, status, code) in cases {
            let p = map_domain_error(&err, "/accommodations");
            assert_eq!(status_and_code(&p), (status, code), "for {err:?}");
            assert_eq!(p.0.instance, "/accommodations");
        }
    }

    #[test]
    fn database_details_are_not_exposed() {
        let p = map_domain_error(&DomainError::database("password=hunter2"), "/x");
        assert!(!p.0.detail.contains("hunter2"));
    }

    #[test]
    fn validation_lists_every_violated_field() {
        let mut errors = ValidationErrors::new();
        errors.add("name", ValidationError::new("length"));
        let mut phone = ValidationError::new("phone_number");
        phone.message = Some("must be 9-13 digits or dashes".into());
        errors.add("phone_number", phone);

        let p = ApiError::Validation(errors).into_problem("/accommodations");
        assert_eq!(status_and_code(&p), (400, "VALIDATION_FAILED"));
        let violations = p.0.errors.unwrap_or_default();
        assert_eq!(
            violations,
            vec![
                FieldViolation {
                    field: "name".into(),
                    message: "length".into()
                },
                FieldViolation {
                    field: "phone_number".into(),
                    message: "must be 9-13 digits or dashes".into()
                },
            ]
        );
    }

    #[test]
    fn boundary_failures_use_the_same_codes() {
        let p = ApiError::Authentication("missing x-user-id header".into()).into_problem("/a");
        assert_eq!(status_and_code(&p), (400, "USERS_AUTHENTICATION_FAIL"));
        let p = ApiError::IllegalArgument("expected value".into()).into_problem("/a");
        assert_eq!(status_and_code(&p), (400, "ILLEGAL_ARGUMENT"));
        assert_eq!(p.0.detail, "expected value");
    }
}

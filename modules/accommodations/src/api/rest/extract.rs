use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::api::rest::error::ApiError;
use crate::api::rest::problem::ProblemResponse;
use crate::contract::model::AuthUser;

/// Header carrying the authenticated user id, set by the upstream gateway.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Caller identity of the current request.
#[derive(Debug, Clone, Copy)]
pub struct Caller(pub AuthUser);

fn caller_from_parts(parts: &Parts) -> Result<AuthUser, ApiError> {
    let raw = parts
        .headers
        .get(USER_ID_HEADER)
        .ok_or_else(|| ApiError::Authentication(format!("missing {USER_ID_HEADER} header")))?;
    raw.to_str()
        .ok()
        .and_then(|s| s.trim().parse::<i32>().ok())
        .map(AuthUser::new)
        .ok_or_else(|| ApiError::Authentication(format!("malformed {USER_ID_HEADER} header")))
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ProblemResponse;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl core::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            caller_from_parts(parts)
                .map(Caller)
                .map_err(|e| e.into_problem(parts.uri.path()))
        }
    }
}

/// JSON body that has passed its `validator` rules.
///
/// Malformed JSON is rejected as an illegal argument; rule violations are
/// collected per field.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ProblemResponse;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl core::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let instance = req.uri().path().to_owned();
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rej| ApiError::IllegalArgument(rej.body_text()).into_problem(&instance))?;
            value
                .validate()
                .map_err(|e| ApiError::Validation(e).into_problem(&instance))?;
            Ok(ValidatedJson(value))
        }
    }
}

/// Path parameters; an unparsable segment is an illegal argument.
#[derive(Debug, Clone)]
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ProblemResponse;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl core::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let instance = parts.uri.path().to_owned();
            let Path(value) = Path::<T>::from_request_parts(parts, state)
                .await
                .map_err(|rej| ApiError::IllegalArgument(rej.body_text()).into_problem(&instance))?;
            Ok(ValidatedPath(value))
        }
    }
}

/// Query string parameters; an unparsable value is an illegal argument.
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ProblemResponse;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl core::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let instance = parts.uri.path().to_owned();
            let Query(value) = Query::<T>::from_request_parts(parts, state)
                .await
                .map_err(|rej| ApiError::IllegalArgument(rej.body_text()).into_problem(&instance))?;
            Ok(ValidatedQuery(value))
        }
    }
}

//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text rejections, so malformed input gets the same JSON error body
//! as every other 400.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use prsk_core::error::CoreError;
use prsk_core::types::DbId;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body deserialized and then checked with its `validator` rules.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        value.validate().map_err(CoreError::from)?;
        Ok(Self(value))
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    CoreError::invalid_field("body", rejection.body_text()).into()
}

/// Query string deserialized into `T`, rejecting unparsable values with a 400.
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(query_rejection)?;
        Ok(Self(value))
    }
}

fn query_rejection(rejection: QueryRejection) -> AppError {
    CoreError::invalid_field("query", rejection.body_text()).into()
}

/// The `{id}` path segment, required to be an integer of at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub DbId);

const INVALID_ID: &str = "Id must be a positive integer";

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(path_rejection)?;
        if id < 1 {
            return Err(CoreError::invalid_field("id", INVALID_ID).into());
        }
        Ok(Self(id))
    }
}

fn path_rejection(rejection: PathRejection) -> AppError {
    tracing::debug!(error = %rejection.body_text(), "Rejected path id");
    CoreError::invalid_field("id", INVALID_ID).into()
}

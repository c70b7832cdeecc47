use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::api::json_error::JsonError;

/// Deserialize a JSON body, treating a missing or blank body as `T::default()`.
async fn json_or_default<T, S>(req: Request, state: &S) -> Result<T, JsonError>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    let headers = req.headers().clone();
    let bytes = Bytes::from_request(req, state).await?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let mut req = Request::new(Body::from(bytes));
    *req.headers_mut() = headers;

    let Json(value) = Json::<T>::from_request(req, state).await?;

    Ok(value)
}

/// JSON body that may be omitted entirely, in which case `T::default()` is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalJson<T>(pub T);

impl<T, S> FromRequest<S> for OptionalJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = JsonError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        json_or_default(req, state).await.map(Self)
    }
}

/// An extractor that deserializes JSON and validates it using the validator crate.
///
/// A missing body is validated as `T::default()`, so required fields are
/// reported individually instead of as a parse failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Default + Validate,
    S: Send + Sync,
{
    type Rejection = JsonError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value: T = json_or_default(req, state).await?;

        value.validate().map_err(JsonError::ValidationError)?;

        Ok(Self(value))
    }
}

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::json;
use tracing::{debug, error};

use crate::{auth::jwt, config::Config, database::models::user, ids::UserId};

/// Legacy header some clients send the identity token in.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Authenticated user extracted from the identity token.
///
/// Loads the user row referenced by the token's subject. Handlers that take a
/// `CurrentUser` are rejected with 401 before they run when the token is
/// missing, invalid, or points at a user that does not exist.
///
/// # Example
/// ```rust,ignore
/// pub async fn create(current_user: CurrentUser, ...) -> RequestResult<Json<AdvertView>> {
///     let owner = current_user.id();
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// The loaded user model from the database
    pub user: user::Model,
}

impl CurrentUser {
    #[must_use]
    pub fn id(&self) -> UserId {
        self.user.user_id()
    }
}

impl std::ops::Deref for CurrentUser {
    type Target = user::Model;

    fn deref(&self) -> &Self::Target {
        &self.user
    }
}

/// Error type for `CurrentUser` extraction failures.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Neither `Authorization: Bearer` nor `x-auth-token` was provided
    #[error("No token, authorization denied")]
    MissingToken,
    /// Token failed verification or references an unknown user
    #[error("Token is not valid")]
    InvalidToken,
    /// Database error while loading user
    #[error("Database error while loading user")]
    DatabaseError(#[source] sea_orm::DbErr),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken => {
                debug!(reason = %self, "Rejecting unauthenticated request");
                (StatusCode::UNAUTHORIZED, Json(json!({ "msg": self.to_string() }))).into_response()
            }
            Self::DatabaseError(err) => {
                error!(error = %err, "Failed to load authenticated user");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server Error").into_response()
            }
        }
    }
}

/// Extract the identity token, preferring the `Authorization` header.
fn extract_token(headers: &HeaderMap) -> Option<&str> {
    if let Some(token) = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
    {
        return Some(token.trim());
    }

    headers
        .get(AUTH_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    Config: FromRef<S>,
    DatabaseConnection: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers).ok_or(AuthError::MissingToken)?;

        let config = Config::from_ref(state);
        let claims = jwt::verify_token(&config, token).map_err(|_| AuthError::InvalidToken)?;
        let user_id = claims.user_id().ok_or(AuthError::InvalidToken)?;

        let db = DatabaseConnection::from_ref(state);
        let user = user::Entity::find_by_id(user_id.as_uuid())
            .one(&db)
            .await
            .map_err(AuthError::DatabaseError)?
            .ok_or(AuthError::InvalidToken)?;

        Ok(Self { user })
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_extract_token_prefers_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        headers.insert(AUTH_TOKEN_HEADER, HeaderValue::from_static("xyz"));

        assert_eq!(extract_token(&headers), Some("abc"));
    }

    #[test]
    fn test_extract_token_falls_back_to_auth_token_header() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTH_TOKEN_HEADER, HeaderValue::from_static("xyz"));

        assert_eq!(extract_token(&headers), Some("xyz"));
    }

    #[test]
    fn test_extract_token_ignores_other_schemes() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));

        assert_eq!(extract_token(&headers), None);
    }
}

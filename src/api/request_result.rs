use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, error};

use crate::api::json_error::JsonError;

pub type RequestResult<T> = Result<T, RequestError>;

/// Errors a handler can return.
///
/// Client errors carry a message that is sent back as `{"msg": ...}`.
/// Database errors are logged and collapsed into a generic 500.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Json(#[from] JsonError),
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl RequestError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Valid identity that lacks permission for the action.
    #[must_use]
    pub fn not_authorized() -> Self {
        Self::unauthorized("User not authorized")
    }

    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Json(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            Self::Json(err) => err.into_response(),
            Self::Database(err) => {
                error!(error = %err, "Database error while handling request");
                (status, "Server Error").into_response()
            }
            Self::BadRequest(msg) | Self::Unauthorized(msg) | Self::NotFound(msg) => {
                debug!(status = status.as_u16(), msg = %msg, "Request rejected");
                (status, Json(json!({ "msg": msg }))).into_response()
            }
        }
    }
}

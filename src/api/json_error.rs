use axum::{
    extract::rejection::{BytesRejection, JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    response::Response,
    Json,
};
use serde::Serialize;
use tracing::debug;
use validator::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    #[error("Invalid JSON format")]
    InvalidJson(#[from] JsonRejection),
    #[error("Could not read request body")]
    UnreadableBody(#[from] BytesRejection),
    #[error("Validation error")]
    ValidationError(ValidationErrors),
}

/// One failed field in a validation error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub param: String,
    pub msg: String,
}

/// Flatten validator output into one entry per failure, ordered by field name.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, failures)| {
            let param = field.to_string();
            failures.iter().map(move |failure| FieldError {
                param: param.clone(),
                msg: failure
                    .message
                    .as_ref()
                    .map_or_else(|| failure.code.to_string(), ToString::to_string),
            })
        })
        .collect();

    fields.sort_by(|a, b| a.param.cmp(&b.param));
    fields
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidJson(rejection) => {
                debug!(error = %rejection, "Rejecting malformed JSON body");
                (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({ "msg": "Invalid JSON format" })),
                )
                    .into_response()
            }
            Self::UnreadableBody(rejection) => {
                debug!(error = %rejection, "Rejecting unreadable request body");
                (
                    rejection.status(),
                    Json(serde_json::json!({ "msg": rejection.body_text() })),
                )
                    .into_response()
            }
            Self::ValidationError(errors) => {
                let errors = field_errors(&errors);
                debug!(?errors, "Rejecting invalid request body");
                (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({ "errors": errors })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use validator::{Validate, ValidationError};

    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(length(min = 1))]
        code: String,
    }

    #[test]
    fn test_field_errors_are_sorted_and_use_messages() {
        let sample = Sample {
            name: String::new(),
            code: String::new(),
        };
        let errors = sample.validate().expect_err("both fields are empty");

        assert_eq!(
            field_errors(&errors),
            vec![
                FieldError {
                    param: "code".to_string(),
                    msg: "length".to_string(),
                },
                FieldError {
                    param: "name".to_string(),
                    msg: "Name is required".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_reported_as_json() {
        let rejection = Json::<serde_json::Value>::from_bytes(b"{\"title\":")
            .expect_err("truncated document");

        let response = JsonError::from(rejection).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(body, serde_json::json!({ "msg": "Invalid JSON format" }));
    }

    #[test]
    fn test_custom_errors_keep_their_message() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "deadline",
            ValidationError::new("date").with_message(Cow::Borrowed("Deadline must be a valid date")),
        );

        let fields = field_errors(&errors);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].msg, "Deadline must be a valid date");
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::validation::ValidationErrors;

/// JSON error payload: a human-readable message plus optional field-level
/// validation errors for the creation form.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
    pub errors: Option<ValidationErrors>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), errors: None }
    }

    pub fn validation(errors: ValidationErrors) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Validation Error".into(),
            errors: Some(errors),
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = match self.errors {
            Some(errors) => serde_json::json!({"error": self.message, "errors": errors}),
            None => serde_json::json!({"error": self.message}),
        };
        (self.status, Json(body)).into_response()
    }
}

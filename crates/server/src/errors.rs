use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use models::errors::ModelError;
use service::errors::ServiceError;

/// JSON error envelope for the HTTP surface. NotFound responses carry an
/// empty body; everything else reports a message plus field-level details.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Vec<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: &str, details: Vec<String>) -> Self {
        Self { status, message: message.to_string(), details }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Vec::new())
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status == StatusCode::NOT_FOUND {
            return self.status.into_response();
        }
        let body = serde_json::json!({ "error": self.message, "details": self.details });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match &e {
            ServiceError::Validation(v) | ServiceError::Model(ModelError::Validation(v)) => {
                Self::new(StatusCode::BAD_REQUEST, "Validation Error", v.clone())
            }
            ServiceError::NotFound(_) => Self::not_found(),
            ServiceError::Conflict(_) => {
                error!(err = %e, "menu item changed underneath the request");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Conflict", Vec::new())
            }
            ServiceError::Db(_) | ServiceError::Model(ModelError::Db(_)) => {
                // the store detail goes to the log, never to the caller
                error!(err = %e, "store operation failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Vec::new())
            }
        }
    }
}

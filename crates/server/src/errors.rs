use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::Reason;
use service::auth::errors::RegisterError;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{debug, error};

/// Handler error rendered as `{"reason": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let reason = match self {
            ApiError::Internal(detail) => {
                error!(error = %detail, "internal error");
                "Internal server error".to_string()
            }
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => msg,
        };
        (status, Json(Reason::new(reason))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<RegisterError> for ApiError {
    fn from(e: RegisterError) -> Self {
        if e.is_client_error() {
            ApiError::BadRequest(e.to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        debug!(error = %e.body_text(), "rejected request body");
        ApiError::BadRequest("Invalid request body".into())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        debug!(error = %e.body_text(), "rejected query string");
        ApiError::BadRequest("Invalid query string".into())
    }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self {
        debug!(error = %e.body_text(), "rejected path parameter");
        ApiError::BadRequest("Invalid path parameter".into())
    }
}

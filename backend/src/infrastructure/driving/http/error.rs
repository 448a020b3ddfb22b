use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;

use crate::application::videos::ServiceError;

/// Error returned by handlers; rendered as a status plus `ErrorResponse` body.
#[derive(Debug)]
pub enum ApiError {
    Service(ServiceError),
    /// Malformed or oversized multipart body; keeps axum's own status.
    Multipart(MultipartError),
    BadRequest(String),
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::Multipart(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError::Service(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Service(ServiceError::CourseNotFound(_))
            | ApiError::Service(ServiceError::VideoNotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Service(ServiceError::InvalidFileName(_)) | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Service(ServiceError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Multipart(err) => err.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Service(err) => err.to_string(),
            ApiError::Multipart(err) => err.body_text(),
            ApiError::BadRequest(msg) => msg.clone(),
        };
        if status.is_server_error() {
            tracing::error!("[API] {}", message);
        } else {
            tracing::warn!("[API] {} ({})", message, status);
        }
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

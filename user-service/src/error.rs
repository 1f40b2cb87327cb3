use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use userapi_shared::{
    error::ServiceError, models::ErrorResponse, validation::ValidationErrors,
};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(ValidationErrors),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "invalid_request",
            AppError::ValidationFailed(_) => "validation_failed",
            AppError::NotFound(_) => "user_not_found",
            AppError::MethodNotAllowed => "method_not_allowed",
            AppError::RouteNotFound(_) => "not_found",
            AppError::InternalServerError(_) => "internal_error",
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::BadRequest(msg) => AppError::BadRequest(msg),
            ServiceError::ValidationFailed(errors) => AppError::ValidationFailed(errors),
            ServiceError::NotFound(id) => AppError::NotFound(id),
            ServiceError::InternalError(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code().to_string();

        let (message, details) = match self {
            AppError::BadRequest(msg) => (msg, Vec::new()),
            AppError::ValidationFailed(errors) => {
                (errors.message(), errors.violations().to_vec())
            }
            AppError::NotFound(_) => ("User not found".to_string(), Vec::new()),
            AppError::MethodNotAllowed => ("Method not allowed".to_string(), Vec::new()),
            AppError::RouteNotFound(path) => {
                tracing::warn!(path = %path, "No route matched");
                ("The requested resource was not found".to_string(), Vec::new())
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                ("Internal server error".to_string(), Vec::new())
            }
        };

        tracing::debug!(status = %status, error_code = %error_code, "Returning error response");
        (
            status,
            Json(ErrorResponse {
                error_code,
                message,
                details,
            }),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

pub mod health_handlers;
pub mod user_handlers;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::Uri,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Largest request body the API will read
pub const MAX_BODY_BYTES: usize = 1 << 20;

/// JSON body extractor whose rejections use the API error format.
///
/// The body is bounded by the router's `DefaultBodyLimit`; an oversized,
/// unreadable or malformed body becomes `invalid_request`. No particular
/// Content-Type is demanded.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!(error = %rejection.body_text(), "Failed to read request body");
            AppError::BadRequest(rejection.body_text())
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|err| {
            tracing::warn!(error = %err, "Invalid request body");
            AppError::BadRequest(format!("Invalid JSON body: {}", err))
        })?;

        Ok(JsonBody(value))
    }
}

// Used as the per-route method fallback
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}

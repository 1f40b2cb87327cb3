pub mod request_id;

use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Turns a handler panic into a 500 so the connection (and process) survive
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = err.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = err.downcast_ref::<&str>() {
        (*msg).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::InternalServerError(format!("Handler panicked: {}", detail)).into_response()
}

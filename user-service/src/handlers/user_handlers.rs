use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use userapi_shared::{
    models::{CreateUserRequest, User},
    store::UserStore,
};

use super::JsonBody;
use crate::error::{AppError, Result};
use crate::service::UserService;

// POST /api/users
pub async fn create_user<S>(
    State(service): State<Arc<UserService<S>>>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> Result<Json<User>>
where
    S: UserStore,
{
    let user = service.create_user(payload).await?;
    Ok(Json(user))
}

// GET /api/users/:id and /api/users/:id/*rest
//
// Only the first segment after the prefix is the ID; anything past it is
// ignored. `Path` percent-decodes, so an encoded slash also ends the ID.
pub async fn get_user<S>(
    State(service): State<Arc<UserService<S>>>,
    Path(params): Path<HashMap<String, String>>,
) -> Result<Json<User>>
where
    S: UserStore,
{
    let id = params
        .get("id")
        .and_then(|raw| raw.split('/').next())
        .unwrap_or_default();
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

// GET /api/users/
pub async fn missing_user_id() -> AppError {
    AppError::BadRequest("User ID is required".into())
}

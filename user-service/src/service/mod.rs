use std::sync::Arc;

use chrono::Utc;
use userapi_shared::{
    error::{Result, ServiceError},
    ids::IdGenerator,
    models::{CreateUserRequest, Role, User},
    store::UserStore,
};

/// Create/read lifecycle for user records.
///
/// Validation runs before anything is generated or stored, so a failed create
/// leaves the store untouched.
pub struct UserService<S> {
    store: Arc<S>,
    ids: Arc<dyn IdGenerator>,
}

impl<S> Clone for UserService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            ids: Arc::clone(&self.ids),
        }
    }
}

impl<S> UserService<S>
where
    S: UserStore,
{
    pub fn new(store: Arc<S>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User> {
        if let Err(errors) = request.validate() {
            tracing::warn!(errors = %errors, "Validation failed");
            return Err(ServiceError::ValidationFailed(errors));
        }

        let role: Role = request
            .role
            .parse()
            .map_err(|err| ServiceError::InternalError(format!("{}", err)))?;

        let user = User {
            id: self.ids.next_id(),
            name: request.name,
            email: request.email,
            age: request.age,
            role,
            created_at: Utc::now(),
        };

        let user = self.store.insert_user(user).await?;

        tracing::info!(user_id = %user.id, email = %user.email, "User created successfully");
        Ok(user)
    }

    pub async fn get_user(&self, id: &str) -> Result<User> {
        if id.is_empty() {
            return Err(ServiceError::BadRequest("User ID is required".into()));
        }

        match self.store.get_user(id).await {
            Ok(user) => {
                tracing::info!(user_id = %id, "User retrieved successfully");
                Ok(user)
            }
            Err(ServiceError::NotFound(_)) => {
                tracing::warn!(user_id = %id, "User not found");
                Err(ServiceError::NotFound(id.to_string()))
            }
            Err(err) => Err(err),
        }
    }
}

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::UserStore;
use crate::error::{Result, ServiceError};
use crate::models::User;

/// In-memory implementation of UserStore, lives as long as the process
#[derive(Default, Clone)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryUserStore {
    /// Creates a new empty in-memory user store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory user store with initial data
    pub fn with_data(initial_data: Vec<User>) -> Self {
        let users = initial_data
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();

        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Number of stored users
    pub fn len(&self) -> Result<usize> {
        let users = self
            .users
            .read()
            .map_err(|_| ServiceError::InternalError("Failed to acquire read lock".into()))?;
        Ok(users.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        self.len().map(|len| len == 0)
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert_user(&self, user: User) -> Result<User> {
        let mut users = self
            .users
            .write()
            .map_err(|_| ServiceError::InternalError("Failed to acquire write lock".into()))?;

        if users.contains_key(&user.id) {
            return Err(ServiceError::InternalError(format!(
                "User with ID {} already exists",
                user.id
            )));
        }

        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: &str) -> Result<User> {
        let users = self
            .users
            .read()
            .map_err(|_| ServiceError::InternalError("Failed to acquire read lock".into()))?;

        users
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }
}

use async_trait::async_trait;

use crate::error::Result;
use crate::models::User;

// In-process store implementation
pub mod memory;

/// UserStore trait defining the interface for user storage implementations
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Stores a new user; fails if the ID is already taken
    async fn insert_user(&self, user: User) -> Result<User>;

    /// Gets a user by ID
    async fn get_user(&self, id: &str) -> Result<User>;
}

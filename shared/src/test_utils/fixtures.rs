use chrono::Utc;

use crate::models::{CreateUserRequest, Role, User};

/// A request that passes every validation rule
pub fn valid_create_request() -> CreateUserRequest {
    CreateUserRequest {
        name: "Al".into(),
        email: "a@b.co".into(),
        age: 30,
        role: "user".into(),
    }
}

/// A stored user with the given ID
pub fn sample_user(id: &str) -> User {
    User {
        id: id.to_string(),
        name: format!("User {}", id),
        email: format!("{}@example.com", id),
        age: 42,
        role: Role::Guest,
        created_at: Utc::now(),
    }
}

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of user identifiers, injected into the service
pub trait IdGenerator: Send + Sync + 'static {
    fn next_id(&self) -> String;
}

/// `user_<uuid v4>`
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        format!("user_{}", Uuid::new_v4())
    }
}

/// `user_1`, `user_2`, ... from an atomic counter
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("user_{}", n)
    }
}

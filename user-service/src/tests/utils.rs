use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::Value;
use userapi_shared::{
    ids::SequentialIdGenerator, store::memory::MemoryUserStore, store::UserStore,
    test_utils::test_logging::init_test_logging,
};

use crate::config::Config;
use crate::routes::create_router_with_service;
use crate::service::UserService;

pub fn test_config() -> Config {
    Config::default()
}

/// Service over the given store, with predictable `user_N` IDs
pub fn test_service<S: UserStore>(store: Arc<S>) -> UserService<S> {
    UserService::new(store, Arc::new(SequentialIdGenerator::new()))
}

pub fn create_test_app_with_store<S: UserStore>(store: Arc<S>) -> Router {
    init_test_logging();
    create_router_with_service(test_service(store), &test_config())
}

// Helper for setting up a test router with an empty in-memory store
pub fn create_test_app() -> Router {
    create_test_app_with_store(Arc::new(MemoryUserStore::new()))
}

/// Builds a request with an optional JSON body
pub fn create_test_request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Builds a request with a raw body and no Content-Type
pub fn create_raw_request(method: &str, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(body.into())
        .unwrap()
}

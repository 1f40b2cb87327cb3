use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use chrono::Utc;
use mockall::mock;
use tower::ServiceExt;
use userapi_shared::{
    error::{Result, ServiceError},
    models::{Role, User},
    store::{memory::MemoryUserStore, UserStore},
    test_utils::{
        fixtures::{sample_user, valid_create_request},
        http_test_utils::response_to_json,
    },
};

use super::utils::{create_test_app_with_store, create_test_request, test_service};

mock! {
    pub Store {}

    #[async_trait]
    impl UserStore for Store {
        async fn insert_user(&self, user: User) -> Result<User>;
        async fn get_user(&self, id: &str) -> Result<User>;
    }
}

#[tokio::test]
async fn test_create_user_assigns_id_and_timestamp() {
    let store = Arc::new(MemoryUserStore::new());
    let service = test_service(Arc::clone(&store));
    let started = Utc::now();

    let user = service.create_user(valid_create_request()).await.unwrap();

    assert_eq!(user.id, "user_1");
    assert_eq!(user.name, "Al");
    assert_eq!(user.email, "a@b.co");
    assert_eq!(user.age, 30);
    assert_eq!(user.role, Role::User);
    assert!(user.created_at >= started);
    assert_eq!(store.get_user("user_1").await.unwrap(), user);
}

#[tokio::test]
async fn test_create_user_validation_failure_skips_store() {
    let mut store = MockStore::new();
    store.expect_insert_user().never();

    let service = test_service(Arc::new(store));
    let mut request = valid_create_request();
    request.age = 151;

    match service.create_user(request).await {
        Err(ServiceError::ValidationFailed(errors)) => {
            assert!(errors.has_field("age"));
            assert_eq!(errors.violations().len(), 1);
        }
        other => panic!("expected ValidationFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_user_empty_id_is_bad_request() {
    let mut store = MockStore::new();
    store.expect_get_user().never();

    let service = test_service(Arc::new(store));

    assert!(matches!(
        service.get_user("").await,
        Err(ServiceError::BadRequest(_))
    ));
}

#[tokio::test]
async fn test_get_user_not_found_carries_id() {
    let service = test_service(Arc::new(MemoryUserStore::new()));

    match service.get_user("ghost").await {
        Err(ServiceError::NotFound(id)) => assert_eq!(id, "ghost"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_id_collision_is_internal_and_keeps_existing_record() {
    let existing = sample_user("user_1");
    let store = Arc::new(MemoryUserStore::with_data(vec![existing.clone()]));
    let service = test_service(Arc::clone(&store));

    let result = service.create_user(valid_create_request()).await;

    assert!(matches!(result, Err(ServiceError::InternalError(_))));
    assert_eq!(store.get_user("user_1").await.unwrap(), existing);
}

#[tokio::test]
async fn test_store_failure_on_create_is_internal_error() {
    let mut store = MockStore::new();
    store
        .expect_insert_user()
        .times(1)
        .returning(|_| Err(ServiceError::InternalError("disk on fire".into())));

    let app = create_test_app_with_store(Arc::new(store));
    let response = app
        .oneshot(create_test_request(
            "POST",
            "/api/users",
            Some(serde_json::to_value(valid_create_request()).unwrap()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_to_json(response).await;
    assert_eq!(body["error_code"], "internal_error");
    // Store detail stays in the logs
    assert_eq!(body["message"], "Internal server error");
}

#[tokio::test]
async fn test_store_failure_on_get_is_internal_error() {
    let mut store = MockStore::new();
    store
        .expect_get_user()
        .times(1)
        .returning(|_| Err(ServiceError::InternalError("Failed to acquire read lock".into())));

    let app = create_test_app_with_store(Arc::new(store));
    let response = app
        .oneshot(create_test_request("GET", "/api/users/user_9", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_get_user_passes_id_through() {
    let mut store = MockStore::new();
    store
        .expect_get_user()
        .times(1)
        .returning(|id| Ok(sample_user(id)));

    let app = create_test_app_with_store(Arc::new(store));
    let response = app
        .oneshot(create_test_request("GET", "/api/users/user_42", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_to_json(response).await;
    assert_eq!(body["id"], "user_42");
    assert_eq!(body["role"], "guest");
}

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Request},
    http::{header, HeaderName, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use userapi_shared::{ids::UuidIdGenerator, store::memory::MemoryUserStore, store::UserStore};

use crate::config::Config;
use crate::handlers::{
    health_handlers::health,
    method_not_allowed, route_not_found,
    user_handlers::{create_user, get_user, missing_user_id},
    MAX_BODY_BYTES,
};
use crate::middleware::{
    handle_panic,
    request_id::{request_id_middleware, REQUEST_ID_HEADER},
};
use crate::service::UserService;

/// Creates a router backed by a fresh in-memory store
pub fn create_router(config: &Config) -> Router {
    tracing::info!("Creating router with in-memory store");

    let service = UserService::new(
        Arc::new(MemoryUserStore::new()),
        Arc::new(UuidIdGenerator),
    );

    create_router_with_service(service, config)
}

/// Creates a router around a given service; the store is up to the caller
pub fn create_router_with_service<S>(service: UserService<S>, config: &Config) -> Router
where
    S: UserStore,
{
    let api_routes = Router::new()
        .route(
            "/api/users",
            post(create_user::<S>).fallback(method_not_allowed),
        )
        .route("/api/users/", get(missing_user_id).fallback(method_not_allowed))
        .route(
            "/api/users/:id",
            get(get_user::<S>).fallback(method_not_allowed),
        )
        .route(
            "/api/users/:id/",
            get(get_user::<S>).fallback(method_not_allowed),
        )
        .route(
            "/api/users/:id/*rest",
            get(get_user::<S>).fallback(method_not_allowed),
        )
        .with_state(Arc::new(service));

    let router = Router::new()
        .route("/health", get(health))
        .merge(api_routes)
        .fallback(route_not_found);

    tracing::info!(
        origins = ?config.allowed_origins,
        timeout_secs = config.request_timeout.as_secs(),
        "Router configured"
    );

    // Layers run outside-in from the bottom: tracing opens the span the
    // request ID middleware records into, and panics are caught before
    // they reach either.
    router
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(cors_layer(&config.allowed_origins))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|req: &Request| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                request_id = tracing::field::Empty,
            )
        }))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}

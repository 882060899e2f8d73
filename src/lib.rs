pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::{
    middleware::from_fn,
    routing::{get, post, put},
    Router,
};
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir};
use tower_sessions::{
    cookie::{time::Duration, SameSite},
    Expiry, MemoryStore, SessionManagerLayer,
};

use crate::config::Config;
use crate::services::RedisService;

/// Builds the full application router: auth and task routes, static
/// assets, the session layer, and the auth gate.
pub fn app(redis_service: RedisService, config: Config) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_name(config.session.cookie_name.clone())
        .with_expiry(Expiry::OnInactivity(Duration::seconds(
            config.session.expiry_secs,
        )));

    let body_limit = config.server.request_body_limit;

    Router::new()
        // Auth routes
        .route("/register", post(handlers::handle_register))
        .route("/login", post(handlers::handle_login))
        .route("/logout", get(handlers::handle_logout))
        .route("/auth-status", get(handlers::auth_status))
        // Task routes
        .route("/submit", post(handlers::submit_task))
        .route("/tasks", get(handlers::list_tasks))
        .route(
            "/tasks/:task_id",
            put(handlers::update_task).delete(handlers::delete_task),
        )
        // Front-end assets served straight from disk
        .fallback_service(ServeDir::new("public"))
        // Session must wrap the auth gate, so it is the outer layer
        .layer(from_fn(middleware::require_auth))
        .layer(session_layer)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .with_state((redis_service, config))
}

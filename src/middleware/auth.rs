use axum::{
    body::Body,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::errors::AppError;
use crate::models::CurrentUser;

pub const SESSION_USER_KEY: &str = "user_session";

/// Paths that require a logged-in session. Everything else (register,
/// login, logout, auth-status, static assets) passes through.
fn is_protected(path: &str) -> bool {
    path == "/submit" || path == "/tasks" || path.starts_with("/tasks/")
}

/// Rejects unauthenticated requests to protected routes before any side
/// effect, and threads the resolved user into request extensions so
/// handlers never trust a client-supplied owner id.
pub async fn require_auth(session: Session, mut req: Request<Body>, next: Next) -> Response {
    if !is_protected(req.uri().path()) {
        return next.run(req).await;
    }

    match session.get::<CurrentUser>(SESSION_USER_KEY).await {
        Ok(Some(user)) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Ok(None) => AppError::Unauthorized.into_response(),
        Err(e) => {
            tracing::error!("Session resolution failed: {}", e);
            AppError::Unauthorized.into_response()
        }
    }
}

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower_sessions::Session;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::middleware::SESSION_USER_KEY;
use crate::models::{Credentials, CurrentUser, User};
use crate::services::{password, RedisService};

pub async fn handle_register(
    State((redis_service, config)): State<(RedisService, Config)>,
    Json(credentials): Json<Credentials>,
) -> AppResult<Response> {
    if credentials.username.trim().is_empty() {
        return Err(AppError::Validation("Username is required".into()));
    }
    if credentials.password.is_empty() {
        return Err(AppError::Validation("Password is required".into()));
    }

    let password_hash = password::hash(credentials.password, config.auth.bcrypt_cost).await?;
    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        username: credentials.username,
        password_hash,
    };

    // SET NX in the store is the uniqueness check, so a racing duplicate
    // registration loses cleanly instead of overwriting.
    if !redis_service.create_user(&user).await? {
        tracing::info!("Registration rejected, username taken: {}", user.username);
        return Err(AppError::DuplicateUsername);
    }

    tracing::info!("Registered user: {}", user.username);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully" })),
    )
        .into_response())
}

#[axum::debug_handler]
pub async fn handle_login(
    State((redis_service, _)): State<(RedisService, Config)>,
    session: Session,
    Json(credentials): Json<Credentials>,
) -> AppResult<Response> {
    tracing::info!("Login attempt for user: {}", credentials.username);

    // Unknown usernames and wrong passwords fail identically so the
    // response never reveals whether an account exists.
    let user = redis_service
        .get_user(&credentials.username)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !password::verify(credentials.password, user.password_hash.clone()).await? {
        tracing::info!("Invalid password for user: {}", credentials.username);
        return Err(AppError::InvalidCredentials);
    }

    let current_user = CurrentUser::from(&user);
    session.insert(SESSION_USER_KEY, current_user.clone()).await?;

    tracing::info!("Logged in user: {}", current_user.username);
    Ok(Json(json!({
        "message": "Logged in successfully",
        "user": current_user,
    }))
    .into_response())
}

/// Idempotent: flushing an absent session is still a 200.
#[axum::debug_handler]
pub async fn handle_logout(session: Session) -> AppResult<Response> {
    session.flush().await?;
    Ok(Json(json!({ "message": "Logged out successfully" })).into_response())
}

/// Public probe the front end polls to decide which view to render.
#[axum::debug_handler]
pub async fn auth_status(session: Session) -> AppResult<Response> {
    match session.get::<CurrentUser>(SESSION_USER_KEY).await? {
        Some(user) => Ok(Json(json!({
            "loggedIn": true,
            "user": { "username": user.username },
        }))
        .into_response()),
        None => Ok(Json(json!({ "loggedIn": false })).into_response()),
    }
}

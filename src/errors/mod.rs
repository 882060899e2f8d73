// Custom error type and result alias for the service, built on thiserror.
use thiserror::Error;

pub mod response;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Unauthorized - Please log in")]
    Unauthorized,

    #[error("Task not found")]
    TaskNotFound,

    #[error("{0}")]
    Validation(String),

    // The #[from] attribute converts a redis::RedisError into AppError::Redis
    // via the From trait, so store calls can use `?` directly.
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Password hashing error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Blocking task error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;

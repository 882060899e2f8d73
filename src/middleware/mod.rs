mod auth;

pub use auth::{require_auth, SESSION_USER_KEY};

use serde::{Deserialize, Serialize};

/// Stored user record. The password hash stays server-side; responses
/// only ever carry `CurrentUser`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password_hash: String,
}

/// Session payload for a logged-in user. Inserted by the login handler,
/// resolved by the auth middleware and threaded into protected handlers
/// through request extensions.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
        }
    }
}

//! Password hashing with bcrypt.
//!
//! bcrypt is deliberately slow, so both operations run on the blocking
//! thread pool instead of the async runtime.

use crate::errors::AppResult;

/// Salted one-way hash with the configured cost factor.
pub async fn hash(password: String, cost: u32) -> AppResult<String> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password.as_bytes(), cost))
        .await??;
    Ok(hashed)
}

/// Verifies a password against a stored hash.
pub async fn verify(password: String, stored_hash: String) -> AppResult<bool> {
    let matches =
        tokio::task::spawn_blocking(move || bcrypt::verify(password.as_bytes(), &stored_hash))
            .await??;
    Ok(matches)
}

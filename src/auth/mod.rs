//! Password hashing for registered users.
//!
//! Hashes are Argon2id PHC strings with a random salt; no sessions or tokens are issued.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::AppError;

/// Argon2id hash computed on the blocking pool.
pub async fn hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash(&password))
        .await
        .map_err(join_failed)?
}

/// `Ok(false)` for a wrong password and for a stored hash that cannot be parsed.
pub async fn verify_password(hash: String, password: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify(&hash, &password))
        .await
        .map_err(join_failed)
}

fn join_failed(e: tokio::task::JoinError) -> AppError {
    tracing::error!("Password task failed: {}", e);
    AppError::Internal(format!("Password task failed: {}", e))
}

fn hash(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!("Password hashing failed: {}", e);
            AppError::Internal(format!("Password hashing failed: {}", e))
        })
}

fn verify(hash: &str, password: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!("Stored password hash is unreadable: {}", e);
            false
        }
    }
}

//! bcrypt hashing on the blocking thread pool.

use crate::error::AppError;

/// Hashes a plaintext password with a fresh salt at the given cost.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if hashing fails or the worker is lost.
pub async fn hash_password(plain: String, cost: u32) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))
}

/// Compares a plaintext password with a stored bcrypt hash.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the stored hash is malformed or the
/// worker is lost.
pub async fn verify_password(plain: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hash))
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Failed to verify password: {e}")))
}

//! Password hashing (Argon2id) and strength rules

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 128;

/// Hash a password with a fresh random salt
///
/// # Errors
/// Returns an internal error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Check a password against a stored PHC hash string
///
/// # Errors
/// Returns an internal error if the stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Reject passwords that are too short, too long, entirely numeric, or
/// missing either a letter or a digit.
///
/// # Errors
/// Returns `AppError::Validation` naming the first rule broken
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    let len = password.chars().count();
    if len < MIN_LENGTH {
        return Err(AppError::validation(format!(
            "Password must be at least {MIN_LENGTH} characters long"
        )));
    }
    if len > MAX_LENGTH {
        return Err(AppError::validation(format!(
            "Password must be at most {MAX_LENGTH} characters long"
        )));
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::validation("Password cannot be entirely numeric"));
    }
    if !password.chars().any(char::is_alphabetic) {
        return Err(AppError::validation("Password must contain at least one letter"));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::validation("Password must contain at least one digit"));
    }
    Ok(())
}

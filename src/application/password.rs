use sha2::{Digest, Sha256};

use crate::app_error::{AppError, AppResult};

/// Stored format: `<hex salt>$<hex sha256(salt || password)>`.
pub fn hash_password(password: &str) -> String {
    let salt = generate_salt();
    format!("{}${}", salt, digest(&salt, password))
}

pub fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, hash)) => digest(salt, password) == hash,
        None => false,
    }
}

/// Minimal password policy; detailed rules belong to the client.
pub fn check_password_strength(password: &str) -> AppResult<()> {
    if password.len() < 8 {
        return Err(AppError::validation(
            "password",
            "Password must be at least 8 characters",
        ));
    }
    Ok(())
}

fn generate_salt() -> String {
    use rand::RngCore;
    let mut bytes = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

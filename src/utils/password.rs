use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tracing::warn;

use super::app_error::AppError;

/// Hash a password with Argon2id and a fresh random salt, returns a PHC string
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            warn!("Error hashing password : {e}");
            AppError::InternalServerError
        })
}

/// Check `password` against a PHC hash. A hash that cannot be parsed never matches.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(password_hash) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Invalid password hash in database : {e}");
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_the_right_password_only() {
        let hash = hash_password("testpassword").unwrap();

        assert!(verify_password("testpassword", &hash));
        assert!(!verify_password("wrongpassword", &hash));
    }

    #[test]
    fn hashes_are_salted() {
        let first = hash_password("testpassword").unwrap();
        let second = hash_password("testpassword").unwrap();

        assert_ne!(first, second);
        assert!(first.starts_with("$argon2id$"));
    }

    #[test]
    fn malformed_hash_never_matches() {
        assert!(!verify_password("testpassword", "not a phc string"));
        assert!(!verify_password("", ""));
    }
}

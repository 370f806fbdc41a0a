//! bcrypt on Tokio's blocking pool. A hash at cost 10 takes tens of milliseconds of CPU.

use super::RegistrationError;
use tracing::debug;

/// Derives a salted bcrypt hash of `password`.
pub async fn hash_password(password: String, cost: u32) -> Result<String, RegistrationError> {
    debug!(cost, "Hashing password");
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| RegistrationError::Hashing(e.to_string()))?
        .map_err(|e| RegistrationError::Hashing(e.to_string()))
}

/// Checks `password` against a stored bcrypt hash.
pub async fn verify_password(password: String, hash: String) -> Result<bool, RegistrationError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| RegistrationError::Hashing(e.to_string()))?
        .map_err(|e| RegistrationError::Hashing(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_is_salted_and_verifies() {
        let first = hash_password("hunter22".into(), 4).await.unwrap();
        let second = hash_password("hunter22".into(), 4).await.unwrap();

        assert_ne!(first, "hunter22");
        assert_ne!(first, second);
        assert!(verify_password("hunter22".into(), first.clone()).await.unwrap());
        assert!(!verify_password("hunter23".into(), first).await.unwrap());
    }

    #[tokio::test]
    async fn test_invalid_cost_is_an_error() {
        let result = hash_password("hunter22".into(), 2).await;
        assert!(matches!(result, Err(RegistrationError::Hashing(_))));
    }
}

//! Password hashing behind the credential store

use std::fmt;

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Argon2,
};

use crate::domain::DomainError;

/// One-way salted hashing with verification
pub trait PasswordHasher: Send + Sync + fmt::Debug {
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Check a candidate against a stored digest. Unparsable digests
    /// verify as false; login must not reveal which part failed.
    fn verify(&self, password: &str, digest: &str) -> bool;
}

/// Argon2 with the stack's default parameters, fresh salt per hash
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Argon2Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Argon2Hasher")
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        let digest = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))?;

        Ok(digest.to_string())
    }

    fn verify(&self, password: &str, digest: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(digest) else {
            return false;
        };

        self.argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_accepts_only_the_original_password() {
        let hasher = Argon2Hasher::new();

        let digest = hasher.hash("Secret123").unwrap();

        assert!(hasher.verify("Secret123", &digest));
        assert!(!hasher.verify("Secret124", &digest));
        assert!(!hasher.verify("", &digest));
    }

    #[test]
    fn test_salting_makes_digests_differ() {
        let hasher = Argon2Hasher::new();

        let first = hasher.hash("Secret123").unwrap();
        let second = hasher.hash("Secret123").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("Secret123", &first));
        assert!(hasher.verify("Secret123", &second));
    }

    #[test]
    fn test_digest_is_phc_encoded() {
        let hasher = Argon2Hasher::new();

        let digest = hasher.hash("Secret123").unwrap();

        assert!(digest.starts_with("$argon2"));
    }

    #[test]
    fn test_garbage_digest_never_verifies() {
        let hasher = Argon2Hasher::new();

        assert!(!hasher.verify("Secret123", "not-a-digest"));
        assert!(!hasher.verify("Secret123", ""));
    }
}

//! Account entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// Store-assigned primary key for accounts and profiles.
pub type AccountId = i64;

/// Side of the marketplace an account belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Musician,
    Venue,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Musician => "musician",
            Self::Venue => "venue",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "musician" => Ok(Self::Musician),
            "venue" => Ok(Self::Venue),
            other => Err(DomainError::storage(format!(
                "Unknown account role '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered account
#[derive(Debug, Clone)]
pub struct Account {
    /// Store-assigned identifier
    id: AccountId,
    /// Login email, unique and case-sensitive as stored
    email: String,
    /// Argon2 password hash - never exposed to clients
    password_hash: String,
    /// Marketplace side chosen at registration, immutable afterwards
    role: Role,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(
        id: AccountId,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            password_hash: password_hash.into(),
            role,
            created_at,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Fields for an account insert; the store assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_as_str_round_trip() {
        assert_eq!("musician".parse::<Role>().unwrap(), Role::Musician);
        assert_eq!("venue".parse::<Role>().unwrap(), Role::Venue);
        assert_eq!(Role::Musician.as_str(), "musician");
        assert_eq!(Role::Venue.as_str(), "venue");
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!("promoter".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
        // Closed enum: casing matters
        assert!("Musician".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Venue).unwrap(), "\"venue\"");
        let parsed: Role = serde_json::from_str("\"musician\"").unwrap();
        assert_eq!(parsed, Role::Musician);
    }

    #[test]
    fn test_account_never_serializes() {
        // Account carries the hash; responses are built from explicit
        // public-field structs instead of serializing the entity.
        let account = Account::new(
            1,
            "a@b.com",
            "$argon2id$stub",
            Role::Musician,
            Utc::now(),
        );
        assert_eq!(account.id(), 1);
        assert_eq!(account.email(), "a@b.com");
        assert_eq!(account.password_hash(), "$argon2id$stub");
        assert_eq!(account.role(), Role::Musician);
    }
}

//! Account repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Account, AccountId, NewAccount};
use crate::domain::DomainError;

/// Repository trait for the credential store
#[async_trait]
pub trait AccountRepository: Send + Sync + Debug {
    /// Get an account by its id
    async fn get(&self, id: AccountId) -> Result<Option<Account>, DomainError>;

    /// Get an account by its email (for login and the registration pre-check)
    async fn get_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Insert a new account and return it with the store-assigned id.
    ///
    /// The store enforces email uniqueness; a duplicate insert surfaces
    /// as a conflict even when the pre-check raced another request.
    async fn create(&self, account: NewAccount) -> Result<Account, DomainError>;

    /// Check whether an email is already registered
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_email(email).await?.is_some())
    }
}

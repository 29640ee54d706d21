//! Session store trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::Session;
use crate::domain::account::{AccountId, Role};
use crate::domain::DomainError;

/// Server-held session state keyed by an opaque token.
///
/// Every protected operation goes through `resolve`; callers must treat
/// an absent result as an authentication failure.
#[async_trait]
pub trait SessionStore: Send + Sync + Debug {
    /// Allocate an unguessable token and remember the identity behind it.
    async fn create(&self, account_id: AccountId, role: Role) -> Result<String, DomainError>;

    /// Look up a token. Expired entries are removed and reported absent.
    async fn resolve(&self, token: &str) -> Result<Option<Session>, DomainError>;

    /// Remove a session. Removing an unknown token is not an error, so
    /// logout stays idempotent.
    async fn destroy(&self, token: &str) -> Result<(), DomainError>;

    /// Drop every expired entry, returning how many were removed.
    async fn purge_expired(&self) -> Result<usize, DomainError>;
}

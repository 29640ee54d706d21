//! Profile repository traits

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{MusicianProfile, ProfileId, VenueProfile};
use super::payload::{NewMusicianProfile, NewVenueProfile};
use crate::domain::account::AccountId;
use crate::domain::DomainError;

/// Repository trait for musician profile rows.
///
/// The store holds at most one row per account, enforced by a unique
/// index; a racing duplicate insert surfaces as a conflict.
#[async_trait]
pub trait MusicianProfileRepository: Send + Sync + Debug {
    /// Get a profile row by its own id (public lookup)
    async fn get(&self, id: ProfileId) -> Result<Option<MusicianProfile>, DomainError>;

    /// Get the profile owned by an account
    async fn get_by_account(
        &self,
        account_id: AccountId,
    ) -> Result<Option<MusicianProfile>, DomainError>;

    /// Insert a new profile row and return it with store-assigned fields
    async fn create(&self, profile: NewMusicianProfile)
        -> Result<MusicianProfile, DomainError>;

    /// Replace the field set of the account's existing row.
    ///
    /// Returns `None` when the account has no row to update.
    async fn update(
        &self,
        profile: NewMusicianProfile,
    ) -> Result<Option<MusicianProfile>, DomainError>;

    /// Check whether an account already owns a profile
    async fn exists(&self, account_id: AccountId) -> Result<bool, DomainError> {
        Ok(self.get_by_account(account_id).await?.is_some())
    }
}

/// Repository trait for venue profile rows.
#[async_trait]
pub trait VenueProfileRepository: Send + Sync + Debug {
    /// Get a profile row by its own id (public lookup)
    async fn get(&self, id: ProfileId) -> Result<Option<VenueProfile>, DomainError>;

    /// Get the profile owned by an account
    async fn get_by_account(
        &self,
        account_id: AccountId,
    ) -> Result<Option<VenueProfile>, DomainError>;

    /// Insert a new profile row and return it with store-assigned fields
    async fn create(&self, profile: NewVenueProfile) -> Result<VenueProfile, DomainError>;

    /// Replace the field set of the account's existing row.
    ///
    /// Returns `None` when the account has no row to update.
    async fn update(
        &self,
        profile: NewVenueProfile,
    ) -> Result<Option<VenueProfile>, DomainError>;

    /// Check whether an account already owns a profile
    async fn exists(&self, account_id: AccountId) -> Result<bool, DomainError> {
        Ok(self.get_by_account(account_id).await?.is_some())
    }
}

//! Profile service for role-scoped profile CRUD

use std::sync::Arc;

use crate::domain::account::{AccountId, Role};
use crate::domain::profile::{
    validate_musician_data, validate_venue_data, MusicianProfile, MusicianProfileRepository,
    NewMusicianProfile, NewVenueProfile, Profile, ProfileId, ProfilePayload, VenueProfile,
    VenueProfileRepository,
};
use crate::domain::DomainError;

fn no_profile_error(role: Role) -> DomainError {
    DomainError::not_found(format!(
        "No {} profile found. Please create your profile first.",
        role
    ))
}

/// Profile service over both profile stores
#[derive(Debug)]
pub struct ProfileService<M: MusicianProfileRepository, V: VenueProfileRepository> {
    musicians: Arc<M>,
    venues: Arc<V>,
}

impl<M: MusicianProfileRepository, V: VenueProfileRepository> ProfileService<M, V> {
    /// Create a new profile service
    pub fn new(musicians: Arc<M>, venues: Arc<V>) -> Self {
        Self { musicians, venues }
    }

    /// Create the musician profile for an account.
    ///
    /// The existence check runs before validation, so an account that
    /// already owns a profile gets the conflict even for a payload
    /// that would not validate.
    pub async fn create_musician_profile(
        &self,
        account_id: AccountId,
        payload: &ProfilePayload,
    ) -> Result<MusicianProfile, DomainError> {
        if self.musicians.exists(account_id).await? {
            return Err(DomainError::conflict("user already has a musician profile"));
        }

        let report = validate_musician_data(payload);
        if !report.is_valid() {
            return Err(DomainError::validation(report.errors));
        }

        let new_profile = NewMusicianProfile::from_payload(account_id, payload)?;
        let created = self.musicians.create(new_profile).await?;

        tracing::info!(account_id, profile_id = created.id, "Musician profile created");

        Ok(created)
    }

    /// Create the venue profile for an account
    pub async fn create_venue_profile(
        &self,
        account_id: AccountId,
        payload: &ProfilePayload,
    ) -> Result<VenueProfile, DomainError> {
        if self.venues.exists(account_id).await? {
            return Err(DomainError::conflict("User already has a venue profile"));
        }

        let report = validate_venue_data(payload);
        if !report.is_valid() {
            return Err(DomainError::validation(report.errors));
        }

        let new_profile = NewVenueProfile::from_payload(account_id, payload)?;
        let created = self.venues.create(new_profile).await?;

        tracing::info!(account_id, profile_id = created.id, "Venue profile created");

        Ok(created)
    }

    /// Get the profile owned by the authenticated account. The role
    /// comes from the session and selects which store to read.
    pub async fn current_profile(
        &self,
        account_id: AccountId,
        role: Role,
    ) -> Result<Profile, DomainError> {
        match role {
            Role::Musician => self
                .musician_by_account(account_id)
                .await?
                .map(Profile::Musician)
                .ok_or_else(|| no_profile_error(role)),
            Role::Venue => self
                .venue_by_account(account_id)
                .await?
                .map(Profile::Venue)
                .ok_or_else(|| no_profile_error(role)),
        }
    }

    /// Replace the authenticated account's profile with a freshly
    /// validated payload. Fails when no profile exists yet; update
    /// never creates.
    pub async fn update_current_profile(
        &self,
        account_id: AccountId,
        role: Role,
        payload: &ProfilePayload,
    ) -> Result<Profile, DomainError> {
        match role {
            Role::Musician => {
                let report = validate_musician_data(payload);
                if !report.is_valid() {
                    return Err(DomainError::validation(report.errors));
                }

                let new_profile = NewMusicianProfile::from_payload(account_id, payload)?;
                self.musicians
                    .update(new_profile)
                    .await?
                    .map(Profile::Musician)
                    .ok_or_else(|| no_profile_error(role))
            }
            Role::Venue => {
                let report = validate_venue_data(payload);
                if !report.is_valid() {
                    return Err(DomainError::validation(report.errors));
                }

                let new_profile = NewVenueProfile::from_payload(account_id, payload)?;
                self.venues
                    .update(new_profile)
                    .await?
                    .map(Profile::Venue)
                    .ok_or_else(|| no_profile_error(role))
            }
        }
    }

    /// Unauthenticated read of a single profile by id. The id alone
    /// does not say which kind of profile it names; musicians are
    /// checked first, then venues.
    pub async fn public_profile(&self, id: ProfileId) -> Result<Profile, DomainError> {
        if let Some(profile) = self.musician_by_id(id).await? {
            return Ok(Profile::Musician(profile));
        }

        if let Some(profile) = self.venue_by_id(id).await? {
            return Ok(Profile::Venue(profile));
        }

        Err(DomainError::not_found("Profile not found"))
    }

    // Reads are retried once when the store times out; writes never are.

    async fn musician_by_account(
        &self,
        account_id: AccountId,
    ) -> Result<Option<MusicianProfile>, DomainError> {
        match self.musicians.get_by_account(account_id).await {
            Err(e) if e.is_transient() => self.musicians.get_by_account(account_id).await,
            result => result,
        }
    }

    async fn venue_by_account(
        &self,
        account_id: AccountId,
    ) -> Result<Option<VenueProfile>, DomainError> {
        match self.venues.get_by_account(account_id).await {
            Err(e) if e.is_transient() => self.venues.get_by_account(account_id).await,
            result => result,
        }
    }

    async fn musician_by_id(&self, id: ProfileId) -> Result<Option<MusicianProfile>, DomainError> {
        match self.musicians.get(id).await {
            Err(e) if e.is_transient() => self.musicians.get(id).await,
            result => result,
        }
    }

    async fn venue_by_id(&self, id: ProfileId) -> Result<Option<VenueProfile>, DomainError> {
        match self.venues.get(id).await {
            Err(e) if e.is_transient() => self.venues.get(id).await,
            result => result,
        }
    }
}

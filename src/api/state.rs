//! Application state for shared services

use std::sync::Arc;

use crate::api::cookie::CookieSettings;
use crate::domain::account::{AccountId, AccountRepository, Role};
use crate::domain::profile::{
    MusicianProfile, MusicianProfileRepository, Profile, ProfileId, ProfilePayload, VenueProfile,
    VenueProfileRepository,
};
use crate::domain::session::SessionStore;
use crate::domain::DomainError;
use crate::infrastructure::auth::{
    AuthService, AuthenticatedAccount, PasswordHasher, RegisterRequest,
};
use crate::infrastructure::profile::ProfileService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServiceTrait>,
    pub profile_service: Arc<dyn ProfileServiceTrait>,
    pub sessions: Arc<dyn SessionStore>,
    pub cookies: CookieSettings,
}

/// Trait for auth service operations
#[async_trait::async_trait]
pub trait AuthServiceTrait: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<AuthenticatedAccount, DomainError>;
    async fn login(&self, email: &str, password: &str)
        -> Result<AuthenticatedAccount, DomainError>;
    async fn logout(&self, token: &str) -> Result<(), DomainError>;
}

/// Trait for profile service operations
#[async_trait::async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    async fn create_musician_profile(
        &self,
        account_id: AccountId,
        payload: &ProfilePayload,
    ) -> Result<MusicianProfile, DomainError>;
    async fn create_venue_profile(
        &self,
        account_id: AccountId,
        payload: &ProfilePayload,
    ) -> Result<VenueProfile, DomainError>;
    async fn current_profile(
        &self,
        account_id: AccountId,
        role: Role,
    ) -> Result<Profile, DomainError>;
    async fn update_current_profile(
        &self,
        account_id: AccountId,
        role: Role,
        payload: &ProfilePayload,
    ) -> Result<Profile, DomainError>;
    async fn public_profile(&self, id: ProfileId) -> Result<Profile, DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl<R, H, S> AuthServiceTrait for AuthService<R, H, S>
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
    S: SessionStore + 'static,
{
    async fn register(&self, request: RegisterRequest) -> Result<AuthenticatedAccount, DomainError> {
        AuthService::register(self, request).await
    }

    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedAccount, DomainError> {
        AuthService::login(self, email, password).await
    }

    async fn logout(&self, token: &str) -> Result<(), DomainError> {
        AuthService::logout(self, token).await
    }
}

#[async_trait::async_trait]
impl<M, V> ProfileServiceTrait for ProfileService<M, V>
where
    M: MusicianProfileRepository + 'static,
    V: VenueProfileRepository + 'static,
{
    async fn create_musician_profile(
        &self,
        account_id: AccountId,
        payload: &ProfilePayload,
    ) -> Result<MusicianProfile, DomainError> {
        ProfileService::create_musician_profile(self, account_id, payload).await
    }

    async fn create_venue_profile(
        &self,
        account_id: AccountId,
        payload: &ProfilePayload,
    ) -> Result<VenueProfile, DomainError> {
        ProfileService::create_venue_profile(self, account_id, payload).await
    }

    async fn current_profile(
        &self,
        account_id: AccountId,
        role: Role,
    ) -> Result<Profile, DomainError> {
        ProfileService::current_profile(self, account_id, role).await
    }

    async fn update_current_profile(
        &self,
        account_id: AccountId,
        role: Role,
        payload: &ProfilePayload,
    ) -> Result<Profile, DomainError> {
        ProfileService::update_current_profile(self, account_id, role, payload).await
    }

    async fn public_profile(&self, id: ProfileId) -> Result<Profile, DomainError> {
        ProfileService::public_profile(self, id).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        auth_service: Arc<dyn AuthServiceTrait>,
        profile_service: Arc<dyn ProfileServiceTrait>,
        sessions: Arc<dyn SessionStore>,
        cookies: CookieSettings,
    ) -> Self {
        Self {
            auth_service,
            profile_service,
            sessions,
            cookies,
        }
    }
}

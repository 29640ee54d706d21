//! Auth service for registration, login and logout

use std::sync::Arc;

use crate::domain::account::{
    validate_registration, Account, AccountRepository, NewAccount, Role,
};
use crate::domain::session::SessionStore;
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Request for registering a new account
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// An account together with the session token opened for it
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub account: Account,
    pub token: String,
}

/// Auth service for account lifecycle and session establishment
#[derive(Debug)]
pub struct AuthService<R: AccountRepository, H: PasswordHasher, S: SessionStore> {
    accounts: Arc<R>,
    hasher: Arc<H>,
    sessions: Arc<S>,
}

impl<R: AccountRepository, H: PasswordHasher, S: SessionStore> AuthService<R, H, S> {
    /// Create a new auth service
    pub fn new(accounts: Arc<R>, hasher: Arc<H>, sessions: Arc<S>) -> Self {
        Self {
            accounts,
            hasher,
            sessions,
        }
    }

    /// Register a new account and open a session for it
    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> Result<AuthenticatedAccount, DomainError> {
        let report = validate_registration(&request.email, &request.password);
        if !report.is_valid() {
            return Err(DomainError::validation(report.errors));
        }

        // Pre-check gives the common case a clean error; the unique
        // index on email still decides the race.
        if self.accounts.email_exists(&request.email).await? {
            return Err(DomainError::conflict("User already exists"));
        }

        let password_hash = self.hasher.hash(&request.password)?;

        let account = self
            .accounts
            .create(NewAccount {
                email: request.email,
                password_hash,
                role: request.role,
            })
            .await?;

        let token = self.sessions.create(account.id(), account.role()).await?;

        tracing::info!(account_id = account.id(), role = %account.role(), "Account registered");

        Ok(AuthenticatedAccount { account, token })
    }

    /// Authenticate with email and password and open a session.
    ///
    /// Unknown email and wrong password fail identically so responses
    /// cannot be used to probe which emails are registered.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedAccount, DomainError> {
        let account = match self.lookup_by_email(email).await? {
            Some(account) => account,
            None => return Err(DomainError::InvalidCredentials),
        };

        if !self.hasher.verify(password, account.password_hash()) {
            return Err(DomainError::InvalidCredentials);
        }

        let token = self.sessions.create(account.id(), account.role()).await?;

        tracing::info!(account_id = account.id(), "Login succeeded");

        Ok(AuthenticatedAccount { account, token })
    }

    /// Destroy the session behind a token. Logging out an already-dead
    /// token succeeds.
    pub async fn logout(&self, token: &str) -> Result<(), DomainError> {
        self.sessions.destroy(token).await
    }

    // Reads are retried once when the store times out; writes never are.
    async fn lookup_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        match self.accounts.get_by_email(email).await {
            Err(e) if e.is_transient() => self.accounts.get_by_email(email).await,
            result => result,
        }
    }
}

//! In-memory session store
//!
//! Sessions live in server memory for their whole lifetime, so a token
//! can always be revoked by deleting the entry. Expired entries are
//! dropped lazily on lookup and in bulk by the periodic sweeper.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::Utc;
use rand::RngCore;
use tokio::sync::RwLock;

use crate::domain::account::{AccountId, Role};
use crate::domain::session::{Session, SessionStore};
use crate::domain::DomainError;

const TOKEN_BYTES: usize = 32;

fn generate_token() -> String {
    let mut random_bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut random_bytes);

    URL_SAFE_NO_PAD.encode(random_bytes)
}

/// Session store backed by a shared in-process map
#[derive(Debug)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    ttl: chrono::Duration,
}

impl InMemorySessionStore {
    /// Create a store whose sessions expire `ttl` after creation.
    ///
    /// The expiry is absolute. Activity on a session does not extend it.
    pub fn new(ttl: chrono::Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Create a store from a whole-hours lifetime
    pub fn with_ttl_hours(hours: u64) -> Self {
        Self::new(chrono::Duration::hours(hours as i64))
    }

    /// Number of live entries, counting expired ones not yet swept
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, account_id: AccountId, role: Role) -> Result<String, DomainError> {
        let token = generate_token();
        let session = Session {
            account_id,
            role,
            expires_at: Utc::now() + self.ttl,
        };

        let mut sessions = self.sessions.write().await;
        sessions.insert(token.clone(), session);

        Ok(token)
    }

    async fn resolve(&self, token: &str) -> Result<Option<Session>, DomainError> {
        let now = Utc::now();

        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(session) if !session.is_expired_at(now) => return Ok(Some(*session)),
                Some(_) => {}
                None => return Ok(None),
            }
        }

        // Entry was present but stale; drop it under the write lock.
        let mut sessions = self.sessions.write().await;
        if sessions
            .get(token)
            .is_some_and(|session| session.is_expired_at(now))
        {
            sessions.remove(token);
        }

        Ok(None)
    }

    async fn destroy(&self, token: &str) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);

        Ok(())
    }

    async fn purge_expired(&self) -> Result<usize, DomainError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired_at(now));

        Ok(before - sessions.len())
    }
}

/// Spawn a background task that sweeps expired sessions on a fixed
/// interval. The task runs for the life of the process.
pub fn spawn_expiry_sweeper(
    store: Arc<dyn SessionStore>,
    sweep_interval: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(sweep_interval);
        // The first tick fires immediately; skip it so a fresh server
        // does not sweep an empty map.
        interval.tick().await;

        loop {
            interval.tick().await;

            match store.purge_expired().await {
                Ok(0) => {}
                Ok(removed) => {
                    tracing::debug!(removed, "Swept expired sessions");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Session sweep failed");
                }
            }
        }
    })
}

//! BandMate API
//!
//! A two-sided marketplace connecting musicians and venues:
//! - Cookie-based session authentication (register, login, logout)
//! - Role-scoped musician and venue profiles with ordered validation
//! - Unauthenticated public profile lookup by id

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;

use api::cookie::CookieSettings;
use api::state::AppState;
use infrastructure::account::PostgresAccountRepository;
use infrastructure::auth::{Argon2Hasher, AuthService};
use infrastructure::profile::{
    PostgresMusicianProfileRepository, PostgresVenueProfileRepository, ProfileService,
};
use infrastructure::session::{spawn_expiry_sweeper, InMemorySessionStore};

/// Create the application state over an established connection pool.
///
/// Also spawns the background task that sweeps expired sessions, so
/// this must run inside a tokio runtime.
pub fn create_app_state_with_config(config: &AppConfig, pool: PgPool) -> AppState {
    let query_timeout = Duration::from_secs(config.database.query_timeout_secs);

    let accounts = Arc::new(PostgresAccountRepository::new(pool.clone(), query_timeout));
    let musicians = Arc::new(PostgresMusicianProfileRepository::new(
        pool.clone(),
        query_timeout,
    ));
    let venues = Arc::new(PostgresVenueProfileRepository::new(pool, query_timeout));

    let hasher = Arc::new(Argon2Hasher::new());
    let sessions = Arc::new(InMemorySessionStore::with_ttl_hours(
        config.session.ttl_hours,
    ));

    spawn_expiry_sweeper(
        sessions.clone(),
        Duration::from_secs(config.session.sweep_interval_secs),
    );

    AppState::new(
        Arc::new(AuthService::new(accounts, hasher, sessions.clone())),
        Arc::new(ProfileService::new(musicians, venues)),
        sessions,
        CookieSettings::from_config(&config.session),
    )
}

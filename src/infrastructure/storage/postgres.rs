//! PostgreSQL connection pooling

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;
use crate::domain::DomainError;

/// Build the shared connection pool.
///
/// Connections are request scoped: handlers check one out per store
/// call and return it when the call finishes. Acquisition is bounded by
/// `acquire_timeout_secs` so an exhausted pool queues briefly and then
/// errors instead of hanging callers.
pub async fn connect_pool(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name);

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect_with(options)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))
}

/// Classify a sqlx error from a store call.
///
/// Unique-index violations become conflicts carrying the given message;
/// everything else is a storage failure.
pub fn map_insert_error(e: sqlx::Error, conflict_message: &str) -> DomainError {
    let msg = e.to_string();

    if msg.contains("duplicate key") || msg.contains("unique constraint") {
        DomainError::conflict(conflict_message)
    } else {
        DomainError::storage(format!("Insert failed: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_maps_to_conflict() {
        let e = sqlx::Error::Protocol(
            "duplicate key value violates unique constraint \"musician_profiles_user_id_key\""
                .to_string(),
        );
        let mapped = map_insert_error(e, "user already has a musician profile");
        assert!(matches!(mapped, DomainError::Conflict { .. }));
        assert_eq!(
            mapped.to_string(),
            "Conflict: user already has a musician profile"
        );
    }

    #[test]
    fn test_other_errors_map_to_storage() {
        let e = sqlx::Error::Protocol("connection reset by peer".to_string());
        let mapped = map_insert_error(e, "unused");
        assert!(matches!(mapped, DomainError::Storage { .. }));
    }
}

//! PostgreSQL account repository implementation

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tokio::time::timeout;

use crate::domain::account::{Account, AccountId, AccountRepository, NewAccount};
use crate::domain::DomainError;
use crate::infrastructure::storage::map_insert_error;

/// PostgreSQL implementation of AccountRepository.
///
/// Every query runs under a bounded timeout; expiry surfaces as a
/// retryable `Unavailable` instead of a hung request.
#[derive(Debug, Clone)]
pub struct PostgresAccountRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresAccountRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

fn timed_out(_: tokio::time::error::Elapsed) -> DomainError {
    DomainError::unavailable("Credential store call timed out")
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn get(&self, id: AccountId) -> Result<Option<Account>, DomainError> {
        let row = timeout(
            self.query_timeout,
            sqlx::query(
                r#"
                SELECT id, email, password_hash, role, created_at
                FROM users
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await
        .map_err(timed_out)?
        .map_err(|e| DomainError::storage(format!("Failed to get account: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let row = timeout(
            self.query_timeout,
            sqlx::query(
                r#"
                SELECT id, email, password_hash, role, created_at
                FROM users
                WHERE email = $1
                "#,
            )
            .bind(email)
            .fetch_optional(&self.pool),
        )
        .await
        .map_err(timed_out)?
        .map_err(|e| DomainError::storage(format!("Failed to get account by email: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, account: NewAccount) -> Result<Account, DomainError> {
        let row = timeout(
            self.query_timeout,
            sqlx::query(
                r#"
                INSERT INTO users (email, password_hash, role)
                VALUES ($1, $2, $3)
                RETURNING id, email, password_hash, role, created_at
                "#,
            )
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(account.role.as_str())
            .fetch_one(&self.pool),
        )
        .await
        .map_err(timed_out)?
        .map_err(|e| map_insert_error(e, "User already exists"))?;

        row_to_account(&row)
    }
}

fn row_to_account(row: &sqlx::postgres::PgRow) -> Result<Account, DomainError> {
    let id: AccountId = row.get("id");
    let email: String = row.get("email");
    let password_hash: String = row.get("password_hash");
    let role: String = row.get("role");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");

    Ok(Account::new(id, email, password_hash, role.parse()?, created_at))
}

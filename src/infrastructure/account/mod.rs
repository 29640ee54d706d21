//! Account persistence backed by PostgreSQL

mod postgres_repository;

pub use postgres_repository::PostgresAccountRepository;

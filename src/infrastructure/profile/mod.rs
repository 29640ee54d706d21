//! Profile services and PostgreSQL persistence

mod postgres_repository;
mod service;

pub use postgres_repository::{PostgresMusicianProfileRepository, PostgresVenueProfileRepository};
pub use service::ProfileService;

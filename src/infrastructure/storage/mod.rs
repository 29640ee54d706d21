//! Storage infrastructure - connection pooling and schema migrations

pub mod migrations;
mod postgres;

pub use migrations::{run_schema_migrations, Migration, PostgresMigrator};
pub use postgres::{connect_pool, map_insert_error};

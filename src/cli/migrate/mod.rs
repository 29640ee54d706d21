//! Migrate command - applies schema migrations and exits

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::storage::{connect_pool, run_schema_migrations};

/// Apply pending schema migrations
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let pool = connect_pool(&config.database).await?;
    run_schema_migrations(&pool).await?;

    info!("Migrations complete");

    Ok(())
}

//! Database connection pool using the OnceCell pattern.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::settings::Settings;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Get or initialize the database connection pool.
pub async fn get_pool() -> Result<&'static PgPool, sqlx::Error> {
    POOL.get_or_try_init(|| async {
        let settings = Settings::load();
        tracing::info!("Connecting to database ({} connections)", settings.database.pool);

        PgPoolOptions::new()
            .max_connections(settings.database.pool)
            .connect(&settings.database.url)
            .await
    })
    .await
}

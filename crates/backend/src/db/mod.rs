//! Database operations for the backend using tokio-postgres

mod error;
mod games;

pub use error::*;
pub use games::*;

use deadpool_postgres::Pool;

/// Create the games table if it does not exist yet.
///
/// Runs at startup, which also serves as the connection probe.
pub async fn init_schema(pool: &Pool) -> Result<(), DbError> {
    let client = pool.get().await?;
    client.batch_execute(
        r#"
        CREATE TABLE IF NOT EXISTS games (
            id SERIAL PRIMARY KEY,
            publisher_id TEXT,
            name TEXT,
            platform TEXT,
            store_id TEXT,
            bundle_id TEXT,
            app_version TEXT,
            is_published BOOLEAN,
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
        )
        "#,
    ).await?;
    Ok(())
}

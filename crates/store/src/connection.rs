use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqliteConnection;

pub type DbPool = sqlx::SqlitePool;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

pub async fn connect(database_url: &str) -> Result<DbPool, sqlx::Error> {
    connect_with_settings(database_url, DEFAULT_MAX_CONNECTIONS, DEFAULT_BUSY_TIMEOUT_MS).await
}

pub async fn connect_with_settings(
    database_url: &str,
    max_connections: u32,
    busy_timeout_ms: u64,
) -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .after_connect(move |conn, _meta| Box::pin(session_setup(conn, busy_timeout_ms)))
        .connect(database_url)
        .await
}

/// Session settings applied to every pooled connection before first use.
async fn session_setup(
    conn: &mut SqliteConnection,
    busy_timeout_ms: u64,
) -> Result<(), sqlx::Error> {
    let pragmas = [
        "PRAGMA foreign_keys = ON".to_string(),
        "PRAGMA journal_mode = WAL".to_string(),
        format!("PRAGMA busy_timeout = {}", busy_timeout_ms.max(1)),
    ];
    for pragma in &pragmas {
        sqlx::query(pragma).execute(&mut *conn).await?;
    }
    Ok(())
}

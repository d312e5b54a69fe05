use sqlx::migrate::{MigrateError, Migrator};

use crate::DbPool;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Applies any migrations the connected database has not seen yet.
pub async fn run_pending(pool: &DbPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

#[cfg(test)]
mod tests {
    use sqlx::Row;

    use super::{run_pending, MIGRATOR};
    use crate::{connect_with_settings, DbPool};

    const TABLES: &[&str] = &["prompt_history", "wishlist_item", "cart_item"];
    const INDEXES: &[&str] = &[
        "idx_prompt_history_created_at",
        "idx_wishlist_item_added_at",
        "idx_cart_item_added_at",
    ];

    async fn migrated_pool() -> DbPool {
        let pool = connect_with_settings("sqlite::memory:", 1, 5_000).await.expect("connect");
        run_pending(&pool).await.expect("apply migrations");
        pool
    }

    async fn object_exists(pool: &DbPool, kind: &str, name: &str) -> bool {
        sqlx::query("SELECT COUNT(*) AS count FROM sqlite_master WHERE type = ? AND name = ?")
            .bind(kind)
            .bind(name)
            .fetch_one(pool)
            .await
            .expect("query sqlite_master")
            .get::<i64, _>("count")
            == 1
    }

    /// Sorted (name, sql) pairs for the schema objects these migrations own.
    async fn schema_sql(pool: &DbPool) -> Vec<(String, String)> {
        let rows = sqlx::query(
            "SELECT name, IFNULL(sql, '') AS sql FROM sqlite_master \
             WHERE type IN ('table', 'index') ORDER BY name",
        )
        .fetch_all(pool)
        .await
        .expect("read sqlite_master");

        rows.into_iter()
            .map(|row| (row.get::<String, _>("name"), row.get::<String, _>("sql")))
            .filter(|(name, _)| TABLES.contains(&name.as_str()) || INDEXES.contains(&name.as_str()))
            .collect()
    }

    #[tokio::test]
    async fn migrations_create_every_table_and_index() {
        let pool = migrated_pool().await;

        for table in TABLES {
            assert!(object_exists(&pool, "table", table).await, "missing table {table}");
        }
        for index in INDEXES {
            assert!(object_exists(&pool, "index", index).await, "missing index {index}");
        }
    }

    #[tokio::test]
    async fn full_undo_removes_the_schema() {
        let pool = migrated_pool().await;

        MIGRATOR.undo(&pool, 0).await.expect("undo migrations");

        for table in TABLES {
            assert!(!object_exists(&pool, "table", table).await, "table {table} survived undo");
        }
    }

    #[tokio::test]
    async fn reapply_after_undo_restores_the_same_schema() {
        let pool = migrated_pool().await;

        let before = schema_sql(&pool).await;
        assert_eq!(before.len(), TABLES.len() + INDEXES.len(), "expected every managed object");

        MIGRATOR.undo(&pool, 0).await.expect("undo migrations");
        assert!(schema_sql(&pool).await.is_empty(), "undo should drop every managed object");

        run_pending(&pool).await.expect("re-apply migrations");
        assert_eq!(schema_sql(&pool).await, before, "schema should match the first pass");
    }
}

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{parse_timestamp, parse_u32, StoreError, WishlistStore};
use crate::records::SavedItem;
use crate::DbPool;

pub struct SqlWishlistStore {
    pool: DbPool,
}

impl SqlWishlistStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl WishlistStore for SqlWishlistStore {
    async fn add(&self, item: SavedItem) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO wishlist_item (
                id,
                name,
                price,
                image,
                category,
                added_at
             ) VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                price = excluded.price,
                image = excluded.image,
                category = excluded.category,
                added_at = excluded.added_at",
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(i64::from(item.price))
        .bind(&item.image)
        .bind(&item.category)
        .bind(item.added_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM wishlist_item WHERE id = ?").bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn contains(&self, id: &str) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT 1 AS present FROM wishlist_item WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn all(&self) -> Result<Vec<SavedItem>, StoreError> {
        let rows = sqlx::query(
            "SELECT
                id,
                name,
                price,
                image,
                category,
                added_at
             FROM wishlist_item
             ORDER BY added_at DESC, rowid DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(saved_item_from_row).collect()
    }
}

fn saved_item_from_row(row: SqliteRow) -> Result<SavedItem, StoreError> {
    Ok(SavedItem {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        price: parse_u32("price", row.try_get("price")?)?,
        image: row.try_get("image")?,
        category: row.try_get("category")?,
        added_at: parse_timestamp("added_at", row.try_get("added_at")?)?,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::SqlWishlistStore;
    use crate::records::SavedItem;
    use crate::repositories::WishlistStore;
    use crate::{connect_with_settings, migrations, DbPool};

    #[tokio::test]
    async fn sql_wishlist_round_trips_items_newest_first() {
        let pool = setup_pool().await;
        let store = SqlWishlistStore::new(pool.clone());

        let older = saved_item("ai-rec-1", "Desk Lamp", "2026-03-01T09:00:00Z");
        let newer = saved_item("ai-rec-2", "Scented Candle", "2026-03-01T10:00:00Z");

        store.add(older.clone()).await.expect("add older");
        store.add(newer.clone()).await.expect("add newer");

        assert!(store.contains("ai-rec-1").await.expect("contains older"));
        assert!(!store.contains("unknown").await.expect("contains unknown"));

        let all = store.all().await.expect("list items");
        assert_eq!(all, vec![newer, older]);

        pool.close().await;
    }

    #[tokio::test]
    async fn re_adding_refreshes_the_timestamp_without_duplicating() {
        let pool = setup_pool().await;
        let store = SqlWishlistStore::new(pool.clone());

        let first = saved_item("ai-rec-1", "Desk Lamp", "2026-03-01T09:00:00Z");
        let other = saved_item("ai-rec-2", "Scented Candle", "2026-03-01T09:30:00Z");
        let refreshed = saved_item("ai-rec-1", "Desk Lamp", "2026-03-01T11:00:00Z");

        store.add(first).await.expect("add first");
        store.add(other.clone()).await.expect("add other");
        store.add(refreshed.clone()).await.expect("re-add first");

        let all = store.all().await.expect("list items");
        assert_eq!(all, vec![refreshed, other]);

        pool.close().await;
    }

    #[tokio::test]
    async fn remove_deletes_one_item() {
        let pool = setup_pool().await;
        let store = SqlWishlistStore::new(pool.clone());

        store
            .add(saved_item("ai-rec-1", "Desk Lamp", "2026-03-01T09:00:00Z"))
            .await
            .expect("add item");
        store.remove("ai-rec-1").await.expect("remove item");

        assert!(!store.contains("ai-rec-1").await.expect("contains removed"));
        assert_eq!(store.all().await.expect("list items"), vec![]);

        pool.close().await;
    }

    async fn setup_pool() -> DbPool {
        let pool =
            connect_with_settings("sqlite::memory:", 1, 5_000).await.expect("connect test pool");
        migrations::run_pending(&pool).await.expect("run migrations");
        pool
    }

    fn saved_item(id: &str, name: &str, added_at: &str) -> SavedItem {
        SavedItem {
            id: id.to_string(),
            name: name.to_string(),
            price: 45,
            image: "https://images.example/item.jpg".to_string(),
            category: "Home & Garden".to_string(),
            added_at: DateTime::parse_from_rfc3339(added_at)
                .expect("valid rfc3339")
                .with_timezone(&Utc),
        }
    }
}

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{parse_timestamp, parse_u32, CartStore, StoreError};
use crate::records::{CartEntry, SavedItem};
use crate::DbPool;

pub struct SqlCartStore {
    pool: DbPool,
}

impl SqlCartStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CartStore for SqlCartStore {
    async fn add(&self, item: SavedItem) -> Result<(), StoreError> {
        // A repeat add bumps the quantity; the display fields and the
        // added_at position keep their first-add values.
        sqlx::query(
            "INSERT INTO cart_item (
                id,
                name,
                price,
                image,
                category,
                added_at,
                quantity
             ) VALUES (?, ?, ?, ?, ?, ?, 1)
             ON CONFLICT(id) DO UPDATE SET
                quantity = cart_item.quantity + 1",
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

    async fn set_quantity(&self, id: &str, quantity: u32) -> Result<(), StoreError> {
        if quantity == 0 {
            return self.remove(id).await;
        }

        sqlx::query("UPDATE cart_item SET quantity = ? WHERE id = ?")
            .bind(i64::from(quantity))
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM cart_item WHERE id = ?").bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn items(&self) -> Result<Vec<CartEntry>, StoreError> {
        let rows = sqlx::query(
            "SELECT
                id,
                name,
                price,
                image,
                category,
                added_at,
                quantity
             FROM cart_item
             ORDER BY added_at ASC, rowid ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(cart_entry_from_row).collect()
    }

    async fn total(&self) -> Result<u64, StoreError> {
        let row = sqlx::query("SELECT COALESCE(SUM(price * quantity), 0) AS total FROM cart_item")
            .fetch_one(&self.pool)
            .await?;
        let total = row.try_get::<i64, _>("total")?;
        u64::try_from(total)
            .map_err(|_| StoreError::Decode(format!("column `total` held {total}")))
    }
}

fn cart_entry_from_row(row: SqliteRow) -> Result<CartEntry, StoreError> {
    let item = SavedItem {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        price: parse_u32("price", row.try_get("price")?)?,
        image: row.try_get("image")?,
        category: row.try_get("category")?,
        added_at: parse_timestamp("added_at", row.try_get("added_at")?)?,
    };
    Ok(CartEntry { item, quantity: parse_u32("quantity", row.try_get("quantity")?)? })
}

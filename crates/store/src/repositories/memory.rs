//! In-memory stores with the same ordering guarantees as the SQL ones.
//! Used when no database is configured and by tests that do not need a
//! pool.

use tokio::sync::RwLock;

use super::{CartStore, HistoryStore, StoreError, WishlistStore, HISTORY_RETENTION};
use crate::records::{CartEntry, PromptRecord, SavedItem};

#[derive(Default)]
pub struct InMemoryHistoryStore {
    records: RwLock<Vec<PromptRecord>>,
}

#[async_trait::async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn record(&self, record: PromptRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        records.push(record);
        while records.len() > HISTORY_RETENTION {
            let oldest = records
                .iter()
                .enumerate()
                .min_by_key(|(index, record)| (record.created_at, *index))
                .map(|(index, _)| index);
            match oldest {
                Some(index) => {
                    records.remove(index);
                }
                None => break,
            }
        }
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<PromptRecord>, StoreError> {
        let records = self.records.read().await;
        // Reverse first so that among equal timestamps the later insert
        // comes out first, matching the SQL ordering.
        let mut recent: Vec<PromptRecord> = records.iter().rev().cloned().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(limit);
        Ok(recent)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.records.write().await.clear();
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryWishlistStore {
    items: RwLock<Vec<SavedItem>>,
}

#[async_trait::async_trait]
impl WishlistStore for InMemoryWishlistStore {
    async fn add(&self, item: SavedItem) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        items.retain(|existing| existing.id != item.id);
        items.push(item);
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        items.retain(|existing| existing.id != id);
        Ok(())
    }

    async fn contains(&self, id: &str) -> Result<bool, StoreError> {
        let items = self.items.read().await;
        Ok(items.iter().any(|existing| existing.id == id))
    }

    async fn all(&self) -> Result<Vec<SavedItem>, StoreError> {
        let items = self.items.read().await;
        let mut all: Vec<SavedItem> = items.iter().rev().cloned().collect();
        all.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        Ok(all)
    }
}

#[derive(Default)]
pub struct InMemoryCartStore {
    entries: RwLock<Vec<CartEntry>>,
}

#[async_trait::async_trait]
impl CartStore for InMemoryCartStore {
    async fn add(&self, item: SavedItem) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        match entries.iter_mut().find(|entry| entry.item.id == item.id) {
            Some(entry) => entry.quantity += 1,
            None => entries.push(CartEntry { item, quantity: 1 }),
        }
        Ok(())
    }

    async fn set_quantity(&self, id: &str, quantity: u32) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        if quantity == 0 {
            entries.retain(|entry| entry.item.id != id);
        } else if let Some(entry) = entries.iter_mut().find(|entry| entry.item.id == id) {
            entry.quantity = quantity;
        }
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        entries.retain(|entry| entry.item.id != id);
        Ok(())
    }

    async fn items(&self) -> Result<Vec<CartEntry>, StoreError> {
        let entries = self.entries.read().await;
        let mut items: Vec<CartEntry> = entries.clone();
        items.sort_by(|a, b| a.item.added_at.cmp(&b.item.added_at));
        Ok(items)
    }

    async fn total(&self) -> Result<u64, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().map(CartEntry::subtotal).sum())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};

    use crate::records::{PromptRecord, SavedItem};
    use crate::repositories::{
        CartStore, HistoryStore, InMemoryCartStore, InMemoryHistoryStore, InMemoryWishlistStore,
        WishlistStore, HISTORY_RETENTION,
    };

    #[tokio::test]
    async fn in_memory_history_round_trip() {
        let store = InMemoryHistoryStore::default();
        let base = parse_ts("2026-03-01T09:00:00Z");

        store.record(stamped_record("prompt 0", base, 0)).await.expect("record 0");
        store.record(stamped_record("prompt 1", base, 1)).await.expect("record 1");
        store.record(stamped_record("prompt 2", base, 2)).await.expect("record 2");

        let recent = store.recent(2).await.expect("recent records");
        let prompts: Vec<&str> = recent.iter().map(|record| record.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["prompt 2", "prompt 1"]);

        store.clear().await.expect("clear history");
        assert_eq!(store.recent(10).await.expect("recent records"), vec![]);
    }

    #[tokio::test]
    async fn in_memory_history_evicts_the_oldest_past_the_cap() {
        let store = InMemoryHistoryStore::default();
        let base = parse_ts("2026-03-01T09:00:00Z");

        for offset in 0..(HISTORY_RETENTION as i64 + 5) {
            store
                .record(stamped_record(&format!("prompt {offset}"), base, offset))
                .await
                .expect("record prompt");
        }

        let recent = store.recent(HISTORY_RETENTION + 10).await.expect("recent records");
        assert_eq!(recent.len(), HISTORY_RETENTION);
        assert_eq!(recent[0].prompt, format!("prompt {}", HISTORY_RETENTION as i64 + 4));
        assert_eq!(recent[HISTORY_RETENTION - 1].prompt, "prompt 5");
    }

    #[tokio::test]
    async fn in_memory_wishlist_refreshes_on_re_add() {
        let store = InMemoryWishlistStore::default();

        let first = saved_item("ai-rec-1", 45, "2026-03-01T09:00:00Z");
        let other = saved_item("ai-rec-2", 30, "2026-03-01T09:30:00Z");
        let refreshed = saved_item("ai-rec-1", 45, "2026-03-01T11:00:00Z");

        store.add(first).await.expect("add first");
        store.add(other.clone()).await.expect("add other");
        store.add(refreshed.clone()).await.expect("re-add first");

        assert!(store.contains("ai-rec-1").await.expect("contains first"));
        assert_eq!(store.all().await.expect("list items"), vec![refreshed, other.clone()]);

        store.remove("ai-rec-1").await.expect("remove first");
        assert_eq!(store.all().await.expect("list items"), vec![other]);
    }

    #[tokio::test]
    async fn in_memory_cart_tracks_quantities_and_total() {
        let store = InMemoryCartStore::default();

        let lamp = saved_item("ai-rec-1", 50, "2026-03-01T09:00:00Z");
        let candle = saved_item("ai-rec-2", 30, "2026-03-01T10:00:00Z");

        store.add(lamp.clone()).await.expect("add lamp");
        store.add(candle).await.expect("add candle");
        store.add(lamp).await.expect("re-add lamp");

        let items = store.items().await.expect("list entries");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item.id, "ai-rec-1");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(store.total().await.expect("cart total"), 130);

        store.set_quantity("ai-rec-1", 3).await.expect("set quantity");
        assert_eq!(store.total().await.expect("cart total"), 180);

        store.set_quantity("ai-rec-2", 0).await.expect("zero quantity");
        assert_eq!(store.items().await.expect("list entries").len(), 1);

        store.remove("ai-rec-1").await.expect("remove lamp");
        assert_eq!(store.total().await.expect("cart total"), 0);
    }

    fn stamped_record(prompt: &str, base: DateTime<Utc>, offset: i64) -> PromptRecord {
        let mut record = PromptRecord::new(prompt);
        record.created_at = base + Duration::seconds(offset);
        record
    }

    fn saved_item(id: &str, price: u32, added_at: &str) -> SavedItem {
        SavedItem {
            id: id.to_string(),
            name: "Gift".to_string(),
            price,
            image: String::new(),
            category: "Home & Garden".to_string(),
            added_at: parse_ts(added_at),
        }
    }

    fn parse_ts(value: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(value).expect("valid rfc3339").with_timezone(&Utc)
    }
}

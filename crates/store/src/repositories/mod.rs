use async_trait::async_trait;
use thiserror::Error;

use crate::records::{CartEntry, PromptRecord, SavedItem};

pub mod cart;
pub mod history;
pub mod memory;
pub mod wishlist;

pub use cart::SqlCartStore;
pub use history::SqlHistoryStore;
pub use memory::{InMemoryCartStore, InMemoryHistoryStore, InMemoryWishlistStore};
pub use wishlist::SqlWishlistStore;

/// Prompt history keeps this many records; recording one more evicts the
/// oldest.
pub const HISTORY_RETENTION: usize = 50;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("decode error: {0}")]
    Decode(String),
}

pub(crate) fn parse_timestamp(
    column: &str,
    value: String,
) -> Result<chrono::DateTime<chrono::Utc>, StoreError> {
    chrono::DateTime::parse_from_rfc3339(&value)
        .map(|timestamp| timestamp.with_timezone(&chrono::Utc))
        .map_err(|error| {
            StoreError::Decode(format!("invalid timestamp in `{column}`: `{value}` ({error})"))
        })
}

pub(crate) fn parse_u32(column: &str, value: i64) -> Result<u32, StoreError> {
    u32::try_from(value).map_err(|_| {
        StoreError::Decode(format!(
            "invalid value for `{column}` (expected non-negative u32): {value}"
        ))
    })
}

#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Persist one prompt record, evicting the oldest entry when the
    /// retention cap is exceeded.
    async fn record(&self, record: PromptRecord) -> Result<(), StoreError>;

    /// Up to `limit` records, newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<PromptRecord>, StoreError>;

    async fn clear(&self) -> Result<(), StoreError>;
}

#[async_trait]
pub trait WishlistStore: Send + Sync {
    /// Save an item. Re-adding an existing id refreshes its timestamp
    /// instead of duplicating it.
    async fn add(&self, item: SavedItem) -> Result<(), StoreError>;

    async fn remove(&self, id: &str) -> Result<(), StoreError>;

    async fn contains(&self, id: &str) -> Result<bool, StoreError>;

    /// All saved items, newest first.
    async fn all(&self) -> Result<Vec<SavedItem>, StoreError>;
}

#[async_trait]
pub trait CartStore: Send + Sync {
    /// Put an item in the cart. An id already present has its quantity
    /// incremented; the stored display fields keep their first-add values.
    async fn add(&self, item: SavedItem) -> Result<(), StoreError>;

    /// Set an exact quantity; zero removes the line. Unknown ids are a
    /// no-op.
    async fn set_quantity(&self, id: &str, quantity: u32) -> Result<(), StoreError>;

    async fn remove(&self, id: &str) -> Result<(), StoreError>;

    /// Cart lines in the order items were first added.
    async fn items(&self) -> Result<Vec<CartEntry>, StoreError>;

    /// Sum of price times quantity across the cart, in whole currency
    /// units.
    async fn total(&self) -> Result<u64, StoreError>;
}

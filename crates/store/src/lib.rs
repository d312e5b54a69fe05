pub mod connection;
pub mod migrations;
pub mod records;
pub mod repositories;

pub use connection::{connect, connect_with_settings, DbPool};
pub use records::{CartEntry, PromptRecord, SavedItem};
pub use repositories::{
    CartStore, HistoryStore, InMemoryCartStore, InMemoryHistoryStore, InMemoryWishlistStore,
    SqlCartStore, SqlHistoryStore, SqlWishlistStore, StoreError, WishlistStore, HISTORY_RETENTION,
};

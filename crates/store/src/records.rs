//! Persistent records for prompt history, wishlist, and cart.
//!
//! These live here rather than in `giftery-core` because nothing in the
//! pure pipeline ever reads them back; they exist so saved state survives
//! a restart.

use chrono::{DateTime, Utc};
use giftery_core::{Product, RecipientAnalysis};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One submitted prompt and what came back for it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PromptRecord {
    pub id: Uuid,
    pub prompt: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<RecipientAnalysis>,
    /// Ids of the products shown for this prompt, in display order.
    pub product_ids: Vec<String>,
}

impl PromptRecord {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            prompt: prompt.into(),
            created_at: Utc::now(),
            analysis: None,
            product_ids: Vec::new(),
        }
    }

    pub fn with_analysis(mut self, analysis: RecipientAnalysis) -> Self {
        self.analysis = Some(analysis);
        self
    }

    pub fn with_product_ids(mut self, product_ids: Vec<String>) -> Self {
        self.product_ids = product_ids;
        self
    }
}

/// The display fields kept for an item saved to the wishlist or cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedItem {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub image: String,
    pub category: String,
    pub added_at: DateTime<Utc>,
}

impl SavedItem {
    /// Capture the savable fields of a product, stamped with the current
    /// time.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.as_str().to_string(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            added_at: Utc::now(),
        }
    }
}

/// A cart line: one saved item and how many of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub item: SavedItem,
    pub quantity: u32,
}

impl CartEntry {
    /// Line total in whole currency units.
    pub fn subtotal(&self) -> u64 {
        u64::from(self.item.price) * u64::from(self.quantity)
    }
}

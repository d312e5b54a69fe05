//! Product ordering for the storefront's sort menu.
//!
//! Every key is a stable sort, so products that compare equal keep their
//! incoming order and re-ranking an already ranked list changes nothing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// One entry in the storefront's sort menu.
///
/// `AiScore` and `OccasionMatch` read the AI annotations; products without
/// them rank as zero rather than being excluded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    AiScore,
    OccasionMatch,
    #[default]
    Relevance,
    PriceLow,
    PriceHigh,
    Rating,
    Reviews,
    Name,
}

impl SortKey {
    /// Menu order, AI-aware keys first.
    pub const ALL: [SortKey; 8] = [
        SortKey::AiScore,
        SortKey::OccasionMatch,
        SortKey::Relevance,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
        SortKey::Reviews,
        SortKey::Name,
    ];

    /// Wire token, also accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::AiScore => "ai-score",
            SortKey::OccasionMatch => "occasion-match",
            SortKey::Relevance => "relevance",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Reviews => "reviews",
            SortKey::Name => "name",
        }
    }

    /// Human label as the sort menu shows it.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::AiScore => "AI Suitability Score",
            SortKey::OccasionMatch => "Occasion Match",
            SortKey::Relevance => "Most Relevant",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::Reviews => "Most Reviews",
            SortKey::Name => "Name A-Z",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ai-score" => Ok(Self::AiScore),
            "occasion-match" => Ok(Self::OccasionMatch),
            "relevance" => Ok(Self::Relevance),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "rating" => Ok(Self::Rating),
            "reviews" => Ok(Self::Reviews),
            "name" => Ok(Self::Name),
            other => Err(format!(
                "unsupported sort key `{other}` (expected ai-score|occasion-match|relevance|price-low|price-high|rating|reviews|name)"
            )),
        }
    }
}

/// Return the products in ranked order, leaving the input untouched.
pub fn rank(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut ranked = products.to_vec();
    rank_in_place(&mut ranked, key);
    ranked
}

/// Sort a product list by `key`. `Relevance` keeps the incoming order,
/// which for AI batches is the order the advisor emitted.
pub fn rank_in_place(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::AiScore => products
            .sort_by(|a, b| b.suitability_score.unwrap_or(0).cmp(&a.suitability_score.unwrap_or(0))),
        SortKey::OccasionMatch => products
            .sort_by(|a, b| b.occasion_match.unwrap_or(0).cmp(&a.occasion_match.unwrap_or(0))),
        SortKey::Relevance => {}
        SortKey::PriceLow => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Reviews => products.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
        SortKey::Name => products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
    }
}

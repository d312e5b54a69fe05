pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod favorites;
pub mod filter;
pub mod normalize;
pub mod rank;

pub use catalog::CatalogSynthesizer;
pub use domain::product::{Category, Product, ProductId};
pub use domain::recipient::{
    BudgetRange, FilterOptions, Gender, OccasionInfo, RecipientAnalysis,
};
pub use domain::recommendation::{PriceRange, RawRecommendation};
pub use errors::MalformedRecommendation;
pub use favorites::FavoriteSet;
pub use filter::{FilterCriteria, PriceBracket};
pub use normalize::{NormalizedBatch, RejectedRecommendation};
pub use rank::SortKey;

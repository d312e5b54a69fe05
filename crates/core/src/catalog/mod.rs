//! Synthetic gift catalog.
//!
//! When the recommendation service is unreachable (or a prompt produces no
//! usable result) the pipeline falls back to this locally synthesized
//! catalog. The shape is deterministic: a fixed set of category templates,
//! each holding fixed item archetypes. Instance values (price, discount,
//! rating, reviews, brand, feature subset, stock, shipping) are drawn from
//! a caller-supplied random source, so fixing the seed fixes the output.
//!
//! The numeric constants below reproduce observed product behavior and are
//! not tuned; keep them in one place so they can be revisited together.

mod archetypes;
mod synthesizer;

pub use synthesizer::CatalogSynthesizer;

use std::ops::{Range, RangeInclusive};

/// Brands a product can be attributed to, drawn uniformly.
pub const BRAND_POOL: &[&str] = &[
    "Apple",
    "Samsung",
    "Nike",
    "Adidas",
    "Amazon",
    "Sony",
    "Microsoft",
    "Canon",
    "Fitbit",
    "Bose",
    "Lego",
    "Nintendo",
];

/// Feature tag vocabulary. Synthesized products carry an order-preserving
/// prefix of this list, never a reordered subset.
pub const FEATURE_TAGS: &[&str] = &[
    "Premium Quality",
    "Fast Shipping",
    "Gift Wrapping Available",
    "Customer Favorite",
    "Eco-Friendly",
    "Limited Edition",
];

/// Upper bound on one synthesized result set.
pub const MAX_CATALOG_SIZE: usize = 100;

/// Synthesized price band in whole currency units, upper bound exclusive.
pub const PRICE_RANGE: Range<u32> = 30..430;

/// Synthesized review count band, upper bound exclusive.
pub const REVIEW_COUNT_RANGE: Range<u32> = 50..2050;

/// How many feature tags a synthesized product carries.
pub const FEATURE_COUNT_RANGE: RangeInclusive<usize> = 2..=4;

/// Probability a product is shown with a struck-through original price.
pub const DISCOUNT_PROBABILITY: f64 = 0.3;

/// Markup used to derive the pre-discount price:
/// `original_price = price * (100 + MARKUP_PERCENT) / 100`, floored.
pub const MARKUP_PERCENT: u32 = 30;

/// Probability a product is in stock.
pub const IN_STOCK_PROBABILITY: f64 = 0.95;

/// Probability a product is flagged for fast shipping.
pub const FAST_SHIPPING_PROBABILITY: f64 = 0.7;

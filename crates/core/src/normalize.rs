//! Normalization of raw AI recommendations into canonical products.
//!
//! The conversion is pure apart from a handful of bounded random draws
//! (discount, review count, brand, stock, shipping) fed from a
//! caller-supplied random source. Everything identity-relevant, the id and
//! the image, is derived deterministically from the record's position in
//! its batch.

use std::ops::Range;

use rand::Rng;

use crate::catalog::{
    BRAND_POOL, DISCOUNT_PROBABILITY, FAST_SHIPPING_PROBABILITY, IN_STOCK_PROBABILITY,
};
use crate::domain::product::{Category, Product, ProductId};
use crate::domain::recommendation::RawRecommendation;
use crate::errors::MalformedRecommendation;

/// Result type for normalization operations.
pub type NormalizeResult<T> = Result<T, MalformedRecommendation>;

/// Review count band for normalized products, upper bound exclusive.
pub const REVIEW_COUNT_RANGE: Range<u32> = 100..1100;

/// Markup used for the struck-through price:
/// `original_price = price * (100 + MARKUP_PERCENT) / 100`, floored.
pub const MARKUP_PERCENT: u32 = 20;

/// Recommended items are never shown below four stars.
pub const RATING_FLOOR: u8 = 4;

/// Display ratings top out at five stars.
pub const RATING_CEILING: u8 = 5;

/// At most this many tags make it onto the product card.
pub const MAX_FEATURES: usize = 4;

/// Id prefix for normalized recommendations.
pub const ID_PREFIX: &str = "ai-rec-";

/// Outcome of normalizing one batch: the products that converted cleanly
/// plus the records that were dropped, with their original positions.
#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    pub products: Vec<Product>,
    pub rejected: Vec<RejectedRecommendation>,
}

/// A record dropped during batch normalization.
#[derive(Debug, Clone)]
pub struct RejectedRecommendation {
    /// Zero-based position in the original batch.
    pub index: usize,
    pub reason: MalformedRecommendation,
}

/// Convert one raw recommendation into a canonical product.
///
/// `index` is the record's zero-based position in its batch; it fixes both
/// the id (`ai-rec-<index+1>`) and which image from the category pool the
/// product gets, so re-running a batch yields the same identities.
///
/// # Errors
///
/// Returns [`MalformedRecommendation`] when the price range is missing,
/// inverted, or dips below zero.
pub fn normalize_recommendation<R: Rng + ?Sized>(
    raw: &RawRecommendation,
    index: usize,
    rng: &mut R,
) -> NormalizeResult<Product> {
    let price = price_midpoint(raw)?;
    let original_price =
        rng.gen_bool(DISCOUNT_PROBABILITY).then(|| price * (100 + MARKUP_PERCENT) / 100);

    let pool = Category::image_pool_for_label(&raw.category);
    let image = pool[index % pool.len()];

    Ok(Product {
        id: ProductId::new(format!("{ID_PREFIX}{}", index + 1)),
        name: raw.name.clone(),
        description: raw.description.clone(),
        price,
        original_price,
        image: image.to_string(),
        rating: display_rating(raw.suitability_score),
        review_count: rng.gen_range(REVIEW_COUNT_RANGE),
        category: raw.category.clone(),
        brand: BRAND_POOL[rng.gen_range(0..BRAND_POOL.len())].to_string(),
        features: raw.tags.iter().take(MAX_FEATURES).cloned().collect(),
        in_stock: rng.gen_bool(IN_STOCK_PROBABILITY),
        fast_shipping: rng.gen_bool(FAST_SHIPPING_PROBABILITY),
        ai_reasoning: Some(raw.reasoning.clone()),
        suitability_score: Some(raw.suitability_score),
        occasion_match: Some(raw.occasion_match),
        age_appropriate: Some(raw.age_appropriate),
    })
}

/// Normalize a whole batch with partial-failure semantics: malformed
/// records are dropped and reported, never aborting the rest.
///
/// Ids keep their 1-based batch positions, so a dropped record leaves a
/// gap rather than shifting every later id.
pub fn normalize_batch<R: Rng + ?Sized>(
    raws: &[RawRecommendation],
    rng: &mut R,
) -> NormalizedBatch {
    let mut batch = NormalizedBatch::default();

    for (index, raw) in raws.iter().enumerate() {
        match normalize_recommendation(raw, index, rng) {
            Ok(product) => batch.products.push(product),
            Err(reason) => batch.rejected.push(RejectedRecommendation { index, reason }),
        }
    }

    batch
}

/// Map a 1-10 suitability score onto the 4-5 star display band.
fn display_rating(suitability_score: u8) -> f32 {
    f32::from((suitability_score / 2 + 3).clamp(RATING_FLOOR, RATING_CEILING))
}

fn price_midpoint(raw: &RawRecommendation) -> NormalizeResult<u32> {
    let range = raw
        .price_range
        .ok_or_else(|| MalformedRecommendation::MissingPriceRange { name: raw.name.clone() })?;

    if range.min > range.max {
        return Err(MalformedRecommendation::InvertedPriceRange {
            name: raw.name.clone(),
            min: range.min,
            max: range.max,
        });
    }
    if range.min < 0.0 {
        return Err(MalformedRecommendation::NegativePriceBound {
            name: raw.name.clone(),
            min: range.min,
        });
    }

    Ok(((range.min + range.max) / 2.0).floor() as u32)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn desk_lamp() -> RawRecommendation {
        RawRecommendation::new("Desk Lamp", "Adjustable LED desk lamp", "Home & Garden")
            .with_price_range(20.0, 40.0)
            .with_reasoning("Matches the recipient's study habits")
            .with_suitability_score(8)
            .with_tags(vec!["LED".to_string(), "Adjustable".to_string()])
            .with_occasion_match(9)
    }

    #[test]
    fn desk_lamp_normalizes_to_the_expected_product() {
        let mut rng = StdRng::seed_from_u64(1);
        let product = normalize_recommendation(&desk_lamp(), 0, &mut rng)
            .expect("well-formed recommendation normalizes");

        assert_eq!(product.id.as_str(), "ai-rec-1");
        assert_eq!(product.price, 30);
        assert_eq!(product.rating, 5.0);
        assert_eq!(product.features, vec!["LED".to_string(), "Adjustable".to_string()]);
        assert_eq!(product.category, "Home & Garden");
        assert_eq!(product.image, Category::HomeGarden.image_pool()[0]);
        assert_eq!(product.suitability_score, Some(8));
        assert_eq!(product.occasion_match, Some(9));
        assert!(product.is_ai_recommended());
    }

    #[test]
    fn display_rating_never_leaves_the_four_to_five_band() {
        for score in 1..=10u8 {
            let raw = desk_lamp().with_suitability_score(score);
            let mut rng = StdRng::seed_from_u64(u64::from(score));
            let product = normalize_recommendation(&raw, 0, &mut rng)
                .expect("well-formed recommendation normalizes");

            assert!(
                product.rating == 4.0 || product.rating == 5.0,
                "score {score} produced rating {}",
                product.rating
            );
        }
    }

    #[test]
    fn low_scores_floor_at_four_and_high_scores_cap_at_five() {
        assert_eq!(display_rating(1), 4.0);
        assert_eq!(display_rating(2), 4.0);
        assert_eq!(display_rating(4), 5.0);
        assert_eq!(display_rating(10), 5.0);
    }

    #[test]
    fn a_bad_record_is_dropped_without_aborting_the_batch() {
        let mut raws = vec![
            desk_lamp(),
            desk_lamp().with_price_range(10.0, 20.0),
            desk_lamp().with_price_range(50.0, 10.0),
            desk_lamp().with_price_range(30.0, 60.0),
            desk_lamp().with_price_range(15.0, 45.0),
        ];
        raws[2].name = "Inverted Lamp".to_string();

        let mut rng = StdRng::seed_from_u64(5);
        let batch = normalize_batch(&raws, &mut rng);

        assert_eq!(batch.products.len(), 4);
        assert_eq!(batch.rejected.len(), 1);
        assert_eq!(batch.rejected[0].index, 2);
        assert!(matches!(
            batch.rejected[0].reason,
            MalformedRecommendation::InvertedPriceRange { .. }
        ));

        let ids: Vec<&str> = batch.products.iter().map(|product| product.id.as_str()).collect();
        assert_eq!(ids, vec!["ai-rec-1", "ai-rec-2", "ai-rec-4", "ai-rec-5"]);
        assert!(!ids.contains(&"ai-rec-3"), "the dropped record's id must stay vacant");
    }

    #[test]
    fn missing_price_range_is_rejected() {
        let raw = RawRecommendation::new("Mystery Box", "No price band", "Toys");
        let mut rng = StdRng::seed_from_u64(9);

        let error = normalize_recommendation(&raw, 0, &mut rng)
            .expect_err("a missing price range must not normalize");
        assert!(matches!(error, MalformedRecommendation::MissingPriceRange { .. }));
        assert_eq!(error.recommendation_name(), "Mystery Box");
    }

    #[test]
    fn negative_price_bounds_are_rejected() {
        let raw = desk_lamp().with_price_range(-10.0, 40.0);
        let mut rng = StdRng::seed_from_u64(9);

        let error = normalize_recommendation(&raw, 0, &mut rng)
            .expect_err("a negative price bound must not normalize");
        assert!(matches!(error, MalformedRecommendation::NegativePriceBound { .. }));
    }

    #[test]
    fn feature_tags_truncate_to_four_in_order() {
        let raw = desk_lamp().with_tags(vec![
            "one".to_string(),
            "two".to_string(),
            "three".to_string(),
            "four".to_string(),
            "five".to_string(),
            "six".to_string(),
        ]);
        let mut rng = StdRng::seed_from_u64(2);
        let product = normalize_recommendation(&raw, 0, &mut rng)
            .expect("well-formed recommendation normalizes");

        assert_eq!(product.features, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn images_cycle_through_the_category_pool_by_index() {
        let books_pool = Category::Books.image_pool();
        let raw = desk_lamp().with_price_range(20.0, 40.0);
        let mut rng = StdRng::seed_from_u64(3);

        let mut books = raw.clone();
        books.category = "Books".to_string();
        let wrapped = normalize_recommendation(&books, books_pool.len() + 1, &mut rng)
            .expect("well-formed recommendation normalizes");
        assert_eq!(wrapped.image, books_pool[1]);

        let mut unknown = raw;
        unknown.category = "Music".to_string();
        let fallback = normalize_recommendation(&unknown, 0, &mut rng)
            .expect("well-formed recommendation normalizes");
        assert_eq!(fallback.image, Category::Electronics.image_pool()[0]);
    }

    #[test]
    fn discounts_use_the_twenty_percent_markup_and_never_undercut() {
        let mut seen_discount = false;
        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let product = normalize_recommendation(&desk_lamp(), 0, &mut rng)
                .expect("well-formed recommendation normalizes");

            assert!(REVIEW_COUNT_RANGE.contains(&product.review_count));
            assert!(BRAND_POOL.contains(&product.brand.as_str()));
            if let Some(original) = product.original_price {
                seen_discount = true;
                assert!(original >= product.price);
                assert_eq!(original, product.price * (100 + MARKUP_PERCENT) / 100);
            }
        }
        assert!(seen_discount, "forty seeds should surface at least one discount");
    }

    #[test]
    fn fractional_midpoints_floor_like_the_display_layer_expects() {
        let raw = desk_lamp().with_price_range(20.0, 45.0);
        let mut rng = StdRng::seed_from_u64(6);
        let product = normalize_recommendation(&raw, 0, &mut rng)
            .expect("well-formed recommendation normalizes");

        // (20 + 45) / 2 = 32.5, floored.
        assert_eq!(product.price, 32);
    }

    #[test]
    fn empty_batches_normalize_to_empty_output() {
        let mut rng = StdRng::seed_from_u64(4);
        let batch = normalize_batch(&[], &mut rng);
        assert!(batch.products.is_empty());
        assert!(batch.rejected.is_empty());
    }
}

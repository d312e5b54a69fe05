//! Catalog synthesizer implementation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::product::{Product, ProductId};

use super::archetypes::{CategoryTemplate, ItemArchetype, CATEGORY_TEMPLATES};
use super::{
    BRAND_POOL, DISCOUNT_PROBABILITY, FAST_SHIPPING_PROBABILITY, FEATURE_COUNT_RANGE,
    FEATURE_TAGS, IN_STOCK_PROBABILITY, MARKUP_PERCENT, MAX_CATALOG_SIZE, PRICE_RANGE,
    REVIEW_COUNT_RANGE,
};

/// Produces the fallback product catalog.
///
/// Synthesis never fails: with no external data to match, the full
/// synthetic set is returned and downstream filtering narrows it.
#[derive(Debug, Clone)]
pub struct CatalogSynthesizer {
    max_results: usize,
}

impl CatalogSynthesizer {
    pub fn new() -> Self {
        Self { max_results: MAX_CATALOG_SIZE }
    }

    /// Cap the result set below the default of [`MAX_CATALOG_SIZE`].
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.clamp(1, MAX_CATALOG_SIZE);
        self
    }

    /// Instantiate every archetype, shuffle uniformly, and truncate.
    ///
    /// The query is accepted for parity with the service path but does not
    /// influence selection: the synthesizer is the no-match fallback, so
    /// there is nothing to select against. Callers keep the query around
    /// for display.
    pub fn synthesize<R: Rng + ?Sized>(&self, _query: &str, rng: &mut R) -> Vec<Product> {
        let mut products = Vec::new();
        for template in CATEGORY_TEMPLATES {
            for (index, item) in template.items.iter().enumerate() {
                products.push(instantiate(template, item, index, rng));
            }
        }

        products.shuffle(rng);
        products.truncate(self.max_results);
        products
    }
}

impl Default for CatalogSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

fn instantiate<R: Rng + ?Sized>(
    template: &CategoryTemplate,
    item: &ItemArchetype,
    index: usize,
    rng: &mut R,
) -> Product {
    let category = template.category;
    let price = rng.gen_range(PRICE_RANGE);
    let original_price =
        rng.gen_bool(DISCOUNT_PROBABILITY).then(|| price * (100 + MARKUP_PERCENT) / 100);
    let feature_count = rng.gen_range(FEATURE_COUNT_RANGE);

    Product {
        id: ProductId::new(format!("{}-{}", category.slug(), index + 1)),
        name: item.name.to_string(),
        description: item.description.to_string(),
        price,
        original_price,
        image: item.image.to_string(),
        rating: f32::from(rng.gen_range(4u8..=5)),
        review_count: rng.gen_range(REVIEW_COUNT_RANGE),
        category: category.label().to_string(),
        brand: BRAND_POOL[rng.gen_range(0..BRAND_POOL.len())].to_string(),
        features: FEATURE_TAGS[..feature_count].iter().map(|tag| tag.to_string()).collect(),
        in_stock: rng.gen_bool(IN_STOCK_PROBABILITY),
        fast_shipping: rng.gen_bool(FAST_SHIPPING_PROBABILITY),
        ai_reasoning: None,
        suitability_score: None,
        occasion_match: None,
        age_appropriate: None,
    }
}

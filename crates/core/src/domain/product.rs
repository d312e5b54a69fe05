//! Canonical product records shared by the synthesizer, normalizer, and
//! filter/ranking engines.

use serde::{Deserialize, Serialize};

/// Stable product identifier, unique within one result set.
///
/// Favorites, wishlist, and cart entries all join on this key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

const ELECTRONICS_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1586953208448-b95a79798f07?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1543512214-318c7553f230?w=400&h=400&fit=crop",
];

const HOME_GARDEN_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1416879595882-3373a0480b5b?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1513475382585-d06e58bcb0e0?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1514228742587-6b1558fcf93a?w=400&h=400&fit=crop",
];

const FASHION_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1601924994987-69e26d50dc26?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1511499767150-a48a237f0083?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1434389677669-e08b4cac3105?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1524592094714-0f0654e20314?w=400&h=400&fit=crop",
];

const BOOKS_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1589829085413-56de8ae18c73?w=400&h=400&fit=crop",
];

const TOYS_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1558877385-09c4d8b7b7a9?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1513475382585-d06e58bcb0e0?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1473968512647-3e447244af8f?w=400&h=400&fit=crop",
];

const SPORTS_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1523362628745-0c100150b504?w=400&h=400&fit=crop",
];

const BEAUTY_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1556228578-0d85b1a4d571?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1522335789203-aabd1fc54bc9?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1571781926291-c477ebfd024b?w=400&h=400&fit=crop",
];

/// The closed set of catalog categories.
///
/// Recommendation payloads carry free-text category labels; [`Category::from_label`]
/// maps the known ones and everything else uses the Electronics image pool, so an
/// unrecognized label can never leave a product without an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Electronics")]
    Electronics,
    #[serde(rename = "Home & Garden")]
    HomeGarden,
    #[serde(rename = "Fashion")]
    Fashion,
    #[serde(rename = "Books")]
    Books,
    #[serde(rename = "Toys")]
    Toys,
    #[serde(rename = "Sports")]
    Sports,
    #[serde(rename = "Beauty")]
    Beauty,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Electronics,
        Category::HomeGarden,
        Category::Fashion,
        Category::Books,
        Category::Toys,
        Category::Sports,
        Category::Beauty,
    ];

    /// Display label, also the wire form used in product records.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::HomeGarden => "Home & Garden",
            Category::Fashion => "Fashion",
            Category::Books => "Books",
            Category::Toys => "Toys",
            Category::Sports => "Sports",
            Category::Beauty => "Beauty",
        }
    }

    /// Identifier-safe form used when composing product ids.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::HomeGarden => "home-garden",
            Category::Fashion => "fashion",
            Category::Books => "books",
            Category::Toys => "toys",
            Category::Sports => "sports",
            Category::Beauty => "beauty",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Category::ALL.iter().copied().find(|category| category.label() == label)
    }

    /// Non-empty pool of stock images for this category.
    pub fn image_pool(&self) -> &'static [&'static str] {
        match self {
            Category::Electronics => ELECTRONICS_IMAGES,
            Category::HomeGarden => HOME_GARDEN_IMAGES,
            Category::Fashion => FASHION_IMAGES,
            Category::Books => BOOKS_IMAGES,
            Category::Toys => TOYS_IMAGES,
            Category::Sports => SPORTS_IMAGES,
            Category::Beauty => BEAUTY_IMAGES,
        }
    }

    /// Image pool for an arbitrary category label. Unknown labels get the
    /// Electronics pool, the declared default.
    pub fn image_pool_for_label(label: &str) -> &'static [&'static str] {
        Category::from_label(label).unwrap_or(Category::Electronics).image_pool()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A candidate gift item, regardless of origin (synthesized or AI-derived).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Whole currency units; formatting is a presentation concern.
    pub price: u32,
    /// Pre-discount price. When present it is always >= `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u32>,
    pub image: String,
    /// Display rating in [0, 5]. Both generators only emit 4 or 5.
    pub rating: f32,
    pub review_count: u32,
    pub category: String,
    pub brand: String,
    /// Ordered display tags, duplicates allowed.
    pub features: Vec<String>,
    pub in_stock: bool,
    pub fast_shipping: bool,
    /// Present only on products that came through the AI recommendation path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_reasoning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suitability_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion_match: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_appropriate: Option<bool>,
}

impl Product {
    /// Whether this product originated from the AI recommendation path
    /// rather than the synthetic catalog.
    pub fn is_ai_recommended(&self) -> bool {
        self.suitability_score.is_some() || self.ai_reasoning.is_some()
    }

    /// Rounded percentage saved versus `original_price`, when a real
    /// discount is present.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original == 0 || original <= self.price {
            return None;
        }
        let saved = f64::from(original - self.price);
        Some((saved / f64::from(original) * 100.0).round() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_non_empty_image_pool() {
        for category in Category::ALL {
            assert!(
                !category.image_pool().is_empty(),
                "{} has an empty image pool",
                category.label()
            );
        }
    }

    #[test]
    fn unknown_labels_fall_back_to_the_electronics_pool() {
        assert_eq!(Category::image_pool_for_label("Music"), ELECTRONICS_IMAGES);
        assert_eq!(Category::image_pool_for_label(""), ELECTRONICS_IMAGES);
        assert_eq!(Category::image_pool_for_label("Home & Garden"), HOME_GARDEN_IMAGES);
    }

    #[test]
    fn label_round_trips_through_from_label() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("electronics"), None);
    }

    #[test]
    fn discount_percent_rounds_against_the_original_price() {
        let mut product = sample_product();
        product.price = 70;
        product.original_price = Some(100);
        assert_eq!(product.discount_percent(), Some(30));

        product.original_price = Some(70);
        assert_eq!(product.discount_percent(), None);

        product.original_price = None;
        assert_eq!(product.discount_percent(), None);
    }

    #[test]
    fn wire_form_uses_camel_case_and_omits_absent_fields() {
        let product = sample_product();
        let json = serde_json::to_value(&product).expect("product serializes");

        assert_eq!(json["reviewCount"], 180);
        assert_eq!(json["inStock"], true);
        assert!(json.get("originalPrice").is_none());
        assert!(json.get("suitabilityScore").is_none());
    }

    fn sample_product() -> Product {
        Product {
            id: ProductId::new("electronics-1"),
            name: "Wireless Bluetooth Headphones".to_string(),
            description: "Premium noise-canceling headphones".to_string(),
            price: 120,
            original_price: None,
            image: ELECTRONICS_IMAGES[0].to_string(),
            rating: 4.0,
            review_count: 180,
            category: "Electronics".to_string(),
            brand: "Sony".to_string(),
            features: vec!["Premium Quality".to_string()],
            in_stock: true,
            fast_shipping: false,
            ai_reasoning: None,
            suitability_score: None,
            occasion_match: None,
            age_appropriate: None,
        }
    }
}

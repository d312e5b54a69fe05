//! Pre-normalization recommendation records from the AI service.

use serde::{Deserialize, Serialize};

/// Suggested price band for a recommendation, in whole currency units.
///
/// Bounds stay floating point because the service is free to emit
/// fractional amounts; normalization floors the midpoint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// One recommendation as the AI service emits it, before normalization
/// into a canonical [`Product`](crate::domain::product::Product).
///
/// `price_range` is optional at the type level so that a payload missing
/// the field still deserializes; the normalizer rejects such records
/// instead of the whole batch failing at the parse step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecommendation {
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    pub reasoning: String,
    /// How well the item fits the recipient, 1-10.
    pub suitability_score: u8,
    pub tags: Vec<String>,
    pub age_appropriate: bool,
    /// How well the item fits the occasion, 1-10.
    pub occasion_match: u8,
}

impl RawRecommendation {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            price_range: None,
            reasoning: String::new(),
            suitability_score: 5,
            tags: Vec::new(),
            age_appropriate: true,
            occasion_match: 5,
        }
    }

    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = Some(PriceRange { min, max });
        self
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    pub fn with_suitability_score(mut self, score: u8) -> Self {
        self.suitability_score = score;
        self
    }

    pub fn with_occasion_match(mut self, score: u8) -> Self {
        self.occasion_match = score;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_age_appropriate(mut self, age_appropriate: bool) -> Self {
        self.age_appropriate = age_appropriate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_service_wire_format() {
        let raw: RawRecommendation = serde_json::from_value(serde_json::json!({
            "name": "Desk Lamp",
            "description": "Adjustable LED desk lamp",
            "category": "Home & Garden",
            "priceRange": {"min": 20, "max": 40},
            "reasoning": "Matches the recipient's study habits",
            "suitabilityScore": 8,
            "tags": ["LED", "Adjustable"],
            "ageAppropriate": true,
            "occasionMatch": 9
        }))
        .expect("recommendation parses");

        assert_eq!(raw.price_range, Some(PriceRange { min: 20.0, max: 40.0 }));
        assert_eq!(raw.suitability_score, 8);
    }

    #[test]
    fn missing_price_range_still_deserializes() {
        let raw: RawRecommendation = serde_json::from_value(serde_json::json!({
            "name": "Mystery Box",
            "description": "No price band supplied",
            "category": "Toys",
            "reasoning": "",
            "suitabilityScore": 4,
            "tags": [],
            "ageAppropriate": false,
            "occasionMatch": 2
        }))
        .expect("recommendation parses without a price range");

        assert_eq!(raw.price_range, None);
    }
}

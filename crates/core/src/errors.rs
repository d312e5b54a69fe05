use thiserror::Error;

/// Why a single raw recommendation could not be normalized into a product.
///
/// This is a per-record failure: the normalizer drops the offending record
/// and carries on with the rest of the batch, so one bad recommendation
/// never blanks a whole result set.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MalformedRecommendation {
    #[error("recommendation `{name}` is missing its price range")]
    MissingPriceRange { name: String },
    #[error("recommendation `{name}` has an inverted price range ({min} > {max})")]
    InvertedPriceRange { name: String, min: f64, max: f64 },
    #[error("recommendation `{name}` has a negative price bound ({min})")]
    NegativePriceBound { name: String, min: f64 },
}

impl MalformedRecommendation {
    /// Name of the recommendation that was rejected.
    pub fn recommendation_name(&self) -> &str {
        match self {
            Self::MissingPriceRange { name }
            | Self::InvertedPriceRange { name, .. }
            | Self::NegativePriceBound { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MalformedRecommendation;

    #[test]
    fn messages_name_the_offending_recommendation() {
        let error = MalformedRecommendation::InvertedPriceRange {
            name: "Desk Lamp".to_string(),
            min: 40.0,
            max: 20.0,
        };

        assert_eq!(error.recommendation_name(), "Desk Lamp");
        assert_eq!(
            error.to_string(),
            "recommendation `Desk Lamp` has an inverted price range (40 > 20)"
        );
    }

    #[test]
    fn missing_price_range_message_is_actionable() {
        let error = MalformedRecommendation::MissingPriceRange { name: "Mystery Box".to_string() };
        assert_eq!(error.to_string(), "recommendation `Mystery Box` is missing its price range");
    }
}

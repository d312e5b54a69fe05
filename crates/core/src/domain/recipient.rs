//! Recipient context produced by the profile extraction service.
//!
//! These records arrive fully formed from the extraction boundary and are
//! treated as immutable context for one prompt submission. Nothing in the
//! pipeline mutates them.

use serde::{Deserialize, Serialize};

/// Structured facts about the gift recipient, derived from free text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipientAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub interests: Vec<String>,
    pub relationship: String,
    pub occasion: String,
    /// Stated budget; `min <= max` is expected but only the boundary
    /// adapter enforces it, since the record comes from outside.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetRange>,
    pub personality: Vec<String>,
    pub lifestyle: Vec<String>,
    pub preferences: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    Unknown,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::NonBinary => "non-binary",
            Self::Unknown => "unknown",
        }
    }
}

/// Budget bounds in whole currency units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

impl BudgetRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_well_formed(&self) -> bool {
        self.min >= 0.0 && self.min <= self.max
    }
}

/// Occasion context forwarded alongside a prompt submission.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OccasionInfo {
    pub occasion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<String>,
}

/// Optional hard constraints a caller can attach to a recommendation request.
///
/// This is the wire record the recommendation service accepts; the local
/// filter engine has its own richer criteria type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eco_friendly: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handmade: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
}

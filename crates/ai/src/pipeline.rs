//! Prompt submission pipeline with a synthetic-catalog fallback.

use giftery_core::normalize::normalize_batch;
use giftery_core::{
    CatalogSynthesizer, FilterCriteria, FilterOptions, PriceBracket, Product, RecipientAnalysis,
};
use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::advisor::{GiftAdvisor, RecommendationRequest};
use crate::error::AdvisorErrorCode;

/// Where a result set came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Advisor,
    Synthesized,
}

impl RecommendationSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Advisor => "advisor",
            Self::Synthesized => "synthesized",
        }
    }
}

impl std::fmt::Display for RecommendationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a caller learns from one submission.
#[derive(Clone, Debug, Serialize)]
pub struct PipelineOutcome {
    pub products: Vec<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<RecipientAnalysis>,
    pub source: RecommendationSource,
    /// Wire code of the advisor failure that forced the synthesized path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_code: Option<AdvisorErrorCode>,
    /// How many raw recommendations were dropped during normalization.
    pub rejected: usize,
}

/// Ties an advisor to the synthetic catalog so that a submission always
/// yields products, however the advisor fails.
pub struct RecommendationPipeline<A> {
    advisor: A,
    synthesizer: CatalogSynthesizer,
}

impl<A: GiftAdvisor> RecommendationPipeline<A> {
    pub fn new(advisor: A) -> Self {
        Self { advisor, synthesizer: CatalogSynthesizer::new() }
    }

    pub fn with_synthesizer(mut self, synthesizer: CatalogSynthesizer) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    /// Run one prompt through analysis, recommendation, normalization, and
    /// local filtering plus ranking.
    ///
    /// This never fails. When the advisor cannot deliver, the synthesizer
    /// stands in and the outcome records which error code triggered the
    /// substitution; the worst case is an empty product list after
    /// filtering.
    pub async fn submit<R: Rng + ?Sized>(
        &self,
        prompt: &str,
        criteria: &FilterCriteria,
        rng: &mut R,
    ) -> PipelineOutcome {
        let correlation_id = Uuid::new_v4();
        info!(
            event_name = "pipeline.submission.received",
            correlation_id = %correlation_id,
            prompt_len = prompt.len(),
            "processing gift prompt"
        );

        let analysis = match self.advisor.analyze_recipient(prompt).await {
            Ok(analysis) => Some(analysis),
            Err(error) => {
                warn!(
                    event_name = "advisor.analysis.failed",
                    correlation_id = %correlation_id,
                    code = %error.code(),
                    error = %error,
                    "recipient analysis unavailable; continuing without it"
                );
                None
            }
        };

        let mut request = RecommendationRequest::new(prompt);
        if let Some(analysis) = &analysis {
            request = request.with_analysis(analysis.clone());
        }
        if let Some(filters) = advisor_filters(criteria) {
            request = request.with_filters(filters);
        }

        let (products, source, fallback_code, rejected) = match self
            .advisor
            .recommend(&request)
            .await
        {
            Ok(raw) => {
                let batch = normalize_batch(&raw, rng);
                for dropped in &batch.rejected {
                    warn!(
                        event_name = "pipeline.recommendation.rejected",
                        correlation_id = %correlation_id,
                        index = dropped.index,
                        reason = %dropped.reason,
                        "dropping malformed recommendation"
                    );
                }
                let rejected = batch.rejected.len();
                (batch.products, RecommendationSource::Advisor, None, rejected)
            }
            Err(error) => {
                let code = error.code();
                warn!(
                    event_name = "pipeline.fallback.activated",
                    correlation_id = %correlation_id,
                    code = %code,
                    error = %error,
                    "advisor unavailable; substituting the synthetic catalog"
                );
                let products = self.synthesizer.synthesize(prompt, rng);
                (products, RecommendationSource::Synthesized, Some(code), 0)
            }
        };

        let products = criteria.apply(&products);
        info!(
            event_name = "pipeline.submission.completed",
            correlation_id = %correlation_id,
            source = source.as_str(),
            products = products.len(),
            rejected,
            "gift prompt processed"
        );

        PipelineOutcome { products, analysis, source, fallback_code, rejected }
    }
}

/// Advisor-side hints derived from the local criteria.
///
/// Category and price bounds travel with the request so the advisor aims
/// at the right shelf; ordering is decided locally and never forwarded.
fn advisor_filters(criteria: &FilterCriteria) -> Option<FilterOptions> {
    let mut filters = FilterOptions::default();
    if let Some(category) = &criteria.category {
        // "all" is the local wildcard, not a constraint worth forwarding.
        if category != giftery_core::filter::ANY_CATEGORY {
            filters.category = Some(category.clone());
        }
    }
    if criteria.price_bracket != PriceBracket::ANY {
        filters.price_min = Some(f64::from(criteria.price_bracket.min));
        filters.price_max = criteria.price_bracket.max.map(f64::from);
    }
    (filters != FilterOptions::default()).then_some(filters)
}

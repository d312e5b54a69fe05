//! AI Advisor - LLM-backed gift suggestion and message writing
//!
//! This crate is the only part of giftery that talks to an AI service. It:
//! - Analyzes free-form gift prompts into structured recipient facts
//! - Requests raw gift recommendations for a prompt
//! - Composes greeting cards and thank-you notes
//! - Falls back to the deterministic synthetic catalog when the service
//!   is unavailable
//!
//! # Architecture
//!
//! One submission runs a fixed sequence:
//! 1. **Analysis** (`advisor`) - Extract a `RecipientAnalysis` from the prompt
//! 2. **Recommendation** (`advisor` / `http`) - Fetch raw recommendations
//! 3. **Normalization** (`giftery-core`) - Convert raw records to products,
//!    dropping malformed ones
//! 4. **Filtering + Ranking** (`giftery-core`) - Apply the caller's criteria
//!
//! # Key Types
//!
//! - `GiftAdvisor` - Pluggable trait for the AI service (see `advisor`)
//! - `HttpGiftAdvisor` - reqwest implementation over chat completions
//! - `RecommendationPipeline` - Orchestrator with synthesizer fallback
//! - `AdvisorError` / `AdvisorErrorCode` - Typed failures and wire codes
//!
//! # Safety Principle
//!
//! The advisor is strictly a suggester. It NEVER decides prices, ratings,
//! ordering, or what the user ultimately sees. Those are deterministic
//! decisions made by `giftery-core` after the advisor has answered.

pub mod advisor;
pub mod error;
pub mod http;
pub mod pipeline;

pub use advisor::{
    ComposedMessage, GiftAdvisor, MessageRequest, MessageStyle, RecommendationRequest,
};
pub use error::{AdvisorError, AdvisorErrorCode};
pub use http::HttpGiftAdvisor;
pub use pipeline::{PipelineOutcome, RecommendationPipeline, RecommendationSource};

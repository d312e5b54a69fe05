//! HTTP-backed advisor speaking the OpenAI chat-completions protocol.
//!
//! Responses are requested in JSON mode and decoded into core types right
//! here at the boundary; nothing downstream ever sees a raw service payload.

use std::time::Duration;

use async_trait::async_trait;
use giftery_core::config::AdvisorConfig;
use giftery_core::{Gender, RawRecommendation, RecipientAnalysis};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, warn};

use crate::advisor::{ComposedMessage, GiftAdvisor, MessageRequest, RecommendationRequest};
use crate::error::AdvisorError;

/// Advisor scores live on a 1-10 scale; out-of-band values from the service
/// are clamped rather than rejected.
const SCORE_FLOOR: u8 = 1;
const SCORE_CEILING: u8 = 10;

/// [`GiftAdvisor`] backed by an OpenAI-compatible chat-completions endpoint.
#[derive(Debug)]
pub struct HttpGiftAdvisor {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<SecretString>,
    max_retries: u32,
}

impl HttpGiftAdvisor {
    pub fn from_config(config: &AdvisorConfig) -> Result<Self, AdvisorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|error| {
                AdvisorError::Unknown(format!("could not build advisor HTTP client: {error}"))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.as_ref().map(|key| key.expose_secret().to_owned().into()),
            max_retries: config.max_retries,
        })
    }

    /// Key check that runs before any network traffic.
    ///
    /// A missing or blank key and a key that cannot possibly be accepted
    /// are both caught locally so the caller gets the precise wire code
    /// instead of a generic service failure.
    fn checked_api_key(&self) -> Result<&str, AdvisorError> {
        let key = match &self.api_key {
            Some(key) => key.expose_secret(),
            None => return Err(AdvisorError::MissingApiKey),
        };
        if key.trim().is_empty() {
            return Err(AdvisorError::MissingApiKey);
        }
        if !key.starts_with("sk-") {
            return Err(AdvisorError::InvalidApiKey(
                "configured key does not look like a service key (expected `sk-` prefix)"
                    .to_string(),
            ));
        }
        Ok(key)
    }

    /// Send one chat completion and return the JSON object in its content.
    ///
    /// Transport failures and 5xx responses are retried up to the configured
    /// budget; every other failure is classified and returned immediately.
    async fn complete_json(
        &self,
        operation: &'static str,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<Value, AdvisorError> {
        let key = self.checked_api_key()?;
        let url = chat_endpoint(&self.base_url);
        let body = chat_body(&self.model, system_prompt, user_prompt);

        let mut last_error =
            AdvisorError::Unknown("advisor request was never attempted".to_string());
        for attempt in 0..=self.max_retries {
            let response =
                match self.client.post(&url).bearer_auth(key).json(&body).send().await {
                    Ok(response) => response,
                    Err(error) => {
                        warn!(
                            event_name = "advisor.request.transport_failed",
                            operation,
                            attempt,
                            error = %error,
                            "advisor request could not be sent"
                        );
                        last_error =
                            AdvisorError::Service(format!("advisor request failed: {error}"));
                        continue;
                    }
                };

            let status = response.status();
            if status.is_server_error() {
                let detail = response.text().await.unwrap_or_default();
                warn!(
                    event_name = "advisor.request.server_error",
                    operation,
                    attempt,
                    status = %status,
                    "advisor returned a server error"
                );
                last_error = AdvisorError::Service(failure_message(status, &detail));
                continue;
            }
            if !status.is_success() {
                let detail = response.text().await.unwrap_or_default();
                let failure = classify_failure(status, &detail);
                error!(
                    event_name = "advisor.request.rejected",
                    operation,
                    status = %status,
                    code = %failure.code(),
                    "advisor rejected the request"
                );
                return Err(failure);
            }

            let completion: ChatCompletion = response.json().await.map_err(|error| {
                error!(
                    event_name = "advisor.response.decode_failed",
                    operation,
                    error = %error,
                    "advisor response was not a chat completion"
                );
                AdvisorError::Service(format!("advisor response could not be decoded: {error}"))
            })?;
            let content = completion
                .choices
                .into_iter()
                .next()
                .map(|choice| choice.message.content)
                .ok_or_else(|| {
                    AdvisorError::Service("advisor returned no completion choices".to_string())
                })?;
            return serde_json::from_str(&content).map_err(|error| {
                AdvisorError::Service(format!("advisor content was not valid JSON: {error}"))
            });
        }

        Err(last_error)
    }
}

#[async_trait]
impl GiftAdvisor for HttpGiftAdvisor {
    async fn analyze_recipient(
        &self,
        description: &str,
    ) -> Result<RecipientAnalysis, AdvisorError> {
        let (system, user) = analysis_prompts(description);
        let value = self.complete_json("analyze_recipient", &system, &user).await?;
        serde_json::from_value(value).map_err(|error| {
            AdvisorError::Service(format!(
                "advisor analysis did not match the expected shape: {error}"
            ))
        })
    }

    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<RawRecommendation>, AdvisorError> {
        let (system, user) = recommendation_prompts(request);
        let value = self.complete_json("recommend", &system, &user).await?;
        let batch: RecommendationBatch = serde_json::from_value(value).map_err(|error| {
            AdvisorError::Service(format!(
                "advisor recommendations did not match the expected shape: {error}"
            ))
        })?;
        Ok(clamp_scores(batch.recommendations))
    }

    async fn compose_message(
        &self,
        request: &MessageRequest,
    ) -> Result<ComposedMessage, AdvisorError> {
        request.validate()?;
        let (system, user) = message_prompts(request);
        let value = self.complete_json("compose_message", &system, &user).await?;
        let payload: ComposedPayload = serde_json::from_value(value).map_err(|error| {
            AdvisorError::Service(format!(
                "advisor message did not match the expected shape: {error}"
            ))
        })?;
        if payload.content.trim().is_empty() {
            return Err(AdvisorError::Service("advisor returned an empty message".to_string()));
        }
        Ok(ComposedMessage::new(payload.content, request.style()))
    }
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Deserialize)]
struct RecommendationBatch {
    recommendations: Vec<RawRecommendation>,
}

#[derive(Deserialize)]
struct ComposedPayload {
    content: String,
}

fn chat_endpoint(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

fn chat_body(model: &str, system_prompt: &str, user_prompt: &str) -> Value {
    json!({
        "model": model,
        "messages": [
            {"role": "system", "content": system_prompt},
            {"role": "user", "content": user_prompt},
        ],
        "response_format": {"type": "json_object"},
    })
}

/// Turn a non-success response into the advisor error it stands for.
fn classify_failure(status: StatusCode, body: &str) -> AdvisorError {
    let message = failure_message(status, body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AdvisorError::InvalidApiKey(message),
        StatusCode::TOO_MANY_REQUESTS => {
            let lowered = message.to_lowercase();
            if lowered.contains("quota") || lowered.contains("billing") {
                AdvisorError::QuotaExceeded(message)
            } else {
                AdvisorError::RateLimited(message)
            }
        }
        _ => AdvisorError::from_service_message(&message),
    }
}

/// Best failure description available: the service's own error message,
/// then the raw body, then the bare status.
fn failure_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value["error"]["message"].as_str() {
            if !message.trim().is_empty() {
                return message.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("advisor returned HTTP {status}")
    } else {
        trimmed.to_string()
    }
}

fn clamp_scores(mut recommendations: Vec<RawRecommendation>) -> Vec<RawRecommendation> {
    for recommendation in &mut recommendations {
        recommendation.suitability_score =
            recommendation.suitability_score.clamp(SCORE_FLOOR, SCORE_CEILING);
        recommendation.occasion_match =
            recommendation.occasion_match.clamp(SCORE_FLOOR, SCORE_CEILING);
    }
    recommendations
}

fn analysis_prompts(description: &str) -> (String, String) {
    let system = "You are an expert gift consultant. Analyze the user's request to \
                  understand who they are shopping for and extract key details about the \
                  recipient, occasion, and preferences. Respond with one JSON object \
                  containing: age (number, omit when unknown), gender (one of \"male\", \
                  \"female\", \"non-binary\", \"unknown\", omit when unknown), interests \
                  (array of strings), relationship (string), occasion (string), budget \
                  (object with numeric min and max, omit when unknown), personality \
                  (array of strings), lifestyle (array of strings), preferences (array \
                  of strings). Never invent facts that are not in the request."
        .to_string();
    let user = format!(
        "Analyze this gift request and extract detailed information about the recipient: \"{description}\""
    );
    (system, user)
}

fn recommendation_prompts(request: &RecommendationRequest) -> (String, String) {
    let system = "You are an expert gift recommendation AI. Based on the recipient \
                  analysis, suggest 20-30 highly relevant gift ideas across different \
                  categories and price points, each with clear reasoning for why it \
                  suits the recipient. Respond with one JSON object of the form \
                  {\"recommendations\": [...]} where every entry has: name, description, \
                  category, priceRange (object with numeric min and max), reasoning, \
                  suitabilityScore (1-10), tags (array of strings), ageAppropriate \
                  (boolean), occasionMatch (1-10)."
        .to_string();

    let mut user = format!("Original request: \"{}\"", request.prompt);
    if let Some(analysis) = &request.analysis {
        user.push_str("\n\nRecipient analysis:\n");
        user.push_str(&render_analysis(analysis));
    }
    if let Some(occasion) = &request.occasion {
        user.push_str(&format!("\n\nOccasion: {}", occasion.occasion));
        if let Some(mood) = &occasion.mood {
            user.push_str(&format!(" (mood: {mood})"));
        }
        if let Some(formality) = &occasion.formality {
            user.push_str(&format!(" (formality: {formality})"));
        }
        if let Some(budget_range) = &occasion.budget_range {
            user.push_str(&format!(" (budget: {budget_range})"));
        }
    }
    if let Some(filters) = &request.filters {
        let constraints = render_filters(filters);
        if !constraints.is_empty() {
            user.push_str("\n\nHard constraints:\n");
            user.push_str(&constraints);
        }
    }
    user.push_str("\n\nGenerate personalized gift recommendations that match these specific details.");
    (system, user)
}

fn render_analysis(analysis: &RecipientAnalysis) -> String {
    let age = analysis.age.map_or_else(|| "Not specified".to_string(), |age| age.to_string());
    let gender = analysis.gender.map_or("Not specified", Gender::as_str);
    let budget = analysis.budget.map_or_else(
        || "Not specified".to_string(),
        |budget| format!("${}-${}", budget.min, budget.max),
    );
    format!(
        "- Age: {age}\n- Gender: {gender}\n- Interests: {}\n- Relationship: {}\n- Occasion: {}\n- Budget: {budget}\n- Personality: {}\n- Lifestyle: {}\n- Preferences: {}",
        render_list(&analysis.interests),
        analysis.relationship,
        analysis.occasion,
        render_list(&analysis.personality),
        render_list(&analysis.lifestyle),
        render_list(&analysis.preferences),
    )
}

fn render_list(values: &[String]) -> String {
    if values.is_empty() {
        "Not specified".to_string()
    } else {
        values.join(", ")
    }
}

// `sort_by` is deliberately absent here: ordering is decided locally by the
// ranking engine, never by the advisor.
fn render_filters(filters: &giftery_core::FilterOptions) -> String {
    let mut lines = Vec::new();
    if let Some(category) = &filters.category {
        lines.push(format!("- Category: {category}"));
    }
    if let Some(min) = filters.price_min {
        lines.push(format!("- Minimum price: ${min}"));
    }
    if let Some(max) = filters.price_max {
        lines.push(format!("- Maximum price: ${max}"));
    }
    if filters.eco_friendly == Some(true) {
        lines.push("- Prefer eco-friendly items".to_string());
    }
    if filters.handmade == Some(true) {
        lines.push("- Prefer handmade items".to_string());
    }
    if filters.local == Some(true) {
        lines.push("- Prefer locally made items".to_string());
    }
    if let Some(rating) = filters.rating_min {
        lines.push(format!("- Minimum rating: {rating}"));
    }
    lines.join("\n")
}

fn message_prompts(request: &MessageRequest) -> (String, String) {
    let style = request.style();
    let system = format!(
        "You are a professional gift message writer. Write a short {} message whose \
         tone is {}. Respond with one JSON object of the form {{\"content\": \"...\"}} \
         containing only the finished message text.",
        style.as_str(),
        style.tone_hint(),
    );
    let user = match request {
        MessageRequest::GreetingCard { recipient_name, occasion, personal_message, .. } => {
            let mut prompt = format!(
                "Write a greeting card message for {recipient_name} for the occasion of {occasion}."
            );
            if let Some(personal) = personal_message {
                if !personal.trim().is_empty() {
                    prompt.push_str(&format!(" Weave in this personal note: \"{personal}\"."));
                }
            }
            prompt
        }
        MessageRequest::ThankYouNote { gift_name, sender_name, occasion, .. } => format!(
            "Write a thank-you note from {sender_name} for receiving {gift_name} on the occasion of {occasion}."
        ),
    };
    (system, user)
}

//! The advisor trait and its request/response vocabulary.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use giftery_core::{FilterOptions, OccasionInfo, RawRecommendation, RecipientAnalysis};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AdvisorError;

/// An AI gift advisor.
///
/// Implementations only ever *suggest*: they hand back raw recommendations
/// and free-form analysis, and everything that decides what the user
/// actually sees (normalization, filtering, ranking) happens in
/// deterministic core code afterwards. The trait is object safe so the
/// pipeline and the CLI can hold a `dyn GiftAdvisor` chosen at startup.
#[async_trait]
pub trait GiftAdvisor: Send + Sync {
    /// Extract structured facts about a gift recipient from a free-form
    /// description of them.
    async fn analyze_recipient(&self, description: &str)
        -> Result<RecipientAnalysis, AdvisorError>;

    /// Produce raw gift recommendations for the given request.
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<RawRecommendation>, AdvisorError>;

    /// Write a gift message (greeting card or thank-you note).
    async fn compose_message(&self, request: &MessageRequest)
        -> Result<ComposedMessage, AdvisorError>;
}

/// Input to [`GiftAdvisor::recommend`].
///
/// Only the prompt is required; the structured fields sharpen the advisor's
/// answer when the caller has already run an analysis or knows the occasion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<RecipientAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<OccasionInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterOptions>,
}

impl RecommendationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), ..Self::default() }
    }

    pub fn with_analysis(mut self, analysis: RecipientAnalysis) -> Self {
        self.analysis = Some(analysis);
        self
    }

    pub fn with_occasion(mut self, occasion: OccasionInfo) -> Self {
        self.occasion = Some(occasion);
        self
    }

    pub fn with_filters(mut self, filters: FilterOptions) -> Self {
        self.filters = Some(filters);
        self
    }
}

/// Tone the advisor should write a message in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStyle {
    #[default]
    Heartfelt,
    Funny,
    Formal,
    Casual,
    Romantic,
    Grateful,
    Warm,
    Professional,
}

impl MessageStyle {
    pub const ALL: [MessageStyle; 8] = [
        MessageStyle::Heartfelt,
        MessageStyle::Funny,
        MessageStyle::Formal,
        MessageStyle::Casual,
        MessageStyle::Romantic,
        MessageStyle::Grateful,
        MessageStyle::Warm,
        MessageStyle::Professional,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heartfelt => "heartfelt",
            Self::Funny => "funny",
            Self::Formal => "formal",
            Self::Casual => "casual",
            Self::Romantic => "romantic",
            Self::Grateful => "grateful",
            Self::Warm => "warm",
            Self::Professional => "professional",
        }
    }

    /// Phrase handed to the advisor describing how this style should read.
    pub fn tone_hint(self) -> &'static str {
        match self {
            Self::Heartfelt => "sincere and emotionally warm",
            Self::Funny => "lighthearted with gentle humor",
            Self::Formal => "polished and respectful",
            Self::Casual => "relaxed and conversational",
            Self::Romantic => "affectionate and intimate",
            Self::Grateful => "appreciative and specific about the kindness",
            Self::Warm => "friendly and encouraging",
            Self::Professional => "courteous and businesslike",
        }
    }
}

impl std::fmt::Display for MessageStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MessageStyle {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "heartfelt" => Ok(Self::Heartfelt),
            "funny" => Ok(Self::Funny),
            "formal" => Ok(Self::Formal),
            "casual" => Ok(Self::Casual),
            "romantic" => Ok(Self::Romantic),
            "grateful" => Ok(Self::Grateful),
            "warm" => Ok(Self::Warm),
            "professional" => Ok(Self::Professional),
            other => Err(format!(
                "unsupported message style `{other}` (expected heartfelt|funny|formal|casual|romantic|grateful|warm|professional)"
            )),
        }
    }
}

/// Input to [`GiftAdvisor::compose_message`].
///
/// Both message kinds share a style and an occasion but carry different
/// required fields, so they are one tagged enum rather than a single struct
/// full of options that only make sense together.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MessageRequest {
    GreetingCard {
        recipient_name: String,
        occasion: String,
        style: MessageStyle,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        personal_message: Option<String>,
    },
    ThankYouNote {
        gift_name: String,
        sender_name: String,
        occasion: String,
        style: MessageStyle,
    },
}

impl MessageRequest {
    pub fn greeting_card(
        recipient_name: impl Into<String>,
        occasion: impl Into<String>,
        style: MessageStyle,
    ) -> Self {
        Self::GreetingCard {
            recipient_name: recipient_name.into(),
            occasion: occasion.into(),
            style,
            personal_message: None,
        }
    }

    pub fn thank_you_note(
        gift_name: impl Into<String>,
        sender_name: impl Into<String>,
        occasion: impl Into<String>,
        style: MessageStyle,
    ) -> Self {
        Self::ThankYouNote {
            gift_name: gift_name.into(),
            sender_name: sender_name.into(),
            occasion: occasion.into(),
            style,
        }
    }

    /// Attach a personal note to weave into a greeting card.
    ///
    /// Thank-you notes have no personal-message slot; on them this is a
    /// no-op.
    pub fn with_personal_message(mut self, message: impl Into<String>) -> Self {
        if let Self::GreetingCard { personal_message, .. } = &mut self {
            *personal_message = Some(message.into());
        }
        self
    }

    /// Wire tag of this request kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::GreetingCard { .. } => "greeting_card",
            Self::ThankYouNote { .. } => "thank_you_note",
        }
    }

    pub fn style(&self) -> MessageStyle {
        match self {
            Self::GreetingCard { style, .. } | Self::ThankYouNote { style, .. } => *style,
        }
    }

    pub fn occasion(&self) -> &str {
        match self {
            Self::GreetingCard { occasion, .. } | Self::ThankYouNote { occasion, .. } => occasion,
        }
    }

    /// Reject requests with blank required fields before any network call.
    pub fn validate(&self) -> Result<(), AdvisorError> {
        let blank = |value: &str| value.trim().is_empty();
        let field = match self {
            Self::GreetingCard { recipient_name, .. } if blank(recipient_name) => "recipient_name",
            Self::GreetingCard { occasion, .. } if blank(occasion) => "occasion",
            Self::ThankYouNote { gift_name, .. } if blank(gift_name) => "gift_name",
            Self::ThankYouNote { sender_name, .. } if blank(sender_name) => "sender_name",
            Self::ThankYouNote { occasion, .. } if blank(occasion) => "occasion",
            _ => return Ok(()),
        };
        Err(AdvisorError::InvalidRequest(format!("{field} must not be blank")))
    }
}

/// A finished message from the advisor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComposedMessage {
    pub id: Uuid,
    pub text: String,
    pub style: MessageStyle,
    pub created_at: DateTime<Utc>,
}

impl ComposedMessage {
    /// Stamp advisor-written text with a fresh id and the current time.
    pub fn new(text: impl Into<String>, style: MessageStyle) -> Self {
        Self { id: Uuid::new_v4(), text: text.into(), style, created_at: Utc::now() }
    }
}

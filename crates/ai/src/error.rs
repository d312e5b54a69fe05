use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire-level failure code reported alongside advisor errors.
///
/// These strings are part of the public payload contract: the CLI emits them
/// verbatim and the recommendation pipeline records which code triggered a
/// synthesized fallback, so renaming a variant is a breaking change.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdvisorErrorCode {
    MissingApiKey,
    InvalidApiKey,
    QuotaExceeded,
    RateLimited,
    AiServiceError,
    UnknownError,
}

impl AdvisorErrorCode {
    /// Canonical wire spelling of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingApiKey => "MISSING_API_KEY",
            Self::InvalidApiKey => "INVALID_API_KEY",
            Self::QuotaExceeded => "QUOTA_EXCEEDED",
            Self::RateLimited => "RATE_LIMITED",
            Self::AiServiceError => "AI_SERVICE_ERROR",
            Self::UnknownError => "UNKNOWN_ERROR",
        }
    }
}

impl std::fmt::Display for AdvisorErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything that can go wrong while talking to the gift advisor.
///
/// Errors are cloneable on purpose: the pipeline keeps the original failure
/// for logging while handing its [`AdvisorErrorCode`] to callers, and test
/// doubles replay scripted failures without rebuilding them.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("no advisor API key is configured")]
    MissingApiKey,
    #[error("advisor API key was rejected: {0}")]
    InvalidApiKey(String),
    #[error("advisor quota exhausted: {0}")]
    QuotaExceeded(String),
    #[error("advisor rate limit hit: {0}")]
    RateLimited(String),
    #[error("advisor service failure: {0}")]
    Service(String),
    #[error("invalid advisor request: {0}")]
    InvalidRequest(String),
    #[error("unexpected advisor failure: {0}")]
    Unknown(String),
}

impl AdvisorError {
    /// Wire code for this failure.
    ///
    /// [`AdvisorError::InvalidRequest`] is a caller mistake rather than a
    /// service fault; the wire contract has no dedicated code for it, so it
    /// lands in the `UNKNOWN_ERROR` bucket.
    pub fn code(&self) -> AdvisorErrorCode {
        match self {
            Self::MissingApiKey => AdvisorErrorCode::MissingApiKey,
            Self::InvalidApiKey(_) => AdvisorErrorCode::InvalidApiKey,
            Self::QuotaExceeded(_) => AdvisorErrorCode::QuotaExceeded,
            Self::RateLimited(_) => AdvisorErrorCode::RateLimited,
            Self::Service(_) => AdvisorErrorCode::AiServiceError,
            Self::InvalidRequest(_) | Self::Unknown(_) => AdvisorErrorCode::UnknownError,
        }
    }

    /// Classify a failure message reported by the advisor service itself.
    ///
    /// Vendors stuff the interesting detail into free-form error text, so we
    /// scan for the phrases they actually use. Quota exhaustion is checked
    /// before rate limiting because quota errors frequently arrive with an
    /// HTTP 429 and the message is the only way to tell the two apart.
    pub fn from_service_message(message: &str) -> Self {
        let lowered = message.to_lowercase();
        if lowered.contains("api key") {
            Self::InvalidApiKey(message.to_string())
        } else if lowered.contains("quota") || lowered.contains("billing") {
            Self::QuotaExceeded(message.to_string())
        } else if lowered.contains("rate limit") {
            Self::RateLimited(message.to_string())
        } else {
            Self::Service(message.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AdvisorError, AdvisorErrorCode};

    #[test]
    fn codes_serialize_to_their_wire_spelling() {
        let cases = [
            (AdvisorErrorCode::MissingApiKey, "MISSING_API_KEY"),
            (AdvisorErrorCode::InvalidApiKey, "INVALID_API_KEY"),
            (AdvisorErrorCode::QuotaExceeded, "QUOTA_EXCEEDED"),
            (AdvisorErrorCode::RateLimited, "RATE_LIMITED"),
            (AdvisorErrorCode::AiServiceError, "AI_SERVICE_ERROR"),
            (AdvisorErrorCode::UnknownError, "UNKNOWN_ERROR"),
        ];

        for (code, wire) in cases {
            assert_eq!(code.as_str(), wire);
            assert_eq!(serde_json::to_string(&code).unwrap(), format!("\"{wire}\""));
        }
    }

    #[test]
    fn every_error_maps_to_a_code() {
        assert_eq!(AdvisorError::MissingApiKey.code(), AdvisorErrorCode::MissingApiKey);
        assert_eq!(
            AdvisorError::InvalidApiKey("bad key".into()).code(),
            AdvisorErrorCode::InvalidApiKey
        );
        assert_eq!(
            AdvisorError::QuotaExceeded("out of credit".into()).code(),
            AdvisorErrorCode::QuotaExceeded
        );
        assert_eq!(
            AdvisorError::RateLimited("slow down".into()).code(),
            AdvisorErrorCode::RateLimited
        );
        assert_eq!(
            AdvisorError::Service("upstream 500".into()).code(),
            AdvisorErrorCode::AiServiceError
        );
        assert_eq!(
            AdvisorError::InvalidRequest("blank recipient".into()).code(),
            AdvisorErrorCode::UnknownError
        );
        assert_eq!(AdvisorError::Unknown("surprise".into()).code(), AdvisorErrorCode::UnknownError);
    }

    #[test]
    fn service_messages_classify_by_vendor_phrasing() {
        assert_eq!(
            AdvisorError::from_service_message("Incorrect API key provided"),
            AdvisorError::InvalidApiKey("Incorrect API key provided".into())
        );
        assert_eq!(
            AdvisorError::from_service_message("You exceeded your current quota"),
            AdvisorError::QuotaExceeded("You exceeded your current quota".into())
        );
        assert_eq!(
            AdvisorError::from_service_message("Please check your billing details"),
            AdvisorError::QuotaExceeded("Please check your billing details".into())
        );
        assert_eq!(
            AdvisorError::from_service_message("Rate limit reached for gpt-4o"),
            AdvisorError::RateLimited("Rate limit reached for gpt-4o".into())
        );
        assert_eq!(
            AdvisorError::from_service_message("The model is overloaded"),
            AdvisorError::Service("The model is overloaded".into())
        );
    }

    #[test]
    fn quota_wins_over_rate_limit_when_both_phrases_appear() {
        let error =
            AdvisorError::from_service_message("Rate limit: you exceeded your current quota");
        assert_eq!(error.code(), AdvisorErrorCode::QuotaExceeded);
    }
}

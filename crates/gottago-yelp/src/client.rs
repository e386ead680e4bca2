//! HTTP client for the Yelp AI chat endpoint.
//!
//! Wraps `reqwest` with bearer-credential handling and two call shapes: a
//! typed [`YelpClient::chat`] for in-process consumers, and a verbatim
//! [`YelpClient::chat_raw`] for the gateway, which relays whatever status
//! and body the upstream produced.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::error::YelpError;
use crate::types::{ChatRequest, ChatResponse};

const DEFAULT_BASE_URL: &str = "https://api.yelp.com/ai/chat/v2";

/// Client for the Yelp AI conversational search API.
///
/// Use [`YelpClient::new`] for production or [`YelpClient::with_base_url`]
/// to point at a mock server in tests. No `Debug` impl: the client holds
/// the credential.
#[derive(Clone)]
pub struct YelpClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

/// The upstream's verbatim answer: HTTP status plus the body parsed as JSON
/// when possible, else wrapped as `{"raw": <text>}`.
#[derive(Debug, Clone)]
pub struct RawChatOutcome {
    pub status: StatusCode,
    pub body: serde_json::Value,
}

impl RawChatOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl YelpClient {
    /// Creates a new client pointed at the production chat endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`YelpError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, YelpError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`YelpError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`YelpError::InvalidBaseUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, YelpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent.to_owned())
            .build()?;

        let base_url =
            Url::parse(base_url).map_err(|_| YelpError::InvalidBaseUrl(base_url.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Sends a chat turn and parses the response into [`ChatResponse`].
    ///
    /// # Errors
    ///
    /// - [`YelpError::Api`] on a non-2xx status, with the raw body preserved.
    /// - [`YelpError::Http`] on network failure.
    /// - [`YelpError::Deserialize`] if a 2xx body does not match the
    ///   expected shape.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, YelpError> {
        let outcome = self.chat_raw(request).await?;
        if !outcome.is_success() {
            return Err(YelpError::Api {
                status: outcome.status.as_u16(),
                details: outcome.body,
            });
        }

        serde_json::from_value(outcome.body).map_err(|e| YelpError::Deserialize {
            context: "chat response".to_string(),
            source: e,
        })
    }

    /// Sends a chat turn and returns the upstream status and body verbatim.
    ///
    /// Non-2xx statuses are NOT errors here; the gateway passes them through
    /// to its own caller. A body that is not valid JSON is wrapped as
    /// `{"raw": <text>}` so diagnostics survive.
    ///
    /// # Errors
    ///
    /// Returns [`YelpError::Http`] only on transport failure.
    pub async fn chat_raw(&self, request: &ChatRequest) -> Result<RawChatOutcome, YelpError> {
        tracing::debug!(query = %request.query, follow_up = request.chat_id.is_some(), "sending chat turn");

        let response = self
            .client
            .post(self.base_url.clone())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let body = serde_json::from_str(&text)
            .unwrap_or_else(|_| serde_json::json!({ "raw": text }));

        Ok(RawChatOutcome { status, body })
    }
}

//! HTTP client for the prospect generation service.
//!
//! Posts a [`GenerationRequest`] as JSON to `{base}/generate-prospects` and
//! expects `{ "prospects": [...] }` back. A top-level `"error"` string in the
//! body, or any non-2xx status, is surfaced as a [`GeneratorError`]. There is
//! no retry: a failed generation is retried by the user, not by us.

use std::time::Duration;

use prospector_core::{AppConfig, ProspectRecord};
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::GeneratorError;
use crate::generator::ProspectGenerator;
use crate::types::GenerationRequest;

const GENERATE_PATH: &str = "generate-prospects";

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    prospects: Vec<ProspectRecord>,
}

/// Client for the generation service.
///
/// Use [`HttpGenerator::from_config`] in the application or
/// [`HttpGenerator::new`] to point at a mock server in tests.
pub struct HttpGenerator {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl HttpGenerator {
    /// Creates a client for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeneratorError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(
        base_url: &str,
        api_key: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, GeneratorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join` appends rather than replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join(GENERATE_PATH))
            .map_err(|e| GeneratorError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.map(str::to_owned),
        })
    }

    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidBaseUrl`] if no generator URL is
    /// configured or it does not parse, or [`GeneratorError::Http`] if the
    /// HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, GeneratorError> {
        let base_url =
            config
                .require_generator_url()
                .map_err(|e| GeneratorError::InvalidBaseUrl {
                    url: String::new(),
                    reason: e.to_string(),
                })?;
        Self::new(
            base_url,
            config.generator_api_key.as_deref(),
            config.generator_timeout_secs,
            &config.user_agent,
        )
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn post(&self, request: &GenerationRequest) -> Result<Vec<ProspectRecord>, GeneratorError> {
        let mut builder = self.client.post(self.endpoint.clone()).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(GeneratorError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
                message: error_message(&text).unwrap_or_else(|| truncate(&text, 200)),
            });
        }

        let body: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| GeneratorError::Deserialize {
                context: format!("generate(vertical={})", request.vertical_id),
                source: e,
            })?;

        if let Some(message) = body.get("error").and_then(serde_json::Value::as_str) {
            return Err(GeneratorError::Service(message.to_string()));
        }

        let parsed: GenerationResponse =
            serde_json::from_value(body).map_err(|e| GeneratorError::Deserialize {
                context: format!("generate(vertical={})", request.vertical_id),
                source: e,
            })?;

        Ok(parsed.prospects)
    }
}

impl ProspectGenerator for HttpGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<ProspectRecord>, GeneratorError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            vertical = %request.vertical_id,
            scope = %request.scope,
            "requesting prospect generation"
        );
        self.post(request).await
    }
}

/// Pull a human-readable `"error"` string out of a JSON error body.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .as_str()
        .map(str::to_owned)
}

fn truncate(s: &str, max_chars: usize) -> String {
    let trimmed = s.trim();
    if trimmed.chars().count() <= max_chars {
        trimmed.to_string()
    } else {
        let head: String = trimmed.chars().take(max_chars).collect();
        format!("{head}…")
    }
}

use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{SOURCE_LANGUAGE, TARGET_LANGUAGE, Translator};

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'static str,
    target: &'static str,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// Client for a LibreTranslate-compatible `/translate` endpoint.
pub struct LibreTranslateClient {
    client: Client,
    endpoint: String,
}

impl LibreTranslateClient {
    /// Creates a client posting to `endpoint`; each request gives up after `timeout`.
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Translator for LibreTranslateClient {
    /// Sends one translation request.
    ///
    /// Any transport error, timeout or non-success status is returned as an
    /// error; there is no retry. A response without `translatedText` yields an
    /// empty string.
    async fn translate(&self, text: &str) -> Result<String> {
        let request = TranslateRequest {
            q: text,
            source: SOURCE_LANGUAGE,
            target: TARGET_LANGUAGE,
            format: "text",
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .with_context(|| {
                format!("Failed to connect to translation endpoint: {}", self.endpoint)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Translation request failed with status {status}: {body}");
        }

        let payload: TranslateResponse = response
            .json()
            .await
            .context("Failed to decode translation response")?;

        Ok(payload
            .translated_text
            .map(|t| t.trim().to_string())
            .unwrap_or_default())
    }
}

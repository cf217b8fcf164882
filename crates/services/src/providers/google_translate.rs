use std::env;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::error::ProviderError;

use super::TranslationProvider;

const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
const ENDPOINT_ENV: &str = "KOTOBA_TRANSLATE_API_URL";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Translation client for the unauthenticated `translate_a/single`
/// endpoint (the one the `gtx` web client uses).
#[derive(Debug, Clone)]
pub struct GoogleTranslateClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl GoogleTranslateClient {
    /// Build a client against the default endpoint, or the
    /// `KOTOBA_TRANSLATE_API_URL` override when set.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidEndpoint` if the override does not
    /// parse, or an HTTP error if the client cannot be built.
    pub fn from_env() -> Result<Self, ProviderError> {
        let raw = env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.into());
        Self::with_endpoint(raw.parse()?)
    }

    /// Build a client against an explicit endpoint.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error if the client cannot be built.
    pub fn with_endpoint(endpoint: Url) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, endpoint })
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslateClient {
    async fn translate(
        &self,
        word: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("client", "gtx")
            .append_pair("sl", source)
            .append_pair("tl", target)
            .append_pair("dt", "t")
            .append_pair("q", word);

        tracing::debug!(%word, %source, %target, "requesting translation");
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::HttpStatus(response.status()));
        }

        let payload: Value = response.json().await?;
        extract_translation(&payload).ok_or(ProviderError::EmptyPayload)
    }
}

/// Pull the translated text out of the endpoint's nested-array payload.
///
/// The shape is `[[["<translated>", "<original>", ...], ...], ...]` with one
/// inner entry per sentence segment; the segments concatenate into the full
/// translation.
fn extract_translation(payload: &Value) -> Option<String> {
    let segments = payload.get(0)?.as_array()?;
    let mut text = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(Value::as_str) {
            text.push_str(part);
        }
    }
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

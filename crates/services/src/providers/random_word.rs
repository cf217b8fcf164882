use std::env;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::error::ProviderError;

use super::WordProvider;

const DEFAULT_ENDPOINT: &str = "https://random-word-api.vercel.app/api?words=1";
const ENDPOINT_ENV: &str = "KOTOBA_WORD_API_URL";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// The word API answers with a JSON array of words.
#[derive(Debug, Deserialize)]
struct WordBatch(Vec<String>);

/// HTTP word source backed by a random-word API.
#[derive(Debug, Clone)]
pub struct RandomWordClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl RandomWordClient {
    /// Build a client against the default endpoint, or the
    /// `KOTOBA_WORD_API_URL` override when set.
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
impl WordProvider for RandomWordClient {
    async fn fetch_random_word(&self) -> Result<String, ProviderError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching random word");
        let response = self.http.get(self.endpoint.clone()).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::HttpStatus(response.status()));
        }
        let batch: WordBatch = response.json().await?;
        first_word(batch)
    }
}

/// Pick the first non-blank word out of the payload.
fn first_word(batch: WordBatch) -> Result<String, ProviderError> {
    batch
        .0
        .into_iter()
        .map(|word| word.trim().to_string())
        .find(|word| !word.is_empty())
        .ok_or(ProviderError::EmptyPayload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_the_first_word() {
        let word = first_word(WordBatch(vec!["cat".into(), "dog".into()])).unwrap();
        assert_eq!(word, "cat");
    }

    #[test]
    fn trims_and_skips_blank_entries() {
        let word = first_word(WordBatch(vec!["  ".into(), " cat\n".into()])).unwrap();
        assert_eq!(word, "cat");
    }

    #[test]
    fn empty_payload_is_an_error() {
        let err = first_word(WordBatch(Vec::new())).unwrap_err();
        assert!(matches!(err, ProviderError::EmptyPayload));

        let err = first_word(WordBatch(vec![String::new()])).unwrap_err();
        assert!(matches!(err, ProviderError::EmptyPayload));
    }

    #[test]
    fn default_endpoint_parses() {
        assert!(DEFAULT_ENDPOINT.parse::<Url>().is_ok());
    }
}

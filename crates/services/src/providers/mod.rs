use async_trait::async_trait;

use crate::error::ProviderError;

mod google_translate;
mod random_word;

pub use google_translate::GoogleTranslateClient;
pub use random_word::RandomWordClient;

/// Supplies one random source-language word per call.
#[async_trait]
pub trait WordProvider: Send + Sync {
    /// Fetch a single random word.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on network failure, a non-success status, or
    /// an empty/malformed payload.
    async fn fetch_random_word(&self) -> Result<String, ProviderError>;
}

/// Translates a word between the given languages.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate `word` from `source` to `target` (BCP-47 style codes,
    /// e.g. `"en"` and `"ja"`).
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on network failure, timeout, a non-success
    /// status, or a payload with no translation in it.
    async fn translate(
        &self,
        word: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError>;
}

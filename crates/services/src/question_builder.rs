use std::sync::Arc;

use kotoba_core::model::Question;

use crate::providers::{TranslationProvider, WordProvider};

/// Placeholder used when the word provider is down, so a round can always
/// render.
const FALLBACK_WORD: &str = "word";
const SOURCE_LANG: &str = "en";
const TARGET_LANG: &str = "ja";

/// Assembles one round's `Question` from the word and translation
/// providers.
///
/// Provider failures never escape this type: a failed word fetch falls back
/// to a placeholder word, a failed translation falls back to the
/// untranslated word. Failures are logged at `warn` and otherwise invisible
/// to the quiz.
pub struct QuestionBuilder {
    words: Arc<dyn WordProvider>,
    translations: Arc<dyn TranslationProvider>,
}

impl QuestionBuilder {
    #[must_use]
    pub fn new(words: Arc<dyn WordProvider>, translations: Arc<dyn TranslationProvider>) -> Self {
        Self {
            words,
            translations,
        }
    }

    /// Fetch a word, translate it, and derive the kana/romaji forms.
    ///
    /// Never fails: each provider call falls back on error, and the
    /// transliteration stages pass unmappable text through. No retries; a
    /// single failure goes straight to the fallback.
    pub async fn build(&self) -> Question {
        let english = match self.words.fetch_random_word().await {
            Ok(word) => word,
            Err(err) => {
                tracing::warn!(error = %err, fallback = FALLBACK_WORD, "word fetch failed");
                FALLBACK_WORD.to_string()
            }
        };

        let japanese = match self
            .translations
            .translate(&english, SOURCE_LANG, TARGET_LANG)
            .await
        {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    word = %english,
                    "translation failed, keeping the word untranslated"
                );
                english.clone()
            }
        };

        Question::from_pair(english, japanese)
    }
}

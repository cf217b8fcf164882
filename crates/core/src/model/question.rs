use crate::script;
use crate::transliterate::{to_kana, to_romaji};

/// One round's material: an English word, its Japanese translation, and the
/// derived kana and romaji forms.
///
/// Immutable once built; a session discards it when the round advances.
/// `romaji` is the canonical answer key: lowercase, no whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    english: String,
    japanese: String,
    kana: String,
    romaji: String,
}

impl Question {
    /// Build a question from a word and its translation, deriving the kana
    /// reading and the normalized romaji answer key.
    ///
    /// # Examples
    ///
    /// ```
    /// use kotoba_core::model::Question;
    ///
    /// let question = Question::from_pair("cat", "猫");
    /// assert_eq!(question.kana(), "ねこ");
    /// assert_eq!(question.romaji(), "neko");
    /// ```
    #[must_use]
    pub fn from_pair(english: impl Into<String>, japanese: impl Into<String>) -> Self {
        let english = english.into();
        let japanese = japanese.into();
        let kana = to_kana(&japanese);
        let romaji = to_romaji(&kana).to_lowercase();
        Self {
            english,
            japanese,
            kana,
            romaji,
        }
    }

    #[must_use]
    pub fn english(&self) -> &str {
        &self.english
    }

    #[must_use]
    pub fn japanese(&self) -> &str {
        &self.japanese
    }

    #[must_use]
    pub fn kana(&self) -> &str {
        &self.kana
    }

    /// The answer key: lowercase romaji with no whitespace.
    #[must_use]
    pub fn romaji(&self) -> &str {
        &self.romaji
    }

    /// The kana reading when it adds information, i.e. when the Japanese
    /// text contains ideographs the user may not be able to sound out.
    #[must_use]
    pub fn kana_hint(&self) -> Option<&str> {
        if script::contains_ideograph(&self.japanese) {
            Some(&self.kana)
        } else {
            None
        }
    }
}

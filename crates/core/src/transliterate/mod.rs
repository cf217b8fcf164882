mod hepburn;
mod readings;

use crate::script;

/// Convert mixed-script Japanese text to a kana-only representation.
///
/// Ideographs are replaced by their phonetic readings; kana and anything
/// else pass through unchanged. Text without any ideograph is returned
/// as-is, so kana-only and non-Japanese input is a cheap no-op.
///
/// # Examples
///
/// ```
/// use kotoba_core::transliterate::to_kana;
///
/// assert_eq!(to_kana("猫"), "ねこ");
/// assert_eq!(to_kana("ねこ"), "ねこ");
/// assert_eq!(to_kana("word"), "word");
/// ```
#[must_use]
pub fn to_kana(text: &str) -> String {
    if !script::contains_ideograph(text) {
        return text.to_string();
    }
    readings::convert(text)
}

/// Romanize kana text using Hepburn-style rules.
///
/// Handles contracted sounds, sokuon gemination, the katakana long-vowel
/// mark, and folds katakana input to hiragana first. Characters outside
/// the mora table pass through unchanged. The result has all whitespace
/// stripped, which makes it directly comparable as an answer key.
///
/// # Examples
///
/// ```
/// use kotoba_core::transliterate::to_romaji;
///
/// assert_eq!(to_romaji("ねこ"), "neko");
/// assert_eq!(to_romaji("がっこう"), "gakkou");
/// assert_eq!(to_romaji("コーヒー"), "koohii");
/// ```
#[must_use]
pub fn to_romaji(kana_text: &str) -> String {
    hepburn::convert(kana_text)
}

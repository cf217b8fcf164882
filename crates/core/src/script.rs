/// Returns true if the character is a CJK unified ideograph (kanji).
///
/// Covers the base block plus extensions A and B, which is where every
/// character a general-purpose translation realistically produces lives.
///
/// # Examples
///
/// ```
/// use kotoba_core::script::is_ideograph;
///
/// assert!(is_ideograph('猫'));
/// assert!(!is_ideograph('ね'));
/// assert!(!is_ideograph('n'));
/// ```
#[must_use]
pub fn is_ideograph(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'     // CJK Unified Ideographs
        | '\u{3400}'..='\u{4DBF}'   // Extension A
        | '\u{20000}'..='\u{2A6DF}' // Extension B
    )
}

/// Returns true if the character is hiragana.
#[must_use]
pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{3096}')
}

/// Returns true if the character is katakana, including the long-vowel
/// mark ー.
#[must_use]
pub fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30A1}'..='\u{30FA}' | '\u{30FC}')
}

/// Returns true if the character is either kana script.
#[must_use]
pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// Returns true if any character of `text` is an ideograph.
///
/// This is the gate for the kanji-to-kana conversion stage: kana-only and
/// non-Japanese text skips it entirely.
///
/// # Examples
///
/// ```
/// use kotoba_core::script::contains_ideograph;
///
/// assert!(contains_ideograph("猫"));
/// assert!(contains_ideograph("お茶を飲む"));
/// assert!(!contains_ideograph("ねこ"));
/// assert!(!contains_ideograph("word"));
/// ```
#[must_use]
pub fn contains_ideograph(text: &str) -> bool {
    text.chars().any(is_ideograph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ideograph_ranges() {
        assert!(is_ideograph('猫'));
        assert!(is_ideograph('一'));
        assert!(is_ideograph('\u{3400}'));
        assert!(is_ideograph('\u{20000}'));
        assert!(!is_ideograph('ー'));
        assert!(!is_ideograph('。'));
        assert!(!is_ideograph('A'));
    }

    #[test]
    fn hiragana_range() {
        assert!(is_hiragana('あ'));
        assert!(is_hiragana('ん'));
        assert!(is_hiragana('っ'));
        assert!(!is_hiragana('ア'));
        assert!(!is_hiragana('猫'));
    }

    #[test]
    fn katakana_range_includes_long_vowel_mark() {
        assert!(is_katakana('ア'));
        assert!(is_katakana('ヴ'));
        assert!(is_katakana('ー'));
        assert!(!is_katakana('あ'));
    }

    #[test]
    fn kana_covers_both_scripts() {
        assert!(is_kana('ね'));
        assert!(is_kana('ネ'));
        assert!(!is_kana('猫'));
        assert!(!is_kana('k'));
    }

    #[test]
    fn mixed_text_detection() {
        assert!(contains_ideograph("食べ物"));
        assert!(!contains_ideograph("たべもの"));
        assert!(!contains_ideograph(""));
        assert!(!contains_ideograph("cat ねこ ネコ"));
    }
}

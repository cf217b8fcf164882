const SOKUON: char = 'っ';
const LONG_VOWEL_MARK: char = 'ー';

/// Hiragana block starts 0x60 below the katakana block.
const KATAKANA_FOLD_OFFSET: u32 = 0x60;

/// Mora-to-romaji pairs. Matching is greedy, longest kana cluster first.
const MORAE: &[(&str, &str)] = &[
    // contracted sounds
    ("きゃ", "kya"),
    ("きゅ", "kyu"),
    ("きょ", "kyo"),
    ("しゃ", "sha"),
    ("しゅ", "shu"),
    ("しょ", "sho"),
    ("しぇ", "she"),
    ("ちゃ", "cha"),
    ("ちゅ", "chu"),
    ("ちょ", "cho"),
    ("ちぇ", "che"),
    ("にゃ", "nya"),
    ("にゅ", "nyu"),
    ("にょ", "nyo"),
    ("ひゃ", "hya"),
    ("ひゅ", "hyu"),
    ("ひょ", "hyo"),
    ("みゃ", "mya"),
    ("みゅ", "myu"),
    ("みょ", "myo"),
    ("りゃ", "rya"),
    ("りゅ", "ryu"),
    ("りょ", "ryo"),
    ("ぎゃ", "gya"),
    ("ぎゅ", "gyu"),
    ("ぎょ", "gyo"),
    ("じゃ", "ja"),
    ("じゅ", "ju"),
    ("じょ", "jo"),
    ("じぇ", "je"),
    ("ぢゃ", "ja"),
    ("ぢゅ", "ju"),
    ("ぢょ", "jo"),
    ("びゃ", "bya"),
    ("びゅ", "byu"),
    ("びょ", "byo"),
    ("ぴゃ", "pya"),
    ("ぴゅ", "pyu"),
    ("ぴょ", "pyo"),
    // loanword clusters
    ("ふぁ", "fa"),
    ("ふぃ", "fi"),
    ("ふぇ", "fe"),
    ("ふぉ", "fo"),
    ("うぃ", "wi"),
    ("うぇ", "we"),
    ("うぉ", "wo"),
    ("てぃ", "ti"),
    ("でぃ", "di"),
    // plain rows
    ("あ", "a"),
    ("い", "i"),
    ("う", "u"),
    ("え", "e"),
    ("お", "o"),
    ("か", "ka"),
    ("き", "ki"),
    ("く", "ku"),
    ("け", "ke"),
    ("こ", "ko"),
    ("さ", "sa"),
    ("し", "shi"),
    ("す", "su"),
    ("せ", "se"),
    ("そ", "so"),
    ("た", "ta"),
    ("ち", "chi"),
    ("つ", "tsu"),
    ("て", "te"),
    ("と", "to"),
    ("な", "na"),
    ("に", "ni"),
    ("ぬ", "nu"),
    ("ね", "ne"),
    ("の", "no"),
    ("は", "ha"),
    ("ひ", "hi"),
    ("ふ", "fu"),
    ("へ", "he"),
    ("ほ", "ho"),
    ("ま", "ma"),
    ("み", "mi"),
    ("む", "mu"),
    ("め", "me"),
    ("も", "mo"),
    ("や", "ya"),
    ("ゆ", "yu"),
    ("よ", "yo"),
    ("ら", "ra"),
    ("り", "ri"),
    ("る", "ru"),
    ("れ", "re"),
    ("ろ", "ro"),
    ("わ", "wa"),
    ("を", "wo"),
    ("ん", "n"),
    // voiced rows
    ("が", "ga"),
    ("ぎ", "gi"),
    ("ぐ", "gu"),
    ("げ", "ge"),
    ("ご", "go"),
    ("ざ", "za"),
    ("じ", "ji"),
    ("ず", "zu"),
    ("ぜ", "ze"),
    ("ぞ", "zo"),
    ("だ", "da"),
    ("ぢ", "ji"),
    ("づ", "zu"),
    ("で", "de"),
    ("ど", "do"),
    ("ば", "ba"),
    ("び", "bi"),
    ("ぶ", "bu"),
    ("べ", "be"),
    ("ぼ", "bo"),
    ("ぱ", "pa"),
    ("ぴ", "pi"),
    ("ぷ", "pu"),
    ("ぺ", "pe"),
    ("ぽ", "po"),
    ("ゔ", "vu"),
    // small kana on their own
    ("ぁ", "a"),
    ("ぃ", "i"),
    ("ぅ", "u"),
    ("ぇ", "e"),
    ("ぉ", "o"),
    ("ゃ", "ya"),
    ("ゅ", "yu"),
    ("ょ", "yo"),
    ("ゎ", "wa"),
];

/// Romanize kana text, Hepburn style.
///
/// Katakana is folded to hiragana before lookup, so one mora table covers
/// both scripts. Long vowels are spelled out letter by letter (こう → kou)
/// rather than with macrons, and ん is always `n`. Unmappable characters
/// pass through unchanged; all whitespace is stripped from the result.
pub(super) fn convert(kana_text: &str) -> String {
    let folded = fold_katakana(kana_text);
    let mut out = String::with_capacity(folded.len());
    let mut rest = folded.as_str();
    let mut pending_sokuon = false;

    while let Some(first) = rest.chars().next() {
        if first == SOKUON {
            pending_sokuon = true;
            rest = &rest[first.len_utf8()..];
            continue;
        }
        if first == LONG_VOWEL_MARK {
            // ー stretches whatever vowel came before it.
            match out.chars().last().filter(|c| is_vowel(*c)) {
                Some(vowel) => out.push(vowel),
                None => out.push(first),
            }
            pending_sokuon = false;
            rest = &rest[first.len_utf8()..];
            continue;
        }
        if let Some((kana, romaji)) = longest_match(rest) {
            if pending_sokuon {
                out.push_str(&geminate(romaji));
                pending_sokuon = false;
            } else {
                out.push_str(romaji);
            }
            rest = &rest[kana.len()..];
        } else {
            // Unmappable character: pass through; a pending sokuon has no
            // consonant to double and is dropped.
            pending_sokuon = false;
            out.push(first);
            rest = &rest[first.len_utf8()..];
        }
    }

    out.retain(|c| !c.is_whitespace());
    out
}

fn longest_match(rest: &str) -> Option<(&'static str, &'static str)> {
    MORAE
        .iter()
        .copied()
        .filter(|(kana, _)| rest.starts_with(kana))
        .max_by_key(|(kana, _)| kana.len())
}

/// Double the leading consonant of the mora that follows a sokuon.
///
/// ち is the Hepburn special case: っち becomes tchi, not cchi. A
/// vowel-initial mora leaves nothing to double.
fn geminate(romaji: &str) -> String {
    if romaji.starts_with("ch") {
        return format!("t{romaji}");
    }
    match romaji.chars().next() {
        Some(c) if c.is_ascii_alphabetic() && !is_vowel(c) => format!("{c}{romaji}"),
        _ => romaji.to_string(),
    }
}

fn fold_katakana(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{30A1}'..='\u{30F6}' => {
                char::from_u32(c as u32 - KATAKANA_FOLD_OFFSET).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_words() {
        assert_eq!(convert("ねこ"), "neko");
        assert_eq!(convert("いぬ"), "inu");
        assert_eq!(convert("でんわ"), "denwa");
        assert_eq!(convert("ひこうき"), "hikouki");
    }

    #[test]
    fn contracted_sounds_win_over_single_kana() {
        assert_eq!(convert("きょう"), "kyou");
        assert_eq!(convert("しゃしん"), "shashin");
        assert_eq!(convert("ちゅうしゃじょう"), "chuushajou");
    }

    #[test]
    fn sokuon_doubles_the_next_consonant() {
        assert_eq!(convert("きって"), "kitte");
        assert_eq!(convert("がっこう"), "gakkou");
        assert_eq!(convert("ざっし"), "zasshi");
    }

    #[test]
    fn sokuon_before_chi_takes_a_t() {
        assert_eq!(convert("まっちゃ"), "matcha");
        assert_eq!(convert("こっち"), "kotchi");
    }

    #[test]
    fn dangling_sokuon_is_dropped() {
        assert_eq!(convert("まっ"), "ma");
        assert_eq!(convert("っ"), "");
        assert_eq!(convert("っあ"), "a");
    }

    #[test]
    fn katakana_folds_to_hiragana() {
        assert_eq!(convert("ネコ"), "neko");
        assert_eq!(convert("アイス"), "aisu");
        assert_eq!(convert("ヴ"), "vu");
    }

    #[test]
    fn long_vowel_mark_repeats_the_vowel() {
        assert_eq!(convert("コーヒー"), "koohii");
        assert_eq!(convert("ノート"), "nooto");
        // Nothing to stretch: the mark passes through.
        assert_eq!(convert("ー"), "ー");
    }

    #[test]
    fn hatsuon_is_plain_n() {
        assert_eq!(convert("しんぶん"), "shinbun");
        assert_eq!(convert("にほん"), "nihon");
    }

    #[test]
    fn unmappable_characters_pass_through() {
        assert_eq!(convert("word"), "word");
        assert_eq!(convert("ねこ!"), "neko!");
    }

    #[test]
    fn whitespace_is_stripped() {
        assert_eq!(convert("ねこ いぬ"), "nekoinu");
        assert_eq!(convert(" ねこ\n"), "neko");
    }
}

/// Surface-to-reading pairs for everyday vocabulary. Entries are whole-word
/// surfaces (including okurigana) rather than per-character readings, so
/// segmentation stays unambiguous. Matching is greedy, longest surface first.
const READINGS: &[(&str, &str)] = &[
    // animals
    ("猫", "ねこ"),
    ("犬", "いぬ"),
    ("鳥", "とり"),
    ("魚", "さかな"),
    ("馬", "うま"),
    ("牛", "うし"),
    ("熊", "くま"),
    ("虎", "とら"),
    // nature
    ("水", "みず"),
    ("火", "ひ"),
    ("山", "やま"),
    ("川", "かわ"),
    ("空", "そら"),
    ("海", "うみ"),
    ("雨", "あめ"),
    ("雪", "ゆき"),
    ("風", "かぜ"),
    ("星", "ほし"),
    ("月", "つき"),
    ("日本語", "にほんご"),
    ("日本", "にほん"),
    ("日", "ひ"),
    ("花", "はな"),
    ("木", "き"),
    ("森", "もり"),
    ("石", "いし"),
    ("島", "しま"),
    // people and body
    ("人", "ひと"),
    ("手", "て"),
    ("目", "め"),
    ("耳", "みみ"),
    ("口", "くち"),
    ("足", "あし"),
    ("心", "こころ"),
    ("頭", "あたま"),
    ("顔", "かお"),
    ("声", "こえ"),
    ("友達", "ともだち"),
    ("先生", "せんせい"),
    ("家族", "かぞく"),
    ("子供", "こども"),
    ("男", "おとこ"),
    ("女", "おんな"),
    ("名前", "なまえ"),
    // things
    ("家", "いえ"),
    ("車", "くるま"),
    ("本", "ほん"),
    ("電話", "でんわ"),
    ("時計", "とけい"),
    ("机", "つくえ"),
    ("椅子", "いす"),
    ("窓", "まど"),
    ("鍵", "かぎ"),
    ("紙", "かみ"),
    ("服", "ふく"),
    ("靴", "くつ"),
    ("傘", "かさ"),
    ("写真", "しゃしん"),
    ("音楽", "おんがく"),
    ("映画", "えいが"),
    ("飛行機", "ひこうき"),
    ("自転車", "じてんしゃ"),
    ("電車", "でんしゃ"),
    ("電気", "でんき"),
    // places
    ("店", "みせ"),
    ("道", "みち"),
    ("町", "まち"),
    ("駅", "えき"),
    ("学校", "がっこう"),
    ("病院", "びょういん"),
    ("図書館", "としょかん"),
    ("公園", "こうえん"),
    ("駐車場", "ちゅうしゃじょう"),
    // food
    ("食べ物", "たべもの"),
    ("飲み物", "のみもの"),
    ("茶", "ちゃ"),
    ("米", "こめ"),
    ("肉", "にく"),
    ("卵", "たまご"),
    ("塩", "しお"),
    ("砂糖", "さとう"),
    ("果物", "くだもの"),
    ("野菜", "やさい"),
    // time and seasons
    ("時間", "じかん"),
    ("今日", "きょう"),
    ("明日", "あした"),
    ("昨日", "きのう"),
    ("朝", "あさ"),
    ("昼", "ひる"),
    ("夜", "よる"),
    ("春", "はる"),
    ("夏", "なつ"),
    ("秋", "あき"),
    ("冬", "ふゆ"),
    ("年", "とし"),
    // directions
    ("北", "きた"),
    ("南", "みなみ"),
    ("東", "ひがし"),
    ("西", "にし"),
    // abstract
    ("言葉", "ことば"),
    ("世界", "せかい"),
    ("仕事", "しごと"),
    ("天気", "てんき"),
    ("夢", "ゆめ"),
    ("愛", "あい"),
    ("歌", "うた"),
    ("色", "いろ"),
    ("光", "ひかり"),
    ("影", "かげ"),
    ("音", "おと"),
    ("力", "ちから"),
    ("金", "かね"),
    // verbs
    ("食べる", "たべる"),
    ("飲む", "のむ"),
    ("走る", "はしる"),
    ("歩く", "あるく"),
    ("見る", "みる"),
    ("聞く", "きく"),
    ("話す", "はなす"),
    ("読む", "よむ"),
    ("書く", "かく"),
    ("買う", "かう"),
    ("売る", "うる"),
    ("行く", "いく"),
    ("来る", "くる"),
    ("帰る", "かえる"),
    ("寝る", "ねる"),
    ("起きる", "おきる"),
    ("笑う", "わらう"),
    ("泣く", "なく"),
    // adjectives
    ("新しい", "あたらしい"),
    ("古い", "ふるい"),
    ("大きい", "おおきい"),
    ("小さい", "ちいさい"),
    ("高い", "たかい"),
    ("安い", "やすい"),
    ("速い", "はやい"),
    ("遅い", "おそい"),
    ("強い", "つよい"),
    ("弱い", "よわい"),
    ("白い", "しろい"),
    ("黒い", "くろい"),
    ("赤い", "あかい"),
    ("青い", "あおい"),
    ("美しい", "うつくしい"),
    ("楽しい", "たのしい"),
    ("難しい", "むずかしい"),
    ("簡単", "かんたん"),
    ("静か", "しずか"),
    ("元気", "げんき"),
    ("幸せ", "しあわせ"),
    ("大切", "たいせつ"),
    ("可愛い", "かわいい"),
];

/// Replace every table surface in `text` with its kana reading.
///
/// Greedy longest-match segmentation from the left; characters not covered
/// by any surface (kana, Latin, punctuation, out-of-table kanji) are copied
/// through unchanged.
pub(super) fn convert(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(first) = rest.chars().next() {
        if let Some((surface, reading)) = longest_match(rest) {
            out.push_str(reading);
            rest = &rest[surface.len()..];
        } else {
            out.push(first);
            rest = &rest[first.len_utf8()..];
        }
    }
    out
}

fn longest_match(rest: &str) -> Option<(&'static str, &'static str)> {
    READINGS
        .iter()
        .copied()
        .filter(|(surface, _)| rest.starts_with(surface))
        .max_by_key(|(surface, _)| surface.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_single_words() {
        assert_eq!(convert("猫"), "ねこ");
        assert_eq!(convert("駐車場"), "ちゅうしゃじょう");
        assert_eq!(convert("食べ物"), "たべもの");
    }

    #[test]
    fn longest_surface_wins() {
        // 今日 must read as きょう, not 今 + 日.
        assert_eq!(convert("今日"), "きょう");
        // 日本語 beats 日本 beats 日.
        assert_eq!(convert("日本語"), "にほんご");
        assert_eq!(convert("日本"), "にほん");
    }

    #[test]
    fn kana_and_latin_pass_through() {
        assert_eq!(convert("猫と犬"), "ねこといぬ");
        assert_eq!(convert("お金"), "おかね");
        assert_eq!(convert("cat"), "cat");
    }

    #[test]
    fn out_of_table_kanji_passes_through() {
        assert_eq!(convert("麒麟"), "麒麟");
        assert_eq!(convert("猫麒麟"), "ねこ麒麟");
    }

    #[test]
    fn okurigana_surfaces_do_not_shadow_compounds() {
        assert_eq!(convert("食べる"), "たべる");
        assert_eq!(convert("飲み物"), "のみもの");
    }
}

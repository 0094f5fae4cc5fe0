//! Kana → Open-JTalk-style mora labels → IPA.
//!
//! The mora table is the Open JTalk 1.11 kana inventory: each katakana
//! key maps to a consonant label plus an optional vowel label. Digraph
//! (palatalized) moras are two-character keys and must be matched
//! before single characters. The terminal table renders labels as the
//! Kokoro IPA alphabet (`u → ɯ`, `w → β`, `r → ɾ`, …); a trailing `:`
//! on a vowel label marks length and renders as `ː`.

use phf::phf_map;

/// Katakana mora → (consonant label, optional vowel label).
pub static MORAS: phf::Map<&'static str, (&'static str, Option<&'static str>)> = phf_map! {
    // palatalized / contracted digraphs
    "ヴョ" => ("by", Some("o")),
    "ヴュ" => ("by", Some("u")),
    "ヴャ" => ("by", Some("a")),
    "リョ" => ("ry", Some("o")),
    "リュ" => ("ry", Some("u")),
    "リャ" => ("ry", Some("a")),
    "リェ" => ("ry", Some("e")),
    "ミョ" => ("my", Some("o")),
    "ミュ" => ("my", Some("u")),
    "ミャ" => ("my", Some("a")),
    "ミェ" => ("my", Some("e")),
    "ヒョ" => ("hy", Some("o")),
    "ヒュ" => ("hy", Some("u")),
    "ヒャ" => ("hy", Some("a")),
    "ヒェ" => ("hy", Some("e")),
    "ニョ" => ("ny", Some("o")),
    "ニュ" => ("ny", Some("u")),
    "ニャ" => ("ny", Some("a")),
    "ニェ" => ("ny", Some("e")),
    "ピョ" => ("py", Some("o")),
    "ピュ" => ("py", Some("u")),
    "ピャ" => ("py", Some("a")),
    "ピェ" => ("py", Some("e")),
    "ビョ" => ("by", Some("o")),
    "ビュ" => ("by", Some("u")),
    "ビャ" => ("by", Some("a")),
    "ビェ" => ("by", Some("e")),
    "ギョ" => ("gy", Some("o")),
    "ギュ" => ("gy", Some("u")),
    "ギャ" => ("gy", Some("a")),
    "ギェ" => ("gy", Some("e")),
    "キョ" => ("ky", Some("o")),
    "キュ" => ("ky", Some("u")),
    "キャ" => ("ky", Some("a")),
    "キェ" => ("ky", Some("e")),
    "チョ" => ("ch", Some("o")),
    "チュ" => ("ch", Some("u")),
    "チャ" => ("ch", Some("a")),
    "チェ" => ("ch", Some("e")),
    "ジョ" => ("j", Some("o")),
    "ジュ" => ("j", Some("u")),
    "ジャ" => ("j", Some("a")),
    "ジェ" => ("j", Some("e")),
    "ショ" => ("sh", Some("o")),
    "シュ" => ("sh", Some("u")),
    "シャ" => ("sh", Some("a")),
    "シェ" => ("sh", Some("e")),
    "デョ" => ("dy", Some("o")),
    "デュ" => ("dy", Some("u")),
    "デャ" => ("dy", Some("a")),
    "テョ" => ("ty", Some("o")),
    "テュ" => ("ty", Some("u")),
    "テャ" => ("ty", Some("a")),
    "フォ" => ("f", Some("o")),
    "フェ" => ("f", Some("e")),
    "フィ" => ("f", Some("i")),
    "ファ" => ("f", Some("a")),
    "ウォ" => ("w", Some("o")),
    "ウェ" => ("w", Some("e")),
    "ウィ" => ("w", Some("i")),
    "ツォ" => ("ts", Some("o")),
    "ツェ" => ("ts", Some("e")),
    "ツィ" => ("ts", Some("i")),
    "ツァ" => ("ts", Some("a")),
    "ヴォ" => ("v", Some("o")),
    "ヴェ" => ("v", Some("e")),
    "ヴィ" => ("v", Some("i")),
    "ヴァ" => ("v", Some("a")),
    "ドゥ" => ("d", Some("u")),
    "トゥ" => ("t", Some("u")),
    "ディ" => ("d", Some("i")),
    "ティ" => ("t", Some("i")),
    "グヮ" => ("gw", Some("a")),
    "クヮ" => ("kw", Some("a")),
    "ズィ" => ("z", Some("i")),
    "スィ" => ("s", Some("i")),
    "イェ" => ("y", Some("e")),

    // base syllabary, small variants included
    "ア" => ("a", None),
    "ァ" => ("a", None),
    "イ" => ("i", None),
    "ィ" => ("i", None),
    "ウ" => ("u", None),
    "ゥ" => ("u", None),
    "エ" => ("e", None),
    "ェ" => ("e", None),
    "オ" => ("o", None),
    "ォ" => ("o", None),

    "カ" => ("k", Some("a")),
    "ガ" => ("g", Some("a")),
    "キ" => ("k", Some("i")),
    "ギ" => ("g", Some("i")),
    "ク" => ("k", Some("u")),
    "グ" => ("g", Some("u")),
    "ケ" => ("k", Some("e")),
    "ゲ" => ("g", Some("e")),
    "ヶ" => ("k", Some("e")),
    "コ" => ("k", Some("o")),
    "ゴ" => ("g", Some("o")),

    "サ" => ("s", Some("a")),
    "ザ" => ("z", Some("a")),
    "シ" => ("sh", Some("i")),
    "ジ" => ("j", Some("i")),
    "ス" => ("s", Some("u")),
    "ズ" => ("z", Some("u")),
    "セ" => ("s", Some("e")),
    "ゼ" => ("z", Some("e")),
    "ソ" => ("s", Some("o")),
    "ゾ" => ("z", Some("o")),

    "タ" => ("t", Some("a")),
    "ダ" => ("d", Some("a")),
    "チ" => ("ch", Some("i")),
    "ヂ" => ("j", Some("i")),
    "ツ" => ("ts", Some("u")),
    "ヅ" => ("z", Some("u")),
    "テ" => ("t", Some("e")),
    "デ" => ("d", Some("e")),
    "ト" => ("t", Some("o")),
    "ド" => ("d", Some("o")),

    "ナ" => ("n", Some("a")),
    "ニ" => ("n", Some("i")),
    "ヌ" => ("n", Some("u")),
    "ネ" => ("n", Some("e")),
    "ノ" => ("n", Some("o")),

    "ハ" => ("h", Some("a")),
    "バ" => ("b", Some("a")),
    "パ" => ("p", Some("a")),
    "ヒ" => ("h", Some("i")),
    "ビ" => ("b", Some("i")),
    "ピ" => ("p", Some("i")),
    "フ" => ("f", Some("u")),
    "ブ" => ("b", Some("u")),
    "プ" => ("p", Some("u")),
    "ヘ" => ("h", Some("e")),
    "ベ" => ("b", Some("e")),
    "ペ" => ("p", Some("e")),
    "ホ" => ("h", Some("o")),
    "ボ" => ("b", Some("o")),
    "ポ" => ("p", Some("o")),

    "マ" => ("m", Some("a")),
    "ミ" => ("m", Some("i")),
    "ム" => ("m", Some("u")),
    "メ" => ("m", Some("e")),
    "モ" => ("m", Some("o")),

    "ヤ" => ("y", Some("a")),
    "ャ" => ("y", Some("a")),
    "ユ" => ("y", Some("u")),
    "ュ" => ("y", Some("u")),
    "ヨ" => ("y", Some("o")),
    "ョ" => ("y", Some("o")),

    "ラ" => ("r", Some("a")),
    "リ" => ("r", Some("i")),
    "ル" => ("r", Some("u")),
    "レ" => ("r", Some("e")),
    "ロ" => ("r", Some("o")),

    "ワ" => ("w", Some("a")),
    "ヮ" => ("w", Some("a")),
    "ヰ" => ("i", None),
    "ヱ" => ("e", None),
    "ヲ" => ("o", None),

    "ン" => ("N", None),
    "ッ" => ("cl", None),
    "ヴ" => ("v", Some("u")),
};

/// Open-JTalk label → Kokoro IPA. Aligned with the Python pipeline:
/// `w → β`, `ch → ɕ`, the moraic nasal defaults to `ɴ`, the geminate
/// marker renders as a glottal stop.
static LABEL_TO_IPA: phf::Map<&'static str, &'static str> = phf_map! {
    // vowels
    "a" => "a",
    "i" => "i",
    "u" => "ɯ",
    "e" => "e",
    "o" => "o",

    // plain consonants
    "k" => "k",
    "g" => "ɡ",
    "s" => "s",
    "z" => "z",
    "t" => "t",
    "d" => "d",
    "n" => "n",
    "h" => "h",
    "b" => "b",
    "p" => "p",
    "m" => "m",
    "y" => "j",
    "r" => "ɾ",
    "w" => "β",
    "N" => "ɴ",
    "cl" => "ʔ",
    "ng" => "ŋ",

    // palatalized
    "ky" => "kʲ",
    "gy" => "ɡʲ",
    "ny" => "ɲ",
    "hy" => "çʲ",
    "by" => "bʲ",
    "py" => "pʲ",
    "my" => "mʲ",
    "ry" => "ɾʲ",
    "dy" => "dʲ",
    "ty" => "tʲ",

    // affricates / fricatives
    "sh" => "ɕ",
    "j" => "dʑ",
    "ch" => "ɕ",
    "ts" => "ts",
    "f" => "ɸ",
    "v" => "v",
    "gw" => "ɡw",
    "kw" => "kw",
};

pub const VOWELS: &[&str] = &["a", "i", "u", "e", "o"];

/// Long form of a vowel label (`"o"` → `"o:"`).
#[inline]
pub fn lengthen(vowel: &str) -> Option<&'static str> {
    match vowel {
        "a" => Some("a:"),
        "i" => Some("i:"),
        "u" => Some("u:"),
        "e" => Some("e:"),
        "o" => Some("o:"),
        _ => None,
    }
}

/// Render one label as IPA; a `label:` suffix appends the length mark.
/// Unmapped labels pass through untouched.
pub fn label_to_ipa(label: &str) -> String {
    if let Some(base) = label.strip_suffix(':') {
        let ipa = LABEL_TO_IPA.get(base).copied().unwrap_or(base);
        return format!("{ipa}ː");
    }
    LABEL_TO_IPA.get(label).copied().map(str::to_owned).unwrap_or_else(|| label.to_owned())
}

/// Hiragana → katakana (offset within the basic blocks; everything
/// else unchanged).
pub fn hiragana_to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| match c as u32 {
            cp @ 0x3041..=0x3096 => char::from_u32(cp + 0x60).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Katakana → hiragana.
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| match c as u32 {
            cp @ 0x30A1..=0x30F6 => char::from_u32(cp - 0x60).unwrap_or(c),
            _ => c,
        })
        .collect()
}

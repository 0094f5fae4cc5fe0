//! English text → IPA.
//!
//! Dictionary lookup first (CMUdict-derived IPA), then a selectable
//! fallback for out-of-dictionary words: letter-by-letter spell-out,
//! or transliteration into Mandarin syllables routed through the
//! Chinese syllable tables with a fixed neutral tone — the "read it
//! with a Chinese voice" compromise for mixed-language input. Both
//! fallbacks are deterministic and total.

use crate::convert::zh::syllable::{ToneStyle, syllable_to_ipa};
use crate::convert::{Convert, ConvertError};
use crate::dict::EnglishDict;
use phf::phf_map;
use std::sync::Arc;

/// Out-of-dictionary strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnFallback {
    /// Spell the word letter by letter (`xyz` → `ɛ k s  w aɪ  z i`).
    #[default]
    SpellOut,
    /// Map to Mandarin syllables (brand table, then per-letter names)
    /// and render them with the Chinese syllable tables, neutral tone.
    Transliterate,
}

/// Curated transliterations for words a Chinese voice should
/// approximate (brands, tech vocabulary, everyday words).
static TRANSLIT: phf::Map<&'static str, &'static str> = phf_map! {
    "apple" => "ai po er",
    "iphone" => "ai feng",
    "ipad" => "ai pai de",
    "mac" => "mai ke",
    "macbook" => "mai ke bu ke",
    "android" => "an zhuo",
    "google" => "gu ge",
    "microsoft" => "wei ruan",
    "windows" => "chuang kou",
    "computer" => "dian nao",
    "smartphone" => "zhi neng shou ji",
    "tablet" => "ping ban",
    "laptop" => "bi ji ben",
    "desktop" => "tai shi ji",
    "internet" => "yin te wang",
    "wifi" => "wai fai",
    "bluetooth" => "lan ya",
    "email" => "yi mei er",
    "app" => "a pu",
    "software" => "ruan jian",
    "hardware" => "ying jian",
    "hello" => "ha lou",
    "world" => "shi jie",
    "yes" => "ye si",
    "no" => "nou",
    "ok" => "ou kei",
    "okay" => "ou kei",
    "good" => "gu de",
    "bad" => "bai de",
    "test" => "ce shi",
    "demo" => "yan shi",
    "example" => "li zi",
    "one" => "wan",
    "two" => "tu",
    "three" => "si rui",
    "four" => "fo",
    "five" => "fai fu",
    "six" => "si ke si",
    "seven" => "sai wen",
    "eight" => "ei te",
    "nine" => "nai en",
    "ten" => "ten",
};

/// English letter names as Mandarin syllables.
static LETTER_PINYIN: phf::Map<char, &'static str> = phf_map! {
    'a' => "ei",
    'b' => "bi",
    'c' => "xi",
    'd' => "di",
    'e' => "yi",
    'f' => "ai fu",
    'g' => "ji",
    'h' => "ei qi",
    'i' => "ai",
    'j' => "jie",
    'k' => "kai",
    'l' => "ai er",
    'm' => "ai mu",
    'n' => "en",
    'o' => "ou",
    'p' => "pi",
    'q' => "kiu",
    'r' => "a er",
    's' => "ai si",
    't' => "ti",
    'u' => "you",
    'v' => "wei",
    'w' => "da bu liu",
    'x' => "ai ke si",
    'y' => "wai",
    'z' => "zei",
};

pub struct EnglishConverter {
    dict: Arc<EnglishDict>,
    fallback: EnFallback,
}

impl EnglishConverter {
    pub fn new(dict: Arc<EnglishDict>) -> Self {
        Self { dict, fallback: EnFallback::SpellOut }
    }

    pub fn with_fallback(mut self, fallback: EnFallback) -> Self {
        self.fallback = fallback;
        self
    }

    fn convert(&self, text: &str) -> String {
        let words = text
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | '!' | '?' | ';' | ':'))
            .filter(|w| !w.is_empty());

        let mut out = Vec::new();
        for word in words {
            let lower = word.to_lowercase();
            let phonemes = match self.dict.get(&lower) {
                Some(ipa) => ipa.to_owned(),
                None => match self.fallback {
                    EnFallback::SpellOut => self.spell_out(&lower),
                    EnFallback::Transliterate => transliterate(&lower),
                },
            };
            if !phonemes.is_empty() {
                out.push(phonemes);
            }
        }
        out.join(" ")
    }

    /// Letter-by-letter pronunciation via the single-letter dictionary
    /// entries; letters without an entry stay literal.
    fn spell_out(&self, word: &str) -> String {
        let mut buf = [0u8; 4];
        word.chars()
            .map(|c| match self.dict.get(c.encode_utf8(&mut buf)) {
                Some(ipa) => ipa.to_owned(),
                None => c.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Word → Mandarin-syllable IPA with neutral tone. Brand table first,
/// per-letter names otherwise; syllables concatenate like a Chinese
/// word.
fn transliterate(word: &str) -> String {
    let pinyin = match TRANSLIT.get(word) {
        Some(p) => (*p).to_owned(),
        None => {
            let syllables: Vec<&str> = word
                .chars()
                .filter(|c| c.is_ascii_alphabetic())
                .filter_map(|c| LETTER_PINYIN.get(&c.to_ascii_lowercase()).copied())
                .collect();
            syllables.join(" ")
        }
    };

    let mut out = String::new();
    for syllable in pinyin.split_whitespace() {
        let mut toned = String::with_capacity(syllable.len() + 1);
        toned.push_str(syllable);
        toned.push('5');
        out.push_str(&syllable_to_ipa(&toned, ToneStyle::Arrow));
    }
    out
}

impl Convert for EnglishConverter {
    fn name(&self) -> &'static str {
        "en"
    }

    fn text_to_phonemes(&self, text: &str) -> Result<String, ConvertError> {
        Ok(self.convert(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spell_converter() -> EnglishConverter {
        EnglishConverter::new(Arc::new(EnglishDict::builtin()))
    }

    fn translit_converter() -> EnglishConverter {
        spell_converter().with_fallback(EnFallback::Transliterate)
    }

    #[test]
    fn dictionary_words() {
        let en = spell_converter();
        assert_eq!(en.text_to_phonemes("hello").unwrap(), "h ʌ l oʊ");
        assert_eq!(en.text_to_phonemes("iPhone").unwrap(), "aɪ f oʊ n");
        assert_eq!(en.text_to_phonemes("hello world").unwrap(), "h ʌ l oʊ w ɝ l d");
    }

    #[test]
    fn punctuation_splits_words() {
        let en = spell_converter();
        assert_eq!(en.text_to_phonemes("hello, world!").unwrap(), "h ʌ l oʊ w ɝ l d");
    }

    #[test]
    fn spell_out_fallback() {
        let en = spell_converter();
        assert_eq!(en.text_to_phonemes("xyz").unwrap(), "ɛ k s w aɪ z i");
    }

    #[test]
    fn spell_out_keeps_unknown_letters_literal() {
        let en = spell_converter();
        assert_eq!(en.text_to_phonemes("é").unwrap(), "é");
    }

    #[test]
    fn transliterate_fallback_goes_through_mandarin_tables() {
        let en = translit_converter();
        // g → ji, p → pi, u → you; neutral tone throughout
        assert_eq!(en.text_to_phonemes("gpu").unwrap(), "ʨipʰiyou");
    }

    #[test]
    fn transliterate_is_total_and_non_empty() {
        let en = translit_converter();
        for word in ["qqq", "zb", "aeiou"] {
            let out = en.text_to_phonemes(word).unwrap();
            assert!(!out.is_empty(), "no output for {word}");
        }
    }

    #[test]
    fn empty_and_degenerate_inputs() {
        let en = spell_converter();
        assert_eq!(en.text_to_phonemes("").unwrap(), "");
        assert_eq!(en.text_to_phonemes("   ").unwrap(), "");
        assert_eq!(en.text_to_phonemes("...").unwrap(), "");
    }

    #[test]
    fn deterministic() {
        let en = spell_converter();
        assert_eq!(
            en.text_to_phonemes("some unknown wordz").unwrap(),
            en.text_to_phonemes("some unknown wordz").unwrap()
        );
    }
}

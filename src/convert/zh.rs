//! Chinese text → IPA.
//!
//! Per-character pipeline: full-width punctuation folds to ASCII, each
//! ideograph resolves through the character → tonal-pinyin dictionary,
//! and each syllable runs through the initial/final/tone decomposition
//! in [`syllable`]. Characters the dictionary does not know pass
//! through verbatim — a TTS frontend never refuses input.

pub mod syllable;

use self::syllable::{ToneStyle, syllable_to_ipa};
use crate::convert::{Convert, ConvertError};
use crate::dict::PinyinDict;
use crate::unicode::{fold_cjk_punctuation, is_cjk_ideograph};
use std::sync::Arc;

pub struct ChineseConverter {
    dict: Arc<PinyinDict>,
    tone_style: ToneStyle,
}

/// Per-character conversion trace, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharTrace {
    pub ch: char,
    pub pinyin: Option<String>,
    pub ipa: String,
}

impl ChineseConverter {
    pub fn new(dict: Arc<PinyinDict>) -> Self {
        Self { dict, tone_style: ToneStyle::Arrow }
    }

    pub fn with_tone_style(mut self, style: ToneStyle) -> Self {
        self.tone_style = style;
        self
    }

    /// Convert a batch of already-resolved pinyin syllables, joined
    /// with single spaces.
    pub fn convert_batch(&self, pinyins: &[&str]) -> String {
        pinyins
            .iter()
            .map(|p| syllable_to_ipa(p, self.tone_style))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn convert(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match self.dict.get(c) {
                Some(pinyin) => out.push_str(&syllable_to_ipa(pinyin, self.tone_style)),
                None => out.push(fold_cjk_punctuation(c)),
            }
        }
        out
    }

    /// Per-character trace of the whole conversion, for debugging and
    /// UI display.
    pub fn conversion_details(&self, text: &str) -> Vec<CharTrace> {
        text.chars()
            .map(|c| match self.dict.get(c) {
                Some(pinyin) => CharTrace {
                    ch: c,
                    pinyin: Some(pinyin.to_owned()),
                    ipa: syllable_to_ipa(pinyin, self.tone_style),
                },
                None => CharTrace {
                    ch: c,
                    pinyin: None,
                    ipa: fold_cjk_punctuation(c).to_string(),
                },
            })
            .collect()
    }

    /// Whether a character can be resolved through the dictionary.
    pub fn knows(&self, c: char) -> bool {
        is_cjk_ideograph(c) && self.dict.get(c).is_some()
    }
}

impl Convert for ChineseConverter {
    fn name(&self) -> &'static str {
        "zh"
    }

    fn text_to_phonemes(&self, text: &str) -> Result<String, ConvertError> {
        Ok(self.convert(text))
    }
}

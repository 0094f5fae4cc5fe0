use thiserror::Error;

use crate::{
    convert::{
        Convert, ConvertError,
        en::{EnFallback, EnglishConverter},
        ja::{JaConfig, JapaneseConverter},
        zh::{ChineseConverter, syllable::ToneStyle},
    },
    dict::{DictError, EnglishDict, PinyinDict},
    lang::Lang,
    segment::{self, Segment},
    tokenize::{KanaTokenizer, Tokenize},
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Default voice embeddings per detected language.
pub const ZH_VOICE: &str = "zf_xiaoxiao";
pub const JA_VOICE: &str = "jf_nezumi";
pub const KO_VOICE: &str = "kr_default";

#[derive(Debug, Error)]
pub enum PhonemyError {
    #[error("conversion error: {0}")]
    Convert(#[from] ConvertError),
    #[error("dictionary error: {0}")]
    Dict(#[from] DictError),
}

/// Language detection summary, for callers that surface it in a UI.
#[derive(Debug, Clone)]
pub struct LanguageInfo {
    pub lang: Lang,
    pub code: &'static str,
    pub name: &'static str,
    pub recommended_voice: &'static str,
    pub distribution: HashMap<Lang, f64>,
}

/// The unified G2P frontend: detects and segments mixed-language text,
/// dispatches each segment to its converter, and joins the results.
///
/// All tables are built once here and shared read-only; every
/// conversion call is stateless and reentrant.
pub struct Phonemy {
    zh: ChineseConverter,
    ja: JapaneseConverter,
    en: EnglishConverter,
}

impl Phonemy {
    pub fn builder() -> PhonemyBuilder {
        PhonemyBuilder::default()
    }

    /// Build with dictionaries loaded from TSV assets on disk and the
    /// fallback kana tokenizer.
    pub fn from_assets(
        zh_dict: impl AsRef<Path>,
        en_dict: impl AsRef<Path>,
    ) -> Result<Phonemy, PhonemyError> {
        Ok(Self::builder()
            .zh_dict(PinyinDict::from_path(zh_dict)?)
            .en_dict(EnglishDict::from_path(en_dict)?)
            .build())
    }

    /// Convert any text to its phoneme string.
    ///
    /// Unknown-language segments pass through unchanged; a Korean
    /// segment raises [`ConvertError::Unsupported`] — callers should
    /// tell the user rather than mis-speak Hangul.
    pub fn text_to_phonemes(&self, text: &str) -> Result<String, PhonemyError> {
        let mut parts: Vec<String> = Vec::new();

        for segment in segment::segment_by_language(text) {
            let phonemes = match segment.lang {
                Lang::Chinese => self.zh.text_to_phonemes(&segment.text)?,
                Lang::Japanese => self.ja.text_to_phonemes(&segment.text)?,
                Lang::English => self.en.text_to_phonemes(&segment.text)?,
                Lang::Korean => {
                    return Err(ConvertError::Unsupported(Lang::Korean).into());
                }
                Lang::Unknown => segment.text,
            };
            if !phonemes.is_empty() {
                parts.push(phonemes);
            }
        }

        Ok(parts.join(" "))
    }

    pub fn detect(&self, text: &str) -> Lang {
        segment::detect(text)
    }

    pub fn segment_by_language(&self, text: &str) -> Vec<Segment> {
        segment::segment_by_language(text)
    }

    /// Voice embedding to pair with this text: the first segment's
    /// language decides, falling back to whole-input detection.
    pub fn recommended_voice(&self, text: &str) -> &'static str {
        let lang = segment::segment_by_language(text)
            .first()
            .map(|s| s.lang)
            .unwrap_or_else(|| segment::detect(text));
        voice_for(lang)
    }

    pub fn language_info(&self, text: &str) -> LanguageInfo {
        let lang = segment::detect(text);
        LanguageInfo {
            lang,
            code: lang.code(),
            name: lang.name(),
            recommended_voice: self.recommended_voice(text),
            distribution: segment::distribution(text),
        }
    }
}

#[inline]
fn voice_for(lang: Lang) -> &'static str {
    match lang {
        Lang::Chinese => ZH_VOICE,
        Lang::Korean => KO_VOICE,
        // Japanese is also the default voice for unclassified text
        _ => JA_VOICE,
    }
}

pub struct PhonemyBuilder {
    zh_dict: Option<PinyinDict>,
    en_dict: Option<EnglishDict>,
    tokenizer: Arc<dyn Tokenize>,
    ja_config: JaConfig,
    tone_style: ToneStyle,
    en_fallback: EnFallback,
}

impl Default for PhonemyBuilder {
    fn default() -> Self {
        Self {
            zh_dict: None,
            en_dict: None,
            tokenizer: Arc::new(KanaTokenizer),
            ja_config: JaConfig::default(),
            tone_style: ToneStyle::default(),
            en_fallback: EnFallback::default(),
        }
    }
}

impl PhonemyBuilder {
    pub fn zh_dict(mut self, dict: PinyinDict) -> Self {
        self.zh_dict = Some(dict);
        self
    }

    pub fn en_dict(mut self, dict: EnglishDict) -> Self {
        self.en_dict = Some(dict);
        self
    }

    /// Wire in a real morphological analyzer for Japanese.
    pub fn tokenizer(mut self, tokenizer: Arc<dyn Tokenize>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn ja_config(mut self, config: JaConfig) -> Self {
        self.ja_config = config;
        self
    }

    pub fn tone_style(mut self, style: ToneStyle) -> Self {
        self.tone_style = style;
        self
    }

    pub fn en_fallback(mut self, fallback: EnFallback) -> Self {
        self.en_fallback = fallback;
        self
    }

    pub fn build(self) -> Phonemy {
        let zh_dict = Arc::new(self.zh_dict.unwrap_or_else(PinyinDict::builtin));
        let en_dict = Arc::new(self.en_dict.unwrap_or_else(EnglishDict::builtin));

        Phonemy {
            zh: ChineseConverter::new(zh_dict).with_tone_style(self.tone_style),
            ja: JapaneseConverter::new(self.tokenizer).with_config(self.ja_config),
            en: EnglishConverter::new(en_dict).with_fallback(self.en_fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_by_segment() {
        let g2p = Phonemy::builder().build();
        let out = g2p.text_to_phonemes("你好世界").unwrap();
        assert_eq!(out, "ni↓xau̯↓ʂɻ̩↘ʨje↘");
    }

    #[test]
    fn mixed_language_join() {
        let g2p = Phonemy::builder().build();
        let out = g2p.text_to_phonemes("你好iPhone").unwrap();
        assert_eq!(out, "ni↓xau̯↓ aɪ f oʊ n");
    }

    #[test]
    fn korean_is_a_named_error() {
        let g2p = Phonemy::builder().build();
        let err = g2p.text_to_phonemes("안녕하세요").unwrap_err();
        assert!(matches!(
            err,
            PhonemyError::Convert(ConvertError::Unsupported(Lang::Korean))
        ));
    }

    #[test]
    fn unknown_passes_through() {
        let g2p = Phonemy::builder().build();
        assert_eq!(g2p.text_to_phonemes("123 !?").unwrap(), "123 !?");
        assert_eq!(g2p.text_to_phonemes("").unwrap(), "");
    }

    #[test]
    fn voice_recommendation() {
        let g2p = Phonemy::builder().build();
        assert_eq!(g2p.recommended_voice("你好世界"), ZH_VOICE);
        assert_eq!(g2p.recommended_voice("こんにちは"), JA_VOICE);
        assert_eq!(g2p.recommended_voice("안녕하세요"), KO_VOICE);
        assert_eq!(g2p.recommended_voice(""), JA_VOICE);
        assert_eq!(g2p.recommended_voice("hello"), JA_VOICE);
    }

    #[test]
    fn language_info_summary() {
        let g2p = Phonemy::builder().build();
        let info = g2p.language_info("你好世界");
        assert_eq!(info.lang, Lang::Chinese);
        assert_eq!(info.code, "zh");
        assert_eq!(info.recommended_voice, ZH_VOICE);
        assert!(info.distribution[&Lang::Chinese] > 90.0);
    }
}

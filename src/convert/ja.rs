//! Japanese text → IPA.
//!
//! Conversion consumes the external analyzer's token stream. Each
//! token resolves to a kana reading (with the irregular particle
//! readings patched in), the reading runs through the mora scanner and
//! three contextual rewriting passes, and token phonemes are joined
//! under a part-of-speech-aware spacing policy.
//!
//! Passes, in order:
//! 1. long-vowel contraction (`o u → oː`, `e i → eː`, doubled vowels),
//! 2. gemination (the small-tsu `cl` label renders as a glottal stop),
//! 3. moraic-nasal place assimilation (`ン` → ɲ / ŋ / ɴ by context).
//!
//! A final pass collapses a palatal nasal meeting a plain `n` across a
//! token boundary into a geminated `ɲɲ` (こんにちは → …ɲɲ…).

pub mod mora;

use self::mora::{MORAS, VOWELS, hiragana_to_katakana, label_to_ipa, lengthen};
use crate::convert::{Convert, ConvertError};
use crate::tokenize::{NO_READING, Pos, Token, Tokenize};
use crate::unicode::{is_kana, is_transparent};
use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use smallvec::SmallVec;
use std::sync::{Arc, LazyLock};

static NFKC: LazyLock<ComposingNormalizerBorrowed> = LazyLock::new(ComposingNormalizer::new_nfkc);

type Labels = SmallVec<[&'static str; 24]>;

/// Inter-token separator policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordSpacing {
    /// Suppress the separator where part-of-speech adjacency says the
    /// tokens phrase together (particle + aux/noun, particle chains,
    /// noun compounds).
    #[default]
    PosAware,
    /// One separator between every pair of tokens. The earlier, simpler
    /// behavior; kept as an explicit fallback mode.
    Uniform,
}

/// Moraic-nasal realization policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoraicNasal {
    /// Context-sensitive place assimilation (ɲ before alveolar/palatal
    /// consonants, ŋ before velars, ɴ elsewhere).
    #[default]
    Assimilated,
    /// Always the default uvular ɴ. The earlier behavior; kept as an
    /// explicit fallback mode.
    Plain,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JaConfig {
    pub spacing: WordSpacing,
    pub nasal: MoraicNasal,
}

pub struct JapaneseConverter {
    tokenizer: Arc<dyn Tokenize>,
    config: JaConfig,
}

impl JapaneseConverter {
    pub fn new(tokenizer: Arc<dyn Tokenize>) -> Self {
        Self { tokenizer, config: JaConfig::default() }
    }

    pub fn with_config(mut self, config: JaConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolve a token to the kana string that will be voiced.
    /// First match wins; a `None` token contributes nothing.
    fn resolve_reading(&self, token: &Token) -> Option<String> {
        let surface = token.surface.as_str();

        if surface.is_empty() || surface.chars().all(is_transparent) {
            return None;
        }
        // Irregular particle readings override whatever the analyzer
        // supplied.
        if token.pos == Pos::Particle {
            match surface {
                "は" => return Some("ワ".to_owned()),
                "へ" => return Some("エ".to_owned()),
                _ => {}
            }
        }
        if let Some(reading) = token.reading.as_deref()
            && reading != NO_READING
            && !reading.is_empty()
        {
            return Some(reading.to_owned());
        }
        if surface.chars().all(is_kana) {
            return Some(surface.to_owned());
        }
        None
    }

    /// Kana reading → IPA phoneme string.
    pub fn kana_to_phonemes(&self, kana: &str) -> String {
        let normalized = NFKC.normalize(kana);
        let katakana = hiragana_to_katakana(&normalized);

        let labels = scan_moras(&katakana);
        let labels = contract_long_vowels(labels);
        let labels = assimilate_nasal(labels, self.config.nasal);

        labels.iter().map(|l| label_to_ipa(l)).collect()
    }

    fn convert(&self, text: &str) -> String {
        let tokens = self.tokenizer.tokenize(text);

        let mut out = String::new();
        let mut prev_pos: Option<Pos> = None;
        // A dropped token (punctuation, digits) breaks any phrase
        // adjacency: the default separator applies across the gap.
        let mut gap = false;

        for token in &tokens {
            let phonemes = match self.resolve_reading(token) {
                Some(reading) => self.kana_to_phonemes(&reading),
                None => String::new(),
            };
            if phonemes.is_empty() {
                gap = !out.is_empty();
                continue;
            }
            if !out.is_empty() && (gap || self.needs_separator(prev_pos, token.pos)) {
                out.push(' ');
            }
            out.push_str(&phonemes);
            prev_pos = Some(token.pos);
            gap = false;
        }

        collapse_nasal_gemination(&out)
    }

    /// Whether a separator belongs between the previous voiced token
    /// and the current one.
    fn needs_separator(&self, prev: Option<Pos>, cur: Pos) -> bool {
        let Some(prev) = prev else {
            return false;
        };
        match self.config.spacing {
            WordSpacing::Uniform => true,
            WordSpacing::PosAware => !matches!(
                (prev, cur),
                (Pos::Particle, Pos::AuxVerb)
                    | (Pos::Particle, Pos::Noun)
                    | (Pos::Particle, Pos::Particle)
                    | (Pos::Noun, Pos::Noun)
            ),
        }
    }
}

impl Convert for JapaneseConverter {
    fn name(&self) -> &'static str {
        "ja"
    }

    fn text_to_phonemes(&self, text: &str) -> Result<String, ConvertError> {
        Ok(self.convert(text))
    }
}

/// Longest-match scan of a katakana string into mora labels.
/// Two-character digraph keys win over single characters; characters
/// outside the table are dropped. `ー` lengthens the preceding vowel.
fn scan_moras(katakana: &str) -> Labels {
    let chars: Vec<char> = katakana.chars().collect();
    let mut labels = Labels::new();
    let mut buf = [0u8; 8];
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == 'ー' {
            lengthen_last(&mut labels);
            i += 1;
            continue;
        }
        if i + 1 < chars.len() {
            let mut two = String::with_capacity(8);
            two.push(chars[i]);
            two.push(chars[i + 1]);
            if let Some(&(consonant, vowel)) = MORAS.get(two.as_str()) {
                labels.push(consonant);
                if let Some(v) = vowel {
                    labels.push(v);
                }
                i += 2;
                continue;
            }
        }
        let one = chars[i].encode_utf8(&mut buf);
        if let Some(&(consonant, vowel)) = MORAS.get(one) {
            labels.push(consonant);
            if let Some(v) = vowel {
                labels.push(v);
            }
        }
        // unmatched characters are stray symbols; ignore
        i += 1;
    }

    labels
}

fn lengthen_last(labels: &mut Labels) {
    if let Some(last) = labels.last().copied() {
        if let Some(long) = lengthen(last) {
            let n = labels.len();
            labels[n - 1] = long;
        }
        // already-long vowels and consonants absorb the mark
    }
}

/// Greedy left-to-right long-vowel contraction; consumed pairs are not
/// reused.
fn contract_long_vowels(labels: Labels) -> Labels {
    let mut out = Labels::new();
    let mut i = 0;

    while i < labels.len() {
        if i + 1 < labels.len() {
            let (a, b) = (labels[i], labels[i + 1]);
            let long = match (a, b) {
                ("o", "u") => lengthen("o"),
                ("e", "i") => lengthen("e"),
                _ if VOWELS.contains(&a) && a == b => lengthen(a),
                _ => None,
            };
            if let Some(long) = long {
                out.push(long);
                i += 2;
                continue;
            }
        }
        out.push(labels[i]);
        i += 1;
    }

    out
}

/// Rewrite the moraic nasal `N` by the place of the following
/// consonant.
fn assimilate_nasal(labels: Labels, mode: MoraicNasal) -> Labels {
    if mode == MoraicNasal::Plain {
        return labels;
    }

    let mut out = Labels::new();
    for i in 0..labels.len() {
        if labels[i] == "N"
            && let Some(&next) = labels.get(i + 1)
        {
            match next {
                "n" | "t" | "d" | "z" | "s" | "ch" | "sh" | "j" => {
                    out.push("ny");
                    continue;
                }
                "k" | "g" | "ky" | "gy" => {
                    out.push("ng");
                    continue;
                }
                _ => {}
            }
        }
        out.push(labels[i]);
    }
    out
}

/// A palatal nasal immediately followed by a plain `n` — within a
/// token or across a separator — geminates: `ɲn` / `ɲ n` → `ɲɲ`.
fn collapse_nasal_gemination(ipa: &str) -> String {
    ipa.replace("ɲ n", "ɲɲ").replace("ɲn", "ɲɲ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::KanaTokenizer;

    struct FixedTokenizer(Vec<Token>);

    impl Tokenize for FixedTokenizer {
        fn tokenize(&self, _text: &str) -> Vec<Token> {
            self.0.clone()
        }
    }

    fn kana_converter() -> JapaneseConverter {
        JapaneseConverter::new(Arc::new(KanaTokenizer))
    }

    fn with_tokens(tokens: Vec<Token>) -> JapaneseConverter {
        JapaneseConverter::new(Arc::new(FixedTokenizer(tokens)))
    }

    #[test]
    fn basic_moras() {
        let ja = kana_converter();
        assert_eq!(ja.kana_to_phonemes("カナ"), "kana");
        assert_eq!(ja.kana_to_phonemes("さくら"), "sakɯɾa");
        assert_eq!(ja.kana_to_phonemes("キャク"), "kʲakɯ");
    }

    #[test]
    fn long_vowel_contraction() {
        let ja = kana_converter();
        assert_eq!(ja.kana_to_phonemes("コウ"), "koː");
        assert_eq!(ja.kana_to_phonemes("セイ"), "seː");
        assert_eq!(ja.kana_to_phonemes("アア"), "aː");
        assert_eq!(ja.kana_to_phonemes("トウキョウ"), "toːkʲoː");
    }

    #[test]
    fn prolonged_sound_mark() {
        let ja = kana_converter();
        assert_eq!(ja.kana_to_phonemes("コーヒー"), "koːhiː");
        // leading mark has nothing to lengthen
        assert_eq!(ja.kana_to_phonemes("ーア"), "a");
    }

    #[test]
    fn gemination_renders_glottal_stop() {
        let ja = kana_converter();
        assert_eq!(ja.kana_to_phonemes("キッテ"), "kiʔte");
    }

    #[test]
    fn moraic_nasal_assimilation() {
        let ja = kana_converter();
        // before alveolar: palatal
        assert_eq!(ja.kana_to_phonemes("カンタン"), "kaɲtaɴ");
        // before velar: velar
        assert_eq!(ja.kana_to_phonemes("ゲンキ"), "ɡeŋki");
        // word-final: uvular
        assert_eq!(ja.kana_to_phonemes("ニホン"), "nihoɴ");
    }

    #[test]
    fn moraic_nasal_plain_mode() {
        let ja = kana_converter().with_config(JaConfig {
            nasal: MoraicNasal::Plain,
            ..JaConfig::default()
        });
        assert_eq!(ja.kana_to_phonemes("カンタン"), "kaɴtaɴ");
        assert_eq!(ja.kana_to_phonemes("ゲンキ"), "ɡeɴki");
    }

    #[test]
    fn konnichiwa_geminates_palatal_nasal() {
        let ja = kana_converter();
        let out = ja.text_to_phonemes("こんにちは").unwrap();
        assert_eq!(out, "koɲɲiɕiha");
    }

    #[test]
    fn hiragana_and_katakana_agree() {
        let ja = kana_converter();
        assert_eq!(ja.kana_to_phonemes("こんにちは"), ja.kana_to_phonemes("コンニチハ"));
    }

    #[test]
    fn topic_particle_reads_wa() {
        let ja = with_tokens(vec![
            Token::new("私", Some("ワタシ".into()), Pos::Noun),
            Token::new("は", Some("ハ".into()), Pos::Particle),
            Token::new("学生", Some("ガクセイ".into()), Pos::Noun),
            Token::new("です", Some("デス".into()), Pos::AuxVerb),
        ]);
        let out = ja.text_to_phonemes("私は学生です").unwrap();
        // は overrides to ワ (βa), never the literal ハ (ha)
        assert_eq!(out, "βataɕi βaɡakɯseː desɯ");
    }

    #[test]
    fn directional_particle_reads_e() {
        let ja = with_tokens(vec![
            Token::new("東京", Some("トウキョウ".into()), Pos::Noun),
            Token::new("へ", Some("ヘ".into()), Pos::Particle),
            Token::new("行く", Some("イク".into()), Pos::Verb),
        ]);
        let out = ja.text_to_phonemes("東京へ行く").unwrap();
        // noun → particle and particle → verb both take the default
        // separator
        assert_eq!(out, "toːkʲoː e ikɯ");
    }

    #[test]
    fn pos_aware_spacing_suppression() {
        // noun + noun compounds and particle chains join without a
        // separator
        let ja = with_tokens(vec![
            Token::new("日本", Some("ニホン".into()), Pos::Noun),
            Token::new("語", Some("ゴ".into()), Pos::Noun),
        ]);
        assert_eq!(ja.text_to_phonemes("日本語").unwrap(), "nihoɴɡo");
    }

    #[test]
    fn uniform_spacing_mode() {
        let ja = with_tokens(vec![
            Token::new("日本", Some("ニホン".into()), Pos::Noun),
            Token::new("語", Some("ゴ".into()), Pos::Noun),
        ])
        .with_config(JaConfig { spacing: WordSpacing::Uniform, ..JaConfig::default() });
        assert_eq!(ja.text_to_phonemes("日本語").unwrap(), "nihoɴ ɡo");
    }

    #[test]
    fn punctuation_and_unreadable_tokens_drop() {
        let ja = with_tokens(vec![
            Token::new("ネコ", Some("ネコ".into()), Pos::Noun),
            Token::new("、", None, Pos::Other),
            Token::new("123", None, Pos::Other),
            Token::new("cat", None, Pos::Other),
            Token::new("イヌ", None, Pos::Noun),
        ]);
        assert_eq!(ja.text_to_phonemes("ネコ、123catイヌ").unwrap(), "neko inɯ");
    }

    #[test]
    fn no_reading_sentinel_falls_back_to_kana_surface() {
        let ja = with_tokens(vec![Token::new("ねこ", Some(NO_READING.into()), Pos::Noun)]);
        assert_eq!(ja.text_to_phonemes("ねこ").unwrap(), "neko");
    }

    #[test]
    fn empty_input_is_empty() {
        let ja = kana_converter();
        assert_eq!(ja.text_to_phonemes("").unwrap(), "");
    }
}

//! External morphological tokenizer boundary.
//!
//! Japanese conversion consumes lexical tokens — surface form, an
//! optional kana reading, and a coarse part-of-speech tag — produced
//! by a morphological analyzer (Kuromoji/MeCab class). That analyzer
//! lives outside this crate; implement [`Tokenize`] to wire one in.
//! [`KanaTokenizer`] is the built-in fallback: it handles pure-kana
//! input, which needs no dictionary.

use crate::unicode::is_kana;

/// Coarse part-of-speech vocabulary used by the word-spacing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pos {
    Particle,
    Verb,
    AuxVerb,
    Noun,
    Other,
}

impl Pos {
    /// Map an IPAdic-style level-1 tag to the coarse vocabulary.
    pub fn from_tag(tag: &str) -> Pos {
        match tag {
            "助詞" | "particle" => Pos::Particle,
            "動詞" | "verb" => Pos::Verb,
            "助動詞" | "auxiliary" | "aux" => Pos::AuxVerb,
            "名詞" | "代名詞" | "noun" => Pos::Noun,
            _ => Pos::Other,
        }
    }
}

/// The "no reading available" sentinel analyzers emit for unknown
/// surfaces.
pub const NO_READING: &str = "*";

/// One lexical token from the external analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    /// Kana reading, if the analyzer supplied one. [`NO_READING`] and
    /// `None` are equivalent.
    pub reading: Option<String>,
    pub pos: Pos,
}

impl Token {
    pub fn new(surface: impl Into<String>, reading: Option<String>, pos: Pos) -> Self {
        Self { surface: surface.into(), reading, pos }
    }
}

/// The analyzer seam.
pub trait Tokenize: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Dictionary-free fallback tokenizer.
///
/// Splits the input into maximal kana runs and single non-kana
/// characters, tags everything [`Pos::Other`], and supplies no
/// readings. Enough for pure-kana input, where the surface is its own
/// reading; kanji need a real analyzer.
#[derive(Debug, Default, Clone, Copy)]
pub struct KanaTokenizer;

impl Tokenize for KanaTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut run = String::new();

        for c in text.chars() {
            if is_kana(c) {
                run.push(c);
                continue;
            }
            if !run.is_empty() {
                tokens.push(Token::new(std::mem::take(&mut run), None, Pos::Other));
            }
            if !c.is_whitespace() {
                tokens.push(Token::new(c.to_string(), None, Pos::Other));
            }
        }
        if !run.is_empty() {
            tokens.push(Token::new(run, None, Pos::Other));
        }
        tokens
    }
}

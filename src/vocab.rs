//! Phoneme-symbol → model-id vocabulary.
//!
//! The synthesizer consumes integer id sequences framed by BOS/EOS
//! markers (id 0). This table is the subset of the exported Kokoro
//! vocabulary that the converters can emit, one entry per Unicode
//! scalar; symbols the model does not know are dropped from the id
//! sequence, never substituted.

use phf::phf_map;

/// BOS and EOS share id 0 in the exported vocabulary.
pub const BOS_EOS: i64 = 0;

static VOCAB: phf::Map<char, i64> = phf_map! {
    // punctuation
    ';' => 1,
    ':' => 2,
    ',' => 3,
    '.' => 4,
    '!' => 5,
    '?' => 6,
    '—' => 9,
    '…' => 10,
    '"' => 11,
    '(' => 12,
    ')' => 13,
    ' ' => 16,

    // CJK-pipeline affricates, hosted in spare slots by the export
    'ʦ' => 19,
    'ʥ' => 20,
    'ʨ' => 21,

    // Latin letters
    'a' => 43,
    'b' => 44,
    'c' => 45,
    'd' => 46,
    'e' => 47,
    'f' => 48,
    'g' => 49,
    'h' => 50,
    'i' => 51,
    'j' => 52,
    'k' => 53,
    'l' => 54,
    'm' => 55,
    'n' => 56,
    'o' => 57,
    'p' => 58,
    'q' => 59,
    'r' => 60,
    's' => 61,
    't' => 62,
    'u' => 63,
    'v' => 64,
    'w' => 65,
    'x' => 66,
    'y' => 67,
    'z' => 68,

    // IPA block
    'ɑ' => 69,
    'ɐ' => 70,
    'ɒ' => 71,
    'æ' => 72,
    'β' => 75,
    'ɔ' => 76,
    'ɕ' => 77,
    'ç' => 78,
    'ð' => 81,
    'ʤ' => 82,
    'ə' => 83,
    'ɚ' => 85,
    'ɛ' => 86,
    'ɝ' => 88,
    'ɡ' => 92,
    'ɥ' => 99,
    'ɨ' => 101,
    'ɪ' => 102,
    'ʝ' => 103,
    'ɯ' => 110,
    'ŋ' => 112,
    'ɳ' => 113,
    'ɲ' => 114,
    'ɴ' => 115,
    'ɸ' => 118,
    'θ' => 119,
    'ɹ' => 123,
    'ɾ' => 125,
    'ɻ' => 126,
    'ʂ' => 130,
    'ʃ' => 131,
    'ʈ' => 132,
    'ʧ' => 133,
    'ʊ' => 135,
    'ʋ' => 136,
    'ʌ' => 138,
    'ɤ' => 140,
    'ʑ' => 145,
    'ʐ' => 146,
    'ʒ' => 147,
    'ʔ' => 148,
    'ˈ' => 156,
    'ˌ' => 157,
    'ː' => 158,
    'ʰ' => 162,
    'ʲ' => 164,

    // tone glyphs
    '↓' => 169,
    '↑' => 170,
    '→' => 171,
    '↗' => 172,
    '↘' => 173,
    '˥' => 174,
    '˧' => 175,
    '˩' => 176,

    // combining marks (non-syllabic, syllabic)
    '\u{032F}' => 177,
    '\u{0329}' => 178,
};

/// Id for one symbol, if the model knows it.
#[inline]
pub fn symbol_id(c: char) -> Option<i64> {
    VOCAB.get(&c).copied()
}

pub fn has_symbol(c: char) -> bool {
    VOCAB.contains_key(&c)
}

/// Phoneme string → BOS + ids + EOS. Unknown symbols are dropped.
pub fn phonemes_to_ids(phonemes: &str) -> Vec<i64> {
    let mut ids = Vec::with_capacity(phonemes.chars().count() + 2);
    ids.push(BOS_EOS);
    ids.extend(phonemes.chars().filter_map(symbol_id));
    ids.push(BOS_EOS);
    ids
}

//! Tonal pinyin syllable → IPA.
//!
//! A syllable like `zhong1` decomposes into an optional initial
//! (longest match first: the two-letter retroflexes `zh` `ch` `sh`
//! before the single-letter table), a final (the remainder), and a
//! tone digit 1–5 (absent → neutral). The final expands to 1–3 IPA
//! segments, one of which is the nucleus; the tone contour attaches to
//! the nucleus as a structured step, not a placeholder substitution.
//!
//! Allophony: after a retroflex initial (`zh/ch/sh/r`) the final `i`
//! is the apical retroflex vowel `ɻ̩`; after a dental sibilant
//! (`z/c/s`) it is the apical vowel `ɹ̩`; everywhere else the general
//! final table applies.

use phf::{phf_map, phf_set};

/// The five Mandarin tone categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    High,    // 1: ˥
    Rising,  // 2: ˧˥
    Dipping, // 3: ˧˩˧
    Falling, // 4: ˥˩
    Neutral, // 5: unmarked
}

impl Tone {
    /// Trailing tone digit → tone. Anything outside 1–4 is neutral,
    /// matching the degrade-don't-reject policy for malformed pinyin.
    #[inline]
    pub const fn from_digit(d: u8) -> Tone {
        match d {
            1 => Tone::High,
            2 => Tone::Rising,
            3 => Tone::Dipping,
            4 => Tone::Falling,
            _ => Tone::Neutral,
        }
    }

    /// IPA contour letters.
    #[inline]
    pub const fn contour(&self) -> &'static str {
        match self {
            Tone::High => "˥",
            Tone::Rising => "˧˥",
            Tone::Dipping => "˧˩˧",
            Tone::Falling => "˥˩",
            Tone::Neutral => "",
        }
    }

    /// Single-glyph arrow rendering of the contour.
    #[inline]
    pub const fn arrow(&self) -> &'static str {
        match self {
            Tone::High => "→",
            Tone::Rising => "↗",
            Tone::Dipping => "↓",
            Tone::Falling => "↘",
            Tone::Neutral => "",
        }
    }

    #[inline]
    pub const fn mark(&self, style: ToneStyle) -> &'static str {
        match style {
            ToneStyle::Contour => self.contour(),
            ToneStyle::Arrow => self.arrow(),
        }
    }
}

/// How tone contours are rendered in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToneStyle {
    /// Raw IPA contour letters (`ma˧˩˧`).
    Contour,
    /// Arrow glyphs (`ma↓`), the compact form the synthesizer vocab uses.
    #[default]
    Arrow,
}

/// One IPA segment of an expanded final. The nucleus segment carries
/// the tone mark.
#[derive(Debug, Clone, Copy)]
pub struct Seg {
    pub text: &'static str,
    pub nucleus: bool,
}

const fn seg(text: &'static str) -> Seg {
    Seg { text, nucleus: false }
}

const fn nuc(text: &'static str) -> Seg {
    Seg { text, nucleus: true }
}

/// Initial → IPA. Mandarin b/d/g are unaspirated voiceless stops.
static INITIALS: phf::Map<&'static str, &'static str> = phf_map! {
    "b" => "p",
    "p" => "pʰ",
    "m" => "m",
    "f" => "f",
    "d" => "t",
    "t" => "tʰ",
    "n" => "n",
    "l" => "l",
    "g" => "k",
    "k" => "kʰ",
    "h" => "x",
    "j" => "ʨ",
    "q" => "ʨʰ",
    "x" => "ɕ",
    "zh" => "ʈʂ",
    "ch" => "ʈʂʰ",
    "sh" => "ʂ",
    "r" => "ɻ",
    "z" => "ʦ",
    "c" => "ʦʰ",
    "s" => "s",
};

static RETROFLEX_INITIALS: phf::Set<&'static str> = phf_set! { "zh", "ch", "sh", "r" };
static DENTAL_INITIALS: phf::Set<&'static str> = phf_set! { "z", "c", "s" };

/// General final table. Alias spellings (`iu`/`ui`/`un`/`v`) expand to
/// the same segments as their canonical forms (`iou`/`uei`/`uen`/`ü`).
static FINALS: phf::Map<&'static str, &'static [Seg]> = phf_map! {
    // simple finals
    "a" => &[nuc("a")],
    "o" => &[seg("w"), nuc("o")], // bare o is read wo
    "e" => &[nuc("ɤ")],
    "i" => &[nuc("i")],
    "u" => &[nuc("u")],
    "ü" => &[nuc("y")],
    "v" => &[nuc("y")],
    "er" => &[nuc("ɚ")],

    // diphthongs
    "ai" => &[nuc("ai̯")],
    "ei" => &[nuc("ei̯")],
    "ao" => &[nuc("au̯")],
    "ou" => &[nuc("ou̯")],

    // nasal codas
    "an" => &[nuc("a"), seg("n")],
    "en" => &[nuc("ə"), seg("n")],
    "ang" => &[nuc("a"), seg("ŋ")],
    "eng" => &[nuc("ə"), seg("ŋ")],
    "ong" => &[nuc("ʊ"), seg("ŋ")],

    // i-medial finals
    "ia" => &[seg("j"), nuc("a")],
    "ie" => &[seg("j"), nuc("e")],
    "iao" => &[seg("j"), nuc("au̯")],
    "iou" => &[seg("j"), nuc("ou̯")],
    "iu" => &[seg("j"), nuc("ou̯")],
    "ian" => &[seg("j"), nuc("ɛ"), seg("n")],
    "in" => &[nuc("i"), seg("n")],
    "iang" => &[seg("j"), nuc("a"), seg("ŋ")],
    "ing" => &[nuc("i"), seg("ŋ")],
    "iong" => &[seg("j"), nuc("ʊ"), seg("ŋ")],

    // u-medial finals
    "ua" => &[seg("w"), nuc("a")],
    "uo" => &[seg("w"), nuc("o")],
    "uai" => &[seg("w"), nuc("ai̯")],
    "uei" => &[seg("w"), nuc("ei̯")],
    "ui" => &[seg("w"), nuc("ei̯")],
    "uan" => &[seg("w"), nuc("a"), seg("n")],
    "uen" => &[seg("w"), nuc("ə"), seg("n")],
    "un" => &[seg("w"), nuc("ə"), seg("n")],
    "uang" => &[seg("w"), nuc("a"), seg("ŋ")],
    "ueng" => &[seg("w"), nuc("ə"), seg("ŋ")],

    // ü-medial finals
    "üe" => &[seg("ɥ"), nuc("e")],
    "üan" => &[seg("ɥ"), nuc("ɛ"), seg("n")],
    "ün" => &[nuc("y"), seg("n")],
};

/// `zhi/chi/shi/ri`: the written `i` is the apical retroflex vowel.
static FINALS_AFTER_RETROFLEX: phf::Map<&'static str, &'static [Seg]> = phf_map! {
    "i" => &[nuc("ɻ̩")],
};

/// `zi/ci/si`: the written `i` is the apical dental vowel.
static FINALS_AFTER_DENTAL: phf::Map<&'static str, &'static [Seg]> = phf_map! {
    "i" => &[nuc("ɹ̩")],
};

/// A decomposed pinyin syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable<'a> {
    pub initial: Option<&'a str>,
    pub final_: &'a str,
    pub tone: Tone,
}

impl<'a> Syllable<'a> {
    /// Decompose `pinyin` into initial, final, and tone.
    pub fn parse(pinyin: &'a str) -> Syllable<'a> {
        let (body, tone) = split_tone(pinyin);
        let initial = extract_initial(body);
        let final_ = match initial {
            Some(ini) => &body[ini.len()..],
            None => body,
        };
        Syllable { initial, final_, tone }
    }
}

#[inline]
fn split_tone(pinyin: &str) -> (&str, Tone) {
    match pinyin.as_bytes().last().copied() {
        Some(b @ b'0'..=b'9') => (&pinyin[..pinyin.len() - 1], Tone::from_digit(b - b'0')),
        _ => (pinyin, Tone::Neutral),
    }
}

#[inline]
fn extract_initial(body: &str) -> Option<&str> {
    if let Some(two) = body.get(..2)
        && matches!(two, "zh" | "ch" | "sh")
    {
        return Some(two);
    }
    let first = body.get(..1)?;
    INITIALS.contains_key(first).then_some(first)
}

fn expand_final(initial: Option<&str>, final_: &str) -> Option<&'static [Seg]> {
    match initial {
        Some(ini) if RETROFLEX_INITIALS.contains(ini) => {
            FINALS_AFTER_RETROFLEX.get(final_).copied().or_else(|| FINALS.get(final_).copied())
        }
        Some(ini) if DENTAL_INITIALS.contains(ini) => {
            FINALS_AFTER_DENTAL.get(final_).copied().or_else(|| FINALS.get(final_).copied())
        }
        _ => FINALS.get(final_).copied(),
    }
}

/// Convert one tonal pinyin syllable to IPA.
///
/// Unknown finals pass through verbatim (tone dropped) — the caller is
/// a TTS frontend and must always produce something.
pub fn syllable_to_ipa(pinyin: &str, style: ToneStyle) -> String {
    if pinyin.is_empty() {
        return String::new();
    }

    let syl = Syllable::parse(pinyin);
    let mut out = String::with_capacity(pinyin.len() * 2);

    if let Some(ini) = syl.initial
        && let Some(ipa) = INITIALS.get(ini)
    {
        out.push_str(ipa);
    }

    match expand_final(syl.initial, syl.final_) {
        Some(segs) => {
            let mark = syl.tone.mark(style);
            for s in segs {
                out.push_str(s.text);
                if s.nucleus {
                    out.push_str(mark);
                }
            }
        }
        None => out.push_str(syl.final_),
    }

    out
}

/// Whether `pinyin` is a well-formed tonal syllable: trailing digit
/// 1–5 and a final present in one of the three tables.
pub fn is_valid_pinyin(pinyin: &str) -> bool {
    let Some(&last) = pinyin.as_bytes().last() else {
        return false;
    };
    if !(b'1'..=b'5').contains(&last) {
        return false;
    }
    let syl = Syllable::parse(pinyin);
    expand_final(syl.initial, syl.final_).is_some()
}

/// Longest-match-first substitution of IPA tone contours with arrow
/// glyphs, for contour text produced elsewhere. The three-letter
/// dipping contour must be replaced before the one-letter high tone to
/// avoid partial-match corruption.
pub fn simplify_tone_marks(ipa: &str) -> String {
    ipa.replace("˧˩˧", "↓")
        .replace("˧˥", "↗")
        .replace("˥˩", "↘")
        .replace("˥", "→")
}

//! Language detection and mixed-script segmentation.
//!
//! Both operations are total over arbitrary strings: there is no error
//! path, and the segmentation is a lossless partition of the input —
//! concatenating the segment texts reproduces the original exactly.

use crate::lang::{ALL_LANGS, Lang};
use crate::unicode::is_transparent;
use std::collections::HashMap;

/// A maximal same-language run of the original text.
///
/// Transparent characters (whitespace, digits, punctuation) are carried
/// inside whichever segment surrounds them; only a classified character
/// of a different language opens a new segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub lang: Lang,
}

impl Segment {
    pub fn new(text: impl Into<String>, lang: Lang) -> Self {
        Self { text: text.into(), lang }
    }
}

/// Count classified characters per language, in [`ALL_LANGS`] order.
fn count_classified(text: &str) -> [usize; 4] {
    let mut counts = [0usize; 4];
    for c in text.chars() {
        if is_transparent(c) {
            continue;
        }
        let lang = Lang::classify(c);
        if let Some(slot) = ALL_LANGS.iter().position(|l| *l == lang) {
            counts[slot] += 1;
        }
    }
    counts
}

/// Dominant language of the whole input, by classified-character count.
///
/// Returns [`Lang::Unknown`] when no character classifies (empty input,
/// punctuation-only, digits-only). Ties break toward the earlier entry
/// in [`ALL_LANGS`], so the result is stable across calls.
pub fn detect(text: &str) -> Lang {
    let counts = count_classified(text);
    let (slot, &max) = counts
        .iter()
        .enumerate()
        .max_by_key(|(i, n)| (**n, counts.len() - i))
        .expect("counts is non-empty");
    if max == 0 { Lang::Unknown } else { ALL_LANGS[slot] }
}

/// Per-language share of classified characters, in percent.
pub fn distribution(text: &str) -> HashMap<Lang, f64> {
    let counts = count_classified(text);
    let total: usize = counts.iter().sum();
    if total == 0 {
        return HashMap::new();
    }
    ALL_LANGS
        .iter()
        .zip(counts)
        .filter(|(_, n)| *n > 0)
        .map(|(lang, n)| (*lang, n as f64 / total as f64 * 100.0))
        .collect()
}

/// Split mixed-language text into maximal same-language runs.
///
/// Single forward pass: transparent characters always append to the
/// current buffer; the first classified character seeds the segment
/// class; a classified character of a different class flushes the
/// buffer and starts a new segment. Never produces empty segments and
/// never splits mid-codepoint.
pub fn segment_by_language(text: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut buf = String::new();
    let mut current: Option<Lang> = None;

    for c in text.chars() {
        if is_transparent(c) {
            buf.push(c);
            continue;
        }

        let lang = Lang::classify(c);
        match (current, lang) {
            (Some(cur), l) if l != Lang::Unknown && l != cur => {
                if !buf.is_empty() {
                    segments.push(Segment::new(std::mem::take(&mut buf), cur));
                }
                current = Some(l);
            }
            (None, l) if l != Lang::Unknown => {
                current = Some(l);
            }
            _ => {}
        }
        buf.push(c);
    }

    if !buf.is_empty() {
        // Input with no classified character at all stays one Unknown
        // segment rather than disappearing.
        segments.push(Segment::new(buf, current.unwrap_or(Lang::Unknown)));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_pure_scripts() {
        assert_eq!(detect("你好世界"), Lang::Chinese);
        assert_eq!(detect("今天天气很好"), Lang::Chinese);
        assert_eq!(detect("こんにちは"), Lang::Japanese);
        assert_eq!(detect("コンニチハ"), Lang::Japanese);
        assert_eq!(detect("안녕하세요"), Lang::Korean);
        assert_eq!(detect("Hello World"), Lang::English);
    }

    #[test]
    fn detect_with_punctuation() {
        assert_eq!(detect("你好，世界！"), Lang::Chinese);
        assert_eq!(detect("こんにちは！"), Lang::Japanese);
        assert_eq!(detect("안녕하세요!"), Lang::Korean);
    }

    #[test]
    fn detect_degenerate_inputs() {
        assert_eq!(detect(""), Lang::Unknown);
        assert_eq!(detect("。，！？"), Lang::Unknown);
        assert_eq!(detect("   "), Lang::Unknown);
        assert_eq!(detect("12345"), Lang::Unknown);
    }

    #[test]
    fn detect_mixed_goes_to_majority() {
        // 2 Chinese chars vs 5 English letters.
        assert_eq!(detect("你好Hello"), Lang::English);
        assert_eq!(detect("你好世界Hi"), Lang::Chinese);
    }

    #[test]
    fn segment_pure_chinese() {
        let segs = segment_by_language("你好世界");
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].text, "你好世界");
        assert_eq!(segs[0].lang, Lang::Chinese);
    }

    #[test]
    fn segment_mixed_three_way() {
        let segs = segment_by_language("我买了iPhone很好");
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0], Segment::new("我买了", Lang::Chinese));
        assert_eq!(segs[1], Segment::new("iPhone", Lang::English));
        assert_eq!(segs[2], Segment::new("很好", Lang::Chinese));
    }

    #[test]
    fn segment_punctuation_stays_with_run() {
        let segs = segment_by_language("Hello, 世界！");
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].text, "Hello, ");
        assert_eq!(segs[0].lang, Lang::English);
        assert_eq!(segs[1].text, "世界！");
        assert_eq!(segs[1].lang, Lang::Chinese);
    }

    #[test]
    fn segment_lossless() {
        let inputs = [
            "我买了iPhone很好",
            "Hello, 世界！",
            "こんにちは！123 OK。",
            "。，！？",
            "",
            "한국어とにほんご",
        ];
        for input in inputs {
            let joined: String = segment_by_language(input)
                .iter()
                .map(|s| s.text.as_str())
                .collect();
            assert_eq!(joined, input);
        }
    }

    #[test]
    fn segment_unclassified_only_is_one_unknown_run() {
        let segs = segment_by_language("123 !?");
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].lang, Lang::Unknown);
        assert_eq!(segs[0].text, "123 !?");
    }
}

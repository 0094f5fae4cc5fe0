//! Read-only pronunciation dictionaries.
//!
//! Both dictionaries are plain TSV assets (`grapheme<TAB>value`, `#`
//! comments, blank lines ignored) parsed once at construction time.
//! A malformed asset is the one failure this crate refuses to paper
//! over: the pipeline cannot guess dictionary contents, so parsing
//! surfaces a fatal [`DictError`] instead of degrading.

use memchr::memchr;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Embedded seed dictionaries. Real deployments load the full assets
/// via `from_path`; the seeds keep the crate usable out of the box.
const ZH_PINYIN_TSV: &str = include_str!("data/zh_pinyin.tsv");
const EN_DICT_TSV: &str = include_str!("data/en_dict.tsv");

#[derive(Debug, Error)]
pub enum DictError {
    #[error("failed to read dictionary asset: {0}")]
    Io(#[from] std::io::Error),

    #[error("dictionary asset is not valid UTF-8")]
    Utf8,

    #[error("malformed dictionary line {line}: {reason}")]
    Parse { line: usize, reason: &'static str },
}

#[cfg(feature = "simdutf8")]
#[inline]
fn validate_utf8(bytes: &[u8]) -> Result<&str, DictError> {
    simdutf8::basic::from_utf8(bytes).map_err(|_| DictError::Utf8)
}

#[cfg(not(feature = "simdutf8"))]
#[inline]
fn validate_utf8(bytes: &[u8]) -> Result<&str, DictError> {
    std::str::from_utf8(bytes).map_err(|_| DictError::Utf8)
}

/// Split one TSV line into (key, value) at the first tab.
fn split_line(line: &str, lineno: usize) -> Result<(&str, &str), DictError> {
    let tab = memchr(b'\t', line.as_bytes()).ok_or(DictError::Parse {
        line: lineno,
        reason: "missing tab separator",
    })?;
    let (key, value) = (&line[..tab], line[tab + 1..].trim());
    if key.is_empty() || value.is_empty() {
        return Err(DictError::Parse {
            line: lineno,
            reason: "empty key or value",
        });
    }
    Ok((key, value))
}

fn parse_lines<'a>(
    tsv: &'a str,
) -> impl Iterator<Item = Result<(usize, &'a str, &'a str), DictError>> {
    tsv.lines().enumerate().filter_map(|(i, raw)| {
        let line = raw.trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        Some(split_line(line, i + 1).map(|(k, v)| (i + 1, k, v)))
    })
}

/// Chinese character → tonal pinyin syllable (`你` → `ni3`).
#[derive(Debug, Clone)]
pub struct PinyinDict {
    map: HashMap<char, String>,
}

impl PinyinDict {
    /// The embedded seed table.
    pub fn builtin() -> Self {
        Self::from_tsv(ZH_PINYIN_TSV).expect("embedded pinyin dictionary is well-formed")
    }

    pub fn from_tsv(tsv: &str) -> Result<Self, DictError> {
        let mut map = HashMap::new();
        for entry in parse_lines(tsv) {
            let (line, key, value) = entry?;
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    map.insert(c, value.to_owned());
                }
                _ => {
                    return Err(DictError::Parse {
                        line,
                        reason: "pinyin key must be a single character",
                    });
                }
            }
        }
        Ok(Self { map })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DictError> {
        Self::from_tsv(validate_utf8(bytes)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictError> {
        Self::from_bytes(&std::fs::read(path)?)
    }

    #[inline]
    pub fn get(&self, c: char) -> Option<&str> {
        self.map.get(&c).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// English word → space-delimited IPA phonemes (`iphone` → `aɪ f oʊ n`).
/// Keys are lower-case; single-letter entries double as the spell-out
/// table for out-of-dictionary words.
#[derive(Debug, Clone)]
pub struct EnglishDict {
    map: HashMap<String, String>,
}

impl EnglishDict {
    pub fn builtin() -> Self {
        Self::from_tsv(EN_DICT_TSV).expect("embedded english dictionary is well-formed")
    }

    pub fn from_tsv(tsv: &str) -> Result<Self, DictError> {
        let mut map = HashMap::new();
        for entry in parse_lines(tsv) {
            let (_, key, value) = entry?;
            map.insert(key.to_ascii_lowercase(), value.to_owned());
        }
        Ok(Self { map })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DictError> {
        Self::from_tsv(validate_utf8(bytes)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictError> {
        Self::from_bytes(&std::fs::read(path)?)
    }

    #[inline]
    pub fn get(&self, word: &str) -> Option<&str> {
        self.map.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dictionaries_load() {
        let zh = PinyinDict::builtin();
        assert!(zh.len() > 50);
        assert_eq!(zh.get('你'), Some("ni3"));
        assert_eq!(zh.get('好'), Some("hao3"));
        assert_eq!(zh.get('a'), None);

        let en = EnglishDict::builtin();
        assert_eq!(en.get("iphone"), Some("aɪ f oʊ n"));
        assert_eq!(en.get("hello"), Some("h ʌ l oʊ"));
        assert_eq!(en.get("q"), Some("k j u"));
        assert_eq!(en.get("zzz"), None);
    }

    #[test]
    fn comments_and_blank_lines_skipped() {
        let dict = PinyinDict::from_tsv("# header\n\n你\tni3\n").unwrap();
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn missing_tab_is_fatal() {
        let err = PinyinDict::from_tsv("你 ni3").unwrap_err();
        assert!(matches!(err, DictError::Parse { line: 1, .. }));
    }

    #[test]
    fn multi_char_key_is_fatal() {
        assert!(PinyinDict::from_tsv("你好\tni3").is_err());
    }

    #[test]
    fn invalid_utf8_is_fatal() {
        assert!(matches!(
            PinyinDict::from_bytes(b"\xFF\xFE"),
            Err(DictError::Utf8)
        ));
    }

    #[test]
    fn english_keys_fold_case() {
        let dict = EnglishDict::from_tsv("Hello\th ʌ l oʊ").unwrap();
        assert_eq!(dict.get("hello"), Some("h ʌ l oʊ"));
    }
}

use crate::unicode;

/// Language class assigned to characters and segments.
///
/// A closed set: conversion dispatch matches exhaustively over these
/// variants. `Korean` is detected but not yet convertible; `Unknown`
/// covers characters outside every recognized script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Chinese,
    Japanese,
    Korean,
    English,
    Unknown,
}

impl Lang {
    /// BCP-47-ish short code, for logging and voice selection.
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        match self {
            Lang::Chinese => "zh",
            Lang::Japanese => "ja",
            Lang::Korean => "ko",
            Lang::English => "en",
            Lang::Unknown => "unknown",
        }
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Lang::Chinese => "Chinese",
            Lang::Japanese => "Japanese",
            Lang::Korean => "Korean",
            Lang::English => "English",
            Lang::Unknown => "Unknown",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "zh" | "chinese" => Lang::Chinese,
            "ja" | "japanese" => Lang::Japanese,
            "ko" | "korean" => Lang::Korean,
            "en" | "english" => Lang::English,
            _ => Lang::Unknown,
        }
    }

    /// Classify a single character by Unicode block membership.
    ///
    /// Kana ranges are tested before the CJK ideograph ranges: Japanese
    /// text commonly embeds ideographs, so kana is the signal that
    /// disambiguates, while a bare ideograph defaults to Chinese.
    #[inline]
    pub fn classify(c: char) -> Lang {
        if unicode::is_kana(c) {
            Lang::Japanese
        } else if unicode::is_hangul(c) {
            Lang::Korean
        } else if unicode::is_cjk_ideograph(c) {
            Lang::Chinese
        } else if unicode::is_latin_letter(c) {
            Lang::English
        } else {
            Lang::Unknown
        }
    }
}

/// Every classifiable language, in classification order.
pub const ALL_LANGS: &[Lang] = &[Lang::Chinese, Lang::Japanese, Lang::Korean, Lang::English];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_per_script() {
        assert_eq!(Lang::classify('a'), Lang::English);
        assert_eq!(Lang::classify('Z'), Lang::English);
        assert_eq!(Lang::classify('你'), Lang::Chinese);
        assert_eq!(Lang::classify('好'), Lang::Chinese);
        assert_eq!(Lang::classify('あ'), Lang::Japanese);
        assert_eq!(Lang::classify('ア'), Lang::Japanese);
        assert_eq!(Lang::classify('한'), Lang::Korean);
        assert_eq!(Lang::classify('1'), Lang::Unknown);
        assert_eq!(Lang::classify(' '), Lang::Unknown);
        assert_eq!(Lang::classify('🎵'), Lang::Unknown);
    }

    #[test]
    fn codes_round_trip() {
        for lang in ALL_LANGS {
            assert_eq!(Lang::from_code(lang.code()), *lang);
        }
        assert_eq!(Lang::from_code("xx"), Lang::Unknown);
    }
}

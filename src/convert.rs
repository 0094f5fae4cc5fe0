//! The per-language conversion seam.
//!
//! Each supported language implements [`Convert`]; the facade matches
//! a segment's [`Lang`](crate::lang::Lang) to the converter. Converters
//! degrade gracefully on unrecognized input — the only error they may
//! surface is the explicit unsupported-language condition, which
//! callers are expected to want to distinguish from silent passthrough.

pub mod en;
pub mod ja;
pub mod zh;

use crate::lang::Lang;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("language `{}` is not supported for conversion", .0.code())]
    Unsupported(Lang),
}

/// A text → phoneme-string conversion for one language.
pub trait Convert: Send + Sync {
    /// Human-readable name, used in errors and diagnostics.
    fn name(&self) -> &'static str;

    /// Convert a same-language text run into its phoneme string.
    ///
    /// Total over arbitrary strings apart from [`ConvertError`]:
    /// unknown graphemes pass through or are dropped per language
    /// policy, never panic.
    fn text_to_phonemes(&self, text: &str) -> Result<String, ConvertError>;
}

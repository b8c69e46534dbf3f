//! Optional NFC pre-pass
//!
//! Keyboard layouts and copy-pasted text sometimes carry Alef followed by a
//! combining Maddah or Hamza instead of the precomposed letter. Composing
//! first lets those sequences reach the form and ligature tables.

use harf_core::TextTransform;
use std::borrow::Cow;
use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

/// NFC normalization stage for the label pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct NfcNormalizer;

impl NfcNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl TextTransform for NfcNormalizer {
    fn name(&self) -> &'static str {
        "normalize"
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        normalize(text)
    }
}

/// Compose to NFC, borrowing when the text is already composed
pub fn normalize(text: &str) -> Cow<'_, str> {
    if is_nfc_quick(text.chars()) == IsNormalized::Yes {
        return Cow::Borrowed(text);
    }
    let composed: String = text.nfc().collect();
    if composed == text {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(composed)
    }
}

//! Per-codepoint classification
//!
//! Every function here is total: unknown codepoints are simply `Other`.

use crate::tables;
use harf_core::types::CharClass;

/// Classify one codepoint for the shaper
pub fn classify(ch: char) -> CharClass {
    if is_diacritic(ch) {
        CharClass::Diacritic
    } else if is_arabic_joining_letter(ch) {
        CharClass::ArabicJoining
    } else {
        CharClass::Other
    }
}

/// True for the letters the shaper can give a contextual form (Tatweel included)
pub fn is_arabic_joining_letter(ch: char) -> bool {
    tables::forms(ch).is_some()
}

/// Combining marks that sit on a letter without taking a joining slot
pub fn is_diacritic(ch: char) -> bool {
    matches!(ch, '\u{064B}'..='\u{065F}' | '\u{0610}'..='\u{061A}' | '\u{0670}')
}

/// Broad Arabic check used to decide whether a word counts as Arabic
///
/// Covers the main Arabic block, Arabic Supplement, Arabic Extended-A, and
/// both presentation form blocks, so already-shaped text still counts.
pub fn is_arabic_range_char(ch: char) -> bool {
    matches!(
        ch,
        '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{08A0}'..='\u{08FF}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}'
    )
}

/// Does the text contain anything the Arabic engine cares about?
pub fn has_arabic(text: &str) -> bool {
    text.chars().any(is_arabic_range_char)
}

pub use tables::is_non_joining_left;

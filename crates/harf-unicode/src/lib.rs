// this_file: crates/harf-unicode/src/lib.rs

//! Arabic shaping and word reordering for left-to-right surfaces.
//!
//! Three passes turn logical Arabic text into something a glyph-placing
//! canvas can draw as-is:
//!
//! - [`classify`] sorts codepoints into joining letters, diacritics, and the rest
//! - [`shaper`] picks isolated/initial/medial/final forms and Lam-Alef ligatures
//! - [`reorder`] reverses word order for predominantly Arabic lines
//!
//! [`process`] runs shaping then reordering, always in that order: joining
//! rules depend on logical order, word reversal does not.
//!
//! ```
//! use harf_unicode::process;
//!
//! assert_eq!(process("لا"), "\u{FEFB}");
//! assert_eq!(process("Sale 50%"), "Sale 50%");
//! ```
//!
//! All tables are immutable and no state survives a call, so every function
//! here is safe to use from many threads at once.

pub mod classify;
pub mod normalize;
pub mod reorder;
pub mod shaper;
pub mod tables;

pub use classify::{
    classify, has_arabic, is_arabic_joining_letter, is_arabic_range_char, is_diacritic,
};
pub use normalize::NfcNormalizer;
pub use reorder::{reverse, ReorderDecision, WordReorderer};
pub use shaper::{reshape, ArabicShaper, ShapedGlyph};

use std::borrow::Cow;

/// Shape, then reorder words for display on a left-to-right surface
pub fn process(text: &str) -> Cow<'_, str> {
    match reshape(text) {
        Cow::Borrowed(unchanged) => reverse(unchanged),
        Cow::Owned(shaped) => {
            let visual = reverse(&shaped).into_owned();
            Cow::Owned(visual)
        },
    }
}

#[cfg(test)]
mod tests;

#[cfg(test)]
mod proptests;

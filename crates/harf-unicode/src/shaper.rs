// this_file: crates/harf-unicode/src/shaper.rs

//! Contextual shaping - logical letters become presentation glyphs
//!
//! Each Arabic letter looks at its nearest neighbours, skipping over
//! diacritics, and picks one of four forms. Lam followed by an Alef variant
//! collapses into a single ligature glyph. Everything else passes through.

use crate::classify::{classify, has_arabic, is_arabic_joining_letter, is_diacritic};
use crate::tables::{self, LAM};
use harf_core::{
    types::{CharClass, Form},
    TextTransform,
};
use std::borrow::Cow;

/// One emitted glyph and where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapedGlyph {
    /// Char index of the source codepoint in the input
    pub source_index: usize,
    /// The logical codepoint (the Lam for a ligature)
    pub source: char,
    pub class: CharClass,
    /// Chosen form; `None` for diacritics and pass-through characters
    pub form: Option<Form>,
    /// The codepoint written to the output
    pub glyph: char,
    /// True when this glyph replaces a Lam-Alef pair
    pub ligature: bool,
}

/// Shaping stage for the label pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct ArabicShaper;

impl ArabicShaper {
    pub fn new() -> Self {
        Self
    }
}

impl TextTransform for ArabicShaper {
    fn name(&self) -> &'static str {
        "shape"
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        reshape(text)
    }
}

/// Replace Arabic letters with their contextual presentation forms
///
/// Text without any Arabic comes back borrowed and untouched.
pub fn reshape(text: &str) -> Cow<'_, str> {
    if !has_arabic(text) {
        return Cow::Borrowed(text);
    }

    let mut output = String::with_capacity(text.len());
    let mut offset = 0;
    while let Some(current) = text[offset..].chars().next() {
        let (glyph, next) = shape_step(text, offset, current, 0);
        output.push(glyph.glyph);
        offset = next;
    }

    log::debug!("Reshaped {} bytes into {} bytes", text.len(), output.len());
    Cow::Owned(output)
}

/// Shape the text and report every emitted glyph
pub fn analyze(text: &str) -> Vec<ShapedGlyph> {
    let mut glyphs = Vec::new();
    let mut offset = 0;
    let mut char_index = 0;
    while let Some(current) = text[offset..].chars().next() {
        let (glyph, next) = shape_step(text, offset, current, char_index);
        char_index += text[offset..next].chars().count();
        glyphs.push(glyph);
        offset = next;
    }
    glyphs
}

/// Pick the form for `current` given its significant neighbours
///
/// The two joins are decided independently: the previous letter's
/// membership in the non-joining-left set blocks the right-hand join,
/// while `current`'s own membership blocks the left-hand one.
pub fn contextual_form(prev: Option<char>, current: char, next: Option<char>) -> Form {
    let joined_from_right = joins_forward(prev);
    let joins_to_left = next.is_some_and(is_arabic_joining_letter)
        && !tables::is_non_joining_left(current);
    Form::from_joins(joined_from_right, joins_to_left)
}

/// Emit one glyph for `current`, which starts at byte `offset`
///
/// Returns the glyph and the byte offset to resume at. `char_index` is only
/// recorded in the glyph.
fn shape_step(
    text: &str,
    offset: usize,
    current: char,
    char_index: usize,
) -> (ShapedGlyph, usize) {
    let class = classify(current);
    let passthrough = ShapedGlyph {
        source_index: char_index,
        source: current,
        class,
        form: None,
        glyph: current,
        ligature: false,
    };
    let after = offset + current.len_utf8();

    if class != CharClass::ArabicJoining {
        return (passthrough, after);
    }

    let prev = prev_significant(text, offset);
    let next = next_significant(text, after);

    if current == LAM {
        if let Some((alef_offset, alef)) = next {
            let joined = joins_forward(prev);
            if let Some(ligature) = tables::lam_alef_ligature(alef, joined) {
                // Diacritics between the Lam and the Alef are dropped
                let glyph = ShapedGlyph {
                    form: Some(if joined { Form::Final } else { Form::Isolated }),
                    glyph: ligature,
                    ligature: true,
                    ..passthrough
                };
                return (glyph, alef_offset + alef.len_utf8());
            }
        }
    }

    let form = contextual_form(prev, current, next.map(|(_, ch)| ch));
    match tables::presentation_form(current, form) {
        Some(shaped) => {
            let glyph = ShapedGlyph {
                form: Some(form),
                glyph: shaped,
                ..passthrough
            };
            (glyph, after)
        },
        None => (passthrough, after),
    }
}

/// Can `prev` reach forward to connect with the letter after it?
fn joins_forward(prev: Option<char>) -> bool {
    prev.is_some_and(|ch| is_arabic_joining_letter(ch) && !tables::is_non_joining_left(ch))
}

/// Nearest non-diacritic before byte `offset`
fn prev_significant(text: &str, offset: usize) -> Option<char> {
    text[..offset].chars().rev().find(|&ch| !is_diacritic(ch))
}

/// Nearest non-diacritic at or after byte `from`, with its byte offset
fn next_significant(text: &str, from: usize) -> Option<(usize, char)> {
    text[from..]
        .char_indices()
        .find(|&(_, ch)| !is_diacritic(ch))
        .map(|(idx, ch)| (from + idx, ch))
}

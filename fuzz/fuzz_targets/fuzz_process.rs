//! Fuzz the shaping and reordering passes with arbitrary text
//!
//! Beyond not panicking, a few properties must hold for every input:
//! - shaping never produces more chars than it was given
//! - word reversal undoes itself
//! - the glyph report agrees with the shaped string

#![no_main]

use harf_unicode::{process, reshape, reverse, shaper};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    if text.len() > 10_000 {
        return;
    }

    let shaped = reshape(&text);
    assert!(shaped.chars().count() <= text.chars().count());

    let glyphs: String = shaper::analyze(&text).iter().map(|g| g.glyph).collect();
    assert_eq!(glyphs, shaped);

    let once = reverse(&text).into_owned();
    assert_eq!(reverse(&once), text);

    let _ = process(&text);
    let _ = harf_unicode::normalize::normalize(&text);
});

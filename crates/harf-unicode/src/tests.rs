// this_file: crates/harf-unicode/src/tests.rs

use super::*;
use harf_core::types::{CharClass, Direction, Form};
use harf_core::TextTransform;

fn codepoints(text: &str) -> Vec<u32> {
    text.chars().map(|ch| ch as u32).collect()
}

#[test]
fn test_isolated_letter() {
    assert_eq!(reshape("ب"), "\u{FE8F}");
}

#[test]
fn test_two_letter_join() {
    assert_eq!(codepoints(&reshape("بت")), vec![0xFE91, 0xFE96]);
}

#[test]
fn test_three_letter_join() {
    assert_eq!(codepoints(&reshape("بتت")), vec![0xFE91, 0xFE98, 0xFE96]);
}

#[test]
fn test_non_joining_left_blocks_successor() {
    // Dal cannot reach Beh, so both stand alone
    assert_eq!(codepoints(&reshape("دب")), vec![0xFEA9, 0xFE8F]);
}

#[test]
fn test_non_joining_left_still_accepts_predecessor() {
    // Beh joins into Dal; Dal refuses Teh; Teh starts fresh
    assert_eq!(codepoints(&reshape("بدت")), vec![0xFE91, 0xFEAA, 0xFE95]);
}

#[test]
fn test_lam_alef_isolated() {
    let shaped = reshape("لا");
    assert_eq!(codepoints(&shaped), vec![0xFEFB]);
    assert_eq!(shaped.chars().count(), 1);
}

#[test]
fn test_lam_alef_final_after_joiner() {
    assert_eq!(codepoints(&reshape("بلا")), vec![0xFE91, 0xFEFC]);
}

#[test]
fn test_lam_alef_variants() {
    assert_eq!(codepoints(&reshape("لآ")), vec![0xFEF5]);
    assert_eq!(codepoints(&reshape("لأ")), vec![0xFEF7]);
    assert_eq!(codepoints(&reshape("لإ")), vec![0xFEF9]);
    assert_eq!(codepoints(&reshape("بلإ")), vec![0xFE91, 0xFEFA]);
}

#[test]
fn test_lam_alef_after_non_joiner_is_isolated() {
    assert_eq!(codepoints(&reshape("دلا")), vec![0xFEA9, 0xFEFB]);
}

#[test]
fn test_lam_alef_inside_word() {
    // Seen-Lam-Alef-Meem: the ligature ends the join, Meem stands alone
    assert_eq!(
        codepoints(&reshape("سلام")),
        vec![0xFEB3, 0xFEFC, 0xFEE1]
    );
}

#[test]
fn test_letter_after_ligature_sees_alef() {
    assert_eq!(codepoints(&reshape("لاب")), vec![0xFEFB, 0xFE8F]);
}

#[test]
fn test_diacritic_between_lam_and_alef_is_dropped() {
    assert_eq!(codepoints(&reshape("ل\u{064E}ا")), vec![0xFEFB]);
}

#[test]
fn test_diacritic_after_alef_is_kept() {
    assert_eq!(codepoints(&reshape("لا\u{064B}")), vec![0xFEFB, 0x064B]);
}

#[test]
fn test_diacritic_transparency() {
    assert_eq!(
        codepoints(&reshape("بَت")),
        vec![0xFE91, 0x064E, 0xFE96]
    );
}

#[test]
fn test_stacked_diacritics_preserved_in_order() {
    assert_eq!(
        codepoints(&reshape("ب\u{0651}\u{064E}ت")),
        vec![0xFE91, 0x0651, 0x064E, 0xFE96]
    );
}

#[test]
fn test_leading_diacritic_passes_through() {
    assert_eq!(codepoints(&reshape("\u{064E}ب")), vec![0x064E, 0xFE8F]);
}

#[test]
fn test_tatweel_joins_both_sides() {
    assert_eq!(
        codepoints(&reshape("بـت")),
        vec![0xFE91, 0x0640, 0xFE96]
    );
}

#[test]
fn test_hamza_keeps_single_glyph() {
    assert_eq!(codepoints(&reshape("ء")), vec![0xFE80]);
    assert_eq!(codepoints(&reshape("بء")), vec![0xFE91, 0xFE80]);
}

#[test]
fn test_unknown_combining_mark_isolates_neighbours() {
    // U+0301 is not an Arabic diacritic, so it interrupts the join
    assert_eq!(
        codepoints(&reshape("ب\u{0301}ت")),
        vec![0xFE8F, 0x0301, 0xFE95]
    );
}

#[test]
fn test_unsupported_arabic_letters_pass_through() {
    // Peh and Arabic-Indic digits are Arabic but have no table row
    assert_eq!(codepoints(&reshape("\u{067E}\u{0661}")), vec![0x067E, 0x0661]);
}

#[test]
fn test_latin_text_is_borrowed() {
    assert!(matches!(reshape("Hello, World! 123"), Cow::Borrowed(_)));
    assert!(matches!(reverse("Hello, World! 123"), Cow::Borrowed(_)));
    assert!(matches!(process("Hello, World! 123"), Cow::Borrowed(_)));
}

#[test]
fn test_empty_in_empty_out() {
    assert_eq!(reshape(""), "");
    assert_eq!(reverse(""), "");
    assert_eq!(process(""), "");
}

#[test]
fn test_optional_input_maps_through() {
    let missing: Option<&str> = None;
    assert_eq!(missing.map(process), None);
    assert_eq!(Some("لا").map(process).as_deref(), Some("\u{FEFB}"));
}

#[test]
fn test_mixed_line_shapes_only_arabic() {
    assert_eq!(
        reshape("Sale خصم 50%"),
        "Sale \u{FEA7}\u{FEBC}\u{FEE2} 50%"
    );
}

#[test]
fn test_reverse_majority() {
    assert_eq!(reverse("مرحبا بالعالم"), "بالعالم مرحبا");
}

#[test]
fn test_reverse_minority_unchanged() {
    assert_eq!(
        reverse("Hello مرحبا world today"),
        "Hello مرحبا world today"
    );
}

#[test]
fn test_reverse_only_splits_on_space() {
    // A tab is part of the word, so this is a single token
    assert_eq!(reverse("مرحبا\tبالعالم"), "مرحبا\tبالعالم");
}

#[test]
fn test_reverse_treats_newline_as_part_of_word() {
    // Line handling belongs to the caller; here "a\nb" is one token
    assert_eq!(reverse("مرحبا\nبالعالم يا"), "يا مرحبا\nبالعالم");
}

#[test]
fn test_reverse_counts_presentation_forms() {
    assert_eq!(
        reverse("\u{FEFB} \u{FE8F}"),
        "\u{FE8F} \u{FEFB}"
    );
}

#[test]
fn test_reverse_preserves_empty_tokens() {
    assert_eq!(reverse("أ  ب ج"), "ج ب  أ");
}

#[test]
fn test_process_single_word() {
    assert_eq!(
        codepoints(&process("مرحبا")),
        vec![0xFEE3, 0xFEAE, 0xFEA3, 0xFE92, 0xFE8E]
    );
}

#[test]
fn test_process_two_words() {
    assert_eq!(
        process("عرض خاص"),
        "\u{FEA7}\u{FE8E}\u{FEB9} \u{FECB}\u{FEAE}\u{FEBD}"
    );
}

#[test]
fn test_process_numbers_within_arabic() {
    let visual = process("خصم 50% اليوم");
    let words: Vec<&str> = visual.split(' ').collect();
    assert_eq!(
        words,
        vec![&*reshape("اليوم"), "50%", &*reshape("خصم")]
    );
}

#[test]
fn test_stage_names() {
    assert_eq!(ArabicShaper::new().name(), "shape");
    assert_eq!(WordReorderer::new().name(), "reorder");
    assert_eq!(NfcNormalizer::new().name(), "normalize");
}

#[test]
fn test_normalized_madda_reaches_ligature() {
    let composed = NfcNormalizer::new().apply("\u{0644}\u{0627}\u{0653}").into_owned();
    assert_eq!(codepoints(&reshape(&composed)), vec![0xFEF5]);
    // Without composition the Maddah rides along after the plain ligature
    assert_eq!(
        codepoints(&reshape("\u{0644}\u{0627}\u{0653}")),
        vec![0xFEFB, 0x0653]
    );
}

#[test]
fn test_analyze_reports_forms() {
    let glyphs = shaper::analyze("بَلا!");
    assert_eq!(glyphs.len(), 4);

    assert_eq!(glyphs[0].source, 'ب');
    assert_eq!(glyphs[0].form, Some(Form::Initial));
    assert_eq!(glyphs[0].class, CharClass::ArabicJoining);

    assert_eq!(glyphs[1].class, CharClass::Diacritic);
    assert_eq!(glyphs[1].form, None);

    assert!(glyphs[2].ligature);
    assert_eq!(glyphs[2].source_index, 2);
    assert_eq!(glyphs[2].form, Some(Form::Final));
    assert_eq!(glyphs[2].glyph, '\u{FEFC}');

    assert_eq!(glyphs[3].class, CharClass::Other);
    assert_eq!(glyphs[3].source_index, 4);
}

#[test]
fn test_analyze_matches_reshape() {
    let text = "سلامٌ على الجميع - Hello";
    let from_analyze: String = shaper::analyze(text).iter().map(|g| g.glyph).collect();
    assert_eq!(from_analyze, reshape(text));
}

#[test]
fn test_reorder_decision_direction() {
    assert_eq!(reorder::analyze("مرحبا بالعالم").direction(), Direction::RightToLeft);
    assert_eq!(reorder::analyze("Hi").direction(), Direction::LeftToRight);
}

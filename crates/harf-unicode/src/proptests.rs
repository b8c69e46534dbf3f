use super::*;
use proptest::prelude::*;

/// Base letters from the shaping table, minus Lam so no ligature can form
const LETTERS_WITHOUT_LAM: &str = "ءآأؤإئابةتثجحخدذرزسشصضطظعغـفقكمنهوىي";
const DIACRITICS: &str = "\u{064B}\u{064C}\u{064D}\u{064E}\u{064F}\u{0650}\u{0651}\u{0652}\u{0670}";

fn arabic_without_lam() -> impl Strategy<Value = String> {
    let pool: Vec<char> = LETTERS_WITHOUT_LAM
        .chars()
        .chain(DIACRITICS.chars())
        .chain(" .1a".chars())
        .collect();
    prop::collection::vec(prop::sample::select(pool), 0..40)
        .prop_map(|chars| chars.into_iter().collect())
}

fn arabic_with_lam() -> impl Strategy<Value = String> {
    let pool: Vec<char> = LETTERS_WITHOUT_LAM
        .chars()
        .chain(DIACRITICS.chars())
        .chain("للل x".chars())
        .collect();
    prop::collection::vec(prop::sample::select(pool), 0..40)
        .prop_map(|chars| chars.into_iter().collect())
}

// Property: text without Arabic comes back untouched
proptest! {
    #[test]
    fn prop_non_arabic_unchanged(s in "[ -~]{0,64}") {
        let shaped = reshape(&s);
        let reversed = reverse(&s);
        let visual = process(&s);
        prop_assert_eq!(shaped.as_ref(), s.as_str());
        prop_assert_eq!(reversed.as_ref(), s.as_str());
        prop_assert_eq!(visual.as_ref(), s.as_str());
    }
}

// Property: arbitrary non-Arabic Unicode is left alone as well
proptest! {
    #[test]
    fn prop_any_non_arabic_unchanged(s in "\\PC*") {
        prop_assume!(!has_arabic(&s));
        let visual = process(&s);
        prop_assert_eq!(visual.as_ref(), s.as_str());
    }
}

// Property: without a Lam there is no ligature, so length is preserved
proptest! {
    #[test]
    fn prop_length_preserved_without_lam(s in arabic_without_lam()) {
        let shaped = reshape(&s);
        prop_assert_eq!(shaped.chars().count(), s.chars().count());
    }
}

// Property: shaping never leaves a base letter behind (Tatweel excepted)
proptest! {
    #[test]
    fn prop_no_base_letters_survive(s in arabic_with_lam()) {
        let shaped = reshape(&s);
        for ch in shaped.chars() {
            prop_assert!(
                !is_arabic_joining_letter(ch) || ch == tables::TATWEEL,
                "base letter {:?} survived shaping of {:?}", ch, s
            );
        }
    }
}

// Property: shaping can only shrink the text
proptest! {
    #[test]
    fn prop_shaping_never_grows(s in arabic_with_lam()) {
        let shaped = reshape(&s);
        prop_assert!(shaped.chars().count() <= s.chars().count());
    }
}

// Property: every diacritic survives when no Lam is present
proptest! {
    #[test]
    fn prop_diacritics_preserved(s in arabic_without_lam()) {
        let before: Vec<char> = s.chars().filter(|&ch| is_diacritic(ch)).collect();
        let shaped = reshape(&s);
        let after: Vec<char> = shaped.chars().filter(|&ch| is_diacritic(ch)).collect();
        prop_assert_eq!(before, after);
    }
}

// Property: word reversal undoes itself
proptest! {
    #[test]
    fn prop_reverse_is_involution(s in arabic_with_lam()) {
        let once = reverse(&s).into_owned();
        let twice = reverse(&once);
        prop_assert_eq!(twice.as_ref(), s.as_str());
    }
}

// Property: reordering keeps the multiset of words
proptest! {
    #[test]
    fn prop_reverse_keeps_words(s in arabic_with_lam()) {
        let mut before: Vec<&str> = s.split(' ').collect();
        let reversed = reverse(&s);
        let mut after: Vec<&str> = reversed.split(' ').collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }
}

// Property: the engine is total over arbitrary input
proptest! {
    #[test]
    fn prop_never_panics(s in "\\PC*") {
        let _ = process(&s);
        let _ = shaper::analyze(&s);
    }
}

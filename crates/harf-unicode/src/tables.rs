// this_file: crates/harf-unicode/src/tables.rs

//! Static shaping data
//!
//! Each row maps a base letter to its presentation forms in the order
//! `[isolated, final, initial, medial]`. Letters with only two visual forms
//! repeat isolated into initial and final into medial so every row has the
//! same shape. Rows are sorted by codepoint for binary search.

use harf_core::types::Form;

pub const TATWEEL: char = '\u{0640}';
pub const LAM: char = '\u{0644}';

pub const ALEF: char = '\u{0627}';
pub const ALEF_MADDA: char = '\u{0622}';
pub const ALEF_HAMZA_ABOVE: char = '\u{0623}';
pub const ALEF_HAMZA_BELOW: char = '\u{0625}';

static FORMS: [(char, [char; 4]); 37] = [
    ('\u{0621}', ['\u{FE80}', '\u{FE80}', '\u{FE80}', '\u{FE80}']), // Hamza
    ('\u{0622}', ['\u{FE81}', '\u{FE82}', '\u{FE81}', '\u{FE82}']), // Alef with Madda
    ('\u{0623}', ['\u{FE83}', '\u{FE84}', '\u{FE83}', '\u{FE84}']), // Alef with Hamza above
    ('\u{0624}', ['\u{FE85}', '\u{FE86}', '\u{FE85}', '\u{FE86}']), // Waw with Hamza
    ('\u{0625}', ['\u{FE87}', '\u{FE88}', '\u{FE87}', '\u{FE88}']), // Alef with Hamza below
    ('\u{0626}', ['\u{FE89}', '\u{FE8A}', '\u{FE8B}', '\u{FE8C}']), // Yeh with Hamza
    ('\u{0627}', ['\u{FE8D}', '\u{FE8E}', '\u{FE8D}', '\u{FE8E}']), // Alef
    ('\u{0628}', ['\u{FE8F}', '\u{FE90}', '\u{FE91}', '\u{FE92}']), // Beh
    ('\u{0629}', ['\u{FE93}', '\u{FE94}', '\u{FE93}', '\u{FE94}']), // Teh Marbuta
    ('\u{062A}', ['\u{FE95}', '\u{FE96}', '\u{FE97}', '\u{FE98}']), // Teh
    ('\u{062B}', ['\u{FE99}', '\u{FE9A}', '\u{FE9B}', '\u{FE9C}']), // Theh
    ('\u{062C}', ['\u{FE9D}', '\u{FE9E}', '\u{FE9F}', '\u{FEA0}']), // Jeem
    ('\u{062D}', ['\u{FEA1}', '\u{FEA2}', '\u{FEA3}', '\u{FEA4}']), // Hah
    ('\u{062E}', ['\u{FEA5}', '\u{FEA6}', '\u{FEA7}', '\u{FEA8}']), // Khah
    ('\u{062F}', ['\u{FEA9}', '\u{FEAA}', '\u{FEA9}', '\u{FEAA}']), // Dal
    ('\u{0630}', ['\u{FEAB}', '\u{FEAC}', '\u{FEAB}', '\u{FEAC}']), // Thal
    ('\u{0631}', ['\u{FEAD}', '\u{FEAE}', '\u{FEAD}', '\u{FEAE}']), // Reh
    ('\u{0632}', ['\u{FEAF}', '\u{FEB0}', '\u{FEAF}', '\u{FEB0}']), // Zain
    ('\u{0633}', ['\u{FEB1}', '\u{FEB2}', '\u{FEB3}', '\u{FEB4}']), // Seen
    ('\u{0634}', ['\u{FEB5}', '\u{FEB6}', '\u{FEB7}', '\u{FEB8}']), // Sheen
    ('\u{0635}', ['\u{FEB9}', '\u{FEBA}', '\u{FEBB}', '\u{FEBC}']), // Sad
    ('\u{0636}', ['\u{FEBD}', '\u{FEBE}', '\u{FEBF}', '\u{FEC0}']), // Dad
    ('\u{0637}', ['\u{FEC1}', '\u{FEC2}', '\u{FEC3}', '\u{FEC4}']), // Tah
    ('\u{0638}', ['\u{FEC5}', '\u{FEC6}', '\u{FEC7}', '\u{FEC8}']), // Zah
    ('\u{0639}', ['\u{FEC9}', '\u{FECA}', '\u{FECB}', '\u{FECC}']), // Ain
    ('\u{063A}', ['\u{FECD}', '\u{FECE}', '\u{FECF}', '\u{FED0}']), // Ghain
    ('\u{0640}', ['\u{0640}', '\u{0640}', '\u{0640}', '\u{0640}']), // Tatweel
    ('\u{0641}', ['\u{FED1}', '\u{FED2}', '\u{FED3}', '\u{FED4}']), // Feh
    ('\u{0642}', ['\u{FED5}', '\u{FED6}', '\u{FED7}', '\u{FED8}']), // Qaf
    ('\u{0643}', ['\u{FED9}', '\u{FEDA}', '\u{FEDB}', '\u{FEDC}']), // Kaf
    ('\u{0644}', ['\u{FEDD}', '\u{FEDE}', '\u{FEDF}', '\u{FEE0}']), // Lam
    ('\u{0645}', ['\u{FEE1}', '\u{FEE2}', '\u{FEE3}', '\u{FEE4}']), // Meem
    ('\u{0646}', ['\u{FEE5}', '\u{FEE6}', '\u{FEE7}', '\u{FEE8}']), // Noon
    ('\u{0647}', ['\u{FEE9}', '\u{FEEA}', '\u{FEEB}', '\u{FEEC}']), // Heh
    ('\u{0648}', ['\u{FEED}', '\u{FEEE}', '\u{FEED}', '\u{FEEE}']), // Waw
    ('\u{0649}', ['\u{FEEF}', '\u{FEF0}', '\u{FEEF}', '\u{FEF0}']), // Alef Maksura
    ('\u{064A}', ['\u{FEF1}', '\u{FEF2}', '\u{FEF3}', '\u{FEF4}']), // Yeh
];

/// Letters that never connect to the letter after them
static NON_JOINING_LEFT: [char; 13] = [
    '\u{0621}', // Hamza
    '\u{0622}', // Alef with Madda
    '\u{0623}', // Alef with Hamza above
    '\u{0624}', // Waw with Hamza
    '\u{0625}', // Alef with Hamza below
    '\u{0627}', // Alef
    '\u{0629}', // Teh Marbuta
    '\u{062F}', // Dal
    '\u{0630}', // Thal
    '\u{0631}', // Reh
    '\u{0632}', // Zain
    '\u{0648}', // Waw
    '\u{0649}', // Alef Maksura
];

/// Number of rows in the form table
pub const FORM_TABLE_LEN: usize = FORMS.len();

/// Number of letters that refuse a connection to their successor
pub const NON_JOINING_LEFT_LEN: usize = NON_JOINING_LEFT.len();

/// The four presentation forms of a shapeable letter
pub fn forms(ch: char) -> Option<&'static [char; 4]> {
    FORMS
        .binary_search_by_key(&ch, |&(base, _)| base)
        .ok()
        .map(|idx| &FORMS[idx].1)
}

/// The glyph for `ch` in the given form
pub fn presentation_form(ch: char, form: Form) -> Option<char> {
    forms(ch).map(|row| row[form.index()])
}

pub fn is_non_joining_left(ch: char) -> bool {
    NON_JOINING_LEFT.contains(&ch)
}

/// Lam + `alef` as one glyph
///
/// `joined` selects the final-context glyph used when the Lam itself is
/// connected to a preceding letter.
pub fn lam_alef_ligature(alef: char, joined: bool) -> Option<char> {
    let (isolated, final_form) = match alef {
        ALEF_MADDA => ('\u{FEF5}', '\u{FEF6}'),
        ALEF_HAMZA_ABOVE => ('\u{FEF7}', '\u{FEF8}'),
        ALEF_HAMZA_BELOW => ('\u{FEF9}', '\u{FEFA}'),
        ALEF => ('\u{FEFB}', '\u{FEFC}'),
        _ => return None,
    };
    Some(if joined { final_form } else { isolated })
}

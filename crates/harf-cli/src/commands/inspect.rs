//! Inspect command implementation
//!
//! Prints a per-glyph breakdown of how a label was classified and shaped,
//! followed by the reorder decision.

use super::input::get_input_text;
use crate::cli::InspectArgs;
use harf::error::{HarfError, Result};
use harf::unicode::{normalize, reorder, shaper, ShapedGlyph};
use serde::Serialize;
use std::borrow::Cow;

/// JSON form of the inspection
#[derive(Debug, Serialize)]
struct InspectReport {
    input: String,
    output: String,
    direction: &'static str,
    arabic_words: usize,
    total_words: usize,
    glyphs: Vec<GlyphRow>,
}

#[derive(Debug, Serialize)]
struct GlyphRow {
    index: usize,
    source: String,
    class: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    form: Option<&'static str>,
    glyph: String,
    ligature: bool,
}

impl From<&ShapedGlyph> for GlyphRow {
    fn from(glyph: &ShapedGlyph) -> Self {
        Self {
            index: glyph.source_index,
            source: codepoint(glyph.source),
            class: glyph.class.name(),
            form: glyph.form.map(|form| form.name()),
            glyph: codepoint(glyph.glyph),
            ligature: glyph.ligature,
        }
    }
}

pub fn run(args: &InspectArgs) -> Result<()> {
    let text = get_input_text(&args.input)?;
    let text = text.trim_end_matches(&['\n', '\r'][..]);
    let text: Cow<'_, str> = if args.normalize {
        normalize::normalize(text)
    } else {
        Cow::Borrowed(text)
    };

    let report = build_report(&text);

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| HarfError::Other(format!("Failed to encode report: {}", e)))?;
        println!("{}", json);
    } else {
        print_table(&report);
    }
    Ok(())
}

fn build_report(text: &str) -> InspectReport {
    let glyphs = shaper::analyze(text);
    let decision = reorder::analyze(text);

    InspectReport {
        input: text.to_string(),
        output: harf::process(text).into_owned(),
        direction: if decision.direction().is_rtl() { "rtl" } else { "ltr" },
        arabic_words: decision.arabic_words,
        total_words: decision.total_words,
        glyphs: glyphs.iter().map(GlyphRow::from).collect(),
    }
}

fn print_table(report: &InspectReport) {
    println!("{:>5}  {:<8}  {:<9}  {:<8}  {:<8}", "index", "source", "class", "form", "glyph");
    for row in &report.glyphs {
        println!(
            "{:>5}  {:<8}  {:<9}  {:<8}  {:<8}{}",
            row.index,
            row.source,
            row.class,
            row.form.unwrap_or("-"),
            row.glyph,
            if row.ligature { "  (lam-alef)" } else { "" }
        );
    }
    println!();
    println!(
        "Words: {} Arabic of {} → {}",
        report.arabic_words, report.total_words, report.direction
    );
    println!("Output: {}", report.output);
}

fn codepoint(ch: char) -> String {
    format!("U+{:04X}", ch as u32)
}

//! The single-label commands: shape, reverse, process
//!
//! Multi-line input is handled line by line so that word reordering never
//! moves a word across a line break.

use super::input::get_input_text;
use crate::cli::{ProcessArgs, TextArgs};
use harf::error::Result;
use harf::{pipeline_for, Pipeline, ProcessOptions};
use std::borrow::Cow;
use std::io::{self, Write};

pub fn shape(args: &TextArgs) -> Result<()> {
    let text = get_input_text(args)?;
    emit_lines(&text, harf::reshape)
}

pub fn reverse(args: &TextArgs) -> Result<()> {
    let text = get_input_text(args)?;
    emit_lines(&text, harf::reverse)
}

pub fn process(args: &ProcessArgs) -> Result<()> {
    let options = ProcessOptions {
        normalize: args.normalize,
        shape: !args.no_shape,
        reorder: !args.no_reorder,
    };
    let pipeline: Pipeline = pipeline_for(&options)?;
    log::debug!("Running stages: {}", pipeline.stage_names().join(" → "));

    let text = get_input_text(&args.input)?;
    emit_lines(&text, |line| pipeline.run(line))
}

/// Apply `transform` to each line and write the results to stdout
fn emit_lines<'t, F>(text: &'t str, transform: F) -> Result<()>
where
    F: Fn(&'t str) -> Cow<'t, str>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in trim_final_newline(text).split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        writeln!(out, "{}", transform(line))?;
    }
    out.flush()?;
    Ok(())
}

/// Stdin and files usually end in a newline that is not a label of its own
fn trim_final_newline(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}

//! CLI argument definitions using Clap v4

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// harf - Prepare Arabic labels for left-to-right surfaces
#[derive(Parser, Debug)]
#[command(name = "harf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Silent mode (no status lines on stderr)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace Arabic letters with their contextual presentation forms
    #[command(alias = "s")]
    Shape(TextArgs),

    /// Reverse word order of predominantly Arabic lines
    Reverse(TextArgs),

    /// Shape, then reorder words for a left-to-right surface
    #[command(alias = "p")]
    Process(ProcessArgs),

    /// Show how each character was classified and shaped
    Inspect(InspectArgs),

    /// Process multiple labels from a JSONL file
    Batch(BatchArgs),

    /// Display information about tables and stages
    #[command(alias = "i")]
    Info,
}

/// Where the input text comes from
#[derive(Args, Debug, Default)]
pub struct TextArgs {
    /// Input text (reads from stdin if omitted)
    pub text: Option<String>,

    /// Input text (alternative to positional argument)
    #[arg(short = 't', long = "text", conflicts_with = "text_file")]
    pub text_arg: Option<String>,

    /// Read input text from file
    #[arg(short = 'T', long = "text-file", conflicts_with = "text_arg")]
    pub text_file: Option<PathBuf>,
}

/// Arguments for the process command
#[derive(Args, Debug)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub input: TextArgs,

    /// Compose decomposed sequences (NFC) before shaping
    #[arg(long)]
    pub normalize: bool,

    /// Skip contextual shaping
    #[arg(long = "no-shape")]
    pub no_shape: bool,

    /// Skip word reordering
    #[arg(long = "no-reorder")]
    pub no_reorder: bool,
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: TextArgs,

    /// Compose decomposed sequences (NFC) before inspecting
    #[arg(long)]
    pub normalize: bool,

    /// Emit a JSON report instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the batch command
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input JSONL file (one label per line, stdin if omitted)
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output JSONL file (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

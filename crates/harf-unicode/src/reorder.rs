//! Word-level visual reordering
//!
//! A left-to-right surface draws words in the order it receives them. For a
//! line that is mostly Arabic, reversing the space-separated words puts them
//! in reading order; glyph order inside each word is left alone. This is a
//! majority heuristic, not the Unicode Bidirectional Algorithm: mixed
//! direction inside a single word is not handled, and only U+0020 separates
//! words.

use crate::classify::is_arabic_range_char;
use harf_core::{types::Direction, TextTransform};
use std::borrow::Cow;

const SEPARATOR: char = ' ';

/// The majority vote behind a reorder decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReorderDecision {
    /// Words with at least one Arabic-range character
    pub arabic_words: usize,
    /// All space-separated tokens, empty ones included
    pub total_words: usize,
}

impl ReorderDecision {
    /// Right-to-left only on a strict Arabic majority
    pub fn direction(&self) -> Direction {
        if self.arabic_words * 2 > self.total_words {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        }
    }
}

/// Word reordering stage for the label pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct WordReorderer;

impl WordReorderer {
    pub fn new() -> Self {
        Self
    }
}

impl TextTransform for WordReorderer {
    fn name(&self) -> &'static str {
        "reorder"
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        reverse(text)
    }
}

/// Count Arabic words in a line
pub fn analyze(text: &str) -> ReorderDecision {
    if text.is_empty() {
        return ReorderDecision::default();
    }

    text.split(SEPARATOR)
        .fold(ReorderDecision::default(), |mut decision, word| {
            decision.total_words += 1;
            if word.chars().any(is_arabic_range_char) {
                decision.arabic_words += 1;
            }
            decision
        })
}

/// Reverse word order when the line is predominantly Arabic
pub fn reverse(text: &str) -> Cow<'_, str> {
    let decision = analyze(text);
    log::debug!(
        "Reorder: {}/{} Arabic words -> {:?}",
        decision.arabic_words,
        decision.total_words,
        decision.direction()
    );

    if !decision.direction().is_rtl() {
        return Cow::Borrowed(text);
    }

    let mut words: Vec<&str> = text.split(SEPARATOR).collect();
    words.reverse();
    Cow::Owned(words.join(" "))
}

//! The contracts that bind stages and surfaces together
//!
//! - [`TextTransform`] - one string-to-string pass over a label
//! - [`Surface`] - the renderer that finally places prepared runs

use crate::error::Result;
use std::borrow::Cow;

/// One pass of the label pipeline
///
/// Stages are pure: the same input always yields the same output and no
/// state survives between calls. Return `Cow::Borrowed` when the text
/// comes through unchanged so the pipeline can skip the allocation.
///
/// ```ignore
/// struct Identity;
///
/// impl TextTransform for Identity {
///     fn name(&self) -> &'static str {
///         "identity"
///     }
///
///     fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
///         Cow::Borrowed(text)
///     }
/// }
/// ```
pub trait TextTransform: Send + Sync {
    /// Used for logging and `harf info`
    fn name(&self) -> &'static str;

    /// Transform the text, borrowing when nothing changes
    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// Where prepared labels end up
///
/// A surface places opaque glyph runs left to right at the given
/// coordinates. It knows nothing about Arabic; by the time a run
/// arrives it is already shaped and in visual order.
pub trait Surface {
    /// Identify the surface in logs
    fn name(&self) -> &'static str;

    /// Place one prepared run with its origin at `(x, y)`
    fn draw_text(&mut self, run: &str, x: f32, y: f32) -> Result<()>;
}

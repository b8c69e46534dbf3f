//! Hand prepared labels to a rendering surface
//!
//! Poster layers (title, price badge, offer banner, contact bar, call to
//! action) all go through the same step right before the draw call: run the
//! label pipeline, then give the surface the visual-order string.

use crate::pipeline_for;
use harf_core::{
    error::{Result, SurfaceError},
    traits::Surface,
    Pipeline, ProcessOptions,
};
use std::borrow::Cow;

/// Prepares labels and draws them on a [`Surface`]
pub struct LabelWriter {
    pipeline: Pipeline,
}

impl LabelWriter {
    /// Writer with the default shape + reorder stages
    pub fn new() -> Result<Self> {
        Self::with_options(&ProcessOptions::default())
    }

    pub fn with_options(options: &ProcessOptions) -> Result<Self> {
        Ok(Self::from_pipeline(pipeline_for(options)?))
    }

    pub fn from_pipeline(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// The string the surface will receive for `text`
    pub fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pipeline.run(text)
    }

    /// Prepare `text` and place it at `(x, y)`
    ///
    /// NaN or infinite coordinates never reach the surface.
    pub fn draw(&self, surface: &mut dyn Surface, text: &str, x: f32, y: f32) -> Result<()> {
        if !x.is_finite() || !y.is_finite() {
            return Err(SurfaceError::OutOfBounds { x, y }.into());
        }

        let run = self.prepare(text);
        log::debug!(
            "Drawing {} chars on {} at ({}, {})",
            run.chars().count(),
            surface.name(),
            x,
            y
        );
        surface.draw_text(&run, x, y)
    }
}

//! harf - Arabic labels for surfaces that only draw left to right
//!
//! Canvas-style renderers place glyphs one after another from the left and
//! know nothing about Arabic joining. harf prepares a label so that the
//! surface can draw it verbatim: letters take their contextual presentation
//! forms, Lam-Alef pairs become ligatures, and predominantly Arabic lines get
//! their words reversed into visual order.
//!
//! # Example
//!
//! ```
//! use harf::{pipeline_for, ProcessOptions};
//!
//! assert_eq!(harf::process("لا"), "\u{FEFB}");
//!
//! let pipeline = pipeline_for(&ProcessOptions::default())?;
//! assert_eq!(pipeline.run("عرض خاص"), harf::process("عرض خاص"));
//! # Ok::<(), harf::error::HarfError>(())
//! ```
//!
//! For drawing, wrap a pipeline in a [`LabelWriter`] and hand it any
//! [`traits::Surface`].

pub mod label;

pub use harf_core::{
    config, error, label_cache, traits, types, Pipeline, PipelineBuilder, ProcessOptions,
};
pub use harf_unicode as unicode;
pub use harf_unicode::{process, reshape, reverse};
pub use label::LabelWriter;

use harf_core::error::{HarfError, Result};
use harf_unicode::{ArabicShaper, NfcNormalizer, WordReorderer};
use std::sync::Arc;

/// Assemble the stages selected by `options`
///
/// Stages always run normalize → shape → reorder. Disabling every stage
/// is a configuration error.
pub fn pipeline_for(options: &ProcessOptions) -> Result<Pipeline> {
    if !options.any_enabled() {
        return Err(HarfError::ConfigError(
            "At least one of normalize, shape, or reorder must be enabled".into(),
        ));
    }

    let mut builder = Pipeline::builder();
    if options.normalize {
        builder = builder.stage(Arc::new(NfcNormalizer::new()));
    }
    if options.shape {
        builder = builder.stage(Arc::new(ArabicShaper::new()));
    }
    if options.reorder {
        builder = builder.stage(Arc::new(WordReorderer::new()));
    }
    builder.build()
}

/// Common imports for typical usage
pub mod prelude {
    pub use harf_core::{
        error::{HarfError, Result, SurfaceError},
        traits::{Surface, TextTransform},
        types::{CharClass, Direction, Form},
        Pipeline, ProcessOptions,
    };
    pub use crate::{pipeline_for, LabelWriter};
}

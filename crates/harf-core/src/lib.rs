//! harf Core: the shared vocabulary of the Arabic label pipeline
//!
//! Arabic text arrives in logical order as base letters. A rendering surface
//! that only places glyphs left to right needs something else: contextual
//! presentation forms, Lam-Alef ligatures, and words in visual order. This
//! crate holds the pieces every stage agrees on.
//!
//! ## The Pipeline
//!
//! A label travels through up to three stages, always in this order:
//!
//! 1. **Normalize** - optional NFC pass so decomposed input reaches the tables
//! 2. **Shape** - letters become isolated, initial, medial, or final glyphs
//! 3. **Reorder** - predominantly Arabic lines get their word order reversed
//!
//! ```rust
//! use std::borrow::Cow;
//! use std::sync::Arc;
//! use harf_core::{Pipeline, TextTransform};
//!
//! struct Upper;
//!
//! impl TextTransform for Upper {
//!     fn name(&self) -> &'static str {
//!         "upper"
//!     }
//!
//!     fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
//!         Cow::Owned(text.to_uppercase())
//!     }
//! }
//!
//! let pipeline = Pipeline::builder().stage(Arc::new(Upper)).build()?;
//! assert_eq!(pipeline.run("poster"), "POSTER");
//! # Ok::<(), harf_core::HarfError>(())
//! ```
//!
//! The concrete stages live in `harf-unicode`; the [`traits::Surface`]
//! trait describes the renderer that finally receives the prepared text.

pub mod config;
pub mod error;
pub mod label_cache;
pub mod pipeline;
pub mod traits;

pub use error::{HarfError, Result, SurfaceError};
pub use pipeline::{Pipeline, PipelineBuilder};
pub use traits::{Surface, TextTransform};

/// The data structures shared between stages
pub mod types {
    /// What the classifier thinks of a single codepoint
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum CharClass {
        /// A letter from the shaping table (including Tatweel)
        ArabicJoining,
        /// A combining mark; invisible to joining decisions
        Diacritic,
        /// Anything else passes through untouched
        Other,
    }

    impl CharClass {
        pub fn name(self) -> &'static str {
            match self {
                CharClass::ArabicJoining => "joining",
                CharClass::Diacritic => "diacritic",
                CharClass::Other => "other",
            }
        }
    }

    /// Contextual presentation form of an Arabic letter
    ///
    /// The discriminants match the column order of the form table:
    /// `[isolated, final, initial, medial]`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Form {
        Isolated = 0,
        Final = 1,
        Initial = 2,
        Medial = 3,
    }

    impl Form {
        /// Pick the form from the two independent joining decisions
        pub fn from_joins(joined_from_right: bool, joins_to_left: bool) -> Self {
            match (joined_from_right, joins_to_left) {
                (true, true) => Form::Medial,
                (true, false) => Form::Final,
                (false, true) => Form::Initial,
                (false, false) => Form::Isolated,
            }
        }

        /// Column in a `[isolated, final, initial, medial]` row
        pub fn index(self) -> usize {
            self as usize
        }

        pub fn name(self) -> &'static str {
            match self {
                Form::Isolated => "isolated",
                Form::Final => "final",
                Form::Initial => "initial",
                Form::Medial => "medial",
            }
        }
    }

    /// Which way a line reads once the reorderer has looked at it
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum Direction {
        #[default]
        LeftToRight,
        RightToLeft,
    }

    impl Direction {
        pub fn is_rtl(self) -> bool {
            matches!(self, Direction::RightToLeft)
        }
    }
}

/// Which stages a label goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessOptions {
    /// Compose decomposed sequences (NFC) before shaping
    pub normalize: bool,
    /// Replace letters with contextual presentation forms
    pub shape: bool,
    /// Reverse word order for predominantly Arabic text
    pub reorder: bool,
}

impl ProcessOptions {
    /// True when at least one stage is switched on
    pub fn any_enabled(&self) -> bool {
        self.normalize || self.shape || self.reorder
    }
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            normalize: false,
            shape: true,
            reorder: true,
        }
    }
}

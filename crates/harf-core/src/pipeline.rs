//! The engine that threads a label through its stages

// this_file: crates/harf-core/src/pipeline.rs

use crate::{
    config,
    error::{HarfError, Result},
    label_cache::{CacheStats, LabelCache, SharedLabelCache, DEFAULT_CAPACITY},
    traits::TextTransform,
};
use std::borrow::Cow;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Pipeline for label preparation: Normalize → Shape → Reorder
///
/// Stages run in the order they were added. Text stays borrowed for as
/// long as every stage leaves it unchanged, so Latin or numeric labels
/// never allocate.
///
/// ```ignore
/// use harf_core::Pipeline;
///
/// let pipeline = Pipeline::builder()
///     .stage(Arc::new(ArabicShaper::new()))
///     .stage(Arc::new(WordReorderer::new()))
///     .build()?;
///
/// let visual = pipeline.run("مرحبا بالعالم");
/// ```
pub struct Pipeline {
    stages: Vec<Arc<dyn TextTransform>>,
    cache: Option<SharedLabelCache>,
}

impl Pipeline {
    /// Start building a new pipeline
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Send text through every stage
    pub fn run<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.is_empty() {
            return Cow::Borrowed(text);
        }

        if let Some(cache) = &self.cache {
            if let Some(prepared) = cache.get(text) {
                log::trace!("Label cache hit ({} bytes)", text.len());
                return Cow::Owned(prepared);
            }
        }

        let prepared = self.run_stages(text);

        if let Some(cache) = &self.cache {
            cache.insert(text.to_string(), prepared.clone().into_owned());
        }

        prepared
    }

    fn run_stages<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(text);
        for stage in &self.stages {
            current = match current {
                Cow::Borrowed(borrowed) => stage.apply(borrowed),
                Cow::Owned(owned) => {
                    let changed = match stage.apply(&owned) {
                        Cow::Borrowed(_) => None,
                        Cow::Owned(next) => Some(next),
                    };
                    Cow::Owned(changed.unwrap_or(owned))
                },
            };
            log::trace!("Stage {} done", stage.name());
        }
        current
    }

    /// Names of the configured stages, in execution order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Label cache statistics, if caching is on
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(|cache| cache.stats())
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }
}

/// Build pipelines piece by piece
///
/// ```ignore
/// let pipeline = Pipeline::builder()
///     .stage(Arc::new(ArabicShaper::new()))
///     .enable_label_cache(true)
///     .cache_capacity(64)
///     .build()?;
/// ```
pub struct PipelineBuilder {
    stages: Vec<Arc<dyn TextTransform>>,
    cache_enabled: Option<bool>,
    cache_capacity: usize,
    cache: Option<SharedLabelCache>,
}

impl PipelineBuilder {
    /// Start with a clean slate
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            cache_enabled: None,
            cache_capacity: DEFAULT_CAPACITY,
            cache: None,
        }
    }

    /// Append a stage; stages run in insertion order
    pub fn stage(mut self, stage: Arc<dyn TextTransform>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Enable or disable the label cache
    ///
    /// Without this call the global setting from [`config`] decides.
    pub fn enable_label_cache(mut self, enabled: bool) -> Self {
        self.cache_enabled = Some(enabled);
        self
    }

    /// How many labels the cache keeps (default: 256)
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Supply a cache shared with other pipelines built from the same stages
    pub fn with_label_cache(mut self, cache: SharedLabelCache) -> Self {
        self.cache = Some(cache);
        self.cache_enabled = Some(true);
        self
    }

    /// Create the pipeline, ready to run
    pub fn build(self) -> Result<Pipeline> {
        if self.stages.is_empty() {
            return Err(HarfError::ConfigError("No stages configured".into()));
        }

        let enabled = self
            .cache_enabled
            .unwrap_or_else(config::is_caching_enabled);

        let cache = if enabled {
            match self.cache {
                Some(shared) => Some(shared),
                None => {
                    let capacity = NonZeroUsize::new(self.cache_capacity).ok_or_else(|| {
                        HarfError::ConfigError("Label cache capacity must be non-zero".into())
                    })?;
                    Some(Arc::new(LabelCache::new(capacity)))
                },
            }
        } else {
            None
        };

        log::debug!(
            "Built pipeline with {} stage(s), label cache {}",
            self.stages.len(),
            if cache.is_some() { "on" } else { "off" }
        );

        Ok(Pipeline {
            stages: self.stages,
            cache,
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

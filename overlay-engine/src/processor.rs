//! Page processor and builder

use crate::{
    config::EngineConfig,
    error::Result,
    input::{Input, Page},
    strategy::{resolve_chunk_strategy_with_stats, AlignFlag},
    validation::{validate_chunks, ChunkWarning},
};
use overlay_core::{AlignmentStats, Chunk};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Entry point for resolving the highlight regions of a page
#[derive(Debug, Clone, Default)]
pub struct PageProcessor {
    config: EngineConfig,
}

/// Resolved page with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    /// Page with its chunks resolved for rendering
    pub page: Page,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Processing metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingMetadata {
    /// Flag the page was processed with
    pub align: AlignFlag,
    /// Alignment counters; only input/output/passthrough are set when off
    pub stats: AlignmentStats,
    /// Validation findings (empty when validation is disabled)
    pub warnings: Vec<ChunkWarning>,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
}

impl PageProcessor {
    /// Create a processor with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Create a builder
    pub fn builder() -> PageProcessorBuilder {
        PageProcessorBuilder::new()
    }

    /// Current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Decode and resolve a page
    pub fn process(&self, input: Input) -> Result<Output> {
        let page = input.into_page()?;
        let Page {
            document_id,
            page_number,
            chunks,
        } = page;

        let (chunks, metadata) = self.resolve(&chunks);

        Ok(Output {
            page: Page {
                document_id,
                page_number,
                chunks,
            },
            metadata,
        })
    }

    /// Resolve already decoded chunks
    pub fn process_chunks(&self, chunks: &[Chunk]) -> Output {
        let (chunks, metadata) = self.resolve(chunks);
        Output {
            page: Page::from_chunks(chunks),
            metadata,
        }
    }

    fn resolve(&self, chunks: &[Chunk]) -> (Vec<Chunk>, ProcessingMetadata) {
        let start = Instant::now();

        let warnings = if self.config.validate {
            let warnings = validate_chunks(chunks);
            for warning in &warnings {
                log::warn!("{warning}");
            }
            warnings
        } else {
            Vec::new()
        };

        let (resolved, stats) = resolve_chunk_strategy_with_stats(self.config.align, chunks);

        log::debug!(
            "resolved {} of {} chunks (align {}, {} hidden, {} merged, {} trims, {} degenerate)",
            stats.output,
            stats.input,
            self.config.align,
            stats.hidden,
            stats.merged,
            stats.trims,
            stats.degenerate
        );

        let metadata = ProcessingMetadata {
            align: self.config.align,
            stats,
            warnings,
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        (resolved.into_owned(), metadata)
    }
}

/// Builder for PageProcessor
#[derive(Debug, Clone, Default)]
pub struct PageProcessorBuilder {
    config: EngineConfig,
}

impl PageProcessorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the align flag
    pub fn align(mut self, flag: AlignFlag) -> Self {
        self.config.align = flag;
        self
    }

    /// Enable or disable validation
    pub fn validate(mut self, validate: bool) -> Self {
        self.config.validate = validate;
        self
    }

    /// Use raw configuration preset
    pub fn raw(mut self) -> Self {
        self.config = EngineConfig::raw();
        self
    }

    /// Use strict configuration preset
    pub fn strict(mut self) -> Self {
        self.config = EngineConfig::strict();
        self
    }

    /// Build the processor
    pub fn build(self) -> PageProcessor {
        PageProcessor::with_config(self.config)
    }
}

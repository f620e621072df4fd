//! Page-level orchestration for highlight overlay alignment
//!
//! This crate sits between a page-view request and the alignment core:
//! it decodes page chunk JSON, applies the request's align flag, checks
//! chunk geometry, and reports what alignment did.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod input;
pub mod processor;
pub mod strategy;
pub mod validation;

// Re-export key types
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use input::{Input, Page};
pub use processor::{Output, PageProcessor, PageProcessorBuilder, ProcessingMetadata};
pub use strategy::{resolve_chunk_strategy, resolve_chunk_strategy_with_stats, AlignFlag};
pub use validation::{validate_chunks, ChunkWarning, WarningKind};

// Re-export from core for convenience
pub use overlay_core::{align, AlignmentStats, BoundingBox, Chunk};

//! Chunk geometry checks
//!
//! Validation only reports; it never changes what alignment does with a
//! chunk. Non-numeric coordinates are still carried as `NaN` and switch off
//! the geometric rules for their box.

use overlay_core::Chunk;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of problem found on a chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WarningKind {
    /// Coordinates that are `NaN` or infinite
    NonFiniteCoordinate {
        /// Offending field names
        fields: Vec<String>,
    },
    /// Chunk has an empty identifier
    MissingId,
    /// Box has zero or negative width
    EmptyWidth,
    /// Box has zero or negative height; alignment will drop it
    EmptyHeight,
}

/// A problem found on one chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkWarning {
    /// Position of the chunk in the page input
    pub index: usize,
    /// Chunk identifier
    pub chunk_id: String,
    /// What is wrong
    #[serde(flatten)]
    pub kind: WarningKind,
}

impl fmt::Display for ChunkWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chunk #{} ({}): ", self.index, self.chunk_id)?;
        match &self.kind {
            WarningKind::NonFiniteCoordinate { fields } => {
                write!(f, "non-finite coordinates: {}", fields.join(", "))
            }
            WarningKind::MissingId => write!(f, "missing id"),
            WarningKind::EmptyWidth => write!(f, "non-positive width"),
            WarningKind::EmptyHeight => write!(f, "non-positive height"),
        }
    }
}

/// Check every chunk of a page
pub fn validate_chunks(chunks: &[Chunk]) -> Vec<ChunkWarning> {
    let mut warnings = Vec::new();

    for (index, chunk) in chunks.iter().enumerate() {
        let mut push = |kind| {
            warnings.push(ChunkWarning {
                index,
                chunk_id: chunk.id.clone(),
                kind,
            })
        };

        if chunk.id.is_empty() {
            push(WarningKind::MissingId);
        }

        let Some(bbox) = chunk.bounding_box else {
            continue;
        };

        if !bbox.is_finite() {
            let fields = [
                ("top", bbox.top),
                ("left", bbox.left),
                ("width", bbox.width),
                ("height", bbox.height),
            ]
            .into_iter()
            .filter(|(_, value)| !value.is_finite())
            .map(|(name, _)| name.to_string())
            .collect();
            push(WarningKind::NonFiniteCoordinate { fields });
            continue;
        }

        if bbox.width <= 0.0 {
            push(WarningKind::EmptyWidth);
        }
        if bbox.height <= 0.0 {
            push(WarningKind::EmptyHeight);
        }
    }

    warnings
}

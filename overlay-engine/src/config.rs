//! Configuration types for the engine

use crate::strategy::AlignFlag;

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Whether alignment runs
    pub align: AlignFlag,
    /// Whether chunks are checked for malformed geometry before processing
    pub validate: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            align: AlignFlag::On,
            validate: true,
        }
    }
}

impl EngineConfig {
    /// Raw boxes, no validation
    pub fn raw() -> Self {
        Self {
            align: AlignFlag::Off,
            validate: false,
        }
    }

    /// Aligned boxes with validation warnings
    pub fn strict() -> Self {
        Self::default()
    }
}

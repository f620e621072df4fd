//! Align-flag dispatch
//!
//! The flag comes from the page-view request. Only the exact value `"on"`
//! runs alignment; anything else hands the caller's chunks straight back.

use overlay_core::{align_with_stats, AlignmentStats, Chunk};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Whether alignment runs for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlignFlag {
    /// Resolve overlaps before rendering
    #[default]
    On,
    /// Render raw chunk boxes
    Off,
}

impl AlignFlag {
    /// Parse a flag value; anything other than `"on"` is `Off`
    pub fn parse(value: &str) -> Self {
        if value == "on" {
            AlignFlag::On
        } else {
            AlignFlag::Off
        }
    }

    /// Flag value as it appears in requests
    pub fn as_str(&self) -> &'static str {
        match self {
            AlignFlag::On => "on",
            AlignFlag::Off => "off",
        }
    }

    /// Whether alignment runs
    pub fn is_on(&self) -> bool {
        matches!(self, AlignFlag::On)
    }
}

impl FromStr for AlignFlag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for AlignFlag {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<AlignFlag> for String {
    fn from(flag: AlignFlag) -> Self {
        flag.as_str().to_string()
    }
}

impl fmt::Display for AlignFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick processed or raw chunks for rendering.
///
/// `Off` borrows the caller's slice back without cloning anything.
pub fn resolve_chunk_strategy(flag: AlignFlag, chunks: &[Chunk]) -> Cow<'_, [Chunk]> {
    resolve_chunk_strategy_with_stats(flag, chunks).0
}

/// [`resolve_chunk_strategy`], also reporting what alignment did.
///
/// When off, only the input, output and passthrough counters are set.
pub fn resolve_chunk_strategy_with_stats(
    flag: AlignFlag,
    chunks: &[Chunk],
) -> (Cow<'_, [Chunk]>, AlignmentStats) {
    match flag {
        AlignFlag::On => {
            let (aligned, stats) = align_with_stats(chunks);
            (Cow::Owned(aligned), stats)
        }
        AlignFlag::Off => (Cow::Borrowed(chunks), raw_stats(chunks)),
    }
}

fn raw_stats(chunks: &[Chunk]) -> AlignmentStats {
    AlignmentStats {
        input: chunks.len(),
        output: chunks.len(),
        passthrough: chunks.iter().filter(|c| c.bounding_box.is_none()).count(),
        ..AlignmentStats::default()
    }
}

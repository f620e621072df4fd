//! Highlight overlay alignment for OCR-indexed document pages
//!
//! Given the OCR chunks of a single page, each with an optional bounding
//! box, this crate resolves overlapping boxes into regions that can be drawn
//! as highlight rectangles over the page image without stacking.
//!
//! # Architecture
//!
//! - [`types`]: chunk and bounding box records, with lenient JSON decoding
//! - [`geometry`]: edge calculation and containment/overlap predicates
//! - [`align`]: the order-dependent alignment pass
//!
//! Alignment never fails. Missing boxes pass through untouched and
//! malformed coordinates decode to `NaN`, which disables the geometric rules
//! for that box.
//!
//! # Example
//!
//! ```rust
//! use overlay_core::{align, BoundingBox, Chunk};
//!
//! let chunks = vec![
//!     Chunk::new("outer", Some(BoundingBox::new(1.0, 1.0, 8.0, 8.0))),
//!     Chunk::new("inner", Some(BoundingBox::new(2.0, 2.0, 2.0, 2.0))),
//! ];
//!
//! let resolved = align(&chunks);
//! assert_eq!(resolved.len(), 1);
//! assert_eq!(resolved[0].id, "outer");
//! ```

#![warn(missing_docs)]

pub mod align;
pub mod geometry;
pub mod types;

pub use align::{align, align_with_stats, AlignmentStats};
pub use geometry::{
    compute_edges, has_horizontal_overlap, is_fully_inside, is_vertically_contained, Edges,
};
pub use types::{coerce_coordinate, BoundingBox, Chunk};

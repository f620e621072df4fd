//! Highlight alignment
//!
//! Folds an ordered chunk list into a set of highlight regions with no
//! pairwise geometric overlap. Each chunk is compared only against chunks
//! already accepted into the output, so the result depends on input order.
//!
//! Per chunk, against each earlier accepted box, in this order:
//! 1. fully inside the earlier box: drop the chunk, stop scanning;
//! 2. vertically inside the earlier box: widen the earlier box to the
//!    horizontal union, drop the chunk, stop scanning;
//! 3. horizontally overlapping and straddling the earlier box's bottom edge:
//!    move the chunk's top down to that edge and keep scanning.
//!
//! A chunk left with a non-positive height is dropped after the scan.
//! Chunks without a box are passed through untouched.
//!
//! A merge with a malformed box writes `NaN` into the earlier box's left and
//! width. Later comparisons read those merge-written fields as `0`, so a
//! subsequent merge can repair the box; decoded `NaN` stays `NaN`.
//!
//! The pass is O(n²) in the number of boxed chunks on the page.

use crate::geometry::{has_horizontal_overlap, is_fully_inside, is_vertically_contained, Edges};
use crate::types::{BoundingBox, Chunk};
use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;

/// Counters describing one alignment pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlignmentStats {
    /// Chunks received
    pub input: usize,
    /// Chunks emitted
    pub output: usize,
    /// Chunks without a bounding box, passed through
    pub passthrough: usize,
    /// Chunks dropped because an earlier box fully contains them
    pub hidden: usize,
    /// Chunks absorbed by widening an earlier box
    pub merged: usize,
    /// Bottom-edge trims applied (one chunk can be trimmed several times)
    pub trims: usize,
    /// Chunks dropped for non-positive height
    pub degenerate: usize,
}

/// Why a chunk stopped the scan and left the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Absorbed {
    Hidden,
    Merged,
}

/// Resolve overlapping chunk boxes into non-overlapping highlight regions
pub fn align(chunks: &[Chunk]) -> Vec<Chunk> {
    align_with_stats(chunks).0
}

/// [`align`], also reporting what the pass did
pub fn align_with_stats(chunks: &[Chunk]) -> (Vec<Chunk>, AlignmentStats) {
    let mut output: Vec<Chunk> = Vec::with_capacity(chunks.len());
    // parallel to `output`: horizontal fields were last written by a merge
    let mut widened: Vec<bool> = Vec::with_capacity(chunks.len());
    let mut stats = AlignmentStats {
        input: chunks.len(),
        ..AlignmentStats::default()
    };

    for chunk in chunks {
        let Some(mut bbox) = chunk.bounding_box else {
            stats.passthrough += 1;
            output.push(chunk.clone());
            widened.push(false);
            continue;
        };

        match scan_accepted(&chunk.id, &mut bbox, &mut output, &mut widened, &mut stats) {
            ControlFlow::Break(Absorbed::Hidden) => {
                stats.hidden += 1;
                continue;
            }
            ControlFlow::Break(Absorbed::Merged) => {
                stats.merged += 1;
                continue;
            }
            ControlFlow::Continue(()) => {}
        }

        if bbox.height <= 0.0 {
            log::trace!("chunk {} dropped: height {}", chunk.id, bbox.height);
            stats.degenerate += 1;
            continue;
        }

        output.push(Chunk {
            bounding_box: Some(bbox),
            ..chunk.clone()
        });
        widened.push(false);
    }

    stats.output = output.len();
    (output, stats)
}

/// Compare the current box against every accepted chunk in order.
///
/// Breaks when the current chunk is absorbed; trims continue the scan so
/// they can compound against later accepted boxes.
fn scan_accepted(
    id: &str,
    bbox: &mut BoundingBox,
    accepted: &mut [Chunk],
    widened: &mut [bool],
    stats: &mut AlignmentStats,
) -> ControlFlow<Absorbed> {
    let mut current = Edges::from(&*bbox);

    for (previous, was_widened) in accepted.iter_mut().zip(widened.iter_mut()) {
        let Some(previous_box) = previous.bounding_box.as_mut() else {
            continue;
        };
        let earlier = accepted_edges(previous_box, *was_widened);

        if is_fully_inside(&current, &earlier) {
            log::trace!("chunk {id} hidden inside {}", previous.id);
            return ControlFlow::Break(Absorbed::Hidden);
        }

        if is_vertically_contained(&current, &earlier) {
            let left = min_propagating(earlier.left, current.left);
            let right = max_propagating(earlier.right, current.right);
            previous_box.left = left;
            previous_box.width = right - left;
            *was_widened = true;
            log::trace!("chunk {id} merged into {}", previous.id);
            return ControlFlow::Break(Absorbed::Merged);
        }

        if !has_horizontal_overlap(&current, &earlier) {
            continue;
        }

        if current.top < earlier.bottom && current.bottom > earlier.bottom {
            bbox.top = earlier.bottom;
            bbox.height = (current.bottom - earlier.bottom).max(0.0);
            current = Edges::from(&*bbox);
            stats.trims += 1;
            log::trace!("chunk {id} trimmed below {}", previous.id);
        }
    }

    ControlFlow::Continue(())
}

/// Edges of an accepted box, reading merge-written `NaN` as zero
fn accepted_edges(bbox: &BoundingBox, widened: bool) -> Edges {
    if !widened {
        return Edges::from(bbox);
    }
    Edges::from(&BoundingBox {
        left: zero_if_nan(bbox.left),
        width: zero_if_nan(bbox.width),
        ..*bbox
    })
}

fn zero_if_nan(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

// f64::min/max discard NaN; a malformed coordinate must poison the union instead.
fn min_propagating(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn max_propagating(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(id: &str, top: f64, left: f64, width: f64, height: f64) -> Chunk {
        Chunk::new(id, Some(BoundingBox::new(top, left, width, height)))
    }

    fn ids(chunks: &[Chunk]) -> Vec<&str> {
        chunks.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_full_containment_hides_inner() {
        let outer = boxed("outer", 1.0, 1.0, 8.0, 8.0);
        let inner = boxed("inner", 2.0, 2.0, 2.0, 2.0);

        let (result, stats) = align_with_stats(&[outer.clone(), inner]);

        assert_eq!(result, vec![outer]);
        assert_eq!(stats.hidden, 1);
        assert_eq!(stats.output, 1);
    }

    #[test]
    fn test_containment_is_order_sensitive() {
        let outer = boxed("outer", 1.0, 1.0, 8.0, 8.0);
        let inner = boxed("inner", 2.0, 2.0, 2.0, 2.0);

        let outer_first = align(&[outer.clone(), inner.clone()]);
        let inner_first = align(&[inner.clone(), outer.clone()]);

        assert_ne!(outer_first, inner_first);
        // outer straddles inner's bottom edge and is trimmed below it
        assert_eq!(ids(&inner_first), vec!["inner", "outer"]);
        assert_eq!(inner_first[0], inner);
        assert_eq!(
            inner_first[1].bounding_box,
            Some(BoundingBox::new(4.0, 1.0, 8.0, 5.0))
        );
    }

    #[test]
    fn test_vertical_containment_widens_earlier_chunk() {
        let previous = boxed("previous", 1.0, 2.0, 4.0, 6.0).with_field("text", "kept");
        let current = boxed("current", 2.0, 0.0, 10.0, 2.0);

        let (result, stats) = align_with_stats(&[previous, current]);

        assert_eq!(ids(&result), vec!["previous"]);
        assert_eq!(
            result[0].bounding_box,
            Some(BoundingBox::new(1.0, 0.0, 10.0, 6.0))
        );
        assert_eq!(result[0].fields["text"], "kept");
        assert_eq!(stats.merged, 1);
    }

    #[test]
    fn test_merge_does_not_touch_caller_input() {
        let input = vec![
            boxed("previous", 1.0, 2.0, 4.0, 6.0),
            boxed("current", 2.0, 0.0, 10.0, 2.0),
        ];
        let snapshot = input.clone();

        let _ = align(&input);

        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_boundary_trim() {
        let first = boxed("first", 1.0, 0.0, 5.0, 3.0);
        let second = boxed("second", 3.0, 1.0, 4.0, 4.0);

        let (result, stats) = align_with_stats(&[first.clone(), second]);

        assert_eq!(result[0], first);
        assert_eq!(
            result[1].bounding_box,
            Some(BoundingBox::new(4.0, 1.0, 4.0, 3.0))
        );
        assert_eq!(stats.trims, 1);
    }

    #[test]
    fn test_trims_compound_across_earlier_chunks() {
        let a = boxed("a", 0.0, 0.0, 10.0, 2.0);
        let b = boxed("b", 3.0, 0.0, 10.0, 2.0);
        let c = boxed("c", 1.0, 2.0, 2.0, 8.0);

        let (result, stats) = align_with_stats(&[a, b, c]);

        // c is trimmed below a (top 2), then below b (top 5)
        assert_eq!(ids(&result), vec!["a", "b", "c"]);
        assert_eq!(
            result[2].bounding_box,
            Some(BoundingBox::new(5.0, 2.0, 2.0, 4.0))
        );
        assert_eq!(stats.trims, 2);
    }

    #[test]
    fn test_trim_then_containment_still_hides() {
        let a = boxed("a", 0.0, 0.0, 10.0, 2.0);
        let b = boxed("b", 2.0, 0.0, 10.0, 5.0);
        let c = boxed("c", 1.0, 1.0, 2.0, 3.0);

        let result = align(&[a, b, c]);

        // c becomes top 2, height 2 after a, which fits inside b
        assert_eq!(ids(&result), vec!["a", "b"]);
    }

    #[test]
    fn test_degenerate_chunks_dropped() {
        let flat = boxed("flat", 1.0, 1.0, 1.0, 0.0);
        let negative = boxed("negative", 1.0, 1.0, 1.0, -2.0);

        let (result, stats) = align_with_stats(&[flat, negative]);

        assert!(result.is_empty());
        assert_eq!(stats.degenerate, 2);
    }

    #[test]
    fn test_zero_height_inside_earlier_box_counts_as_hidden() {
        let outer = boxed("outer", 0.0, 0.0, 5.0, 5.0);
        let flat = boxed("flat", 1.0, 1.0, 1.0, 0.0);

        let (result, stats) = align_with_stats(&[outer, flat]);

        assert_eq!(ids(&result), vec!["outer"]);
        assert_eq!(stats.hidden, 1);
        assert_eq!(stats.degenerate, 0);
    }

    #[test]
    fn test_disjoint_columns_do_not_interact() {
        let left = boxed("left", 0.0, 0.0, 4.0, 10.0);
        let straddling = boxed("straddling", 5.0, 4.0, 4.0, 8.0);
        let above = boxed("above", -3.0, 6.0, 1.0, 2.0);

        let result = align(&[left.clone(), straddling.clone(), above.clone()]);

        assert_eq!(result, vec![left, straddling, above]);
    }

    #[test]
    fn test_vertical_containment_merges_even_without_horizontal_overlap() {
        let left = boxed("left", 0.0, 0.0, 4.0, 10.0);
        let right = boxed("right", 2.0, 6.0, 4.0, 2.0);

        let result = align(&[left, right]);

        assert_eq!(ids(&result), vec!["left"]);
        assert_eq!(
            result[0].bounding_box,
            Some(BoundingBox::new(0.0, 0.0, 10.0, 10.0))
        );
    }

    #[test]
    fn test_chunk_below_previous_bottom_is_not_trimmed() {
        let first = boxed("first", 0.0, 0.0, 5.0, 2.0);
        let second = boxed("second", 2.0, 0.0, 5.0, 2.0);

        let result = align(&[first.clone(), second.clone()]);

        assert_eq!(result, vec![first, second]);
    }

    #[test]
    fn test_chunks_without_box_pass_through_in_place() {
        let outer = boxed("outer", 0.0, 0.0, 10.0, 10.0);
        let bare = Chunk::new("bare", None).with_field("text", "no geometry");
        let inner = boxed("inner", 1.0, 1.0, 1.0, 1.0);
        let tail = Chunk::new("tail", None);

        let (result, stats) =
            align_with_stats(&[bare.clone(), outer.clone(), inner, tail.clone()]);

        assert_eq!(result, vec![bare, outer, tail]);
        assert_eq!(stats.passthrough, 2);
    }

    #[test]
    fn test_nan_chunk_is_kept_unmodified() {
        let outer = boxed("outer", 0.0, 0.0, 10.0, 10.0);
        let broken = boxed("broken", f64::NAN, 1.0, 1.0, 1.0);

        let result = align(&[outer, broken]);

        assert_eq!(ids(&result), vec!["outer", "broken"]);
        assert!(result[1].bounding_box.unwrap().top.is_nan());
    }

    #[test]
    fn test_nan_left_poisons_merge() {
        let previous = boxed("previous", 0.0, 2.0, 4.0, 10.0);
        let broken = boxed("broken", 1.0, f64::NAN, 1.0, 2.0);

        let result = align(&[previous, broken]);

        assert_eq!(ids(&result), vec!["previous"]);
        let bbox = result[0].bounding_box.unwrap();
        assert!(bbox.left.is_nan());
        assert!(bbox.width.is_nan());
    }

    #[test]
    fn test_later_merge_repairs_nan_written_by_earlier_merge() {
        let previous = boxed("previous", 0.0, 2.0, 4.0, 10.0);
        let garbled = boxed("garbled", 1.0, f64::NAN, 1.0, 2.0);
        let third = boxed("third", 3.0, 5.0, 3.0, 2.0);

        let (result, stats) = align_with_stats(&[previous, garbled, third]);

        // the poisoned left/width read back as 0, so third widens to 0..8
        assert_eq!(ids(&result), vec!["previous"]);
        assert_eq!(
            result[0].bounding_box,
            Some(BoundingBox::new(0.0, 0.0, 8.0, 10.0))
        );
        assert_eq!(stats.merged, 2);
    }

    #[test]
    fn test_decoded_nan_in_accepted_box_is_not_repaired() {
        let broken = boxed("broken", 0.0, f64::NAN, 4.0, 10.0);
        let inside = boxed("inside", 3.0, 5.0, 3.0, 2.0);

        let result = align(&[broken, inside]);

        // vertical containment still merges; the union stays NaN
        assert_eq!(ids(&result), vec!["broken"]);
        let bbox = result[0].bounding_box.unwrap();
        assert!(bbox.left.is_nan());
        assert!(bbox.width.is_nan());
    }

    #[test]
    fn test_empty_input() {
        let (result, stats) = align_with_stats(&[]);
        assert!(result.is_empty());
        assert_eq!(stats, AlignmentStats::default());
    }
}

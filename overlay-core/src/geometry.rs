//! Edge calculation and containment predicates
//!
//! All predicates are pure comparisons over [`Edges`]. Any `NaN` coordinate
//! makes them return `false`.

use crate::types::BoundingBox;

/// Absolute edges of a bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    /// Top edge
    pub top: f64,
    /// Left edge
    pub left: f64,
    /// `top + height`
    pub bottom: f64,
    /// `left + width`
    pub right: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl From<&BoundingBox> for Edges {
    fn from(bbox: &BoundingBox) -> Self {
        Self {
            top: bbox.top,
            left: bbox.left,
            bottom: bbox.top + bbox.height,
            right: bbox.left + bbox.width,
            width: bbox.width,
            height: bbox.height,
        }
    }
}

/// Normalize an optional bounding box into edges; a missing box is all zero
pub fn compute_edges(bbox: Option<&BoundingBox>) -> Edges {
    bbox.map(Edges::from).unwrap_or_default()
}

/// `inner` lies within `outer` on both axes, boundaries inclusive
pub fn is_fully_inside(inner: &Edges, outer: &Edges) -> bool {
    inner.top >= outer.top
        && inner.bottom <= outer.bottom
        && inner.left >= outer.left
        && inner.right <= outer.right
}

/// `inner` lies within `outer` vertically; horizontal extent is ignored
pub fn is_vertically_contained(inner: &Edges, outer: &Edges) -> bool {
    inner.top >= outer.top && inner.bottom <= outer.bottom
}

/// Left/right ranges intersect; touching edges do not count
pub fn has_horizontal_overlap(a: &Edges, b: &Edges) -> bool {
    a.left < b.right && a.right > b.left
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(top: f64, left: f64, width: f64, height: f64) -> Edges {
        Edges::from(&BoundingBox::new(top, left, width, height))
    }

    #[test]
    fn test_compute_edges() {
        let e = compute_edges(Some(&BoundingBox::new(1.0, 2.0, 3.0, 4.0)));
        assert_eq!(e.bottom, 5.0);
        assert_eq!(e.right, 5.0);
        assert_eq!(e.width, 3.0);
        assert_eq!(e.height, 4.0);
    }

    #[test]
    fn test_compute_edges_missing_box() {
        assert_eq!(compute_edges(None), Edges::default());
    }

    #[test]
    fn test_fully_inside_is_inclusive() {
        let outer = edges(1.0, 1.0, 8.0, 8.0);
        assert!(is_fully_inside(&edges(2.0, 2.0, 2.0, 2.0), &outer));
        assert!(is_fully_inside(&outer, &outer));
        assert!(!is_fully_inside(&edges(0.5, 2.0, 2.0, 2.0), &outer));
        assert!(!is_fully_inside(&edges(2.0, 2.0, 8.0, 2.0), &outer));
    }

    #[test]
    fn test_vertical_containment_ignores_horizontal() {
        let outer = edges(1.0, 2.0, 4.0, 6.0);
        assert!(is_vertically_contained(&edges(2.0, 0.0, 10.0, 2.0), &outer));
        assert!(is_vertically_contained(&edges(1.0, 50.0, 1.0, 6.0), &outer));
        assert!(!is_vertically_contained(&edges(2.0, 0.0, 10.0, 6.0), &outer));
    }

    #[test]
    fn test_horizontal_overlap_is_strict() {
        let a = edges(0.0, 0.0, 5.0, 1.0);
        assert!(has_horizontal_overlap(&a, &edges(0.0, 4.0, 5.0, 1.0)));
        assert!(!has_horizontal_overlap(&a, &edges(0.0, 5.0, 5.0, 1.0)));
        assert!(!has_horizontal_overlap(&edges(0.0, 5.0, 5.0, 1.0), &a));
    }

    #[test]
    fn test_nan_disables_predicates() {
        let outer = edges(0.0, 0.0, 10.0, 10.0);
        let broken = edges(f64::NAN, 1.0, 1.0, 1.0);
        assert!(!is_fully_inside(&broken, &outer));
        assert!(!is_vertically_contained(&broken, &outer));
        assert!(!is_fully_inside(&outer, &broken));

        let broken_x = edges(1.0, f64::NAN, 1.0, 1.0);
        assert!(!has_horizontal_overlap(&broken_x, &outer));
    }
}

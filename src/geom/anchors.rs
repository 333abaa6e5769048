use super::{Point, Rect};

/// The anchor points derived from an element's screen rectangle, used for all
/// directional distance comparisons. The centre coordinates are rounded to
/// the nearest whole pixel before the edge-centre points are formed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Anchors {
    /// Top-left corner of the rectangle.
    pub origin: Point,
    /// Centre of the top edge.
    pub top: Point,
    /// Centre of the bottom edge.
    pub bottom: Point,
    /// Centre of the left edge.
    pub left: Point,
    /// Centre of the right edge.
    pub right: Point,
}

impl Anchors {
    /// Derive the anchor record for a rectangle. Always succeeds.
    pub fn from_rect(r: Rect) -> Self {
        let cx = (r.left + r.width / 2.0).round();
        let cy = (r.top + r.height / 2.0).round();
        Anchors {
            origin: r.origin(),
            top: Point::new(cx, r.top),
            bottom: Point::new(cx, r.bottom()),
            left: Point::new(r.left, cy),
            right: Point::new(r.right(), cy),
        }
    }
}

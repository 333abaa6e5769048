use crate::{geom::Anchors, Direction, ElementId, Registry};

/// Find the nearest focus target in the given direction, or None if no
/// registered element lies in that direction.
///
/// Candidates are filtered by a half-plane test on the complementary outer
/// edge centres (for "up", an element qualifies iff its bottom-centre is at
/// or above the current top-centre), then ranked by Euclidean distance
/// between the paired edge centres. Ties keep the earliest entry in
/// registration order. The current element is never a candidate.
pub fn search(
    registry: &Registry,
    current: ElementId,
    position: &Anchors,
    direction: Direction,
) -> Option<ElementId> {
    let mut closest: Option<(ElementId, f64)> = None;
    for e in registry.iter() {
        if e.id == current || !is_candidate(position, &e.anchors, direction) {
            continue;
        }
        let d = distance(position, &e.anchors, direction);
        match closest {
            Some((_, best)) if d >= best => {}
            _ => closest = Some((e.id, d)),
        }
        // A zero distance can't be beaten, so stop scanning.
        if d == 0.0 {
            break;
        }
    }
    closest.map(|(id, _)| id)
}

fn is_candidate(current: &Anchors, other: &Anchors, direction: Direction) -> bool {
    match direction {
        Direction::Up => current.top.y >= other.bottom.y,
        Direction::Down => current.bottom.y <= other.top.y,
        Direction::Left => current.left.x >= other.right.x,
        Direction::Right => current.right.x <= other.left.x,
    }
}

fn distance(current: &Anchors, other: &Anchors, direction: Direction) -> f64 {
    match direction {
        Direction::Up => current.top.distance(other.bottom),
        Direction::Down => current.bottom.distance(other.top),
        Direction::Left => current.left.distance(other.right),
        Direction::Right => current.right.distance(other.left),
    }
}

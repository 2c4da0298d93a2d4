//! Planar geometry helpers shared by the search and synthesis stages.

use crate::graph::{Node, NodeKind};
use crate::Point;

/// The default radius within which a Node counts as blocking a line.
///
/// See [`segment_passes_through`] and [`is_obstructed`].
pub const DEFAULT_OBSTRUCTION_RADIUS: f64 = 20.0;

/// Euclidean distance between two positions.
///
/// This is the weight of every Graph edge, and the tie-breaker for nearest-neighbor scans.
pub fn distance(a: Point, b: Point) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

/// Manhattan distance between two positions.
///
/// Only used by the detour heuristic's inflation bound, never as an edge weight.
pub fn manhattan_distance(a: Point, b: Point) -> f64 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

/// `true` when `point` lies within `radius` of the **infinite line** through `p1` and `p2`.
///
/// Note that this is deliberately not a clamped segment test: a point far beyond either
/// endpoint still "passes through" if it is close enough to the line's extension. That
/// over-approximates obstruction, but it is the behavior map data has been tuned against,
/// so it is kept as is.
///
/// When `p1 == p2` there is no line, and the plain point distance is compared instead.
pub fn segment_passes_through(p1: Point, p2: Point, point: Point, radius: f64) -> bool {
    let dx = p2.0 - p1.0;
    let dy = p2.1 - p1.1;
    let len = dx.hypot(dy);
    if len == 0.0 {
        return distance(p1, point) < radius;
    }
    let dist = (dy * point.0 - dx * point.1 + p2.0 * p1.1 - p2.1 * p1.0).abs() / len;
    dist < radius
}

/// `true` when the line from `a` to `b` passes through any room, entrance or stairs Node.
///
/// Waypoints are corridor space and never obstruct; `a` and `b` themselves are skipped by id.
pub fn is_obstructed(a: &Node, b: &Node, nodes: &[Node], radius: f64) -> bool {
    nodes.iter().any(|node| {
        node.kind != NodeKind::Waypoint
            && node.id != a.id
            && node.id != b.id
            && segment_passes_through(a.pos, b.pos, node.pos, radius)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean() {
        assert_eq!(distance((0.0, 0.0), (3.0, 4.0)), 5.0);
        assert_eq!(distance((2.0, 2.0), (2.0, 2.0)), 0.0);
    }

    #[test]
    fn manhattan() {
        assert_eq!(manhattan_distance((0.0, 0.0), (3.0, 4.0)), 7.0);
        assert_eq!(manhattan_distance((5.0, 1.0), (2.0, 1.0)), 3.0);
    }

    #[test]
    fn passes_through_radius_boundary() {
        let p1 = (0.0, 0.0);
        let p2 = (100.0, 0.0);
        assert!(segment_passes_through(p1, p2, (50.0, 19.0), 20.0));
        assert!(!segment_passes_through(p1, p2, (50.0, 21.0), 20.0));
        // exactly on the radius is not "through"
        assert!(!segment_passes_through(p1, p2, (50.0, 20.0), 20.0));
    }

    #[test]
    fn passes_through_is_an_infinite_line_test() {
        // (300, 5) is far beyond the segment's end but close to the line's extension
        assert!(segment_passes_through(
            (0.0, 0.0),
            (100.0, 0.0),
            (300.0, 5.0),
            20.0
        ));
    }

    #[test]
    fn passes_through_degenerate_segment() {
        assert!(segment_passes_through((10.0, 10.0), (10.0, 10.0), (15.0, 10.0), 20.0));
        assert!(!segment_passes_through((10.0, 10.0), (10.0, 10.0), (40.0, 10.0), 20.0));
    }

    #[test]
    fn obstruction_ignores_waypoints_and_endpoints() {
        let a = Node::new("a", "A", (0.0, 0.0), NodeKind::Room);
        let b = Node::new("b", "B", (100.0, 0.0), NodeKind::Room);
        let on_line_room = Node::new("mid", "Mid", (50.0, 0.0), NodeKind::Room);
        let on_line_waypoint = Node::waypoint("w", (50.0, 0.0));

        let blocked = vec![a.clone(), b.clone(), on_line_room];
        assert!(is_obstructed(&a, &b, &blocked, 20.0));

        let clear = vec![a.clone(), b.clone(), on_line_waypoint];
        assert!(!is_obstructed(&a, &b, &clear, 20.0));
    }
}

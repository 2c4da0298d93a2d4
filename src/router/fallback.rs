//! Grid synthesis: builds an axis-aligned path when the graph has no usable route.

use hashbrown::HashSet;
use log::{debug, trace};

use super::detour::select_detour;
use super::RouterConfig;
use crate::graph::{Node, NodeKind};
use crate::Point;

/// Allocates ids for waypoints synthesized during one routing call.
///
/// Virtual ids must never collide with a real id, so the set of real ids is collected up
/// front and the counter skips over any clash.
pub(super) struct VirtualIds<'a> {
    taken: HashSet<&'a str>,
    counter: usize,
}

impl<'a> VirtualIds<'a> {
    pub fn new(nodes: &'a [Node], start: &'a Node, goal: &'a Node) -> VirtualIds<'a> {
        let taken = nodes
            .iter()
            .chain([start, goal])
            .map(|node| node.id.as_str())
            .collect();
        VirtualIds { taken, counter: 0 }
    }

    fn fresh(&mut self, prefix: &str) -> String {
        loop {
            let id = format!("~{}-{}", prefix, self.counter);
            self.counter += 1;
            if !self.taken.contains(id.as_str()) {
                return id;
            }
        }
    }

    /// A virtual waypoint on a synthesized grid leg.
    pub fn grid(&mut self, pos: Point) -> Node {
        Node::waypoint(self.fresh("grid"), pos)
    }

    /// A virtual right-angle corner from the detour fallback.
    pub fn corner(&mut self, pos: Point) -> Node {
        Node::waypoint(self.fresh("corner"), pos)
    }
}

enum Axis {
    Horizontal,
    Vertical,
}

/// Builds a Manhattan-style path from `start` to `goal`: a horizontal leg toward the
/// goal's x, then a vertical leg toward the goal's y.
///
/// The leg order is a fixed policy — "go across, then go up/down". The reverse order is
/// never attempted, even when it would be shorter.
pub(super) fn synthesize(
    start: &Node,
    goal: &Node,
    nodes: &[Node],
    config: &RouterConfig,
    ids: &mut VirtualIds,
) -> Vec<Node> {
    let mut path = vec![start.clone()];

    if (goal.pos.0 - start.pos.0).abs() > config.leg_threshold {
        let target = (goal.pos.0, start.pos.1);
        push_leg(&mut path, start, goal, target, Axis::Horizontal, nodes, config, ids);
    }

    // the vertical leg continues from wherever the horizontal leg ended
    let anchor = path[path.len() - 1].clone();
    if (goal.pos.1 - anchor.pos.1).abs() > config.leg_threshold {
        let target = (anchor.pos.0, goal.pos.1);
        push_leg(&mut path, &anchor, goal, target, Axis::Vertical, nodes, config, ids);
    }

    if path[path.len() - 1].id != goal.id {
        path.push(goal.clone());
    }
    path
}

#[allow(clippy::too_many_arguments)]
fn push_leg(
    path: &mut Vec<Node>,
    from: &Node,
    goal: &Node,
    target: Point,
    axis: Axis,
    nodes: &[Node],
    config: &RouterConfig,
    ids: &mut VirtualIds,
) {
    // an existing corridor waypoint close enough to the target point is reused as is
    if let Some(existing) = nodes.iter().find(|node| {
        node.kind == NodeKind::Waypoint
            && (node.pos.0 - target.0).abs() <= config.waypoint_snap
            && (node.pos.1 - target.1).abs() <= config.waypoint_snap
    }) {
        trace!("leg from {} reuses waypoint {}", from.id, existing.id);
        path.push(existing.clone());
        return;
    }

    if leg_blocked(from, target, &axis, nodes, config) {
        debug!("leg from {} toward {:?} is blocked, trying a detour", from.id, target);
        let detour = select_detour(from, goal, nodes, config, ids);
        // the detour starts with `from`, which is already on the path
        path.extend(detour.into_iter().skip(1));
    } else {
        path.push(ids.grid(target));
    }
}

/// A leg is blocked when a room/entrance/stairs Node sits inside its corridor: strictly
/// between the leg's endpoints along the leg axis, and within the obstruction radius of
/// the leg's line on the other axis.
fn leg_blocked(
    from: &Node,
    target: Point,
    axis: &Axis,
    nodes: &[Node],
    config: &RouterConfig,
) -> bool {
    nodes.iter().any(|node| {
        if node.kind == NodeKind::Waypoint {
            return false;
        }
        match axis {
            Axis::Horizontal => {
                strictly_between(node.pos.0, from.pos.0, target.0)
                    && (node.pos.1 - from.pos.1).abs() < config.obstruction_radius
            }
            Axis::Vertical => {
                strictly_between(node.pos.1, from.pos.1, target.1)
                    && (node.pos.0 - from.pos.0).abs() < config.obstruction_radius
            }
        }
    })
}

fn strictly_between(value: f64, a: f64, b: f64) -> bool {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    value > lo && value < hi
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: &str, x: f64, y: f64) -> Node {
        Node::new(id, id, (x, y), NodeKind::Room)
    }

    fn run(start: &Node, goal: &Node, nodes: &[Node]) -> Vec<Node> {
        let config = RouterConfig::default();
        let mut ids = VirtualIds::new(nodes, start, goal);
        synthesize(start, goal, nodes, &config, &mut ids)
    }

    #[test]
    fn horizontal_then_vertical() {
        let a = room("a", 0.0, 0.0);
        let b = room("b", 200.0, 150.0);
        let steps = run(&a, &b, &[a.clone(), b.clone()]);

        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].id, "a");
        assert_eq!(steps[1].pos, (200.0, 0.0));
        assert!(steps[1].is_waypoint());
        assert_eq!(steps[2].pos, (200.0, 150.0));
        assert_eq!(steps[3].id, "b");
    }

    #[test]
    fn small_deltas_skip_legs() {
        let a = room("a", 0.0, 0.0);
        let b = room("b", 15.0, 10.0);
        let steps = run(&a, &b, &[a.clone(), b.clone()]);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].id, "b");
    }

    #[test]
    fn start_equals_goal_is_degenerate() {
        let a = room("a", 40.0, 40.0);
        let steps = run(&a, &a, &[a.clone()]);
        assert_eq!(steps.len(), 1);
    }

    #[test]
    fn nearby_waypoint_is_reused() {
        let a = room("a", 0.0, 0.0);
        let b = room("b", 200.0, 10.0);
        let hall = Node::waypoint("hall-7", (198.0, 5.0));
        let nodes = vec![a.clone(), b.clone(), hall];

        let steps = run(&a, &b, &nodes);
        assert_eq!(steps[1].id, "hall-7");
    }

    #[test]
    fn blocked_corridor_goes_through_detour() {
        let a = room("a", 0.0, 0.0);
        let b = room("b", 200.0, 10.0);
        let wall = room("office", 100.0, 5.0); // inside the horizontal corridor
        let nodes = vec![a.clone(), b.clone(), wall];

        let steps = run(&a, &b, &nodes);
        // no waypoint qualifies, so the detour cuts a corner
        assert!(steps[1].id.starts_with("~corner"));
        assert_eq!(steps[steps.len() - 1].id, "b");
    }

    #[test]
    fn virtual_ids_never_collide_with_real_ones() {
        let taken = Node::waypoint("~grid-0", (500.0, 500.0));
        let a = room("a", 0.0, 0.0);
        let b = room("b", 200.0, 150.0);
        let nodes = vec![a.clone(), b.clone(), taken];

        let mut ids = VirtualIds::new(&nodes, &a, &b);
        assert_eq!(ids.grid((1.0, 1.0)).id, "~grid-1");
    }
}

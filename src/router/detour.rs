//! Waypoint detour selection for blocked legs.

use log::{debug, trace};

use super::fallback::VirtualIds;
use super::RouterConfig;
use crate::geometry::{is_obstructed, manhattan_distance};
use crate::graph::{Node, NodeKind};

/// Routes around an obstacle between `from` and `to` via an existing corridor waypoint,
/// or via a synthesized right-angle corner when none qualifies.
///
/// Candidate waypoints are pruned by the detour-inflation bound (the two Manhattan legs
/// via the waypoint must stay below `detour_inflation ×` the direct Manhattan distance),
/// tried in ascending order of that two-leg sum, and accepted once both legs are
/// unobstructed. The corner fallback is unconditional — it never checks obstruction —
/// which makes this selector total.
pub(super) fn select_detour(
    from: &Node,
    to: &Node,
    nodes: &[Node],
    config: &RouterConfig,
    ids: &mut VirtualIds,
) -> Vec<Node> {
    let direct = manhattan_distance(from.pos, to.pos);

    let mut candidates: Vec<(&Node, f64)> = nodes
        .iter()
        .filter(|node| node.kind == NodeKind::Waypoint)
        .map(|node| {
            let via = manhattan_distance(from.pos, node.pos) + manhattan_distance(node.pos, to.pos);
            (node, via)
        })
        .filter(|&(_, via)| via < config.detour_inflation * direct)
        .collect();
    candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

    for (waypoint, via) in candidates {
        if !is_obstructed(from, waypoint, nodes, config.obstruction_radius)
            && !is_obstructed(waypoint, to, nodes, config.obstruction_radius)
        {
            trace!(
                "detour {} -> {} -> {} ({}x direct)",
                from.id,
                waypoint.id,
                to.id,
                via / direct
            );
            return vec![from.clone(), waypoint.clone(), to.clone()];
        }
    }

    debug!("no detour waypoint between {} and {}, cutting a corner", from.id, to.id);
    let corner = ids.corner((to.pos.0, from.pos.1));
    vec![from.clone(), corner, to.clone()]
}

//! The routing facade: graph search first, grid synthesis as the fallback.

mod config;
pub use config::RouterConfig;

mod detour;
mod fallback;

use log::{debug, trace};

use crate::geometry::segment_passes_through;
use crate::graph::{dijkstra_search, IndexedGraph, Node, NodeKind};
use crate::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes Routes between Nodes of a floor-plan graph.
///
/// A `Router` holds nothing but its [`RouterConfig`]; every call reads the node collection
/// it is given and leaves no state behind, so one `Router` can serve any number of threads.
///
/// ## Examples
/// ```
/// use floorgraph::{Node, NodeKind, Router};
///
/// let nodes = vec![
///     Node::new("a", "A", (0.0, 0.0), NodeKind::Room).with_connections(["b"]),
///     Node::new("b", "B", (100.0, 0.0), NodeKind::Room).with_connections(["a"]),
/// ];
///
/// let router = Router::default();
/// let path = router.find_route(&nodes[0], &nodes[1], &nodes);
/// assert_eq!(path.ids(), ["a", "b"]);
/// assert_eq!(path.cost(), 100.0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Router {
    config: RouterConfig,
}

impl Router {
    /// Creates a Router with the given config. `Router::default()` uses the calibrated
    /// defaults from [`RouterConfig`].
    pub fn new(config: RouterConfig) -> Router {
        Router { config }
    }

    /// The config this Router was created with.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Calculates a Route from `start` to `goal` across `nodes`.
    ///
    /// This operation is total: it always returns a Path whose first step carries
    /// `start`'s id and whose last step carries `goal`'s id. Graph search runs first;
    /// when it cannot connect the endpoints (or an endpoint has no connections at all),
    /// an axis-aligned route is synthesized instead, which may contain virtual waypoints
    /// that are not part of `nodes`. `nodes` is never mutated.
    ///
    /// ## Arguments
    /// - `start` - the Node to route from. Does not have to be an element of `nodes`.
    /// - `goal` - the Node to route to. Does not have to be an element of `nodes`.
    /// - `nodes` - the building's full Node collection.
    pub fn find_route(&self, start: &Node, goal: &Node, nodes: &[Node]) -> Path {
        // an isolated endpoint cannot take part in graph traversal, skip straight to synthesis
        if !start.connections.is_empty() && !goal.connections.is_empty() {
            let graph = IndexedGraph::build(nodes, start, goal);
            if let Some(path) = dijkstra_search(&graph) {
                trace!(
                    "graph search: {} -> {} in {} steps, cost {:.1}",
                    start.id,
                    goal.id,
                    path.len(),
                    path.cost()
                );
                return path;
            }
            debug!(
                "graph search cannot reach {} from {}, synthesizing a grid route",
                goal.id, start.id
            );
        } else {
            debug!(
                "{} or {} has no connections, skipping graph search",
                start.id, goal.id
            );
        }

        let mut ids = fallback::VirtualIds::new(nodes, start, goal);
        let steps = fallback::synthesize(start, goal, nodes, &self.config, &mut ids);
        if steps.is_empty() {
            // synthesis always yields at least the start step; this is the documented
            // last-resort safety net, not a branch that can currently be taken
            return Path::from_steps(vec![start.clone(), goal.clone()]);
        }
        Path::from_steps(steps)
    }

    /// Calculates the Routes from `start` to several destinations.
    ///
    /// With the `parallel` feature (enabled by default) the destinations are resolved on
    /// the rayon thread pool; the result order always matches `goals`.
    pub fn find_routes(&self, start: &Node, goals: &[Node], nodes: &[Node]) -> Vec<Path> {
        #[cfg(feature = "parallel")]
        return goals
            .par_iter()
            .map(|goal| self.find_route(start, goal, nodes))
            .collect();

        #[cfg(not(feature = "parallel"))]
        goals
            .iter()
            .map(|goal| self.find_route(start, goal, nodes))
            .collect()
    }

    /// Audits a Path: `true` when any leg passes through a room/entrance/stairs Node
    /// that is not itself a step of the Path.
    ///
    /// A `true` result is a route-quality signal, not an error — fallback synthesis can
    /// produce paths that cut through geometry when no clear detour exists, and the
    /// caller decides whether to accept them.
    pub fn path_crosses_obstacle(&self, path: &Path, nodes: &[Node]) -> bool {
        let steps = path.steps();
        steps.windows(2).any(|leg| {
            nodes.iter().any(|node| {
                node.kind != NodeKind::Waypoint
                    && !steps.iter().any(|step| step.id == node.id)
                    && segment_passes_through(
                        leg[0].pos,
                        leg[1].pos,
                        node.pos,
                        self.config.obstruction_radius,
                    )
            })
        })
    }
}

/// Calculates a Route from `start` to `goal` with the default [`RouterConfig`].
///
/// See [`Router::find_route`] for the full contract.
pub fn route(start: &Node, goal: &Node, nodes: &[Node]) -> Path {
    Router::default().find_route(start, goal, nodes)
}

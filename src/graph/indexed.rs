use hashbrown::HashMap;

use super::Node;
use crate::geometry::distance;

/// Index of a Node slot within an [`IndexedGraph`]
pub(crate) type NodeIndex = usize;

/// The per-call working set of a graph search.
///
/// Node lookups during relaxation have to be cheap, so instead of resolving neighbor ids
/// with repeated scans over the input slice, every routing call builds this structure once:
/// contiguous slots for the input Nodes plus the two endpoints (inserted when absent by id),
/// an id → index map, and adjacency lists with the Euclidean edge weights already resolved.
///
/// Connection ids that resolve to no known Node are skipped; a connection listed on either
/// end produces the edge in both directions.
#[derive(Debug)]
pub(crate) struct IndexedGraph<'a> {
    slots: Vec<&'a Node>,
    edges: Vec<Vec<(NodeIndex, f64)>>,
    start: NodeIndex,
    goal: NodeIndex,
}

impl<'a> IndexedGraph<'a> {
    pub fn build(nodes: &'a [Node], start: &'a Node, goal: &'a Node) -> IndexedGraph<'a> {
        let mut slots: Vec<&'a Node> = Vec::with_capacity(nodes.len() + 2);
        let mut by_id: HashMap<&'a str, NodeIndex> = HashMap::with_capacity(nodes.len() + 2);

        for node in nodes.iter().chain([start, goal]) {
            by_id.entry(node.id.as_str()).or_insert_with(|| {
                slots.push(node);
                slots.len() - 1
            });
        }

        let mut edges: Vec<Vec<(NodeIndex, f64)>> = vec![Vec::new(); slots.len()];
        for (index, node) in slots.iter().enumerate() {
            for conn in &node.connections {
                let Some(&other) = by_id.get(conn.as_str()) else {
                    continue; // dangling id, tolerated
                };
                if other == index {
                    continue;
                }
                let weight = distance(node.pos, slots[other].pos);
                if !edges[index].iter().any(|&(t, _)| t == other) {
                    edges[index].push((other, weight));
                }
                if !edges[other].iter().any(|&(t, _)| t == index) {
                    edges[other].push((index, weight));
                }
            }
        }

        let start = by_id[start.id.as_str()];
        let goal = by_id[goal.id.as_str()];
        IndexedGraph { slots, edges, start, goal }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn start(&self) -> NodeIndex {
        self.start
    }

    pub fn goal(&self) -> NodeIndex {
        self.goal
    }

    pub fn neighbors(&self, index: NodeIndex) -> &[(NodeIndex, f64)] {
        &self.edges[index]
    }
}

use std::ops::Index;
impl<'a> Index<NodeIndex> for IndexedGraph<'a> {
    type Output = Node;
    fn index(&self, index: NodeIndex) -> &Node {
        self.slots[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKind;

    fn room(id: &str, x: f64, y: f64, conns: &[&str]) -> Node {
        Node::new(id, id, (x, y), NodeKind::Room).with_connections(conns.iter().copied())
    }

    #[test]
    fn endpoints_present_by_id_are_not_duplicated() {
        let nodes = vec![room("a", 0.0, 0.0, &["b"]), room("b", 10.0, 0.0, &["a"])];
        let graph = IndexedGraph::build(&nodes, &nodes[0], &nodes[1]);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.start(), 0);
        assert_eq!(graph.goal(), 1);
    }

    #[test]
    fn absent_endpoints_are_inserted() {
        let nodes = vec![room("a", 0.0, 0.0, &[])];
        let outside = room("x", 5.0, 5.0, &[]);
        let goal = room("y", 9.0, 9.0, &[]);
        let graph = IndexedGraph::build(&nodes, &outside, &goal);
        assert_eq!(graph.len(), 3);
        assert_eq!(graph[graph.start()].id, "x");
        assert_eq!(graph[graph.goal()].id, "y");
    }

    #[test]
    fn edges_carry_euclidean_weights_both_ways() {
        // only `a` lists the connection; it must still be traversable from `b`
        let nodes = vec![room("a", 0.0, 0.0, &["b"]), room("b", 3.0, 4.0, &[])];
        let graph = IndexedGraph::build(&nodes, &nodes[0], &nodes[1]);
        assert_eq!(graph.neighbors(0), &[(1, 5.0)]);
        assert_eq!(graph.neighbors(1), &[(0, 5.0)]);
    }

    #[test]
    fn dangling_and_self_connections_are_skipped() {
        let nodes = vec![room("a", 0.0, 0.0, &["ghost", "a", "b"]), room("b", 1.0, 0.0, &[])];
        let graph = IndexedGraph::build(&nodes, &nodes[0], &nodes[1]);
        assert_eq!(graph.neighbors(0).len(), 1);
        assert_eq!(graph.neighbors(0)[0].0, 1);
    }
}

mod node;
pub use node::{Node, NodeKind};

mod indexed;
pub(crate) use indexed::{IndexedGraph, NodeIndex};

mod dijkstra;
pub(crate) use dijkstra::dijkstra_search;

use std::cmp::Ordering;

/// Binary heap entry for the search frontier: `(node index, cost so far)`.
///
/// Ordered by cost, reversed, so that `BinaryHeap` pops the cheapest entry first.
/// `f64::total_cmp` makes the ordering total; costs are never NaN (they are sums of
/// Euclidean distances), so its NaN placement never matters in practice.
#[derive(PartialEq)]
pub(crate) struct Element(pub NodeIndex, pub f64);

impl Eq for Element {}

impl PartialOrd for Element {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for Element {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.total_cmp(&self.1)
    }
}

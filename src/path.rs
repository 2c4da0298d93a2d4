use crate::geometry::distance;
use crate::graph::Node;

/// An ordered sequence of Nodes from start to destination, both inclusive.
///
/// Paths always contain at least one step; a single-step Path is the degenerate case of
/// routing a Node to itself. The cost is the sum of the Euclidean leg lengths. Paths are
/// created per routing call and owned by the caller; they share nothing with the input
/// node collection.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    steps: Vec<Node>,
    cost: f64,
}

impl Path {
    pub(crate) fn new(steps: Vec<Node>, cost: f64) -> Path {
        debug_assert!(!steps.is_empty(), "a Path has at least one step");
        Path { steps, cost }
    }

    /// Builds a Path from its steps, summing the leg lengths.
    pub(crate) fn from_steps(steps: Vec<Node>) -> Path {
        let cost = steps
            .windows(2)
            .map(|leg| distance(leg[0].pos, leg[1].pos))
            .sum();
        Path::new(steps, cost)
    }

    /// The total Euclidean length of this Path.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The number of Nodes on this Path (always ≥ 1).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `false` for every Path this crate produces; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The first step. Its id equals the start Node's id.
    pub fn first(&self) -> Option<&Node> {
        self.steps.first()
    }

    /// The last step. Its id equals the destination Node's id.
    pub fn last(&self) -> Option<&Node> {
        self.steps.last()
    }

    /// All steps in start → destination order.
    pub fn steps(&self) -> &[Node] {
        &self.steps
    }

    /// Returns an Iterator over the steps
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.steps.iter()
    }

    /// The step ids in order. Mostly useful for assertions and logging.
    pub fn ids(&self) -> Vec<&str> {
        self.steps.iter().map(|node| node.id.as_str()).collect()
    }

    /// Consumes the Path, yielding its steps.
    pub fn into_steps(self) -> Vec<Node> {
        self.steps
    }
}

use std::ops::Index;
impl Index<usize> for Path {
    type Output = Node;
    fn index(&self, index: usize) -> &Node {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;
    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

use std::fmt;
impl fmt::Display for Path {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {:.1}]: ", self.cost)?;
        if self.steps.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.steps[0].id)?;
            for step in self.steps.iter().skip(1) {
                write!(fmt, " -> {}", step.id)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKind;

    fn room(id: &str, x: f64, y: f64) -> Node {
        Node::new(id, id, (x, y), NodeKind::Room)
    }

    #[test]
    fn cost_is_summed_from_legs() {
        let path = Path::from_steps(vec![
            room("a", 0.0, 0.0),
            room("b", 100.0, 0.0),
            room("c", 100.0, 50.0),
        ]);
        assert_eq!(path.cost(), 150.0);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn index_and_ids() {
        let path = Path::from_steps(vec![room("a", 0.0, 0.0), room("b", 1.0, 0.0)]);
        assert_eq!(path[1].id, "b");
        assert_eq!(path.ids(), ["a", "b"]);
    }

    #[test]
    fn display() {
        let path = Path::from_steps(vec![
            room("a", 0.0, 0.0),
            room("b", 100.0, 0.0),
            room("c", 100.0, 50.0),
        ]);
        assert_eq!(&format!("{}", path), "Path[Cost = 150.0]: a -> b -> c");
    }

    #[test]
    fn single_step_path() {
        let path = Path::from_steps(vec![room("a", 4.0, 2.0)]);
        assert_eq!(path.cost(), 0.0);
        assert_eq!(path.first().map(|n| n.id.as_str()), Some("a"));
        assert_eq!(path.last().map(|n| n.id.as_str()), Some("a"));
    }
}

use crate::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a [`Node`] represents on the floor plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NodeKind {
    /// A named room
    Room,
    /// An unnamed corridor point, transparent to obstruction tests
    Waypoint,
    /// A building entrance
    Entrance,
    /// A staircase landing
    Stairs,
}

/// A point in the routing graph.
///
/// Nodes are supplied by an external building dataset and never mutated by the engine;
/// waypoints synthesized during routing are new values with fresh ids and empty
/// `connections`. Ids are expected to be unique within a building, while `connections`
/// may contain ids that resolve to nothing (those are silently skipped during search).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    /// Unique id within the building
    pub id: String,
    /// Display name; empty for waypoints
    pub name: String,
    /// Position in pixels of the reference floor-plan image
    pub pos: Point,
    /// Ids of neighboring Nodes. A listing on either end makes the edge traversable
    /// from both ends; the data does not have to be symmetric.
    pub connections: Vec<String>,
    /// What this Node represents
    pub kind: NodeKind,
}

impl Node {
    /// Creates a new Node without connections.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        pos: Point,
        kind: NodeKind,
    ) -> Node {
        Node {
            id: id.into(),
            name: name.into(),
            pos,
            connections: Vec::new(),
            kind,
        }
    }

    /// Creates an unnamed corridor waypoint.
    pub fn waypoint(id: impl Into<String>, pos: Point) -> Node {
        Node::new(id, "", pos, NodeKind::Waypoint)
    }

    /// Returns this Node with `connections` set to the given neighbor ids.
    pub fn with_connections<I, S>(mut self, ids: I) -> Node
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.connections = ids.into_iter().map(Into::into).collect();
        self
    }

    /// `true` for corridor waypoints, including synthesized ones.
    pub fn is_waypoint(&self) -> bool {
        self.kind == NodeKind::Waypoint
    }
}

use std::fmt;
impl fmt::Display for Node {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        if self.name.is_empty() {
            write!(fmt, "{}", self.id)
        } else {
            write!(fmt, "{} ({})", self.name, self.id)
        }
    }
}

#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to compute room-to-room Routes on an indoor floor plan.
//!
//! ## Introduction
//! An indoor map is represented as a flat Graph of [`Node`]s: rooms, entrances, stairs and
//! unnamed corridor waypoints, each sitting at a fixed pixel position of a reference floor-plan
//! image and listing the ids of its neighbors. Given a start and a destination, this crate
//! produces an ordered sequence of Nodes (a [`Path`]) that a caller can draw on the map or
//! narrate as turn-by-turn directions.
//!
//! Routing degrades through several stages and therefore **always** produces a Path:
//! 1. **Graph search**: weighted shortest path over the connection edges, with the Euclidean
//!    distance between the endpoints as the weight of every edge.
//! 2. **Grid synthesis**: when the graph has no usable route (isolated endpoints, disconnected
//!    components), an axis-aligned path is synthesized instead: one horizontal leg, then one
//!    vertical leg, reusing existing corridor waypoints where they fit and creating virtual
//!    ones where they don't.
//! 3. **Waypoint detour**: when a synthesized leg would run straight through a room, an
//!    existing waypoint within a bounded Manhattan detour routes around it.
//! 4. **Corner fallback**: when no waypoint qualifies, a right-angle corner point is created
//!    unconditionally.
//!
//! "No path found" is never an error; at worst the result is a degraded-quality Path, and
//! [`Router::path_crosses_obstacle`] lets the caller audit what it got.
//!
//! ## Examples
//! ```
//! use floorgraph::{route, Node, NodeKind};
//!
//! let rooms = vec![
//!     Node::new("lobby", "Lobby", (40.0, 80.0), NodeKind::Room).with_connections(["hall-1"]),
//!     Node::waypoint("hall-1", (120.0, 80.0)).with_connections(["lobby", "lab"]),
//!     Node::new("lab", "Laboratory", (120.0, 200.0), NodeKind::Room).with_connections(["hall-1"]),
//! ];
//!
//! let path = route(&rooms[0], &rooms[2], &rooms);
//! assert_eq!(path.ids(), ["lobby", "hall-1", "lab"]);
//! ```
//! The same call never fails, even without any connections to search:
//! ```
//! use floorgraph::{route, Node, NodeKind};
//!
//! let a = Node::new("a", "A", (0.0, 0.0), NodeKind::Room);
//! let b = Node::new("b", "B", (200.0, 150.0), NodeKind::Room);
//!
//! let path = route(&a, &b, &[a.clone(), b.clone()]);
//! assert_eq!(path.first().map(|n| n.id.as_str()), Some("a"));
//! assert_eq!(path.last().map(|n| n.id.as_str()), Some("b"));
//! // the synthesized bend sits at (destination.x, start.y)
//! assert_eq!(path[1].pos, (200.0, 0.0));
//! ```
//!
//! ## Concurrency
//! The engine is stateless across calls and only ever reads the node collection, so a
//! [`Router`] can be shared freely between threads. [`Router::find_routes`] resolves several
//! destinations from one start and runs them in parallel when the `parallel` feature
//! (enabled by default) is active. When the building data needs reloading, swap the whole
//! node collection atomically rather than editing it in place.

/// A shorthand for positions on the floor plan, in pixels of the reference image
pub type Point = (f64, f64);

pub mod geometry;

mod graph;
pub use self::graph::{Node, NodeKind};

mod path;
pub use self::path::Path;

mod router;
pub use self::router::{route, Router, RouterConfig};

/// The most common imports for working with this crate
pub mod prelude {
    pub use crate::{route, Node, NodeKind, Path, Point, Router, RouterConfig};
}

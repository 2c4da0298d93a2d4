/// Options for tuning a [`Router`](crate::Router)
///
/// The defaults match the distances the floor-plan data format was calibrated against
/// (pixels of the reference image):
/// ```
/// # use floorgraph::RouterConfig;
/// assert_eq!(
///     RouterConfig {
///         obstruction_radius: 20.0,
///         leg_threshold: 20.0,
///         waypoint_snap: 15.0,
///         detour_inflation: 1.5,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouterConfig {
    /// Radius within which a room/entrance/stairs Node blocks a line (defaults to `20.0`).
    ///
    /// Also the corridor half-width of the blocking scan during grid synthesis.
    pub obstruction_radius: f64,
    /// Minimum axis delta before grid synthesis bothers with a leg (defaults to `20.0`).
    ///
    /// Smaller offsets are treated as "already aligned" and produce no intermediate point.
    pub leg_threshold: f64,
    /// Maximum per-axis offset at which an existing waypoint is reused instead of
    /// synthesizing a virtual one at a leg's target point (defaults to `15.0`).
    pub waypoint_snap: f64,
    /// Detour-inflation bound: a waypoint only qualifies as a detour while the sum of its
    /// two Manhattan legs stays below this multiple of the direct Manhattan distance
    /// (defaults to `1.5`).
    pub detour_inflation: f64,
}

impl Default for RouterConfig {
    fn default() -> RouterConfig {
        RouterConfig {
            obstruction_radius: crate::geometry::DEFAULT_OBSTRUCTION_RADIUS,
            leg_threshold: 20.0,
            waypoint_snap: 15.0,
            detour_inflation: 1.5,
        }
    }
}

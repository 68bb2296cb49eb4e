use crate::{CARDINAL_COST, DIAGONAL_COST};
use grid_util::point::Point;

/// Octile distance between two grid coordinates: the exact cost of the
/// cheapest 8-directional walk between them on an obstacle-free grid, with
/// cardinal steps costing [CARDINAL_COST] and diagonal steps
/// [DIAGONAL_COST].
///
/// Doubles as the per-step cost accumulator (for adjacent coordinates) and
/// as the heuristic estimate against the goal, so the heuristic never
/// overestimates and satisfies the triangle inequality across neighbours.
pub fn octile_distance(a: Point, b: Point) -> i32 {
    let dx = (b.x - a.x).abs();
    let dy = (b.y - a.y).abs();
    CARDINAL_COST * (dx + dy) + (DIAGONAL_COST - 2 * CARDINAL_COST) * dx.min(dy)
}

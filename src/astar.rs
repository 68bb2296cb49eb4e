use crate::cost::octile_distance;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::grid::SearchGrid;
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexSet;
use log::{debug, info, warn};

type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// A found path. `points` runs from start to goal inclusive; reconstruction
/// walks the predecessor links the other way, from the goal back to the
/// start, and those links stay on the grid afterwards for callers that want
/// to trace them directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    pub points: Vec<Point>,
    /// Total movement cost, the goal's accumulated g-cost.
    pub cost: i32,
}

impl Path {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The search context: the open and closed sets, reusable across runs so
/// repeated searches do not reallocate.
///
/// A search runs synchronously to completion and holds the grid exclusively
/// for its duration; per-run cell state must be reset between runs on the
/// same grid ([find_path](Astar::find_path) does this itself).
#[derive(Debug, Default)]
pub struct Astar {
    frontier: Frontier,
    visited: FxIndexSet<Point>,
}

impl Astar {
    pub fn new() -> Astar {
        Astar {
            frontier: Frontier::new(),
            visited: FxIndexSet::default(),
        }
    }

    /// Computes a shortest-cost path from `start` to `goal`, resetting the
    /// grid's per-run search state first. Returns [None] if no path exists;
    /// a goal on a different walkable component is rejected via the
    /// component structure without running the search.
    pub fn find_path(
        &mut self,
        grid: &mut SearchGrid,
        start: Point,
        goal: Point,
    ) -> Result<Option<Path>, SearchError> {
        check_endpoints(grid, start, goal)?;
        grid.update();
        grid.reset_search_state();
        if grid.unreachable(start, goal) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(None);
        }
        let result = self.search(grid, start, goal)?;
        if result.is_none() {
            // Components said reachable, so an exhausted frontier means the
            // component structure went stale without being marked dirty.
            warn!(
                "frontier exhausted although {} and {} share a component",
                start, goal
            );
        }
        Ok(result)
    }

    /// The raw search driver. Seeds the frontier with `start` and expands
    /// the best candidate (minimum f, ties to minimum h) until the goal is
    /// finalized or the frontier runs dry. Does not consult components and
    /// does not reset per-run state; callers re-running on the same grid
    /// reset it themselves or inherit the previous run's costs and flags.
    pub fn search(
        &mut self,
        grid: &mut SearchGrid,
        start: Point,
        goal: Point,
    ) -> Result<Option<Path>, SearchError> {
        check_endpoints(grid, start, goal)?;
        self.frontier.clear();
        self.visited.clear();

        let h_start = octile_distance(start, goal);
        grid.cell_at_mut(start).set_costs(0, h_start);
        grid.cell_at_mut(start).in_frontier = true;
        self.frontier.push(start, 0, h_start)?;

        while let Some(entry) = self.frontier.pop() {
            let current = entry.point;
            self.visited
                .try_reserve(1)
                .map_err(|_| SearchError::Capacity)?;
            self.visited.insert(current);
            let cell = grid.cell_at_mut(current);
            cell.in_frontier = false;
            cell.visited = true;

            if current == goal {
                debug!(
                    "goal {} finalized at cost {} after {} expansions",
                    goal,
                    entry.g_cost,
                    self.visited.len()
                );
                return Ok(Some(reconstruct_path(grid, goal)));
            }

            let current_g = grid.cell_at(current).g_cost;
            for neighbor in grid.neighbors(current) {
                let neighbor_cell = grid.cell_at(neighbor);
                if neighbor_cell.visited || !neighbor_cell.walkable {
                    continue;
                }
                let tentative = current_g + octile_distance(current, neighbor);
                // The improvement check short-circuits the membership test;
                // a cell outside the frontier is (re)costed regardless of
                // any value its g field still holds.
                if tentative < neighbor_cell.g_cost || !self.frontier.contains(&neighbor) {
                    let h = octile_distance(neighbor, goal);
                    let cell = grid.cell_at_mut(neighbor);
                    cell.set_costs(tentative, h);
                    cell.parent = Some(current);
                    cell.in_frontier = true;
                    self.frontier.push(neighbor, tentative, h)?;
                }
            }
        }
        debug_assert!(self.frontier.is_empty());
        info!("no path: frontier exhausted before {} was reached", goal);
        Ok(None)
    }

    /// Number of cells finalized by the last run.
    pub fn expanded(&self) -> usize {
        self.visited.len()
    }

    /// Number of cells still open when the last run terminated. Zero after
    /// a failed run: the frontier was exhausted.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }
}

fn check_endpoints(grid: &SearchGrid, start: Point, goal: Point) -> Result<(), SearchError> {
    let start_cell = grid.cell(start).ok_or(SearchError::OutOfBounds(start))?;
    if !grid.in_bounds(goal) {
        return Err(SearchError::OutOfBounds(goal));
    }
    if !start_cell.walkable {
        return Err(SearchError::BlockedStart(start));
    }
    Ok(())
}

/// Walks the predecessor coordinates back from the goal, marking each
/// traversed cell as on the path, and returns the sequence reversed to
/// start-to-goal order.
fn reconstruct_path(grid: &mut SearchGrid, goal: Point) -> Path {
    let cost = grid.cell_at(goal).g_cost;
    let mut points: Vec<Point> = itertools::unfold(Some(goal), |current| {
        current.map(|p| {
            let cell = grid.cell_at_mut(p);
            cell.on_path = true;
            *current = cell.parent;
            p
        })
    })
    .collect();
    points.reverse();
    Path { points, cost }
}

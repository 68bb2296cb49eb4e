use grid_util::point::Point;

/// State of a single grid position.
///
/// The owning [SearchGrid](crate::grid::SearchGrid) holds every cell; cells
/// relate to each other only through [parent](Cell::parent), a grid
/// coordinate resolved against the owning grid. The parent link is
/// overwritten whenever a cheaper route to the cell is found and is only
/// meaningful for walking a finished path back from the goal.
#[derive(Clone, Debug, Default)]
pub struct Cell {
    /// Whether the search may enter this cell. Owned by the editing and
    /// maze-generation layers; persists across search runs.
    pub walkable: bool,
    /// Accumulated cost from the start.
    pub g_cost: i32,
    /// Estimated remaining cost to the goal.
    pub h_cost: i32,
    /// Combined priority, kept equal to `g_cost + h_cost`.
    pub f_cost: i32,
    pub is_start: bool,
    pub is_goal: bool,
    /// Set on every cell of the reconstructed path.
    pub on_path: bool,
    /// Finalized by the search (closed set).
    pub visited: bool,
    /// Currently under consideration by the search (open set).
    pub in_frontier: bool,
    /// Used only by maze carving, never by the search.
    pub maze_visited: bool,
    pub parent: Option<Point>,
}

impl Cell {
    pub fn new(walkable: bool) -> Cell {
        Cell {
            walkable,
            ..Cell::default()
        }
    }

    /// Updates both cost inputs and recomputes the combined priority.
    pub fn set_costs(&mut self, g_cost: i32, h_cost: i32) {
        self.g_cost = g_cost;
        self.h_cost = h_cost;
        self.f_cost = g_cost + h_cost;
    }

    /// Clears the search-owned state: costs, parent link and the
    /// path/visited/frontier flags. Walkability, start/goal designations
    /// and the maze flag belong to other layers and are left untouched.
    pub fn reset_search_state(&mut self) {
        self.g_cost = 0;
        self.h_cost = 0;
        self.f_cost = 0;
        self.on_path = false;
        self.visited = false;
        self.in_frontier = false;
        self.parent = None;
    }
}

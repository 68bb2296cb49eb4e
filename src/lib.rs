//! # grid_astar
//!
//! A grid-based A* pathfinding engine. Cells are walkable or blocked;
//! movement is 8-directional with integer octile costs (10 per cardinal
//! step, 14 per diagonal step), and the same octile distance doubles as the
//! heuristic, which keeps it admissible and consistent for this cost model.
//! Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists. Also ships a
//! randomized depth-first maze generator operating on the same grid.
//!
//! ```
//! use grid_astar::{Astar, SearchGrid};
//! use grid_util::point::Point;
//!
//! let mut grid = SearchGrid::new(3, 3);
//! grid.set_walkable(Point::new(1, 1), false).unwrap();
//! let mut astar = Astar::new();
//! let path = astar
//!     .find_path(&mut grid, Point::new(0, 0), Point::new(2, 2))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(path.cost, 10 + 14 + 10);
//! ```
pub mod astar;
pub mod cell;
pub mod cost;
pub mod error;
mod frontier;
pub mod grid;
pub mod maze;

pub use astar::{Astar, Path};
pub use cell::Cell;
pub use cost::octile_distance;
pub use error::SearchError;
pub use grid::SearchGrid;
pub use maze::generate_maze;

/// Cost of a cardinal (straight) step.
pub const CARDINAL_COST: i32 = 10;
/// Cost of a diagonal step, a 10-scaled approximation of `10 * sqrt(2)`.
pub const DIAGONAL_COST: i32 = 14;

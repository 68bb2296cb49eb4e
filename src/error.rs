use core::fmt;
use grid_util::point::Point;

/// Errors surfaced by the search engine.
///
/// An unreachable goal is not an error; it is reported as the absence of a
/// path. These variants cover precondition violations, which fail fast
/// before any search state is touched, and container growth failure, which
/// is returned to the caller instead of aborting the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A start or goal coordinate lies outside the grid.
    OutOfBounds(Point),
    /// The start cell is not walkable.
    BlockedStart(Point),
    /// A search container could not grow to hold another entry.
    Capacity,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::OutOfBounds(p) => write!(f, "coordinate {} is outside the grid", p),
            SearchError::BlockedStart(p) => write!(f, "start cell {} is not walkable", p),
            SearchError::Capacity => write!(f, "search containers exhausted available memory"),
        }
    }
}

impl std::error::Error for SearchError {}

use crate::cell::Cell;
use crate::error::SearchError;
use core::fmt;
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [SearchGrid] owns a fixed width x height array of [Cell]s together with a
/// [UnionFind] structure tracking the connected components of the walkable
/// region, so that unreachable goals can be rejected without flood-filling.
/// All mutation goes through the grid: cells hold no references to each
/// other and nothing outside the grid writes their fields directly.
///
/// Editing a cell to walkable joins it to the components of its walkable
/// neighbours immediately; blocking a cell only marks the components dirty,
/// since a removal can split a component and requires regeneration.
#[derive(Clone, Debug)]
pub struct SearchGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    components: UnionFind<usize>,
    components_dirty: bool,
}

/// Relative neighbour offsets in enumeration order: outer delta-row from -1
/// to +1, inner delta-column from -1 to +1, centre excluded. Selection ties
/// in the search driver fall back on insertion order, so this order is part
/// of the observable path output.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl SearchGrid {
    /// Creates a grid of the given dimensions with every cell walkable and
    /// all search state neutral. Components are generated on first use.
    pub fn new(width: usize, height: usize) -> SearchGrid {
        SearchGrid {
            width,
            height,
            cells: vec![Cell::new(true); width * height],
            components: UnionFind::new(width * height),
            components_dirty: true,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    fn index(&self, p: Point) -> usize {
        debug_assert!(self.in_bounds(p));
        p.y as usize * self.width + p.x as usize
    }

    /// Bounds-checked read access.
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        if self.in_bounds(p) {
            Some(&self.cells[self.index(p)])
        } else {
            None
        }
    }

    /// Bounds-checked write access.
    pub fn cell_mut(&mut self, p: Point) -> Option<&mut Cell> {
        if self.in_bounds(p) {
            let ix = self.index(p);
            Some(&mut self.cells[ix])
        } else {
            None
        }
    }

    pub(crate) fn cell_at(&self, p: Point) -> &Cell {
        &self.cells[self.index(p)]
    }

    pub(crate) fn cell_at_mut(&mut self, p: Point) -> &mut Cell {
        let ix = self.index(p);
        &mut self.cells[ix]
    }

    /// The in-bounds neighbours of `p` in enumeration order. Walkability is
    /// not filtered here; the search driver skips blocked cells itself.
    pub fn neighbors(&self, p: Point) -> SmallVec<[Point; 8]> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|(dx, dy)| Point::new(p.x + dx, p.y + dy))
            .filter(|n| self.in_bounds(*n))
            .collect()
    }

    /// Updates a cell's walkability. Joins newly connected components and
    /// flags the components as dirty if components are (potentially) broken
    /// apart into multiple.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) -> Result<(), SearchError> {
        if !self.in_bounds(p) {
            return Err(SearchError::OutOfBounds(p));
        }
        if self.cell_at(p).walkable && !walkable {
            self.components_dirty = true;
        } else if walkable {
            let p_ix = self.index(p);
            for n in self.neighbors(p) {
                if self.cell_at(n).walkable {
                    let n_ix = self.index(n);
                    self.components.union(p_ix, n_ix);
                }
            }
        }
        self.cell_at_mut(p).walkable = walkable;
        Ok(())
    }

    /// Marks `p` as the start cell, clearing any previous designation.
    pub fn set_start(&mut self, p: Point) -> Result<(), SearchError> {
        if !self.in_bounds(p) {
            return Err(SearchError::OutOfBounds(p));
        }
        for cell in &mut self.cells {
            cell.is_start = false;
        }
        self.cell_at_mut(p).is_start = true;
        Ok(())
    }

    /// Marks `p` as the goal cell, clearing any previous designation.
    pub fn set_goal(&mut self, p: Point) -> Result<(), SearchError> {
        if !self.in_bounds(p) {
            return Err(SearchError::OutOfBounds(p));
        }
        for cell in &mut self.cells {
            cell.is_goal = false;
        }
        self.cell_at_mut(p).is_goal = true;
        Ok(())
    }

    /// Resets every cell to the given walkability and clears all other
    /// state, designations included.
    pub fn fill(&mut self, walkable: bool) {
        for cell in &mut self.cells {
            *cell = Cell::new(walkable);
        }
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = true;
    }

    /// Clears the search-owned state of every cell ahead of a run.
    /// Walkability, start/goal designations and maze flags persist.
    pub fn reset_search_state(&mut self) {
        for cell in &mut self.cells {
            cell.reset_search_state();
        }
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, p: Point) -> usize {
        self.components.find(self.index(p))
    }

    /// Checks if start and goal are on the same walkable component.
    pub fn reachable(&self, start: Point, goal: Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same walkable component.
    pub fn unreachable(&self, start: Point, goal: Point) -> bool {
        if self.in_bounds(start) && self.in_bounds(goal) {
            !self.components.equiv(self.index(start), self.index(goal))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up walkable grid
    /// neighbours to the same components. Diagonal adjacency counts: the
    /// search may cut corners, so components must agree with it.
    pub fn generate_components(&mut self) {
        info!("generating connected components");
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let p = Point::new(x, y);
                if !self.cell_at(p).walkable {
                    continue;
                }
                let p_ix = self.index(p);
                // Forward half of the 8-neighbourhood; the scan covers the
                // backward half from the other endpoint.
                for (dx, dy) in [(1, 0), (-1, 1), (0, 1), (1, 1)] {
                    let n = Point::new(x + dx, y + dy);
                    if self.in_bounds(n) && self.cell_at(n).walkable {
                        let n_ix = self.index(n);
                        self.components.union(p_ix, n_ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for SearchGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let cell = self.cell_at(Point::new(x, y));
                let c = if cell.is_start {
                    'S'
                } else if cell.is_goal {
                    'G'
                } else if !cell.walkable {
                    '#'
                } else if cell.on_path {
                    'o'
                } else {
                    '.'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_enumeration_order_and_bounds() {
        let grid = SearchGrid::new(3, 3);
        let centre = grid.neighbors(Point::new(1, 1));
        let expected: Vec<Point> = vec![
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(0, 1),
            Point::new(2, 1),
            Point::new(0, 2),
            Point::new(1, 2),
            Point::new(2, 2),
        ];
        assert_eq!(centre.to_vec(), expected);

        let corner = grid.neighbors(Point::new(0, 0));
        assert_eq!(
            corner.to_vec(),
            vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn bounds_checked_access() {
        let mut grid = SearchGrid::new(2, 2);
        assert!(grid.cell(Point::new(1, 1)).is_some());
        assert!(grid.cell(Point::new(2, 0)).is_none());
        assert!(grid.cell_mut(Point::new(-1, 0)).is_none());
        assert_eq!(
            grid.set_walkable(Point::new(0, 5), false),
            Err(SearchError::OutOfBounds(Point::new(0, 5)))
        );
    }

    /// Blocking a column should split the walkable region in two.
    #[test]
    fn component_generation() {
        let mut grid = SearchGrid::new(3, 2);
        grid.set_walkable(Point::new(1, 0), false).unwrap();
        grid.set_walkable(Point::new(1, 1), false).unwrap();
        grid.update();
        assert!(grid.unreachable(Point::new(0, 0), Point::new(2, 0)));
        assert!(grid.reachable(Point::new(0, 0), Point::new(0, 1)));
        assert!(grid.unreachable(Point::new(0, 0), Point::new(5, 5)));
    }

    /// Re-opening a blocked cell joins the components again without a full
    /// regeneration.
    #[test]
    fn reopening_joins_components() {
        let mut grid = SearchGrid::new(3, 1);
        grid.set_walkable(Point::new(1, 0), false).unwrap();
        grid.generate_components();
        assert!(grid.unreachable(Point::new(0, 0), Point::new(2, 0)));
        grid.set_walkable(Point::new(1, 0), true).unwrap();
        assert!(grid.reachable(Point::new(0, 0), Point::new(2, 0)));
    }

    /// Diagonal contact alone connects components, matching the search's
    /// corner-cutting moves.
    #[test]
    fn diagonal_contact_connects() {
        let mut grid = SearchGrid::new(2, 2);
        grid.set_walkable(Point::new(1, 0), false).unwrap();
        grid.set_walkable(Point::new(0, 1), false).unwrap();
        grid.generate_components();
        assert!(grid.reachable(Point::new(0, 0), Point::new(1, 1)));
    }

    #[test]
    fn start_goal_designations_are_exclusive() {
        let mut grid = SearchGrid::new(4, 4);
        grid.set_start(Point::new(0, 0)).unwrap();
        grid.set_start(Point::new(3, 3)).unwrap();
        let marked: Vec<Point> = (0..4)
            .flat_map(|y| (0..4).map(move |x| Point::new(x, y)))
            .filter(|p| grid.cell(*p).unwrap().is_start)
            .collect();
        assert_eq!(marked, vec![Point::new(3, 3)]);
    }

    #[test]
    fn fill_resets_everything() {
        let mut grid = SearchGrid::new(2, 2);
        grid.set_walkable(Point::new(0, 0), false).unwrap();
        grid.set_goal(Point::new(1, 1)).unwrap();
        grid.fill(true);
        assert!(grid.cell(Point::new(0, 0)).unwrap().walkable);
        assert!(!grid.cell(Point::new(1, 1)).unwrap().is_goal);
        grid.update();
        assert!(grid.reachable(Point::new(0, 0), Point::new(1, 1)));
    }

    #[test]
    fn display_shows_walls_and_designations() {
        let mut grid = SearchGrid::new(3, 1);
        grid.set_walkable(Point::new(1, 0), false).unwrap();
        grid.set_start(Point::new(0, 0)).unwrap();
        grid.set_goal(Point::new(2, 0)).unwrap();
        assert_eq!(format!("{}", grid), "S#G\n");
    }
}

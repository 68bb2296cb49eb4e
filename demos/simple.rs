use grid_astar::{Astar, SearchGrid};
use grid_util::point::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  G|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// Nodes have an 8-neighborhood

fn main() {
    let mut grid = SearchGrid::new(3, 3);
    grid.set_walkable(Point::new(1, 1), false).unwrap();
    grid.set_start(Point::new(0, 0)).unwrap();
    grid.set_goal(Point::new(2, 2)).unwrap();
    let mut astar = Astar::new();
    if let Some(path) = astar
        .find_path(&mut grid, Point::new(0, 0), Point::new(2, 2))
        .unwrap()
    {
        println!("A path has been found with cost {}:", path.cost);
        for p in &path.points {
            println!("{:?}", p);
        }
        println!("{}", grid);
    }
}

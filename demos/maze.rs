use grid_astar::{generate_maze, Astar, SearchGrid};
use grid_util::point::Point;
use rand::prelude::*;

// Carves a random maze, then solves it from the top-left open cell to the
// bottom-right open cell and prints the grid with the path marked.

fn main() {
    let n = 21;
    let mut grid = SearchGrid::new(n, n);
    let mut rng = StdRng::from_entropy();
    generate_maze(&mut grid, &mut rng);

    let open: Vec<Point> = (0..n as i32)
        .flat_map(|y| (0..n as i32).map(move |x| Point::new(x, y)))
        .filter(|p| grid.cell(*p).unwrap().walkable)
        .collect();
    let start = open[0];
    let goal = *open.last().unwrap();
    grid.set_start(start).unwrap();
    grid.set_goal(goal).unwrap();

    let mut astar = Astar::new();
    match astar.find_path(&mut grid, start, goal).unwrap() {
        Some(path) => {
            println!(
                "Solved {} -> {} at cost {} ({} cells, {} expanded)",
                start,
                goal,
                path.cost,
                path.len(),
                astar.expanded()
            );
            println!("{}", grid);
        }
        None => println!("The maze has no route from {} to {}", start, goal),
    }
}

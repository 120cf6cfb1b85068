//! Basic example of using the search engine.

use sudoku_search::{Grid, Solver};

fn main() {
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let mut grid = Grid::from_string(puzzle_string).expect("valid puzzle text");

    println!("Puzzle:");
    println!("{}\n", grid);

    let solver = Solver::new();

    // Check uniqueness before enumerating
    println!("Unique solution: {}\n", solver.has_unique_solution(&grid));

    // Enumerate every completion
    let result = solver.enumerate(&mut grid);
    println!(
        "Found {} solution(s); input was originally complete: {}\n",
        result.solution_count(),
        result.originally_complete
    );
    for solution in &result.solutions {
        println!("{}\n", solution);
    }
}

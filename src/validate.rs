//! Full-grid validation.
//!
//! Used on completions that the search did not build itself: an input that
//! arrives with zero blanks is checked here instead of being trusted.

use crate::Grid;

/// Whether 9 values are a permutation of 1-9.
///
/// Marks a 9-slot table indexed by `digit - 1`; any slot left unmarked (or
/// any blank, which cannot mark a slot) means the unit is not a permutation.
fn is_permutation(values: [u8; 9]) -> bool {
    let mut seen = [false; 9];
    for v in values {
        if v == 0 {
            return false;
        }
        seen[(v - 1) as usize] = true;
    }
    seen.iter().all(|&marked| marked)
}

impl Grid {
    /// Whether this grid is a complete, legal Sudoku solution: every row,
    /// column, and box a permutation of 1-9. Short-circuits on the first
    /// violated unit.
    pub fn is_valid_solution(&self) -> bool {
        for i in 0..9 {
            if !is_permutation(self.row_values(i)) {
                return false;
            }
            if !is_permutation(self.col_values(i)) {
                return false;
            }
            if !is_permutation(self.box_values(i)) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::{Grid, Position};

    const SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn known_solution_is_valid() {
        let grid = Grid::from_string(SOLVED).unwrap();
        assert!(grid.is_valid_solution());
    }

    #[test]
    fn blank_cell_invalidates() {
        let mut grid = Grid::from_string(SOLVED).unwrap();
        grid.clear(Position::new(4, 4));
        assert!(!grid.is_valid_solution());
    }

    #[test]
    fn duplicate_in_row_invalidates() {
        let mut grid = Grid::from_string(SOLVED).unwrap();
        // Row 0 becomes 534678911: 1 twice, 2 missing.
        grid.set(Position::new(0, 8), 1);
        assert!(!grid.is_valid_solution());
    }

    #[test]
    fn duplicate_in_box_invalidates() {
        let mut grid = Grid::from_string(SOLVED).unwrap();
        // (0,0) and (0,1) share box 0; both 5 now.
        grid.set(Position::new(0, 1), 5);
        assert!(!grid.is_valid_solution());
    }

    #[test]
    fn empty_grid_is_not_a_solution() {
        let grid = Grid::from_rows(&vec![vec![0u8; 9]; 9]).unwrap();
        assert!(!grid.is_valid_solution());
    }
}

//! Exhaustive backtracking search.
//!
//! The engine scans row-major for the next blank, branches over that cell's
//! candidates in ascending order, and recurses with the cursor advanced past
//! the cell just filled, so confirmed prefix cells are never rescanned. Every
//! placement is undone on the way back out regardless of how many solutions
//! the branch produced: the search never stops at the first solution, it
//! enumerates all of them.

use crate::{Grid, Position};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Final outcome of one search: how many completions were accepted, and
/// whether the input grid had no blanks to begin with.
///
/// `originally_complete` disambiguates the two ways a count of zero can
/// happen: a filled input that failed validation, or a puzzle with no legal
/// completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub solution_count: usize,
    pub originally_complete: bool,
}

/// All completions of a grid, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    pub solutions: Vec<Grid>,
    pub originally_complete: bool,
}

impl Enumeration {
    /// Number of completions found.
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }
}

/// Per-search state: the working grid, the solution sink, the running count,
/// and the originally-complete flag. One session per search invocation;
/// independent searches share nothing.
struct Session<'a, F: FnMut(&Grid)> {
    grid: &'a mut Grid,
    emit: F,
    limit: usize,
    found: usize,
    originally_complete: bool,
}

impl<F: FnMut(&Grid)> Session<'_, F> {
    fn run(mut self) -> SearchReport {
        self.search(Some(Position::new(0, 0)));
        SearchReport {
            solution_count: self.found,
            originally_complete: self.originally_complete,
        }
    }

    /// Scan for the next blank at or after `cursor`, row-major. Finding one
    /// branches on it; running off the end means the grid is complete.
    fn search(&mut self, cursor: Option<Position>) {
        if self.found >= self.limit {
            return;
        }
        let mut scan = cursor;
        while let Some(pos) = scan {
            if self.grid.get(pos) == 0 {
                self.originally_complete = false;
                self.branch(pos);
                return;
            }
            scan = pos.successor();
        }
        self.accept();
    }

    /// Try each candidate at `pos` in ascending order, recursing past the
    /// cell and unconditionally erasing the placement on return.
    fn branch(&mut self, pos: Position) {
        let resume = pos.successor();
        for digit in self.grid.candidates(pos) {
            if self.found >= self.limit {
                break;
            }
            self.grid.set(pos, digit);
            self.search(resume);
            self.grid.clear(pos);
        }
    }

    /// The grid is complete. A completion the search built is valid by
    /// construction; one the caller supplied whole is checked before it
    /// counts.
    fn accept(&mut self) {
        if self.originally_complete && !self.grid.is_valid_solution() {
            debug!("filled input grid is not a valid solution; rejected");
            return;
        }
        self.found += 1;
        trace!("solution {} accepted", self.found);
        (self.emit)(self.grid);
    }
}

/// The search engine. Stateless; each call owns its session.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Enumerate every completion of `grid`, collected in discovery order.
    ///
    /// The grid is mutated during the search and restored to its original
    /// blank pattern before this returns.
    pub fn enumerate(&self, grid: &mut Grid) -> Enumeration {
        let mut solutions = Vec::new();
        let report = self.enumerate_with(grid, |g| solutions.push(g.clone()));
        Enumeration {
            solutions,
            originally_complete: report.originally_complete,
        }
    }

    /// Streaming form of [`Solver::enumerate`]: `emit` is invoked once per
    /// accepted completion, with the grid in its completed state.
    pub fn enumerate_with<F: FnMut(&Grid)>(&self, grid: &mut Grid, emit: F) -> SearchReport {
        debug!("searching grid with {} blank cell(s)", grid.empty_count());
        let report = Session {
            grid,
            emit,
            limit: usize::MAX,
            found: 0,
            originally_complete: true,
        }
        .run();
        debug!("search finished with {} solution(s)", report.solution_count);
        report
    }

    /// Count completions, stopping once `limit` have been found. The cap is
    /// checked on entry to each branching step; `usize::MAX` degenerates to
    /// full enumeration. Works on a copy of the grid.
    pub fn count_solutions(&self, grid: &Grid, limit: usize) -> usize {
        let mut working = grid.clone();
        Session {
            grid: &mut working,
            emit: |_: &Grid| {},
            limit,
            found: 0,
            originally_complete: true,
        }
        .run()
        .solution_count
    }

    /// Whether the puzzle has exactly one completion.
    pub fn has_unique_solution(&self, grid: &Grid) -> bool {
        self.count_solutions(grid, 2) == 1
    }

    /// First completion in discovery order, if any. Works on a copy of the
    /// grid.
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        let mut working = grid.clone();
        let mut first = None;
        Session {
            grid: &mut working,
            emit: |g: &Grid| first = Some(g.clone()),
            limit: 1,
            found: 0,
            originally_complete: true,
        }
        .run();
        first
    }
}

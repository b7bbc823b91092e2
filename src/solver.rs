use crate::{grid::{Digit, Grid, Pos}, logger::DevLogger};
use anyhow::Result;

// The probed cell itself is not skipped by the scan, so callers must keep
// (pos) at 0 while probing: the solver only probes empty cells, and the
// validator clears a cell before re-checking its value, then restores it.
pub fn placement_is_valid(grid: &Grid, pos: Pos, digit: Digit) -> bool {
    for i in 0..9 {
        if grid.get(Pos { r: pos.r, c: i }) == digit || grid.get(Pos { r: i, c: pos.c }) == digit {
            return false;
        }
    }
    let o = pos.block_origin();
    for r in o.r..o.r + 3 {
        for c in o.c..o.c + 3 {
            if grid.get(Pos { r, c }) == digit { return false; }
        }
    }
    true
}

// Row-major scan for the first empty cell at or after `from`: columns
// from.c..9 in the starting row, then whole rows below.
pub fn next_empty(grid: &Grid, from: Pos) -> Option<Pos> {
    for r in from.r..9 {
        let first_col = if r == from.r { from.c } else { 0 };
        for c in first_col..9 {
            if grid.get(Pos { r, c }) == 0 { return Some(Pos { r, c }); }
        }
    }
    None
}

pub fn solve(grid: &mut Grid) -> bool {
    let mut sink = DevLogger::silent();
    // a silent logger does no IO, so the traced search cannot fail
    Solver::new().solve(grid, &mut sink).unwrap_or(false)
}

pub struct Solver {
    tried: usize,
}

impl Solver {
    pub fn new() -> Self { Self { tried: 0 } }

    pub fn tried(&self) -> usize { self.tried }

    pub fn solve(&mut self, grid: &mut Grid, logger: &mut DevLogger) -> Result<bool> {
        if logger.is_enabled() {
            logger.log("Initialization", &format!("starting grid:\n{}", grid.to_pretty_string()))?;
        }
        let Some(first) = next_empty(grid, Pos { r: 0, c: 0 }) else {
            if logger.is_enabled() {
                logger.log("Initialization", "grid already fully assigned, nothing to search")?;
            }
            return Ok(true);
        };
        let solved = self.search(grid, first, 0, logger)?;
        if logger.is_enabled() {
            if solved {
                logger.log("Solved", &format!("{} placements tried\n{}", self.tried, grid.to_pretty_string()))?;
            } else {
                logger.log("Unsolvable", &format!("search space exhausted after {} placements", self.tried))?;
            }
        }
        Ok(solved)
    }

    fn search(&mut self, grid: &mut Grid, pos: Pos, depth: usize, logger: &mut DevLogger) -> Result<bool> {
        for d in 1..=9 {
            if !placement_is_valid(grid, pos, d) { continue; }
            grid.place(pos, d);
            self.tried += 1;
            if logger.is_enabled() {
                logger.log(&format!("Depth {depth}"), &format!("try {d} at r{}c{}", pos.r + 1, pos.c + 1))?;
            }
            // resume the scan at the cell just filled so the rest of its row
            // is checked before wrapping to the next row
            if let Some(next) = next_empty(grid, pos) {
                if self.search(grid, next, depth + 1, logger)? { return Ok(true); }
            } else {
                return Ok(true);
            }
            grid.clear(pos); // backtrack
        }
        if logger.is_enabled() {
            logger.log(&format!("Depth {depth}"), &format!("no digit fits r{}c{}, backtracking", pos.r + 1, pos.c + 1))?;
        }
        Ok(false)
    }
}

// Complete means no zeros; valid means every cell's digit would still be
// allowed if the cell were emptied and re-filled. Works on any externally
// filled grid, not just solver output.
pub fn is_complete_and_valid(grid: &Grid) -> bool {
    if !grid.is_full() { return false; }
    let mut scratch = grid.clone();
    for p in Grid::positions() {
        let d = scratch.get(p);
        scratch.clear(p);
        let ok = placement_is_valid(&scratch, p, d);
        scratch.place(p, d);
        if !ok { return false; }
    }
    true
}

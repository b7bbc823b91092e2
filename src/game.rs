use anyhow::{bail, ensure, Result};

use crate::{
    grid::{Digit, Grid, Pos},
    logger::DevLogger,
    puzzles,
    solver::{self, Solver},
};

// One play session: the given clues, the board being worked on, and
// whether it has reached a solved state. Frontends own one of these and
// call into it; no state lives anywhere else.
pub struct Game {
    puzzle: usize,
    given: Grid,
    board: Grid,
    solved: bool,
}

impl Game {
    pub fn new(puzzle: usize) -> Self {
        let puzzle = puzzle % puzzles::all().len();
        let given = puzzles::all()[puzzle].clone();
        Self { puzzle, board: given.clone(), given, solved: false }
    }

    pub fn next_puzzle(&mut self) { *self = Self::new(self.puzzle + 1); }

    pub fn board(&self) -> &Grid { &self.board }
    pub fn puzzle_index(&self) -> usize { self.puzzle }
    pub fn is_solved(&self) -> bool { self.solved }
    pub fn is_given(&self, pos: Pos) -> bool { self.given.get(pos) != 0 }

    pub fn enter(&mut self, pos: Pos, digit: Digit) -> Result<()> {
        ensure!(pos.r < 9 && pos.c < 9, "cell r{},c{} out of range", pos.r + 1, pos.c + 1);
        ensure!((1..=9).contains(&digit), "digit must be 1..=9, got {digit}");
        if self.is_given(pos) { bail!("cell r{},c{} is a given clue", pos.r + 1, pos.c + 1); }
        // conflicting entries are allowed here; validate() is the judge
        self.board.place(pos, digit);
        self.solved = false;
        Ok(())
    }

    pub fn erase(&mut self, pos: Pos) -> Result<()> {
        ensure!(pos.r < 9 && pos.c < 9, "cell r{},c{} out of range", pos.r + 1, pos.c + 1);
        if self.is_given(pos) { bail!("cell r{},c{} is a given clue", pos.r + 1, pos.c + 1); }
        self.board.clear(pos);
        self.solved = false;
        Ok(())
    }

    pub fn clear_entries(&mut self) {
        for p in Grid::positions() {
            if !self.is_given(p) { self.board.clear(p); }
        }
        self.solved = false;
    }

    // Solves a working copy and adopts it only on success, so a dead end
    // leaves the user's entries alone.
    pub fn solve(&mut self, logger: &mut DevLogger) -> Result<bool> {
        if self.solved { return Ok(true); }
        if !self.board.is_consistent() {
            bail!("board already breaks a row, column, or block constraint");
        }
        let mut work = self.board.clone();
        if Solver::new().solve(&mut work, logger)? {
            self.board = work;
            self.solved = true;
        }
        Ok(self.solved)
    }

    pub fn validate(&mut self) -> bool {
        self.solved = solver::is_complete_and_valid(&self.board);
        self.solved
    }
}

pub mod game;
pub mod grid;
pub mod logger;
pub mod puzzles;
pub mod solver;

pub use game::Game;
pub use grid::{Digit, Grid, Pos};
pub use solver::Solver;

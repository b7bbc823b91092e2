use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use itertools::Itertools;
use solvoku::{grid::{Grid, Pos}, logger::DevLogger, puzzles, solver::{self, Solver}};
use std::{fs, path::PathBuf};

#[derive(Parser, Debug)]
#[command(name = "solvoku", version, about = "Backtracking Sudoku solver and board checker")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a puzzle and print the completed grid
    Solve(SolveArgs),
    /// Check a filled-in grid for completeness and rule violations
    Check(SourceArgs),
}

#[derive(Args, Debug)]
struct SolveArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Emit devlog entries to the console with colors
    #[arg(long)]
    color: bool,

    /// Pause after each devlog entry. Press Enter to continue.
    #[arg(long)]
    step: bool,

    /// Maximum devlog entries to write (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_logs: usize,

    /// Print the solved grid as JSON instead of drawing it
    #[cfg(feature = "serde")]
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Path to a puzzle file (81 chars with 0 or . for blanks). If omitted, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Use a built-in puzzle instead of reading input
    #[arg(short, long)]
    puzzle: Option<usize>,
}

fn load_grid(src: &SourceArgs) -> Result<Grid> {
    if let Some(n) = src.puzzle {
        let builtin = puzzles::all();
        if n >= builtin.len() { bail!("no built-in puzzle {n} (have {})", builtin.len()); }
        return Ok(builtin[n].clone());
    }
    let text = match &src.input {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?,
        None => {
            use std::io::Read;
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let digits: String = text.chars().filter(|ch| matches!(ch, '0'..='9' | '.')).collect();
    if digits.len() < 81 {
        bail!("expected at least 81 digits/dots in input (have {})", digits.len());
    }
    Grid::from_compact(&digits.chars().take(81).collect::<String>())
}

fn describe(cells: &[Pos]) -> String {
    cells.iter().map(|p| format!("r{}c{}", p.r + 1, p.c + 1)).join(", ")
}

fn cmd_solve(args: &SolveArgs) -> Result<()> {
    let mut grid = load_grid(&args.source)?;
    let clashes = grid.conflicts();
    if !clashes.is_empty() {
        bail!("given clues already conflict at {}", describe(&clashes));
    }

    let mut logger = DevLogger::new("devlogs", args.color, args.step, args.max_logs)?;
    let mut solver = Solver::new();
    if !solver.solve(&mut grid, &mut logger)? {
        bail!("puzzle has no solution ({} placements tried)", solver.tried());
    }

    #[cfg(feature = "serde")]
    if args.json {
        println!("{}", serde_json::to_string(&grid)?);
        return Ok(());
    }
    println!("\nSolved grid:\n{}", grid.to_pretty_string());
    Ok(())
}

fn cmd_check(src: &SourceArgs) -> Result<()> {
    let grid = load_grid(src)?;
    if solver::is_complete_and_valid(&grid) {
        println!("CORRECT: board is complete and every constraint holds");
    } else if !grid.is_full() {
        println!("INCOMPLETE: {} cells still empty", grid.count_empty());
    } else {
        println!("INVALID: duplicate digits at {}", describe(&grid.conflicts()));
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Command::Solve(args) => cmd_solve(args),
        Command::Check(src) => cmd_check(src),
    }
}

use pretty_assertions::assert_eq;
use solvoku::{
    grid::{Grid, Pos},
    logger::DevLogger,
    solver::{self, Solver},
};

const CLASSIC: &str = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
const CLASSIC_SOLVED: &str =
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

#[test]
fn classic_puzzle_has_the_known_completion() {
    let mut g = Grid::from_compact(CLASSIC).unwrap();
    assert!(solver::solve(&mut g));
    assert_eq!(g.to_compact(), CLASSIC_SOLVED);
}

#[test]
fn empty_grid_is_solvable_and_deterministic() {
    let mut a = Grid::empty();
    let mut b = Grid::empty();
    assert!(solver::solve(&mut a));
    assert!(solver::solve(&mut b));
    assert!(solver::is_complete_and_valid(&a));
    assert_eq!(a.to_compact(), b.to_compact());
}

#[test]
fn unsolvable_grid_is_left_untouched() {
    // r1c9 can never be filled: its row forces 8 or 9 there, and both
    // already sit in column 9. The dead end only shows up after r1c8 is
    // tentatively filled, so the search places and then unwinds.
    let s = concat!(
        "1234567..",
        "........8",
        "........9",
        ".........",
        ".........",
        ".........",
        ".........",
        ".........",
        ".........",
    );
    let g = Grid::from_compact(s).unwrap();
    let mut work = g.clone();
    assert!(!solver::solve(&mut work));
    assert_eq!(work.to_compact(), g.to_compact());
}

#[test]
fn solved_input_returns_immediately_unchanged() {
    let mut g = Grid::from_compact(CLASSIC_SOLVED).unwrap();
    assert!(solver::solve(&mut g));
    assert_eq!(g.to_compact(), CLASSIC_SOLVED);
}

#[test]
fn validator_agrees_on_full_grids() {
    let solved = Grid::from_compact(CLASSIC_SOLVED).unwrap();
    assert!(solver::is_complete_and_valid(&solved));

    let partial = Grid::from_compact(CLASSIC).unwrap();
    assert!(!solver::is_complete_and_valid(&partial));

    let mut dup = solved.clone();
    dup.place(Pos { r: 0, c: 0 }, 4); // 4 now appears twice in row 1
    assert!(!solver::is_complete_and_valid(&dup));
}

#[test]
fn placement_check_scans_row_col_and_block() {
    let g = Grid::from_compact(CLASSIC).unwrap();
    let hole = Pos { r: 0, c: 2 };
    assert!(!solver::placement_is_valid(&g, hole, 5)); // row: 5 at r1c1
    assert!(!solver::placement_is_valid(&g, hole, 8)); // column: 8 at r3c3
    assert!(!solver::placement_is_valid(&g, hole, 9)); // block: 9 at r3c2
    assert!(solver::placement_is_valid(&g, hole, 4));
}

#[test]
fn next_empty_scans_row_major_from_start() {
    let mut g = Grid::from_compact(CLASSIC_SOLVED).unwrap();
    g.clear(Pos { r: 4, c: 4 });

    assert_eq!(solver::next_empty(&g, Pos { r: 0, c: 0 }), Some(Pos { r: 4, c: 4 }));
    assert_eq!(solver::next_empty(&g, Pos { r: 4, c: 4 }), Some(Pos { r: 4, c: 4 }));
    assert_eq!(solver::next_empty(&g, Pos { r: 4, c: 5 }), None);
    assert_eq!(solver::next_empty(&g, Pos { r: 5, c: 0 }), None);
}

#[test]
fn traced_solver_counts_placements() {
    let mut g = Grid::from_compact(CLASSIC).unwrap();
    let mut logger = DevLogger::silent();
    let mut s = Solver::new();
    assert!(s.solve(&mut g, &mut logger).unwrap());
    assert!(s.tried() >= 51); // at least one placement per empty cell
    assert_eq!(logger.entries(), 0);
}

use pretty_assertions::assert_eq;
use solvoku::{puzzles, Grid, Pos};

const CLASSIC: &str = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

#[test]
fn compact_round_trip() {
    let g = Grid::from_compact(CLASSIC).unwrap();
    assert_eq!(g.to_compact(), CLASSIC);
    assert_eq!(g.get(Pos { r: 0, c: 0 }), 5);
    assert_eq!(g.get(Pos { r: 8, c: 8 }), 9);
    assert_eq!(g.count_empty(), 51);
}

#[test]
fn parse_rejects_bad_input() {
    assert!(Grid::from_compact("123").is_err());
    let mut s = ".".repeat(81);
    s.replace_range(0..1, "x");
    assert!(Grid::from_compact(&s).is_err());
}

#[test]
fn pretty_string_draws_blocks() {
    let art = Grid::empty().to_pretty_string();
    assert_eq!(art.lines().count(), 13); // 9 cell rows plus 4 separators
    assert!(art.contains('·'));
}

#[test]
fn consistency_and_conflicts() {
    let mut g = Grid::from_compact(CLASSIC).unwrap();
    assert!(g.is_consistent());
    assert!(g.conflicts().is_empty());

    g.place(Pos { r: 0, c: 1 }, 5); // second 5 in row 1
    assert!(!g.is_consistent());
    let marked = g.conflicts();
    assert!(marked.contains(&Pos { r: 0, c: 0 }));
    assert!(marked.contains(&Pos { r: 0, c: 1 }));
}

#[test]
fn builtin_puzzles_are_consistent() {
    assert_eq!(puzzles::all().len(), 2);
    for g in puzzles::all() {
        assert!(g.is_consistent());
        assert!(!g.is_full());
    }
}

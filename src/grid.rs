use anyhow::{bail, Result};
use itertools::Itertools;

pub type Digit = u8; // 0 = empty; 1..=9 placed

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos { pub r: usize, pub c: usize }

impl Pos {
    pub fn block_origin(self) -> Pos { Pos { r: self.r - self.r % 3, c: self.c - self.c % 3 } }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: [[Digit; 9]; 9],
}

impl Grid {
    pub fn empty() -> Self { Self { cells: [[0; 9]; 9] } }

    pub fn from_rows(rows: [[Digit; 9]; 9]) -> Self { Self { cells: rows } }

    pub fn from_compact(s: &str) -> Result<Self> {
        if s.len() != 81 { bail!("compact string must be 81 chars, got {}", s.len()) }
        let mut g = Grid::empty();
        for (i, ch) in s.chars().enumerate() {
            g.cells[i / 9][i % 9] = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => bail!("invalid char {ch:?} at offset {i}"),
            };
        }
        Ok(g)
    }

    pub fn to_compact(&self) -> String {
        self.cells.iter().flatten().map(|&d| if d == 0 { '.' } else { (b'0' + d) as char }).collect()
    }

    pub fn to_pretty_string(&self) -> String {
        let mut s = String::new();
        for r in 0..9 {
            if r % 3 == 0 { s.push_str("+-------+-------+-------+\n"); }
            for c in 0..9 {
                if c % 3 == 0 { s.push_str("| "); }
                let d = self.cells[r][c];
                s.push(if d == 0 { '·' } else { (b'0' + d) as char });
                s.push(' ');
            }
            s.push_str("|\n");
        }
        s.push_str("+-------+-------+-------+\n");
        s
    }

    pub fn get(&self, p: Pos) -> Digit { self.cells[p.r][p.c] }
    pub fn place(&mut self, p: Pos, d: Digit) { self.cells[p.r][p.c] = d; }
    pub fn clear(&mut self, p: Pos) { self.cells[p.r][p.c] = 0; }

    pub fn is_full(&self) -> bool { self.cells.iter().flatten().all(|&d| d != 0) }
    pub fn count_empty(&self) -> usize { self.cells.iter().flatten().filter(|&&d| d == 0).count() }

    pub fn positions() -> impl Iterator<Item = Pos> { (0..81).map(|i| Pos { r: i / 9, c: i % 9 }) }

    pub fn row_values(&self, r: usize) -> [Digit; 9] { self.cells[r] }

    pub fn col_values(&self, c: usize) -> [Digit; 9] {
        let mut out = [0; 9];
        for r in 0..9 { out[r] = self.cells[r][c]; }
        out
    }

    pub fn block_values(&self, p: Pos) -> [Digit; 9] {
        let o = p.block_origin();
        let mut out = [0; 9];
        let mut i = 0;
        for r in o.r..o.r + 3 { for c in o.c..o.c + 3 { out[i] = self.cells[r][c]; i += 1; } }
        out
    }

    // Whether the placed digits break any row/column/block constraint yet.
    // Says nothing about solvability.
    pub fn is_consistent(&self) -> bool {
        (0..9).all(|r| no_repeats(self.row_values(r)))
            && (0..9).all(|c| no_repeats(self.col_values(c)))
            && (0..9).step_by(3).all(|br| {
                (0..9).step_by(3).all(|bc| no_repeats(self.block_values(Pos { r: br, c: bc })))
            })
    }

    // Cells whose digit occurs more than once in some row, column, or block.
    pub fn conflicts(&self) -> Vec<Pos> {
        let mut marked = [[false; 9]; 9];
        for r in 0..9 {
            self.mark_repeats((0..9).map(|c| Pos { r, c }), &mut marked);
        }
        for c in 0..9 {
            self.mark_repeats((0..9).map(|r| Pos { r, c }), &mut marked);
        }
        for br in (0..9).step_by(3) {
            for bc in (0..9).step_by(3) {
                let unit = (br..br + 3).flat_map(|r| (bc..bc + 3).map(move |c| Pos { r, c }));
                self.mark_repeats(unit, &mut marked);
            }
        }
        Self::positions().filter(|p| marked[p.r][p.c]).collect()
    }

    fn mark_repeats(&self, unit: impl Iterator<Item = Pos> + Clone, marked: &mut [[bool; 9]; 9]) {
        let mut counts = [0u8; 10];
        for p in unit.clone() { counts[self.get(p) as usize] += 1; }
        for p in unit {
            let d = self.get(p);
            if d != 0 && counts[d as usize] > 1 { marked[p.r][p.c] = true; }
        }
    }
}

fn no_repeats(vals: [Digit; 9]) -> bool {
    vals.iter().filter(|&&v| v != 0).duplicates().next().is_none()
}

//! Groups: the maximal runs of filled cells in a line, numbered from 1 in line order.
//!
//! This is the imperative counterpart of the `sequence_*` and `group_*` relations in the emitted [`Program`](crate::program::Program).
//! Positions are 1-based, as in the program.

use itertools::Itertools;
use strum::{Display, VariantArray};

use crate::cell::Cell;
use crate::clue::Clues;
use crate::grid::Grid;
use crate::location::Coord;

/// Direction of a line through the grid.
#[derive(Copy, Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    /// Left to right.
    Row,
    /// Top to bottom.
    Col,
}

/// A run of consecutive filled cells occupying positions `start..=end`, not necessarily maximal.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Sequence {
    /// Number of cells, `end - start + 1`.
    pub length: usize,
    /// First position.
    pub start: Coord,
    /// Last position.
    pub end: Coord,
}

/// The `index`th maximal run of a line.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Group {
    /// 1-based rank among the line's maximal runs.
    pub index: usize,
    /// Number of cells; must equal clue `index` of the line.
    pub length: usize,
    /// First position.
    pub start: Coord,
    /// Last position.
    pub end: Coord,
}

#[inline]
fn filled_at(line: &[Cell], position: Coord) -> bool {
    // positions outside 1..=len read as empty
    position
        .checked_sub(1)
        .and_then(|i| line.get(i))
        .is_some_and(|cell| cell.is_filled())
}

/// Every run of consecutive filled cells in `line`.
///
/// Built inductively: a filled cell is a run of length 1, and a run of length `L` ending at `C` extends to length `L + 1` when `C + 1` is filled.
pub fn sequences(line: &[Cell]) -> Vec<Sequence> {
    let mut found = Vec::new();
    let mut frontier = (1..=line.len())
        .filter(|pos| filled_at(line, *pos))
        .map(|pos| Sequence { length: 1, start: pos, end: pos })
        .collect_vec();

    while !frontier.is_empty() {
        let extended = frontier.iter()
            .filter(|seq| filled_at(line, seq.end + 1))
            .map(|seq| Sequence { length: seq.length + 1, start: seq.start, end: seq.end + 1 })
            .collect_vec();
        found.append(&mut frontier);
        frontier = extended;
    }

    found
}

impl Sequence {
    /// A sequence is maximal when the cells just outside it are empty or off the line.
    pub fn is_maximal(&self, line: &[Cell]) -> bool {
        !filled_at(line, self.start - 1) && !filled_at(line, self.end + 1)
    }
}

/// Number the maximal runs of `line`.
///
/// Group 1 is the maximal run with no filled cell to its left.
/// Group `I + 1` is the maximal run starting after group `I` ends, with no filled cell in between.
/// Indices are therefore contiguous and groups never touch.
pub fn groups(line: &[Cell]) -> Vec<Group> {
    let maximal = sequences(line).into_iter()
        .filter(|seq| seq.is_maximal(line))
        .collect_vec();

    let mut groups: Vec<Group> = Vec::new();
    let mut previous_end = 0;
    while let Some(next) = maximal.iter()
        .find(|seq| seq.start > previous_end && !(previous_end + 1..seq.start).any(|pos| filled_at(line, pos)))
    {
        groups.push(Group {
            index: groups.len() + 1,
            length: next.length,
            start: next.start,
            end: next.end,
        });
        previous_end = next.end;
    }

    groups
}

/// Whether `line` agrees with `clues` in both directions:
/// every clue `(I, L)` has a group `I` of length `L`, and every group `(I, L)` has a clue `(I, L)`.
pub fn satisfies(line: &[Cell], clues: &[usize]) -> bool {
    let groups = groups(line);

    let every_clue_found = clues.iter().enumerate()
        .all(|(i, clue)| groups.iter().any(|g| g.index == i + 1 && g.length == *clue));
    let every_group_declared = groups.iter()
        .all(|g| clues.get(g.index - 1) == Some(&g.length));

    every_clue_found && every_group_declared
}

/// Whether every row and every column of `grid` satisfies its clues.
pub fn grid_satisfies(grid: &Grid, clues: &Clues) -> bool {
    Axis::VARIANTS.iter().all(|axis| {
        let lines = grid.lines(*axis);
        let expected = clues.along(*axis);
        lines.len() == expected.len()
            && lines.iter().zip(expected).all(|(line, clue_line)| satisfies(line, clue_line))
    })
}

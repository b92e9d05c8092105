//! Run-length clues: the lengths of the maximal runs of filled cells in a line, in line order.

use itertools::Itertools;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::group::Axis;

/// The clues of a single row or column. Every value is strictly positive; a line with no filled cells has no clues.
pub type ClueLine = Vec<usize>;

/// Extract the clue sequence of a line.
///
/// Consecutive filled cells accumulate into a run, which is emitted when an empty cell or the end of the line is reached.
/// Runs of length zero are never emitted.
pub fn count_groups<I: IntoIterator<Item = Cell>>(line: I) -> ClueLine {
    let mut clues = Vec::new();
    let mut run = 0;

    for cell in line {
        match cell {
            Cell::Filled => run += 1,
            Cell::Empty => {
                if run > 0 {
                    clues.push(run);
                    run = 0;
                }
            }
        }
    }

    if run > 0 {
        clues.push(run);
    }

    clues
}

/// The fewest cells a line needs to hold `clues`: every run plus one separating cell between neighbours.
pub fn min_line_len(clues: &[usize]) -> usize {
    clues.iter().sum::<usize>() + clues.len().saturating_sub(1)
}

/// Lay `clues` out as far left as possible in a line of `len` cells, each run separated by exactly one empty cell.
///
/// Returns [`None`] if the clues do not fit.
pub fn canonical_line(clues: &[usize], len: usize) -> Option<Vec<Cell>> {
    if min_line_len(clues) > len || clues.contains(&0) {
        return None;
    }

    let mut line = Vec::with_capacity(len);
    for (i, clue) in clues.iter().enumerate() {
        if i > 0 {
            line.push(Cell::Empty);
        }
        line.extend(std::iter::repeat(Cell::Filled).take(*clue));
    }
    line.resize(len, Cell::Empty);

    Some(line)
}

/// Row and column clues of a puzzle.
///
/// Rows are listed top to bottom and columns left to right.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Clues {
    /// One clue line per row, top to bottom.
    pub rows: Vec<ClueLine>,
    /// One clue line per column, left to right.
    pub cols: Vec<ClueLine>,
}

impl Clues {
    /// Extract the clues of every row and every column of `grid`.
    pub fn of(grid: &Grid) -> Self {
        Self {
            rows: grid.lines(Axis::Row).into_iter().map(count_groups).collect_vec(),
            cols: grid.lines(Axis::Col).into_iter().map(count_groups).collect_vec(),
        }
    }

    /// The clue lines of every row, or of every column.
    pub fn along(&self, axis: Axis) -> &[ClueLine] {
        match axis {
            Axis::Row => &self.rows,
            Axis::Col => &self.cols,
        }
    }

    /// The largest number of clues in any line along `axis`.
    pub fn max_count(&self, axis: Axis) -> usize {
        self.along(axis).iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of decimal digits in the widest clue value, at least 1.
    pub fn digit_width(&self) -> usize {
        self.rows.iter().chain(self.cols.iter())
            .flatten()
            .map(|clue| clue.to_string().len())
            .max()
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(bits: &[u8]) -> Vec<Cell> {
        bits.iter().map(|bit| Cell::from(*bit)).collect()
    }

    #[test]
    fn extracts_runs() {
        assert_eq!(count_groups(line(&[1, 1, 0])), vec![2]);
        assert_eq!(count_groups(line(&[1, 0, 1])), vec![1, 1]);
        assert_eq!(count_groups(line(&[0, 1, 1, 1, 0, 0, 1])), vec![3, 1]);
    }

    #[test]
    fn extremes() {
        assert_eq!(count_groups(line(&[0, 0, 0, 0])), Vec::<usize>::new());
        assert_eq!(count_groups(line(&[1, 1, 1, 1, 1])), vec![5]);
        assert_eq!(count_groups(line(&[])), Vec::<usize>::new());
    }

    #[test]
    fn canonical_placement() {
        assert_eq!(canonical_line(&[2, 1], 5), Some(line(&[1, 1, 0, 1, 0])));
        assert_eq!(canonical_line(&[], 3), Some(line(&[0, 0, 0])));
        assert_eq!(canonical_line(&[2, 2], 4), None);
        assert_eq!(canonical_line(&[0], 4), None);
        assert_eq!(min_line_len(&[3, 1, 2]), 8);
    }

    #[test]
    fn digit_width_covers_both_axes() {
        let clues = Clues { rows: vec![vec![3]], cols: vec![vec![12], vec![]] };
        assert_eq!(clues.digit_width(), 2);
        assert_eq!(Clues::default().digit_width(), 1);
        assert_eq!(clues.max_count(Axis::Col), 1);
    }
}

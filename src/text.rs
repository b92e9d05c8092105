//! Plain-text rendering: column clues stacked above the grid, row clues in a left margin.

use itertools::Itertools;

use crate::clue::{ClueLine, Clues};
use crate::grid::Grid;
use crate::group::Axis;

/// Spacing used for saved text artifacts.
pub const DEFAULT_SPACING: usize = 2;

/// Left-pad every line with blanks to the longest line, right-aligning each clue to `width` characters.
fn padded_tokens(lines: &[ClueLine], max_count: usize, width: usize) -> Vec<Vec<String>> {
    lines.iter()
        .map(|line| {
            std::iter::repeat(" ".repeat(width))
                .take(max_count - line.len())
                .chain(line.iter().map(|clue| format!("{clue:>width$}")))
                .collect_vec()
        })
        .collect_vec()
}

/// Render a puzzle as text.
///
/// Every clue and cell occupies as many characters as the widest clue value, and neighbouring tokens are separated by `spacing` spaces,
/// so each column's clues line up above its cells.
/// Without `include_grid` the rows carry only their clues.
pub fn render(grid: &Grid, clues: &Clues, include_grid: bool, spacing: usize) -> String {
    let spaces = " ".repeat(spacing);
    let width = clues.digit_width();

    let row_lines = padded_tokens(&clues.rows, clues.max_count(Axis::Row), width).into_iter()
        .map(|tokens| tokens.join(&spaces))
        .collect_vec();
    let margin = row_lines.first().map_or(0, String::len);

    let col_tokens = padded_tokens(&clues.cols, clues.max_count(Axis::Col), width);
    let header = (0..clues.max_count(Axis::Col))
        .map(|i| std::iter::once(" ".repeat(margin))
            .chain(col_tokens.iter().map(|tokens| tokens[i].clone()))
            .join(&spaces))
        .join("\n");

    let mut text = header;
    text.push('\n');

    for (y, row) in grid.lines(Axis::Row).into_iter().enumerate() {
        text.push_str(row_lines.get(y).map_or("", String::as_str));
        text.push_str(&spaces);
        if include_grid {
            text.push_str(&row.iter().map(|cell| format!("{cell:>width$}")).join(&spaces));
        }
        text.push('\n');
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_row_with_grid() {
        let grid = Grid::from_rows(&[[1_u8, 1, 0]]).unwrap();
        let clues = Clues::of(&grid);
        assert_eq!(render(&grid, &clues, true, 2), "   1  1   \n2  1  1  0\n");
        assert_eq!(render(&grid, &clues, false, 2), "   1  1   \n2  \n");
    }

    #[test]
    fn stacked_clues_are_bottom_aligned() {
        let grid = Grid::from_rows(&[[1_u8, 0], [0, 0], [1, 1]]).unwrap();
        let clues = Clues::of(&grid);
        assert_eq!(clues.cols, vec![vec![1, 1], vec![1]]);

        assert_eq!(
            render(&grid, &clues, true, 1),
            "  1  \n  1 1\n1 1 0\n  0 0\n2 1 1\n",
        );
    }

    #[test]
    fn wide_clues_pad_every_token() {
        let grid = Grid::from_rows(&[[1_u8; 10]]).unwrap();
        let text = render(&grid, &Clues::of(&grid), true, 1);
        let lines = text.lines().collect_vec();
        assert_eq!(lines[0], "    1  1  1  1  1  1  1  1  1  1");
        assert_eq!(lines[1], "10  1  1  1  1  1  1  1  1  1  1");
    }

    #[test]
    fn cells_align_under_two_digit_clues() {
        let grid = Grid::from_rows(&[[1_u8; 10], [1, 0, 1, 0, 1, 0, 1, 0, 1, 0]]).unwrap();
        let clues = Clues::of(&grid);
        assert_eq!(clues.digit_width(), 2);

        let text = render(&grid, &clues, true, DEFAULT_SPACING);
        let lines = text.lines().collect_vec();
        assert_eq!(lines.len(), clues.max_count(Axis::Col) + 2);
        assert!(lines.iter().all(|line| line.len() == lines[0].len()), "{text}");

        // the last character of every column token sits in the same place on every line
        let margin = lines[0].len() - 10 * (2 + DEFAULT_SPACING);
        for x in 0..10 {
            let end = margin + (x + 1) * (2 + DEFAULT_SPACING) - 1;
            assert!(lines.iter().all(|line| line.as_bytes()[end] != b' '), "column {x} in\n{text}");
        }
    }

    #[test]
    fn empty_grid_has_blank_header() {
        let grid = Grid::from_rows(&[[0_u8, 0]]).unwrap();
        assert_eq!(render(&grid, &Clues::of(&grid), false, 2), "\n  \n");
    }
}

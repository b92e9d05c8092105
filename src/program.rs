//! The answer-set program a puzzle compiles to.
//!
//! The program's models are exactly the grids whose rows and columns agree with the clues.
//! Runs of filled cells are found inductively as `sequence_row/4` and `sequence_col/4`,
//! maximal runs are numbered in line order as `group_row/5` and `group_col/5`,
//! and integrity constraints tie groups to the declared `row_clue/3` and `col_clue/3` facts in both directions.
//! Only `filled/2` is shown.

use std::fmt::{Display, Formatter};

use crate::builder::ProgramBuilder;
use crate::clue::{ClueLine, Clues};
use crate::error::GenerateError;
use crate::grid::Grid;
use crate::group::Axis;
use crate::location::{Dimension, Location};

const GROUP_RULES: &str = "\
% runs of consecutive filled cells
sequence_row(R, 1, C, C) :- filled(R, C).
sequence_row(R, L+1, C1, C2+1) :- sequence_row(R, L, C1, C2), filled(R, C2+1).

sequence_col(C, 1, R, R) :- filled(R, C).
sequence_col(C, L+1, R1, R2+1) :- sequence_col(C, L, R1, R2), filled(R2+1, C).

% maximal runs, numbered from 1; group I+1 is the next maximal run after group I
group_row(R, 1, L, C1, C2) :- sequence_row(R, L, C1, C2),
                              not filled(R, C1-1), not filled(R, C2+1),
                              not filled(R, C) : col_id(C), C < C1.

group_row(R, I+1, L, C3, C4) :- group_row(R, I, _, _, C2), sequence_row(R, L, C3, C4), C3 > C2,
                                not filled(R, C3-1), not filled(R, C4+1),
                                not filled(R, C) : col_id(C), C2 < C, C < C3;
                                not group_row(R, I+1, _, C, _) : col_id(C), C != C3.

group_col(C, 1, L, R1, R2) :- sequence_col(C, L, R1, R2),
                              not filled(R1-1, C), not filled(R2+1, C),
                              not filled(R, C) : row_id(R), R < R1.

group_col(C, I+1, L, R3, R4) :- group_col(C, I, _, _, R2), sequence_col(C, L, R3, R4), R3 > R2,
                                not filled(R3-1, C), not filled(R4+1, C),
                                not filled(R, C) : row_id(R), R2 < R, R < R3;
                                not group_col(C, I+1, _, R, _) : row_id(R), R != R3.
";

const CLUE_CONSTRAINTS: &str = "\
% every clue has its group and every group has its clue
:- row_clue(R, I, L), not group_row(R, I, L, _, _).
:- col_clue(C, I, L), not group_col(C, I, L, _, _).

:- group_row(R, I, L, _, _), not row_clue(R, I, L).
:- group_col(C, I, L, _, _), not col_clue(C, I, L).

#show filled/2.
";

/// A compiled puzzle. Build one with [`ProgramBuilder`] or [`compile`]; [`Display`] renders the program text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Program {
    // width, height
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) clues: Clues,
    // row major, deduplicated
    pub(crate) fixed: Option<Vec<Location>>,
}

impl Program {
    /// `(width, height)`, as emitted in the `w` and `h` constants.
    #[inline]
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// The clues emitted as `row_clue` and `col_clue` facts.
    #[inline]
    pub fn clues(&self) -> &Clues {
        &self.clues
    }

    /// The pinned filled cells, or [`None`] if every cell is a free choice.
    #[inline]
    pub fn fixed_cells(&self) -> Option<&[Location]> {
        self.fixed.as_deref()
    }

    fn fmt_clue_facts(f: &mut Formatter<'_>, axis: Axis, lines: &[ClueLine]) -> std::fmt::Result {
        for (line_id, line) in lines.iter().enumerate() {
            if line.is_empty() {
                writeln!(f, "% {axis} {} has no groups", line_id + 1)?;
                continue;
            }

            for (index, clue) in line.iter().enumerate() {
                writeln!(f, "{axis}_clue({}, {}, {clue}).", line_id + 1, index + 1)?;
            }
        }

        Ok(())
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (width, height) = (self.dims.0.get(), self.dims.1.get());

        writeln!(f, "#const w = {width}. #const h = {height}.")?;
        writeln!(f, "col_id(1..w). row_id(1..h).")?;
        writeln!(f, "cell(R, C) :- row_id(R), col_id(C).")?;
        writeln!(f)?;

        match &self.fixed {
            None => writeln!(f, "{{ filled(R, C) : cell(R, C) }}.")?,
            Some(cells) => {
                if cells.is_empty() {
                    writeln!(f, "% no filled cells")?;
                }
                for location in cells {
                    let (row, col) = location.one_based();
                    writeln!(f, "filled({row}, {col}).")?;
                }
            }
        }
        writeln!(f)?;

        Self::fmt_clue_facts(f, Axis::Row, &self.clues.rows)?;
        Self::fmt_clue_facts(f, Axis::Col, &self.clues.cols)?;
        writeln!(f)?;

        writeln!(f, "{GROUP_RULES}")?;
        write!(f, "{CLUE_CONSTRAINTS}")
    }
}

/// Compile clues, and optionally a grid whose filled cells are pinned, into a [`Program`].
///
/// `dims` is `(width, height)`; the clue lists may not be longer than the grid in their direction.
pub fn compile(
    dims: (Dimension, Dimension),
    clues: &Clues,
    fixed: Option<&Grid>,
) -> Result<Program, GenerateError> {
    let mut builder = ProgramBuilder::with_dims(dims);
    builder.clues(clues);
    if let Some(grid) = fixed {
        builder.fix_grid(grid);
    }

    builder.build().map_err(|reasons| GenerateError::InvalidProgram(reasons.clone()))
}

//! Incremental construction of a [`Program`], collecting every problem found along the way.

use itertools::Itertools;

use crate::clue::{ClueLine, Clues};
use crate::grid::Grid;
use crate::group::Axis;
use crate::location::{Coord, Dimension, Location};
use crate::program::Program;

/// Reasons a [`ProgramBuilder`] may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// Clues were given for a row or column outside the bounds specified by `dims`.
    LineOutOfBounds {
        /// Direction of the line.
        axis: Axis,
        /// Zero-based index of the line.
        index: Coord,
    },
    /// A clue of length zero was given; clues count filled cells and are always positive.
    ClueOfLengthZero {
        /// Direction of the line holding the clue.
        axis: Axis,
        /// Zero-based index of that line.
        index: Coord,
    },
    /// A fixed cell was placed outside the bounds specified by `dims`.
    FixedCellOutOfBounds(Location),
    /// A whole grid was fixed whose dimensions differ from the builder's.
    DimensionMismatch,
}

/// A builder for [`Program`]s.
///
/// Lines without clues are fully empty. Without any fixed cell the program leaves every cell a free choice;
/// once any cell (or a whole grid) is fixed, the filled cells are exactly the fixed ones.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Debug)]
pub struct ProgramBuilder {
    // width, height
    dims: (Dimension, Dimension),
    rows: Vec<ClueLine>,
    cols: Vec<ClueLine>,
    fixed: Option<Vec<Location>>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl ProgramBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(width, height)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            rows: vec![Vec::new(); dims.1.get()],
            cols: vec![Vec::new(); dims.0.get()],
            fixed: None,
            invalid_reasons: Default::default(),
        }
    }

    /// Set the clues of row or column `index` (zero-based), replacing any clues it already had.
    ///
    /// May cause the builder to enter a [`LineOutOfBounds`](BuilderInvalidReason::LineOutOfBounds) or
    /// [`ClueOfLengthZero`](BuilderInvalidReason::ClueOfLengthZero) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn clue_line(&mut self, axis: Axis, index: Coord, clues: &[usize]) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if clues.contains(&0) {
            self.invalid_reasons.push(BuilderInvalidReason::ClueOfLengthZero { axis, index });
            return self;
        }

        let lines = match axis {
            Axis::Row => &mut self.rows,
            Axis::Col => &mut self.cols,
        };
        match lines.get_mut(index) {
            Some(line) => *line = clues.to_vec(),
            None => self.invalid_reasons.push(BuilderInvalidReason::LineOutOfBounds { axis, index }),
        }

        self
    }

    /// Shorthand for [`Self::clue_line`] over every row and column of `clues`, with the same conditions.
    pub fn clues(&mut self, clues: &Clues) -> &mut Self {
        for (index, line) in clues.rows.iter().enumerate() {
            self.clue_line(Axis::Row, index, line);
        }
        for (index, line) in clues.cols.iter().enumerate() {
            self.clue_line(Axis::Col, index, line);
        }

        self
    }

    /// Pin `location` as filled.
    ///
    /// May cause the builder to enter a [`FixedCellOutOfBounds`](BuilderInvalidReason::FixedCellOutOfBounds) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn fix_cell(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !location.within(self.dims) {
            self.invalid_reasons.push(BuilderInvalidReason::FixedCellOutOfBounds(location));
            return self;
        }

        self.fixed.get_or_insert_with(Vec::new).push(location);
        self
    }

    /// Pin exactly the filled cells of `grid`. An all-empty grid pins every cell empty.
    ///
    /// May cause the builder to enter a [`DimensionMismatch`](BuilderInvalidReason::DimensionMismatch) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn fix_grid(&mut self, grid: &Grid) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if grid.dims() != self.dims {
            self.invalid_reasons.push(BuilderInvalidReason::DimensionMismatch);
            return self;
        }

        self.fixed.get_or_insert_with(Vec::new).extend(grid.filled_locations());
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Program`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Program, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        // facts are emitted row by row
        let fixed = self.fixed.as_ref().map(|cells| cells.iter()
            .copied()
            .sorted_by_key(Location::as_index)
            .dedup()
            .collect_vec());

        Ok(Program {
            dims: self.dims,
            clues: Clues { rows: self.rows.clone(), cols: self.cols.clone() },
            fixed,
        })
    }
}

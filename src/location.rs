use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;

/// A zero-based column or row index.
pub type Coord = usize;
/// A board extent; puzzles are never empty in either direction.
pub type Dimension = NonZero<Coord>;

/// A location `(x, y)` on a grid. The top left corner is `Location(0, 0)`.
///
/// `x` is the column and `y` is the row, both zero-based.
/// The emitted program and the rendered artifacts number rows and columns from 1; see [`Self::one_based`].
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// The `(row, col)` index of this location in a row-major [`ndarray::Array2`].
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    /// `(row, col)`, counted from 1.
    pub fn one_based(&self) -> (Coord, Coord) {
        (self.1 + 1, self.0 + 1)
    }

    pub(crate) fn within(&self, dims: (Dimension, Dimension)) -> bool {
        self.0 < dims.0.get() && self.1 < dims.1.get()
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (row, col) = self.one_based();
        write!(f, "r{row}c{col}")
    }
}

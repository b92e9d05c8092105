use std::fmt::{Display, Formatter};
use std::num::NonZero;

use itertools::Itertools;
use ndarray::{Array2, AssignElem};
use rand::Rng;

use crate::cell::Cell;
use crate::group::Axis;
use crate::location::{Coord, Dimension, Location};

/// A `height` by `width` binary grid, stored row major.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    // width, height
    dims: (Dimension, Dimension),
    cells: Array2<Cell>,
}

impl Grid {
    /// An empty grid with the specified dimensions, specified in `(width, height)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_shape_simple_fn((dims.1.get(), dims.0.get()), Cell::default),
        }
    }

    /// Sample every cell independently and uniformly, in row-major order, one draw per cell.
    pub fn random<R: Rng + ?Sized>(dims: (Dimension, Dimension), rng: &mut R) -> Self {
        let mut grid = Self::with_dims(dims);
        // standard layout, so this walks row by row
        for cell in grid.cells.iter_mut() {
            cell.assign_elem(Cell::from(rng.random_range(0..2_u8)));
        }

        grid
    }

    /// Build a grid from rows of `0`/`1` values.
    ///
    /// Returns `None` if there are no rows, the rows are empty, or the rows differ in length.
    pub fn from_rows<Row: AsRef<[u8]>>(rows: &[Row]) -> Option<Self> {
        let width = NonZero::new(rows.first()?.as_ref().len())?;
        let height = NonZero::new(rows.len())?;
        if rows.iter().any(|row| row.as_ref().len() != width.get()) {
            return None;
        }

        let mut grid = Self::with_dims((width, height));
        for (y, row) in rows.iter().enumerate() {
            for (x, value) in row.as_ref().iter().enumerate() {
                grid.set(Location(x, y), Cell::from(*value));
            }
        }

        Some(grid)
    }

    /// `(width, height)`.
    #[inline]
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> Coord {
        self.dims.0.get()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> Coord {
        self.dims.1.get()
    }

    /// The cell at `location`, or [`None`] if it lies outside the grid.
    pub fn get(&self, location: Location) -> Option<Cell> {
        self.cells.get(location.as_index()).copied()
    }

    /// Overwrite the cell at `location`. Locations outside the grid are ignored.
    pub fn set(&mut self, location: Location, cell: Cell) {
        if let Some(ptr) = self.cells.get_mut(location.as_index()) {
            ptr.assign_elem(cell);
        }
    }

    /// Every row (top to bottom) or every column (left to right), as owned lines.
    pub fn lines(&self, axis: Axis) -> Vec<Vec<Cell>> {
        match axis {
            Axis::Row => self.cells.rows().into_iter().map(|row| row.to_vec()).collect_vec(),
            Axis::Col => self.cells.columns().into_iter().map(|col| col.to_vec()).collect_vec(),
        }
    }

    /// The `index`th row or column, zero-based.
    pub fn line(&self, axis: Axis, index: Coord) -> Option<Vec<Cell>> {
        match axis {
            Axis::Row => (index < self.height()).then(|| self.cells.row(index).to_vec()),
            Axis::Col => (index < self.width()).then(|| self.cells.column(index).to_vec()),
        }
    }

    fn locations_where(&self, wanted: Cell) -> Vec<Location> {
        self.cells.indexed_iter()
            .filter(|(_, cell)| **cell == wanted)
            .map(|(index, _)| Location::from(index))
            .collect_vec()
    }

    /// Every filled location, in row-major order.
    pub fn filled_locations(&self) -> Vec<Location> {
        self.locations_where(Cell::Filled)
    }

    /// Every empty location, in row-major order.
    pub fn empty_locations(&self) -> Vec<Location> {
        self.locations_where(Cell::Empty)
    }

    /// Number of filled cells.
    pub fn count_filled(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::*;

    #[test]
    fn rejects_ragged_rows() {
        assert!(Grid::from_rows(&[vec![1_u8, 0], vec![1]]).is_none());
        assert!(Grid::from_rows::<Vec<u8>>(&[]).is_none());
        assert!(Grid::from_rows(&[Vec::<u8>::new()]).is_none());
    }

    #[test]
    fn lines_follow_axis() {
        let grid = Grid::from_rows(&[[1_u8, 0, 0], [1, 1, 0]]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.line(Axis::Row, 1), Some(vec![Cell::Filled, Cell::Filled, Cell::Empty]));
        assert_eq!(grid.line(Axis::Col, 0), Some(vec![Cell::Filled, Cell::Filled]));
        assert_eq!(grid.line(Axis::Col, 3), None);
        assert_eq!(grid.lines(Axis::Col).len(), 3);
        assert_eq!(format!("{}", grid), "1 0 0\n1 1 0\n");
    }

    #[test]
    fn locations_are_row_major() {
        let grid = Grid::from_rows(&[[0_u8, 1], [1, 0]]).unwrap();
        assert_eq!(grid.filled_locations(), vec![Location(1, 0), Location(0, 1)]);
        assert_eq!(grid.empty_locations(), vec![Location(0, 0), Location(1, 1)]);
        assert_eq!(grid.count_filled(), 2);
    }

    #[test]
    fn sampling_is_reproducible() {
        let dims = (NonZero::new(7).unwrap(), NonZero::new(4).unwrap());
        let a = Grid::random(dims, &mut ChaCha20Rng::seed_from_u64(3));
        let b = Grid::random(dims, &mut ChaCha20Rng::seed_from_u64(3));
        assert_eq!(a, b);
        assert_eq!(a.width(), 7);
        assert_eq!(a.height(), 4);
    }
}

use std::path::PathBuf;

use crate::builder::BuilderInvalidReason;

/// Error that can occur while generating or saving puzzles.
#[derive(thiserror::Error, Debug)]
pub enum GenerateError {
    /// More cells were to be cleared than the grid has filled.
    #[error("cannot clear {requested} filled cells; the grid has only {available}")]
    NotEnoughFilledCells {
        /// Cells asked for.
        requested: usize,
        /// Filled cells present.
        available: usize,
    },
    /// More mistakes were to be added than the grid has empty cells.
    #[error("cannot fill {requested} empty cells; the grid has only {available}")]
    NotEnoughEmptyCells {
        /// Cells asked for.
        requested: usize,
        /// Empty cells present.
        available: usize,
    },

    /// A [`ProgramBuilder`](crate::ProgramBuilder) was given lines or cells outside its grid.
    #[error("invalid program: {0:?}")]
    InvalidProgram(Vec<BuilderInvalidReason>),

    /// Creating a directory or writing a file failed.
    #[error("i/o error at {}: {source}", .path.display())]
    Io {
        /// The directory or file involved.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// The rendered table would exceed [`MAX_SIDE`](crate::raster::MAX_SIDE) pixels in some direction.
    #[error("a {width}x{height} puzzle is too large to render")]
    ImageTooLarge {
        /// Grid width, in cells.
        width: usize,
        /// Grid height, in cells.
        height: usize,
    },
    /// Encoding or writing a PNG failed.
    #[error("cannot write image {}: {source}", .path.display())]
    Image {
        /// The image file.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: image::ImageError,
    },
}

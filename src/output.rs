//! Writing the three artifacts of each puzzle to disk.

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use log::{info, trace};

use crate::error::GenerateError;
use crate::puzzle::Puzzle;
use crate::{raster, text};

/// Where each artifact kind is written. The directories are independent and created on demand.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutputDirs {
    /// Receives `{name}.txt`.
    pub text: PathBuf,
    /// Receives `{name}.png`.
    pub image: PathBuf,
    /// Receives `{name}.asp`.
    pub program: PathBuf,
}

/// Paths of the three files written for one puzzle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SavedPuzzle {
    /// The text rendering.
    pub text: PathBuf,
    /// The PNG rendering.
    pub image: PathBuf,
    /// The answer-set program.
    pub program: PathBuf,
}

impl OutputDirs {
    /// `root/text`, `root/images` and `root/asp`.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            text: root.join("text"),
            image: root.join("images"),
            program: root.join("asp"),
        }
    }

    /// Create all three directories, and any missing parents.
    pub fn create(&self) -> Result<(), GenerateError> {
        for dir in [&self.text, &self.image, &self.program] {
            fs::create_dir_all(dir).map_err(|source| GenerateError::Io { path: dir.clone(), source })?;
        }

        Ok(())
    }
}

fn write_file(path: PathBuf, contents: String) -> Result<PathBuf, GenerateError> {
    trace!("writing {}", path.display());
    match fs::write(&path, contents) {
        Ok(()) => Ok(path),
        Err(source) => Err(GenerateError::Io { path, source }),
    }
}

/// Write the text, image and program artifacts of `puzzle`, each named after the puzzle.
///
/// The puzzle's own dimensions are compiled into its program.
pub fn save_puzzle(puzzle: &Puzzle, dirs: &OutputDirs) -> Result<SavedPuzzle, GenerateError> {
    dirs.create()?;

    let text = write_file(
        dirs.text.join(format!("{}.txt", puzzle.name)),
        text::render(&puzzle.grid, &puzzle.clues, puzzle.include_grid, text::DEFAULT_SPACING),
    )?;

    let program = write_file(
        dirs.program.join(format!("{}.asp", puzzle.name)),
        puzzle.program()?.to_string(),
    )?;

    let image = dirs.image.join(format!("{}.png", puzzle.name));
    trace!("writing {}", image.display());
    raster::render(&puzzle.grid, &puzzle.clues, puzzle.include_grid)?
        .save_with_format(&image, ImageFormat::Png)
        .map_err(|source| GenerateError::Image { path: image.clone(), source })?;

    Ok(SavedPuzzle { text, image, program })
}

/// Save every puzzle of a batch as it is produced, stopping at the first failure.
///
/// Returns the number of puzzles saved.
pub fn save_all<I>(puzzles: I, dirs: &OutputDirs) -> Result<usize, GenerateError>
where
    I: IntoIterator<Item = Result<Puzzle, GenerateError>>,
{
    let mut saved = 0;
    for puzzle in puzzles {
        save_puzzle(&puzzle?, dirs)?;
        saved += 1;
    }

    info!("saved {saved} puzzles to {}, {} and {}", dirs.text.display(), dirs.image.display(), dirs.program.display());
    Ok(saved)
}

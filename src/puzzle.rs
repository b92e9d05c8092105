//! Puzzle assembly: sample a grid, take its clues, then optionally perturb the grid without touching the clues.
//!
//! All randomness comes from one caller-supplied source, drawn in a fixed order per puzzle:
//! every cell of the grid (row major), then the cells to clear, then the cells to fill.

use std::num::NonZero;

use log::{debug, log_enabled, trace, Level};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::cell::Cell;
use crate::clue::Clues;
use crate::error::GenerateError;
use crate::grid::Grid;
use crate::location::{Dimension, Location};
use crate::program::{compile, Program};
use crate::solver::ProgramSolver;

/// How each puzzle of a batch is produced and presented.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PuzzleConfig {
    /// `(width, height)` of every grid.
    pub dims: (Dimension, Dimension),
    /// Show cell contents in the text and image artifacts and pin the filled cells in the program.
    /// Without it only the clue skeleton is emitted.
    pub include_grid: bool,
    /// Number of filled cells to clear after the clues are taken, giving a partially filled hint grid.
    pub remove: usize,
    /// Number of empty cells to fill after the clues are taken, giving a grid that disagrees with its clues.
    pub mistakes: usize,
    /// Puzzle `i` of a batch is named `{prefix}{i}`.
    pub prefix: String,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        let five = NonZero::<usize>::MIN.saturating_add(4);
        Self {
            dims: (five, five),
            include_grid: false,
            remove: 0,
            mistakes: 0,
            prefix: "puzzle_".to_string(),
        }
    }
}

/// The cells a perturbation changed, in the order they were drawn.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Perturbation {
    /// Filled cells that were cleared.
    pub removed: Vec<Location>,
    /// Empty cells that were filled.
    pub added: Vec<Location>,
}

impl Perturbation {
    /// Whether no cell was changed.
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

/// A generated puzzle. `clues` are always those of the grid before perturbation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Puzzle {
    /// File stem of every artifact, `{prefix}{index}`.
    pub name: String,
    /// The sampled grid, after perturbation.
    pub grid: Grid,
    /// Clues of the grid as sampled, before perturbation.
    pub clues: Clues,
    /// What was changed after the clues were taken.
    pub perturbation: Perturbation,
    /// Whether the artifacts show the grid and the program pins it.
    pub include_grid: bool,
}

impl Puzzle {
    /// `(width, height)` of this puzzle's own grid.
    #[inline]
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.grid.dims()
    }

    /// Compile this puzzle. The grid's filled cells are pinned only when `include_grid` is set.
    pub fn program(&self) -> Result<Program, GenerateError> {
        compile(self.dims(), &self.clues, self.include_grid.then_some(&self.grid))
    }

    /// Whether the grid, as perturbed, is still a model of the puzzle's own program.
    pub fn verdict(&self) -> Result<bool, GenerateError> {
        let program = self.program()?;
        Ok(ProgramSolver::from(&program).accepts(&self.grid))
    }
}

fn flip_random<R: Rng + ?Sized>(grid: &mut Grid, mut candidates: Vec<Location>, count: usize, to: Cell, rng: &mut R) -> Vec<Location> {
    candidates.shuffle(rng);
    candidates.truncate(count);
    for location in &candidates {
        trace!("setting {location} to {to}");
        grid.set(*location, to);
    }

    candidates
}

/// Clear `count` filled cells of `grid`, chosen uniformly without replacement.
///
/// Draws nothing when `count` is zero. Fails without drawing if the grid has fewer than `count` filled cells.
pub fn remove_filled<R: Rng + ?Sized>(grid: &mut Grid, count: usize, rng: &mut R) -> Result<Vec<Location>, GenerateError> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let filled = grid.filled_locations();
    if filled.len() < count {
        return Err(GenerateError::NotEnoughFilledCells { requested: count, available: filled.len() });
    }

    Ok(flip_random(grid, filled, count, Cell::Empty, rng))
}

/// Fill `count` empty cells of `grid`, chosen uniformly without replacement.
///
/// Draws nothing when `count` is zero. Fails without drawing if the grid has fewer than `count` empty cells.
pub fn add_mistakes<R: Rng + ?Sized>(grid: &mut Grid, count: usize, rng: &mut R) -> Result<Vec<Location>, GenerateError> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let empty = grid.empty_locations();
    if empty.len() < count {
        return Err(GenerateError::NotEnoughEmptyCells { requested: count, available: empty.len() });
    }

    Ok(flip_random(grid, empty, count, Cell::Filled, rng))
}

/// Produces puzzles one at a time, named `{prefix}0`, `{prefix}1`, ...
///
/// Never ends on its own; see [`generate`] for a batch of fixed size.
pub struct Generator<R: Rng> {
    config: PuzzleConfig,
    rng: R,
    next_index: usize,
}

impl<R: Rng> Generator<R> {
    /// Puzzles are numbered from 0 and drawn from `rng`.
    pub fn new(config: PuzzleConfig, rng: R) -> Self {
        Self { config, rng, next_index: 0 }
    }

    /// The configuration every puzzle follows.
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Sample, extract clues, then clear and fill cells as configured.
    pub fn generate_next(&mut self) -> Result<Puzzle, GenerateError> {
        let name = format!("{}{}", self.config.prefix, self.next_index);
        self.next_index += 1;

        let mut grid = Grid::random(self.config.dims, &mut self.rng);
        let clues = Clues::of(&grid);

        let removed = remove_filled(&mut grid, self.config.remove, &mut self.rng)?;
        let added = add_mistakes(&mut grid, self.config.mistakes, &mut self.rng)?;

        let puzzle = Puzzle {
            name,
            grid,
            clues,
            perturbation: Perturbation { removed, added },
            include_grid: self.config.include_grid,
        };

        if log_enabled!(Level::Debug) {
            debug!(
                "generated {} ({}x{}, {} filled, {} cleared, {} added, consistent: {:?})",
                puzzle.name,
                puzzle.grid.width(),
                puzzle.grid.height(),
                puzzle.grid.count_filled(),
                puzzle.perturbation.removed.len(),
                puzzle.perturbation.added.len(),
                puzzle.verdict().ok(),
            );
        }

        Ok(puzzle)
    }

    /// Give back the random source, e.g. to continue the same stream in another batch.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<R: Rng> Iterator for Generator<R> {
    type Item = Result<Puzzle, GenerateError>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate_next())
    }
}

/// A lazy batch of `count` puzzles.
pub fn generate<R: Rng>(count: usize, config: PuzzleConfig, rng: R) -> std::iter::Take<Generator<R>> {
    Generator::new(config, rng).take(count)
}

#![warn(missing_docs)]

//! # `nonogen`
//!
//! A generator for [nonogram](https://en.wikipedia.org/wiki/Nonogram) puzzles: binary grids described by the run lengths of filled cells in every row and column.
//! Configure a batch with a [`PuzzleConfig`], draw puzzles from a [`Generator`] seeded by the caller, and write each one with [`save_puzzle`](output::save_puzzle),
//! which produces a text rendering, a PNG image and an answer-set program per puzzle.
//!
//! Each puzzle's clues are taken from a uniformly sampled grid. The grid may then be perturbed without touching the clues:
//! clearing filled cells gives a partially filled hint, filling empty cells gives a grid that no longer agrees with its clues.
//!
//! # Internals
//! The clues of a line are the lengths of its maximal runs of filled cells ([`count_groups`](clue::count_groups)).
//! The [`group`] module numbers those runs from 1 in line order, and a line satisfies its clues when group `I` exists with length `L` exactly when clue `I` is `L`.
//!
//! A [`Program`] states the same thing declaratively, for an answer-set solver:
//! 1. Every cell is a free choice, unless the grid is included, in which case exactly the filled cells are given as facts.
//! 2. `sequence_row/4` and `sequence_col/4` find every run of filled cells inductively; a filled cell is a run of length 1, and a run grows by one when the next cell is filled.
//! 3. `group_row/5` and `group_col/5` keep the maximal runs and number them: group 1 has no filled cell before it, and group `I + 1` is the next maximal run after group `I`.
//! 4. Integrity constraints require every clue to have its group and every group to have its clue.
//!
//! [`ProgramSolver`](solver::ProgramSolver) re-expresses that program as a Boolean satisfiability problem, so a compiled puzzle can be checked against a grid without an answer-set solver.

pub use builder::ProgramBuilder;
pub use cell::Cell;
pub use clue::Clues;
pub use error::GenerateError;
pub use grid::Grid;
pub use location::{Dimension, Location};
pub use program::Program;
pub use puzzle::{generate, Generator, Puzzle, PuzzleConfig};

pub mod builder;
pub(crate) mod cell;
pub mod clue;
pub(crate) mod error;
pub(crate) mod grid;
pub mod group;
pub(crate) mod location;
pub(crate) mod logic;
pub mod output;
pub mod program;
pub mod puzzle;
pub mod raster;
pub mod solver;
mod tests;
pub mod text;
#[cfg(feature = "wasm")]
pub mod wasm;

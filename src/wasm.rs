//! JavaScript bindings: a seeded puzzle stream yielding text and program artifacts.

use std::num::NonZero;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use wasm_bindgen::prelude::*;

use crate::puzzle::{Generator, PuzzleConfig};
use crate::text;

/// The text and program artifacts of one generated puzzle.
#[wasm_bindgen]
pub struct WasmPuzzle {
    name: String,
    text: String,
    program: String,
}

#[wasm_bindgen]
impl WasmPuzzle {
    /// File stem of the puzzle.
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.name.clone()
    }

    /// The text rendering.
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }

    /// The answer-set program.
    #[wasm_bindgen(getter)]
    pub fn program(&self) -> String {
        self.program.clone()
    }
}

/// A seeded stream of puzzles.
#[wasm_bindgen]
pub struct WasmGenerator {
    generator: Generator<ChaCha20Rng>,
}

#[wasm_bindgen]
impl WasmGenerator {
    /// Create a generator for `width` by `height` puzzles.
    ///
    /// The `seed` determines the whole sequence of puzzles.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, seed: u64, include_grid: bool, remove: u32, mistakes: u32) -> Result<WasmGenerator, JsError> {
        let (Some(width), Some(height)) = (NonZero::new(width as usize), NonZero::new(height as usize)) else {
            return Err(JsError::new("width and height must be at least 1"));
        };

        let config = PuzzleConfig {
            dims: (width, height),
            include_grid,
            remove: remove as usize,
            mistakes: mistakes as usize,
            ..Default::default()
        };

        Ok(WasmGenerator { generator: Generator::new(config, ChaCha20Rng::seed_from_u64(seed)) })
    }

    /// Generate the next puzzle.
    pub fn next(&mut self) -> Result<WasmPuzzle, JsError> {
        let puzzle = self.generator.generate_next()?;
        Ok(WasmPuzzle {
            text: text::render(&puzzle.grid, &puzzle.clues, puzzle.include_grid, text::DEFAULT_SPACING),
            program: puzzle.program()?.to_string(),
            name: puzzle.name,
        })
    }
}

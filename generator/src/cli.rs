use std::num::NonZeroUsize;
use std::path::PathBuf;

use eyre::{Context, Result};
use log::info;
use nonogen::output::{save_all, OutputDirs};
use nonogen::{generate, PuzzleConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Nonogram puzzle generator
///
/// Writes a text rendering, a PNG image and an answer-set program for every puzzle.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Args, Debug)]
pub(crate) struct Shape {
    /// Number of puzzles per batch.
    #[arg(short, long, default_value_t = 10)]
    count: usize,
    /// Grid width.
    #[arg(long, default_value = "5")]
    width: NonZeroUsize,
    /// Grid height.
    #[arg(long, default_value = "5")]
    height: NonZeroUsize,
    /// Seed of the random stream shared by every puzzle of the run.
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Generate a single batch.
    Batch {
        #[command(flatten)]
        shape: Shape,
        /// Show cells in the text and image, and pin them in the program.
        #[arg(long)]
        include_grid: bool,
        /// Filled cells to clear after the clues are taken.
        #[arg(long, default_value_t = 0)]
        remove: usize,
        /// Empty cells to fill after the clues are taken.
        #[arg(long, default_value_t = 0)]
        mistakes: usize,
        /// Puzzle name prefix; puzzle `i` is named `{prefix}{i}`.
        #[arg(long, default_value = "puzzle_")]
        prefix: String,

        /// Write into `images/`, `text/` and `asp/` under this directory.
        #[arg(short, long, conflicts_with_all = ["text_dir", "image_dir", "program_dir"])]
        out: Option<PathBuf>,
        /// Directory for text renderings.
        #[arg(long, requires_all = ["image_dir", "program_dir"])]
        text_dir: Option<PathBuf>,
        /// Directory for PNG renderings.
        #[arg(long, requires_all = ["text_dir", "program_dir"])]
        image_dir: Option<PathBuf>,
        /// Directory for answer-set programs.
        #[arg(long, requires_all = ["text_dir", "image_dir"])]
        program_dir: Option<PathBuf>,
    },
    /// Generate the four standard batches (empty, fill-in, invalid and valid) under one root.
    Dataset {
        /// Root directory of the dataset.
        #[arg(default_value = ".")]
        root: PathBuf,
        #[command(flatten)]
        shape: Shape,
    },
}

fn output_dirs(
    out: Option<PathBuf>,
    text: Option<PathBuf>,
    image: Option<PathBuf>,
    program: Option<PathBuf>,
) -> OutputDirs {
    match (text, image, program) {
        (Some(text), Some(image), Some(program)) => OutputDirs { text, image, program },
        _ => OutputDirs::under(out.unwrap_or_else(|| PathBuf::from("."))),
    }
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    match subcommand {
        Subcommand::Batch {
            shape,
            include_grid,
            remove,
            mistakes,
            prefix,
            out,
            text_dir,
            image_dir,
            program_dir,
        } => {
            let config = PuzzleConfig {
                dims: (shape.width, shape.height),
                include_grid,
                remove,
                mistakes,
                prefix,
            };
            let dirs = output_dirs(out, text_dir, image_dir, program_dir);
            let rng = ChaCha20Rng::seed_from_u64(shape.seed);

            save_all(generate(shape.count, config, rng), &dirs).wrap_err("failed to generate batch")?;
            Ok(())
        }

        Subcommand::Dataset { root, shape } => {
            let base = PuzzleConfig {
                dims: (shape.width, shape.height),
                ..Default::default()
            };
            let batches = [
                ("empty", base.clone()),
                ("fill-in", PuzzleConfig { include_grid: true, remove: 1, ..base.clone() }),
                ("validity/invalid", PuzzleConfig { include_grid: true, mistakes: 1, ..base.clone() }),
                ("validity/valid", PuzzleConfig { include_grid: true, ..base }),
            ];

            let mut rng = ChaCha20Rng::seed_from_u64(shape.seed);
            for (name, config) in batches {
                let dirs = OutputDirs::under(root.join(name));
                save_all(generate(shape.count, config, &mut rng), &dirs)
                    .wrap_err_with(|| format!("failed to generate {name} batch"))?;
            }

            info!("dataset written to {}", root.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::num::NonZero;

    use itertools::Itertools;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use crate::clue::{canonical_line, count_groups, min_line_len};
    use crate::group::{grid_satisfies, groups, Axis, Group};
    use crate::output::{save_all, save_puzzle, OutputDirs};
    use crate::program::compile;
    use crate::puzzle::{add_mistakes, remove_filled};
    use crate::solver::ProgramSolver;
    use crate::{generate, Cell, Clues, GenerateError, Grid, Location, Program, PuzzleConfig};

    fn grid(rows: &[&[u8]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    fn program_for(grid: &Grid, clues: &Clues, pinned: bool) -> Program {
        compile(grid.dims(), clues, pinned.then_some(grid)).unwrap()
    }

    fn dims(width: usize, height: usize) -> (NonZero<usize>, NonZero<usize>) {
        (NonZero::new(width).unwrap(), NonZero::new(height).unwrap())
    }

    #[test]
    fn single_run_of_two() {
        let solution = grid(&[&[1, 1, 0]]);
        let clues = Clues::of(&solution);
        assert_eq!(clues.rows, vec![vec![2]]);

        let program = program_for(&solution, &clues, false);
        let solver = ProgramSolver::from(&program);
        assert!(solver.accepts(&solution));
        // too short, too long, split in two
        assert!(!solver.accepts(&grid(&[&[1, 0, 0]])));
        assert!(!solver.accepts(&grid(&[&[1, 1, 1]])));
        assert!(!solver.accepts(&grid(&[&[1, 0, 1]])));
        assert_eq!(solver.models(10).unwrap(), vec![solution]);
    }

    #[test]
    fn all_empty_has_only_the_empty_model() {
        let empty = Grid::with_dims(dims(5, 5));
        let clues = Clues::of(&empty);
        assert!(clues.rows.iter().chain(clues.cols.iter()).all(Vec::is_empty));

        for pinned in [true, false] {
            let program = program_for(&empty, &clues, pinned);
            assert_eq!(ProgramSolver::from(&program).models(10).unwrap(), vec![empty.clone()]);
        }

        let text = program_for(&empty, &clues, true).to_string();
        assert!(!text.lines().any(|line| line.starts_with("row_clue(") || line.starts_with("col_clue(")));
        assert!(text.contains("% no filled cells\n"));
        assert!(text.contains("% row 5 has no groups\n% col 1 has no groups\n"));
    }

    #[test]
    fn second_group_follows_the_first() {
        let solution = grid(&[&[1, 0, 1]]);
        let clues = Clues::of(&solution);
        assert_eq!(clues.rows, vec![vec![1, 1]]);
        assert_eq!(groups(&solution.line(Axis::Row, 0).unwrap()), vec![
            Group { index: 1, length: 1, start: 1, end: 1 },
            Group { index: 2, length: 1, start: 3, end: 3 },
        ]);

        let program = program_for(&solution, &clues, false);
        let solver = ProgramSolver::from(&program);
        assert!(solver.accepts(&solution));
        assert!(!solver.accepts(&grid(&[&[1, 1, 0]])));
        assert!(!solver.accepts(&grid(&[&[0, 1, 1]])));
    }

    #[test]
    fn pinned_cells_must_agree() {
        let solution = grid(&[&[1, 0], &[1, 1]]);
        let clues = Clues::of(&solution);
        let mut hint = solution.clone();
        hint.set(Location(0, 1), Cell::Empty);

        // clues from the solution, cells from the hint: no model
        let program = program_for(&hint, &clues, true);
        assert!(ProgramSolver::from(&program).models(1).is_err());

        let program = program_for(&solution, &clues, true);
        assert_eq!(ProgramSolver::from(&program).solve(), Ok(solution));
    }

    #[test]
    fn verdict_reflects_perturbation() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let valid = PuzzleConfig { include_grid: true, ..Default::default() };
        let fill_in = PuzzleConfig { include_grid: true, remove: 1, ..Default::default() };
        let invalid = PuzzleConfig { include_grid: true, mistakes: 1, ..Default::default() };

        for puzzle in generate(5, valid, &mut rng) {
            assert!(puzzle.unwrap().verdict().unwrap());
        }
        for config in [fill_in, invalid] {
            for puzzle in generate(5, config, &mut rng) {
                let puzzle = puzzle.unwrap();
                assert!(!puzzle.perturbation.is_empty());
                assert!(!puzzle.verdict().unwrap());
            }
        }
    }

    #[test]
    fn too_many_removals_fail_the_batch() {
        let config = PuzzleConfig { remove: 26, ..Default::default() };
        let result = generate(1, config, ChaCha20Rng::seed_from_u64(0)).next().unwrap();
        assert!(matches!(result, Err(GenerateError::NotEnoughFilledCells { requested: 26, .. })));
    }

    #[test]
    fn saves_three_artifacts_with_own_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let dirs = OutputDirs::under(dir.path().join("fill-in"));
        let config = PuzzleConfig { dims: dims(4, 3), include_grid: true, remove: 1, ..Default::default() };

        let puzzle = generate(1, config, ChaCha20Rng::seed_from_u64(7)).next().unwrap().unwrap();
        let saved = save_puzzle(&puzzle, &dirs).unwrap();

        assert_eq!(saved.text, dirs.text.join("puzzle_0.txt"));
        assert_eq!(saved.image, dirs.image.join("puzzle_0.png"));
        assert_eq!(saved.program, dirs.program.join("puzzle_0.asp"));

        let program = fs::read_to_string(&saved.program).unwrap();
        assert!(program.starts_with("#const w = 4. #const h = 3.\n"));
        for location in puzzle.grid.filled_locations() {
            let (row, col) = location.one_based();
            assert!(program.contains(&format!("filled({row}, {col}).\n")));
        }

        let text = fs::read_to_string(&saved.text).unwrap();
        assert_eq!(text.lines().count(), puzzle.clues.max_count(Axis::Col).max(1) + 3);

        let png = fs::read(&saved.image).unwrap();
        assert!(png.starts_with(b"\x89PNG"));
    }

    #[test]
    fn same_seed_same_bytes() {
        let run = |root: &std::path::Path| {
            let mut rng = ChaCha20Rng::seed_from_u64(0);
            let configs = [
                PuzzleConfig::default(),
                PuzzleConfig { include_grid: true, mistakes: 1, ..Default::default() },
            ];
            for (i, config) in configs.into_iter().enumerate() {
                save_all(generate(3, config, &mut rng), &OutputDirs::under(root.join(i.to_string()))).unwrap();
            }
        };

        let (a, b) = (tempfile::tempdir().unwrap(), tempfile::tempdir().unwrap());
        run(a.path());
        run(b.path());

        for batch in ["0", "1"] {
            for (sub, ext) in [("text", "txt"), ("images", "png"), ("asp", "asp")] {
                for i in 0..3 {
                    let file = format!("{batch}/{sub}/puzzle_{i}.{ext}");
                    assert_eq!(fs::read(a.path().join(&file)).unwrap(), fs::read(b.path().join(&file)).unwrap(), "{file}");
                }
            }
        }
    }

    fn reference_runs(line: &[bool]) -> Vec<usize> {
        line.split(|filled| !filled)
            .filter(|run| !run.is_empty())
            .map(<[bool]>::len)
            .collect()
    }

    fn arbitrary_grid() -> impl Strategy<Value = Vec<Vec<bool>>> {
        (1..7_usize, 1..7_usize).prop_flat_map(|(width, height)| {
            prop::collection::vec(prop::collection::vec(any::<bool>(), width), height)
        })
    }

    fn to_grid(rows: &[Vec<bool>]) -> Grid {
        Grid::from_rows(&rows.iter().map(|row| row.iter().map(|b| u8::from(*b)).collect_vec()).collect_vec()).unwrap()
    }

    proptest! {
        #[test]
        fn proptest_canonical_placement_roundtrip(
            clues in prop::collection::vec(1..5_usize, 0..5),
            slack in 0..4_usize,
        ) {
            let len = min_line_len(&clues) + slack;
            let line = canonical_line(&clues, len).unwrap();
            prop_assert_eq!(line.len(), len);
            prop_assert_eq!(count_groups(line), clues);
        }

        #[test]
        fn proptest_clues_match_reference_scan(rows in arbitrary_grid()) {
            let grid = to_grid(&rows);
            let clues = Clues::of(&grid);

            for (y, row) in rows.iter().enumerate() {
                prop_assert_eq!(&clues.rows[y], &reference_runs(row));
            }
            for x in 0..grid.width() {
                let col = rows.iter().map(|row| row[x]).collect_vec();
                prop_assert_eq!(&clues.cols[x], &reference_runs(&col));
            }
            for axis in [Axis::Row, Axis::Col] {
                for (line, clue_line) in grid.lines(axis).iter().zip(clues.along(axis)) {
                    let lengths = groups(line).iter().map(|g| g.length).collect_vec();
                    prop_assert_eq!(&lengths, clue_line);
                }
            }
        }

        #[test]
        fn proptest_grid_is_model_of_own_program(rows in arbitrary_grid()) {
            let grid = to_grid(&rows);
            let clues = Clues::of(&grid);
            prop_assert!(grid_satisfies(&grid, &clues));

            let program = program_for(&grid, &clues, false);
            prop_assert!(ProgramSolver::from(&program).accepts(&grid));
        }

        #[test]
        fn proptest_perturbation_is_monotone(rows in arbitrary_grid(), count in 0..10_usize, seed: u64) {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let original = to_grid(&rows);
            let filled = original.count_filled();
            let empty = original.width() * original.height() - filled;

            let mut grid = original.clone();
            match remove_filled(&mut grid, count, &mut rng) {
                Ok(removed) => {
                    prop_assert_eq!(removed.len(), count);
                    prop_assert_eq!(grid.count_filled(), filled - count);
                }
                Err(_) => {
                    prop_assert!(count > filled);
                    prop_assert_eq!(&grid, &original);
                }
            }

            let mut grid = original.clone();
            match add_mistakes(&mut grid, count, &mut rng) {
                Ok(added) => {
                    prop_assert_eq!(added.len(), count);
                    prop_assert_eq!(grid.count_filled(), filled + count);
                }
                Err(_) => {
                    prop_assert!(count > empty);
                    prop_assert_eq!(&grid, &original);
                }
            }
        }
    }
}

//! A SAT-based model checker for compiled programs.

use std::collections::HashSet;
use std::convert::identity;

use itertools::Itertools;
use varisat::{CnfFormula, ExtendFormula, Lit, Solver, Var};

use crate::cell::Cell;
use crate::grid::Grid;
use crate::group::Axis;
use crate::location::{Coord, Location};
use crate::logic::exactly_one;
use crate::program::Program;

/// Reasons a [`ProgramSolver`] may fail.
#[derive(Debug, Eq, PartialEq)]
pub enum SolverFailure {
    /// The SAT solver detected a logical inconsistency, i.e. the program as stated has no model.
    Inconsistent,
    /// The SAT solver reported a model but did not hand it over.
    /// This should probably never happen.
    NoModelFound,
}

/// The placements one clue of one line may take.
struct ClueStarts {
    clue: usize,
    // (zero-based start, var)
    starts: Vec<(Coord, Var)>,
}

/// One row or column: its cell variables, in line order, and the start variables of its clues.
struct LineEncoding {
    cells: Vec<Var>,
    clues: Vec<ClueStarts>,
}

/// A model checker for a compiled [`Program`], independent of any answer-set solver.
///
/// The program's semantics are re-expressed as a Boolean satisfiability problem with one variable per cell
/// and one variable per possible start position of each clue:
/// every clue starts exactly once, each clue starts after the previous one ends with at least one cell between them,
/// and a cell is filled if and only if some clue covers it.
/// Fixed cells become assumptions.
///
/// Use [`Self::accepts`] to check a candidate grid, [`Self::solve`] for any model and [`Self::models`] to enumerate them.
pub struct ProgramSolver<'a> {
    program: &'a Program,
    lines: Vec<LineEncoding>,
}

impl<'a> From<&'a Program> for ProgramSolver<'a> {
    fn from(program: &'a Program) -> Self {
        let (width, height) = (program.dims.0.get(), program.dims.1.get());
        // cell variables come first, row major
        let mut next_var = width * height;
        let cell_var = |location: Location| Var::from_index(location.1 * width + location.0);

        let mut lines = Vec::with_capacity(width + height);
        for axis in [Axis::Row, Axis::Col] {
            let (line_count, line_len) = match axis {
                Axis::Row => (height, width),
                Axis::Col => (width, height),
            };

            for line_id in 0..line_count {
                let cells = (0..line_len)
                    .map(|pos| cell_var(match axis {
                        Axis::Row => Location(pos, line_id),
                        Axis::Col => Location(line_id, pos),
                    }))
                    .collect_vec();

                let clue_line = program.clues.along(axis).get(line_id).cloned().unwrap_or_default();
                let mut clues = Vec::with_capacity(clue_line.len());
                for (i, clue) in clue_line.iter().enumerate() {
                    // room taken by the clues before and after this one
                    let before: usize = clue_line[..i].iter().map(|c| c + 1).sum();
                    let after: usize = clue_line[i + 1..].iter().map(|c| c + 1).sum();
                    let starts = (before..=line_len.saturating_sub(after + clue))
                        .filter(|start| start + clue + after <= line_len)
                        .map(|start| {
                            let var = Var::from_index(next_var);
                            next_var += 1;
                            (start, var)
                        })
                        .collect_vec();

                    clues.push(ClueStarts { clue: *clue, starts });
                }

                lines.push(LineEncoding { cells, clues });
            }
        }

        Self { program, lines }
    }
}

impl ProgramSolver<'_> {
    #[inline]
    fn cell_var(&self, location: Location) -> Var {
        Var::from_index(location.1 * self.program.dims.0.get() + location.0)
    }

    fn all_locations(&self) -> impl Iterator<Item = Location> {
        let (width, height) = (self.program.dims.0.get(), self.program.dims.1.get());
        (0..height).cartesian_product(0..width).map(|(y, x)| Location(x, y))
    }

    fn formulae(&self) -> Vec<CnfFormula> {
        let mut formulae = Vec::with_capacity(self.lines.len());

        for line in &self.lines {
            let mut clauses: Vec<Vec<Lit>> = Vec::new();

            for clue in &line.clues {
                // every clue is placed exactly once
                clauses.extend(exactly_one(&clue.starts.iter().map(|(_, var)| *var).collect_vec()));

                // a placed clue fills every cell it covers
                for (start, var) in &clue.starts {
                    clauses.extend((*start..start + clue.clue)
                        .map(|pos| vec![var.negative(), line.cells[pos].positive()]));
                }
            }

            // clue I+1 starts at least one cell after clue I ends
            for (this, next) in line.clues.iter().tuple_windows() {
                for ((start, var), (next_start, next_var)) in this.starts.iter().cartesian_product(next.starts.iter()) {
                    if *next_start <= start + this.clue {
                        clauses.push(vec![var.negative(), next_var.negative()]);
                    }
                }
            }

            // a filled cell is covered by some placed clue
            for (pos, cell) in line.cells.iter().enumerate() {
                let mut terms = vec![cell.negative()];
                terms.extend(line.clues.iter()
                    .flat_map(|clue| clue.starts.iter()
                        .filter(move |(start, _)| (*start..start + clue.clue).contains(&pos))
                        .map(|(_, var)| var.positive())));
                clauses.push(terms);
            }

            formulae.push(CnfFormula::from(clauses));
        }

        formulae
    }

    /// Whether every clue of every line has room to be placed at all.
    fn fits(&self) -> bool {
        self.lines.iter().all(|line| line.clues.iter().all(|clue| !clue.starts.is_empty()))
    }

    /// Assumptions pinning every cell when the program fixes its cells.
    fn fixed_assumptions(&self) -> Vec<Lit> {
        match &self.program.fixed {
            None => Vec::new(),
            Some(fixed) => {
                let fixed: HashSet<&Location> = fixed.iter().collect();
                self.all_locations()
                    .map(|location| self.cell_var(location).lit(fixed.contains(&location)))
                    .collect_vec()
            }
        }
    }

    fn new_solver(&self) -> Solver<'static> {
        let mut solver = Solver::new();
        self.formulae().iter().for_each(|formula| solver.add_formula(formula));
        solver
    }

    fn read_grid(&self, model: &[Lit]) -> Grid {
        let positive: HashSet<Var> = model.iter()
            .filter(|lit| lit.is_positive())
            .map(|lit| lit.var())
            .collect();

        let mut grid = Grid::with_dims(self.program.dims);
        for location in self.all_locations() {
            grid.set(location, Cell::from(positive.contains(&self.cell_var(location))));
        }

        grid
    }

    /// Whether `grid` is a model of the program: it agrees with every clue and, if cells are fixed, with them too.
    ///
    /// A grid of different dimensions is never a model.
    pub fn accepts(&self, grid: &Grid) -> bool {
        if grid.dims() != self.program.dims || !self.fits() {
            return false;
        }

        let mut assumptions = self.fixed_assumptions();
        assumptions.extend(self.all_locations()
            .map(|location| self.cell_var(location).lit(grid.get(location).is_some_and(Cell::is_filled))));

        let mut solver = self.new_solver();
        solver.assume(&assumptions);
        solver.solve().is_ok_and(identity)
    }

    /// Find any model of the program.
    pub fn solve(&self) -> Result<Grid, SolverFailure> {
        self.models(1)?.pop().ok_or(SolverFailure::Inconsistent)
    }

    /// Enumerate up to `limit` distinct models, blocking each one once found.
    ///
    /// Returns [`SolverFailure::Inconsistent`] if there is no model at all.
    pub fn models(&self, limit: usize) -> Result<Vec<Grid>, SolverFailure> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        if !self.fits() {
            return Err(SolverFailure::Inconsistent);
        }

        let mut solver = self.new_solver();
        let assumptions = self.fixed_assumptions();
        let mut found = Vec::new();

        while found.len() < limit {
            solver.assume(&assumptions);
            if !solver.solve().is_ok_and(identity) {
                break;
            }
            let model = solver.model().ok_or(SolverFailure::NoModelFound)?;
            let grid = self.read_grid(&model);

            // at least one cell differs from this model
            let blocking = self.all_locations()
                .map(|location| self.cell_var(location).lit(!grid.get(location).is_some_and(Cell::is_filled)))
                .collect_vec();
            solver.add_clause(&blocking);

            found.push(grid);
        }

        if found.is_empty() {
            return Err(SolverFailure::Inconsistent);
        }

        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clue::Clues;
    use crate::program::compile;

    #[test]
    fn unique_model_is_found() {
        let grid = Grid::from_rows(&[[1_u8, 1, 0], [0, 1, 1], [1, 0, 1]]).unwrap();
        let program = compile(grid.dims(), &Clues::of(&grid), None).unwrap();
        let solver = ProgramSolver::from(&program);

        assert!(solver.accepts(&grid));
        assert!(solver.models(10).unwrap().contains(&grid));
    }

    #[test]
    fn oversized_clue_has_no_model() {
        let grid = Grid::from_rows(&[[0_u8, 0, 0]]).unwrap();
        let mut clues = Clues::of(&grid);
        clues.rows[0] = vec![2, 2];
        let program = compile(grid.dims(), &clues, None).unwrap();

        assert_eq!(ProgramSolver::from(&program).solve(), Err(SolverFailure::Inconsistent));
    }

    #[test]
    fn zero_limit_finds_nothing() {
        let grid = Grid::from_rows(&[[1_u8]]).unwrap();
        let program = compile(grid.dims(), &Clues::of(&grid), None).unwrap();
        assert_eq!(ProgramSolver::from(&program).models(0), Ok(vec![]));
    }
}

//! This module contains logic for generating random Sudoku puzzles.
//!
//! Generation of puzzles is done by first generating a full grid with a
//! [Generator] and then removing some clues using a [PuzzleBuilder].

use crate::{CELL_COUNT, Difficulty, MAX_DIGIT, MIN_DIGIT, SIZE, SudokuGrid};
use crate::constraint;
use crate::error::{SudokuError, SudokuResult};
use crate::validator;

use rand::Rng;
use rand::rngs::ThreadRng;

/// The maximum number of digit placements a single [Generator::fill] search
/// may attempt before it is aborted as unsatisfiable. Filling an empty grid
/// typically takes a few hundred placements; the cap only guards against
/// adversarial partial grids whose search space degenerates.
const MAX_PLACEMENTS: usize = 1_000_000;

/// A generator randomly fills a [SudokuGrid] such that it contains no
/// missing digits and no rule violations. It uses a random number generator
/// to decide the content. For most cases, sensible defaults are provided by
/// [Generator::new_default]; injecting a seeded random number generator
/// makes generation deterministic.
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..len.saturating_sub(1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec(&mut self, grid: &mut SudokuGrid, index: usize,
            placements: &mut usize) -> SudokuResult<bool> {
        if index == CELL_COUNT {
            return Ok(true);
        }

        let row = index / SIZE;
        let column = index % SIZE;

        if grid.get_cell(row, column)?.is_some() {
            return self.fill_rec(grid, index + 1, placements);
        }

        for digit in shuffle(&mut self.rng, MIN_DIGIT..=MAX_DIGIT) {
            *placements += 1;

            if *placements > MAX_PLACEMENTS {
                return Err(SudokuError::Unsatisfiable);
            }

            if constraint::is_valid_placement(grid, row, column, digit)? {
                grid.set_cell(row, column, digit)?;

                if self.fill_rec(grid, index + 1, placements)? {
                    return Ok(true);
                }

                grid.clear_cell(row, column)?;
            }
        }

        Ok(false)
    }

    /// Fills the given [SudokuGrid] with random digits that violate no rule
    /// and match all already present digits. The search backtracks over the
    /// cells in row-major order, trying the digits of each empty cell in
    /// uniformly shuffled order. If filling is not possible, an error will
    /// be returned.
    ///
    /// If no error is returned, it is guaranteed that
    /// [check_consistency](crate::validator::check_consistency) on `grid`
    /// reports it as solved after this operation. Otherwise, it remains
    /// unchanged.
    ///
    /// # Arguments
    ///
    /// * `grid`: The grid to fill with random digits.
    ///
    /// # Errors
    ///
    /// * `SudokuError::Unsatisfiable` If there is no set of digits that can
    /// be entered into the grid without violating a rule or changing digits
    /// already present, or if the search exceeded its step cap.
    pub fn fill(&mut self, grid: &mut SudokuGrid) -> SudokuResult<()> {
        if !validator::check_consistency(grid).valid {
            return Err(SudokuError::Unsatisfiable);
        }

        let mut work = grid.clone();
        let mut placements = 0;

        if self.fill_rec(&mut work, 0, &mut placements)? {
            *grid = work;
            Ok(())
        }
        else {
            Err(SudokuError::Unsatisfiable)
        }
    }

    /// Generates a new random solved [SudokuGrid], that is, a full grid in
    /// which every row, column, and box contains each digit exactly once.
    ///
    /// An empty grid always has valid completions, so this operation cannot
    /// fail. Different calls yield different grids with overwhelming
    /// probability; with an injected seeded random number generator the
    /// output is reproducible.
    pub fn generate_solved(&mut self) -> SudokuGrid {
        loop {
            let mut grid = SudokuGrid::new_empty();

            // The step cap is orders of magnitude beyond what filling an
            // empty grid needs, so this retry is essentially never taken.
            if self.fill(&mut grid).is_ok() {
                return grid;
            }
        }
    }
}

/// A puzzle builder derives a playable puzzle from a solved grid by clearing
/// a randomly selected set of cells. The number of cleared cells is
/// determined by the [Difficulty]. A random number generator decides which
/// cells are cleared.
///
/// Note that the builder does *not* verify that the resulting puzzle has a
/// unique solution. The puzzle is guaranteed to stem from the given solved
/// grid and to be free of rule violations, but especially at higher
/// difficulties it may admit completions different from that solution.
pub struct PuzzleBuilder<R: Rng> {
    rng: R
}

impl PuzzleBuilder<ThreadRng> {

    /// Creates a new puzzle builder that uses a [ThreadRng] to decide which
    /// cells are cleared.
    pub fn new_default() -> PuzzleBuilder<ThreadRng> {
        PuzzleBuilder::new(rand::thread_rng())
    }
}

impl<R: Rng> PuzzleBuilder<R> {

    /// Creates a new puzzle builder that uses the given random number
    /// generator to decide which cells are cleared.
    pub fn new(rng: R) -> PuzzleBuilder<R> {
        PuzzleBuilder {
            rng
        }
    }

    /// Derives a puzzle from the given solved grid by clearing the first
    /// [Difficulty::cells_to_remove] positions of a uniformly shuffled
    /// ordering of all 81 cells. The remaining cells are the givens of the
    /// puzzle; each equals the corresponding cell of `solution`.
    ///
    /// # Arguments
    ///
    /// * `solution`: The solved grid to derive the puzzle from. Must be
    /// full. Its validity is the caller's responsibility; grids produced by
    /// [Generator::generate_solved] always qualify.
    /// * `difficulty`: The difficulty tier determining how many cells are
    /// cleared.
    ///
    /// # Errors
    ///
    /// * `SudokuError::IncompleteSolution` If `solution` contains empty
    /// cells.
    pub fn build_puzzle(&mut self, solution: &SudokuGrid,
            difficulty: Difficulty) -> SudokuResult<SudokuGrid> {
        if !solution.is_full() {
            return Err(SudokuError::IncompleteSolution);
        }

        let mut puzzle = solution.clone();
        let indices = shuffle(&mut self.rng, 0..CELL_COUNT);

        for &index in indices.iter().take(difficulty.cells_to_remove()) {
            puzzle.clear_cell(index / SIZE, index % SIZE)?;
        }

        Ok(puzzle)
    }
}

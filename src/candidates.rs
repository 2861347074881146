//! This module contains the candidate computation used for assisting
//! players.
//!
//! For every empty cell, the candidates are the digits which
//! [is_valid_placement](crate::constraint::is_valid_placement) accepts given
//! the current placements. This is a one-step consistency filter: digits are
//! only excluded by direct conflicts, not by reasoning about other empty
//! cells. It may therefore keep more candidates than a human applying naked
//! singles or pairs would, which is the intended scope of the assist feature.

use crate::{CELL_COUNT, MAX_DIGIT, MIN_DIGIT, SIZE, SudokuGrid, index};
use crate::constraint;
use crate::error::SudokuResult;
use crate::util::DigitSet;

/// The candidate digits of every cell of a grid, as computed by
/// [compute_candidates]. Cells that are filled have no candidate set; every
/// empty cell has one, though it may be empty if the cell is stuck.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateMap {
    cells: [Option<DigitSet>; CELL_COUNT]
}

impl CandidateMap {

    /// Gets the candidate set of the cell at the specified position, or
    /// `None` if that cell is filled.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get(&self, row: usize, column: usize)
            -> SudokuResult<Option<DigitSet>> {
        crate::check_coordinates(row, column)?;
        Ok(self.cells[index(row, column)])
    }

    /// Returns an iterator over the empty cells and their candidate sets, in
    /// row-major order. Items are of the form `((row, column), candidates)`.
    pub fn iter(&self)
            -> impl Iterator<Item = ((usize, usize), DigitSet)> + '_ {
        self.cells.iter()
            .enumerate()
            .filter_map(|(i, set)|
                set.map(|set| ((i / SIZE, i % SIZE), set)))
    }
}

/// Computes the candidate set of the cell at the specified position, that
/// is, the set of all digits which
/// [is_valid_placement](crate::constraint::is_valid_placement) accepts for
/// it. For a filled cell, `None` is returned.
///
/// # Arguments
///
/// * `grid`: The grid whose placements constrain the cell.
/// * `row`: The row (y-coordinate) of the queried cell. Must be in the range
/// `[0, 9[`.
/// * `column`: The column (x-coordinate) of the queried cell. Must be in the
/// range `[0, 9[`.
///
/// # Errors
///
/// If either `row` or `column` are not in the specified range. In that case,
/// `SudokuError::OutOfBounds` is returned.
pub fn candidates_in_cell(grid: &SudokuGrid, row: usize, column: usize)
        -> SudokuResult<Option<DigitSet>> {
    if grid.get_cell(row, column)?.is_some() {
        return Ok(None);
    }

    let mut candidates = DigitSet::empty();

    for digit in MIN_DIGIT..=MAX_DIGIT {
        if constraint::is_valid_placement(grid, row, column, digit)? {
            candidates.insert(digit).unwrap();
        }
    }

    Ok(Some(candidates))
}

/// Computes the candidate sets of all empty cells of the given grid. Filled
/// cells have no candidate set in the result.
///
/// The candidates are recomputed from scratch on every call; the result is
/// derived data and holds no authority over the grid.
pub fn compute_candidates(grid: &SudokuGrid) -> CandidateMap {
    let mut cells = [None; CELL_COUNT];

    for row in 0..SIZE {
        for column in 0..SIZE {
            cells[index(row, column)] =
                candidates_in_cell(grid, row, column).unwrap();
        }
    }

    CandidateMap {
        cells
    }
}

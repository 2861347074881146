//! This module contains the placement legality check that underlies the
//! generator, the validator, and the candidate computation.
//!
//! Classic Sudoku rules are a conjunction of three conditions: no duplicate
//! digit in a row, in a column, and in a 3x3 box. [is_valid_placement]
//! checks a proposed digit for one cell against all three.

use crate::{BLOCK_SIZE, MAX_DIGIT, MIN_DIGIT, SIZE, SudokuGrid};
use crate::error::{SudokuError, SudokuResult};

/// Indicates whether the given digit could legally occupy the cell at the
/// specified position, that is, whether it occupies none of the other cells
/// of the same row, column, and 3x3 box.
///
/// The cell under test itself is excluded from the scan, so the check behaves
/// as if that cell were empty. Callers may therefore probe a cell that
/// currently holds the digit in question without clearing it first.
///
/// This is a pure function which scans at most 27 cells.
///
/// # Arguments
///
/// * `grid`: The grid whose placements constrain the tested cell.
/// * `row`: The row (y-coordinate) of the tested cell. Must be in the range
/// `[0, 9[`.
/// * `column`: The column (x-coordinate) of the tested cell. Must be in the
/// range `[0, 9[`.
/// * `digit`: The digit proposed for the tested cell. Must be in the range
/// `[1, 9]`.
///
/// # Errors
///
/// * `SudokuError::OutOfBounds` If either `row` or `column` are not in the
/// specified range.
/// * `SudokuError::InvalidDigit` If `digit` is not in the specified range.
pub fn is_valid_placement(grid: &SudokuGrid, row: usize, column: usize,
        digit: u8) -> SudokuResult<bool> {
    if row >= SIZE || column >= SIZE {
        return Err(SudokuError::OutOfBounds);
    }

    if digit < MIN_DIGIT || digit > MAX_DIGIT {
        return Err(SudokuError::InvalidDigit);
    }

    for c in 0..SIZE {
        if c != column && grid.has_digit(row, c, digit)? {
            return Ok(false);
        }
    }

    for r in 0..SIZE {
        if r != row && grid.has_digit(r, column, digit)? {
            return Ok(false);
        }
    }

    let box_row = row / BLOCK_SIZE * BLOCK_SIZE;
    let box_column = column / BLOCK_SIZE * BLOCK_SIZE;

    for r in box_row..(box_row + BLOCK_SIZE) {
        for c in box_column..(box_column + BLOCK_SIZE) {
            if (r, c) != (row, column) && grid.has_digit(r, c, digit)? {
                return Ok(false);
            }
        }
    }

    Ok(true)
}

// A canonical solved grid used by test cases across the crate. Row 0 is
// [5,3,4,6,7,8,9,1,2].
#[cfg(test)]
pub(crate) const SOLVED_GRID_CODE: &str = "\
    5,3,4,6,7,8,9,1,2,\
    6,7,2,1,9,5,3,4,8,\
    1,9,8,3,4,2,5,6,7,\
    8,5,9,7,6,1,4,2,3,\
    4,2,6,8,5,3,7,9,1,\
    7,1,3,9,2,4,8,5,6,\
    9,6,1,5,3,7,2,8,4,\
    2,8,7,4,1,9,6,3,5,\
    3,4,5,2,8,6,1,7,9";

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn empty_grid_accepts_everything() {
        let grid = SudokuGrid::new_empty();

        for digit in 1..=9 {
            assert!(is_valid_placement(&grid, 0, 0, digit).unwrap());
            assert!(is_valid_placement(&grid, 8, 8, digit).unwrap());
        }
    }

    #[test]
    fn row_conflict_detected() {
        let mut grid = SudokuGrid::new_empty();
        grid.set_cell(0, 3, 5).unwrap();

        assert!(!is_valid_placement(&grid, 0, 0, 5).unwrap());
        assert!(!is_valid_placement(&grid, 0, 8, 5).unwrap());
        assert!(is_valid_placement(&grid, 0, 0, 6).unwrap());
        assert!(is_valid_placement(&grid, 1, 0, 5).unwrap());
    }

    #[test]
    fn column_conflict_detected() {
        let mut grid = SudokuGrid::new_empty();
        grid.set_cell(4, 2, 8).unwrap();

        assert!(!is_valid_placement(&grid, 0, 2, 8).unwrap());
        assert!(!is_valid_placement(&grid, 8, 2, 8).unwrap());
        assert!(is_valid_placement(&grid, 0, 2, 7).unwrap());
    }

    #[test]
    fn box_conflict_detected() {
        let mut grid = SudokuGrid::new_empty();
        grid.set_cell(4, 4, 1).unwrap();

        // (3, 5) shares neither row nor column with (4, 4), only the box.
        assert!(!is_valid_placement(&grid, 3, 5, 1).unwrap());
        assert!(is_valid_placement(&grid, 3, 5, 2).unwrap());
        // (3, 6) is in the neighboring box.
        assert!(is_valid_placement(&grid, 3, 6, 1).unwrap());
    }

    #[test]
    fn tested_cell_is_excluded() {
        let grid = SudokuGrid::parse(SOLVED_GRID_CODE).unwrap();

        // Cell (0, 0) holds the only 5 of its row, column, and box, so with
        // the cell itself excluded the placement is legal.
        assert!(is_valid_placement(&grid, 0, 0, 5).unwrap());
        // A different digit conflicts with its current holder.
        assert!(!is_valid_placement(&grid, 0, 0, 3).unwrap());
    }

    #[test]
    fn solved_grid_accepts_own_digits_only() {
        let grid = SudokuGrid::parse(SOLVED_GRID_CODE).unwrap();

        for row in 0..SIZE {
            for column in 0..SIZE {
                let content = grid.get_cell(row, column).unwrap().unwrap();

                for digit in 1..=9 {
                    let valid =
                        is_valid_placement(&grid, row, column, digit).unwrap();
                    assert_eq!(digit == content, valid);
                }
            }
        }
    }

    #[test]
    fn malformed_input_rejected() {
        let grid = SudokuGrid::new_empty();

        assert_eq!(Err(SudokuError::OutOfBounds),
            is_valid_placement(&grid, 9, 0, 1));
        assert_eq!(Err(SudokuError::OutOfBounds),
            is_valid_placement(&grid, 0, 9, 1));
        assert_eq!(Err(SudokuError::InvalidDigit),
            is_valid_placement(&grid, 0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidDigit),
            is_valid_placement(&grid, 0, 0, 10));
    }
}

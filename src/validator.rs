//! This module contains the logic for checking grids for rule violations and
//! completeness.
//!
//! A grid can be complete but invalid (conflicting duplicates), valid but
//! incomplete (partially filled without conflicts), or valid and complete.
//! Only the last combination constitutes a solved Sudoku, see
//! [Consistency::is_solved].

use crate::{SIZE, SudokuGrid};
use crate::constraint;

/// The result of [check_consistency]: whether a grid is free of rule
/// violations and whether it is completely filled.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Consistency {

    /// `true` if no placed digit conflicts with another placement in its
    /// row, column, or box.
    pub valid: bool,

    /// `true` if every cell of the grid is filled with a digit.
    pub complete: bool
}

impl Consistency {

    /// Indicates whether the checked grid is a solved Sudoku, that is, both
    /// valid and complete. This is the win condition of a game.
    pub fn is_solved(&self) -> bool {
        self.valid && self.complete
    }
}

/// Checks the given grid for rule violations and completeness. Every placed
/// digit is verified against its row, column, and box; the scan stops at the
/// first violation. Empty cells never cause a violation, they only prevent
/// completeness.
pub fn check_consistency(grid: &SudokuGrid) -> Consistency {
    let complete = grid.is_full();

    for row in 0..SIZE {
        for column in 0..SIZE {
            if let Some(digit) = grid.get_cell(row, column).unwrap() {
                if !constraint::is_valid_placement(grid, row, column, digit)
                        .unwrap() {
                    return Consistency {
                        valid: false,
                        complete
                    };
                }
            }
        }
    }

    Consistency {
        valid: true,
        complete
    }
}

//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing grids, see [SudokuParseError](enum.SudokuParseError.html) for
/// that.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the specified coordinates (row and column) lie outside
    /// the 9x9 grid. This is the case if either is greater than or equal to
    /// 9.
    OutOfBounds,

    /// Indicates that some digit is invalid for a Sudoku grid. This is the
    /// case if it is less than 1 or greater than 9.
    InvalidDigit,

    /// An error that is raised when a puzzle shall be derived from a solution
    /// grid which still contains empty cells.
    IncompleteSolution,

    /// An error that is raised when a given cell of a puzzle, that is, one
    /// whose digit was dealt as a clue, shall be changed during play.
    GivenCell,

    /// An error that is raised when a cell of a game shall be changed after
    /// the game has been solved or abandoned.
    InactiveGame,

    /// An error that is raised whenever it is attempted to fill a partial
    /// grid which has no valid completion, or whose search exceeded the
    /// backtracking step cap.
    Unsatisfiable
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::OutOfBounds =>
                write!(f, "row or column index outside the 9x9 grid"),
            SudokuError::InvalidDigit =>
                write!(f, "digit outside the range [1, 9]"),
            SudokuError::IncompleteSolution =>
                write!(f, "solution grid contains empty cells"),
            SudokuError::GivenCell =>
                write!(f, "cell is a given clue and cannot be changed"),
            SudokuError::InactiveGame =>
                write!(f, "game is already solved or abandoned"),
            SudokuError::Unsatisfiable =>
                write!(f, "grid has no valid completion")
        }
    }
}

impl std::error::Error for SudokuError { }

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a `SudokuGrid`
/// code.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal 81.
    WrongNumberOfCells,

    /// Indicates that one of the cell entries could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid digit (0 or more than
    /// 9).
    InvalidDigit
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfCells =>
                write!(f, "grid code must contain exactly 81 cells"),
            SudokuParseError::NumberFormatError =>
                write!(f, "cell entry is not a number"),
            SudokuParseError::InvalidDigit =>
                write!(f, "cell entry outside the range [1, 9]")
        }
    }
}

impl std::error::Error for SudokuParseError { }

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;

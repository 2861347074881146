// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements an easy-to-understand engine for classic 9x9 Sudoku.
//! It supports the following key features:
//!
//! * Parsing and printing grids
//! * Generating random solved grids using a backtracking algorithm
//! * Deriving playable puzzles from solved grids at three difficulty tiers
//! * Checking partially filled grids for rule violations and completeness
//! * Computing the legal candidate digits for every empty cell
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code. Codes can be
//! used to exchange grids, while pretty prints can be used to display a grid
//! in a clearer manner.
//!
//! # Generating puzzles
//!
//! A [Generator](generator::Generator) produces a fully solved grid by
//! backtracking over the cells in row-major order, trying the digits of each
//! cell in randomly shuffled order. A
//! [PuzzleBuilder](generator::PuzzleBuilder) then clears a random selection
//! of cells whose count is determined by the [Difficulty]. Both accept any
//! `Rng` from the [rand](https://rust-random.github.io/rand/rand/index.html)
//! crate, so generation can be made deterministic by injecting a seeded
//! random number generator.
//!
//! ```
//! use sudoku_classic::Difficulty;
//! use sudoku_classic::generator::{Generator, PuzzleBuilder};
//! use sudoku_classic::validator;
//!
//! let mut generator = Generator::new_default();
//! let solution = generator.generate_solved();
//! assert!(validator::check_consistency(&solution).is_solved());
//!
//! let mut builder = PuzzleBuilder::new_default();
//! let puzzle = builder.build_puzzle(&solution, Difficulty::Hard).unwrap();
//! assert_eq!(26, puzzle.count_clues());
//! assert!(puzzle.is_subset(&solution));
//! ```
//!
//! Note that a derived puzzle is guaranteed to stem from a valid solved grid,
//! but *not* to have a unique solution. Especially at higher difficulties the
//! puzzle may admit completions different from the stored solution. This is a
//! deliberate simplification of this engine.
//!
//! # Checking grids
//!
//! [validator::check_consistency] reports whether a grid is free of
//! row/column/box conflicts and whether it is completely filled. Only a grid
//! that is both constitutes a solved Sudoku.
//!
//! # Candidate assistance
//!
//! [candidates::compute_candidates] determines for every empty cell the set
//! of digits that do not directly conflict with the current placements. This
//! is a one-step filter, not a constraint-propagation solver.
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//! use sudoku_classic::candidates;
//!
//! let mut grid = SudokuGrid::new_empty();
//! grid.set_cell(0, 0, 5).unwrap();
//!
//! let candidates = candidates::compute_candidates(&grid);
//!
//! // Cell (0, 1) shares a row with the 5, so 8 digits remain.
//! assert_eq!(8, candidates.get(0, 1).unwrap().unwrap().len());
//! // Cell (8, 8) is unconstrained.
//! assert_eq!(9, candidates.get(8, 8).unwrap().unwrap().len());
//! ```

pub mod candidates;
pub mod constraint;
pub mod error;
pub mod game;
pub mod generator;
pub mod util;
pub mod validator;


use error::{
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The number of rows and columns of a Sudoku grid.
pub const SIZE: usize = 9;

/// The width and height of one of the nine boxes partitioning the grid.
pub const BLOCK_SIZE: usize = 3;

/// The total number of cells of a Sudoku grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// The lowest digit that may occupy a cell.
pub const MIN_DIGIT: u8 = 1;

/// The highest digit that may occupy a cell.
pub const MAX_DIGIT: u8 = 9;

pub(crate) fn index(row: usize, column: usize) -> usize {
    row * SIZE + column
}

/// A Sudoku grid is composed of 81 cells organized into 9 rows, 9 columns,
/// and 9 non-overlapping 3x3 boxes. Each cell may or may not be occupied by a
/// digit from 1 to 9.
///
/// Cells are stored in row-major order. A solved grid contains each digit
/// exactly once in every row, column, and box.
///
/// Grids are serialized as their [parseable code](SudokuGrid::parse).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct SudokuGrid {
    cells: [Option<u8>; CELL_COUNT]
}

fn to_char(cell: Option<u8>) -> char {
    if let Some(digit) = cell {
        (b'0' + digit) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for column in 0..SIZE {
        if column == 0 {
            result.push(start);
        }
        else if column % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(column));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, row: usize) -> String {
    line('║', '║', '│',
        |column| to_char(grid.cells[index(row, column)]), ' ', '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for row in 0..SIZE {
            if row == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if row % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, row).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<u8>) -> String {
    if let Some(digit) = cell {
        digit.to_string()
    }
    else {
        String::from("")
    }
}

pub(crate) fn check_coordinates(row: usize, column: usize)
        -> SudokuResult<()> {
    if row >= SIZE || column >= SIZE {
        Err(SudokuError::OutOfBounds)
    }
    else {
        Ok(())
    }
}

impl SudokuGrid {

    /// Creates a new, empty 9x9 Sudoku grid.
    pub fn new_empty() -> SudokuGrid {
        SudokuGrid {
            cells: [None; CELL_COUNT]
        }
    }

    /// Creates a grid from raw cells in row-major order, where `None`
    /// represents an empty cell.
    ///
    /// # Errors
    ///
    /// If any cell contains a digit outside the range `[1, 9]`. In that case,
    /// `SudokuError::InvalidDigit` is returned.
    pub fn from_cells(cells: [Option<u8>; CELL_COUNT])
            -> SudokuResult<SudokuGrid> {
        for cell in cells.iter() {
            if let Some(digit) = cell {
                if *digit < MIN_DIGIT || *digit > MAX_DIGIT {
                    return Err(SudokuError::InvalidDigit);
                }
            }
        }

        Ok(SudokuGrid {
            cells
        })
    }

    /// Parses a code encoding a Sudoku grid. The code is a comma-separated
    /// list of exactly 81 entries, which are either empty or a digit from 1
    /// to 9. The entries are assigned left-to-right, top-to-bottom, where
    /// each row is completed before the next one is started. Whitespace in
    /// the entries is ignored to allow for more intuitive formatting.
    ///
    /// As an example, the code
    ///
    /// ```text
    /// 5, ,3, , , , , , ,
    ///  , , ,6, , , , , ,
    ///  ...7 more rows...
    /// ```
    ///
    /// parses to a grid with a 5 in the top-left cell, a 3 two cells to its
    /// right, and a 6 in the fourth cell of the second row.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut cells = [None; CELL_COUNT];

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let digit = entry.parse::<u8>()?;

            if digit < MIN_DIGIT || digit > MAX_DIGIT {
                return Err(SudokuParseError::InvalidDigit);
            }

            cells[i] = Some(digit);
        }

        Ok(SudokuGrid {
            cells
        })
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change.
    ///
    /// ```
    /// use sudoku_classic::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new_empty();
    /// grid.set_cell(1, 1, 4).unwrap();
    ///
    /// let code = grid.to_parseable_string();
    /// let parsed = SudokuGrid::parse(code.as_str()).unwrap();
    /// assert_eq!(grid, parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position.
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
    pub fn get_cell(&self, row: usize, column: usize)
            -> SudokuResult<Option<u8>> {
        check_coordinates(row, column)?;
        Ok(self.cells[index(row, column)])
    }

    /// Indicates whether the cell at the specified position has the given
    /// digit. This will return `false` if there is a different digit in that
    /// cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `digit`: The digit to check for. If it is *not* in the range
    /// `[1, 9]`, `false` will always be returned.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_digit(&self, row: usize, column: usize, digit: u8)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(row, column)? {
            Ok(digit == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 9[`.
    /// * `digit`: The digit to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `row` or `column` are not in
    /// the specified range.
    /// * `SudokuError::InvalidDigit` If `digit` is not in the specified
    /// range.
    pub fn set_cell(&mut self, row: usize, column: usize, digit: u8)
            -> SudokuResult<()> {
        check_coordinates(row, column)?;

        if digit < MIN_DIGIT || digit > MAX_DIGIT {
            return Err(SudokuError::InvalidDigit);
        }

        self.cells[index(row, column)] = Some(digit);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a digit, that digit is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, row: usize, column: usize)
            -> SudokuResult<()> {
        check_coordinates(row, column)?;
        self.cells[index(row, column)] = None;
        Ok(())
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average puzzles with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// digit. In this case, [SudokuGrid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// digit. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some digit must be filled
    /// in `other` with the same digit. A puzzle is always a subset of the
    /// solution it was derived from.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(digit) => other_cell == &Some(*digit),
                    None => true
                }
            })
    }

    /// Gets a reference to the array which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Option<u8>; CELL_COUNT] {
        &self.cells
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_parseable_string()
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = SudokuParseError;

    fn try_from(code: String) -> SudokuParseResult<SudokuGrid> {
        SudokuGrid::parse(code.as_str())
    }
}

/// An enumeration of the difficulty tiers at which puzzles can be generated.
/// Each tier maps to a fixed number of cells that are removed from the solved
/// grid, which in turn determines the number of clues of the puzzle.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Difficulty {

    /// 30 of the 81 cells are removed, leaving 51 clues.
    Easy,

    /// 45 of the 81 cells are removed, leaving 36 clues.
    Medium,

    /// 55 of the 81 cells are removed, leaving 26 clues.
    Hard
}

impl Difficulty {

    /// Gets the number of cells that are removed from a solved grid when
    /// deriving a puzzle of this difficulty.
    pub fn cells_to_remove(self) -> usize {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 45,
            Difficulty::Hard => 55
        }
    }

    /// Gets the number of clues a puzzle of this difficulty contains, i.e.
    /// `81 - cells_to_remove`.
    pub fn clue_count(self) -> usize {
        CELL_COUNT - self.cells_to_remove()
    }
}

impl Default for Difficulty {

    /// The default difficulty is [Difficulty::Medium].
    fn default() -> Difficulty {
        Difficulty::Medium
    }
}

impl FromStr for Difficulty {
    type Err = std::convert::Infallible;

    /// Parses a difficulty from its lowercase name (`"easy"`, `"medium"`, or
    /// `"hard"`). Unrecognized input falls back to the default,
    /// [Difficulty::Medium].
    fn from_str(s: &str) -> Result<Difficulty, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            _ => Ok(Difficulty::Medium)
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_ok() {
        let mut code = String::from("1,,3");
        code.push_str(&",".repeat(CELL_COUNT - 3));
        let grid = SudokuGrid::parse(code.as_str())
            .expect("parsing valid grid failed");

        assert_eq!(Some(1), grid.get_cell(0, 0).unwrap());
        assert_eq!(None, grid.get_cell(0, 1).unwrap());
        assert_eq!(Some(3), grid.get_cell(0, 2).unwrap());
        assert_eq!(None, grid.get_cell(8, 8).unwrap());
        assert_eq!(2, grid.count_clues());
    }

    #[test]
    fn parse_ignores_whitespace() {
        let mut code = String::from(" 5 ,\n ,9");
        code.push_str(&",".repeat(CELL_COUNT - 3));
        let grid = SudokuGrid::parse(code.as_str()).unwrap();

        assert_eq!(Some(5), grid.get_cell(0, 0).unwrap());
        assert_eq!(None, grid.get_cell(0, 1).unwrap());
        assert_eq!(Some(9), grid.get_cell(0, 2).unwrap());
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse("1,2,3"));

        let too_many = ",".repeat(CELL_COUNT);
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse(too_many.as_str()));
    }

    #[test]
    fn parse_number_format_error() {
        let mut code = String::from("a");
        code.push_str(&",".repeat(CELL_COUNT - 1));
        assert_eq!(Err(SudokuParseError::NumberFormatError),
            SudokuGrid::parse(code.as_str()));
    }

    #[test]
    fn parse_invalid_digit() {
        let mut code = String::from("0");
        code.push_str(&",".repeat(CELL_COUNT - 1));
        assert_eq!(Err(SudokuParseError::InvalidDigit),
            SudokuGrid::parse(code.as_str()));

        let mut code = String::from("10");
        code.push_str(&",".repeat(CELL_COUNT - 1));
        assert_eq!(Err(SudokuParseError::InvalidDigit),
            SudokuGrid::parse(code.as_str()));
    }

    #[test]
    fn to_parseable_string_round_trip() {
        let mut grid = SudokuGrid::new_empty();
        grid.set_cell(0, 0, 1).unwrap();
        grid.set_cell(4, 4, 5).unwrap();
        grid.set_cell(8, 8, 9).unwrap();

        let code = grid.to_parseable_string();
        assert_eq!(grid, SudokuGrid::parse(code.as_str()).unwrap());
    }

    #[test]
    fn cell_accessors() {
        let mut grid = SudokuGrid::new_empty();

        grid.set_cell(2, 3, 7).unwrap();
        assert_eq!(Some(7), grid.get_cell(2, 3).unwrap());
        assert!(grid.has_digit(2, 3, 7).unwrap());
        assert!(!grid.has_digit(2, 3, 6).unwrap());
        assert!(!grid.has_digit(3, 2, 7).unwrap());

        grid.clear_cell(2, 3).unwrap();
        assert_eq!(None, grid.get_cell(2, 3).unwrap());
    }

    #[test]
    fn out_of_bounds_coordinates_rejected() {
        let mut grid = SudokuGrid::new_empty();

        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(9, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(0, 9));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.set_cell(9, 9, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.clear_cell(10, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.has_digit(0, 9, 1));
    }

    #[test]
    fn invalid_digits_rejected() {
        let mut grid = SudokuGrid::new_empty();

        assert_eq!(Err(SudokuError::InvalidDigit), grid.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidDigit), grid.set_cell(0, 0, 10));

        let mut cells = [None; CELL_COUNT];
        cells[40] = Some(12);
        assert_eq!(Err(SudokuError::InvalidDigit),
            SudokuGrid::from_cells(cells));
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = SudokuGrid::new_empty();
        let mut partial = SudokuGrid::new_empty();
        partial.set_cell(0, 0, 1).unwrap();
        partial.set_cell(5, 5, 2).unwrap();

        assert_eq!(0, empty.count_clues());
        assert_eq!(2, partial.count_clues());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
    }

    #[test]
    fn subset_relation() {
        let mut small = SudokuGrid::new_empty();
        small.set_cell(0, 0, 1).unwrap();

        let mut large = small.clone();
        large.set_cell(1, 1, 2).unwrap();

        assert!(small.is_subset(&large));
        assert!(!large.is_subset(&small));
        assert!(SudokuGrid::new_empty().is_subset(&small));

        let mut conflicting = SudokuGrid::new_empty();
        conflicting.set_cell(0, 0, 9).unwrap();
        assert!(!small.is_subset(&conflicting));
    }

    #[test]
    fn difficulty_removal_counts() {
        assert_eq!(30, Difficulty::Easy.cells_to_remove());
        assert_eq!(45, Difficulty::Medium.cells_to_remove());
        assert_eq!(55, Difficulty::Hard.cells_to_remove());
        assert_eq!(51, Difficulty::Easy.clue_count());
        assert_eq!(36, Difficulty::Medium.clue_count());
        assert_eq!(26, Difficulty::Hard.clue_count());
    }

    #[test]
    fn difficulty_from_str_with_fallback() {
        assert_eq!(Difficulty::Easy, "easy".parse().unwrap());
        assert_eq!(Difficulty::Medium, "medium".parse().unwrap());
        assert_eq!(Difficulty::Hard, "hard".parse().unwrap());
        assert_eq!(Difficulty::Medium, "nightmare".parse().unwrap());
        assert_eq!(Difficulty::Medium, Difficulty::default());
    }

    #[test]
    fn grid_serde_round_trip() {
        let mut grid = SudokuGrid::new_empty();
        grid.set_cell(3, 4, 8).unwrap();
        grid.set_cell(7, 0, 2).unwrap();

        let json = serde_json::to_string(&grid).unwrap();
        let deserialized: SudokuGrid =
            serde_json::from_str(json.as_str()).unwrap();

        assert_eq!(grid, deserialized);
    }

    #[test]
    fn grid_serde_rejects_invalid_code() {
        let result = serde_json::from_str::<SudokuGrid>("\"1,2,3\"");
        assert!(result.is_err());
    }

    #[test]
    fn display_marks_digits_and_blocks() {
        let mut grid = SudokuGrid::new_empty();
        grid.set_cell(0, 0, 5).unwrap();

        let printed = format!("{}", grid);

        assert!(printed.contains('5'));
        assert!(printed.starts_with('╔'));
        assert!(printed.ends_with('╝'));
        assert_eq!(19, printed.lines().count());
    }
}

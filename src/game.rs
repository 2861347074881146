//! This module contains the session layer that ties the engine together for
//! one playthrough.
//!
//! A [Game] owns the solution grid, the puzzle derived from it, and the live
//! grid the player fills in. It guards the given cells, detects the win
//! condition after every edit, and offers the hint and reveal actions of the
//! original assist features. Presentation concerns like cell selection,
//! input handling, timers, and highlighting are left to the caller.

use crate::{Difficulty, SudokuGrid};
use crate::candidates::{self, CandidateMap};
use crate::error::{SudokuError, SudokuResult};
use crate::generator::{Generator, PuzzleBuilder};
use crate::validator::{self, Consistency};

use rand::Rng;

use serde::{Deserialize, Serialize};

/// An enumeration of the states a [Game] can be in. A game starts out
/// [GameState::Active] and leaves that state at most once; starting over
/// means creating a new game.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum GameState {

    /// The puzzle has been dealt and the player may edit non-given cells.
    Active,

    /// The live grid is valid and complete. The game is won.
    Solved,

    /// The player revealed the solution. The game is over without a win.
    Abandoned
}

/// A single playthrough of a Sudoku puzzle. Holds the immutable solution,
/// the puzzle as dealt (whose filled cells are the immutable givens), and
/// the live grid which starts as a copy of the puzzle.
pub struct Game {
    solution: SudokuGrid,
    puzzle: SudokuGrid,
    grid: SudokuGrid,
    difficulty: Difficulty,
    state: GameState
}

impl Game {

    /// Creates a new game at the given difficulty, generating a fresh
    /// solution and puzzle with `rand::thread_rng()`.
    pub fn new(difficulty: Difficulty) -> Game {
        Game::new_with_rng(rand::thread_rng(), difficulty)
    }

    /// Creates a new game at the given difficulty, using the given random
    /// number generator for both solution generation and clue removal. With
    /// a seeded random number generator, the dealt game is reproducible.
    pub fn new_with_rng(mut rng: impl Rng, difficulty: Difficulty) -> Game {
        let solution = Generator::new(&mut rng).generate_solved();
        let puzzle = PuzzleBuilder::new(&mut rng)
            .build_puzzle(&solution, difficulty)
            .unwrap();

        Game {
            grid: puzzle.clone(),
            solution,
            puzzle,
            difficulty,
            state: GameState::Active
        }
    }

    /// Gets the state this game is currently in.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Gets the difficulty at which this game was dealt.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Gets a reference to the live grid, containing the givens and all
    /// digits the player has entered so far.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Gets a reference to the puzzle as it was dealt. Its filled cells are
    /// the givens of this game.
    pub fn puzzle(&self) -> &SudokuGrid {
        &self.puzzle
    }

    /// Gets a reference to the solution this game's puzzle was derived from.
    /// Note that if the puzzle admits multiple completions, the win
    /// condition does not require the player to find this particular one.
    pub fn solution(&self) -> &SudokuGrid {
        &self.solution
    }

    /// Indicates whether the cell at the specified position is a given,
    /// that is, it was dealt as a clue and cannot be changed during play.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are greater than 8. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn is_given(&self, row: usize, column: usize) -> SudokuResult<bool> {
        Ok(self.puzzle.get_cell(row, column)?.is_some())
    }

    fn ensure_active(&self) -> SudokuResult<()> {
        if self.state == GameState::Active {
            Ok(())
        }
        else {
            Err(SudokuError::InactiveGame)
        }
    }

    fn update_state(&mut self) {
        if validator::check_consistency(&self.grid).is_solved() {
            self.state = GameState::Solved;
        }
    }

    /// Enters the given digit into the cell at the specified position. If
    /// the edit completes the grid without rule violations, the game
    /// transitions to [GameState::Solved].
    ///
    /// # Errors
    ///
    /// * `SudokuError::InactiveGame` If the game is already solved or
    /// abandoned.
    /// * `SudokuError::OutOfBounds` If either `row` or `column` are greater
    /// than 8.
    /// * `SudokuError::GivenCell` If the cell is a given.
    /// * `SudokuError::InvalidDigit` If `digit` is not in the range
    /// `[1, 9]`.
    pub fn set_cell(&mut self, row: usize, column: usize, digit: u8)
            -> SudokuResult<()> {
        self.ensure_active()?;

        if self.is_given(row, column)? {
            return Err(SudokuError::GivenCell);
        }

        self.grid.set_cell(row, column, digit)?;
        self.update_state();
        Ok(())
    }

    /// Clears the cell at the specified position.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InactiveGame` If the game is already solved or
    /// abandoned.
    /// * `SudokuError::OutOfBounds` If either `row` or `column` are greater
    /// than 8.
    /// * `SudokuError::GivenCell` If the cell is a given.
    pub fn clear_cell(&mut self, row: usize, column: usize)
            -> SudokuResult<()> {
        self.ensure_active()?;

        if self.is_given(row, column)? {
            return Err(SudokuError::GivenCell);
        }

        self.grid.clear_cell(row, column)
    }

    /// Reveals the solution digit of the cell at the specified position by
    /// entering it into the live grid, and returns it. Any digit the player
    /// entered there before is overwritten. If the hint completes the grid,
    /// the game transitions to [GameState::Solved].
    ///
    /// # Errors
    ///
    /// * `SudokuError::InactiveGame` If the game is already solved or
    /// abandoned.
    /// * `SudokuError::OutOfBounds` If either `row` or `column` are greater
    /// than 8.
    /// * `SudokuError::GivenCell` If the cell is a given.
    pub fn hint(&mut self, row: usize, column: usize) -> SudokuResult<u8> {
        self.ensure_active()?;

        if self.is_given(row, column)? {
            return Err(SudokuError::GivenCell);
        }

        // Solution cells are always filled.
        let digit = self.solution.get_cell(row, column)?.unwrap();
        self.grid.set_cell(row, column, digit)?;
        self.update_state();
        Ok(digit)
    }

    /// Copies the solution into the live grid and transitions the game to
    /// [GameState::Abandoned].
    ///
    /// # Errors
    ///
    /// * `SudokuError::InactiveGame` If the game is already solved or
    /// abandoned.
    pub fn reveal_solution(&mut self) -> SudokuResult<()> {
        self.ensure_active()?;
        self.grid = self.solution.clone();
        self.state = GameState::Abandoned;
        Ok(())
    }

    /// Checks the live grid for rule violations and completeness, as the
    /// original check action does.
    pub fn check(&self) -> Consistency {
        validator::check_consistency(&self.grid)
    }

    /// Computes the candidate digits of all empty cells of the live grid.
    pub fn candidates(&self) -> CandidateMap {
        candidates::compute_candidates(&self.grid)
    }
}

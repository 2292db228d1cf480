// SPDX-License-Identifier: MIT OR Apache-2.0

//! Space Tic-Tac-Toe Core - Game Rules and Board Logic
//!
//! This crate provides the core game functionality including:
//! - 3x3 board representation and mark placement
//! - Win and draw detection over the eight winning combinations
//! - The game state manager driven by cell clicks and reset

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod rules;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, CELL_COUNT};
use crate::rules::Outcome;

/// Player mark (X or O)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// X player (always goes first)
    X,
    /// O player
    O,
}

impl Player {
    /// Returns the opposite player
    pub fn opposite(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark as it is shown to the user
    pub fn symbol(&self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Errors that can occur when placing a mark
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The index is outside the 3x3 board
    #[error("Invalid cell index {0}")]
    InvalidCell(usize),

    /// The cell already holds a mark
    #[error("Cell {0} already occupied")]
    OccupiedCell(usize),

    /// A winner or a draw has already been decided
    #[error("Game is already over")]
    GameOver,
}

/// Status line shown under the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Game still running, `Player` moves next
    NextPlayer(Player),
    /// Game won
    Winner(Player),
    /// Board full with no three-in-a-row
    Draw,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::NextPlayer(player) => write!(f, "Next player: {}", player),
            Status::Winner(player) => write!(f, "Winner: {}", player),
            Status::Draw => f.write_str("It's a draw!"),
        }
    }
}

/// Represents the current state of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The nine cells
    board: Board,
    /// The player whose mark is placed next
    current_player: Player,
    /// Decided result, recomputed after every placement
    outcome: Option<Outcome>,
    /// Cell indices in the order they were played
    moves: Vec<usize>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a new game with an empty board and X to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: None,
            moves: Vec::with_capacity(CELL_COUNT),
        }
    }

    /// Place the current player's mark, reporting why a placement is rejected.
    ///
    /// Returns the player who made the move.
    pub fn try_play(&mut self, index: usize) -> Result<Player, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }

        let player = self.current_player;
        self.board.place(index, player)?;
        self.moves.push(index);
        self.current_player = player.opposite();

        self.outcome = rules::evaluate(&self.board);
        match self.outcome {
            Some(Outcome::Win { player, line }) => {
                tracing::info!(%player, ?line, "Game won");
            }
            Some(Outcome::Draw) => tracing::info!("Game ended in a draw"),
            None => {}
        }

        Ok(player)
    }

    /// Handle a click on a cell.
    ///
    /// Clicks on occupied cells, out-of-range indices or a decided game are
    /// ignored. Returns whether the board changed.
    pub fn handle_click(&mut self, index: usize) -> bool {
        match self.try_play(index) {
            Ok(player) => {
                tracing::debug!(index, %player, "Mark placed");
                true
            }
            Err(e) => {
                tracing::debug!(index, error = %e, "Click ignored");
                false
            }
        }
    }

    /// Restore the empty board with X to move
    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::info!("Game reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The winning player, if any
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Some(Outcome::Win { player, .. }) => Some(player),
            _ => None,
        }
    }

    /// The triple that decided the game, if it was won
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self.outcome {
            Some(Outcome::Win { line, .. }) => Some(line),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == Some(Outcome::Draw)
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// History of played cell indices
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Derive the status line from the current state
    pub fn status(&self) -> Status {
        match self.outcome {
            Some(Outcome::Win { player, .. }) => Status::Winner(player),
            Some(Outcome::Draw) => Status::Draw,
            None => Status::NextPlayer(self.current_player),
        }
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation

use serde::{Deserialize, Serialize};

use crate::{GameError, Player};

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// The 3x3 board, cells indexed row by row from the top left
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Player>; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit cells
    pub fn from_cells(cells: [Option<Player>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Get the mark at the specified index
    pub fn get(&self, index: usize) -> Option<Player> {
        self.cells.get(index).copied().flatten()
    }

    /// Place a mark in an empty cell
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), GameError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GameError::InvalidCell(index))?;

        if cell.is_some() {
            return Err(GameError::OccupiedCell(index));
        }

        *cell = Some(player);
        Ok(())
    }

    pub fn cells(&self) -> &[Option<Player>; CELL_COUNT] {
        &self.cells
    }

    /// True when every cell holds a mark
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// True when no cell holds a mark
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Count marks of the given player
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Some(player))
            .count()
    }
}

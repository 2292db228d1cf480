// SPDX-License-Identifier: MIT OR Apache-2.0

//! Win and draw detection

use serde::{Deserialize, Serialize};

use crate::{board::Board, Player};

/// Index triples for the rows, columns and diagonals, checked in this order
pub const WINNING_COMBINATIONS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// How a decided game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Three equal marks on `line`
    Win {
        player: Player,
        line: [usize; 3],
    },
    /// All cells filled without a winning line
    Draw,
}

/// First combination whose three cells hold the same mark
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    WINNING_COMBINATIONS.iter().copied().find(|&[a, b, c]| {
        board.get(a).is_some() && board.get(a) == board.get(b) && board.get(a) == board.get(c)
    })
}

/// The player owning the first winning combination
pub fn calculate_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| board.get(a))
}

/// Derive the outcome of a board.
///
/// A completed line wins even when it fills the last cell.
pub fn evaluate(board: &Board) -> Option<Outcome> {
    if let Some(line) = winning_line(board) {
        let player = board.get(line[0])?;
        return Some(Outcome::Win { player, line });
    }

    if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Windowless replay of a list of cell clicks, with ASCII board rendering

use anyhow::{bail, Context, Result};
use space_tictactoe_core::{board::CELL_COUNT, GameState, Player};

/// Parse a comma or whitespace separated list of cell indices (0-8)
pub fn parse_moves(input: &str) -> Result<Vec<usize>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| -> Result<usize> {
            let index: usize = token
                .parse()
                .with_context(|| format!("Invalid cell index '{}'", token))?;
            if index >= CELL_COUNT {
                bail!("Cell index {} out of range 0-{}", index, CELL_COUNT - 1);
            }
            Ok(index)
        })
        .collect()
}

/// Play `moves` as clicks on a fresh game; ignored clicks are skipped
pub fn replay(moves: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &index in moves {
        game.handle_click(index);
    }
    game
}

/// Render the board as ASCII art
pub fn render_board(game_state: &GameState) -> String {
    let mut output = String::new();

    for row in 0..3 {
        if row > 0 {
            output.push_str("---+---+---\n");
        }
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let symbol = match game_state.board().get(index) {
                    Some(Player::X) => "X",
                    Some(Player::O) => "O",
                    None => " ",
                };
                format!(" {} ", symbol)
            })
            .collect();
        output.push_str(&cells.join("|"));
        output.push('\n');
    }

    output
}

/// Replay and print the final board with its status line
pub fn run(moves: &str) -> Result<()> {
    let moves = parse_moves(moves)?;
    let game = replay(&moves);
    print!("{}", render_board(&game));
    println!("{}", game.status());
    Ok(())
}

// SPDX-License-Identifier: MIT OR Apache-2.0

use rand::seq::SliceRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use space_tictactoe_core::{
    board::Board,
    rules::{evaluate, Outcome},
    GameState, Player, Status,
};

fn play(moves: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &index in moves {
        game.handle_click(index);
    }
    game
}

#[test]
fn top_row_wins_for_x() {
    let game = play(&[0, 3, 1, 4, 2]);

    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.winning_line(), Some([0, 1, 2]));
    assert_eq!(game.status().to_string(), "Winner: X");
}

#[test]
fn full_board_without_line_is_a_draw() {
    // X O X
    // X O O
    // O X X
    let game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert!(game.board().is_full());
    assert!(game.is_draw());
    assert_eq!(game.winner(), None);
    assert_eq!(game.status(), Status::Draw);
    assert_eq!(game.status().to_string(), "It's a draw!");
}

#[test]
fn clicking_occupied_cell_changes_nothing() {
    let mut game = play(&[4]);
    let before = game.clone();

    assert!(!game.handle_click(4));
    assert_eq!(game, before);
    assert_eq!(game.status().to_string(), "Next player: O");
}

#[test]
fn clicking_after_win_changes_nothing() {
    let mut game = play(&[0, 3, 1, 4, 2]);
    let before = game.clone();

    for index in 0..9 {
        assert!(!game.handle_click(index));
    }
    assert_eq!(game, before);
}

#[test]
fn out_of_range_click_is_ignored() {
    let mut game = GameState::new();
    assert!(!game.handle_click(9));
    assert!(!game.handle_click(usize::MAX));
    assert_eq!(game, GameState::new());
}

#[test]
fn reset_restores_initial_state() {
    let mut game = play(&[0, 3, 1, 4, 2]);
    game.reset();

    assert!(game.board().is_empty());
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.outcome(), None);
    assert!(game.moves().is_empty());
    assert_eq!(game, GameState::new());
}

#[test]
fn random_games_respect_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5ace);

    for _ in 0..500 {
        let mut game = GameState::new();

        // Random clicks, including occupied and out-of-range ones
        for _ in 0..rng.gen_range(0..20) {
            let index = rng.gen_range(0..11);
            let board_before = *game.board();
            let was_over = game.is_over();
            let occupied = board_before.get(index).is_some();

            let changed = game.handle_click(index);

            if was_over || occupied || index >= 9 {
                assert!(!changed);
                assert_eq!(*game.board(), board_before);
            } else {
                assert!(changed);
            }

            // Exactly one of running / X wins / O wins / draw
            let states = [
                game.outcome().is_none(),
                game.winner() == Some(Player::X),
                game.winner() == Some(Player::O),
                game.is_draw(),
            ];
            assert_eq!(states.iter().filter(|s| **s).count(), 1);
            assert_eq!(game.outcome(), evaluate(game.board()));
        }

        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        assert!(x == o || x == o + 1);
        assert_eq!(game.moves().len(), x + o);

        game.reset();
        assert_eq!(game, GameState::new());
    }
}

#[test]
fn random_full_boards_are_won_or_drawn() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut marks = [Player::X; 9];
    for mark in marks.iter_mut().skip(5) {
        *mark = Player::O;
    }

    for _ in 0..200 {
        marks.shuffle(&mut rng);
        let board = Board::from_cells(marks.map(Some));

        match evaluate(&board) {
            Some(Outcome::Win { player, line }) => {
                assert!(line.iter().all(|&i| board.get(i) == Some(player)));
            }
            Some(Outcome::Draw) => {}
            None => panic!("full board must be decided"),
        }
    }
}

#[test]
fn game_state_serializes() {
    let game = play(&[0, 3, 1]);
    let json = serde_json::to_string(&game).expect("Failed to serialize");
    let restored: GameState = serde_json::from_str(&json).expect("Failed to deserialize");

    assert_eq!(restored, game);
    assert_eq!(restored.current_player(), Player::O);
}

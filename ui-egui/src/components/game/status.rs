//! Game status display

use egui::{Align2, Color32, FontId, Painter, Pos2};
use space_tictactoe_core::GameState;

/// Game status display component
pub struct GameStatus;

impl GameStatus {
    /// Render the status line centered on `pos`
    pub fn render(
        painter: &Painter,
        pos: Pos2,
        game_state: &GameState,
        font_size: f32,
        color: Color32,
        opacity: f32,
    ) {
        painter.text(
            pos,
            Align2::CENTER_CENTER,
            game_state.status().to_string(),
            FontId::proportional(font_size),
            color.gamma_multiply(opacity),
        );
    }
}

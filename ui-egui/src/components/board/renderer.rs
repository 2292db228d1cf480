//! Board rendering logic

use egui::{Color32, Painter, Pos2, Rect, Rounding, Stroke, Vec2};
use space_tictactoe_core::{board::CELL_COUNT, GameState, Player};

use super::{BoardInteraction, BoardLayout};
use crate::animation::Spring;
use crate::mark_animation::{AnimationManager, MarkAnimation, MarkTransform};
use crate::theme::rotate_around;
use crate::ui_config::{BoardConfig, ColorScheme};

/// Board renderer component
pub struct BoardRenderer {
    config: BoardConfig,
    colors: ColorScheme,
    /// Animation manager
    animation_manager: AnimationManager,
}

impl BoardRenderer {
    pub fn new(config: BoardConfig, colors: ColorScheme, spring: Spring) -> Self {
        Self {
            config,
            colors,
            animation_manager: AnimationManager::new(spring),
        }
    }

    /// Start the pop-in for a freshly placed mark
    pub fn mark_placed(&mut self, index: usize, player: Player, now: f32) {
        self.animation_manager
            .add_animation(MarkAnimation::new_enter(index, player, now));
    }

    /// Spin out every mark of the board that is about to be cleared
    pub fn board_cleared(&mut self, game_state: &GameState, now: f32) {
        self.animation_manager
            .start_exit(game_state.board().cells(), now);
    }

    /// Update animations; returns whether any are still running
    pub fn update_animations(&mut self, now: f32) -> bool {
        self.animation_manager.update(now)
    }

    /// Render the board
    pub fn render(
        &self,
        painter: &Painter,
        layout: &BoardLayout,
        game_state: &GameState,
        interaction: &BoardInteraction,
        now: f32,
        opacity: f32,
    ) {
        let winning_line = game_state.winning_line();

        for index in 0..CELL_COUNT {
            let state = interaction.cell_state(index);
            let scale = if state.pressed {
                self.config.press_scale
            } else if state.hovered {
                self.config.hover_scale
            } else {
                1.0
            };

            let base = layout.cell_rect(index);
            let rect = Rect::from_center_size(base.center(), base.size() * scale);

            let on_winning_line = winning_line.is_some_and(|line| line.contains(&index));
            let fill: Color32 = if on_winning_line {
                self.colors.winning_cell.into()
            } else {
                self.colors.cell.into()
            };
            painter.rect_filled(
                rect,
                Rounding::same(self.config.corner_radius),
                fill.gamma_multiply(opacity),
            );

            if let Some(player) = game_state.board().get(index) {
                let transform = self.animation_manager.enter_transform(index, now);
                self.render_mark(painter, rect, player, transform, opacity);
            }
        }

        for (index, player, transform) in self.animation_manager.exiting(now) {
            // A new mark may already occupy the cell
            if game_state.board().get(index).is_none() {
                self.render_mark(painter, layout.cell_rect(index), player, transform, opacity);
            }
        }
    }

    /// Draw an X or O centered in `cell`
    fn render_mark(
        &self,
        painter: &Painter,
        cell: Rect,
        player: Player,
        transform: MarkTransform,
        opacity: f32,
    ) {
        if transform.scale <= 0.0 {
            return;
        }

        let center = cell.center();
        let extent = cell.width() * 0.3 * transform.scale;
        let width = cell.width() * self.config.mark_stroke_ratio * transform.scale;
        let color = Color32::from(self.colors.text).gamma_multiply(opacity * transform.opacity);
        let stroke = Stroke::new(width, color);

        match player {
            Player::X => {
                for (dx, dy) in [(1.0, 1.0), (1.0, -1.0)] {
                    let offset = Vec2::new(dx, dy) * extent;
                    let a = rotate_around(center - offset, center, transform.rotation);
                    let b = rotate_around(center + offset, center, transform.rotation);
                    painter.line_segment([a, b], stroke);
                }
            }
            Player::O => {
                painter.circle_stroke(center, extent, stroke);
                // Notch showing the spin
                let tip = rotate_around(
                    Pos2::new(center.x, center.y - extent),
                    center,
                    transform.rotation,
                );
                if transform.rotation.abs() > 1e-2 {
                    painter.circle_filled(tip, width * 0.5, color);
                }
            }
        }
    }
}

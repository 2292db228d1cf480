// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main application state and UI logic.

use std::time::Duration;

use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect};
use space_tictactoe_core::GameState;

use crate::animation::IntroAnimation;
use crate::components::{BoardInteraction, BoardLayout, BoardRenderer, GameControls, GameStatus};
use crate::starfield::Starfield;
use crate::theme;
use crate::ui_config::UiConfig;

const TITLE: &str = "Space Tic-Tac-Toe";

/// Vertical spacing between the stacked elements
const TITLE_HEIGHT: f32 = 48.0;
const SPACING: f32 = 32.0;
const STATUS_HEIGHT: f32 = 28.0;
const STATUS_SPACING: f32 = 16.0;
const BUTTON_HEIGHT: f32 = 40.0;

/// Frame interval once only the slow star drift is moving
const DRIFT_FRAME: Duration = Duration::from_millis(33);

/// Main application state
pub struct SpaceTicTacToeApp {
    config: UiConfig,
    game: GameState,
    starfield: Starfield,
    intro: IntroAnimation,
    renderer: BoardRenderer,
    interaction: BoardInteraction,
    /// egui time of the first frame; app time counts from here
    start_time: Option<f64>,
}

impl SpaceTicTacToeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: UiConfig) -> Self {
        theme::apply_space_theme(&cc.egui_ctx, &config.colors);
        Self::with_config(config)
    }

    /// Build the app state without a window
    pub fn with_config(config: UiConfig) -> Self {
        let starfield = Starfield::generate(&mut rand::thread_rng(), config.starfield.params());
        let renderer = BoardRenderer::new(config.board.clone(), config.colors.clone(), config.spring);

        Self {
            intro: IntroAnimation::new(config.spring),
            config,
            game: GameState::new(),
            starfield,
            renderer,
            interaction: BoardInteraction::new(),
            start_time: None,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn interaction(&self) -> &BoardInteraction {
        &self.interaction
    }

    /// Route a cell click to the game, starting the pop-in when it lands
    pub fn click_cell(&mut self, index: usize, now: f32) {
        let player = self.game.current_player();
        if self.game.handle_click(index) {
            self.renderer.mark_placed(index, player, now);
        }
    }

    /// Spin the marks out and start a new game
    pub fn reset(&mut self, now: f32) {
        self.renderer.board_cleared(&self.game, now);
        self.game.reset();
    }

    /// Drop finished mark animations.
    ///
    /// Returns whether anything besides the star drift is still moving.
    pub fn tick_animations(&mut self, now: f32) -> bool {
        let marks_moving = self.renderer.update_animations(now);
        marks_moving || !self.intro.is_finished(now) || self.starfield.opacity(now) < 1.0
    }

    /// Top of the title/board/status/button stack, centered in `screen`
    fn stack_top(&self, screen: Rect) -> f32 {
        let total = TITLE_HEIGHT
            + SPACING
            + self.config.board.size
            + SPACING
            + STATUS_HEIGHT
            + STATUS_SPACING
            + BUTTON_HEIGHT;
        screen.center().y - total / 2.0
    }

    fn status_y(&self, screen: Rect) -> f32 {
        self.stack_top(screen)
            + TITLE_HEIGHT
            + SPACING
            + self.config.board.size
            + SPACING
            + STATUS_HEIGHT / 2.0
    }

    /// Cell geometry at app time `now`, intro scaling included
    pub fn board_layout(&self, screen: Rect, now: f32) -> BoardLayout {
        let size = self.config.board.size;
        let center = Pos2::new(
            screen.center().x,
            self.stack_top(screen) + TITLE_HEIGHT + SPACING + size / 2.0,
        );
        BoardLayout::centered(center, size, self.config.board.gap).scaled(self.intro.board(now).scale)
    }

    pub fn reset_button_rect(&self, screen: Rect) -> Rect {
        let center = Pos2::new(
            screen.center().x,
            self.status_y(screen) + STATUS_HEIGHT / 2.0 + STATUS_SPACING + BUTTON_HEIGHT / 2.0,
        );
        GameControls::reset_rect(center)
    }

    /// Seconds since the first frame
    fn elapsed(&mut self, ctx: &egui::Context) -> f32 {
        let time = ctx.input(|i| i.time);
        let start = *self.start_time.get_or_insert(time);
        (time - start) as f32
    }

    /// Run one frame against `ctx`
    pub fn ui(&mut self, ctx: &egui::Context) {
        let now = self.elapsed(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.show(ui, now));

        if self.tick_animations(now) {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(DRIFT_FRAME);
        }
    }

    fn show(&mut self, ui: &mut egui::Ui, now: f32) {
        let screen = ui.max_rect();
        let painter = ui.painter().clone();
        let colors = self.config.colors.clone();
        let text_color: Color32 = colors.text.into();

        theme::paint_background(&painter, screen, &colors);
        self.starfield.paint(&painter, screen, now, colors.star.into());

        let title = self.intro.title(now);
        painter.text(
            Pos2::new(
                screen.center().x,
                self.stack_top(screen) + TITLE_HEIGHT / 2.0 + title.y_offset,
            ),
            Align2::CENTER_CENTER,
            TITLE,
            FontId::proportional(self.config.board.title_font_size),
            text_color.gamma_multiply(title.opacity),
        );

        let layout = self.board_layout(screen, now);
        if let Some(index) = self.interaction.handle_interaction(ui, &layout) {
            self.click_cell(index, now);
        }
        let board_opacity = self.intro.board(now).opacity;
        self.renderer
            .render(&painter, &layout, &self.game, &self.interaction, now, board_opacity);

        GameStatus::render(
            &painter,
            Pos2::new(screen.center().x, self.status_y(screen)),
            &self.game,
            self.config.board.status_font_size,
            text_color,
            self.intro.status_opacity(now),
        );

        let button_rect = self.reset_button_rect(screen);
        if GameControls::render(ui, button_rect, &colors) {
            self.reset(now);
        }
    }
}

impl eframe::App for SpaceTicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

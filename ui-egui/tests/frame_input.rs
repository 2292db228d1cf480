// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pointer input fed through whole egui frames

use egui::output::OutputEvent;
use egui::{Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Vec2};
use space_tictactoe_core::{Player, Status};
use space_tictactoe_ui_egui::{SpaceTicTacToeApp, UiConfig};

const FRAME: f64 = 1.0 / 60.0;

struct Harness {
    ctx: egui::Context,
    app: SpaceTicTacToeApp,
    screen: Rect,
    time: f64,
}

impl Harness {
    fn new() -> Self {
        let mut harness = Self {
            ctx: egui::Context::default(),
            app: SpaceTicTacToeApp::with_config(UiConfig::default()),
            screen: Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 720.0)),
            time: 0.0,
        };
        // First frame pins app time at 0; jump past the intro so the board holds still
        harness.frame(Vec::new());
        harness.time = 10.0;
        harness.frame(Vec::new());
        harness.frame(Vec::new());
        harness
    }

    fn now(&self) -> f32 {
        self.time as f32
    }

    fn frame(&mut self, events: Vec<Event>) -> Vec<OutputEvent> {
        let input = RawInput {
            screen_rect: Some(self.screen),
            time: Some(self.time),
            events,
            ..Default::default()
        };
        let app = &mut self.app;
        let output = self.ctx.run(input, |ctx| app.ui(ctx));
        self.time += FRAME;
        output.platform_output.events
    }

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        }
    }

    /// Move, press and release at `pos`; returns the release frame's events
    fn click(&mut self, pos: Pos2) -> Vec<OutputEvent> {
        self.frame(vec![Event::PointerMoved(pos)]);
        self.frame(vec![Self::button(pos, true)]);
        self.frame(vec![Self::button(pos, false)])
    }

    fn click_cell(&mut self, index: usize) -> Vec<OutputEvent> {
        let center = self.app.board_layout(self.screen, self.now()).cell_rect(index).center();

        self.frame(vec![Event::PointerMoved(center)]);
        let state = self.app.interaction().cell_state(index);
        assert!(state.hovered, "cell {index} not hovered");
        assert!(!state.pressed);

        self.frame(vec![Self::button(center, true)]);
        assert!(self.app.interaction().cell_state(index).pressed, "cell {index} not pressed");

        let events = self.frame(vec![Self::button(center, false)]);
        assert!(!self.app.interaction().cell_state(index).pressed);
        events
    }
}

fn clicked_label(events: &[OutputEvent]) -> Option<String> {
    events.iter().find_map(|event| match event {
        OutputEvent::Clicked(info) => info.label.clone(),
        _ => None,
    })
}

#[test]
fn clicking_cells_plays_the_game() {
    let mut harness = Harness::new();

    for index in [0, 3, 1, 4, 2] {
        let events = harness.click_cell(index);
        assert_eq!(clicked_label(&events), Some(format!("Square {}", index + 1)));
    }

    let game = harness.app.game();
    assert_eq!(game.moves(), &[0, 3, 1, 4, 2]);
    assert_eq!(game.status(), Status::Winner(Player::X));
    assert_eq!(game.status().to_string(), "Winner: X");
}

#[test]
fn clicking_an_occupied_cell_changes_nothing() {
    let mut harness = Harness::new();

    harness.click_cell(4);
    let events = harness.click_cell(4);

    // The widget still reports the click; the game ignores it
    assert_eq!(clicked_label(&events), Some("Square 5".to_string()));
    assert_eq!(harness.app.game().moves(), &[4]);
    assert_eq!(harness.app.game().current_player(), Player::O);
}

#[test]
fn reset_button_clears_the_board() {
    let mut harness = Harness::new();
    for index in [0, 3, 1, 4, 2] {
        harness.click_cell(index);
    }

    let button = harness.app.reset_button_rect(harness.screen);
    assert_eq!(button.center(), Pos2::new(400.0, 598.0));

    let events = harness.click(button.center());

    assert_eq!(clicked_label(&events), Some("Reset Game".to_string()));
    assert!(harness.app.game().board().is_empty());
    assert_eq!(harness.app.game().status().to_string(), "Next player: X");
}

#[test]
fn pointer_off_the_board_hovers_nothing() {
    let mut harness = Harness::new();
    harness.frame(vec![Event::PointerMoved(Pos2::new(20.0, 20.0))]);

    for index in 0..9 {
        assert_eq!(harness.app.interaction().cell_state(index), Default::default());
    }
}

//! Board interaction handling

use egui::{Sense, Ui, WidgetInfo, WidgetType};
use space_tictactoe_core::board::CELL_COUNT;

use super::BoardLayout;

/// Pointer state of one cell for the current frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellState {
    pub hovered: bool,
    pub pressed: bool,
}

/// Board interaction handler
#[derive(Debug, Default)]
pub struct BoardInteraction {
    cells: [CellState; CELL_COUNT],
}

impl BoardInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every cell as a clickable widget and return the clicked cell.
    ///
    /// Cells are always clickable; whether a click does anything is up to the
    /// game state.
    pub fn handle_interaction(&mut self, ui: &mut Ui, layout: &BoardLayout) -> Option<usize> {
        let mut clicked = None;

        for index in 0..CELL_COUNT {
            let id = ui.id().with(("cell", index));
            let response = ui.interact(layout.cell_rect(index), id, Sense::click());
            response.widget_info(|| {
                WidgetInfo::labeled(WidgetType::Button, format!("Square {}", index + 1))
            });

            self.cells[index] = CellState {
                hovered: response.hovered(),
                pressed: response.is_pointer_button_down_on(),
            };

            if response.clicked() {
                clicked = Some(index);
            }
        }

        clicked
    }

    pub fn cell_state(&self, index: usize) -> CellState {
        self.cells.get(index).copied().unwrap_or_default()
    }
}

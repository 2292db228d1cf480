//! Board rendering components

mod interaction;
mod renderer;

pub use interaction::{BoardInteraction, CellState};
pub use renderer::BoardRenderer;

use egui::{Pos2, Rect, Vec2};
use space_tictactoe_core::board::CELL_COUNT;

/// Geometry of the 3x3 grid of cells inside the board area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    /// Whole board area, gaps included
    pub rect: Rect,
    /// Space between neighbouring cells
    pub gap: f32,
}

impl BoardLayout {
    pub fn new(rect: Rect, gap: f32) -> Self {
        Self { rect, gap }
    }

    /// Square board of `size` centered on `center`
    pub fn centered(center: Pos2, size: f32, gap: f32) -> Self {
        Self::new(Rect::from_center_size(center, Vec2::splat(size)), gap)
    }

    /// Side length of one cell
    pub fn cell_size(&self) -> f32 {
        ((self.rect.width().min(self.rect.height()) - 2.0 * self.gap) / 3.0).max(0.0)
    }

    /// Screen rectangle of cell `index`
    pub fn cell_rect(&self, index: usize) -> Rect {
        let size = self.cell_size();
        let (row, col) = ((index / 3) as f32, (index % 3) as f32);
        let min = self.rect.min + Vec2::new(col * (size + self.gap), row * (size + self.gap));
        Rect::from_min_size(min, Vec2::splat(size))
    }

    /// Cell under `pos`; gaps and the outside map to nothing
    pub fn index_at(&self, pos: Pos2) -> Option<usize> {
        (0..CELL_COUNT).find(|&index| self.cell_rect(index).contains(pos))
    }

    /// The same layout scaled around its center
    pub fn scaled(&self, scale: f32) -> Self {
        Self {
            rect: Rect::from_center_size(self.rect.center(), self.rect.size() * scale),
            gap: self.gap * scale,
        }
    }
}

//! Modular UI components organized by feature

pub mod board;
pub mod game;

// Re-export commonly used components
pub use board::{BoardInteraction, BoardLayout, BoardRenderer};
pub use game::{GameControls, GameStatus};

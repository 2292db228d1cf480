//! Game-related UI components

mod controls;
mod status;

pub use controls::GameControls;
pub use status::GameStatus;

// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(clippy::all)]

//! Space Tic-Tac-Toe egui front end

pub mod animation;
pub mod app;
pub mod components;
pub mod headless;
pub mod mark_animation;
pub mod starfield;
pub mod theme;
pub mod ui_config;

pub use app::SpaceTicTacToeApp;
pub use ui_config::UiConfig;

// SPDX-License-Identifier: MIT OR Apache-2.0

//! UI Configuration System
//!
//! This module provides the tunable look and feel of the game:
//! - Window title and size
//! - Board geometry and cell interaction scales
//! - Starfield density, drift speed and fade-in
//! - Spring used by every animation
//! - Color scheme

use std::path::Path;

use anyhow::{ensure, Context, Result};
use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::animation::Spring;
use crate::starfield::StarfieldParams;

/// Complete UI configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Window configuration
    pub window: WindowConfig,
    /// Board visual configuration
    pub board: BoardConfig,
    /// Background stars
    pub starfield: StarfieldConfig,
    /// Spring shared by intro and mark animations
    pub spring: Spring,
    /// Color scheme
    pub colors: ColorScheme,
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial window size (width, height)
    pub initial_size: (f32, f32),
    /// Minimum window size
    pub min_size: (f32, f32),
}

/// Board visual configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Board size in points (square)
    pub size: f32,
    /// Gap between cells
    pub gap: f32,
    /// Cell corner rounding
    pub corner_radius: f32,
    /// Cell scale while hovered
    pub hover_scale: f32,
    /// Cell scale while pressed
    pub press_scale: f32,
    /// Mark stroke width as a fraction of the cell size
    pub mark_stroke_ratio: f32,
    /// Title font size
    pub title_font_size: f32,
    /// Status line font size
    pub status_font_size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarfieldConfig {
    pub count: usize,
    pub fade_in_secs: f32,
    pub min_drift_secs: f32,
    pub max_drift_secs: f32,
}

/// Color scheme configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Gradient stops, top-left to bottom-right
    pub background_start: SerializableColor,
    pub background_middle: SerializableColor,
    pub background_end: SerializableColor,
    /// Cell fill
    pub cell: SerializableColor,
    /// Cell fill on the winning line
    pub winning_cell: SerializableColor,
    /// Reset button
    pub button: SerializableColor,
    /// Reset button hovered
    pub button_hover: SerializableColor,
    /// Marks, title and status text
    pub text: SerializableColor,
    pub star: SerializableColor,
}

/// Serializable color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Color32> for SerializableColor {
    fn from(color: Color32) -> Self {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        Self { r, g, b, a }
    }
}

impl From<SerializableColor> for Color32 {
    fn from(color: SerializableColor) -> Self {
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            board: BoardConfig::default(),
            starfield: StarfieldConfig::default(),
            spring: Spring::default(),
            colors: ColorScheme::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Space Tic-Tac-Toe".to_string(),
            initial_size: (800.0, 720.0),
            min_size: (420.0, 560.0),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: 320.0,
            gap: 16.0,
            corner_radius: 8.0,
            hover_scale: 1.05,
            press_scale: 0.95,
            mark_stroke_ratio: 0.1,
            title_font_size: 36.0,
            status_font_size: 20.0,
        }
    }
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        let params = StarfieldParams::default();
        Self {
            count: params.count,
            fade_in_secs: params.fade_in_secs,
            min_drift_secs: params.min_period,
            max_drift_secs: params.max_period,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            background_start: Color32::from_rgb(49, 46, 129).into(), // indigo-900
            background_middle: Color32::from_rgb(88, 28, 135).into(), // purple-900
            background_end: Color32::from_rgb(131, 24, 67).into(),   // pink-900
            cell: Color32::from_rgba_unmultiplied(126, 34, 206, 77).into(), // purple-700 @ 30%
            winning_cell: Color32::from_rgba_unmultiplied(219, 39, 119, 128).into(),
            button: Color32::from_rgb(219, 39, 119).into(), // pink-600
            button_hover: Color32::from_rgb(190, 24, 93).into(), // pink-700
            text: Color32::WHITE.into(),
            star: Color32::WHITE.into(),
        }
    }
}

impl StarfieldConfig {
    pub fn params(&self) -> StarfieldParams {
        StarfieldParams {
            count: self.count,
            min_period: self.min_drift_secs,
            max_period: self.max_drift_secs,
            fade_in_secs: self.fade_in_secs,
        }
    }
}

impl UiConfig {
    /// Load config from a JSON file; missing sections take their defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let (w, h) = self.window.initial_size;
        ensure!(w > 0.0 && h > 0.0, "window size must be positive");
        let (min_w, min_h) = self.window.min_size;
        ensure!(
            min_w > 0.0 && min_h > 0.0,
            "minimum window size must be positive"
        );
        ensure!(self.board.size > 0.0, "board size must be positive");
        ensure!(self.board.gap >= 0.0, "board gap must not be negative");
        ensure!(
            self.board.gap * 2.0 < self.board.size,
            "board gap leaves no room for cells"
        );
        ensure!(
            self.board.hover_scale > 0.0 && self.board.press_scale > 0.0,
            "cell scales must be positive"
        );
        // 0 gives square cells
        ensure!(
            self.board.corner_radius >= 0.0,
            "cell corner radius must not be negative"
        );
        ensure!(
            self.board.mark_stroke_ratio > 0.0,
            "mark stroke ratio must be positive"
        );
        ensure!(
            self.board.title_font_size > 0.0 && self.board.status_font_size > 0.0,
            "font sizes must be positive"
        );
        ensure!(
            self.starfield.min_drift_secs > 0.0,
            "star drift period must be positive"
        );
        ensure!(
            self.starfield.min_drift_secs <= self.starfield.max_drift_secs,
            "star drift min period exceeds max period"
        );
        ensure!(
            self.spring.stiffness > 0.0 && self.spring.mass > 0.0,
            "spring stiffness and mass must be positive"
        );
        ensure!(self.spring.damping > 0.0, "spring damping must be positive");
        Ok(())
    }
}

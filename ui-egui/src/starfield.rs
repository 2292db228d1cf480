// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drifting starfield painted behind the board

use egui::{Color32, Painter, Pos2, Rect};
use rand::Rng;

use crate::animation::{ease_in_out, fade};

/// Star radius in points before scaling
const STAR_RADIUS: f32 = 2.0;

/// Starfield generation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarfieldParams {
    pub count: usize,
    pub min_period: f32,
    pub max_period: f32,
    pub fade_in_secs: f32,
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            count: 50,
            min_period: 10.0,
            max_period: 20.0,
            fade_in_secs: 2.0,
        }
    }
}

/// A single star; positions are fractions of the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f32,
    pub start_y: f32,
    pub target_y: f32,
    pub scale: f32,
    /// Seconds for one leg of the drift
    pub period: f32,
}

impl Star {
    /// Normalized vertical position at `t`, bouncing between start and target
    pub fn y_at(&self, t: f32) -> f32 {
        if self.period <= 0.0 {
            return self.start_y;
        }
        let cycle = (t.max(0.0) / self.period) % 2.0;
        let leg = if cycle <= 1.0 { cycle } else { 2.0 - cycle };
        self.start_y + (self.target_y - self.start_y) * ease_in_out(leg)
    }

    /// Screen position inside `viewport` at `t`
    pub fn position_at(&self, t: f32, viewport: Rect) -> Pos2 {
        Pos2::new(
            viewport.min.x + self.x * viewport.width(),
            viewport.min.y + self.y_at(t) * viewport.height(),
        )
    }

    pub fn radius(&self) -> f32 {
        STAR_RADIUS * self.scale
    }
}

/// Background stars generated once per app start
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    fade_in_secs: f32,
}

impl Starfield {
    pub fn generate<R: Rng>(rng: &mut R, params: StarfieldParams) -> Self {
        let stars = (0..params.count)
            .map(|_| Star {
                x: rng.gen_range(0.0..1.0),
                start_y: rng.gen_range(0.0..1.0),
                target_y: rng.gen_range(0.0..1.0),
                scale: rng.gen_range(0.5..1.0),
                period: if params.min_period < params.max_period {
                    rng.gen_range(params.min_period..params.max_period)
                } else {
                    params.min_period
                },
            })
            .collect::<Vec<_>>();

        tracing::debug!(count = stars.len(), "Starfield generated");

        Self {
            stars,
            fade_in_secs: params.fade_in_secs,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Opacity of the whole field while it fades in
    pub fn opacity(&self, t: f32) -> f32 {
        fade(t, 0.0, self.fade_in_secs)
    }

    pub fn paint(&self, painter: &Painter, viewport: Rect, t: f32, color: Color32) {
        let alpha = self.opacity(t);
        if alpha <= 0.0 {
            return;
        }
        let color = color.gamma_multiply(alpha);

        for star in &self.stars {
            painter.circle_filled(star.position_at(t, viewport), star.radius(), color);
        }
    }
}

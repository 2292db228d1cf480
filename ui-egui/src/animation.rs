// SPDX-License-Identifier: MIT OR Apache-2.0

//! Spring and easing curves shared by the board, marks and intro

use serde::{Deserialize, Serialize};

/// Damped spring driving a value from 0 towards 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: 260.0,
            damping: 20.0,
            mass: 1.0,
        }
    }
}

impl Spring {
    /// Closed-form response at `t` seconds, starting at rest at 0.
    ///
    /// Overshoots past 1 when underdamped.
    pub fn value(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }

        let omega = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping / (2.0 * (self.stiffness * self.mass).sqrt());

        let displacement = if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega * t).exp();
            envelope * ((omega_d * t).cos() + (zeta * omega / omega_d) * (omega_d * t).sin())
        } else if (zeta - 1.0).abs() < f32::EPSILON {
            (1.0 + omega * t) * (-omega * t).exp()
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        };

        1.0 - displacement
    }

    /// Whether the response has come within `epsilon` of 1 for good
    pub fn is_settled(&self, t: f32) -> bool {
        let omega = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping / (2.0 * (self.stiffness * self.mass).sqrt());
        // Slowest decaying mode
        let decay = if zeta < 1.0 {
            zeta * omega
        } else {
            omega * (zeta - (zeta * zeta - 1.0).sqrt())
        };
        t > 0.0 && (-decay * t).exp() * (1.0 + omega * t) < 1e-3
    }

    /// Interpolate from `from` to `to` along the response
    pub fn lerp(&self, from: f32, to: f32, t: f32) -> f32 {
        from + (to - from) * self.value(t)
    }
}

/// Smooth ease in-out (cubic)
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Linear 0..1 ramp that starts after `delay` and lasts `duration` seconds
pub fn fade(t: f32, delay: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return if t >= delay { 1.0 } else { 0.0 };
    }
    ((t - delay) / duration).clamp(0.0, 1.0)
}

/// Opening animation for the title, board and status line
#[derive(Debug, Clone, Copy)]
pub struct IntroAnimation {
    spring: Spring,
}

/// Offset and opacity for the title
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleFrame {
    pub y_offset: f32,
    pub opacity: f32,
}

/// Scale and opacity for the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardFrame {
    pub scale: f32,
    pub opacity: f32,
}

impl IntroAnimation {
    const TITLE_START_OFFSET: f32 = -50.0;
    const BOARD_START_SCALE: f32 = 0.8;
    const STATUS_DELAY: f32 = 0.5;
    const STATUS_FADE: f32 = 0.3;

    pub fn new(spring: Spring) -> Self {
        Self { spring }
    }

    pub fn title(&self, t: f32) -> TitleFrame {
        TitleFrame {
            y_offset: self.spring.lerp(Self::TITLE_START_OFFSET, 0.0, t),
            opacity: self.spring.value(t).clamp(0.0, 1.0),
        }
    }

    pub fn board(&self, t: f32) -> BoardFrame {
        BoardFrame {
            scale: self.spring.lerp(Self::BOARD_START_SCALE, 1.0, t),
            opacity: self.spring.value(t).clamp(0.0, 1.0),
        }
    }

    pub fn status_opacity(&self, t: f32) -> f32 {
        fade(t, Self::STATUS_DELAY, Self::STATUS_FADE)
    }

    pub fn is_finished(&self, t: f32) -> bool {
        self.spring.is_settled(t) && self.status_opacity(t) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spring_starts_at_zero_and_settles_at_one() {
        let spring = Spring::default();
        assert_eq!(spring.value(0.0), 0.0);
        assert!((spring.value(2.0) - 1.0).abs() < 1e-3);
        assert!(spring.is_settled(2.0));
        assert!(!spring.is_settled(0.05));
    }

    #[test]
    fn default_spring_overshoots() {
        let spring = Spring::default();
        let peak = (1..100)
            .map(|i| spring.value(i as f32 * 0.01))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn overdamped_and_critical_springs_do_not_overshoot() {
        for damping in [2.0 * 260.0_f32.sqrt(), 80.0] {
            let spring = Spring {
                damping,
                ..Spring::default()
            };
            for i in 0..300 {
                let v = spring.value(i as f32 * 0.01);
                assert!((0.0..=1.0 + 1e-4).contains(&v), "value {v} at step {i}");
            }
            assert!((spring.value(5.0) - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(0.5), 0.5);
    }

    #[test]
    fn status_fades_in_after_delay() {
        let intro = IntroAnimation::new(Spring::default());
        assert_eq!(intro.status_opacity(0.4), 0.0);
        assert!(intro.status_opacity(0.65) > 0.0);
        assert_eq!(intro.status_opacity(1.0), 1.0);
        assert_eq!(intro.title(0.0).y_offset, -50.0);
        assert_eq!(intro.board(0.0).scale, 0.8);
        assert!(intro.is_finished(3.0));
    }
}

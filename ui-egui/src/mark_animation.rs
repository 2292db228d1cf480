// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pop-in and spin-out animations for X and O marks

use std::f32::consts::PI;

use space_tictactoe_core::Player;

use crate::animation::Spring;

/// Types of mark animations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationType {
    /// Mark just placed: grows from nothing while unwinding half a turn
    Enter,
    /// Mark removed by a reset: shrinks away while spinning
    Exit,
}

/// Animation state for a single mark
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkAnimation {
    /// Cell index of the mark
    pub index: usize,
    /// Mark being animated
    pub player: Player,
    /// Animation start, in seconds of app time
    pub start_time: f32,
    pub animation_type: AnimationType,
}

/// Transform values for rendering
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkTransform {
    pub scale: f32,
    /// Radians, clockwise
    pub rotation: f32,
    pub opacity: f32,
}

impl MarkTransform {
    /// A mark at rest
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation: 0.0,
        opacity: 1.0,
    };
}

impl MarkAnimation {
    pub fn new_enter(index: usize, player: Player, now: f32) -> Self {
        Self {
            index,
            player,
            start_time: now,
            animation_type: AnimationType::Enter,
        }
    }

    pub fn new_exit(index: usize, player: Player, now: f32) -> Self {
        Self {
            index,
            player,
            start_time: now,
            animation_type: AnimationType::Exit,
        }
    }

    /// Current transform under `spring`
    pub fn transform(&self, spring: &Spring, now: f32) -> MarkTransform {
        let t = now - self.start_time;
        match self.animation_type {
            AnimationType::Enter => MarkTransform {
                scale: spring.value(t).max(0.0),
                rotation: spring.lerp(-PI, 0.0, t),
                opacity: 1.0,
            },
            AnimationType::Exit => {
                let scale = spring.lerp(1.0, 0.0, t).max(0.0);
                MarkTransform {
                    scale,
                    rotation: spring.lerp(0.0, PI, t),
                    opacity: scale.min(1.0),
                }
            }
        }
    }

    pub fn is_complete(&self, spring: &Spring, now: f32) -> bool {
        spring.is_settled(now - self.start_time)
    }
}

/// Animation manager for the board marks
#[derive(Debug, Default)]
pub struct AnimationManager {
    /// Active animations
    animations: Vec<MarkAnimation>,
    spring: Spring,
}

impl AnimationManager {
    pub fn new(spring: Spring) -> Self {
        Self {
            animations: Vec::new(),
            spring,
        }
    }

    /// Add a new animation, replacing any running on the same cell
    pub fn add_animation(&mut self, animation: MarkAnimation) {
        self.animations.retain(|a| a.index != animation.index);
        self.animations.push(animation);
    }

    /// Start exit animations for every mark on a board that is being reset
    pub fn start_exit(&mut self, cells: &[Option<Player>], now: f32) {
        for (index, cell) in cells.iter().enumerate() {
            if let Some(player) = cell {
                self.add_animation(MarkAnimation::new_exit(index, *player, now));
            }
        }
    }

    /// Drop finished animations; returns whether any remain
    pub fn update(&mut self, now: f32) -> bool {
        let spring = self.spring;
        self.animations.retain(|anim| !anim.is_complete(&spring, now));
        self.has_animations()
    }

    /// Transform for the entering mark on `index`, or identity when at rest
    pub fn enter_transform(&self, index: usize, now: f32) -> MarkTransform {
        self.animations
            .iter()
            .find(|a| a.index == index && a.animation_type == AnimationType::Enter)
            .map(|a| a.transform(&self.spring, now))
            .unwrap_or(MarkTransform::IDENTITY)
    }

    /// Marks still spinning out after a reset, with their transforms
    pub fn exiting(&self, now: f32) -> impl Iterator<Item = (usize, Player, MarkTransform)> + '_ {
        self.animations
            .iter()
            .filter(|a| a.animation_type == AnimationType::Exit)
            .map(move |a| (a.index, a.player, a.transform(&self.spring, now)))
    }

    pub fn has_animations(&self) -> bool {
        !self.animations.is_empty()
    }
}

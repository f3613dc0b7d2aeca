//! Cross-fade between camera poses when the active profile changes.

use bevy::math::Vec2;

use crate::profile::ProfileTransition;

/// Whether a cross-fade is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    Transitioning,
}

/// Timer and start pose of the current cross-fade.
///
/// The phase is derived from the timer on every query; a transition ends once
/// `timer >= duration` without any explicit reset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransitionState {
    pub timer: f32,
    pub duration: f32,
    pub start_position: Vec2,
    pub start_size: f32,
}

impl TransitionState {
    /// Starts a cross-fade away from the given pose.
    pub fn start(&mut self, transition: ProfileTransition, start_position: Vec2, start_size: f32) {
        self.timer = 0.0;
        self.duration = transition.duration();
        self.start_position = start_position;
        self.start_size = start_size;
    }

    pub fn phase(&self) -> TransitionPhase {
        if self.timer < self.duration {
            TransitionPhase::Transitioning
        } else {
            TransitionPhase::Idle
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase() == TransitionPhase::Transitioning
    }

    pub fn advance(&mut self, dt: f32) {
        self.timer += dt;
    }

    /// Fraction of the transition elapsed.
    ///
    /// Not clamped: the last blended frame may report slightly more than 1
    /// when the timer overshoots the duration.
    pub fn percent(&self) -> f32 {
        if self.duration > 0.0 {
            self.timer / self.duration
        } else {
            1.0
        }
    }

    pub fn blend_position(&self, destination: Vec2) -> Vec2 {
        self.start_position.lerp(destination, self.percent())
    }

    pub fn blend_size(&self, destination: f32) -> f32 {
        self.start_size + (destination - self.start_size) * self.percent()
    }
}

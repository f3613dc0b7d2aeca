//! ECS components read and written by the camera systems.

use bevy::prelude::*;

/// Marker for the render camera driven by the camera manager.
#[derive(Component, Debug, Clone, Default)]
pub struct ScrollCamera;

/// An entity a follow profile can track.
///
/// The followed point is the entity's translation plus `anchor`.
#[derive(Component, Debug, Clone, Default)]
pub struct CameraFollowable {
    pub anchor: Vec2,
}

impl CameraFollowable {
    pub fn with_anchor(anchor: Vec2) -> Self {
        Self { anchor }
    }
}

/// Horizontal facing of an entity, +1 right and -1 left.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FacingDirection {
    pub orient_x: f32,
}

impl Default for FacingDirection {
    fn default() -> Self {
        Self { orient_x: 1.0 }
    }
}

impl FacingDirection {
    pub fn right() -> Self {
        Self { orient_x: 1.0 }
    }

    pub fn left() -> Self {
        Self { orient_x: -1.0 }
    }

    /// Turns around.
    pub fn flip(&mut self) {
        self.orient_x = -self.orient_x;
    }
}

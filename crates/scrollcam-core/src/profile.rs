//! Camera profile data.
//!
//! A profile describes how the camera should behave while it is active:
//! where it looks, how it smooths, and which world rectangle it is confined to.
//! Profiles are authored by gameplay code and are read-only to the camera.

use bevy::math::{Rect, Vec2};
use bevy::prelude::Entity;
use serde::{Deserialize, Serialize};

use crate::error::CameraError;

/// Behavior selected by a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProfileType {
    /// Hold `position`.
    #[default]
    Static,
    /// Track `target_to_follow`.
    FollowTarget,
    /// Scroll from `position` at a constant velocity.
    AutoScroll,
}

/// Declarative camera behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraProfile {
    /// Name used in logs and scenario scripts.
    pub name: String,
    pub profile_type: ProfileType,
    /// Static framing point, and the start point of auto-scroll.
    pub position: Vec2,
    /// Orthographic half-height in world units.
    pub camera_size: f32,
    /// Entity whose position is followed (`FollowTarget` only).
    #[serde(skip)]
    pub target_to_follow: Option<Entity>,
    /// Entity whose facing drives the horizontal offset.
    #[serde(skip)]
    pub object_to_follow: Option<Entity>,
    pub follow_offset_x: f32,
    pub follow_offset_damping: f32,
    /// World units per second.
    pub auto_scroll_horizontal: f32,
    /// World units per second.
    pub auto_scroll_vertical: f32,
    pub use_damping_horizontally: bool,
    pub use_damping_vertically: bool,
    pub horizontal_damping_factor: f32,
    pub vertical_damping_factor: f32,
    /// Whether `bounds_rect` confines the viewport.
    pub as_bounds: bool,
    pub bounds_rect: Rect,
}

impl Default for CameraProfile {
    fn default() -> Self {
        Self {
            name: String::from("default"),
            profile_type: ProfileType::Static,
            position: Vec2::ZERO,
            camera_size: 5.0,
            target_to_follow: None,
            object_to_follow: None,
            follow_offset_x: 0.0,
            follow_offset_damping: 0.0,
            auto_scroll_horizontal: 0.0,
            auto_scroll_vertical: 0.0,
            use_damping_horizontally: false,
            use_damping_vertically: false,
            horizontal_damping_factor: 0.0,
            vertical_damping_factor: 0.0,
            as_bounds: false,
            bounds_rect: Rect::default(),
        }
    }
}

impl CameraProfile {
    /// Creates a static profile framing `position`.
    pub fn fixed(name: impl Into<String>, position: Vec2, camera_size: f32) -> Self {
        Self {
            name: name.into(),
            position,
            camera_size,
            ..Self::default()
        }
    }

    /// Creates a profile following `target`.
    ///
    /// `fallback` is used as `position`, which the camera holds until the
    /// target has been resolved at least once.
    pub fn follow(name: impl Into<String>, target: Entity, fallback: Vec2, camera_size: f32) -> Self {
        Self {
            name: name.into(),
            profile_type: ProfileType::FollowTarget,
            position: fallback,
            camera_size,
            target_to_follow: Some(target),
            ..Self::default()
        }
    }

    /// Creates an auto-scrolling profile starting at `start`.
    pub fn auto_scroll(name: impl Into<String>, start: Vec2, velocity: Vec2, camera_size: f32) -> Self {
        Self {
            name: name.into(),
            profile_type: ProfileType::AutoScroll,
            position: start,
            camera_size,
            auto_scroll_horizontal: velocity.x,
            auto_scroll_vertical: velocity.y,
            ..Self::default()
        }
    }

    /// Enables the facing-driven horizontal offset.
    #[must_use]
    pub fn with_offset(mut self, facing_source: Entity, offset_x: f32, damping: f32) -> Self {
        self.object_to_follow = Some(facing_source);
        self.follow_offset_x = offset_x;
        self.follow_offset_damping = damping;
        self
    }

    /// Enables per-axis damping. A factor of `None` disables the axis.
    #[must_use]
    pub fn with_damping(mut self, horizontal: Option<f32>, vertical: Option<f32>) -> Self {
        self.use_damping_horizontally = horizontal.is_some();
        self.horizontal_damping_factor = horizontal.unwrap_or(0.0);
        self.use_damping_vertically = vertical.is_some();
        self.vertical_damping_factor = vertical.unwrap_or(0.0);
        self
    }

    /// Confines the viewport to `rect`.
    #[must_use]
    pub fn with_bounds(mut self, rect: Rect) -> Self {
        self.as_bounds = true;
        self.bounds_rect = rect;
        self
    }

    /// Auto-scroll velocity in world units per second.
    pub fn auto_scroll_velocity(&self) -> Vec2 {
        Vec2::new(self.auto_scroll_horizontal, self.auto_scroll_vertical)
    }
}

/// Request to cross-fade into a newly activated profile.
///
/// The duration is validated on construction, so a transition can always be
/// divided by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTransition", into = "RawTransition")]
pub struct ProfileTransition {
    duration: f32,
}

impl ProfileTransition {
    /// Creates a transition lasting `duration` seconds.
    pub fn new(duration: f32) -> Result<Self, CameraError> {
        if duration.is_finite() && duration > 0.0 {
            Ok(Self { duration })
        } else {
            Err(CameraError::InvalidTransitionDuration(duration))
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}

#[derive(Serialize, Deserialize)]
struct RawTransition {
    duration: f32,
}

impl TryFrom<RawTransition> for ProfileTransition {
    type Error = CameraError;

    fn try_from(raw: RawTransition) -> Result<Self, Self::Error> {
        Self::new(raw.duration)
    }
}

impl From<ProfileTransition> for RawTransition {
    fn from(transition: ProfileTransition) -> Self {
        Self {
            duration: transition.duration,
        }
    }
}

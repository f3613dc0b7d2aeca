//! Viewport geometry and world-bounds clamping.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::profile::CameraProfile;

/// Pixel size of the render target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height, or 1.0 for a degenerate viewport.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height > 0.0 && self.width > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Half of the world-space area visible with an orthographic half-height
    /// of `camera_size`.
    pub fn world_half_extent(&self, camera_size: f32) -> Vec2 {
        Vec2::new(camera_size * self.aspect_ratio(), camera_size)
    }
}

/// Keeps the viewport footprint inside the profile's bounds rectangle.
///
/// Each axis checks the upper limit first and then the lower one. When the
/// rectangle is narrower than the viewport the limits cross and the lower
/// limit wins.
pub fn clamp_to_bounds(profile: &CameraProfile, mut position: Vec2, half_extent: Vec2) -> Vec2 {
    if !profile.as_bounds {
        return position;
    }

    let rect = profile.bounds_rect;
    let upper = rect.max - half_extent;
    let lower = rect.min + half_extent;

    if position.x > upper.x {
        position.x = upper.x;
    }
    if position.x < lower.x {
        position.x = lower.x;
    }

    if position.y > upper.y {
        position.y = upper.y;
    }
    if position.y < lower.y {
        position.y = lower.y;
    }

    position
}

#[cfg(test)]
mod tests {
    use bevy::math::Rect;

    use super::*;

    fn bounded(rect: Rect) -> CameraProfile {
        CameraProfile::default().with_bounds(rect)
    }

    #[test]
    fn test_clamps_far_edge() {
        let profile = bounded(Rect::new(0.0, 0.0, 100.0, 100.0));
        let result = clamp_to_bounds(&profile, Vec2::new(105.0, 50.0), Vec2::new(10.0, 10.0));
        assert_eq!(result, Vec2::new(90.0, 50.0));
    }

    #[test]
    fn test_clamps_near_edge() {
        let profile = bounded(Rect::new(0.0, 0.0, 100.0, 100.0));
        let result = clamp_to_bounds(&profile, Vec2::new(-20.0, 3.0), Vec2::new(10.0, 10.0));
        assert_eq!(result, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let profile = bounded(Rect::new(-50.0, 0.0, 50.0, 30.0));
        let half = Vec2::new(8.0, 4.5);

        for raw in [
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(-100.0, 15.0),
            Vec2::new(41.9, 25.6),
        ] {
            let once = clamp_to_bounds(&profile, raw, half);
            assert_eq!(clamp_to_bounds(&profile, once, half), once);
        }
    }

    #[test]
    fn test_disabled_bounds_is_identity() {
        let mut profile = bounded(Rect::new(0.0, 0.0, 1.0, 1.0));
        profile.as_bounds = false;

        for raw in [Vec2::new(-1e5, 1e5), Vec2::new(0.5, 0.5), Vec2::new(f32::MAX, 0.0)] {
            assert_eq!(clamp_to_bounds(&profile, raw, Vec2::new(10.0, 10.0)), raw);
        }
    }

    #[test]
    fn test_crossed_limits_prefer_lower_bound() {
        // 10 wide, but the viewport is 20 wide: upper = 0, lower = 10.
        let profile = bounded(Rect::new(0.0, 0.0, 10.0, 100.0));
        let half = Vec2::new(10.0, 10.0);

        assert_eq!(clamp_to_bounds(&profile, Vec2::new(50.0, 50.0), half).x, 10.0);
        assert_eq!(clamp_to_bounds(&profile, Vec2::new(-50.0, 50.0), half).x, 10.0);
        assert_eq!(clamp_to_bounds(&profile, Vec2::new(5.0, 50.0), half).x, 10.0);
    }

    #[test]
    fn test_world_half_extent_uses_aspect() {
        let viewport = Viewport::new(1600.0, 900.0);
        let half = viewport.world_half_extent(9.0);
        assert!((half.x - 16.0).abs() < 1e-5);
        assert_eq!(half.y, 9.0);

        assert_eq!(Viewport::new(0.0, 0.0).world_half_extent(2.0), Vec2::new(2.0, 2.0));
    }
}

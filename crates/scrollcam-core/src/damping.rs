//! Per-axis damping of the camera position.

use bevy::math::Vec2;

use crate::profile::CameraProfile;

/// Linear interpolation with the parameter saturated to `[0, 1]`.
///
/// The rate is `factor * dt`, so damping depends on frame time; any rate at
/// or above 1 reaches the target in a single frame.
pub fn lerp_saturating(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

/// Advances the damping filter toward `position` and returns the new state.
///
/// Axes with damping disabled are hard-set to the target.
pub fn damp(profile: &CameraProfile, position: Vec2, state: &mut Vec2, dt: f32) -> Vec2 {
    state.x = if profile.use_damping_horizontally {
        lerp_saturating(state.x, position.x, profile.horizontal_damping_factor * dt)
    } else {
        position.x
    };

    state.y = if profile.use_damping_vertically {
        lerp_saturating(state.y, position.y, profile.vertical_damping_factor * dt)
    } else {
        position.y
    };

    *state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_damping_is_passthrough() {
        let profile = CameraProfile::default();
        let mut state = Vec2::new(-30.0, 12.0);

        for target in [Vec2::ZERO, Vec2::new(1e6, -1e6), Vec2::new(0.1, 0.2)] {
            assert_eq!(damp(&profile, target, &mut state, 0.016), target);
            assert_eq!(state, target);
        }
    }

    #[test]
    fn test_axes_are_independent() {
        let profile = CameraProfile::default().with_damping(Some(2.0), None);
        let mut state = Vec2::ZERO;

        // Horizontal rate 2 * 0.25 = 0.5, vertical snaps.
        let result = damp(&profile, Vec2::new(10.0, 10.0), &mut state, 0.25);
        assert_eq!(result, Vec2::new(5.0, 10.0));

        let profile = CameraProfile::default().with_damping(None, Some(2.0));
        let mut state = Vec2::ZERO;
        let result = damp(&profile, Vec2::new(10.0, 10.0), &mut state, 0.25);
        assert_eq!(result, Vec2::new(10.0, 5.0));
    }

    #[test]
    fn test_converges_over_frames() {
        let profile = CameraProfile::default().with_damping(Some(4.0), Some(4.0));
        let mut state = Vec2::ZERO;
        let target = Vec2::new(8.0, -8.0);

        let mut previous = state.distance(target);
        for _ in 0..30 {
            damp(&profile, target, &mut state, 0.05);
            let distance = state.distance(target);
            assert!(distance < previous);
            previous = distance;
        }
        assert!(previous < 0.01);
    }

    #[test]
    fn test_large_rate_reaches_target_without_overshoot() {
        let profile = CameraProfile::default().with_damping(Some(100.0), Some(100.0));
        let mut state = Vec2::ZERO;

        let result = damp(&profile, Vec2::new(3.0, 4.0), &mut state, 0.5);
        assert_eq!(result, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_lerp_saturating() {
        assert_eq!(lerp_saturating(0.0, 10.0, 0.25), 2.5);
        assert_eq!(lerp_saturating(0.0, 10.0, -1.0), 0.0);
        assert_eq!(lerp_saturating(0.0, 10.0, 3.0), 10.0);
    }
}

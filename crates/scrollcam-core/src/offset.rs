//! Facing-driven horizontal offset for follow profiles.

use bevy::math::Vec2;

use crate::damping::lerp_saturating;
use crate::profile::{CameraProfile, ProfileType};
use crate::resolver::TargetSource;

/// Shifts `position.x` ahead of the followed entity's facing direction.
///
/// `offset_state` is the smoothed x the camera eases through while the
/// entity turns around. During a transition the offset snaps and the state
/// is hard-set, so smoothing resumes from the right value afterwards.
///
/// Smoothing is only applied when `follow_offset_x > 0`.
#[allow(clippy::float_cmp)]
pub fn apply_offset(
    profile: &CameraProfile,
    mut position: Vec2,
    is_transitioning: bool,
    offset_state: &mut f32,
    targets: &impl TargetSource,
    dt: f32,
) -> Vec2 {
    if profile.profile_type != ProfileType::FollowTarget {
        return position;
    }

    let facing = profile.object_to_follow.and_then(|entity| targets.facing(entity));
    match facing {
        Some(orient) if orient == 1.0 => position.x += profile.follow_offset_x,
        Some(orient) if orient == -1.0 => position.x -= profile.follow_offset_x,
        _ => return position,
    }

    if is_transitioning {
        *offset_state = position.x;
        return position;
    }

    if profile.follow_offset_x > 0.0 {
        *offset_state = lerp_saturating(*offset_state, position.x, profile.follow_offset_damping * dt);
        position.x = *offset_state;
    }

    position
}

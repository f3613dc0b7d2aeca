//! Target resolution: the raw position a profile asks for this frame.

use bevy::math::Vec2;
use bevy::prelude::Entity;

use crate::profile::{CameraProfile, ProfileType};

/// Read access to the entities a profile may reference.
///
/// Both lookups return `None` when the entity no longer exists or lacks the
/// required capability; callers treat that as "absent", never as an error.
pub trait TargetSource {
    /// World position of a followable entity.
    fn follow_position(&self, entity: Entity) -> Option<Vec2>;
    /// Horizontal facing of an entity (+1 right, -1 left).
    fn facing(&self, entity: Entity) -> Option<f32>;
}

/// A `TargetSource` that resolves nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTargets;

impl TargetSource for NoTargets {
    fn follow_position(&self, _entity: Entity) -> Option<Vec2> {
        None
    }

    fn facing(&self, _entity: Entity) -> Option<f32> {
        None
    }
}

/// State owned by the resolver across frames.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolverState {
    /// Last position read from the follow target.
    pub last_follow_destination: Vec2,
    /// Running integral of the auto-scroll velocity.
    pub auto_scroll: Vec2,
}

impl ResolverState {
    /// Seeds the auto-scroll accumulator for a profile that just became active.
    pub fn enter(&mut self, profile: &CameraProfile) {
        if profile.profile_type == ProfileType::AutoScroll {
            self.auto_scroll = profile.position;
        }
    }
}

/// Resolves the raw desired camera position for `profile`.
///
/// A follow profile whose target cannot be read keeps returning the last
/// known destination instead of snapping back to `profile.position`.
pub fn resolve(
    profile: &CameraProfile,
    state: &mut ResolverState,
    targets: &impl TargetSource,
    dt: f32,
) -> Vec2 {
    match profile.profile_type {
        ProfileType::Static => profile.position,
        ProfileType::FollowTarget => {
            if let Some(position) = profile
                .target_to_follow
                .and_then(|entity| targets.follow_position(entity))
            {
                state.last_follow_destination = position;
            }
            state.last_follow_destination
        }
        ProfileType::AutoScroll => {
            state.auto_scroll += profile.auto_scroll_velocity() * dt;
            state.auto_scroll
        }
    }
}

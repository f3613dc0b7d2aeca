//! Camera manager: owns the active profile and runs the per-frame pipeline.
//!
//! Every frame the raw target goes through
//! resolve -> offset -> clamp -> damp, and the result is either used directly
//! or blended with the pose the camera had when the profile last changed.

use std::sync::Arc;

use bevy::math::Vec2;
use serde::Serialize;

use crate::bounds::{Viewport, clamp_to_bounds};
use crate::damping::damp;
use crate::offset::apply_offset;
use crate::profile::{CameraProfile, ProfileTransition, ProfileType};
use crate::resolver::{ResolverState, TargetSource, resolve};
use crate::transition::{TransitionPhase, TransitionState};

/// Shared handle to an immutable profile.
///
/// Identity (not equality) decides whether an exit request targets the
/// active profile.
pub type ProfileHandle = Arc<CameraProfile>;

/// Position and orthographic half-height applied to the render camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CameraPose {
    pub position: Vec2,
    pub size: f32,
}

/// Comparable copy of all mutable manager state.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagerSnapshot {
    pub current_profile: String,
    pub pose: CameraPose,
    pub resolver: ResolverState,
    pub damped_position: Vec2,
    pub damped_offset: f32,
    pub transition: TransitionState,
}

/// The single camera controller of a scene.
#[derive(Debug, Clone)]
pub struct CameraManager {
    default_profile: ProfileHandle,
    current_profile: ProfileHandle,
    viewport: Viewport,
    pose: CameraPose,
    resolver: ResolverState,
    damped_position: Vec2,
    damped_offset: f32,
    transition: TransitionState,
}

impl CameraManager {
    /// Creates a manager resting on `default_profile`.
    ///
    /// Filters are seeded from the raw profile position; call [`Self::init`]
    /// once targets can be resolved.
    pub fn new(default_profile: impl Into<ProfileHandle>, viewport: Viewport) -> Self {
        let default_profile = default_profile.into();
        let mut resolver = ResolverState::default();
        resolver.enter(&default_profile);

        Self {
            pose: CameraPose {
                position: default_profile.position,
                size: default_profile.camera_size,
            },
            damped_position: default_profile.position,
            damped_offset: default_profile.position.x,
            current_profile: Arc::clone(&default_profile),
            default_profile,
            viewport,
            resolver,
            transition: TransitionState::default(),
        }
    }

    /// Activates the default profile and snaps the camera to it.
    pub fn init(&mut self, targets: &impl TargetSource) {
        self.current_profile = Arc::clone(&self.default_profile);
        self.resolver.enter(&self.current_profile);
        self.transition = TransitionState::default();
        self.pose = CameraPose {
            position: self.current_profile.position,
            size: self.current_profile.camera_size,
        };
        self.reseed_filters(targets);

        tracing::info!(
            "[camera] init profile={} pose=({:.2}, {:.2}) size={:.2}",
            self.current_profile.name,
            self.pose.position.x,
            self.pose.position.y,
            self.pose.size
        );
    }

    /// Makes `profile` the active profile.
    ///
    /// With a transition the camera fades from its current pose; without one
    /// it jumps on the next frame. Either way the damping baseline snaps to
    /// the new profile's resolved target.
    pub fn enter_profile(
        &mut self,
        profile: impl Into<ProfileHandle>,
        transition: Option<ProfileTransition>,
        targets: &impl TargetSource,
    ) {
        let profile = profile.into();
        tracing::info!(
            "[camera] enter profile={} type={:?} transition={:?}",
            profile.name,
            profile.profile_type,
            transition.map(|t| t.duration())
        );

        if profile.profile_type == ProfileType::FollowTarget
            && profile
                .target_to_follow
                .and_then(|entity| targets.follow_position(entity))
                .is_none()
        {
            tracing::warn!(
                "[camera] profile {} has no resolvable follow target, holding last destination",
                profile.name
            );
        }

        self.resolver.enter(&profile);
        self.current_profile = profile;
        if let Some(transition) = transition {
            self.transition.start(transition, self.pose.position, self.pose.size);
        }
        self.reseed_filters(targets);
    }

    /// Returns to the default profile if `profile` is still the active one.
    ///
    /// Returns `false` and changes nothing when another profile has taken over
    /// in the meantime.
    pub fn exit_profile(
        &mut self,
        profile: &ProfileHandle,
        transition: Option<ProfileTransition>,
        targets: &impl TargetSource,
    ) -> bool {
        if !Arc::ptr_eq(profile, &self.current_profile) {
            tracing::debug!(
                "[camera] ignoring exit of inactive profile={} (active={})",
                profile.name,
                self.current_profile.name
            );
            return false;
        }

        tracing::info!("[camera] exit profile={}", profile.name);
        let default_profile = Arc::clone(&self.default_profile);
        self.enter_profile(default_profile, transition, targets);
        true
    }

    /// Runs one frame of the pipeline and returns the pose to apply.
    pub fn tick(&mut self, dt: f32, targets: &impl TargetSource) -> CameraPose {
        let profile = &*self.current_profile;
        let transitioning = self.transition.is_transitioning();

        let mut next = resolve(profile, &mut self.resolver, targets, dt);
        next = apply_offset(profile, next, transitioning, &mut self.damped_offset, targets, dt);
        next = clamp_to_bounds(profile, next, self.viewport.world_half_extent(self.pose.size));
        next = damp(profile, next, &mut self.damped_position, dt);

        self.pose = if transitioning {
            self.transition.advance(dt);
            let pose = CameraPose {
                position: self.transition.blend_position(next),
                size: self.transition.blend_size(profile.camera_size),
            };
            if !self.transition.is_transitioning() {
                tracing::debug!("[camera] transition into {} finished", profile.name);
            }
            pose
        } else {
            CameraPose {
                position: next,
                size: profile.camera_size,
            }
        };

        self.pose
    }

    fn reseed_filters(&mut self, targets: &impl TargetSource) {
        let profile = &*self.current_profile;
        let target = resolve(profile, &mut self.resolver, targets, 0.0);
        let seeded = clamp_to_bounds(profile, target, self.viewport.world_half_extent(self.pose.size));
        self.damped_position = seeded;
        self.damped_offset = seeded.x;
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn phase(&self) -> TransitionPhase {
        self.transition.phase()
    }

    pub fn current_profile(&self) -> &ProfileHandle {
        &self.current_profile
    }

    pub fn default_profile(&self) -> &ProfileHandle {
        &self.default_profile
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn snapshot(&self) -> ManagerSnapshot {
        ManagerSnapshot {
            current_profile: self.current_profile.name.clone(),
            pose: self.pose,
            resolver: self.resolver,
            damped_position: self.damped_position,
            damped_offset: self.damped_offset,
            transition: self.transition,
        }
    }
}

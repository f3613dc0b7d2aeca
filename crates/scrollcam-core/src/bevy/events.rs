//! Messages accepted by the camera systems.

use bevy::prelude::*;

use crate::manager::ProfileHandle;
use crate::profile::ProfileTransition;

/// Request to switch the active camera profile.
///
/// Requests are applied in the order they were written, before the camera
/// is evaluated in the same frame.
#[derive(Message, Debug, Clone)]
pub enum CameraProfileRequest {
    /// Activate `profile`.
    Enter {
        profile: ProfileHandle,
        transition: Option<ProfileTransition>,
    },
    /// Return to the default profile if `profile` is still active.
    Exit {
        profile: ProfileHandle,
        transition: Option<ProfileTransition>,
    },
}

impl CameraProfileRequest {
    pub fn enter(profile: impl Into<ProfileHandle>, transition: Option<ProfileTransition>) -> Self {
        Self::Enter {
            profile: profile.into(),
            transition,
        }
    }

    pub fn exit(profile: ProfileHandle, transition: Option<ProfileTransition>) -> Self {
        Self::Exit { profile, transition }
    }
}

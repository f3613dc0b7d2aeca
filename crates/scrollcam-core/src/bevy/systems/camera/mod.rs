//! Camera systems.
//!
//! Per frame, in order:
//! - `handle_profile_requests`: apply queued enter/exit requests
//! - `update_scroll_camera`: run the camera pipeline
//! - `apply_camera_pose` / `apply_camera_projection`: write the pose out

pub mod profile;
pub mod render;

pub use profile::*;
pub use render::*;

use bevy::prelude::*;

use crate::bevy::{CameraManagerRes, ScrollCamera};

/// System to copy the manager's pose onto the camera transform.
///
/// Only x and y are written; z keeps whatever depth the camera was given.
pub fn apply_camera_pose(camera: Res<CameraManagerRes>, mut cameras: Query<&mut Transform, With<ScrollCamera>>) {
    let pose = camera.manager.pose();
    for mut transform in cameras.iter_mut() {
        transform.translation.x = pose.position.x;
        transform.translation.y = pose.position.y;
    }
}

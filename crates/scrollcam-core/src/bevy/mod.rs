//! Bevy integration for the profile camera.
//!
//! The camera manager lives in a resource inserted by the plugin, gameplay
//! code talks to it either directly through `ResMut<CameraManagerRes>` or by
//! writing `CameraProfileRequest` messages, and the resulting pose is copied
//! onto every entity marked `ScrollCamera`.

pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

#[cfg(test)]
pub(crate) mod test_utils;

pub use components::*;
pub use events::*;
pub use plugin::{ScrollCameraHeadlessPlugin, ScrollCameraPlugin, ScrollCameraSet};
pub use resources::*;
pub use systems::camera::{
    CameraTargets, apply_camera_pose, apply_camera_projection, handle_profile_requests,
    seed_camera_manager, spawn_scroll_camera, track_viewport, update_scroll_camera,
};

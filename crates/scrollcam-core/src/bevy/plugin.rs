//! Bevy plugins for the profile camera.
//!
//! Provides:
//! - `ScrollCameraHeadlessPlugin`: manager, requests and transform output, no window/render dependencies
//! - `ScrollCameraPlugin`: headless plugin + camera spawning, window tracking and projection output

use bevy::prelude::*;

use crate::bevy::events::CameraProfileRequest;
use crate::bevy::resources::CameraManagerRes;
use crate::bevy::systems;
use crate::bounds::Viewport;
use crate::manager::CameraManager;
use crate::profile::CameraProfile;

/// Ordering of the camera's per-frame work in `Update`.
///
/// Gameplay systems that switch profiles should run before
/// `ScrollCameraSet::Requests` (or write requests earlier in the frame) so the
/// switch is visible in the same frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScrollCameraSet {
    /// Apply enter/exit requests.
    Requests,
    /// Run the camera pipeline.
    Evaluate,
    /// Write the pose to camera entities.
    Apply,
}

// ============================================================================
// Headless Plugin (logic only, no rendering/window dependencies)
// ============================================================================

/// Headless plugin containing the camera manager and its logic systems.
///
/// Use this plugin in tests with `MinimalPlugins`.
///
/// Excluded systems (rendering-dependent):
/// - Window-dependent systems (track_viewport)
/// - Projection-dependent systems (apply_camera_projection)
/// - Camera2d spawning (spawn_scroll_camera)
#[derive(Default)]
pub struct ScrollCameraHeadlessPlugin {
    /// Profile active at startup and after every exit.
    pub default_profile: CameraProfile,
    /// Pixel size used for bounds clamping until a window reports one.
    pub viewport: Viewport,
}

impl Plugin for ScrollCameraHeadlessPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(CameraManagerRes::new(CameraManager::new(
            self.default_profile.clone(),
            self.viewport,
        )));

        app.add_message::<CameraProfileRequest>();

        app.configure_sets(
            Update,
            (
                ScrollCameraSet::Requests,
                ScrollCameraSet::Evaluate,
                ScrollCameraSet::Apply,
            )
                .chain(),
        );

        app.add_systems(Startup, systems::seed_camera_manager);

        app.add_systems(
            Update,
            (
                systems::handle_profile_requests.in_set(ScrollCameraSet::Requests),
                systems::update_scroll_camera.in_set(ScrollCameraSet::Evaluate),
                systems::apply_camera_pose.in_set(ScrollCameraSet::Apply),
            ),
        );
    }
}

// ============================================================================
// Full Plugin (headless + rendering)
// ============================================================================

/// Headless logic plus the systems that need `Window`, `Projection` and
/// `Camera2d`.
#[derive(Default)]
pub struct ScrollCameraPlugin {
    pub default_profile: CameraProfile,
    pub viewport: Viewport,
}

impl Plugin for ScrollCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(ScrollCameraHeadlessPlugin {
            default_profile: self.default_profile.clone(),
            viewport: self.viewport,
        });

        app.add_systems(
            Startup,
            systems::spawn_scroll_camera.after(systems::seed_camera_manager),
        );

        app.add_systems(
            Update,
            (
                systems::track_viewport.before(ScrollCameraSet::Evaluate),
                systems::apply_camera_projection.in_set(ScrollCameraSet::Apply),
            ),
        );
    }
}

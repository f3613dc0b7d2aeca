//! Window and projection systems.
//!
//! These need `Window`/`Projection` and are only added by `ScrollCameraPlugin`.

use bevy::camera::ScalingMode;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::bevy::{CameraManagerRes, ScrollCamera};
use crate::bounds::Viewport;

/// Spawns the render camera at the manager's current pose.
pub fn spawn_scroll_camera(mut commands: Commands, camera: Res<CameraManagerRes>) {
    let pose = camera.manager.pose();
    commands.spawn((
        Camera2d,
        ScrollCamera,
        Transform::from_xyz(pose.position.x, pose.position.y, 0.0),
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: pose.size * 2.0,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
    tracing::info!("[camera] scroll camera spawned");
}

/// System to keep the manager's viewport in sync with the primary window.
pub fn track_viewport(windows: Query<&Window, With<PrimaryWindow>>, mut camera: ResMut<CameraManagerRes>) {
    let Ok(window) = windows.single() else {
        return;
    };

    let viewport = Viewport::new(window.width(), window.height());
    if camera.manager.viewport() != viewport {
        tracing::debug!("[camera] viewport {}x{}", viewport.width, viewport.height);
        camera.manager.set_viewport(viewport);
    }
}

/// System to apply the camera size to orthographic projections.
///
/// The size is a half-height, so the projection shows `2 * size` world units
/// vertically.
pub fn apply_camera_projection(
    camera: Res<CameraManagerRes>,
    mut projections: Query<&mut Projection, With<ScrollCamera>>,
) {
    let size = camera.manager.pose().size;
    for mut projection in projections.iter_mut() {
        if let Projection::Orthographic(ortho) = projection.as_mut() {
            ortho.scaling_mode = ScalingMode::FixedVertical {
                viewport_height: size * 2.0,
            };
        }
    }
}

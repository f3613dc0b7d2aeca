//! ECS resources for the profile camera.

use bevy::prelude::*;

use crate::manager::CameraManager;

/// The scene's single camera manager.
///
/// Inserted once by the plugin and dropped with the app.
#[derive(Resource, Debug, Clone)]
pub struct CameraManagerRes {
    pub manager: CameraManager,
}

impl CameraManagerRes {
    pub fn new(manager: CameraManager) -> Self {
        Self { manager }
    }
}

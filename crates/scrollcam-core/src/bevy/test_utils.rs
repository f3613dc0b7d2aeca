//! Test utilities for headless Bevy integration tests.
//!
//! Provides `TestApp`, a wrapper around `bevy::app::App` that uses
//! `MinimalPlugins` + `ScrollCameraHeadlessPlugin` with a fixed frame time.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::bevy::plugin::ScrollCameraHeadlessPlugin;
use crate::bevy::{CameraFollowable, CameraManagerRes, CameraProfileRequest, FacingDirection, ScrollCamera};
use crate::bounds::Viewport;
use crate::manager::CameraManager;
use crate::profile::CameraProfile;

/// Frame time used by `TestApp::new`.
pub const TEST_DT: f32 = 0.25;

/// A headless Bevy app wrapper for testing.
pub(crate) struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Create a new test app resting on `default_profile`.
    pub fn new(default_profile: CameraProfile) -> Self {
        Self::with_frame_time(default_profile, TEST_DT)
    }

    /// Create a new test app where every update advances time by `dt`.
    pub fn with_frame_time(default_profile: CameraProfile, dt: f32) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(ScrollCameraHeadlessPlugin {
            default_profile,
            viewport: Viewport::new(1280.0, 720.0),
        });
        let frame_time = Duration::from_secs_f32(dt);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(frame_time));
        // Virtual time caps each frame at 250ms by default; lift the cap so
        // large frame times reach the systems unshortened.
        {
            let mut virtual_time = app.world_mut().resource_mut::<Time<Virtual>>();
            let max_delta = virtual_time.max_delta().max(frame_time);
            virtual_time.set_max_delta(max_delta);
        }
        // The first update runs Startup and sees a zero delta.
        app.update();
        Self { app }
    }

    /// Run a single frame update.
    pub fn update(&mut self) {
        self.app.update();
    }

    /// Run `frames` updates.
    pub fn advance(&mut self, frames: usize) {
        for _ in 0..frames {
            self.app.update();
        }
    }

    /// Spawn a render camera stand-in at `translation`.
    pub fn spawn_camera(&mut self, translation: Vec3) -> Entity {
        self.world_mut()
            .spawn((ScrollCamera, Transform::from_translation(translation)))
            .id()
    }

    /// Spawn a followable entity, optionally with a facing direction.
    pub fn spawn_target(&mut self, position: Vec2, facing: Option<FacingDirection>) -> Entity {
        let mut entity = self.world_mut().spawn((
            CameraFollowable::default(),
            Transform::from_translation(position.extend(0.0)),
        ));
        if let Some(facing) = facing {
            entity.insert(facing);
        }
        entity.id()
    }

    /// Teleport a followable entity.
    pub fn move_target(&mut self, entity: Entity, position: Vec2) {
        if let Some(mut transform) = self.world_mut().get_mut::<Transform>(entity) {
            transform.translation.x = position.x;
            transform.translation.y = position.y;
        }
    }

    /// Queue a profile request for the next update.
    pub fn request(&mut self, request: CameraProfileRequest) {
        self.world_mut().write_message(request);
    }

    /// Get the camera manager.
    pub fn manager(&self) -> &CameraManager {
        &self.world().resource::<CameraManagerRes>().manager
    }

    /// Get a camera entity's translation.
    pub fn camera_translation(&self, camera: Entity) -> Vec3 {
        self.world()
            .get::<Transform>(camera)
            .map(|transform| transform.translation)
            .unwrap_or_default()
    }

    /// Get a reference to the World.
    pub fn world(&self) -> &World {
        self.app.world()
    }

    /// Get a mutable reference to the World.
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}

//! Profile switching and per-frame evaluation.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::bevy::{CameraFollowable, CameraManagerRes, CameraProfileRequest, FacingDirection};
use crate::resolver::TargetSource;

/// Looks up follow targets and facing sources for the camera manager.
///
/// Gameplay systems that call the manager directly should take this as a
/// parameter and pass it along.
#[derive(SystemParam)]
pub struct CameraTargets<'w, 's> {
    followables: Query<'w, 's, (&'static Transform, &'static CameraFollowable)>,
    facings: Query<'w, 's, &'static FacingDirection>,
}

impl TargetSource for CameraTargets<'_, '_> {
    fn follow_position(&self, entity: Entity) -> Option<Vec2> {
        self.followables
            .get(entity)
            .ok()
            .map(|(transform, followable)| transform.translation.truncate() + followable.anchor)
    }

    fn facing(&self, entity: Entity) -> Option<f32> {
        self.facings.get(entity).ok().map(|facing| facing.orient_x)
    }
}

/// Startup system: activates the default profile.
pub fn seed_camera_manager(mut camera: ResMut<CameraManagerRes>, targets: CameraTargets) {
    camera.manager.init(&targets);
}

/// System to apply queued profile requests in order.
pub fn handle_profile_requests(
    mut camera: ResMut<CameraManagerRes>,
    mut requests: MessageReader<CameraProfileRequest>,
    targets: CameraTargets,
) {
    for request in requests.read() {
        match request {
            CameraProfileRequest::Enter { profile, transition } => {
                camera.manager.enter_profile(profile.clone(), *transition, &targets);
            }
            CameraProfileRequest::Exit { profile, transition } => {
                camera.manager.exit_profile(profile, *transition, &targets);
            }
        }
    }
}

/// System to run the camera pipeline once per frame.
pub fn update_scroll_camera(time: Res<Time>, mut camera: ResMut<CameraManagerRes>, targets: CameraTargets) {
    camera.manager.tick(time.delta_secs(), &targets);
}

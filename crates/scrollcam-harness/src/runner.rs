//! Runs a scenario in a headless Bevy app.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use scrollcam_core::bevy::{
    CameraFollowable, CameraManagerRes, CameraProfileRequest, FacingDirection, ScrollCamera,
    ScrollCameraHeadlessPlugin,
};
use scrollcam_core::{ProfileHandle, TransitionPhase};
use serde::Serialize;

use crate::scenario::{Scenario, ScenarioError, Step, TargetScript};

/// Camera state after one frame.
#[derive(Debug, Clone, Serialize)]
pub struct FrameRecord {
    pub frame: u32,
    pub profile: String,
    pub transitioning: bool,
    pub position: [f32; 2],
    pub size: f32,
}

/// Runs `scenario` and returns one record per frame.
pub fn run(scenario: &Scenario) -> Result<Vec<FrameRecord>, ScenarioError> {
    scenario.validate()?;

    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(ScrollCameraHeadlessPlugin {
        default_profile: scenario.default_profile.clone(),
        viewport: scenario.viewport,
    });
    let frame_time = Duration::from_secs_f32(scenario.dt);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(frame_time));
    // Virtual time shortens frames above its max delta (250ms by default).
    {
        let mut virtual_time = app.world_mut().resource_mut::<Time<Virtual>>();
        let max_delta = virtual_time.max_delta().max(frame_time);
        virtual_time.set_max_delta(max_delta);
    }

    let camera = app
        .world_mut()
        .spawn((ScrollCamera, Transform::from_xyz(0.0, 0.0, 10.0)))
        .id();
    let target = scenario.target.as_ref().map(|script| {
        app.world_mut()
            .spawn((
                CameraFollowable::default(),
                FacingDirection::right(),
                Transform::from_translation(script.start.extend(0.0)),
            ))
            .id()
    });
    let profiles = bind_profiles(scenario, target);

    // Startup runs on the first update with a zero delta.
    app.update();

    let mut records = Vec::with_capacity(scenario.frames as usize);
    for frame in 0..scenario.frames {
        for step in scenario.steps.iter().filter(|step| step.frame() == frame) {
            let request = step_request(step, &profiles)?;
            app.world_mut().write_message(request);
        }

        if let (Some(entity), Some(script)) = (target, scenario.target.as_ref()) {
            move_target(app.world_mut(), entity, script, frame, scenario.dt);
        }

        app.update();

        let manager = &app.world().resource::<CameraManagerRes>().manager;
        let translation = app
            .world()
            .get::<Transform>(camera)
            .map(|transform| transform.translation)
            .unwrap_or_default();
        records.push(FrameRecord {
            frame,
            profile: manager.current_profile().name.clone(),
            transitioning: manager.phase() == TransitionPhase::Transitioning,
            position: [translation.x, translation.y],
            size: manager.pose().size,
        });
    }

    Ok(records)
}

/// Builds one shared handle per named profile, wired to the scripted target.
fn bind_profiles(scenario: &Scenario, target: Option<Entity>) -> HashMap<String, ProfileHandle> {
    scenario
        .profiles
        .iter()
        .map(|entry| {
            let mut profile = entry.profile.clone();
            if entry.follow_target {
                profile.target_to_follow = target;
            }
            if entry.use_facing {
                profile.object_to_follow = target;
            }
            (profile.name.clone(), Arc::new(profile))
        })
        .collect()
}

fn step_request(
    step: &Step,
    profiles: &HashMap<String, ProfileHandle>,
) -> Result<CameraProfileRequest, ScenarioError> {
    let profile = profiles
        .get(step.profile())
        .cloned()
        .ok_or_else(|| ScenarioError::UnknownProfile(step.profile().to_string()))?;

    Ok(match step {
        Step::Enter { transition, .. } => CameraProfileRequest::enter(profile, *transition),
        Step::Exit { transition, .. } => CameraProfileRequest::exit(profile, *transition),
    })
}

fn move_target(world: &mut World, entity: Entity, script: &TargetScript, frame: u32, dt: f32) {
    let turning = script
        .turn_every
        .is_some_and(|every| every > 0 && frame > 0 && frame % every == 0);
    let Ok(mut target) = world.get_entity_mut(entity) else {
        return;
    };

    if turning {
        if let Some(mut facing) = target.get_mut::<FacingDirection>() {
            facing.flip();
        }
    }
    let orient = target.get::<FacingDirection>().map_or(1.0, |facing| facing.orient_x);

    if let Some(mut transform) = target.get_mut::<Transform>() {
        let velocity = Vec2::new(script.velocity.x.abs() * orient, script.velocity.y);
        transform.translation += (velocity * dt).extend(0.0);
    }
}

//! Scenario files: a default profile, a scripted target and timed profile switches.

use std::collections::HashSet;

use bevy::math::Vec2;
use scrollcam_core::{CameraProfile, ProfileTransition, Viewport};
use serde::Deserialize;

const BUILTIN: &str = include_str!("../scenarios/follow_and_scroll.json");

/// Longest frame a scenario may declare, in seconds.
pub const MAX_FRAME_TIME: f32 = 1.0;

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("scenario parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("frame time must be finite, > 0 and <= {max}s, got: {0}", max = MAX_FRAME_TIME)]
    InvalidFrameTime(f32),
    #[error("unknown camera profile: {0}")]
    UnknownProfile(String),
    #[error("duplicate camera profile: {0}")]
    DuplicateProfile(String),
    #[error("profile {0} references the target, but the scenario has none")]
    MissingTarget(String),
}

fn default_dt() -> f32 {
    1.0 / 60.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Seconds per frame.
    #[serde(default = "default_dt")]
    pub dt: f32,
    pub frames: u32,
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub default_profile: CameraProfile,
    #[serde(default)]
    pub target: Option<TargetScript>,
    #[serde(default)]
    pub profiles: Vec<ScenarioProfile>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A followable entity moving at constant velocity.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetScript {
    #[serde(default)]
    pub start: Vec2,
    /// World units per second.
    #[serde(default)]
    pub velocity: Vec2,
    /// Reverse facing and horizontal velocity every N frames.
    #[serde(default)]
    pub turn_every: Option<u32>,
}

/// A named profile plus how it binds to the scripted target.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioProfile {
    pub profile: CameraProfile,
    /// Follow the scripted target.
    #[serde(default)]
    pub follow_target: bool,
    /// Offset by the scripted target's facing.
    #[serde(default)]
    pub use_facing: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Enter {
        frame: u32,
        profile: String,
        #[serde(default)]
        transition: Option<ProfileTransition>,
    },
    Exit {
        frame: u32,
        profile: String,
        #[serde(default)]
        transition: Option<ProfileTransition>,
    },
}

impl Step {
    pub fn frame(&self) -> u32 {
        match self {
            Self::Enter { frame, .. } | Self::Exit { frame, .. } => *frame,
        }
    }

    pub fn profile(&self) -> &str {
        match self {
            Self::Enter { profile, .. } | Self::Exit { profile, .. } => profile,
        }
    }
}

impl Scenario {
    pub fn from_json(text: &str) -> Result<Self, ScenarioError> {
        let scenario: Self = serde_json::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// The demo scenario bundled with the binary.
    pub fn builtin() -> Result<Self, ScenarioError> {
        Self::from_json(BUILTIN)
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        if !(self.dt.is_finite() && self.dt > 0.0 && self.dt <= MAX_FRAME_TIME) {
            return Err(ScenarioError::InvalidFrameTime(self.dt));
        }

        let mut names = HashSet::new();
        for entry in &self.profiles {
            let name = &entry.profile.name;
            if !names.insert(name.as_str()) {
                return Err(ScenarioError::DuplicateProfile(name.clone()));
            }
            if (entry.follow_target || entry.use_facing) && self.target.is_none() {
                return Err(ScenarioError::MissingTarget(name.clone()));
            }
        }

        if let Some(step) = self.steps.iter().find(|step| !names.contains(step.profile())) {
            return Err(ScenarioError::UnknownProfile(step.profile().to_string()));
        }

        Ok(())
    }
}

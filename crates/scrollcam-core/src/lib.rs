//! Scrollcam Core Library
//!
//! Profile-driven 2D camera: each frame the active profile's target is
//! resolved, offset, clamped into bounds and damped, and cross-faded when the
//! profile changes.
//!
//! - Pipeline modules (`resolver`, `offset`, `bounds`, `damping`, `transition`)
//!   are plain functions over `CameraProfile` and explicit state.
//! - `manager` owns that state and the profile switch logic.
//! - `bevy` wires the manager into a Bevy app.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod bounds;
pub mod damping;
pub mod error;
pub mod manager;
pub mod offset;
pub mod profile;
pub mod resolver;
pub mod transition;

// Bevy integration
pub mod bevy;

pub use bounds::{Viewport, clamp_to_bounds};
pub use damping::damp;
pub use error::CameraError;
pub use manager::{CameraManager, CameraPose, ManagerSnapshot, ProfileHandle};
pub use offset::apply_offset;
pub use profile::{CameraProfile, ProfileTransition, ProfileType};
pub use resolver::{NoTargets, ResolverState, TargetSource, resolve};
pub use transition::{TransitionPhase, TransitionState};

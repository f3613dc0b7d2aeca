//! Systems for the profile camera.
//!
//! - camera: profile requests, per-frame evaluation, pose/projection output

pub mod camera;

pub use camera::*;

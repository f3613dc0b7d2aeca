//! Error types for the camera core.

/// Errors raised while building camera inputs.
///
/// Per-frame evaluation never fails; missing targets fall back to cached
/// values instead of producing an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CameraError {
    #[error("transition duration must be finite and > 0, got: {0}")]
    InvalidTransitionDuration(f32),
}

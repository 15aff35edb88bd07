//! Error types.

use thiserror::Error;

/// Errors returned by frame operations that can fail.
///
/// The layout core itself never fails; these cover the stubbed operations
/// and reading/writing saved layouts.
#[derive(Debug, Error)]
pub enum FrameError {
    /// The operation exists but is not implemented for this frame type.
    #[error("{0}: temporarily unimplemented")]
    Unsupported(&'static str),
    /// A set/unset/toggle argument could not be parsed.
    #[error("invalid set parameter: {0:?} (expected set, unset or toggle)")]
    InvalidSetParam(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed frame configuration: {0}")]
    Json(#[from] serde_json::Error),
}

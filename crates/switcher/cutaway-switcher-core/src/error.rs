//! Error types for the camera switcher.

use serde::{Deserialize, Serialize};

/// Errors surfaced by cut-list edits and animation generation.
///
/// None of these are fatal: the operator layer recovers every variant at the
/// call boundary and turns it into a status report.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SwitchError {
    /// Generate was invoked with an empty cut list.
    #[error("no cameras configured")]
    NoCamerasConfigured,

    /// A referenced camera is missing from the host scene.
    #[error("camera not found: '{name}'")]
    CameraNotFound { name: String },

    /// Cut-list removal with an out-of-range index.
    #[error("index {index} out of range for cut list of length {len}")]
    InvalidIndex { index: usize, len: usize },

    /// Schedule configuration rejected by validation.
    #[error("invalid schedule config: {reason}")]
    InvalidConfig { reason: String },
}

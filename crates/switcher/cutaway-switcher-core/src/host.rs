//! Host traits: the collaborator surface the embedding application implements.
//!
//! The switcher never walks a scene graph itself. Hosts implement
//! `PoseResolver`/`KeyframeSink` (enough for the scheduler) and `SceneHost`
//! (the full surface for the operator layer) and pass themselves into calls.
//! All access is synchronous and single-threaded within one borrowed call.

use crate::error::SwitchError;
use cutaway_api_core::{Frame, KeyOp, Pose};

/// Opaque camera handle (host object name).
pub type CameraHandle = String;

/// Resolve a camera handle to its current pose.
pub trait PoseResolver {
    /// `None` when the handle no longer names a live camera.
    fn resolve(&mut self, camera: &str) -> Option<Pose>;
}

/// Mutable access to the master camera's keyframe timeline.
pub trait KeyframeSink {
    /// Drop every key on the master camera timeline.
    fn clear_keys(&mut self);

    /// Insert one key, overwriting any existing key at the same
    /// (channel, frame) coordinates.
    fn insert_key(&mut self, op: KeyOp);
}

/// Full collaborator surface for the operator layer.
pub trait SceneHost: PoseResolver + KeyframeSink {
    /// Handles of the currently selected cameras, in scene order.
    fn selected_cameras(&self) -> Vec<CameraHandle>;

    /// First frame of the scene's playback range.
    fn scene_start_frame(&self) -> Frame;

    /// Create a camera aligned to the current viewport and return its handle.
    fn create_camera_from_view(&mut self) -> Result<CameraHandle, SwitchError>;

    /// Make `camera` the scene's active camera. Returns false when the handle
    /// does not name a camera.
    fn set_active_camera(&mut self, camera: &str) -> bool;
}

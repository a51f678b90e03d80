//! Shared test fixture: an in-memory scene host.
//!
//! `MockScene` stands in for the embedding application in integration tests
//! and examples: named cameras with poses, a selection set, an active camera,
//! and the master-camera key store with overwrite-by-(channel, frame)
//! semantics.

use std::collections::BTreeMap;

use hashbrown::HashMap;

use cutaway_api_core::{Channel, Frame, KeyOp, Pose};
use cutaway_switcher::{CameraHandle, KeyframeSink, PoseResolver, SceneHost, SwitchError};

#[derive(Debug)]
pub struct MockScene {
    cameras: HashMap<String, Pose>,
    selected: Vec<String>,
    active: Option<String>,
    start_frame: Frame,
    view_pose: Pose,
    keys: BTreeMap<(Frame, Channel), [f32; 3]>,
    created: u32,
}

impl Default for MockScene {
    fn default() -> Self {
        Self {
            cameras: HashMap::new(),
            selected: Vec::new(),
            active: None,
            start_frame: 1,
            view_pose: Pose::default(),
            keys: BTreeMap::new(),
            created: 0,
        }
    }
}

impl MockScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a camera (builder style).
    pub fn with_camera(mut self, name: &str, pose: Pose) -> Self {
        self.cameras.insert(name.to_string(), pose);
        self
    }

    pub fn with_start_frame(mut self, frame: Frame) -> Self {
        self.start_frame = frame;
        self
    }

    /// Set the current viewport pose used by create_camera_from_view.
    pub fn set_view_pose(&mut self, pose: Pose) {
        self.view_pose = pose;
    }

    /// Mark a camera as selected (selection order is kept).
    pub fn select(&mut self, name: &str) {
        self.selected.push(name.to_string());
    }

    pub fn active_camera(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn has_camera(&self, name: &str) -> bool {
        self.cameras.contains_key(name)
    }

    /// Number of keys currently stored on the master timeline.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Distinct keyed frames, ascending.
    pub fn keyed_frames(&self) -> Vec<Frame> {
        let mut frames: Vec<Frame> = self.keys.keys().map(|(frame, _)| *frame).collect();
        frames.dedup();
        frames
    }

    pub fn key(&self, frame: Frame, channel: Channel) -> Option<[f32; 3]> {
        self.keys.get(&(frame, channel)).copied()
    }

    /// Full pose at a frame, if both channels are keyed there.
    pub fn pose_at(&self, frame: Frame) -> Option<Pose> {
        let position = self.key(frame, Channel::Location)?;
        let rotation = self.key(frame, Channel::RotationEuler)?;
        Some(Pose::new(position, rotation))
    }
}

impl PoseResolver for MockScene {
    fn resolve(&mut self, camera: &str) -> Option<Pose> {
        self.cameras.get(camera).copied()
    }
}

impl KeyframeSink for MockScene {
    fn clear_keys(&mut self) {
        self.keys.clear();
    }

    fn insert_key(&mut self, op: KeyOp) {
        self.keys.insert((op.frame, op.channel), op.value);
    }
}

impl SceneHost for MockScene {
    fn selected_cameras(&self) -> Vec<CameraHandle> {
        self.selected.clone()
    }

    fn scene_start_frame(&self) -> Frame {
        self.start_frame
    }

    fn create_camera_from_view(&mut self) -> Result<CameraHandle, SwitchError> {
        self.created += 1;
        let name = format!("Camera_From_View.{:03}", self.created);
        self.cameras.insert(name.clone(), self.view_pose);
        Ok(name)
    }

    fn set_active_camera(&mut self, camera: &str) -> bool {
        if self.cameras.contains_key(camera) {
            self.active = Some(camera.to_string());
            true
        } else {
            false
        }
    }
}

//! Keyframe write operations produced by the scheduler to describe writes into
//! the master camera's animation timeline.
//!
//! KeyOp serializes to JSON as:
//!   { "frame": 30, "channel": "location", "value": [1.0, 2.0, 3.0] }
//!
//! KeyBatch is a simple Vec<KeyOp> with helpers. Emission is overwriting by
//! (channel, frame), never additive: when a batch is applied, a later op at
//! the same coordinates replaces the earlier one.

use crate::channel::Channel;
use crate::pose::Pose;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Host frame number. Scene frames start at 1.
pub type Frame = i32;

/// One keyframe write: a 3-vector on a channel at a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyOp {
    pub frame: Frame,
    pub channel: Channel,
    pub value: [f32; 3],
}

impl KeyOp {
    pub fn new(frame: Frame, channel: Channel, value: [f32; 3]) -> Self {
        Self {
            frame,
            channel,
            value,
        }
    }
}

impl fmt::Display for KeyOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val = serde_json::to_string(&self.value).map_err(|_| fmt::Error)?;
        write!(
            f,
            "{{ frame: {}, channel: {}, value: {} }}",
            self.frame, self.channel, val
        )
    }
}

/// An ordered batch of key ops. The scheduler emits one batch per run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyBatch(pub Vec<KeyOp>);

impl KeyBatch {
    pub fn new() -> Self {
        KeyBatch(Vec::new())
    }

    pub fn push(&mut self, op: KeyOp) {
        self.0.push(op);
    }

    /// Push both pose channels at a frame.
    pub fn push_pose(&mut self, frame: Frame, pose: &Pose) {
        self.push(KeyOp::new(frame, Channel::Location, pose.position));
        self.push(KeyOp::new(frame, Channel::RotationEuler, pose.rotation));
    }

    pub fn extend(&mut self, other: impl IntoIterator<Item = KeyOp>) {
        self.0.extend(other);
    }

    pub fn into_vec(self) -> Vec<KeyOp> {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyOp> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge another batch in-place (append).
    pub fn append(&mut self, mut other: KeyBatch) {
        self.0.append(&mut other.0)
    }

    /// Distinct frames covered by the batch, ascending.
    pub fn frames(&self) -> Vec<Frame> {
        let mut frames: Vec<Frame> = self.0.iter().map(|op| op.frame).collect();
        frames.sort_unstable();
        frames.dedup();
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyop_roundtrip_json() {
        let op = KeyOp::new(30, Channel::Location, [1.0, 2.0, 3.0]);
        let s = serde_json::to_string(&op).unwrap();
        let parsed: KeyOp = serde_json::from_str(&s).unwrap();
        assert_eq!(op, parsed);
    }

    #[test]
    fn keybatch_json_array() {
        let mut b = KeyBatch::new();
        b.push(KeyOp::new(1, Channel::Location, [0.0, 0.0, 0.0]));
        b.push(KeyOp::new(1, Channel::RotationEuler, [0.5, 0.0, 0.0]));
        let s = serde_json::to_string(&b).unwrap();
        let parsed: KeyBatch = serde_json::from_str(&s).unwrap();
        assert_eq!(b, parsed);
    }

    #[test]
    fn push_pose_emits_both_channels() {
        let mut b = KeyBatch::new();
        b.push_pose(10, &Pose::new([1.0, 2.0, 3.0], [0.1, 0.2, 0.3]));
        assert_eq!(b.len(), 2);
        assert_eq!(b.0[0].channel, Channel::Location);
        assert_eq!(b.0[1].channel, Channel::RotationEuler);
        assert_eq!(b.0[1].value, [0.1, 0.2, 0.3]);
    }

    #[test]
    fn frames_sorted_and_deduped() {
        let mut b = KeyBatch::new();
        b.push_pose(50, &Pose::at(0.0, 0.0, 0.0));
        b.push_pose(1, &Pose::at(1.0, 0.0, 0.0));
        b.push_pose(50, &Pose::at(2.0, 0.0, 0.0));
        assert_eq!(b.frames(), vec![1, 50]);
    }
}

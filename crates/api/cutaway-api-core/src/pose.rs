//! Pose: position + orientation of a camera at a given frame.
//! All numeric types use f32.

use serde::{Deserialize, Serialize};

/// A camera pose: world-space position and Euler orientation (radians, XYZ order).
///
/// Poses are ephemeral: read from host cameras, written into key ops, never
/// retained. Interpolation between poses is the host's job.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Pose {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
}

impl Pose {
    pub fn new(position: [f32; 3], rotation: [f32; 3]) -> Self {
        Self { position, rotation }
    }

    /// Pose at a position with zero rotation.
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
            rotation: [0.0; 3],
        }
    }
}

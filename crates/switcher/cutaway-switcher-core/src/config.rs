//! Schedule configuration for the camera switcher.

use serde::{Deserialize, Serialize};

use crate::error::SwitchError;
use cutaway_api_core::Frame;

/// Per-scene generation settings.
///
/// An explicit struct passed into the scheduler; hosts that persist state per
/// scene serialize it alongside the cut list.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScheduleConfig {
    /// Number of frames before a successor's start at which the transition
    /// toward it begins. Must be >= 1.
    pub transition_frames: Frame,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            transition_frames: 10,
        }
    }
}

impl ScheduleConfig {
    pub fn new(transition_frames: Frame) -> Self {
        Self { transition_frames }
    }

    /// Validate basic invariants. Run by the scheduler before any work.
    pub fn validate(&self) -> Result<(), SwitchError> {
        if self.transition_frames < 1 {
            return Err(SwitchError::InvalidConfig {
                reason: format!(
                    "transition_frames must be >= 1, got {}",
                    self.transition_frames
                ),
            });
        }
        Ok(())
    }
}

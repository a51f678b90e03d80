//! Operator surface: the five user-facing actions over a host scene.
//!
//! Each operation returns an [`OpReport`] rather than a `Result`: library
//! errors are recovered at this boundary and surfaced as `Cancelled` reports
//! with a human-readable message, the way a host status line would show them.
//! Operations never panic and are safe to re-trigger.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::ScheduleConfig;
use crate::cutlist::{CutEntry, CutList};
use crate::error::SwitchError;
use crate::host::SceneHost;
use crate::schedule;

/// Outcome of one operator invocation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum OpStatus {
    Finished,
    Cancelled,
}

/// Status plus a human-readable message for the host UI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpReport {
    pub status: OpStatus,
    pub message: String,
}

impl OpReport {
    fn finished(message: impl Into<String>) -> Self {
        Self {
            status: OpStatus::Finished,
            message: message.into(),
        }
    }

    fn cancelled(message: impl Into<String>) -> Self {
        Self {
            status: OpStatus::Cancelled,
            message: message.into(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == OpStatus::Finished
    }
}

/// Cut list plus schedule settings; one per scene.
///
/// The host owns this alongside its scene data and borrows itself into each
/// operation.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Switcher {
    pub cuts: CutList,
    pub config: ScheduleConfig,
}

impl Switcher {
    pub fn new(config: ScheduleConfig) -> Self {
        Self {
            cuts: CutList::new(),
            config,
        }
    }

    /// Append every currently selected camera, each starting at the scene's
    /// start frame. Selection order is preserved.
    pub fn append_selected(&mut self, host: &impl SceneHost) -> OpReport {
        let selected = host.selected_cameras();
        let start = host.scene_start_frame();
        let count = selected.len();
        for camera in selected {
            self.cuts.push(CutEntry::new(camera, start));
        }
        OpReport::finished(format!("appended {count} selected camera(s)"))
    }

    /// Ask the host to create a camera aligned to the current viewport, make
    /// it active, and append it to the cut list.
    pub fn create_camera_from_view(&mut self, host: &mut impl SceneHost) -> OpReport {
        let camera = match host.create_camera_from_view() {
            Ok(camera) => camera,
            Err(err) => {
                warn!("create_camera_from_view failed: {err}");
                return OpReport::cancelled(err.to_string());
            }
        };
        host.set_active_camera(&camera);
        let start = host.scene_start_frame();
        self.cuts.push(CutEntry::new(camera.clone(), start));
        OpReport::finished(format!("created camera '{camera}' from current view"))
    }

    /// Remove the cut at `index`, preserving the order of the rest.
    pub fn remove_camera(&mut self, index: usize) -> OpReport {
        match self.cuts.remove(index) {
            Ok(entry) => OpReport::finished(format!("removed camera '{}'", entry.camera)),
            Err(err) => OpReport::cancelled(err.to_string()),
        }
    }

    /// Make `camera` the scene's active camera.
    pub fn set_active_camera(&self, host: &mut impl SceneHost, camera: &str) -> OpReport {
        if host.set_active_camera(camera) {
            OpReport::finished(format!("active camera set to '{camera}'"))
        } else {
            let err = SwitchError::CameraNotFound {
                name: camera.to_string(),
            };
            warn!("{err}");
            OpReport::cancelled(err.to_string())
        }
    }

    /// Regenerate the master-camera animation from the current cut list.
    pub fn generate_animation(&self, host: &mut impl SceneHost) -> OpReport {
        match schedule::generate_into(&self.cuts, &self.config, host) {
            Ok(count) => OpReport::finished(format!("camera animation generated ({count} keys)")),
            Err(err) => OpReport::cancelled(err.to_string()),
        }
    }
}

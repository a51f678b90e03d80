//! Cutaway switcher core (engine-agnostic)
//!
//! Owns the cut-list data model, schedule configuration, and the transition
//! scheduler that turns a cut list into master-camera keyframes. The host
//! application (scene graph, cameras, keyframe store) sits behind the traits
//! in `host`; embedders drive everything through `Switcher` or call the
//! `schedule` functions directly.

pub mod config;
pub mod cutlist;
pub mod error;
pub mod host;
pub mod ops;
pub mod schedule;

// Re-exports for consumers (host adapters)
pub use config::ScheduleConfig;
pub use cutlist::{CutEntry, CutList};
pub use error::SwitchError;
pub use host::{CameraHandle, KeyframeSink, PoseResolver, SceneHost};
pub use ops::{OpReport, OpStatus, Switcher};
pub use schedule::{generate, generate_into, transition_start, TAIL_HOLD_FRAMES};
pub use cutaway_api_core::{Channel, Frame, KeyBatch, KeyOp, Pose};

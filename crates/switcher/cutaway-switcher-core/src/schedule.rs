//! Transition scheduling: turn a cut list into master-camera keyframes.
//!
//! Each entry holds its own pose from its start frame until the transition
//! window opens, then the host interpolates toward the successor's pose, which
//! is keyed at the successor's own start frame (hold-then-cut pattern).

use log::{debug, warn};

use crate::config::ScheduleConfig;
use crate::cutlist::{CutEntry, CutList};
use crate::error::SwitchError;
use crate::host::{KeyframeSink, PoseResolver};
use cutaway_api_core::{Frame, KeyBatch};

/// Hold gap after the final entry, which has no successor to transition to.
pub const TAIL_HOLD_FRAMES: Frame = 50;

/// Frame at which `entry` begins transitioning toward `next`.
///
/// With a successor the window opens `transition_frames` before the
/// successor's start, clamped so it never precedes `entry`'s own start;
/// overlapping or inverted starts degrade to a zero-length transition rather
/// than an error. Without a successor the pose holds for a fixed
/// [`TAIL_HOLD_FRAMES`] gap.
pub fn transition_start(
    entry: &CutEntry,
    next: Option<&CutEntry>,
    transition_frames: Frame,
) -> Frame {
    match next {
        Some(next) => (next.start_frame - transition_frames).max(entry.start_frame),
        None => entry.start_frame + TAIL_HOLD_FRAMES,
    }
}

/// Compute the full key batch for `list` without touching the host timeline.
///
/// Entries whose camera fails to resolve are skipped with a diagnostic and the
/// remaining entries are still scheduled. The batch may key the same
/// (channel, frame) twice across adjacent entries; applying it under overwrite
/// semantics yields the same final pose either way.
pub fn generate(
    list: &CutList,
    cfg: &ScheduleConfig,
    resolver: &mut impl PoseResolver,
) -> Result<KeyBatch, SwitchError> {
    cfg.validate()?;
    if list.is_empty() {
        return Err(SwitchError::NoCamerasConfigured);
    }

    let mut batch = KeyBatch::new();
    let entries = list.entries();
    for (i, entry) in entries.iter().enumerate() {
        let pose = match resolver.resolve(&entry.camera) {
            Some(pose) => pose,
            None => {
                warn!("skipping unresolvable camera '{}'", entry.camera);
                continue;
            }
        };
        let next = entries.get(i + 1);

        // Hold the entry's own pose from its start frame...
        batch.push_pose(entry.start_frame, &pose);
        // ...until the transition window opens.
        batch.push_pose(transition_start(entry, next, cfg.transition_frames), &pose);

        // Key the successor's pose at its own start so the host interpolates
        // across the window. The successor keys the same frame again on its
        // own turn; overwrite semantics make that a no-op.
        if let Some(next) = next {
            if let Some(next_pose) = resolver.resolve(&next.camera) {
                batch.push_pose(next.start_frame, &next_pose);
            }
        }
    }

    debug!(
        "scheduled {} key ops across {} frames for {} cuts",
        batch.len(),
        batch.frames().len(),
        entries.len()
    );
    Ok(batch)
}

/// Generate and apply: clear the master timeline, then write every op.
///
/// The batch is computed before any write, so a failed run leaves the host
/// timeline untouched (full overwrite on success, no partial state on error).
/// Returns the number of ops applied.
pub fn generate_into(
    list: &CutList,
    cfg: &ScheduleConfig,
    host: &mut (impl PoseResolver + KeyframeSink),
) -> Result<usize, SwitchError> {
    let batch = generate(list, cfg, host)?;
    host.clear_keys();
    let count = batch.len();
    for op in batch.into_vec() {
        host.insert_key(op);
    }
    Ok(count)
}

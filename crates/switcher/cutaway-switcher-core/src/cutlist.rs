//! Cut-list data model: the ordered (camera, start frame) sequence.

use serde::{Deserialize, Serialize};

use crate::error::SwitchError;
use crate::host::CameraHandle;
use cutaway_api_core::Frame;

/// One cut: hold `camera` from `start_frame` until its transition window opens.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CutEntry {
    pub camera: CameraHandle,
    pub start_frame: Frame,
}

impl CutEntry {
    pub fn new(camera: impl Into<CameraHandle>, start_frame: Frame) -> Self {
        Self {
            camera: camera.into(),
            start_frame,
        }
    }
}

/// Ordered sequence of cuts.
///
/// Order is authoring order and defines playback; entries are never auto-sorted
/// by start frame. The same camera may appear more than once. The list survives
/// generation passes untouched (the scheduler borrows it read-only).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CutList {
    entries: Vec<CutEntry>,
}

impl CutList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end of the sequence.
    pub fn push(&mut self, entry: CutEntry) {
        self.entries.push(entry);
    }

    /// Remove the entry at `index`, preserving the relative order of the rest.
    pub fn remove(&mut self, index: usize) -> Result<CutEntry, SwitchError> {
        if index >= self.entries.len() {
            return Err(SwitchError::InvalidIndex {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&CutEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CutEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[CutEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CutEntry> for CutList {
    fn from_iter<I: IntoIterator<Item = CutEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

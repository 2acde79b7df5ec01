use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::processor::{AnchorUpdate, FileReport};

/// Statistics about a synchronization pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncStats {
    /// Fixture pages processed
    pub files: usize,

    /// Pages with at least one updated attribute
    pub files_changed: usize,

    /// Anchors whose href qualified for a metadata hash
    pub anchors: usize,

    /// Qualifying anchors skipped because no sidecar exists
    pub missing_sidecars: usize,

    /// Every attribute that was (or in check mode would be) rewritten
    pub updates: Vec<AnchorUpdate>,

    /// Pages that were overwritten
    pub written: Vec<PathBuf>,

    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl SyncStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, report: FileReport) {
        self.files += 1;
        if report.changed() {
            self.files_changed += 1;
        }
        self.anchors += report.anchors;
        self.missing_sidecars += report.missing_sidecars;
        if report.written {
            self.written.push(report.path);
        }
        self.updates.extend(report.updates);
    }

    /// True when no attribute needed to change.
    pub fn is_clean(&self) -> bool {
        self.updates.is_empty()
    }
}

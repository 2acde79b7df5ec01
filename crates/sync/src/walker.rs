use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

use crate::config::SyncConfig;
use crate::error::Result;
use crate::processor::process_file;
use crate::stats::SyncStats;

/// Lists the fixture pages directly under a directory
pub struct FixtureWalker {
    root: PathBuf,
    extension: String,
}

impl FixtureWalker {
    pub fn new(root: impl AsRef<Path>, extension: impl Into<String>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extension: extension.into(),
        }
    }

    pub fn from_config(config: &SyncConfig) -> Self {
        Self::new(&config.fixture_root, config.fixture_extension.as_str())
    }

    /// Files with the fixture extension, non-recursive, sorted by name
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            if self.has_fixture_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }

        log::debug!("Found {} fixture pages in {}", files.len(), self.root.display());
        Ok(files)
    }

    fn has_fixture_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }
}

/// Run one synchronization pass over every fixture page.
///
/// Pages are handled one at a time. The first error stops the pass; pages
/// already rewritten stay rewritten.
pub fn sync_fixtures(config: &SyncConfig) -> Result<SyncStats> {
    config.validate()?;
    let start = Instant::now();
    let mut stats = SyncStats::new();

    for path in FixtureWalker::from_config(config).scan()? {
        let report = process_file(&path, config)?;
        stats.add_file(report);
    }

    stats.time_ms = start.elapsed().as_millis() as u64;
    Ok(stats)
}

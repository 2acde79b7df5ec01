use fixture_anchor::{classify, Classified};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SyncConfig;
use crate::error::{Result, SyncError};
use crate::synchronizer::{synchronize, SyncOutcome};

/// One rewritten `data-core-metadata` attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorUpdate {
    pub fixture: PathBuf,
    pub href: String,
    pub old: Option<String>,
    pub new: String,
}

/// Result of one synchronization pass over one fixture page
#[derive(Debug, Clone, Default)]
pub struct FileReport {
    pub path: PathBuf,
    pub anchors: usize,
    pub missing_sidecars: usize,
    pub updates: Vec<AnchorUpdate>,
    pub written: bool,
}

impl FileReport {
    pub fn changed(&self) -> bool {
        !self.updates.is_empty()
    }
}

/// Transform the text of one fixture page.
///
/// Lines keep their own line endings. A line is re-rendered only when its
/// metadata attribute changed; every other line is copied byte for byte.
pub fn process_text(text: &str, path: &Path, config: &SyncConfig) -> Result<(String, FileReport)> {
    let mut report = FileReport {
        path: path.to_path_buf(),
        ..Default::default()
    };
    let mut out = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        let Classified::Anchor(mut anchor) = classify(line) else {
            out.push_str(line);
            continue;
        };

        match anchor.href() {
            None => {
                log::debug!("{}: anchor without href left as-is", path.display());
                out.push_str(line);
                continue;
            }
            Some(href) if !config.qualifies(href) => {
                out.push_str(line);
                continue;
            }
            Some(_) => {}
        }

        report.anchors += 1;
        match synchronize(&mut anchor, config)? {
            SyncOutcome::Updated { old, new } => {
                out.push_str(&anchor.render());
                report.updates.push(AnchorUpdate {
                    fixture: path.to_path_buf(),
                    href: anchor.href().unwrap_or_default().to_string(),
                    old,
                    new,
                });
            }
            SyncOutcome::NoSidecar => {
                report.missing_sidecars += 1;
                out.push_str(line);
            }
            SyncOutcome::Unchanged | SyncOutcome::NotQualifying => out.push_str(line),
        }
    }

    Ok((out, report))
}

/// Read, transform and (in write mode) overwrite one fixture page.
pub fn process_file(path: &Path, config: &SyncConfig) -> Result<FileReport> {
    log::info!("processing {}", path.display());

    let text = fs::read_to_string(path).map_err(|e| SyncError::io(path, e))?;
    let (out, mut report) = process_text(&text, path, config)?;

    if !config.is_check() {
        fs::write(path, out).map_err(|e| SyncError::io(path, e))?;
        report.written = true;
    }
    Ok(report)
}

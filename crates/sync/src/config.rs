use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SyncError};

/// Fixture directory used by the resolver's test suite.
pub const DEFAULT_FIXTURE_ROOT: &str = "hdeps/tests/fixtures";

/// Whether a pass rewrites fixtures or only reports what it would change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    /// Overwrite every processed fixture
    #[default]
    Write,

    /// Leave files untouched; report stale attributes only
    Check,
}

/// Configuration for a synchronization pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Directory holding the fixture pages and their sidecars
    pub fixture_root: PathBuf,

    /// Extension of fixture pages (without the dot)
    pub fixture_extension: String,

    /// Suffix an href must end with to get a metadata hash
    pub dist_suffix: String,

    /// Suffix appended to the href to locate the sidecar
    pub sidecar_suffix: String,

    /// Attribute holding `sha1=<hex>`
    pub metadata_attribute: String,

    pub mode: SyncMode,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            fixture_root: PathBuf::from(DEFAULT_FIXTURE_ROOT),
            fixture_extension: "html".to_string(),
            dist_suffix: ".whl".to_string(),
            sidecar_suffix: ".metadata".to_string(),
            metadata_attribute: "data-core-metadata".to_string(),
            mode: SyncMode::Write,
        }
    }
}

impl SyncConfig {
    pub fn new(fixture_root: impl AsRef<Path>) -> Self {
        Self {
            fixture_root: fixture_root.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn with_mode(mut self, mode: SyncMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_fixture_extension(mut self, extension: impl Into<String>) -> Self {
        self.fixture_extension = extension.into();
        self
    }

    pub fn with_dist_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.dist_suffix = suffix.into();
        self
    }

    pub fn with_sidecar_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.sidecar_suffix = suffix.into();
        self
    }

    pub fn with_metadata_attribute(mut self, name: impl Into<String>) -> Self {
        self.metadata_attribute = name.into();
        self
    }

    pub fn is_check(&self) -> bool {
        self.mode == SyncMode::Check
    }

    /// Does this href point at a file that carries a metadata hash?
    pub fn qualifies(&self, href: &str) -> bool {
        href.ends_with(&self.dist_suffix)
    }

    /// `<fixture_root>/<href without surrounding separators><sidecar_suffix>`
    pub fn sidecar_path(&self, href: &str) -> PathBuf {
        let name = href.trim_matches(|c| c == '/' || c == '\\');
        self.fixture_root
            .join(format!("{name}{}", self.sidecar_suffix))
    }

    pub fn validate(&self) -> Result<()> {
        if self.fixture_extension.is_empty() {
            return Err(SyncError::invalid_config("fixture extension is empty"));
        }
        if self.dist_suffix.is_empty() {
            return Err(SyncError::invalid_config("distribution suffix is empty"));
        }
        if self.sidecar_suffix.is_empty() {
            return Err(SyncError::invalid_config("sidecar suffix is empty"));
        }
        if self.metadata_attribute.is_empty() {
            return Err(SyncError::invalid_config("metadata attribute name is empty"));
        }
        if !self.fixture_root.is_dir() {
            return Err(SyncError::invalid_config(format!(
                "fixture root {} is not a directory",
                self.fixture_root.display()
            )));
        }
        Ok(())
    }
}

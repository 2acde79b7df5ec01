//! # Fixture Sync
//!
//! Keeps the `data-core-metadata` attributes of simple-index fixture pages
//! in step with the `*.whl.metadata` sidecars stored next to them.
//!
//! ## Pipeline
//!
//! ```text
//! Fixture root
//!     │
//!     ├──> Walker (*.html, top level only)
//!     │
//!     ├──> Processor (per page, per line)
//!     │      ├─> classify → Anchor | NotAnAnchor
//!     │      ├─> synchronize (sidecar → sha1=<hex>)
//!     │      └─> render changed lines, copy the rest
//!     │
//!     └──> Overwrite page (skipped in check mode)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use fixture_sync::{sync_fixtures, SyncConfig};
//!
//! fn main() -> fixture_sync::Result<()> {
//!     let stats = sync_fixtures(&SyncConfig::new("hdeps/tests/fixtures"))?;
//!     println!("{} pages, {} attributes updated", stats.files, stats.updates.len());
//!     Ok(())
//! }
//! ```

mod config;
mod digest;
mod error;
mod processor;
mod stats;
mod synchronizer;
mod walker;

pub use config::{SyncConfig, SyncMode, DEFAULT_FIXTURE_ROOT};
pub use digest::{metadata_digest, normalize_line_endings};
pub use error::{Result, SyncError};
pub use processor::{process_file, process_text, AnchorUpdate, FileReport};
pub use stats::SyncStats;
pub use synchronizer::{synchronize, SyncOutcome};
pub use walker::{sync_fixtures, FixtureWalker};

use fixture_anchor::Anchor;
use std::fs;
use std::io::ErrorKind;

use crate::config::SyncConfig;
use crate::digest::metadata_digest;
use crate::error::{Result, SyncError};

/// What synchronizing one anchor did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No href, or the href does not end with the distribution suffix
    NotQualifying,

    /// The sidecar does not exist; the anchor is left alone
    NoSidecar,

    /// The attribute already holds the expected digest
    Unchanged,

    /// The attribute was added or replaced
    Updated { old: Option<String>, new: String },
}

/// Bring the metadata attribute of `anchor` in line with its sidecar.
///
/// Running this again on an updated anchor yields [`SyncOutcome::Unchanged`].
/// A sidecar that exists but cannot be read is an error.
pub fn synchronize(anchor: &mut Anchor, config: &SyncConfig) -> Result<SyncOutcome> {
    let href = match anchor.href() {
        Some(href) if config.qualifies(href) => href.to_string(),
        _ => return Ok(SyncOutcome::NotQualifying),
    };

    let sidecar = config.sidecar_path(&href);
    let bytes = match fs::read(&sidecar) {
        Ok(bytes) => bytes,
        // A file standing where a parent directory should be also means no sidecar.
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            log::debug!("No sidecar for {href} at {}", sidecar.display());
            return Ok(SyncOutcome::NoSidecar);
        }
        Err(e) => return Err(SyncError::io(sidecar, e)),
    };

    let expected = metadata_digest(&bytes);
    if anchor.attributes.get(&config.metadata_attribute) == Some(expected.as_str()) {
        return Ok(SyncOutcome::Unchanged);
    }

    let old = anchor
        .attributes
        .set(config.metadata_attribute.as_str(), expected.as_str());
    log::info!(
        "{href}: {} -> {expected}",
        old.as_deref().unwrap_or("absent")
    );
    Ok(SyncOutcome::Updated { old, new: expected })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixture_anchor::classify;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const HELLO_SHA1: &str = "sha1=f572d396fae9206628714fb2ce00f72e94f2258f";

    fn anchor(line: &str) -> Anchor {
        classify(line).into_anchor().expect("anchor line")
    }

    #[test]
    fn replaces_stale_value() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("pkg-1.0.whl.metadata"), b"hello\n").unwrap();
        let config = SyncConfig::new(temp.path());

        let mut a = anchor(
            "<a href=\"pkg-1.0.whl\" data-core-metadata=\"sha1=aaaa\">pkg-1.0.whl</a>\n",
        );
        let outcome = synchronize(&mut a, &config).unwrap();

        assert_eq!(
            outcome,
            SyncOutcome::Updated {
                old: Some("sha1=aaaa".to_string()),
                new: HELLO_SHA1.to_string(),
            }
        );
        assert_eq!(
            a.render(),
            format!("<a href=\"pkg-1.0.whl\" data-core-metadata=\"{HELLO_SHA1}\">pkg-1.0.whl</a>\n")
        );
    }

    #[test]
    fn appends_missing_attribute() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("pkg-1.0.whl.metadata"), b"hello\r\n").unwrap();
        let config = SyncConfig::new(temp.path());

        let mut a =
            anchor("<a href=\"/pkg-1.0.whl\" data-requires-python=\"&gt;=3.8\">pkg</a>\n");
        let outcome = synchronize(&mut a, &config).unwrap();

        assert!(matches!(outcome, SyncOutcome::Updated { old: None, .. }));
        assert_eq!(
            a.render(),
            format!(
                "<a href=\"/pkg-1.0.whl\" data-requires-python=\"&gt;=3.8\" \
                 data-core-metadata=\"{HELLO_SHA1}\">pkg</a>\n"
            )
        );
    }

    #[test]
    fn second_run_is_unchanged() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("pkg-1.0.whl.metadata"), b"hello\n").unwrap();
        let config = SyncConfig::new(temp.path());

        let mut a = anchor("<a href=\"pkg-1.0.whl\">pkg</a>");
        assert!(matches!(
            synchronize(&mut a, &config).unwrap(),
            SyncOutcome::Updated { .. }
        ));
        let after_first = a.clone();
        assert_eq!(synchronize(&mut a, &config).unwrap(), SyncOutcome::Unchanged);
        assert_eq!(a, after_first);
    }

    #[test]
    fn missing_sidecar_leaves_anchor_alone() {
        let temp = tempdir().unwrap();
        let config = SyncConfig::new(temp.path());

        let mut a = anchor("<a href=\"pkg-1.0.whl\" data-core-metadata=\"sha1=aaaa\">pkg</a>");
        let before = a.clone();
        assert_eq!(synchronize(&mut a, &config).unwrap(), SyncOutcome::NoSidecar);
        assert_eq!(a, before);
    }

    #[test]
    fn file_in_place_of_sidecar_directory_means_no_sidecar() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("dist"), b"not a directory").unwrap();
        let config = SyncConfig::new(temp.path());

        let mut a = anchor("<a href=\"/dist/pkg-1.0.whl\">pkg</a>\n");
        let before = a.clone();
        assert_eq!(synchronize(&mut a, &config).unwrap(), SyncOutcome::NoSidecar);
        assert_eq!(a, before);
    }

    #[test]
    fn non_qualifying_and_hrefless_anchors_are_skipped() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("pkg-1.0.tar.gz.metadata"), b"hello\n").unwrap();
        let config = SyncConfig::new(temp.path());

        let mut sdist = anchor("<a href=\"pkg-1.0.tar.gz\">pkg</a>");
        assert_eq!(
            synchronize(&mut sdist, &config).unwrap(),
            SyncOutcome::NotQualifying
        );

        let mut bare = anchor("<a name=\"top\">top</a>");
        assert_eq!(
            synchronize(&mut bare, &config).unwrap(),
            SyncOutcome::NotQualifying
        );
    }

    #[test]
    fn honours_configured_suffix() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("pkg-1.0.tar.gz.metadata"), b"hello\n").unwrap();
        let config = SyncConfig::new(temp.path()).with_dist_suffix(".tar.gz");

        let mut sdist = anchor("<a href=\"pkg-1.0.tar.gz\">pkg</a>");
        assert!(matches!(
            synchronize(&mut sdist, &config).unwrap(),
            SyncOutcome::Updated { .. }
        ));
        assert_eq!(sdist.attributes.get("data-core-metadata"), Some(HELLO_SHA1));
    }

    #[test]
    fn unreadable_sidecar_is_an_error() {
        let temp = tempdir().unwrap();
        // A directory where the sidecar should be cannot be read as bytes.
        fs::create_dir(temp.path().join("pkg-1.0.whl.metadata")).unwrap();
        let config = SyncConfig::new(temp.path());

        let mut a = anchor("<a href=\"pkg-1.0.whl\">pkg</a>");
        let err = synchronize(&mut a, &config).unwrap_err();
        assert!(matches!(err, SyncError::Io { .. }), "{err}");
    }
}

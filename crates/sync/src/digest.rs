use sha1::{Digest, Sha1};
use std::borrow::Cow;

/// Collapse every CRLF pair to LF so checkouts with `core.autocrlf` hash the same.
pub fn normalize_line_endings(bytes: &[u8]) -> Cow<'_, [u8]> {
    if !bytes.windows(2).any(|pair| pair == b"\r\n") {
        return Cow::Borrowed(bytes);
    }

    let mut out = Vec::with_capacity(bytes.len());
    let mut idx = 0usize;
    while idx < bytes.len() {
        if bytes[idx] == b'\r' && bytes.get(idx + 1) == Some(&b'\n') {
            idx += 1;
            continue;
        }
        out.push(bytes[idx]);
        idx += 1;
    }
    Cow::Owned(out)
}

/// `sha1=<lowercase hex>` over the line-ending-normalized sidecar bytes.
pub fn metadata_digest(bytes: &[u8]) -> String {
    let normalized = normalize_line_endings(bytes);
    let mut hasher = Sha1::new();
    hasher.update(&*normalized);
    format!("sha1={}", hex::encode(hasher.finalize()))
}

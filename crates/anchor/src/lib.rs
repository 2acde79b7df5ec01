//! # Fixture Anchor
//!
//! Narrow, line-oriented view of the `<a ...>` elements found in
//! simple-index fixture pages.
//!
//! ## Pipeline
//!
//! ```text
//! Line
//!     │
//!     ├──> Classifier (header / attribute region / trailer)
//!     │      └─> Anchor or NotAnAnchor
//!     │
//!     ├──> Attribute Table (ordered, update-in-place)
//!     │
//!     └──> Render
//!            └─> header + ` name="value"`... + trailer
//! ```
//!
//! This is deliberately not an HTML parser. Anything outside the grammar is
//! reported as [`Classified::NotAnAnchor`] so callers can pass it through
//! untouched.
//!
//! ## Example
//!
//! ```rust
//! use fixture_anchor::{classify, Classified};
//!
//! let line = "<a href=\"pkg-1.0.whl\">pkg-1.0.whl</a>\n";
//! let Classified::Anchor(mut anchor) = classify(line) else {
//!     panic!("expected an anchor");
//! };
//! anchor.attributes.set("data-core-metadata", "sha1=00");
//! assert_eq!(
//!     anchor.render(),
//!     "<a href=\"pkg-1.0.whl\" data-core-metadata=\"sha1=00\">pkg-1.0.whl</a>\n"
//! );
//! ```

mod anchor;
mod attributes;
mod classify;

pub use anchor::Anchor;
pub use attributes::{parse_attributes, AttributeTable};
pub use classify::{classify, Classified};

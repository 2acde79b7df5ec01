use once_cell::sync::Lazy;
use regex::Regex;

use crate::anchor::Anchor;
use crate::attributes::parse_attributes;

/// Optional indentation, `<a`, an attribute region that starts with
/// whitespace, then the rest of the line from the first `/>` or `>`.
static ANCHOR_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*<a)(\s[^>]*?)?(/?>(?s:.*))$").expect("anchor line pattern is valid")
});

/// Result of looking at one fixture line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    Anchor(Anchor),
    /// The line is outside the grammar and must be passed through as-is.
    NotAnAnchor,
}

impl Classified {
    pub fn into_anchor(self) -> Option<Anchor> {
        match self {
            Classified::Anchor(anchor) => Some(anchor),
            Classified::NotAnAnchor => None,
        }
    }
}

/// Split a line (line ending included) into header, attributes and trailer.
pub fn classify(line: &str) -> Classified {
    let Some(caps) = ANCHOR_LINE_RE.captures(line) else {
        return Classified::NotAnAnchor;
    };

    let region = caps.get(2).map_or("", |m| m.as_str());
    Classified::Anchor(Anchor {
        header: caps[1].to_string(),
        attributes: parse_attributes(region),
        trailer: caps[3].to_string(),
    })
}

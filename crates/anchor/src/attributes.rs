use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// `name="value"` with no entity decoding and no escaped quotes.
static ATTRIBUTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([\w-]+)="([^"]*)""#).expect("attribute pattern is valid"));

/// Ordered attribute mapping.
///
/// Order is the position of a name's first occurrence. Setting an existing
/// name replaces its value in place; a new name is appended at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl AttributeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&slot| self.entries[slot].1.as_str())
    }

    /// Insert or update `name`. Returns the previous value, if any.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.index.get(&name) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attributes in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Extract every `name="value"` token from an attribute region, left to right.
///
/// Text between tokens is dropped.
pub fn parse_attributes(region: &str) -> AttributeTable {
    let mut table = AttributeTable::new();
    for caps in ATTRIBUTE_RE.captures_iter(region) {
        table.set(&caps[1], &caps[2]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(table: &AttributeTable) -> Vec<(&str, &str)> {
        table.iter().collect()
    }

    #[test]
    fn parses_in_source_order() {
        let table = parse_attributes(r#" href="a.whl" data-requires-python="&gt;=3.7" class="x""#);
        assert_eq!(
            pairs(&table),
            vec![
                ("href", "a.whl"),
                ("data-requires-python", "&gt;=3.7"),
                ("class", "x"),
            ]
        );
    }

    #[test]
    fn duplicate_name_keeps_first_position() {
        let table = parse_attributes(r#" a="1" b="2" a="3""#);
        assert_eq!(pairs(&table), vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn stray_text_between_tokens_is_dropped() {
        let table = parse_attributes(r#"   href="x"  junk  download  id="y" "#);
        assert_eq!(pairs(&table), vec![("href", "x"), ("id", "y")]);
    }

    #[test]
    fn unquoted_and_single_quoted_values_are_ignored() {
        let table = parse_attributes(r#" a=1 b='2' c="3""#);
        assert_eq!(pairs(&table), vec![("c", "3")]);
    }

    #[test]
    fn empty_value_is_kept() {
        let table = parse_attributes(r#" data-yanked="""#);
        assert_eq!(table.get("data-yanked"), Some(""));
    }

    #[test]
    fn set_updates_in_place_and_appends_new_names() {
        let mut table = parse_attributes(r#" x="1" y="2""#);
        assert_eq!(table.set("x", "9"), Some("1".to_string()));
        assert_eq!(table.set("z", "3"), None);
        assert_eq!(pairs(&table), vec![("x", "9"), ("y", "2"), ("z", "3")]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn empty_region_gives_empty_table() {
        let table = parse_attributes("");
        assert!(table.is_empty());
        assert_eq!(table.get("href"), None);
    }
}

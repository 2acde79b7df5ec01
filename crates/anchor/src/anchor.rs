use crate::attributes::AttributeTable;

/// Structured view of a fixture line that looked like an `<a ...>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Indentation plus the `<a` token, verbatim.
    pub header: String,

    /// Attributes in first-occurrence order.
    pub attributes: AttributeTable,

    /// Everything from the end of the opening tag through the line ending, verbatim.
    pub trailer: String,
}

impl Anchor {
    pub fn href(&self) -> Option<&str> {
        self.attributes.get("href")
    }

    /// Render back to a single line.
    ///
    /// Each attribute becomes ` name="value"` in table order; whitespace that
    /// separated attributes in the source is not reproduced.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(
            self.header.len()
                + self.trailer.len()
                + self
                    .attributes
                    .iter()
                    .map(|(name, value)| name.len() + value.len() + 4)
                    .sum::<usize>(),
        );
        out.push_str(&self.header);
        for (name, value) in self.attributes.iter() {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out.push_str(&self.trailer);
        out
    }
}

//! Parsing of git ref decorations (`%D`).

/// Refs decorating one commit, e.g. `HEAD -> main, tag: v1.2.0, origin/main`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoration<'a> {
    /// The commit is the current working position (`HEAD` or `HEAD -> branch`).
    pub head: bool,
    /// Tag names in decoration order.
    pub tags: Vec<&'a str>,
}

impl<'a> Decoration<'a> {
    /// Parses one `%D` field. Empty input yields an empty decoration.
    #[must_use]
    pub fn parse(field: &'a str) -> Self {
        let mut decoration = Self::default();
        for item in field.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if item == "HEAD" || item.starts_with("HEAD -> ") {
                decoration.head = true;
            } else if let Some(tag) = item.strip_prefix("tag: ") {
                decoration.tags.push(tag.trim());
            }
        }
        decoration
    }
}

//! Fragment storage for a single category.

/// Append-only, insertion-ordered list of serialized fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    tags: Vec<String>,
}

impl Group {
    /// Create an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment. Duplicates are kept.
    pub fn push(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tags.push(tag.into());
        self
    }

    /// Fragments in insertion order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

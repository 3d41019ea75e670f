//! Search and exact-match filters.

use serde::{Deserialize, Serialize};

/// Filters applied to a record collection.
///
/// An empty or unset criterion matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Lower-cased search term, or `None` when searching is disabled.
    pub(crate) fn needle(&self) -> Option<String> {
        active(&self.search_term).map(str::to_lowercase)
    }

    pub(crate) fn active_category(&self) -> Option<&str> {
        active(&self.category)
    }

    pub(crate) fn active_author(&self) -> Option<&str> {
        active(&self.author)
    }

    pub fn is_empty(&self) -> bool {
        self.needle().is_none()
            && self.active_category().is_none()
            && self.active_author().is_none()
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_strings_are_unset() {
        let criteria = FilterCriteria::new().search("").category("").author("");
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_needle_is_lowercased() {
        let criteria = FilterCriteria::new().search("HeLLo");
        assert_eq!(criteria.needle().as_deref(), Some("hello"));
        assert!(!criteria.is_empty());
    }
}

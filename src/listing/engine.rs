//! Filter and page evaluation over a record slice.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::model::Listable;

use super::{FilterCriteria, Page};

/// Which fields the engine searches and filters on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListViewEngine {
    searchable_fields: Vec<String>,
    category_field: String,
    author_field: String,
}

/// One page of a filtered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a, R> {
    pub visible: Vec<&'a R>,
    pub total_matching: usize,
    pub total_pages: usize,
    pub page: Page,
}

impl ListViewEngine {
    pub fn new<I, S>(searchable_fields: I, category_field: &str, author_field: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            searchable_fields: searchable_fields.into_iter().map(Into::into).collect(),
            category_field: category_field.to_string(),
            author_field: author_field.to_string(),
        }
    }

    /// Blog management screen: search title, content and author.
    pub fn blog() -> Self {
        Self::new(["title", "content", "author"], "category", "author")
    }

    pub fn searchable_fields(&self) -> &[String] {
        &self.searchable_fields
    }

    /// Whether `record` satisfies every active criterion.
    pub fn matches<R: Listable>(&self, record: &R, criteria: &FilterCriteria) -> bool {
        self.matches_needle(record, criteria.needle().as_deref(), criteria)
    }

    fn matches_needle<R: Listable>(
        &self,
        record: &R,
        needle: Option<&str>,
        criteria: &FilterCriteria,
    ) -> bool {
        if let Some(needle) = needle {
            let found = self.searchable_fields.iter().any(|name| {
                record
                    .field(name)
                    .is_some_and(|text| text.to_lowercase().contains(needle))
            });
            if !found {
                return false;
            }
        }

        let exact = |wanted: Option<&str>, field: &str| match wanted {
            Some(wanted) => record.field(field) == Some(wanted),
            None => true,
        };

        exact(criteria.active_category(), &self.category_field)
            && exact(criteria.active_author(), &self.author_field)
    }

    /// Matching records in their original order.
    pub fn filter<'a, R: Listable>(
        &self,
        records: &'a [R],
        criteria: &FilterCriteria,
    ) -> Vec<&'a R> {
        let needle = criteria.needle();
        records
            .iter()
            .filter(|r| self.matches_needle(*r, needle.as_deref(), criteria))
            .collect()
    }

    /// Indices of matching records, used by [`super::ListViewState`] to cache
    /// a filter result between page changes.
    pub(crate) fn filter_indices<R: Listable>(
        &self,
        records: &[R],
        criteria: &FilterCriteria,
    ) -> Vec<usize> {
        let needle = criteria.needle();
        records
            .iter()
            .enumerate()
            .filter(|(_, r)| self.matches_needle(*r, needle.as_deref(), criteria))
            .map(|(i, _)| i)
            .collect()
    }

    /// Hash of every field this engine reads, across all of `records`.
    ///
    /// Equal fingerprints mean a cached filter result is still valid.
    pub(crate) fn fingerprint<R: Listable>(&self, records: &[R]) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        records.len().hash(&mut hasher);
        for record in records {
            for name in self
                .searchable_fields
                .iter()
                .chain([&self.category_field, &self.author_field])
            {
                record.field(name).hash(&mut hasher);
            }
        }
        hasher.finish()
    }

    /// Filters `records` and slices out `page`.
    ///
    /// A page past the end yields an empty `visible` list.
    pub fn view<'a, R: Listable>(
        &self,
        records: &'a [R],
        criteria: &FilterCriteria,
        page: Page,
    ) -> ListView<'a, R> {
        let filtered = self.filter(records, criteria);
        paginate(filtered, page)
    }
}

impl Default for ListViewEngine {
    fn default() -> Self {
        Self::blog()
    }
}

pub(crate) fn paginate<R>(mut filtered: Vec<&R>, page: Page) -> ListView<'_, R> {
    let total_matching = filtered.len();
    let range = page.bounds(total_matching);
    filtered.truncate(range.end);
    let visible = filtered.split_off(range.start);

    ListView {
        visible,
        total_matching,
        total_pages: page.total_pages(total_matching),
        page,
    }
}

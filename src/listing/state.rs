//! Per-screen list state: criteria, current page, cached filter result.

use crate::model::Listable;

use super::engine::paginate;
use super::{FilterCriteria, ListView, ListViewEngine, Page};

#[derive(Debug, Clone)]
struct FilterCache {
    fingerprint: u64,
    indices: Vec<usize>,
}

/// Filter and paging state owned by one list screen.
///
/// The filter result is cached until the criteria change, the records'
/// searched and filtered fields change, or [`ListViewState::records_changed`]
/// is called. Paging alone only re-slices.
#[derive(Debug, Clone)]
pub struct ListViewState {
    criteria: FilterCriteria,
    page: Page,
    cache: Option<FilterCache>,
}

impl ListViewState {
    pub fn new(page_size: usize) -> Result<Self, super::PageError> {
        Ok(Self {
            criteria: FilterCriteria::default(),
            page: Page::first(page_size)?,
            cache: None,
        })
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Replaces the criteria and jumps back to the first page.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria != self.criteria {
            self.criteria = criteria;
            self.page = self.page.with_number(1);
            self.cache = None;
        }
    }

    pub fn set_page(&mut self, number: usize) {
        self.page = self.page.with_number(number);
    }

    /// Drops the cached filter result after records were added, edited or
    /// deleted.
    pub fn records_changed(&mut self) {
        self.cache = None;
    }

    /// Computes the current page, clamping the page number when the filtered
    /// collection has shrunk below it.
    pub fn view<'a, R: Listable>(
        &mut self,
        engine: &ListViewEngine,
        records: &'a [R],
    ) -> ListView<'a, R> {
        let fingerprint = engine.fingerprint(records);
        let stale = self.cache.as_ref().is_none_or(|c| c.fingerprint != fingerprint);
        if stale {
            #[cfg(feature = "tracing")]
            tracing::debug!("Refiltering {} records", records.len());
            self.cache = Some(FilterCache {
                fingerprint,
                indices: engine.filter_indices(records, &self.criteria),
            });
        }

        let indices = self.cache.as_ref().map(|c| c.indices.as_slice()).unwrap_or_default();
        self.page = self.page.clamp(self.page.total_pages(indices.len()));

        let filtered: Vec<&R> = indices.iter().filter_map(|&i| records.get(i)).collect();
        paginate(filtered, self.page)
    }
}

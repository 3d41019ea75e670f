//! Client-side filtering and pagination of already-fetched records.

mod criteria;
mod engine;
mod page;
mod state;

pub use criteria::FilterCriteria;
pub use engine::{ListView, ListViewEngine};
pub use page::{Page, PageError, DEFAULT_PAGE_SIZE};
pub use state::ListViewState;

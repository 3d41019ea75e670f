//! Page addressing.

use thiserror::Error;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

const PAGE_SIZE_VAR: &str = "ADMIN_PAGE_SIZE";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PageError {
    #[error("Page size must be positive")]
    ZeroPageSize,
    #[error("Invalid page size in ADMIN_PAGE_SIZE: {0:?}")]
    InvalidPageSize(String),
}

/// A 1-indexed page of fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Page {
    number: usize,
    size: usize,
}

impl Page {
    /// Builds a page. A `number` of 0 is treated as the first page.
    pub fn new(number: usize, size: usize) -> Result<Self, PageError> {
        if size == 0 {
            return Err(PageError::ZeroPageSize);
        }
        Ok(Self {
            number: number.max(1),
            size,
        })
    }

    pub fn first(size: usize) -> Result<Self, PageError> {
        Self::new(1, size)
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Same size, different page number.
    pub fn with_number(self, number: usize) -> Self {
        Self {
            number: number.max(1),
            ..self
        }
    }

    /// Number of pages needed for `count` items; 0 when there are none.
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.size)
    }

    /// Keeps the page number within `[1, total_pages]`.
    pub fn clamp(self, total_pages: usize) -> Self {
        self.with_number(self.number.min(total_pages.max(1)))
    }

    /// Index range of this page within `len` items, empty when out of range.
    pub fn bounds(&self, len: usize) -> std::ops::Range<usize> {
        let start = (self.number - 1).saturating_mul(self.size).min(len);
        let end = start.saturating_add(self.size).min(len);
        start..end
    }

    /// Reads the page size from `ADMIN_PAGE_SIZE`, defaulting to
    /// [`DEFAULT_PAGE_SIZE`].
    pub fn size_from_env() -> Result<usize, PageError> {
        match std::env::var(PAGE_SIZE_VAR) {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(0) => Err(PageError::ZeroPageSize),
                Ok(size) => Ok(size),
                Err(_) => Err(PageError::InvalidPageSize(raw)),
            },
            Err(_) => Ok(DEFAULT_PAGE_SIZE),
        }
    }
}

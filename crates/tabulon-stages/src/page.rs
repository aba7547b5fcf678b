//! Page stage: fixed-size windows over the sorted order.
//!
//! `page_count` is never zero: an empty table still has one (empty) page.
//! Clamping a stale page index is the view engine's responsibility and
//! must happen before the next read, not lazily.

use serde::{Deserialize, Serialize};

use crate::traits::{Stage, StageError};

/// Pagination metadata returned with every visible page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page_index: usize,
    pub page_count: usize,
    pub total_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageStage {
    page_size: usize,
    page_index: usize,
}

impl Stage for PageStage {
    fn name(&self) -> &'static str {
        "page"
    }
}

impl PageStage {
    /// Build a page window. A zero page size is invalid input, not a
    /// degenerate window.
    pub fn new(page_size: usize, page_index: usize) -> Result<Self, StageError> {
        if page_size == 0 {
            return Err(StageError::Page("page size must be positive".into()));
        }
        Ok(Self {
            page_size,
            page_index,
        })
    }

    /// `max(1, ceil(total / page_size))`.
    pub fn page_count(total: usize, page_size: usize) -> usize {
        if page_size == 0 {
            return 1;
        }
        ((total + page_size - 1) / page_size).max(1)
    }

    /// Clamp a requested index into `[0, page_count - 1]`.
    pub fn clamp_index(total: usize, page_size: usize, requested: usize) -> usize {
        requested.min(Self::page_count(total, page_size) - 1)
    }

    /// Slice the sorted order into the visible window plus metadata.
    pub fn slice<'a>(&self, order: &'a [usize]) -> (&'a [usize], PageMeta) {
        let total = order.len();
        let page_count = Self::page_count(total, self.page_size);
        let page_index = self.page_index.min(page_count - 1);

        let start = (page_index * self.page_size).min(total);
        let end = (start + self.page_size).min(total);

        (
            &order[start..end],
            PageMeta {
                page_index,
                page_count,
                total_count: total,
            },
        )
    }
}

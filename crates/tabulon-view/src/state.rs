//! The mutable state slices a table view owns.
//!
//! Derived sets (filtered/sorted order, visible page) are pure functions
//! of these slices plus the source records; they live on the view, not
//! here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use tabulon_stages::SortDirection;

/// Free-text query plus per-column filter values. Empty means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub query: Option<String>,
    pub column_filters: BTreeMap<String, String>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.column_filters.is_empty()
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortKey {
    pub key: String,
    pub direction: SortDirection,
}

/// At most one active sort column.
pub type SortState = Option<SortKey>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub page_size: usize,
    pub page_index: usize,
}

//! Filter stage: free-text query plus per-column predicates.
//!
//! A record passes the free-text query if ANY of its rendered field values
//! contains the query substring. Column filters are combined with AND: a
//! record passes only if every filtered column's rendered value contains
//! that column's filter value. Matching is case-insensitive unless the
//! stage is built case-sensitive.

use std::collections::BTreeMap;

use tabulon_core::record::Record;

use crate::traits::Stage;

#[derive(Debug, Clone, Default)]
pub struct FilterStage {
    /// Free-text query; empty/whitespace-only means no constraint.
    pub query: Option<String>,
    /// Column key → filter value, ANDed together. Empty values are inert.
    pub column_filters: BTreeMap<String, String>,
    pub case_sensitive: bool,
}

impl Stage for FilterStage {
    fn name(&self) -> &'static str {
        "filter"
    }
}

impl FilterStage {
    /// True when at least one constraint would reject some record.
    pub fn is_active(&self) -> bool {
        self.normalized_query().is_some()
            || self.column_filters.values().any(|v| !v.is_empty())
    }

    /// Select the indices of surviving records, in source order.
    pub fn apply(&self, records: &[Record]) -> Vec<usize> {
        let query = self.normalized_query();

        records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(record, query))
            .map(|(idx, _)| idx)
            .collect()
    }

    fn normalized_query(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    fn matches(&self, record: &Record, query: Option<&str>) -> bool {
        if let Some(q) = query {
            let hit = record
                .fields()
                .any(|(_, value)| self.contains(&value.render(), q));
            if !hit {
                return false;
            }
        }

        // Missing fields render as "" and simply fail non-empty predicates.
        self.column_filters
            .iter()
            .filter(|(_, needle)| !needle.is_empty())
            .all(|(key, needle)| self.contains(&record.rendered(key), needle))
    }

    fn contains(&self, haystack: &str, needle: &str) -> bool {
        if self.case_sensitive {
            haystack.contains(needle)
        } else {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        }
    }
}

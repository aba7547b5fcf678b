//! TableView: owns the state slices and walks the stage pipeline.
//!
//! Behavior contract:
//! - Every mutation recomputes the derived order eagerly, reclamps the
//!   page index, then notifies subscribers; rejected mutations change
//!   nothing and notify nobody.
//! - Derived sets are pure functions of (source, filter, sort, page);
//!   recomputing with unchanged inputs yields bit-identical output.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use thiserror::Error;

use tabulon_core::column::{ColumnSpec, Columns};
use tabulon_core::config::ViewConfig;
use tabulon_core::hash::hash_serde;
use tabulon_core::id::{SubscriberId, TableId};
use tabulon_core::record::Record;

use tabulon_stages::{Exporter, FilterStage, PageMeta, PageStage, SortDirection, SortStage};

use crate::cache::OrderCache;
use crate::metrics;
use crate::notify::{Subscribers, ViewEvent};
use crate::state::{FilterState, PageState, SortKey, SortState};

static NEXT_TABLE_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("export failed: {0}")]
    Export(String),

    #[error("internal invariant failed: {0}")]
    Invariant(String),
}

impl From<tabulon_core::Error> for ViewError {
    fn from(e: tabulon_core::Error) -> Self {
        match e {
            tabulon_core::Error::Config(msg) => ViewError::Config(msg),
            tabulon_core::Error::Export(msg) => ViewError::Export(msg),
            tabulon_core::Error::Invariant(msg) => ViewError::Invariant(msg),
        }
    }
}

/// The current page window plus pagination metadata.
#[derive(Debug)]
pub struct VisiblePage<'a> {
    pub records: Vec<&'a Record>,
    pub page_index: usize,
    pub page_count: usize,
    pub total_count: usize,
}

/// Stateful view engine over a caller-owned record set.
pub struct TableView {
    id: TableId,
    cfg: ViewConfig,
    columns: Columns,
    records: Vec<Record>,
    filter: FilterState,
    sort: SortState,
    page: PageState,
    /// Bumped on every `configure`, so a replaced source can never serve
    /// a stale cached order.
    generation: u64,
    /// Filtered-and-sorted row indices into `records`.
    order: Vec<usize>,
    cache: OrderCache,
    subscribers: Subscribers,
}

impl TableView {
    pub fn new(cfg: ViewConfig) -> Self {
        Self {
            id: TableId::new(NEXT_TABLE_ID.fetch_add(1, AtomicOrdering::Relaxed)),
            cfg,
            columns: Columns::default(),
            records: Vec::new(),
            filter: FilterState::default(),
            sort: None,
            page: PageState {
                page_size: 1,
                page_index: 0,
            },
            generation: 0,
            order: Vec::new(),
            cache: OrderCache::new(),
            subscribers: Subscribers::new(),
        }
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn config(&self) -> &ViewConfig {
        &self.cfg
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    /// Records in the source set, before filtering.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Records surviving the active filters.
    pub fn filtered_count(&self) -> usize {
        self.order.len()
    }

    /// Replace columns and source records; filter, sort, and page reset to
    /// defaults (no filter, no sort, first page at the configured size).
    pub fn configure(
        &mut self,
        columns: Vec<ColumnSpec>,
        records: Vec<Record>,
    ) -> Result<(), ViewError> {
        let columns = Columns::new(columns)?;
        PageStage::new(self.cfg.default_page_size, 0)
            .map_err(|e| ViewError::Config(e.to_string()))?;

        self.columns = columns;
        self.records = records;
        self.filter = FilterState::default();
        self.sort = None;
        self.page = PageState {
            page_size: self.cfg.default_page_size,
            page_index: 0,
        };
        self.generation += 1;
        self.cache.clear();
        self.recompute()?;
        metrics::emit(
            "configure",
            &[("records", self.records.len().to_string())],
        );
        self.notify(ViewEvent::Configured);
        Ok(())
    }

    /// Update the free-text query. Empty or whitespace-only text clears it.
    pub fn set_query(&mut self, text: impl Into<String>) -> Result<(), ViewError> {
        let text = text.into();
        let trimmed = text.trim();
        self.filter.query = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.recompute()?;
        self.notify(ViewEvent::FilterChanged);
        Ok(())
    }

    /// Set or clear one column's filter value. An empty value removes the
    /// entry; an unknown column key is rejected and nothing changes.
    pub fn set_column_filter(&mut self, key: &str, value: &str) -> Result<(), ViewError> {
        if !self.columns.contains(key) {
            return Err(ViewError::Config(format!("unknown filter column '{key}'")));
        }
        if value.is_empty() {
            self.filter.column_filters.remove(key);
        } else {
            self.filter
                .column_filters
                .insert(key.to_string(), value.to_string());
        }
        self.recompute()?;
        self.notify(ViewEvent::FilterChanged);
        Ok(())
    }

    /// Drop the query and all column filters.
    pub fn clear_filters(&mut self) -> Result<(), ViewError> {
        self.filter = FilterState::default();
        self.recompute()?;
        self.notify(ViewEvent::FilterChanged);
        Ok(())
    }

    /// Toggle/replace the sort column: the same key flips direction, a new
    /// key starts ascending. Unknown keys are rejected, state untouched.
    pub fn set_sort(&mut self, key: &str) -> Result<(), ViewError> {
        if !self.columns.contains(key) {
            return Err(ViewError::Config(format!("unknown sort column '{key}'")));
        }
        self.sort = match self.sort.take() {
            Some(current) if current.key == key => Some(SortKey {
                key: current.key,
                direction: current.direction.flipped(),
            }),
            _ => Some(SortKey {
                key: key.to_string(),
                direction: SortDirection::Ascending,
            }),
        };
        self.recompute()?;
        metrics::emit("set_sort", &[("column", key.to_string())]);
        self.notify(ViewEvent::SortChanged);
        Ok(())
    }

    /// Back to natural (filtered) order.
    pub fn clear_sort(&mut self) -> Result<(), ViewError> {
        self.sort = None;
        self.recompute()?;
        self.notify(ViewEvent::SortChanged);
        Ok(())
    }

    /// Move to a page. Out-of-range indices clamp to the last page; this
    /// call never fails.
    pub fn set_page(&mut self, index: usize) -> Result<(), ViewError> {
        self.page.page_index =
            PageStage::clamp_index(self.order.len(), self.page.page_size, index);
        metrics::emit("set_page", &[("index", self.page.page_index.to_string())]);
        self.notify(ViewEvent::PageChanged);
        Ok(())
    }

    /// Change the page size. Zero (and anything beyond the configured
    /// maximum) is rejected; prior page state is left unchanged.
    pub fn set_page_size(&mut self, size: usize) -> Result<(), ViewError> {
        PageStage::new(size, self.page.page_index)
            .map_err(|e| ViewError::Config(e.to_string()))?;
        if let Some(max) = self.cfg.max_page_size {
            if size > max {
                return Err(ViewError::Config(format!(
                    "page size {size} exceeds maximum {max}"
                )));
            }
        }
        self.page.page_size = size;
        self.page.page_index =
            PageStage::clamp_index(self.order.len(), size, self.page.page_index);
        self.notify(ViewEvent::PageChanged);
        Ok(())
    }

    /// The current page window. Reads never recompute; the derived order
    /// and page index are kept current by every mutation.
    pub fn visible_page(&self) -> VisiblePage<'_> {
        let (window, meta) = self.page_window();
        VisiblePage {
            records: window.iter().map(|&idx| &self.records[idx]).collect(),
            page_index: meta.page_index,
            page_count: meta.page_count,
            total_count: meta.total_count,
        }
    }

    /// Serialize the full filtered-and-sorted set as delimited text,
    /// ignoring pagination. Never mutates state.
    pub fn export_text(&self, delimiter: u8) -> Result<String, ViewError> {
        Exporter::new(delimiter)
            .write(&self.columns, &self.records, &self.order)
            .map_err(|e| ViewError::Export(e.to_string()))
    }

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&ViewEvent, &PageMeta) + Send + 'static,
    ) -> SubscriberId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn page_meta(&self) -> PageMeta {
        let (_, meta) = self.page_window();
        meta
    }

    fn page_window(&self) -> (&[usize], PageMeta) {
        match PageStage::new(self.page.page_size, self.page.page_index) {
            Ok(stage) => stage.slice(&self.order),
            // page_size is validated on every mutating path.
            Err(_) => (
                &self.order[..0],
                PageMeta {
                    page_index: 0,
                    page_count: 1,
                    total_count: self.order.len(),
                },
            ),
        }
    }

    /// Re-derive the filtered-and-sorted order from the state slices, then
    /// reclamp the page index. The memo cache short-circuits recomputes
    /// whose (filter, sort, generation) snapshot is unchanged.
    fn recompute(&mut self) -> Result<(), ViewError> {
        let fingerprint = hash_serde(&(
            &self.filter,
            &self.sort,
            self.generation,
            self.cfg.case_sensitive_filters,
        ))
        .map_err(ViewError::from)?;

        if let Some(cached) = self.cache.get(&fingerprint) {
            self.order = cached.to_vec();
        } else {
            let filtered = FilterStage {
                query: self.filter.query.clone(),
                column_filters: self.filter.column_filters.clone(),
                case_sensitive: self.cfg.case_sensitive_filters,
            }
            .apply(&self.records);

            let order = match &self.sort {
                Some(sort) => SortStage {
                    key: sort.key.clone(),
                    direction: sort.direction,
                }
                .apply(&self.records, &self.columns, &filtered)
                .map_err(|e| ViewError::Invariant(e.to_string()))?,
                None => filtered,
            };

            self.cache.put(fingerprint, order.clone());
            self.order = order;
        }

        self.page.page_index =
            PageStage::clamp_index(self.order.len(), self.page.page_size, self.page.page_index);
        Ok(())
    }

    fn notify(&mut self, event: ViewEvent) {
        let meta = self.page_meta();
        self.subscribers.notify(&event, &meta);
    }
}

impl std::fmt::Debug for TableView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableView")
            .field("id", &self.id)
            .field("columns", &self.columns.len())
            .field("records", &self.records.len())
            .field("filter", &self.filter)
            .field("sort", &self.sort)
            .field("page", &self.page)
            .finish()
    }
}

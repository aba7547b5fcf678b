#![forbid(unsafe_code)]
//! tabulon: facade over the workspace crates.
//!
//! Most hosts only need `TableView` plus the core data model; the stage
//! crates remain importable for callers composing the pipeline directly.

pub use tabulon_core::prelude::{
    CellValue, ColumnSpec, Columns, Record, SubscriberId, TableId, ViewConfig,
};
pub use tabulon_stages::{Exporter, FilterStage, PageMeta, PageStage, SortStage};
pub use tabulon_view::{
    FilterState, PageState, SortDirection, SortKey, SortState, TableView, ViewError, ViewEvent,
    VisiblePage,
};

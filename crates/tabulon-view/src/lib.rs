#![forbid(unsafe_code)]
//! tabulon-view: the stateful table view engine.
//!
//! Owns the four state slices (source, filter, sort, page), recomputes the
//! derived row order eagerly after every mutation, clamps the page index
//! before anything can read it, and notifies subscribers synchronously.

pub mod cache;
pub mod metrics;
pub mod notify;
pub mod state;
pub mod view;

pub use notify::ViewEvent;
pub use state::{FilterState, PageState, SortKey, SortState};
pub use tabulon_stages::SortDirection;
pub use view::{TableView, ViewError, VisiblePage};

#![forbid(unsafe_code)]
//! tabulon-stages: pure pipeline stages (filter/sort/page/export).
//!
//! Design intent:
//! - Keep this crate pure and synchronous (no async, no I/O).
//! - Each stage is deterministic: same inputs, bit-identical output.
//! - Derived sets are row-index vectors into the caller's record slice,
//!   so records are never cloned between stages.

pub mod export;
pub mod filter;
pub mod page;
pub mod sort;
pub mod traits;

pub use export::Exporter;
pub use filter::FilterStage;
pub use page::{PageMeta, PageStage};
pub use sort::{SortDirection, SortStage};
pub use traits::{Stage, StageError};

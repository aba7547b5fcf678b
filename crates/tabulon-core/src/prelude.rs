//! Convenient re-exports for downstream crates.

pub use crate::column::{CellCompare, CellFormat, ColumnSpec, Columns};
pub use crate::config::ViewConfig;
pub use crate::error::{Error, Result};
pub use crate::hash::{hash_bytes, hash_serde, Hash256};
pub use crate::id::{SubscriberId, TableId};
pub use crate::record::Record;
pub use crate::value::CellValue;

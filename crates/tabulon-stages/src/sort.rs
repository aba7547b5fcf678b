//! Sort stage: stable, single-column ordering over a filtered index set.
//!
//! Descending reverses the comparator result, not the sorted sequence, so
//! records comparing equal keep their filtered order in both directions.

use serde::{Deserialize, Serialize};

use tabulon_core::column::Columns;
use tabulon_core::record::Record;
use tabulon_core::value::CellValue;

use crate::traits::{Stage, StageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SortStage {
    pub key: String,
    pub direction: SortDirection,
}

impl Stage for SortStage {
    fn name(&self) -> &'static str {
        "sort"
    }
}

const NULL_CELL: CellValue = CellValue::Null;

impl SortStage {
    /// Reorder `input` (indices into `records`) by this stage's column.
    ///
    /// Uses the column's comparator strategy when present, else the default
    /// total order. The sort is stable; ties retain input order.
    pub fn apply(
        &self,
        records: &[Record],
        columns: &Columns,
        input: &[usize],
    ) -> Result<Vec<usize>, StageError> {
        let spec = columns
            .get(&self.key)
            .ok_or_else(|| StageError::Sort(format!("unknown sort column '{}'", self.key)))?;

        let mut order = input.to_vec();
        order.sort_by(|&ia, &ib| {
            let a = records[ia].value_of(&self.key).unwrap_or(&NULL_CELL);
            let b = records[ib].value_of(&self.key).unwrap_or(&NULL_CELL);
            let ord = spec.compare(a, b);
            match self.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });

        Ok(order)
    }
}

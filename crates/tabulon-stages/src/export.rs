//! Export: serialize the full sorted set to delimited text.
//!
//! Column order matches the column list, the header row carries labels,
//! and each data cell is the column's formatted value. Quoting/escaping is
//! the csv crate's RFC-4180 behavior, so output round-trips through any
//! reader using the same delimiter convention. Export consumes the whole
//! sorted order, never a page window.

use tabulon_core::column::Columns;
use tabulon_core::record::Record;

use crate::traits::{Stage, StageError};

#[derive(Debug, Clone, Copy)]
pub struct Exporter {
    delimiter: u8,
}

impl Stage for Exporter {
    fn name(&self) -> &'static str {
        "export"
    }
}

impl Exporter {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Serialize `order` (indices into `records`) as delimited text.
    ///
    /// Any writer failure discards partial output and surfaces as
    /// `StageError::Export`.
    pub fn write(
        &self,
        columns: &Columns,
        records: &[Record],
        order: &[usize],
    ) -> Result<String, StageError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        writer
            .write_record(columns.iter().map(|spec| spec.label.as_str()))
            .map_err(|e| StageError::Export(format!("header: {e}")))?;

        for &idx in order {
            let record = records
                .get(idx)
                .ok_or_else(|| StageError::Export(format!("row index {idx} out of range")))?;
            let row: Vec<String> = columns
                .iter()
                .map(|spec| match record.value_of(&spec.key) {
                    Some(value) => spec.format(value),
                    None => String::new(),
                })
                .collect();
            writer
                .write_record(&row)
                .map_err(|e| StageError::Export(format!("row {idx}: {e}")))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| StageError::Export(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| StageError::Export(e.to_string()))
    }
}

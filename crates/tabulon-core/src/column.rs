//! Column descriptors and their per-column strategies.
//!
//! A column is a key/label pair plus two optional capability slots: a
//! comparator used by the sort stage and a formatter used by export. Both
//! are object-safe traits so every column variant stays enumerable and
//! independently testable; plain closures work through blanket impls.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};
use crate::value::CellValue;

/// Comparator strategy for one column's values.
pub trait CellCompare: Send + Sync {
    fn compare(&self, a: &CellValue, b: &CellValue) -> Ordering;
}

impl<F> CellCompare for F
where
    F: Fn(&CellValue, &CellValue) -> Ordering + Send + Sync,
{
    fn compare(&self, a: &CellValue, b: &CellValue) -> Ordering {
        self(a, b)
    }
}

/// Formatter strategy for one column's values.
pub trait CellFormat: Send + Sync {
    fn format(&self, value: &CellValue) -> String;
}

impl<F> CellFormat for F
where
    F: Fn(&CellValue) -> String + Send + Sync,
{
    fn format(&self, value: &CellValue) -> String {
        self(value)
    }
}

/// One column of the table: field key, header label, optional strategies.
pub struct ColumnSpec {
    pub key: String,
    pub label: String,
    comparator: Option<Box<dyn CellCompare>>,
    formatter: Option<Box<dyn CellFormat>>,
}

impl ColumnSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            comparator: None,
            formatter: None,
        }
    }

    /// Attach a custom comparator for the sort stage.
    pub fn with_comparator(mut self, cmp: impl CellCompare + 'static) -> Self {
        self.comparator = Some(Box::new(cmp));
        self
    }

    /// Attach a custom formatter for export.
    pub fn with_formatter(mut self, fmt: impl CellFormat + 'static) -> Self {
        self.formatter = Some(Box::new(fmt));
        self
    }

    /// Compare two values of this column: strategy if present, else the
    /// default total order.
    pub fn compare(&self, a: &CellValue, b: &CellValue) -> Ordering {
        match &self.comparator {
            Some(c) => c.compare(a, b),
            None => CellValue::default_cmp(a, b),
        }
    }

    /// Format a value of this column: strategy if present, else `render()`.
    pub fn format(&self, value: &CellValue) -> String {
        match &self.formatter {
            Some(f) => f.format(value),
            None => value.render(),
        }
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("comparator", &self.comparator.is_some())
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

/// Ordered column list for one table instance. Keys are unique.
#[derive(Debug, Default)]
pub struct Columns {
    specs: Vec<ColumnSpec>,
}

impl Columns {
    /// Validate key uniqueness and build the list. Duplicate keys are a
    /// configuration error; the table cannot be built from them.
    pub fn new(specs: Vec<ColumnSpec>) -> Result<Self> {
        for (i, spec) in specs.iter().enumerate() {
            if specs[..i].iter().any(|other| other.key == spec.key) {
                return Err(Error::Config(format!(
                    "duplicate column key '{}'",
                    spec.key
                )));
            }
        }
        Ok(Self { specs })
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.specs.iter().position(|s| s.key == key)
    }

    pub fn get(&self, key: &str) -> Option<&ColumnSpec> {
        self.specs.iter().find(|s| s.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index_of(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

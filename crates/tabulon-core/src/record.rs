//! Records: key → value mappings supplied by the caller.
//!
//! The engine holds records read-only and looks fields up by column key.
//! Absent fields are forgiven: they render as the empty string and sort
//! as nulls, never as an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion, for fixtures and callers assembling rows.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn value_of(&self, key: &str) -> Option<&CellValue> {
        self.fields.get(key)
    }

    /// Rendered form of a field; missing fields yield `""`.
    pub fn rendered(&self, key: &str) -> String {
        self.fields.get(key).map(CellValue::render).unwrap_or_default()
    }

    /// Iterate all fields in key order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, CellValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        Record {
            fields: iter.into_iter().collect(),
        }
    }
}

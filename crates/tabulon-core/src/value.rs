//! Cell values held by records.
//!
//! The engine treats values as opaque beyond rendering, numeric promotion,
//! and the default total order used when a column carries no comparator.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Display form. `Null` renders as the empty string.
    pub fn render(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::Str(s) => s.clone(),
        }
    }

    /// Numeric view, when one exists. Numeric-looking strings parse;
    /// booleans and non-numeric strings do not.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
            CellValue::Str(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Default total order for sorting when no column comparator is supplied.
    ///
    /// Nulls are mutually equal and sort before values. When both sides have
    /// a numeric view the comparison is numeric (NaN sorts last, NaN == NaN);
    /// otherwise rendered strings compare case-insensitively.
    pub fn default_cmp(a: &CellValue, b: &CellValue) -> Ordering {
        match (a.is_null(), b.is_null()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        if let (Some(x), Some(y)) = (a.as_number(), b.as_number()) {
            return cmp_f64(x, y);
        }

        let x = a.render().to_lowercase();
        let y = b.render().to_lowercase();
        x.cmp(&y)
    }
}

fn cmp_f64(x: f64, y: f64) -> Ordering {
    if x.is_nan() && y.is_nan() {
        Ordering::Equal
    } else if x.is_nan() {
        Ordering::Greater
    } else if y.is_nan() {
        Ordering::Less
    } else {
        x.partial_cmp(&y).unwrap_or(Ordering::Equal)
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Str(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Str(v)
    }
}

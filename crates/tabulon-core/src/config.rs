//! View configuration that hosting widgets can serialize/deserialize.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Page size applied when a table is (re)configured.
    pub default_page_size: usize,

    /// Optional upper bound on page size; `set_page_size` rejects larger values.
    pub max_page_size: Option<usize>,

    /// When true, free-text and column filters match case-sensitively.
    pub case_sensitive_filters: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_page_size: 25,
            max_page_size: None,
            case_sensitive_filters: false,
        }
    }
}

impl ViewConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `TABULON_PAGE_SIZE`: default page size
    /// - `TABULON_MAX_PAGE_SIZE`: maximum accepted page size
    /// - `TABULON_CASE_SENSITIVE`: `true`/`false` filter case sensitivity
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("TABULON_PAGE_SIZE") {
            if let Ok(v) = s.parse::<usize>() {
                if v > 0 {
                    cfg.default_page_size = v;
                }
            }
        }

        if let Ok(s) = std::env::var("TABULON_MAX_PAGE_SIZE") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.max_page_size = Some(v);
            }
        }

        if let Ok(s) = std::env::var("TABULON_CASE_SENSITIVE") {
            if let Ok(v) = s.parse::<bool>() {
                cfg.case_sensitive_filters = v;
            }
        }

        cfg
    }
}

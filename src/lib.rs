//! Rule-based renaming of proxy-node lists.
//!
//! Every record name goes through the same linear pipeline:
//!
//! ```text
//! pre-filter ─▶ normalize ─▶ extract tags/keywords ─▶ region lookup ─▶ synthesize
//!                                                                        │
//!              number duplicates ◀───────────────────────────────────────┘
//!                      │
//!                      └─▶ collapse singletons ─▶ category resort ─▶ overloaded filter
//! ```
//!
//! The entry points live in `api`, the pipeline components under `engine`
//! and the static tables under `rules`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[macro_use]
mod macros;
mod api;
mod engine;
mod rules;

pub use api::{
    BlockQuic, BoundaryMode, InputMode, Options, RenameDetails, RenameResult, RenameResultVerbose, Vocabulary,
    default_categories, default_rewrites, rename, rename_verbose_with, rename_with, rename_with_tables,
};
pub use engine::{
    Detected, Filters, KeyMatcher, LookupIndex, NameParts, RecordCounts, RecordTrace, RegionTables, Rejection,
    Renamer, RetainKeyword, RetainKeywords, RunMetrics, RunResult, TableError, TraceOutcome, category_tag,
    collapse_singletons, drop_overloaded, matches, multiplier_tag, normalize, number_duplicates, resort_by_category,
    synthesize,
};

/// Field name of the QUIC-blocking passthrough flag.
pub const BLOCK_QUIC_FIELD: &str = "block-quic";

// --- Records ----------------------------------------------------------------

/// A proxy record as supplied by the host.
///
/// Only `name` is interpreted. Every other field is carried through untouched,
/// except the [`BLOCK_QUIC_FIELD`] flag which [`Options::block_quic`] may set or
/// remove.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyRecord {
    pub name: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ProxyRecord {
    /// Create a record with no passthrough fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), fields: Map::new() }
    }

    /// Builder-style helper to attach a passthrough field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

// --- Rule tables ------------------------------------------------------------

/// Predicate deciding that one occurrence of a rewrite pattern must be left
/// untouched. Receives the full haystack and the occurrence.
pub type Guard = fn(&str, &regex::Match<'_>) -> bool;

/// A normalization rewrite: every occurrence of `pattern` becomes `canonical`.
///
/// Rewrites are built with the `rewrite!` macro (see `src/macros.rs`), which
/// stores the compiled pattern as a static reference.
pub struct Rewrite {
    pub canonical: &'static str,
    pub pattern: &'static Regex,
    /// Occurrences for which the guard returns true are skipped. Stands in for
    /// negative look-ahead, which `regex` does not support.
    pub keep: Option<Guard>,
}

impl std::fmt::Debug for Rewrite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rewrite")
            .field("canonical", &self.canonical)
            .field("pattern", &self.pattern.as_str())
            .field("keep", &self.keep.map(|_| "<function>"))
            .finish()
    }
}

/// A fixed label attached to names matching `pattern`.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub label: &'static str,
    pub pattern: &'static Regex,
}

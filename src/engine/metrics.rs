//! Run metrics and per-record traces.
//!
//! - `Renamer::run` for normal operation.
//! - `Renamer::run_with_metrics` when the caller wants phase timings and a
//!   trace of what happened to every input record.
//!
//! Traces are collected only on the metrics path.

use super::filter::Rejection;
use crate::ProxyRecord;
use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// Time spent in the pre-pass filters.
    pub filter: Duration,
    /// Time spent normalizing, matching and synthesizing names.
    pub rename: Duration,
    /// Time spent in the whole-list passes.
    pub post: Duration,
    pub counts: RecordCounts,
}

/// How many records each phase let through.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RecordCounts {
    pub input: usize,
    /// Removed by the pre-pass filters.
    pub filtered_out: usize,
    /// No region found and fallback disabled.
    pub dropped: usize,
    /// Removed by the overloaded-node filter.
    pub overloaded: usize,
    pub output: usize,
}

// --- Traces ------------------------------------------------------------------

/// What happened to one input record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceOutcome {
    /// Removed before renaming.
    Filtered(Rejection),
    /// Region found; carries the synthesized name before numbering.
    Renamed(String),
    /// No region found; carries the fallback name before numbering.
    Fallback(String),
    /// No region found and fallback disabled.
    Dropped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTrace {
    /// Name as supplied.
    pub original: String,
    /// Working name after normalization; `None` for filtered records.
    pub normalized: Option<String>,
    /// Lookup key that matched.
    pub key: Option<String>,
    /// Output label for the matched key.
    pub region: Option<String>,
    pub retained: Vec<String>,
    pub multiplier: Option<String>,
    pub category: Option<String>,
    pub outcome: TraceOutcome,
}

impl RecordTrace {
    pub(crate) fn filtered(original: String, reason: Rejection) -> Self {
        Self {
            original,
            normalized: None,
            key: None,
            region: None,
            retained: Vec::new(),
            multiplier: None,
            category: None,
            outcome: TraceOutcome::Filtered(reason),
        }
    }
}

/// Renamer output bundled with timing information.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Final record list.
    pub records: Vec<ProxyRecord>,
    /// One trace per input record, in input order. Empty unless collected.
    pub traces: Vec<RecordTrace>,
    /// Timing measurements for the run.
    pub metrics: RunMetrics,
}

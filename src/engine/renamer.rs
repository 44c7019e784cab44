//! Pipeline orchestration.
//!
//! A [`Renamer`] owns the lookup index for one configuration and runs whole
//! record lists through it:
//!
//! ```text
//! run_with_metrics(records)
//!   ├─ filter pass      Filters::rejection          (drop before renaming)
//!   ├─ rename pass      rename_one per record       (independent records)
//!   └─ post passes      number ─▶ collapse ─▶ resort ─▶ overloaded
//! ```
//!
//! Records never see each other until the post passes.

use super::extract::{RetainScan, category_tag, multiplier_tag};
use super::filter::Filters;
use super::index::{LookupIndex, RegionTables};
use super::metrics::{RecordCounts, RecordTrace, RunMetrics, RunResult, TraceOutcome};
use super::normalize::normalize_with;
use super::post::{collapse_singletons, drop_overloaded, number_duplicates, resort_by_category};
use super::synth::{NameParts, fallback, synthesize};
use crate::{Category, Options, ProxyRecord, Rewrite};
use std::time::Instant;
use tracing::{debug, trace};

/// Renames record lists under one set of options.
///
/// Usage: create with `Renamer::new(&options, &tables, &rewrites, &categories)`
/// then call `run(records)` as often as needed; the index is built once.
#[derive(Debug)]
pub struct Renamer<'a> {
    options: &'a Options,
    index: LookupIndex<'a>,
    rewrites: &'a [Rewrite],
    categories: &'a [Category],
}

impl<'a> Renamer<'a> {
    pub fn new(
        options: &'a Options,
        tables: &RegionTables<'a>,
        rewrites: &'a [Rewrite],
        categories: &'a [Category],
    ) -> Self {
        let index = LookupIndex::build(tables, options.input, options.output, options.boundary);
        Self { options, index, rewrites, categories }
    }

    pub fn index(&self) -> &LookupIndex<'a> {
        &self.index
    }

    /// Rename `records`, returning only the final list.
    pub fn run(&self, records: Vec<ProxyRecord>) -> Vec<ProxyRecord> {
        self.execute(records, false).records
    }

    /// Rename `records`, also returning timings and one trace per input
    /// record.
    pub fn run_with_metrics(&self, records: Vec<ProxyRecord>) -> RunResult {
        self.execute(records, true)
    }

    fn execute(&self, records: Vec<ProxyRecord>, keep_traces: bool) -> RunResult {
        let options = self.options;
        let total_start = Instant::now();
        let input = records.len();
        let mut traces: Vec<Option<RecordTrace>> = Vec::new();
        if keep_traces {
            traces.resize(input, None);
        }

        // Filter pass.
        let filter_start = Instant::now();
        let mut kept = Vec::with_capacity(input);
        for (position, record) in records.into_iter().enumerate() {
            match options.filters.rejection(&record.name) {
                Some(reason) => {
                    debug!(name = %record.name, %reason, "filtered out");
                    if keep_traces {
                        traces[position] = Some(RecordTrace::filtered(record.name, reason));
                    }
                }
                None => kept.push((position, record)),
            }
        }
        let filter = filter_start.elapsed();
        let filtered_out = input - kept.len();

        // Rename pass.
        let rename_start = Instant::now();
        let mut renamed = Vec::with_capacity(kept.len());
        for (position, record) in kept {
            let (record, record_trace) = self.rename_one(record);
            renamed.extend(record);
            if keep_traces {
                traces[position] = Some(record_trace);
            }
        }
        let rename = rename_start.elapsed();
        let dropped = input - filtered_out - renamed.len();

        // Post passes.
        let post_start = Instant::now();
        let mut records = number_duplicates(renamed, &options.sequence_separator);
        if options.collapse_singletons {
            collapse_singletons(&mut records, &options.sequence_separator);
        }
        if options.resort {
            records = resort_by_category(records);
        }
        let before_overloaded = records.len();
        if options.filters.contains(Filters::DROP_OVERLOADED) {
            drop_overloaded(&mut records);
        }
        let post = post_start.elapsed();

        let counts = RecordCounts {
            input,
            filtered_out,
            dropped,
            overloaded: before_overloaded - records.len(),
            output: records.len(),
        };
        debug!(?counts, "rename run finished");

        RunResult {
            records,
            traces: traces.into_iter().flatten().collect(),
            metrics: RunMetrics { total: total_start.elapsed(), filter, rename, post, counts },
        }
    }

    /// Normalize, tag, look up and synthesize one record.
    ///
    /// Returns `None` in place of the record when it has no region and
    /// fallback is disabled.
    fn rename_one(&self, mut record: ProxyRecord) -> (Option<ProxyRecord>, RecordTrace) {
        let options = self.options;
        let original = std::mem::take(&mut record.name);

        let mut retain = RetainScan::new(&options.retain);
        let name = normalize_with(&original, self.rewrites, |rule, name| retain.on_rewrite(rule, &original, name));
        options.block_quic.apply(&mut record);
        let retained = retain.finish(&name);

        let category = if options.category_tag { category_tag(&name, self.categories) } else { None };
        let multiplier = if options.multiplier_tag { multiplier_tag(&name) } else { None };
        let detected = self.index.find(&name);

        let outcome = match detected {
            Some(found) => {
                let flag = if options.flag { self.index.flag_for(found.label) } else { "" };
                let (prefix, suffix) =
                    if options.prefix_mode { (options.name.as_str(), "") } else { ("", options.name.as_str()) };
                let parts = NameParts {
                    prefix,
                    flag,
                    suffix,
                    region: found.label,
                    retained: &retained,
                    multiplier: multiplier.as_deref(),
                    category,
                };
                TraceOutcome::Renamed(synthesize(&parts, &options.separator))
            }
            None if options.fallback => TraceOutcome::Fallback(fallback(&options.name, &name, &options.separator)),
            None => {
                debug!(name = %original, normalized = %name, "no region found, dropping");
                TraceOutcome::Dropped
            }
        };

        let renamed = match &outcome {
            TraceOutcome::Renamed(new_name) | TraceOutcome::Fallback(new_name) => {
                trace!(from = %original, to = %new_name, "renamed");
                record.name = new_name.clone();
                Some(record)
            }
            TraceOutcome::Dropped | TraceOutcome::Filtered(_) => None,
        };

        let record_trace = RecordTrace {
            original,
            normalized: Some(name),
            key: detected.map(|found| found.key.to_string()),
            region: detected.map(|found| found.label.to_string()),
            retained,
            multiplier,
            category: category.map(str::to_string),
            outcome,
        };
        (renamed, record_trace)
    }
}

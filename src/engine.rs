//! Renaming engine.
//!
//! The engine is split into one submodule per pipeline stage. A run looks
//! like this:
//!
//! ```text
//! RegionTables ──┐
//!                │  LookupIndex::build                  (index.rs)
//!                └──────────────┬─────────────
//!                               │  one KeyMatcher per key (matcher.rs)
//!                               v
//! records ── rejection ─────────┼─ pre-pass filters     (filter.rs)
//!                               │
//!                               v
//!                     Renamer::rename_one               (renamer.rs)
//!                       - normalize_with                (normalize.rs)
//!                       - retain scan, tags             (extract.rs)
//!                       - LookupIndex::find
//!                       - synthesize / fallback / drop  (synth.rs)
//!                               │
//!                               v
//!                     post passes, in order             (post.rs)
//!                       - number_duplicates
//!                       - collapse_singletons (opt)
//!                       - resort_by_category  (opt)
//!                       - drop_overloaded     (opt)
//!                               │
//!                               v
//!                        Vec<ProxyRecord>
//! ```
//!
//! The index is built once per run and shared by every record. Per-record
//! work never looks at other records; the post passes are whole-list and run
//! strictly after every record has been renamed.
//!
//! ## Responsibilities by module
//!
//! - `index.rs`: validates parallel vocabularies (`RegionTables`) and builds
//!   the ordered key → label map (`LookupIndex`).
//! - `matcher.rs`: substring vs. boundary-checked key matching.
//! - `normalize.rs`: applies the rewrite table plus the Hong Kong hard lock.
//! - `extract.rs`: multiplier tags, category tags and retained keywords.
//! - `synth.rs`: joins the name components in their fixed order.
//! - `filter.rs`: drops records before renaming (`Filters`).
//! - `post.rs`: numbering, singleton collapse, resort, overloaded filter.
//! - `renamer.rs`: wires the stages together and records metrics/traces.
//! - `metrics.rs`: timings and counters for a run.
//!
//! ## Debugging
//!
//! Everything logs through `tracing`; run the CLI with
//! `GEORENAME_LOG=georename=trace` to see every rewrite and lookup.

#[path = "engine/extract.rs"]
mod extract;
#[path = "engine/filter.rs"]
mod filter;
#[path = "engine/index.rs"]
mod index;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/normalize.rs"]
mod normalize;
#[path = "engine/post.rs"]
mod post;
#[path = "engine/renamer.rs"]
mod renamer;
#[path = "engine/synth.rs"]
mod synth;

pub use extract::{RetainKeyword, RetainKeywords, category_tag, multiplier_tag};
pub use filter::{Filters, Rejection};
pub use index::{Detected, LookupIndex, RegionTables, TableError};
pub use matcher::{KeyMatcher, matches};
pub use metrics::{RecordCounts, RecordTrace, RunMetrics, RunResult, TraceOutcome};
pub use normalize::normalize;
pub use post::{collapse_singletons, drop_overloaded, number_duplicates, resort_by_category};
pub use renamer::Renamer;
pub use synth::{NameParts, synthesize};

use crate::engine::{self, Filters, RecordTrace, RegionTables, RetainKeywords, RunMetrics};
use crate::{BLOCK_QUIC_FIELD, Category, ProxyRecord, Rewrite};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

static DEFAULT_REWRITES: Lazy<Vec<Rewrite>> = Lazy::new(crate::rules::rewrites::get);
static DEFAULT_CATEGORIES: Lazy<Vec<Category>> = Lazy::new(crate::rules::patterns::categories);

/// The built-in normalization rewrites, in application order.
pub fn default_rewrites() -> &'static [Rewrite] {
    &DEFAULT_REWRITES
}

/// The built-in category tags; the last matching entry wins.
pub fn default_categories() -> &'static [Category] {
    &DEFAULT_CATEGORIES
}

/// One of the four parallel region vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    /// Chinese names (`cn`, `zh`).
    Native,
    /// English full names (`quan`).
    English,
    /// Two-letter codes (`us`, `en`).
    Code,
    /// Flag emoji (`gq`, `flag`).
    Flag,
}

impl Vocabulary {
    /// Resolve an `in`/`out` argument value. Matching is exact.
    pub fn from_arg(value: &str) -> Option<Self> {
        match value {
            "cn" | "zh" => Some(Vocabulary::Native),
            "quan" => Some(Vocabulary::English),
            "us" | "en" => Some(Vocabulary::Code),
            "gq" | "flag" => Some(Vocabulary::Flag),
            _ => None,
        }
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Vocabulary::Native => "native",
            Vocabulary::English => "english",
            Vocabulary::Code => "code",
            Vocabulary::Flag => "flag",
        })
    }
}

/// Which vocabularies provide lookup keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Native, then English, then code.
    #[default]
    Combined,
    Only(Vocabulary),
}

impl InputMode {
    /// Vocabularies in insertion order.
    pub fn vocabularies(&self) -> &[Vocabulary] {
        match self {
            InputMode::Combined => &[Vocabulary::Native, Vocabulary::English, Vocabulary::Code],
            InputMode::Only(vocabulary) => std::slice::from_ref(vocabulary),
        }
    }
}

/// How strictly a key must stand apart from its surroundings to count as
/// present. See `engine/matcher.rs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundaryMode {
    /// Plain substring.
    Off,
    /// Two-letter codes need non-letter flanks.
    #[default]
    En,
    /// Every key needs word flanks.
    All,
}

impl BoundaryMode {
    /// Resolve an `abs` argument value; anything unrecognized is `En`.
    pub fn from_arg(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "off" => BoundaryMode::Off,
            "all" => BoundaryMode::All,
            _ => BoundaryMode::En,
        }
    }
}

/// Tri-state handling of the [`BLOCK_QUIC_FIELD`] passthrough field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockQuic {
    On,
    Off,
    /// Remove the field.
    #[default]
    Unset,
}

impl BlockQuic {
    pub fn from_arg(value: &str) -> Self {
        match value {
            "on" => BlockQuic::On,
            "off" => BlockQuic::Off,
            _ => BlockQuic::Unset,
        }
    }

    pub fn apply(self, record: &mut ProxyRecord) {
        match self {
            BlockQuic::On => {
                record.fields.insert(BLOCK_QUIC_FIELD.to_string(), Value::from("on"));
            }
            BlockQuic::Off => {
                record.fields.insert(BLOCK_QUIC_FIELD.to_string(), Value::from("off"));
            }
            BlockQuic::Unset => {
                record.fields.shift_remove(BLOCK_QUIC_FIELD);
            }
        }
    }
}

/// Options that affect renaming.
///
/// Build directly, or from the string arguments a host passes with
/// [`Options::from_arguments`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// `in`: vocabularies searched for region keys.
    pub input: InputMode,
    /// `out`: vocabulary the region label is taken from.
    pub output: Vocabulary,
    /// `abs`
    pub boundary: BoundaryMode,
    /// `clear`, `nx`, `blnx`, `key`
    pub filters: Filters,
    /// `blgd`: append the category tag.
    pub category_tag: bool,
    /// `bl`: append the multiplier tag.
    pub multiplier_tag: bool,
    /// `blkey`
    pub retain: RetainKeywords,
    /// `flag`: add the region's flag emoji.
    pub flag: bool,
    /// `name`: custom text added to every renamed node.
    pub name: String,
    /// `nf`: put `name` in front of the flag instead of after it.
    pub prefix_mode: bool,
    /// `fgf`: separator between name components.
    pub separator: String,
    /// `sn`: separator before the sequence number.
    pub sequence_separator: String,
    /// `nm`: keep unmatched records under a fallback name.
    pub fallback: bool,
    /// `one`: drop the sequence number of names that occur once.
    pub collapse_singletons: bool,
    /// `blpx`: move tagged names behind the rest.
    pub resort: bool,
    /// `blockquic`
    pub block_quic: BlockQuic,
    /// `debug`: only raises the CLI's default log level.
    pub debug: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            input: InputMode::Combined,
            output: Vocabulary::Native,
            boundary: BoundaryMode::En,
            filters: Filters::default(),
            category_tag: false,
            multiplier_tag: false,
            retain: RetainKeywords::default(),
            flag: false,
            name: String::new(),
            prefix_mode: false,
            separator: " ".to_string(),
            sequence_separator: " ".to_string(),
            fallback: false,
            collapse_singletons: false,
            resort: false,
            block_quic: BlockQuic::Unset,
            debug: false,
        }
    }
}

impl Options {
    /// Resolve raw `key=value` arguments. Never fails: unrecognized values
    /// fall back to defaults and unknown keys are ignored.
    pub fn from_arguments<I, K, V>(arguments: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Options::default();
        for (key, value) in arguments {
            let (key, value) = (key.as_ref(), value.as_ref());
            match key {
                "in" => options.input = Vocabulary::from_arg(value).map_or(InputMode::Combined, InputMode::Only),
                "out" => options.output = Vocabulary::from_arg(value).unwrap_or(Vocabulary::Native),
                "abs" => options.boundary = BoundaryMode::from_arg(value),
                "clear" => options.filters.set(Filters::CLEAR_INFO, bool_arg(value, true)),
                "nx" => options.filters.set(Filters::DROP_HIGH_RATE, bool_arg(value, false)),
                "blnx" => options.filters.set(Filters::KEEP_HIGH_RATE_ONLY, bool_arg(value, false)),
                "key" => options.filters.set(Filters::WHITELIST | Filters::DROP_OVERLOADED, bool_arg(value, false)),
                "blgd" => options.category_tag = bool_arg(value, false),
                "bl" => options.multiplier_tag = bool_arg(value, false),
                "blkey" => options.retain = RetainKeywords::parse(value),
                "flag" => options.flag = bool_arg(value, false),
                "name" => options.name = value.to_string(),
                "nf" => options.prefix_mode = bool_arg(value, false),
                "fgf" => options.separator = value.to_string(),
                "sn" => options.sequence_separator = value.to_string(),
                "nm" => options.fallback = bool_arg(value, false),
                "one" => options.collapse_singletons = bool_arg(value, false),
                "blpx" => options.resort = bool_arg(value, false),
                "blockquic" => options.block_quic = BlockQuic::from_arg(value),
                "debug" => options.debug = bool_arg(value, false),
                other => debug!(key = other, value, "ignoring unknown argument"),
            }
        }
        options
    }
}

/// Lenient boolean: blank or unrecognized text yields `default`.
fn bool_arg(value: &str, default: bool) -> bool {
    let value = value.trim();
    if ["true", "1", "on", "yes"].iter().any(|t| value.eq_ignore_ascii_case(t)) {
        true
    } else if ["false", "0", "off", "no"].iter().any(|f| value.eq_ignore_ascii_case(f)) {
        false
    } else {
        default
    }
}

/// Result from [`rename`], [`rename_with`] and [`rename_with_tables`].
#[derive(Debug, Clone)]
pub struct RenameResult {
    /// Surviving records, renamed, in output order.
    pub records: Vec<ProxyRecord>,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Additional details returned by [`rename_verbose_with`].
#[derive(Debug, Clone)]
pub struct RenameDetails {
    /// One trace per input record, in input order.
    pub traces: Vec<RecordTrace>,
    /// Phase timings and record counts.
    pub metrics: RunMetrics,
    /// Number of keys in the lookup index.
    pub index_keys: usize,
}

/// Result from [`rename_verbose_with`].
#[derive(Debug, Clone)]
pub struct RenameResultVerbose {
    pub records: Vec<ProxyRecord>,
    pub elapsed: Duration,
    pub details: RenameDetails,
}

/// Rename `records` with default options and the built-in tables.
///
/// # Example
/// ```
/// use georename::{ProxyRecord, rename};
///
/// let out = rename(vec![ProxyRecord::new("HK01 IEPL"), ProxyRecord::new("日本 BGP"), ProxyRecord::new("Mars")]);
/// let names: Vec<_> = out.records.iter().map(|record| record.name.as_str()).collect();
/// assert_eq!(names, ["香港 01", "日本 01"]);
/// ```
pub fn rename(records: Vec<ProxyRecord>) -> RenameResult {
    rename_with(records, &Options::default())
}

/// Rename `records` with `options` and the built-in tables.
pub fn rename_with(records: Vec<ProxyRecord>, options: &Options) -> RenameResult {
    rename_with_tables(records, options, &RegionTables::builtin())
}

/// Rename `records` with `options` against caller-supplied vocabularies.
pub fn rename_with_tables(records: Vec<ProxyRecord>, options: &Options, tables: &RegionTables<'_>) -> RenameResult {
    let start = Instant::now();
    let renamer = engine::Renamer::new(options, tables, default_rewrites(), default_categories());
    let records = renamer.run(records);
    RenameResult { records, elapsed: start.elapsed() }
}

/// Rename `records` with `options` and return traces and metrics as well.
///
/// The default [`rename_with`] path does not keep the traces.
pub fn rename_verbose_with(records: Vec<ProxyRecord>, options: &Options) -> RenameResultVerbose {
    let tables = RegionTables::builtin();
    let renamer = engine::Renamer::new(options, &tables, default_rewrites(), default_categories());
    let index_keys = renamer.index().len();
    let run = renamer.run_with_metrics(records);

    let elapsed = run.metrics.total;
    let details = RenameDetails { traces: run.traces, metrics: run.metrics, index_keys };
    RenameResultVerbose { records: run.records, elapsed, details }
}

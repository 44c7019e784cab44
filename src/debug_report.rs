use georename::{RecordTrace, RenameDetails, TraceOutcome};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Print the per-record trace and run summary to stderr.
pub fn print_run(details: &RenameDetails, color: bool) {
    let palette = ansi::Palette::new(color);
    let counts = &details.metrics.counts;
    let title = format!("⚙  Renaming {} records ({} lookup keys)", counts.input, details.index_keys);
    eprintln!("\n{}", palette.bold(palette.paint(title, ansi::CYAN)));

    eprintln!("\n{}", palette.paint("━━━ Records ━━━", ansi::GRAY));
    if details.traces.is_empty() {
        eprintln!("{}", palette.dim("  No records"));
    }
    for (idx, trace) in details.traces.iter().enumerate() {
        print_trace(idx, trace, &palette);
    }

    eprintln!("\n{}", palette.paint("━━━ Counts ━━━", ansi::GRAY));
    eprintln!(
        "  In: {}  │  Filtered: {}  │  Dropped: {}  │  Overloaded: {}  │  Out: {}",
        palette.paint(counts.input.to_string(), ansi::BLUE),
        palette.paint(counts.filtered_out.to_string(), ansi::YELLOW),
        palette.paint(counts.dropped.to_string(), ansi::RED),
        palette.paint(counts.overloaded.to_string(), ansi::YELLOW),
        palette.paint(counts.output.to_string(), ansi::GREEN),
    );
    if counts.dropped > 0 {
        eprintln!("\n{}", palette.dim("  Tip: nm=true keeps unmatched records"));
        eprintln!("{}", palette.dim("  Tip: Set GEORENAME_LOG=georename=trace to see every rewrite and lookup"));
    }

    let metrics = &details.metrics;
    eprintln!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    eprintln!(
        "  Total: {}  │  Filter: {}  │  Rename: {}  │  Post: {}",
        palette.paint(format!("{:?}", metrics.total), ansi::GREEN),
        palette.dim(format!("{:?}", metrics.filter)),
        palette.paint(format!("{:?}", metrics.rename), ansi::CYAN),
        palette.dim(format!("{:?}", metrics.post)),
    );
    eprintln!();
}

fn print_trace(idx: usize, trace: &RecordTrace, palette: &ansi::Palette) {
    let outcome = match &trace.outcome {
        TraceOutcome::Renamed(name) => palette.bold(palette.paint(name, ansi::GREEN)),
        TraceOutcome::Fallback(name) => palette.paint(format!("{name} (fallback)"), ansi::YELLOW),
        TraceOutcome::Dropped => palette.paint("✗ dropped", ansi::RED),
        TraceOutcome::Filtered(reason) => palette.dim(format!("✗ filtered: {reason}")),
    };
    eprintln!(
        "  {} {} {} {}",
        palette.paint(format!("[{idx}]"), ansi::GRAY),
        trace.original,
        palette.dim("→"),
        outcome
    );

    let Some(normalized) = &trace.normalized else {
        return;
    };
    let mut facts = vec![format!("{} {}", palette.dim("normalized:"), palette.paint(normalized, ansi::BLUE))];
    if let (Some(key), Some(region)) = (&trace.key, &trace.region) {
        facts.push(format!("{} {} → {}", palette.dim("key:"), palette.paint(key, ansi::CYAN), region));
    }
    if !trace.retained.is_empty() {
        facts.push(format!("{} {}", palette.dim("kept:"), trace.retained.join("+")));
    }
    if let Some(multiplier) = &trace.multiplier {
        facts.push(format!("{} {}", palette.dim("rate:"), palette.paint(multiplier, ansi::YELLOW)));
    }
    if let Some(category) = &trace.category {
        facts.push(format!("{} {}", palette.dim("tag:"), palette.paint(category, ansi::YELLOW)));
    }
    eprintln!("      {}", facts.join(palette.dim("  │ ").as_str()));
}

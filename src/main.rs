mod debug_report;

use clap::Parser;
use georename::{Options, ProxyRecord, rename_verbose_with};
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "GEORENAME_LOG";

#[derive(Debug, Parser)]
#[command(name = "georename", version)]
#[command(about = "Rename proxy nodes by detected region")]
#[command(after_help = "Exit codes:\n  0  Success.\n  1  I/O or JSON error.\n  2  Invalid arguments.")]
struct Cli {
    /// JSON array of records to rename. Reads stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Renaming argument as KEY=VALUE (repeatable), e.g. `-a out=quan -a flag=true`
    #[arg(short = 'a', long = "arg", value_name = "KEY=VALUE")]
    arg: Vec<String>,

    /// Renaming arguments as one query string, e.g. `in=cn&bl=true&one=1`
    #[arg(long = "args", value_name = "QUERY")]
    query: Option<String>,

    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Print a per-record trace to stderr.
    #[arg(long)]
    trace: bool,

    /// Force ANSI color in the trace.
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable ANSI color in the trace.
    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("error: invalid argument '{0}' (expected KEY=VALUE)")]
    BadArgument(String),
    #[error("error: argument '{0}' is not valid percent-encoded UTF-8")]
    BadEncoding(String),
    #[error("error: failed to read {source_name}: {source}")]
    Read { source_name: String, source: io::Error },
    #[error("error: failed to write output: {0}")]
    Write(#[from] io::Error),
    #[error("error: invalid JSON input: {0}")]
    Decode(serde_json::Error),
    #[error("error: failed to encode output: {0}")]
    Encode(serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::BadArgument(_) | CliError::BadEncoding(_) => 2,
            _ => 1,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let arguments = collect_arguments(&cli)?;
    let options = Options::from_arguments(arguments);
    init_logging(options.debug);

    let records = read_records(cli.input.as_ref())?;
    let res = rename_verbose_with(records, &options);

    if cli.trace {
        let color = if cli.no_color { false } else { cli.color || io::stderr().is_terminal() };
        debug_report::print_run(&res.details, color);
    }

    let records = &res.records;
    let json = if cli.pretty { serde_json::to_string_pretty(records) } else { serde_json::to_string(records) };
    let json = json.map_err(CliError::Encode)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

/// `--args` pairs first, then each `-a` in order; later keys override earlier.
/// Query values are percent-decoded, `-a` values are taken verbatim.
fn collect_arguments(cli: &Cli) -> Result<Vec<(String, String)>, CliError> {
    let mut pairs = Vec::new();
    let query = cli.query.as_deref().unwrap_or_default();
    for part in query.split('&').filter(|part| !part.is_empty()) {
        let (key, value) = split_argument(part)?;
        let value = urlencoding::decode(value).map_err(|_| CliError::BadEncoding(part.to_string()))?;
        pairs.push((key, value.into_owned()));
    }
    for part in &cli.arg {
        let (key, value) = split_argument(part)?;
        pairs.push((key, value.to_string()));
    }
    Ok(pairs)
}

fn split_argument(part: &str) -> Result<(String, &str), CliError> {
    match part.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim().to_string(), value)),
        _ => Err(CliError::BadArgument(part.to_string())),
    }
}

fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if debug { "georename=debug" } else { "warn" }));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn read_records(path: Option<&PathBuf>) -> Result<Vec<ProxyRecord>, CliError> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|source| CliError::Read { source_name: path.display().to_string(), source })?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| CliError::Read { source_name: "stdin".to_string(), source })?;
            buffer
        }
    };
    serde_json::from_str(&text).map_err(CliError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(argv: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("georename").chain(argv.iter().copied()))
    }

    #[test]
    fn query_and_repeated_arguments_are_merged_in_order() {
        let cli = cli(&["--args", "in=cn&bl=true&&name=A=B", "-a", "bl=false", "--arg", "fgf=|"]);
        let pairs = collect_arguments(&cli).unwrap();
        let expected: Vec<(String, String)> =
            [("in", "cn"), ("bl", "true"), ("name", "A=B"), ("bl", "false"), ("fgf", "|")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
        assert_eq!(pairs, expected);

        let options = Options::from_arguments(pairs);
        assert!(!options.multiplier_tag);
        assert_eq!(options.name, "A=B");
    }

    #[test]
    fn query_values_are_percent_decoded() {
        let cli = cli(&["--args", "fgf=%20|%20&name=%E6%9C%BA%E5%9C%BA&sn=%zz", "-a", "blkey=%20"]);
        let pairs = collect_arguments(&cli).unwrap();
        let values: Vec<&str> = pairs.iter().map(|(_, v)| v.as_str()).collect();
        assert_eq!(values, vec![" | ", "机场", "%zz", "%20"]);

        let options = Options::from_arguments(pairs);
        assert_eq!(options.separator, " | ");
    }

    #[test]
    fn invalid_utf8_escapes_are_usage_errors() {
        let err = collect_arguments(&cli(&["--args", "name=%FF"])).unwrap_err();
        assert!(matches!(err, CliError::BadEncoding(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn arguments_without_a_key_are_usage_errors() {
        for bad in ["flag", "=true"] {
            let err = collect_arguments(&cli(&["-a", bad])).unwrap_err();
            assert!(matches!(err, CliError::BadArgument(_)), "{bad:?}");
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn records_round_trip_through_json() {
        let records: Vec<ProxyRecord> =
            serde_json::from_str(r#"[{"name":"HK 01","type":"ss","port":443,"block-quic":"on"}]"#).unwrap();
        let out = rename_verbose_with(records, &Options::default()).records;
        let json = serde_json::to_string(&out).unwrap();
        assert_eq!(json, r#"[{"name":"香港 01","type":"ss","port":443}]"#);
    }
}

//! Logisim memory image converter CLI.
//!
//! This binary converts a Logisim `v3.0 hex words addressed` export into a word list
//! with one 32-bit word per line (8 lowercase hex digits). It performs:
//! 1. **Parsing:** Reads the whole export and collects the addressed words.
//! 2. **Windowing:** Selects `--count` words from `--start`, optionally zero-filling gaps.
//! 3. **Reporting:** Prints a one-line summary, and the full statistics with `--stats`.

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

use logihex_core::{Config, Error, convert};

#[derive(Parser, Debug)]
#[command(
    name = "logihex",
    author,
    version,
    about = "Convert a Logisim 'v3.0 hex words addressed' image into one word per line",
    long_about = "Convert a Logisim 'v3.0 hex words addressed' .hex image into a .txt file with one \
                  32-bit word per line, 8 lowercase hex digits (e.g. 01400513), for $readmemh.\n\n\
                  Examples:\n  logihex mem.hex instruction.txt --start 0 --count 6\n  \
                  logihex mem.hex all_words.txt\n  \
                  logihex mem.hex data.txt --start 0x400 --count 256 --fill-missing"
)]
struct Cli {
    /// Logisim .hex input (v3.0 hex words addressed).
    input_hex: PathBuf,

    /// Output .txt (one word per line).
    output_txt: PathBuf,

    /// Start word address (decimal, 0x, 0o or 0b).
    #[arg(long, value_parser = parse_address, default_value = "0")]
    start: u64,

    /// How many words to write. Default: everything from start to the highest address.
    #[arg(long, value_parser = parse_count, allow_negative_numbers = true)]
    count: Option<i64>,

    /// Fill holes with 00000000 instead of skipping them.
    #[arg(long)]
    fill_missing: bool,

    /// Print conversion statistics after the summary line.
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v info, -vv debug). Overrides RUST_LOG.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config {
        start: cli.start,
        count: cli.count,
        fill_missing: cli.fill_missing,
    };

    match convert(&cli.input_hex, &cli.output_txt, &config) {
        Ok(summary) => {
            info!(stats = %summary.stats, "conversion finished");
            println!("{summary}");
            if cli.stats {
                print!("{}", summary.stats.render());
            }
        }
        Err(e @ Error::EmptyImage) => {
            eprintln!("{e}");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `-v` flags pick the level directly; otherwise `RUST_LOG` is honoured, falling back
/// to warnings only.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parses an integer literal the way the address options accept them.
///
/// Accepts decimal and `0x`/`0o`/`0b` prefixed literals with `_` digit separators.
/// Decimal literals other than zero may not have leading zeros.
fn parse_address(s: &str) -> Result<u64, String> {
    let s = s.trim();
    let s = s.strip_prefix('+').unwrap_or(s);
    if s.starts_with('-') {
        return Err("address must not be negative".to_owned());
    }

    let lower = s.to_ascii_lowercase();
    let (radix, digits) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest.strip_prefix('_').unwrap_or(rest))
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest.strip_prefix('_').unwrap_or(rest))
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest.strip_prefix('_').unwrap_or(rest))
    } else {
        (10, lower.as_str())
    };

    let digits = strip_separators(digits).ok_or_else(|| format!("invalid integer '{s}'"))?;
    let padded_decimal =
        radix == 10 && digits.starts_with('0') && digits.bytes().any(|b| b != b'0');
    if padded_decimal {
        return Err(format!(
            "leading zeros are not allowed in decimal '{s}'; use 0o for octal"
        ));
    }
    u64::from_str_radix(&digits, radix).map_err(|e| format!("invalid integer '{s}': {e}"))
}

/// Parses a signed decimal count. Zero or negative counts select an empty window.
fn parse_count(s: &str) -> Result<i64, String> {
    let s = s.trim();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.strip_prefix('+').unwrap_or(s)),
    };
    let digits = strip_separators(digits).ok_or_else(|| format!("invalid count '{s}'"))?;
    format!("{sign}{digits}")
        .parse::<i64>()
        .map_err(|e| format!("invalid count '{s}': {e}"))
}

/// Removes `_` separators, rejecting leading, trailing or doubled ones.
fn strip_separators(digits: &str) -> Option<String> {
    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
        || !digits.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
    {
        return None;
    }
    Some(digits.replace('_', ""))
}

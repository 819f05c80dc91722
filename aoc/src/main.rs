//! `aoc`: solve or self-test puzzle inputs with the shared toolkit.
//!
//! With an input path the answers are printed. Without one the built-in
//! (or `--sample`) sample is solved and checked against its expected answers.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::debug;

use aoc::core::delimiters::DelimiterSet;
use aoc::exit_codes;
use aoc::harness::{Mode, Outcome, run_puzzle};
use aoc::io::sample::load_sample;
use aoc::io::source::{STDIN_PATH, acquire};
use aoc::logging;
use aoc::stats::{Stats, default_sample};
use aoc::timer::Timer;

const DEFAULT_DELIMS: &str = " \\t\\r\\n";

#[derive(Parser)]
#[command(
    name = "aoc",
    version,
    about = "Zero-copy puzzle input toolkit"
)]
struct Cli {
    /// Print elapsed wall-clock time to stderr.
    #[arg(long, global = true)]
    time: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sum integer tokens (part 1) and count non-empty lines (part 2).
    Stats {
        /// Input file (`-` for stdin). Omit to run the self-test.
        path: Option<PathBuf>,
        /// Self-test sample (TOML) to use instead of the built-in one.
        #[arg(long, conflicts_with = "path")]
        sample: Option<PathBuf>,
    },
    /// Print each token of the input in brackets, one per line.
    Tokens {
        /// Input file (`-` or omitted for stdin).
        path: Option<PathBuf>,
        /// Delimiter bytes; understands `\n`, `\r`, `\t` and `\\`.
        #[arg(long, default_value = DEFAULT_DELIMS)]
        delims: String,
        /// Print empty tokens between adjacent delimiters.
        #[arg(long)]
        keep_empty: bool,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print().context("print usage")?;
            // `--help` and `--version` go to stdout and are not failures.
            return Ok(if err.use_stderr() {
                exit_codes::INVALID
            } else {
                exit_codes::OK
            });
        }
    };
    let _timer = cli.time.then(|| Timer::announce(None));
    match cli.command {
        Command::Stats { path, sample } => cmd_stats(path, sample.as_deref()),
        Command::Tokens {
            path,
            delims,
            keep_empty,
        } => cmd_tokens(path, &delims, keep_empty),
    }
}

fn cmd_stats(path: Option<PathBuf>, sample: Option<&Path>) -> Result<i32> {
    let mode = match (path, sample) {
        (Some(path), _) => Mode::File(path),
        (None, Some(sample)) => Mode::SelfTest(load_sample(sample)?),
        (None, None) => Mode::SelfTest(default_sample().context("built-in sample")?),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = run_puzzle(&Stats, &mode, &mut out)?;
    out.flush().context("flush stdout")?;
    debug!(?outcome, "stats finished");

    Ok(match outcome {
        Outcome::Solved | Outcome::Verified => exit_codes::OK,
        Outcome::Mismatch => exit_codes::MISMATCH,
    })
}

fn cmd_tokens(path: Option<PathBuf>, delims: &str, keep_empty: bool) -> Result<i32> {
    let delims = DelimiterSet::new(&unescape_delims(delims)?);
    let path = path.unwrap_or_else(|| PathBuf::from(STDIN_PATH));
    let source = acquire(&path)?;

    let mut out = BufWriter::new(std::io::stdout().lock());
    let tokens = if keep_empty {
        source.view().fields(&delims)
    } else {
        source.view().tokens(&delims)
    };
    for token in tokens {
        out.write_all(b"[")
            .and_then(|()| out.write_all(token.as_bytes()))
            .and_then(|()| out.write_all(b"]\n"))
            .context("write token")?;
    }
    out.flush().context("flush stdout")?;
    Ok(exit_codes::OK)
}

/// Expand `\n`, `\r`, `\t` and `\\` in a delimiter argument.
fn unescape_delims(raw: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(raw.len());
    let mut iter = raw.bytes();
    while let Some(byte) = iter.next() {
        if byte != b'\\' {
            bytes.push(byte);
            continue;
        }
        match iter.next() {
            Some(b'n') => bytes.push(b'\n'),
            Some(b'r') => bytes.push(b'\r'),
            Some(b't') => bytes.push(b'\t'),
            Some(b'\\') => bytes.push(b'\\'),
            Some(other) => bail!("unknown escape \\{} in delimiters", other.escape_ascii()),
            None => bail!("dangling \\ at end of delimiters"),
        }
    }
    if bytes.is_empty() {
        bail!("delimiters must not be empty");
    }
    Ok(bytes)
}

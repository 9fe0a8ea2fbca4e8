use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use mygrep::parse;

/// Environment variable holding the log filter, e.g. `MYGREP_LOG=trace`.
const LOG_ENV: &str = "MYGREP_LOG";

/// Search a single line read from stdin for a pattern
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern to search for
    #[arg(
        short = 'E',
        long = "extended-regexp",
        value_name = "PATTERN",
        allow_hyphen_values = true
    )]
    pattern: String,

    /// Print only the matched part of the line
    #[arg(short = 'o', long)]
    only_matching: bool,
}

/// Outcome of a run, mapped onto grep's exit statuses.
enum Outcome {
    Matched,
    NoMatch,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    match run(&args) {
        Ok(Outcome::Matched) => ExitCode::SUCCESS,
        Ok(Outcome::NoMatch) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> anyhow::Result<Outcome> {
    let program = parse(&args.pattern)?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .context("read input line")?;
    let line: Vec<char> = strip_newline(&input).chars().collect();
    tracing::debug!(chars = line.len(), "read input line");

    let Some(m) = program.find(&line) else {
        return Ok(Outcome::NoMatch);
    };
    if args.only_matching {
        let matched: String = line[m.start..m.end].iter().collect();
        println!("{matched}");
    }
    Ok(Outcome::Matched)
}

/// Drop one trailing `\n` or `\r\n`.
fn strip_newline(s: &str) -> &str {
    s.strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(s)
}

//! `stones`: run the stone rewrite simulation over an input file.
//!
//! ```text
//! stones input.txt 75          # initial + final histograms and total
//! stones input.txt 75 --quiet  # total only
//! stones input.txt 25 -vv      # per-round debug logs on stderr
//! ```
//!
//! Exit codes: 0 on success, 1 on input or configuration errors, 2 when a
//! round overflows.

use std::fmt;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stones_core::RunError;
use stones_engine::{ConfigError, HistogramPropagator, SimConfig};
use stones_io::{
    read_values, render_section, render_total, tally, InputError, HEADER_END, HEADER_INITIAL,
};

/// Simulate stones that split and multiply each round.
#[derive(Parser, Debug)]
#[command(name = "stones")]
#[command(version)]
#[command(about = "Count stones after a number of rewrite rounds")]
struct Cli {
    /// File of whitespace-separated non-negative integers.
    input: PathBuf,

    /// Number of rounds to apply.
    iterations: u32,

    /// Print only the final total.
    #[arg(short, long)]
    quiet: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match run(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            tracing::warn!(error = %failure, "run failed");
            eprintln!("error: {failure}");
            ExitCode::from(failure.exit_code())
        }
    }
}

// ── Failure ─────────────────────────────────────────────────────

/// Everything that can stop a run, mapped to an exit code.
#[derive(Debug)]
enum Failure {
    Input(InputError),
    Config(ConfigError),
    Overflow(RunError),
    Output(io::Error),
}

impl Failure {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Overflow(_) => 2,
            Self::Input(_) | Self::Config(_) | Self::Output(_) => 1,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Overflow(e) => write!(f, "simulation overflowed in {e}"),
            Self::Output(e) => write!(f, "writing output: {e}"),
        }
    }
}

impl From<InputError> for Failure {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

impl From<ConfigError> for Failure {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<RunError> for Failure {
    fn from(e: RunError) -> Self {
        Self::Overflow(e)
    }
}

impl From<io::Error> for Failure {
    fn from(e: io::Error) -> Self {
        Self::Output(e)
    }
}

// ── run ─────────────────────────────────────────────────────────

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), Failure> {
    let initial = tally(read_values(&cli.input)?);
    tracing::info!(
        path = %cli.input.display(),
        distinct = initial.len(),
        rounds = cli.iterations,
        "loaded input"
    );

    let config = SimConfig {
        rounds: cli.iterations,
        collect_metrics: false,
        ..SimConfig::default()
    };
    let mut propagator = HistogramPropagator::new(config)?;

    if !cli.quiet {
        render_section(out, HEADER_INITIAL, &initial)?;
    }

    let report = propagator.run_with_report(initial)?;

    if cli.quiet {
        writeln!(out, "{}", report.total)?;
    } else {
        render_section(out, HEADER_END, &report.histogram)?;
        render_total(out, report.total)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_positional_and_flags() {
        let cli = Cli::try_parse_from(["stones", "input.txt", "75", "-q", "-vv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("input.txt"));
        assert_eq!(cli.iterations, 75);
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_negative_iterations() {
        assert!(Cli::try_parse_from(["stones", "input.txt", "-3"]).is_err());
    }

    fn write_input(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("stones-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn cli(input: PathBuf, iterations: u32, quiet: bool) -> Cli {
        Cli {
            input,
            iterations,
            quiet,
            verbose: 0,
        }
    }

    fn output(cli: &Cli) -> Result<String, Failure> {
        let mut buf = Vec::new();
        run(cli, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn quiet_prints_only_the_total() {
        let path = write_input("quiet.txt", "125 17\n");
        assert_eq!(output(&cli(path, 25, true)).unwrap(), "55312\n");
    }

    #[test]
    fn full_output_has_both_sections_and_total() {
        let path = write_input("full.txt", "125 17\n");
        assert_eq!(
            output(&cli(path, 1, false)).unwrap(),
            "~~INITIAL HISTOGRAM~~\n{17, 1}\n{125, 1}\n\
             ~~END HISTOGRAM~~\n{1, 1}\n{7, 1}\n{253000, 1}\n\
             ~~Total Count~~\n3\n"
        );
    }

    #[test]
    fn missing_file_exits_with_one() {
        let failure = output(&cli("/nonexistent/stones/input.txt".into(), 25, true)).unwrap_err();
        assert!(matches!(failure, Failure::Input(InputError::Io { .. })), "{failure}");
        assert_eq!(failure.exit_code(), 1);
    }

    #[test]
    fn overflowing_value_exits_with_two() {
        let path = write_input("overflow.txt", "1000000000000000000\n");
        let failure = output(&cli(path, 3, true)).unwrap_err();
        match &failure {
            Failure::Overflow(e) => {
                assert_eq!(e.round, stones_core::RoundId(1));
                assert_eq!(
                    e.kind,
                    stones_core::StepError::ValueOverflow {
                        value: 1_000_000_000_000_000_000
                    }
                );
            }
            other => panic!("expected overflow, got {other}"),
        }
        assert_eq!(failure.exit_code(), 2);
    }
}

/*
 * SPDX-FileCopyrightText: 2026 seqrank authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Command-line interface structs, functions, and methods.
//!
//! Each command is implemented as a submodule.

use crate::rank::ConfigError;
use anyhow::{anyhow, bail, ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::time::Duration;

pub mod pagerank;

pub mod build_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));

    /// Returns the package version followed by the commit and build
    /// environment.
    pub fn version_string() -> String {
        let commit = GIT_COMMIT_HASH_SHORT.unwrap_or("unknown commit");
        let dirty = if GIT_DIRTY == Some(true) { "-dirty" } else { "" };
        format!(
            "{PKG_VERSION} ({commit}{dirty}, {TARGET}, built {BUILT_TIME_UTC} with {RUSTC_VERSION})"
        )
    }
}

/// Parses the number of threads from a string.
///
/// This function is meant to be used with `#[arg(...,  value_parser =
/// num_threads_parser)]`.
pub fn num_threads_parser(arg: &str) -> Result<usize> {
    let num_threads = arg.parse::<usize>()?;
    ensure!(num_threads > 0, "Number of threads must be greater than 0");
    Ok(num_threads)
}

/// Parses a number of iterations from a string.
///
/// Negative values are reported as [`ConfigError::NegativeIterations`].
pub fn iterations_parser(arg: &str) -> Result<usize> {
    let iterations = arg.trim().parse::<i64>()?;
    if iterations < 0 {
        return Err(ConfigError::NegativeIterations(iterations).into());
    }
    Ok(usize::try_from(iterations)?)
}

/// Parses a damping factor from a string.
///
/// Values outside the open interval (0 . . 1) are reported as
/// [`ConfigError::DampingFactor`].
pub fn damping_factor_parser(arg: &str) -> Result<f64> {
    let alpha = arg.trim().parse::<f64>()?;
    // Also rejects NaN
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(ConfigError::DampingFactor(alpha).into());
    }
    Ok(alpha)
}

/// Shared CLI arguments for commands that specify a number of threads.
#[derive(Args, Debug)]
pub struct NumThreadsArg {
    #[arg(short = 'j', long, default_value_t = rayon::current_num_threads().max(1), value_parser = num_threads_parser)]
    /// The number of threads to use.
    pub num_threads: usize,
}

/// Creates a [`ThreadPool`](rayon::ThreadPool) with the given number of threads.
pub fn get_thread_pool(num_threads: usize) -> Result<rayon::ThreadPool> {
    let thread_pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| anyhow!("Failed to create thread pool: {e}"))?;
    log::info!("Using {} threads", thread_pool.current_num_threads());
    Ok(thread_pool)
}

/// Parses a duration such as `1m30s` or `1d2h3m4s567`.
///
/// Each number is followed by a unit among `d` (days), `h` (hours), `m`
/// (minutes), and `s` (seconds); a final number without unit is in
/// milliseconds.
fn parse_duration(value: &str) -> Result<Duration> {
    let mut rest = value.trim();
    ensure!(
        !rest.is_empty(),
        "Empty duration; use 0 to log at every update"
    );
    let mut millis = 0u64;
    while !rest.is_empty() {
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        ensure!(digits > 0, "Missing number before {rest:?} in {value:?}");
        let amount = rest[..digits].parse::<u64>()?;
        rest = rest[digits..].trim_start();
        let unit = match rest.chars().next() {
            None => 1,
            Some(c) => {
                rest = rest[c.len_utf8()..].trim_start();
                match c {
                    's' => 1_000,
                    'm' => 60_000,
                    'h' => 3_600_000,
                    'd' => 86_400_000,
                    _ => bail!("Invalid duration unit {c:?} in {value:?}"),
                }
            }
        };
        millis = amount
            .checked_mul(unit)
            .and_then(|x| x.checked_add(millis))
            .with_context(|| format!("Duration {value:?} is too long"))?;
    }
    Ok(Duration::from_millis(millis))
}

/// Initializes `env_logger` with the default filter `info`.
///
/// Each record starts with a timestamp and the time elapsed since
/// initialization.
pub fn init_env_logger() -> Result<()> {
    use jiff::fmt::friendly::{Designator, Spacing, SpanPrinter};

    let start = std::time::Instant::now();
    let printer = SpanPrinter::new()
        .spacing(Spacing::None)
        .designator(Designator::Compact);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            let elapsed = jiff::SignedDuration::from_millis(start.elapsed().as_millis() as i64);
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "{} {} {style}{}{style:#} [{:?}] {} - {}",
                jiff::Timestamp::now().strftime("%F %T%.3f"),
                printer.duration_to_string(&elapsed),
                record.level(),
                std::thread::current().id(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;
    Ok(())
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    #[arg(long, value_parser = parse_duration, global=true, display_order = 1000)]
    /// How often to log progress. Default is 10s. You can use the suffixes "s"
    /// for seconds, "m" for minutes, "h" for hours, and "d" for days. If no
    /// suffix is provided it is assumed to be in milliseconds.
    /// Example: "1d2h3m4s567" is parsed as 1 day + 2 hours + 3 minutes + 4
    /// seconds + 567 milliseconds = 93784567 milliseconds.
    pub log_interval: Option<Duration>,
}

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    #[clap(name = "pagerank", visible_alias = "pr")]
    PageRank(pagerank::CliArgs),
}

#[derive(Parser, Debug)]
#[command(name = "seqrank", version=build_info::version_string())]
/// Tools computing PageRank on graphs given as adjacency lists.
///
/// Noteworthy environment variables:
///
/// - RUST_LOG: configuration for env_logger
///   <https://docs.rs/env_logger/latest/env_logger/>.
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
    #[clap(flatten)]
    pub args: GlobalArgs,
}

/// The entry point of the command-line interface.
pub fn cli_main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let start = std::time::Instant::now();
    let cli = Cli::parse_from(args);
    match cli.command {
        SubCommands::PageRank(args) => {
            pagerank::main(cli.args, args)?;
        }
    }

    log::info!(
        "The command took {}",
        pretty_print_elapsed(start.elapsed().as_secs_f64())
    );

    Ok(())
}

/// Pretty-prints seconds as hours, minutes, and seconds.
fn pretty_print_elapsed(elapsed: f64) -> String {
    let secs = elapsed as u64;
    let mut result = String::new();
    for (value, unit) in [(secs / 3600, "hour"), (secs / 60 % 60, "minute")] {
        match value {
            0 => {}
            1 => result.push_str(&format!("1 {unit} ")),
            _ => result.push_str(&format!("{value} {unit}s ")),
        }
    }
    result.push_str(&format!("{:.3} seconds ({}s)", elapsed % 60.0, elapsed));
    result
}
